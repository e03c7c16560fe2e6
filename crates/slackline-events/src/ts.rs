//! The platform wire timestamp.
//!
//! Slack timestamps arrive as strings like `"1355517536.000001"` (or,
//! in a few envelope fields, bare numbers). [`Timestamp`] keeps two
//! representations: the verbatim wire text and a derived second count.
//! The text is authoritative for re-encoding; the seconds are derived
//! and lossy (sub-second digits are dropped) and are never used to
//! reconstruct wire output. Collapsing this into a single native time
//! type would silently break the round-trip guarantee.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A dual-representation platform timestamp.
///
/// Invariant: serializing always emits the original wire text, so
/// `decode` followed by `encode` is byte-for-byte lossless for any
/// accepted string token, including leading zeros and long fractional
/// suffixes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Timestamp {
    raw: String,
    secs: i64,
}

impl Timestamp {
    /// Build a timestamp from a whole second count.
    ///
    /// The wire text becomes the canonical base-10 rendering of the
    /// count. Intended for outbound construction; decoded timestamps
    /// keep whatever text the server sent.
    #[must_use]
    pub fn from_seconds(secs: i64) -> Self {
        Self {
            raw: secs.to_string(),
            secs,
        }
    }

    /// The verbatim wire text. Authoritative for re-encoding.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The derived whole-second count. Lossy: sub-second digits in the
    /// wire text are not represented here.
    #[must_use]
    pub fn seconds(&self) -> i64 {
        self.secs
    }

    /// The derived instant at second precision.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.secs, 0)
    }
}

impl FromStr for Timestamp {
    type Err = String;

    /// Accept a numeric token with an optional single decimal point.
    /// The integer portion before the first `.` must parse as a signed
    /// 64-bit second count; everything after it is carried only in the
    /// verbatim text.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let int_part = raw.split('.').next().unwrap_or(raw);
        let secs = int_part
            .parse::<i64>()
            .map_err(|_| format!("invalid timestamp {raw:?}"))?;
        Ok(Self {
            raw: raw.to_owned(),
            secs,
        })
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Always the original text, never a re-derivation from `secs`.
        serializer.serialize_str(&self.raw)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a timestamp string or number")
    }

    fn visit_str<E>(self, raw: &str) -> Result<Timestamp, E>
    where
        E: de::Error,
    {
        raw.parse().map_err(de::Error::custom)
    }

    fn visit_i64<E>(self, value: i64) -> Result<Timestamp, E>
    where
        E: de::Error,
    {
        Ok(Timestamp::from_seconds(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Timestamp, E>
    where
        E: de::Error,
    {
        let secs = i64::try_from(value)
            .map_err(|_| de::Error::custom(format!("timestamp {value} out of range")))?;
        Ok(Timestamp::from_seconds(secs))
    }

    fn visit_f64<E>(self, value: f64) -> Result<Timestamp, E>
    where
        E: de::Error,
    {
        // Rust's f64 rendering never uses exponent notation, so the
        // rendered token goes through the same string path.
        value.to_string().parse().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_dotted_wire_string() {
        let ts: Timestamp = serde_json::from_str("\"1355517536.000001\"").unwrap();
        assert_eq!(ts.seconds(), 1_355_517_536);
        assert_eq!(ts.as_str(), "1355517536.000001");
    }

    #[test]
    fn parses_integer_wire_string() {
        let ts: Timestamp = serde_json::from_str("\"1355517536\"").unwrap();
        assert_eq!(ts.seconds(), 1_355_517_536);
    }

    #[test]
    fn parses_bare_number() {
        let ts: Timestamp = serde_json::from_str("1355517536").unwrap();
        assert_eq!(ts.seconds(), 1_355_517_536);
        assert_eq!(ts.as_str(), "1355517536");
    }

    #[test]
    fn encode_emits_original_text_verbatim() {
        for wire in ["1355517536.000001", "0001234.5000", "1355517536.", "42"] {
            let ts: Timestamp = wire.parse().unwrap();
            assert_eq!(serde_json::to_string(&ts).unwrap(), format!("\"{wire}\""));
        }
    }

    #[test]
    fn leading_zeros_survive_round_trip() {
        let ts: Timestamp = serde_json::from_str("\"007.25\"").unwrap();
        assert_eq!(ts.seconds(), 7);
        assert_eq!(ts.as_str(), "007.25");
    }

    #[test]
    fn rejects_non_numeric_integer_portion() {
        assert!("abc.123".parse::<Timestamp>().is_err());
        assert!(".5".parse::<Timestamp>().is_err());
        assert!("".parse::<Timestamp>().is_err());
        assert!(serde_json::from_str::<Timestamp>("\"12x4\"").is_err());
    }

    #[test]
    fn derived_instant_has_second_precision() {
        let ts: Timestamp = "1355517536.000001".parse().unwrap();
        let dt = ts.to_datetime().unwrap();
        assert_eq!(dt.timestamp(), 1_355_517_536);
        assert_eq!(dt.timestamp_subsec_nanos(), 0);
    }

    #[test]
    fn from_seconds_round_trips_canonically() {
        let ts = Timestamp::from_seconds(1_355_517_536);
        assert_eq!(ts.as_str(), "1355517536");
    }

    proptest! {
        #[test]
        fn round_trip_is_byte_for_byte(wire in "0{0,3}[0-9]{1,12}(\\.[0-9]{0,9})?") {
            let ts: Timestamp = wire.parse().unwrap();
            prop_assert_eq!(ts.as_str(), wire.as_str());
            let json = serde_json::to_string(&ts).unwrap();
            prop_assert_eq!(json, format!("\"{wire}\""));
            let back: Timestamp = serde_json::from_str(&format!("\"{wire}\"")).unwrap();
            prop_assert_eq!(back, ts);
        }
    }
}
