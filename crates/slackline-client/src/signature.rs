//! Webhook request signature verification.
//!
//! The platform signs each webhook delivery with
//! `HMAC-SHA256(secret, "v0:{timestamp}:{body}")`, sent as
//! `v0={hex}` in the `X-Slack-Signature` header alongside
//! `X-Slack-Request-Timestamp`. Verification recomputes the MAC and
//! compares in constant time, and rejects stale timestamps to bound
//! replay.

use hmac::{Hmac, Mac};
use sha2::Sha256;
use thiserror::Error;

type HmacSha256 = Hmac<Sha256>;

/// Signature version prefix on the wire.
const VERSION: &str = "v0";

/// Maximum accepted age of a request timestamp, in seconds.
const MAX_AGE_SECS: i64 = 60 * 5;

/// Signature verification failures.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// The header is not `v0=<hex>`.
    #[error("invalid signature format")]
    InvalidFormat,

    /// The recomputed MAC does not match.
    #[error("signature mismatch")]
    Mismatch,

    /// The request timestamp is outside the replay window.
    #[error("request timestamp outside the replay window")]
    StaleTimestamp,
}

/// Signs and verifies webhook request signatures over one signing
/// secret.
#[derive(Clone)]
pub struct SignatureVerifier {
    secret: Vec<u8>,
}

impl std::fmt::Debug for SignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignatureVerifier")
            .field("secret", &"<redacted>")
            .finish()
    }
}

impl SignatureVerifier {
    /// Build over a signing secret.
    #[must_use]
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Build from the `SLACK_SIGNING_SECRET` environment variable.
    pub fn from_env() -> crate::error::Result<Self> {
        let secret = std::env::var("SLACK_SIGNING_SECRET").map_err(|_| {
            crate::error::ClientError::Config("SLACK_SIGNING_SECRET is not set".to_owned())
        })?;
        Ok(Self::new(secret))
    }

    /// Compute the `v0=<hex>` signature for a timestamp/body pair.
    #[must_use]
    pub fn sign(&self, timestamp: &str, body: &[u8]) -> String {
        let mut mac = self.mac();
        mac.update(VERSION.as_bytes());
        mac.update(b":");
        mac.update(timestamp.as_bytes());
        mac.update(b":");
        mac.update(body);
        format!("{VERSION}={}", hex::encode(mac.finalize().into_bytes()))
    }

    /// Verify a received signature against a timestamp/body pair,
    /// without a replay-window check.
    pub fn verify(
        &self,
        signature: &str,
        timestamp: &str,
        body: &[u8],
    ) -> Result<(), SignatureError> {
        let hex_digest = signature
            .strip_prefix("v0=")
            .ok_or(SignatureError::InvalidFormat)?;
        let expected = hex::decode(hex_digest).map_err(|_| SignatureError::InvalidFormat)?;

        let mut mac = self.mac();
        mac.update(VERSION.as_bytes());
        mac.update(b":");
        mac.update(timestamp.as_bytes());
        mac.update(b":");
        mac.update(body);
        // Constant-time comparison.
        mac.verify_slice(&expected)
            .map_err(|_| SignatureError::Mismatch)
    }

    /// Verify a received signature and reject timestamps more than
    /// five minutes from `now_secs` (Unix seconds) in either
    /// direction.
    pub fn verify_with_replay_window(
        &self,
        signature: &str,
        timestamp: &str,
        body: &[u8],
        now_secs: i64,
    ) -> Result<(), SignatureError> {
        let ts: i64 = timestamp
            .parse()
            .map_err(|_| SignatureError::InvalidFormat)?;
        if (now_secs - ts).abs() > MAX_AGE_SECS {
            return Err(SignatureError::StaleTimestamp);
        }
        self.verify(signature, timestamp, body)
    }

    fn mac(&self) -> HmacSha256 {
        // HMAC accepts keys of any length; this cannot fail.
        HmacSha256::new_from_slice(&self.secret).expect("hmac accepts any key length")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const SECRET: &str = "8f742231b10e8888abcd99yyyzzz85a5";

    #[test]
    fn sign_then_verify_round_trips() {
        let verifier = SignatureVerifier::new(SECRET);
        let body = b"token=xyzz0WbapA4vBCDEFasx0q6G&team_id=T1DC2JH3J";
        let signature = verifier.sign("1531420618", body);
        assert!(signature.starts_with("v0="));
        verifier.verify(&signature, "1531420618", body).unwrap();
    }

    #[test]
    fn tampered_body_is_rejected() {
        let verifier = SignatureVerifier::new(SECRET);
        let signature = verifier.sign("1531420618", b"original body");
        assert_matches!(
            verifier.verify(&signature, "1531420618", b"tampered body"),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn tampered_timestamp_is_rejected() {
        let verifier = SignatureVerifier::new(SECRET);
        let signature = verifier.sign("1531420618", b"body");
        assert_matches!(
            verifier.verify(&signature, "1531420619", b"body"),
            Err(SignatureError::Mismatch)
        );
    }

    #[test]
    fn wrong_prefix_and_bad_hex_are_format_errors() {
        let verifier = SignatureVerifier::new(SECRET);
        assert_matches!(
            verifier.verify("v1=deadbeef", "1531420618", b"body"),
            Err(SignatureError::InvalidFormat)
        );
        assert_matches!(
            verifier.verify("v0=not-hex!", "1531420618", b"body"),
            Err(SignatureError::InvalidFormat)
        );
    }

    #[test]
    fn stale_timestamps_are_rejected_before_mac_work() {
        let verifier = SignatureVerifier::new(SECRET);
        let signature = verifier.sign("1531420618", b"body");
        assert_matches!(
            verifier.verify_with_replay_window(&signature, "1531420618", b"body", 1_531_420_618 + 301),
            Err(SignatureError::StaleTimestamp)
        );
        verifier
            .verify_with_replay_window(&signature, "1531420618", b"body", 1_531_420_618 + 299)
            .unwrap();
    }

    #[test]
    fn different_secrets_never_cross_verify() {
        let a = SignatureVerifier::new("secret-a");
        let b = SignatureVerifier::new("secret-b");
        let signature = a.sign("1531420618", b"body");
        assert_matches!(
            b.verify(&signature, "1531420618", b"body"),
            Err(SignatureError::Mismatch)
        );
    }
}
