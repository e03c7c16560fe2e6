//! The webhook delivery envelope.
//!
//! Webhook bodies are not bare events: they are either the one-time
//! `url_verification` handshake or an `event_callback` wrapper whose
//! `event` field holds the actual payload. The wrapper is decoded
//! here; the inner event goes through [`decode_event_value`] so the
//! webhook and realtime surfaces resolve event shapes identically.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{snippet, DecodeError, DiscriminatorKind};
use crate::events::{decode_event_value, Event};
use crate::ids::{AppId, TeamId, UserId};
use crate::ts::Timestamp;

/// The `url_verification` handshake sent when a webhook URL is first
/// registered. The caller must echo `challenge` back verbatim.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlVerificationEvent {
    /// Discriminator echo: `"url_verification"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Opaque string to echo back in the HTTP response.
    pub challenge: String,
    /// Legacy verification token.
    pub token: String,
}

/// An `event_callback` wrapper: delivery metadata around one event.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EventCallbackEvent {
    /// Discriminator echo: `"event_callback"`.
    pub event_type: String,
    /// Legacy verification token.
    pub token: String,
    /// Workspace the event happened in.
    pub team_id: TeamId,
    /// The receiving app.
    pub api_app_id: AppId,
    /// The wrapped event, decoded through the shared catalog.
    pub event: Event,
    /// Unique delivery identifier (`Ev…`).
    pub event_id: String,
    /// Delivery time.
    pub event_time: Option<Timestamp>,
    /// Users on whose behalf the app receives this event.
    pub authed_users: Vec<UserId>,
}

/// A decoded webhook body.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Envelope {
    /// The registration handshake.
    UrlVerification(UrlVerificationEvent),
    /// A wrapped event delivery.
    EventCallback(Box<EventCallbackEvent>),
}

/// The wrapper's own fields, with the inner event left unparsed for
/// the second pass.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CallbackWire {
    token: String,
    team_id: TeamId,
    api_app_id: AppId,
    event: Option<Value>,
    event_id: String,
    event_time: Option<Timestamp>,
    authed_users: Vec<UserId>,
}

/// Decode one webhook body.
///
/// # Errors
///
/// [`DecodeError::EmptyPayload`] for an empty body (abnormal on this
/// surface; callers report it rather than skip it),
/// [`DecodeError::Malformed`] for syntax/structural failures including
/// a failed inner event decode, and [`DecodeError::UnknownType`] when
/// the outer `type` or the inner event discriminator is unregistered.
pub fn decode_envelope(raw: &[u8]) -> Result<Envelope, DecodeError> {
    let raw = raw.trim_ascii();
    if raw.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }
    let value: Value = serde_json::from_slice(raw).map_err(|e| {
        DecodeError::malformed_with(format!("invalid JSON in {}", snippet(raw)), e)
    })?;
    let kind = match value.get("type").and_then(Value::as_str) {
        Some(kind) => kind.to_owned(),
        None => {
            return Err(DecodeError::malformed(format!(
                "missing string \"type\" in envelope {}",
                snippet(raw)
            )));
        }
    };
    match kind.as_str() {
        "url_verification" => {
            let handshake = serde_json::from_value(value).map_err(|e| {
                DecodeError::malformed_with("failed to decode url_verification handshake", e)
            })?;
            Ok(Envelope::UrlVerification(handshake))
        }
        "event_callback" => {
            let wire: CallbackWire = serde_json::from_value(value).map_err(|e| {
                DecodeError::malformed_with("failed to decode event_callback envelope", e)
            })?;
            let inner = wire
                .event
                .ok_or_else(|| DecodeError::malformed("event_callback without an \"event\""))?;
            let event = decode_event_value(inner)?;
            Ok(Envelope::EventCallback(Box::new(EventCallbackEvent {
                event_type: kind,
                token: wire.token,
                team_id: wire.team_id,
                api_app_id: wire.api_app_id,
                event,
                event_id: wire.event_id,
                event_time: wire.event_time,
                authed_users: wire.authed_users,
            })))
        }
        _ => Err(DecodeError::unknown(DiscriminatorKind::Type, kind)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn url_verification_carries_the_challenge_verbatim() {
        let envelope = decode_envelope(
            br#"{
                "token": "Jhj5dZrVaK7ZwHHjRyZWjbDl",
                "challenge": "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P",
                "type": "url_verification"
            }"#,
        )
        .unwrap();
        assert_matches!(envelope, Envelope::UrlVerification(v) => {
            assert_eq!(v.challenge, "3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P");
        });
    }

    #[test]
    fn event_callback_routes_the_inner_event_through_the_catalog() {
        let envelope = decode_envelope(
            br#"{
                "token": "XXYYZZ",
                "team_id": "T123ABC456",
                "api_app_id": "A123ABC456",
                "event": {
                    "type": "reaction_added",
                    "user": "U024BE7LH",
                    "reaction": "thumbsup",
                    "item": {"type": "message", "channel": "C0G9QF9GZ", "ts": "1360782400.498405"}
                },
                "type": "event_callback",
                "event_id": "Ev123ABC456",
                "event_time": 1234567890,
                "authed_users": ["U123ABC456"]
            }"#,
        )
        .unwrap();
        assert_matches!(envelope, Envelope::EventCallback(cb) => {
            assert_eq!(cb.event_id, "Ev123ABC456");
            assert_eq!(cb.event_time.unwrap().seconds(), 1_234_567_890);
            assert_matches!(cb.event, Event::ReactionAdded(ref ev) => {
                assert_eq!(ev.reaction, "thumbsup");
            });
        });
    }

    #[test]
    fn inner_decode_matches_the_direct_path() {
        let inner = br#"{"type": "user_typing", "channel": "C1234", "user": "U1234"}"#;
        let direct = crate::events::decode_event(inner).unwrap();
        let body = format!(
            r#"{{"type": "event_callback", "team_id": "T1", "event": {}}}"#,
            std::str::from_utf8(inner).unwrap()
        );
        let enveloped = decode_envelope(body.as_bytes()).unwrap();
        assert_matches!(enveloped, Envelope::EventCallback(cb) => {
            assert_eq!(cb.event, direct);
        });
    }

    #[test]
    fn empty_body_is_its_own_error() {
        assert_matches!(decode_envelope(b"  "), Err(DecodeError::EmptyPayload));
    }

    #[test]
    fn missing_outer_type_is_malformed() {
        let err = decode_envelope(br#"{"event": {"type": "hello"}}"#).unwrap_err();
        assert_matches!(err, DecodeError::Malformed { .. });
    }

    #[test]
    fn unexpected_outer_type_is_unknown() {
        let err = decode_envelope(br#"{"type": "app_rate_limited_callback"}"#).unwrap_err();
        assert_matches!(
            err,
            DecodeError::UnknownType { kind: DiscriminatorKind::Type, ref value }
                if value == "app_rate_limited_callback"
        );
    }

    #[test]
    fn unknown_inner_event_type_propagates() {
        let err = decode_envelope(
            br#"{"type": "event_callback", "event": {"type": "romulan_ale_review"}}"#,
        )
        .unwrap_err();
        assert_matches!(
            err,
            DecodeError::UnknownType { kind: DiscriminatorKind::Type, ref value }
                if value == "romulan_ale_review"
        );
    }
}
