//! The primary event decoder.
//!
//! Decoding is two-pass: the payload is parsed into a
//! [`serde_json::Value`], the discriminator(s) are peeked, and the
//! value is then decoded into the concrete record the dispatch tables
//! resolve. The message family consults `subtype` first, then
//! `channel_type`, then falls back to the bare shape.

use serde_json::Value;
use tracing::trace;

use super::catalog::{decode_by_channel_type, decode_by_subtype, decode_by_type};
use super::Event;
use crate::error::{snippet, DecodeError, DiscriminatorKind};

/// Decode one raw event payload.
///
/// Pure function: no side effects beyond a trace log on success. The
/// input is trimmed of ASCII whitespace first; an empty payload is the
/// keep-alive framing some transports emit and gets its own error so
/// callers can skip it cheaply.
///
/// # Errors
///
/// [`DecodeError::EmptyPayload`] for whitespace-only input,
/// [`DecodeError::Malformed`] for syntax or structural failures, and
/// [`DecodeError::UnknownType`] when a discriminator has no registered
/// mapping.
pub fn decode_event(raw: &[u8]) -> Result<Event, DecodeError> {
    let raw = raw.trim_ascii();
    if raw.is_empty() {
        return Err(DecodeError::EmptyPayload);
    }
    let value: Value = serde_json::from_slice(raw).map_err(|e| {
        DecodeError::malformed_with(format!("invalid JSON in {}", snippet(raw)), e)
    })?;
    decode_event_value(value)
}

/// Decode an already-parsed event payload.
///
/// This is the shared inner path: [`decode_event`] and the envelope
/// decoder both route through it, so the webhook and realtime
/// surfaces resolve event shapes identically.
///
/// # Errors
///
/// As [`decode_event`], minus `EmptyPayload`.
pub fn decode_event_value(value: Value) -> Result<Event, DecodeError> {
    let kind = match value.get("type").and_then(Value::as_str) {
        Some(kind) => kind.to_owned(),
        None => {
            return Err(DecodeError::malformed(format!(
                "missing string \"type\" in {}",
                snippet(value.to_string().as_bytes())
            )));
        }
    };

    let decoded = if kind == "message" {
        dispatch_message(value)
    } else {
        Ok(match decode_by_type(&kind, value) {
            Some(result) => result,
            None => return Err(DecodeError::unknown(DiscriminatorKind::Type, kind)),
        })
    }?;

    let event = decoded
        .map_err(|e| DecodeError::malformed_with(format!("failed to decode {kind:?} event"), e))?;
    trace!(event_type = %event.event_type(), "decoded event");
    Ok(event)
}

/// Resolve the message family: `subtype`, then `channel_type`, then
/// the bare shape.
fn dispatch_message(value: Value) -> Result<serde_json::Result<Event>, DecodeError> {
    if let Some(subtype) = value.get("subtype").and_then(Value::as_str) {
        let subtype = subtype.to_owned();
        return decode_by_subtype(&subtype, value)
            .ok_or(DecodeError::UnknownType {
                kind: DiscriminatorKind::Subtype,
                value: subtype,
            });
    }
    if let Some(channel_type) = value.get("channel_type").and_then(Value::as_str) {
        let channel_type = channel_type.to_owned();
        return decode_by_channel_type(&channel_type, value)
            .ok_or(DecodeError::UnknownType {
                kind: DiscriminatorKind::ChannelType,
                value: channel_type,
            });
    }
    match decode_by_type("message", value) {
        Some(result) => Ok(result),
        // "message" is always registered; unreachable in practice.
        None => Err(DecodeError::unknown(
            DiscriminatorKind::Type,
            "message".to_owned(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn empty_and_whitespace_payloads_are_distinguished() {
        assert_matches!(decode_event(b""), Err(DecodeError::EmptyPayload));
        assert_matches!(decode_event(b"  \n\t "), Err(DecodeError::EmptyPayload));
    }

    #[test]
    fn syntax_errors_embed_a_snippet() {
        let err = decode_event(b"{\"type\": \"hello\"").unwrap_err();
        assert_matches!(err, DecodeError::Malformed { ref message, .. } => {
            assert!(message.contains("hello"), "{message}");
        });
    }

    #[test]
    fn missing_type_is_malformed_not_unknown() {
        let err = decode_event(br#"{"text": "no discriminator"}"#).unwrap_err();
        assert_matches!(err, DecodeError::Malformed { ref message, .. } => {
            assert!(message.contains("no discriminator"), "{message}");
        });
    }

    #[test]
    fn unknown_type_names_the_offending_value() {
        let err = decode_event(br#"{"type": "transporter_malfunction"}"#).unwrap_err();
        assert_matches!(
            err,
            DecodeError::UnknownType { kind: DiscriminatorKind::Type, ref value }
                if value == "transporter_malfunction"
        );
        assert!(err.to_string().contains("transporter_malfunction"));
    }

    #[test]
    fn unknown_subtype_names_the_offending_value() {
        let err =
            decode_event(br#"{"type": "message", "subtype": "holodeck_message"}"#).unwrap_err();
        assert_matches!(
            err,
            DecodeError::UnknownType { kind: DiscriminatorKind::Subtype, ref value }
                if value == "holodeck_message"
        );
    }

    #[test]
    fn subtype_wins_over_channel_type() {
        let event = decode_event(
            br#"{"type": "message", "subtype": "me_message", "channel_type": "im",
                 "channel": "D1234", "user": "U1234", "text": "waves"}"#,
        )
        .unwrap();
        assert_matches!(event, Event::MeMessage(_));
    }

    #[test]
    fn channel_type_dispatch_covers_all_four_families() {
        for (channel_type, expect_group) in
            [("app_home", false), ("channel", false), ("group", true), ("mpim", true), ("im", false)]
        {
            let raw = format!(
                r#"{{"type": "message", "channel_type": "{channel_type}", "text": "hi"}}"#
            );
            let event = decode_event(raw.as_bytes()).unwrap();
            if expect_group {
                assert_matches!(event, Event::GroupMessage(_));
            }
            assert_eq!(event.event_type(), "message");
        }
    }

    #[test]
    fn bare_message_uses_the_plain_shape() {
        let event = decode_event(
            br#"{"type": "message", "channel": "C1234", "user": "U1234", "text": "hi"}"#,
        )
        .unwrap();
        assert_matches!(event, Event::Message(msg) => {
            assert_eq!(msg.text, "hi");
        });
    }

    #[test]
    fn shared_subtype_shapes_keep_their_echo() {
        let event = decode_event(
            br#"{"type": "message", "subtype": "group_join", "channel": "G1234", "user": "U1234"}"#,
        )
        .unwrap();
        assert_matches!(event, Event::JoinMessage(msg) => {
            assert_eq!(msg.subtype, "group_join");
        });
    }

    #[test]
    fn structural_failure_in_a_known_shape_is_malformed() {
        // "user" must be a string id, not an object.
        let err = decode_event(
            br#"{"type": "user_typing", "channel": "C1234", "user": {"id": "U1"}}"#,
        )
        .unwrap_err();
        assert_matches!(err, DecodeError::Malformed { ref message, source: Some(_) } => {
            assert!(message.contains("user_typing"), "{message}");
        });
    }
}
