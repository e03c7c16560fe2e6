//! Catalog-wide decode coverage driven by the generated wire tables.

use assert_matches::assert_matches;
use slackline_events::events::{
    decode_event, Event, EVENT_TYPES, MESSAGE_CHANNEL_TYPES, MESSAGE_SUBTYPES,
};
use slackline_events::{decode_envelope, DecodeError, Envelope};

/// Every registered `type` decodes from the minimal payload carrying
/// only its discriminator, and echoes it back.
#[test]
fn every_registered_type_decodes_from_a_minimal_payload() {
    for kind in EVENT_TYPES {
        let raw = format!(r#"{{"type": "{kind}"}}"#);
        let event = decode_event(raw.as_bytes())
            .unwrap_or_else(|e| panic!("type {kind:?} failed: {e}"));
        assert_eq!(event.event_type(), *kind);
    }
}

#[test]
fn every_registered_subtype_decodes_from_a_minimal_payload() {
    for subtype in MESSAGE_SUBTYPES {
        let raw = format!(r#"{{"type": "message", "subtype": "{subtype}"}}"#);
        let event = decode_event(raw.as_bytes())
            .unwrap_or_else(|e| panic!("subtype {subtype:?} failed: {e}"));
        assert_eq!(event.event_type(), "message");
    }
}

#[test]
fn every_registered_channel_type_decodes_from_a_minimal_payload() {
    for channel_type in MESSAGE_CHANNEL_TYPES {
        let raw = format!(r#"{{"type": "message", "channel_type": "{channel_type}"}}"#);
        let event = decode_event(raw.as_bytes())
            .unwrap_or_else(|e| panic!("channel_type {channel_type:?} failed: {e}"));
        assert_eq!(event.event_type(), "message");
    }
}

#[test]
fn wire_tables_have_no_duplicate_entries() {
    let mut seen = std::collections::HashSet::new();
    for kind in EVENT_TYPES {
        assert!(seen.insert(*kind), "duplicate type {kind:?}");
    }
    seen.clear();
    for subtype in MESSAGE_SUBTYPES {
        assert!(seen.insert(*subtype), "duplicate subtype {subtype:?}");
    }
    seen.clear();
    for channel_type in MESSAGE_CHANNEL_TYPES {
        assert!(seen.insert(*channel_type), "duplicate channel_type {channel_type:?}");
    }
}

/// Deep polymorphic nesting: envelope → event → view → block →
/// element, each level resolved through its own discriminator.
#[test]
fn app_home_opened_decodes_through_every_nesting_level() {
    let envelope = decode_envelope(
        br#"{
            "type": "event_callback",
            "team_id": "T061EG9R6",
            "api_app_id": "A0MDYCDME",
            "event_id": "Ev0MDYGDKJ",
            "event_time": 1515449522,
            "event": {
                "type": "app_home_opened",
                "user": "U061F7AUR",
                "channel": "D0LAN2Q65",
                "tab": "home",
                "event_ts": "1515449522000016",
                "view": {
                    "id": "VPASKP233",
                    "team_id": "T21312902",
                    "type": "home",
                    "blocks": [
                        {
                            "type": "input",
                            "block_id": "name-block",
                            "label": {"type": "plain_text", "text": "Your name"},
                            "element": {
                                "type": "plain_text_input",
                                "action_id": "name-input",
                                "multiline": false
                            }
                        },
                        {"type": "divider"}
                    ]
                }
            }
        }"#,
    )
    .unwrap();

    let Envelope::EventCallback(cb) = envelope else {
        panic!("expected event_callback");
    };
    let Event::AppHomeOpened(home) = cb.event else {
        panic!("expected app_home_opened, got {:?}", cb.event.event_type());
    };
    let view = home.view.expect("view");
    assert_eq!(view.view_type, "home");
    assert_eq!(view.blocks.len(), 2);

    let slackline_events::blocks::Block::Input(input) = &view.blocks[0] else {
        panic!("expected input block");
    };
    assert_eq!(input.block_id.as_deref(), Some("name-block"));
    let element = input.element.as_ref().expect("element");
    assert_matches!(
        element,
        slackline_events::elements::BlockElement::PlainTextInput(t) => {
            assert_eq!(t.action_id, "name-input");
            assert!(!t.multiline);
        }
    );
}

/// A realistic full-fat fixture with nested timestamps and ids.
#[test]
fn realistic_reaction_added_round_trips_its_timestamps() {
    let raw = br#"{
        "type": "reaction_added",
        "user": "U024BE7LH",
        "reaction": "thumbsup",
        "item_user": "U0G9QF9C6",
        "item": {
            "type": "message",
            "channel": "C0G9QF9GZ",
            "ts": "1360782400.498405"
        },
        "event_ts": "1360782804.083113"
    }"#;
    let event = decode_event(raw).unwrap();
    let Event::ReactionAdded(ev) = event else {
        panic!("wrong variant");
    };
    assert_eq!(ev.user.as_str(), "U024BE7LH");
    assert_eq!(ev.item.ts.as_ref().unwrap().as_str(), "1360782400.498405");
    assert_eq!(ev.item.ts.as_ref().unwrap().seconds(), 1_360_782_400);

    // Re-encoding preserves the verbatim wire text of both stamps.
    let json = serde_json::to_value(&Event::ReactionAdded(ev)).unwrap();
    assert_eq!(json["item"]["ts"], "1360782400.498405");
    assert_eq!(json["event_ts"], "1360782804.083113");
}

#[test]
fn unregistered_discriminators_keep_their_error_identity() {
    assert_matches!(
        decode_event(br#"{"type": "quantum_filament"}"#),
        Err(DecodeError::UnknownType { ref value, .. }) if value == "quantum_filament"
    );
    assert_matches!(
        decode_event(br#"{"type": "message", "subtype": "quantum_filament"}"#),
        Err(DecodeError::UnknownType { ref value, .. }) if value == "quantum_filament"
    );
    assert_matches!(
        decode_event(br#"{"type": "message", "channel_type": "quantum_filament"}"#),
        Err(DecodeError::UnknownType { ref value, .. }) if value == "quantum_filament"
    );
}
