//! Star and pin events.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{ChannelId, UserId};
use crate::ts::Timestamp;

/// The starred or pinned item, discriminated by its own `type` field.
/// The embedded message or file is kept opaque; callers needing it
/// re-decode `item`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarredItem {
    /// Target kind: `"message"`, `"file"`, `"file_comment"`,
    /// `"channel"`, `"im"`, or `"group"`.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Conversation of the target.
    pub channel: ChannelId,
    /// Embedded target object, kept opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Value>,
    /// Embedded file object, kept opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<Value>,
}

/// `star_added`: the calling user starred an item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarAddedEvent {
    /// Discriminator echo: `"star_added"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Who starred.
    pub user: UserId,
    /// What was starred.
    pub item: StarredItem,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `star_removed`: the calling user unstarred an item.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarRemovedEvent {
    /// Discriminator echo: `"star_removed"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Who unstarred.
    pub user: UserId,
    /// What was unstarred.
    pub item: StarredItem,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `pin_added`: an item was pinned to a conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinAddedEvent {
    /// Discriminator echo: `"pin_added"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Who pinned.
    pub user: UserId,
    /// Conversation pinned to.
    pub channel_id: ChannelId,
    /// What was pinned.
    pub item: StarredItem,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `pin_removed`: an item was unpinned from a conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinRemovedEvent {
    /// Discriminator echo: `"pin_removed"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Who unpinned.
    pub user: UserId,
    /// Conversation unpinned from.
    pub channel_id: ChannelId,
    /// What was unpinned.
    pub item: StarredItem,
    /// Whether the conversation still has pins.
    pub has_pins: bool,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_removed_reports_remaining_pins() {
        let ev: PinRemovedEvent = serde_json::from_str(
            r#"{
                "type": "pin_removed",
                "user": "U024BE7LH",
                "channel_id": "C02ELGNBH",
                "item": {"type": "message", "channel": "C02ELGNBH"},
                "has_pins": false,
                "event_ts": "1360782804.083113"
            }"#,
        )
        .unwrap();
        assert!(!ev.has_pins);
        assert_eq!(ev.item.item_type, "message");
    }

    #[test]
    fn starred_item_keeps_the_embedded_message_opaque() {
        let ev: StarAddedEvent = serde_json::from_str(
            r#"{
                "type": "star_added",
                "user": "U024BE7LH",
                "item": {
                    "type": "message",
                    "channel": "C02ELGNBH",
                    "message": {"type": "message", "text": "hi", "ts": "1360782400.498405"}
                }
            }"#,
        )
        .unwrap();
        let message = ev.item.message.unwrap();
        assert_eq!(message["text"], "hi");
    }
}
