//! Emoji reaction events.

use serde::{Deserialize, Serialize};

use crate::ids::{ChannelId, CommentId, FileId, UserId};
use crate::ts::Timestamp;

/// The target of a reaction: a message, a file, or a file comment,
/// discriminated by its own `type` field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionItem {
    /// Target kind: `"message"`, `"file"`, or `"file_comment"`.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Conversation of the target message.
    pub channel: ChannelId,
    /// Timestamp of the target message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Target file.
    pub file: FileId,
    /// Target file comment.
    pub file_comment: CommentId,
}

/// `reaction_added`: an emoji reaction was added.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionAddedEvent {
    /// Discriminator echo: `"reaction_added"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Who reacted.
    pub user: UserId,
    /// Emoji shortcode, without colons.
    pub reaction: String,
    /// Author of the reacted-to item.
    pub item_user: UserId,
    /// What was reacted to.
    pub item: ReactionItem,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `reaction_removed`: an emoji reaction was removed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionRemovedEvent {
    /// Discriminator echo: `"reaction_removed"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Who removed their reaction.
    pub user: UserId,
    /// Emoji shortcode, without colons.
    pub reaction: String,
    /// Author of the reacted-to item.
    pub item_user: UserId,
    /// What the reaction was on.
    pub item: ReactionItem,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reaction_added_to_a_message() {
        let ev: ReactionAddedEvent = serde_json::from_str(
            r#"{
                "type": "reaction_added",
                "user": "U024BE7LH",
                "reaction": "thumbsup",
                "item_user": "U0G9QF9C6",
                "item": {"type": "message", "channel": "C0G9QF9GZ", "ts": "1360782400.498405"},
                "event_ts": "1360782804.083113"
            }"#,
        )
        .unwrap();
        assert_eq!(ev.reaction, "thumbsup");
        assert_eq!(ev.item.item_type, "message");
        assert_eq!(ev.item.ts.unwrap().as_str(), "1360782400.498405");
    }

    #[test]
    fn reaction_item_covers_file_targets() {
        let item: ReactionItem =
            serde_json::from_str(r#"{"type": "file", "file": "F0HS27V1Z"}"#).unwrap();
        assert_eq!(item.item_type, "file");
        assert_eq!(item.file.as_str(), "F0HS27V1Z");
        assert!(item.ts.is_none());
    }
}
