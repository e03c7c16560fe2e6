//! The message event family.
//!
//! `"message"` is the one event type with second-level dispatch: a
//! `subtype` field selects a specialized shape, and when `subtype` is
//! absent a `channel_type` field distinguishes where the message was
//! posted. [`MessageEvent`] is the shared rich shape; the subtype
//! records carry only the fields their subtype actually delivers.
//! Where two subtype strings map to one record (`channel_join` /
//! `group_join` and friends) the echoed `subtype` field distinguishes
//! them.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::blocks::Block;
use crate::ids::{BotId, ChannelId, TeamId, UserId};
use crate::objects::{Comment, File, Icons};
use crate::ts::Timestamp;

/// Edit metadata on a changed message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Edited {
    /// Who edited the message.
    pub user: UserId,
    /// When the edit happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
}

/// A message record nested inside another message event
/// (`message_changed`, `message_replied`, `thread_broadcast`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageItem {
    /// Record kind, `"message"` on the wire.
    #[serde(rename = "type")]
    pub item_type: String,
    /// Author.
    pub user: UserId,
    /// Bot author, for bot messages.
    pub bot_id: BotId,
    /// Display username, for bot messages.
    pub username: String,
    /// Message text.
    pub text: String,
    /// Message timestamp (also its identifier within the channel).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Thread root timestamp, for threaded messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<Timestamp>,
    /// Edit metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited: Option<Edited>,
    /// Layout blocks, decoded through the block union.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
    /// Reply count, for thread roots.
    pub reply_count: i64,
}

/// A plain channel message (bare `"message"`, any `channel_type`).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo; empty for plain messages.
    pub subtype: String,
    /// Conversation the message was posted in.
    pub channel: ChannelId,
    /// Conversation kind echo (`app_home`, `channel`, `group`, `im`,
    /// `mpim`), when delivered via the webhook surface.
    pub channel_type: String,
    /// Author.
    pub user: UserId,
    /// Bot author, for bot-authored messages.
    pub bot_id: BotId,
    /// Workspace.
    pub team: TeamId,
    /// Message text.
    pub text: String,
    /// Message timestamp (also its identifier within the channel).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Thread root timestamp, for threaded messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
    /// Layout blocks, decoded through the block union.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
    /// Legacy attachments, kept opaque.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Value>,
    /// Attached files.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
    /// Edit metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited: Option<Edited>,
    /// Whether the message is hidden from history.
    pub hidden: bool,
    /// Whether the calling user starred the message.
    pub is_starred: bool,
    /// Channels the message is pinned to.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub pinned_to: Vec<ChannelId>,
    /// Reply count, for thread roots.
    pub reply_count: i64,
    /// Thread root author, for thread replies.
    pub parent_user_id: UserId,
    /// Whether the message carries an upload.
    pub upload: bool,
}

/// `bot_message`: a message authored by a bot integration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"bot_message"`.
    pub subtype: String,
    /// Conversation the message was posted in.
    pub channel: ChannelId,
    /// Authoring bot.
    pub bot_id: BotId,
    /// Display username chosen by the bot.
    pub username: String,
    /// Author icons chosen by the bot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icons: Option<Icons>,
    /// Message text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Thread root timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
    /// Layout blocks.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
    /// Legacy attachments, kept opaque.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<Value>,
}

/// `me_message`: a `/me` action message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"me_message"`.
    pub subtype: String,
    /// Conversation the message was posted in.
    pub channel: ChannelId,
    /// Author.
    pub user: UserId,
    /// Message text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `message_changed`: an edit to an earlier message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageChangedEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"message_changed"`.
    pub subtype: String,
    /// Whether the change is hidden from unread counts.
    pub hidden: bool,
    /// Conversation of the edited message.
    pub channel: ChannelId,
    /// Timestamp of this change event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// The message after the edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageItem>,
    /// The message before the edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_message: Option<MessageItem>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `message_deleted`: a deletion of an earlier message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageDeletedEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"message_deleted"`.
    pub subtype: String,
    /// Whether the deletion is hidden from unread counts.
    pub hidden: bool,
    /// Conversation of the deleted message.
    pub channel: ChannelId,
    /// Timestamp of this deletion event.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Timestamp of the message that was deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `message_replied`: a thread root gained a reply.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageRepliedEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"message_replied"`.
    pub subtype: String,
    /// Whether the notice is hidden from unread counts.
    pub hidden: bool,
    /// Conversation of the thread.
    pub channel: ChannelId,
    /// Timestamp of this notice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// The thread root with updated reply metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageItem>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `thread_broadcast`: a thread reply also sent to the channel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThreadBroadcastEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"thread_broadcast"`.
    pub subtype: String,
    /// Conversation of the thread.
    pub channel: ChannelId,
    /// Author.
    pub user: UserId,
    /// Message text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Thread root timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<Timestamp>,
    /// The thread root being broadcast from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<MessageItem>,
    /// Layout blocks.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `channel_join` / `group_join`: a member joined, as a visible
/// message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JoinMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"channel_join"` or `"group_join"`.
    pub subtype: String,
    /// Conversation joined.
    pub channel: ChannelId,
    /// Who joined.
    pub user: UserId,
    /// Who invited them, when invited.
    pub inviter: UserId,
    /// Rendered notice text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `channel_leave` / `group_leave`: a member left, as a visible
/// message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaveMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"channel_leave"` or `"group_leave"`.
    pub subtype: String,
    /// Conversation left.
    pub channel: ChannelId,
    /// Who left.
    pub user: UserId,
    /// Rendered notice text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `channel_topic` / `group_topic`: the topic changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"channel_topic"` or `"group_topic"`.
    pub subtype: String,
    /// Conversation whose topic changed.
    pub channel: ChannelId,
    /// Who changed it.
    pub user: UserId,
    /// The new topic.
    pub topic: String,
    /// Rendered notice text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `channel_purpose` / `group_purpose`: the purpose changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurposeMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"channel_purpose"` or `"group_purpose"`.
    pub subtype: String,
    /// Conversation whose purpose changed.
    pub channel: ChannelId,
    /// Who changed it.
    pub user: UserId,
    /// The new purpose.
    pub purpose: String,
    /// Rendered notice text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `channel_name` / `group_name`: the conversation was renamed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NameMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"channel_name"` or `"group_name"`.
    pub subtype: String,
    /// Conversation that was renamed.
    pub channel: ChannelId,
    /// Who renamed it.
    pub user: UserId,
    /// Previous name.
    pub old_name: String,
    /// New name.
    pub name: String,
    /// Rendered notice text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `channel_archive` / `group_archive`: archived, as a visible
/// message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"channel_archive"` or `"group_archive"`.
    pub subtype: String,
    /// Conversation archived.
    pub channel: ChannelId,
    /// Who archived it.
    pub user: UserId,
    /// Members at archive time.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<UserId>,
    /// Rendered notice text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `channel_unarchive` / `group_unarchive`: unarchived, as a visible
/// message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UnarchiveMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"channel_unarchive"` or `"group_unarchive"`.
    pub subtype: String,
    /// Conversation unarchived.
    pub channel: ChannelId,
    /// Who unarchived it.
    pub user: UserId,
    /// Rendered notice text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `file_share`: a file shared into a conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileShareMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"file_share"`.
    pub subtype: String,
    /// Conversation shared into.
    pub channel: ChannelId,
    /// Who shared the file.
    pub user: UserId,
    /// The shared file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<File>,
    /// All attached files.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<File>,
    /// Whether this share is the initial upload.
    pub upload: bool,
    /// Rendered notice text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `file_comment`: a comment on a file, surfaced as a message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCommentMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"file_comment"`.
    pub subtype: String,
    /// Conversation the comment surfaced in.
    pub channel: ChannelId,
    /// The commented file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<File>,
    /// The comment itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<Comment>,
    /// Rendered notice text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `file_mention`: a file mentioned in a message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMentionMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"file_mention"`.
    pub subtype: String,
    /// Conversation of the mention.
    pub channel: ChannelId,
    /// Author.
    pub user: UserId,
    /// The mentioned file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<File>,
    /// Rendered notice text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `pinned_item` / `unpinned_item`: an item was (un)pinned, as a
/// visible message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinnedItemMessageEvent {
    /// Discriminator echo: `"message"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Subtype echo: `"pinned_item"` or `"unpinned_item"`.
    pub subtype: String,
    /// Conversation of the pin.
    pub channel: ChannelId,
    /// Who (un)pinned.
    pub user: UserId,
    /// Kind of the pinned item (`"C"` message, `"F"` file, …).
    pub item_type: String,
    /// Rendered notice text.
    pub text: String,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_message_decodes_blocks() {
        let msg: MessageEvent = serde_json::from_str(
            r#"{
                "type": "message",
                "channel": "C2147483705",
                "user": "U2147483697",
                "text": "Hello world",
                "ts": "1355517523.000005",
                "blocks": [{"type": "divider"}]
            }"#,
        )
        .unwrap();
        assert_eq!(msg.text, "Hello world");
        assert_eq!(msg.ts.unwrap().as_str(), "1355517523.000005");
        assert_eq!(msg.blocks.len(), 1);
    }

    #[test]
    fn changed_message_nests_before_and_after() {
        let msg: MessageChangedEvent = serde_json::from_str(
            r#"{
                "type": "message",
                "subtype": "message_changed",
                "hidden": true,
                "channel": "C2147483705",
                "ts": "1358878755.000001",
                "message": {"type": "message", "user": "U2147483697", "text": "after"},
                "previous_message": {"type": "message", "user": "U2147483697", "text": "before"}
            }"#,
        )
        .unwrap();
        assert!(msg.hidden);
        assert_eq!(msg.message.unwrap().text, "after");
        assert_eq!(msg.previous_message.unwrap().text, "before");
    }
}
