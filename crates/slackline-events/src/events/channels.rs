//! Public-channel lifecycle events, plus the read-cursor and
//! membership events shared across conversation kinds.

use serde::{Deserialize, Serialize};

use crate::ids::{ChannelId, TeamId, UserId};
use crate::objects::Conversation;
use crate::ts::Timestamp;

/// The abbreviated channel record delivered with `channel_created`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreatedChannel {
    /// Channel identifier.
    pub id: ChannelId,
    /// Channel name.
    pub name: String,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Who created the channel.
    pub creator: UserId,
}

/// `channel_created`: a new public channel exists.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelCreatedEvent {
    /// Discriminator echo: `"channel_created"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The new channel.
    pub channel: CreatedChannel,
}

/// `channel_joined`: the calling user joined a channel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelJoinedEvent {
    /// Discriminator echo: `"channel_joined"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The joined channel, with membership detail.
    pub channel: Conversation,
}

/// `channel_left`: the calling user left a channel.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelLeftEvent {
    /// Discriminator echo: `"channel_left"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The channel that was left.
    pub channel: ChannelId,
}

/// `channel_deleted`: a channel was deleted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelDeletedEvent {
    /// Discriminator echo: `"channel_deleted"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The deleted channel.
    pub channel: ChannelId,
}

/// The abbreviated record delivered with `channel_rename`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamedChannel {
    /// Channel identifier.
    pub id: ChannelId,
    /// The new name.
    pub name: String,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
}

/// `channel_rename`: a channel changed its name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelRenameEvent {
    /// Discriminator echo: `"channel_rename"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The renamed channel.
    pub channel: RenamedChannel,
}

/// `channel_archive`: a channel was archived.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelArchiveEvent {
    /// Discriminator echo: `"channel_archive"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The archived channel.
    pub channel: ChannelId,
    /// Who archived it.
    pub user: UserId,
}

/// `channel_unarchive`: a channel was unarchived.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelUnarchiveEvent {
    /// Discriminator echo: `"channel_unarchive"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The unarchived channel.
    pub channel: ChannelId,
    /// Who unarchived it.
    pub user: UserId,
}

/// `channel_marked` / `group_marked` / `im_marked` /
/// `channel_history_changed`-adjacent read cursor update: the calling
/// user's last-read position moved.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkedEvent {
    /// Discriminator echo: one of the `*_marked` types.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The conversation whose cursor moved.
    pub channel: ChannelId,
    /// The new last-read timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
}

/// `channel_history_changed` / `group_history_changed` /
/// `im_history_changed`: bulk history before a point changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryChangedEvent {
    /// Discriminator echo: one of the `*_history_changed` types.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Messages at or before this timestamp may have changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<Timestamp>,
    /// Timestamp of the change itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `member_joined_channel`: any member joined a conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberJoinedChannelEvent {
    /// Discriminator echo: `"member_joined_channel"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Who joined.
    pub user: UserId,
    /// The conversation joined.
    pub channel: ChannelId,
    /// Conversation kind tag (`"C"` or `"G"`).
    pub channel_type: String,
    /// Workspace.
    pub team: TeamId,
    /// Who invited them, when invited.
    pub inviter: UserId,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `member_left_channel`: any member left a conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemberLeftChannelEvent {
    /// Discriminator echo: `"member_left_channel"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Who left.
    pub user: UserId,
    /// The conversation left.
    pub channel: ChannelId,
    /// Conversation kind tag (`"C"` or `"G"`).
    pub channel_type: String,
    /// Workspace.
    pub team: TeamId,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}
