//! Connection-level and low-traffic events.

use serde::{Deserialize, Serialize};

use crate::ids::{ChannelId, UserId};
use crate::objects::{Bot, OpaqueObject};
use crate::ts::Timestamp;

/// `hello`: the realtime connection is established and ready.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelloEvent {
    /// Discriminator echo: `"hello"`.
    #[serde(rename = "type")]
    pub event_type: String,
}

/// `pong`: reply to a client-initiated ping over the realtime socket.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PongEvent {
    /// Discriminator echo: `"pong"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The `id` echoed back from the ping.
    pub reply_to: u64,
}

/// `reconnect_url`: an experimental faster-reconnect URL.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReconnectUrlEvent {
    /// Discriminator echo: `"reconnect_url"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The reconnect URL.
    pub url: String,
}

/// `accounts_changed`: the client's list of signed-in accounts
/// changed. Carries no payload.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountsChangedEvent {
    /// Discriminator echo: `"accounts_changed"`.
    #[serde(rename = "type")]
    pub event_type: String,
}

/// `commands_changed`: the set of slash commands changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandsChangedEvent {
    /// Discriminator echo: `"commands_changed"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `emoji_changed`: custom emoji were added, removed, or renamed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmojiChangedEvent {
    /// Discriminator echo: `"emoji_changed"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Change kind: `"add"`, `"remove"`, or `"rename"`; empty on
    /// older deliveries.
    pub subtype: String,
    /// Added or renamed emoji shortcode.
    pub name: String,
    /// Removed emoji shortcodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
    /// Image URL or alias target of the added emoji.
    pub value: String,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `pref_change`: one of the calling user's preferences changed. The
/// value's shape depends on the preference; it is kept opaque.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefChangeEvent {
    /// Discriminator echo: `"pref_change"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Preference name.
    pub name: String,
    /// New preference value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<OpaqueObject>,
}

/// `desktop_notification`: the server asks the client to raise a
/// desktop notification.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesktopNotificationEvent {
    /// Discriminator echo: `"desktop_notification"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Notification title.
    pub title: String,
    /// Rendered subtitle (usually the author).
    pub subtitle: String,
    /// Notification body text.
    pub content: String,
    /// Conversation the triggering message is in.
    pub channel: ChannelId,
    /// Avatar image URL.
    pub avatar_image: String,
    /// Whether the notification is for a channel-wide mention.
    pub is_channel_invite: bool,
    /// Timestamp of the triggering message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<Timestamp>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `mobile_in_app_notification`: the mobile-client counterpart of
/// [`DesktopNotificationEvent`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MobileInAppNotificationEvent {
    /// Discriminator echo: `"mobile_in_app_notification"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Notification title.
    pub title: String,
    /// Notification body text.
    pub subtitle: String,
    /// Conversation the triggering message is in.
    pub channel_id: ChannelId,
    /// Author of the triggering message.
    pub author_id: UserId,
    /// Timestamp of the triggering message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
}

/// `bot_added`: a bot integration was added to the workspace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotAddedEvent {
    /// Discriminator echo: `"bot_added"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The new bot.
    pub bot: Bot,
}

/// `bot_changed`: a bot integration's profile changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotChangedEvent {
    /// Discriminator echo: `"bot_changed"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The updated bot.
    pub bot: Bot,
}
