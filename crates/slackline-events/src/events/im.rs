//! Direct-message lifecycle events.

use serde::{Deserialize, Serialize};

use crate::ids::{ChannelId, UserId};
use crate::objects::Conversation;

/// `im_created`: a direct-message conversation was created.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImCreatedEvent {
    /// Discriminator echo: `"im_created"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The other party.
    pub user: UserId,
    /// The new conversation.
    pub channel: Conversation,
}

/// `im_open`: a direct-message conversation was opened.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImOpenEvent {
    /// Discriminator echo: `"im_open"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The other party.
    pub user: UserId,
    /// The opened conversation.
    pub channel: ChannelId,
}

/// `im_close`: a direct-message conversation was closed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImCloseEvent {
    /// Discriminator echo: `"im_close"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The other party.
    pub user: UserId,
    /// The closed conversation.
    pub channel: ChannelId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn im_open_carries_user_and_channel() {
        let ev: ImOpenEvent =
            serde_json::from_str(r#"{"type": "im_open", "user": "U024BE7LH", "channel": "D024BE91L"}"#)
                .unwrap();
        assert_eq!(ev.user.as_str(), "U024BE7LH");
        assert_eq!(ev.channel.as_str(), "D024BE91L");
    }
}
