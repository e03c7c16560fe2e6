//! App-surface events: mentions, the app home, and app lifecycle.

use serde::{Deserialize, Serialize};

use crate::blocks::Block;
use crate::ids::{ChannelId, TeamId, UserId};
use crate::ts::Timestamp;
use crate::view::View;

/// `app_mention`: the app's bot user was @-mentioned in a message.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMentionEvent {
    /// Discriminator echo: `"app_mention"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Author of the mentioning message.
    pub user: UserId,
    /// Message text, including the mention.
    pub text: String,
    /// Conversation of the mention.
    pub channel: ChannelId,
    /// Workspace.
    pub team: TeamId,
    /// Message timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<Timestamp>,
    /// Thread root timestamp, for threaded mentions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_ts: Option<Timestamp>,
    /// Layout blocks of the mentioning message.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `app_home_opened`: a user opened the app's home surface.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppHomeOpenedEvent {
    /// Discriminator echo: `"app_home_opened"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Who opened the home.
    pub user: UserId,
    /// The app-home conversation.
    pub channel: ChannelId,
    /// Which tab was opened: `"home"` or `"messages"`.
    pub tab: String,
    /// The currently published home view, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `app_uninstalled`: the app was removed from the workspace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppUninstalledEvent {
    /// Discriminator echo: `"app_uninstalled"`.
    #[serde(rename = "type")]
    pub event_type: String,
}

/// `app_rate_limited`: webhook deliveries to the app were throttled.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppRateLimitedEvent {
    /// Discriminator echo: `"app_rate_limited"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Verification token of the throttled app.
    pub token: String,
    /// Workspace the throttling applies to.
    pub team_id: TeamId,
    /// Minute bucket in which the limit was exceeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minute_rate_limited: Option<Timestamp>,
    /// The throttled app.
    pub api_app_id: crate::ids::AppId,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_mention_decodes_blocks() {
        let ev: AppMentionEvent = serde_json::from_str(
            r#"{
                "type": "app_mention",
                "user": "U061F7AUR",
                "text": "<@U0LAN0Z89> what time is it",
                "channel": "C0LAN2Q65",
                "ts": "1515449438.000011",
                "blocks": [
                    {"type": "section", "text": {"type": "mrkdwn", "text": "hi"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(ev.blocks.len(), 1);
        assert_eq!(ev.ts.unwrap().as_str(), "1515449438.000011");
    }

    #[test]
    fn app_home_opened_nests_a_full_view() {
        let ev: AppHomeOpenedEvent = serde_json::from_str(
            r#"{
                "type": "app_home_opened",
                "user": "U061F7AUR",
                "channel": "D0LAN2Q65",
                "tab": "home",
                "view": {
                    "id": "VPASKP233",
                    "type": "home",
                    "blocks": [{"type": "divider"}]
                }
            }"#,
        )
        .unwrap();
        let view = ev.view.unwrap();
        assert_eq!(view.view_type, "home");
        assert_eq!(view.blocks.len(), 1);
    }
}
