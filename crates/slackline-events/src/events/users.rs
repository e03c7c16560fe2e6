//! User presence, typing, and profile events.

use serde::{Deserialize, Serialize};

use crate::ids::{ChannelId, UserId};
use crate::objects::User;
use crate::ts::Timestamp;

/// `user_typing`: a user started typing in a conversation.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserTypingEvent {
    /// Discriminator echo: `"user_typing"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Conversation being typed in.
    pub channel: ChannelId,
    /// Who is typing.
    pub user: UserId,
}

/// `presence_change` / `manual_presence_change`: a user's presence
/// flipped between `"active"` and `"away"`. The echoed type records
/// whether the change was manual.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PresenceChangeEvent {
    /// Discriminator echo: `"presence_change"` or
    /// `"manual_presence_change"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Whose presence changed; absent on the manual variant, which
    /// always refers to the calling user.
    pub user: UserId,
    /// The new presence: `"active"` or `"away"`.
    pub presence: String,
}

/// `user_change`: a user's profile or account data changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserChangeEvent {
    /// Discriminator echo: `"user_change"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The updated user record.
    pub user: User,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

/// `team_join`: a new member joined the workspace.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamJoinEvent {
    /// Discriminator echo: `"team_join"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The new member.
    pub user: User,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<Timestamp>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presence_change_names_the_state() {
        let ev: PresenceChangeEvent = serde_json::from_str(
            r#"{"type": "presence_change", "user": "U024BE7LH", "presence": "away"}"#,
        )
        .unwrap();
        assert_eq!(ev.presence, "away");
    }

    #[test]
    fn manual_presence_change_omits_the_user() {
        let ev: PresenceChangeEvent = serde_json::from_str(
            r#"{"type": "manual_presence_change", "presence": "active"}"#,
        )
        .unwrap();
        assert!(ev.user.is_empty());
        assert_eq!(ev.presence, "active");
    }

    #[test]
    fn team_join_nests_the_full_user_record() {
        let ev: TeamJoinEvent = serde_json::from_str(
            r#"{
                "type": "team_join",
                "user": {"id": "U023BECGF", "name": "bobby", "is_bot": false}
            }"#,
        )
        .unwrap();
        assert_eq!(ev.user.name, "bobby");
    }
}
