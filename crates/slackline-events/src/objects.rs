//! Shared platform object records referenced across events.
//!
//! These carry the commonly delivered subset of each object's fields.
//! Absent numeric and boolean fields default to zero; containers
//! default to empty.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ids::{AppId, BotId, ChannelId, CommentId, TeamId, UserId};
use crate::ts::Timestamp;

/// A workspace member.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Workspace the user belongs to.
    pub team_id: TeamId,
    /// Login name.
    pub name: String,
    /// Display/real name fields.
    pub real_name: String,
    /// Whether the account is deactivated.
    pub deleted: bool,
    /// Preferred color for the user's name.
    pub color: String,
    /// IANA timezone name.
    pub tz: String,
    /// Human-readable timezone label.
    pub tz_label: String,
    /// Offset from UTC in seconds.
    pub tz_offset: i64,
    /// Profile fields.
    pub profile: UserProfile,
    /// Whether the user is a workspace admin.
    pub is_admin: bool,
    /// Whether the user is the workspace owner.
    pub is_owner: bool,
    /// Whether the user is a bot user.
    pub is_bot: bool,
    /// Whether the user is an app-level user.
    pub is_app_user: bool,
    /// Last profile update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<Timestamp>,
}

/// The profile section of a [`User`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    /// Display name shown in the client.
    pub display_name: String,
    /// Full real name.
    pub real_name: String,
    /// Status emoji shortcode.
    pub status_emoji: String,
    /// Status text.
    pub status_text: String,
    /// Email address, when visible to the token.
    pub email: String,
    /// Job title.
    pub title: String,
    /// Phone number.
    pub phone: String,
    /// Avatar URL (72px).
    pub image_72: String,
}

/// A channel topic or purpose.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopicPurpose {
    /// The text value.
    pub value: String,
    /// Who last set it.
    pub creator: UserId,
    /// When it was last set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_set: Option<Timestamp>,
}

/// A conversation: channel, private group, MPIM, or IM.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conversation {
    /// Conversation identifier.
    pub id: ChannelId,
    /// Conversation name (empty for IMs).
    pub name: String,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Who created the conversation.
    pub creator: UserId,
    /// Whether this is a public channel.
    pub is_channel: bool,
    /// Whether this is a private group.
    pub is_group: bool,
    /// Whether this is a direct message.
    pub is_im: bool,
    /// Whether this is a multi-party direct message.
    pub is_mpim: bool,
    /// Whether the conversation is private.
    pub is_private: bool,
    /// Whether the conversation is archived.
    pub is_archived: bool,
    /// Whether the calling user is a member.
    pub is_member: bool,
    /// Lower-cased, unaccented name.
    pub name_normalized: String,
    /// Member count, when delivered.
    pub num_members: i64,
    /// Member user ids, when delivered.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub members: Vec<UserId>,
    /// Channel topic.
    pub topic: TopicPurpose,
    /// Channel purpose.
    pub purpose: TopicPurpose,
    /// Timestamp of the last message the calling user has read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_read: Option<Timestamp>,
}

/// An uploaded file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct File {
    /// File identifier.
    pub id: crate::ids::FileId,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// Original filename.
    pub name: String,
    /// Display title.
    pub title: String,
    /// MIME type.
    pub mimetype: String,
    /// Platform file-type tag (`"png"`, `"gdoc"`, …).
    pub filetype: String,
    /// Human-readable file-type label.
    pub pretty_type: String,
    /// Uploading user.
    pub user: UserId,
    /// Size in bytes.
    pub size: i64,
    /// Upload mode (`"hosted"`, `"external"`, …).
    pub mode: String,
    /// Whether the file is editable in the client.
    pub editable: bool,
    /// Whether the file is visible workspace-wide.
    pub is_public: bool,
    /// Whether a public URL has been shared.
    pub public_url_shared: bool,
    /// Authenticated download URL.
    pub url_private: String,
    /// Permalink into the client.
    pub permalink: String,
    /// Channels the file is shared into.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<ChannelId>,
    /// Comment count.
    pub comments_count: i64,
}

/// A comment on a file.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Comment {
    /// Comment identifier.
    pub id: CommentId,
    /// When the comment was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
    /// When the comment was last edited.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<Timestamp>,
    /// Comment author.
    pub user: UserId,
    /// Comment text.
    pub comment: String,
}

/// A bot user.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bot {
    /// Bot identifier.
    pub id: BotId,
    /// Owning app.
    pub app_id: AppId,
    /// Bot display name.
    pub name: String,
    /// Whether the bot has been removed.
    pub deleted: bool,
    /// Avatar URLs keyed by size tag.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub icons: HashMap<String, String>,
}

/// Message author icons, delivered with some bot-authored messages.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Icons {
    /// Emoji shortcode used as the icon.
    pub emoji: String,
    /// 64px icon URL.
    pub image_64: String,
}

/// A catch-all for object fields the platform documents loosely.
///
/// Kept opaque on purpose; callers needing the detail re-decode it.
pub type OpaqueObject = Value;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conversation_defaults_cover_a_minimal_wire_object() {
        let c: Conversation =
            serde_json::from_str(r#"{"id": "C024BE91L", "name": "fun"}"#).unwrap();
        assert_eq!(c.id.as_str(), "C024BE91L");
        assert!(!c.is_archived);
        assert_eq!(c.num_members, 0);
        assert!(c.members.is_empty());
        assert_eq!(c.topic.value, "");
    }

    #[test]
    fn user_profile_nests() {
        let u: User = serde_json::from_str(
            r#"{
                "id": "U023BECGF",
                "name": "bobby",
                "profile": {"display_name": "Bobby", "email": "bobby@example.com"}
            }"#,
        )
        .unwrap();
        assert_eq!(u.profile.display_name, "Bobby");
        assert!(!u.is_bot);
    }

    #[test]
    fn file_created_timestamp_accepts_bare_number() {
        let f: File =
            serde_json::from_str(r#"{"id": "F2147483862", "created": 1356032811}"#).unwrap();
        assert_eq!(f.created.unwrap().seconds(), 1_356_032_811);
    }
}
