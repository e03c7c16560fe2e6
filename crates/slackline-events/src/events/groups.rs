//! Private-group lifecycle events.
//!
//! Structurally these mirror their channel counterparts; the wire
//! keeps separate `group_*` discriminators for private conversations.

use serde::{Deserialize, Serialize};

use crate::ids::{ChannelId, UserId};
use crate::objects::Conversation;
use crate::ts::Timestamp;

/// `group_joined`: the calling user joined a private group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupJoinedEvent {
    /// Discriminator echo: `"group_joined"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The joined group, with membership detail.
    pub channel: Conversation,
}

/// `group_left`: the calling user left a private group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupLeftEvent {
    /// Discriminator echo: `"group_left"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The group that was left.
    pub channel: ChannelId,
}

/// `group_open`: a private group was opened.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupOpenEvent {
    /// Discriminator echo: `"group_open"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The opening user.
    pub user: UserId,
    /// The opened group.
    pub channel: ChannelId,
}

/// `group_close`: a private group was closed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupCloseEvent {
    /// Discriminator echo: `"group_close"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The closing user.
    pub user: UserId,
    /// The closed group.
    pub channel: ChannelId,
}

/// `group_archive`: a private group was archived.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupArchiveEvent {
    /// Discriminator echo: `"group_archive"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The archived group.
    pub channel: ChannelId,
}

/// `group_unarchive`: a private group was unarchived.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupUnarchiveEvent {
    /// Discriminator echo: `"group_unarchive"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The unarchived group.
    pub channel: ChannelId,
}

/// The abbreviated record delivered with `group_rename`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamedGroup {
    /// Group identifier.
    pub id: ChannelId,
    /// The new name.
    pub name: String,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<Timestamp>,
}

/// `group_rename`: a private group changed its name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupRenameEvent {
    /// Discriminator echo: `"group_rename"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The renamed group.
    pub channel: RenamedGroup,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_rename_nests_the_abbreviated_record() {
        let ev: GroupRenameEvent = serde_json::from_str(
            r#"{
                "type": "group_rename",
                "channel": {"id": "G02ELGNBH", "name": "new_name", "created": 1360782804}
            }"#,
        )
        .unwrap();
        assert_eq!(ev.channel.name, "new_name");
    }
}
