//! User-group (subteam) events.

use serde::{Deserialize, Serialize};

use crate::ids::{TeamId, UserId};
use crate::ts::Timestamp;

/// A user group (a mentionable set of workspace members).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserGroup {
    /// User-group identifier (`S…`).
    pub id: String,
    /// Owning workspace.
    pub team_id: TeamId,
    /// Whether this is the built-in all-members group.
    pub is_usergroup: bool,
    /// Display name.
    pub name: String,
    /// Mention handle, without the `@`.
    pub handle: String,
    /// Description.
    pub description: String,
    /// Creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_create: Option<Timestamp>,
    /// Last update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_update: Option<Timestamp>,
    /// Deletion time, zero while live.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_delete: Option<Timestamp>,
    /// Who created the group.
    pub created_by: UserId,
    /// Who last updated it.
    pub updated_by: UserId,
    /// Member count.
    pub user_count: i64,
    /// Member user ids, when requested.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub users: Vec<UserId>,
}

/// `subteam_created`: a user group was created.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubteamCreatedEvent {
    /// Discriminator echo: `"subteam_created"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The new group.
    pub subteam: UserGroup,
}

/// `subteam_updated`: a user group's definition or membership changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubteamUpdatedEvent {
    /// Discriminator echo: `"subteam_updated"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The updated group.
    pub subteam: UserGroup,
}

/// `subteam_members_changed`: a user group's membership changed,
/// delivered as identifier deltas rather than a full record.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubteamMembersChangedEvent {
    /// Discriminator echo: `"subteam_members_changed"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The affected group.
    pub subteam_id: String,
    /// Owning workspace.
    pub team_id: TeamId,
    /// Previous membership update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_previous_update: Option<Timestamp>,
    /// This membership update time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_update: Option<Timestamp>,
    /// Members added.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub added_users: Vec<UserId>,
    /// Members removed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed_users: Vec<UserId>,
}

/// `subteam_self_added`: the calling user was added to a group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubteamSelfAddedEvent {
    /// Discriminator echo: `"subteam_self_added"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The group the calling user was added to.
    pub subteam_id: String,
}

/// `subteam_self_removed`: the calling user was removed from a group.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubteamSelfRemovedEvent {
    /// Discriminator echo: `"subteam_self_removed"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The group the calling user was removed from.
    pub subteam_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_changed_delivers_deltas() {
        let ev: SubteamMembersChangedEvent = serde_json::from_str(
            r#"{
                "type": "subteam_members_changed",
                "subteam_id": "S0614TZR7",
                "team_id": "T060RNRCH",
                "added_users": ["U060RNRCZ", "U060ULRC0"],
                "removed_users": ["U06129G2V"]
            }"#,
        )
        .unwrap();
        assert_eq!(ev.added_users.len(), 2);
        assert_eq!(ev.removed_users[0].as_str(), "U06129G2V");
    }
}
