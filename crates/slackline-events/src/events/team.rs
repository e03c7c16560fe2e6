//! Workspace-level events.

use serde::{Deserialize, Serialize};

use crate::objects::OpaqueObject;

/// `team_rename`: the workspace changed its name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamRenameEvent {
    /// Discriminator echo: `"team_rename"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The new workspace name.
    pub name: String,
}

/// `team_domain_change`: the workspace changed its domain.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamDomainChangeEvent {
    /// Discriminator echo: `"team_domain_change"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Full workspace URL.
    pub url: String,
    /// The new domain.
    pub domain: String,
}

/// `team_pref_change`: a workspace preference changed. Values are
/// preference-specific; the value is kept opaque.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamPrefChangeEvent {
    /// Discriminator echo: `"team_pref_change"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Preference name.
    pub name: String,
    /// New preference value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<OpaqueObject>,
}

/// `team_plan_change`: the workspace changed billing plan.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamPlanChangeEvent {
    /// Discriminator echo: `"team_plan_change"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The new plan tag (`""`, `"std"`, `"plus"`, …).
    pub plan: String,
}

/// `team_profile_change` / `team_profile_delete` /
/// `team_profile_reorder`: the workspace profile-field template
/// changed. The field detail is loosely shaped; it is kept opaque.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamProfileChangeEvent {
    /// Discriminator echo: one of the `team_profile_*` types.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The affected profile field definitions, kept opaque.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<OpaqueObject>,
}

/// `team_migration_started`: the workspace is migrating between
/// servers; clients should reconnect shortly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamMigrationStartedEvent {
    /// Discriminator echo: `"team_migration_started"`.
    #[serde(rename = "type")]
    pub event_type: String,
}

/// `email_domain_changed`: the allowed sign-up email domain changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmailDomainChangedEvent {
    /// Discriminator echo: `"email_domain_changed"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// The new email domain list, comma-separated.
    pub email_domain: String,
    /// Delivery timestamp.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_ts: Option<crate::ts::Timestamp>,
}
