//! Do-not-disturb events.

use serde::{Deserialize, Serialize};

use crate::ids::UserId;
use crate::ts::Timestamp;

/// A user's do-not-disturb settings snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndStatus {
    /// Whether a recurring DND schedule is enabled.
    pub dnd_enabled: bool,
    /// Next scheduled DND window start.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_dnd_start_ts: Option<Timestamp>,
    /// Next scheduled DND window end.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_dnd_end_ts: Option<Timestamp>,
    /// Whether snooze is currently active (only delivered for the
    /// calling user).
    pub snooze_enabled: bool,
    /// Snooze end, when snoozing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snooze_endtime: Option<Timestamp>,
}

/// `dnd_updated` / `dnd_updated_user`: a user's DND settings changed.
/// The former refers to the calling user and includes snooze detail;
/// the latter covers other workspace members. The echoed type
/// distinguishes them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DndUpdatedEvent {
    /// Discriminator echo: `"dnd_updated"` or `"dnd_updated_user"`.
    #[serde(rename = "type")]
    pub event_type: String,
    /// Whose settings changed.
    pub user: UserId,
    /// The new settings.
    pub dnd_status: DndStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dnd_updated_includes_snooze_detail() {
        let ev: DndUpdatedEvent = serde_json::from_str(
            r#"{
                "type": "dnd_updated",
                "user": "U1234",
                "dnd_status": {
                    "dnd_enabled": true,
                    "next_dnd_start_ts": 1450387800,
                    "next_dnd_end_ts": 1450423800,
                    "snooze_enabled": true,
                    "snooze_endtime": 1450373897
                }
            }"#,
        )
        .unwrap();
        assert!(ev.dnd_status.snooze_enabled);
        assert_eq!(ev.dnd_status.next_dnd_start_ts.unwrap().seconds(), 1_450_387_800);
    }
}
