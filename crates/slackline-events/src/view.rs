//! Views and their submitted state.
//!
//! A [`View`] owns an ordered sequence of [`Block`]s; its optional
//! [`ViewState`] maps block identifier → element action identifier →
//! submitted value. Keys are unique at each level; insertion order is
//! not significant.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::blocks::Block;
use crate::composition::{OptionObject, TextObject};
use crate::ids::{AppId, BotId, ChannelId, TeamId, UserId};

/// A modal or app-home surface.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct View {
    /// View identifier (`V…`).
    pub id: String,
    /// Workspace the view belongs to.
    pub team_id: TeamId,
    /// Surface kind: `"modal"` or `"home"`.
    #[serde(rename = "type")]
    pub view_type: String,
    /// Ordered layout blocks, decoded through the block union.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<Block>,
    /// Modal title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextObject>,
    /// Close button label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub close: Option<TextObject>,
    /// Submit button label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submit: Option<TextObject>,
    /// Opaque state string round-tripped to the app.
    pub private_metadata: String,
    /// App-chosen identifier for interaction routing.
    pub callback_id: String,
    /// Submitted input state, when the view has inputs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ViewState>,
    /// Opaque hash guarding against concurrent updates.
    pub hash: String,
    /// Whether closing notifies the app.
    pub notify_on_close: bool,
    /// Whether pressing close clears all views in the stack.
    pub clear_on_close: bool,
    /// Root view of the modal stack.
    pub root_view_id: String,
    /// View this one was pushed from.
    pub previous_view_id: String,
    /// App-assigned external identifier.
    pub external_id: String,
    /// Owning app.
    pub app_id: AppId,
    /// Bot the view was published by.
    pub bot_id: BotId,
}

/// Submitted input values, keyed block id → action id.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewState {
    /// Two-level map of submitted values.
    pub values: HashMap<String, HashMap<String, StateValue>>,
}

impl ViewState {
    /// Look up the submitted value for one block/action pair.
    #[must_use]
    pub fn value(&self, block_id: &str, action_id: &str) -> Option<&StateValue> {
        self.values.get(block_id)?.get(action_id)
    }
}

/// One submitted element value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateValue {
    /// Discriminator echo of the element that produced the value.
    #[serde(rename = "type")]
    pub value_type: String,
    /// Free-text value (plain-text inputs, buttons).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Selected date, `YYYY-MM-DD` (date pickers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_date: Option<String>,
    /// Selected time, `HH:MM` (time pickers).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_time: Option<String>,
    /// Single selected option (select menus, radio buttons).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<OptionObject>,
    /// Multiple selected options (multi selects, checkboxes).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selected_options: Vec<OptionObject>,
    /// Selected user (`users_select`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_user: Option<UserId>,
    /// Selected users (`multi_users_select`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selected_users: Vec<UserId>,
    /// Selected channel (`channels_select`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_channel: Option<ChannelId>,
    /// Selected channels (`multi_channels_select`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selected_channels: Vec<ChannelId>,
    /// Selected conversation (`conversations_select`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_conversation: Option<ChannelId>,
    /// Selected conversations (`multi_conversations_select`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub selected_conversations: Vec<ChannelId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_state_resolves_two_level_keys() {
        let state: ViewState = serde_json::from_str(
            r#"{
                "values": {
                    "block-a": {
                        "name-input": {"type": "plain_text_input", "value": "Jean-Luc"}
                    },
                    "block-b": {
                        "day": {"type": "datepicker", "selected_date": "2026-08-24"}
                    }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            state.value("block-a", "name-input").unwrap().value.as_deref(),
            Some("Jean-Luc")
        );
        assert_eq!(
            state
                .value("block-b", "day")
                .unwrap()
                .selected_date
                .as_deref(),
            Some("2026-08-24")
        );
        assert!(state.value("block-a", "day").is_none());
    }

    #[test]
    fn view_decodes_blocks_in_order() {
        let view: View = serde_json::from_str(
            r#"{
                "id": "V024BE7LH",
                "type": "home",
                "blocks": [
                    {"type": "divider"},
                    {"type": "section", "text": {"type": "mrkdwn", "text": "hi"}}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(view.view_type, "home");
        assert_eq!(view.blocks.len(), 2);
        assert_eq!(view.blocks[0].block_type(), "divider");
        assert_eq!(view.blocks[1].block_type(), "section");
    }
}
