//! Composition objects: the small reusable value shapes referenced by
//! blocks and block elements.
//!
//! None of these need discriminator dispatch of their own; they decode
//! as plain structs. Optional composition fields are `Option`, never a
//! zero-valued struct.

use serde::{Deserialize, Serialize};

/// A text object, `plain_text` or `mrkdwn`.
///
/// The discriminator is echoed into [`text_type`](Self::text_type);
/// it is the only thing distinguishing the two wire forms.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextObject {
    /// Discriminator echo: `"plain_text"` or `"mrkdwn"`.
    #[serde(rename = "type")]
    pub text_type: String,
    /// The text itself.
    pub text: String,
    /// Whether emoji shortcodes are rendered (`plain_text` only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emoji: Option<bool>,
    /// Whether auto-conversion is skipped (`mrkdwn` only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verbatim: Option<bool>,
}

impl TextObject {
    /// A `plain_text` object.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text_type: "plain_text".to_owned(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// An `mrkdwn` object.
    #[must_use]
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            text_type: "mrkdwn".to_owned(),
            text: text.into(),
            ..Self::default()
        }
    }
}

/// A confirmation dialog attached to an interactive element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmationDialog {
    /// Dialog title.
    pub title: TextObject,
    /// Explanatory body text.
    pub text: TextObject,
    /// Confirm button label.
    pub confirm: TextObject,
    /// Deny button label.
    pub deny: TextObject,
    /// Confirm button style (`"primary"` or `"danger"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
}

/// One selectable option.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionObject {
    /// Option label.
    pub text: TextObject,
    /// Value submitted when the option is chosen.
    pub value: String,
    /// Secondary descriptive text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<TextObject>,
    /// URL loaded when the option is chosen (overflow menus only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A labelled group of options inside a select menu.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionGroup {
    /// Group label.
    pub label: TextObject,
    /// The options in this group.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionObject>,
}

/// A filter narrowing the conversations offered by a conversation
/// select menu.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversationFilter {
    /// Conversation kinds to include (`im`, `mpim`, `private`, `public`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub include: Vec<String>,
    /// Exclude externally shared channels.
    pub exclude_external_shared_channels: bool,
    /// Exclude bot users from user lists.
    pub exclude_bot_users: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_object_echoes_discriminator() {
        let t: TextObject = serde_json::from_str(r#"{"type":"mrkdwn","text":"*hi*"}"#).unwrap();
        assert_eq!(t.text_type, "mrkdwn");
        assert_eq!(t.text, "*hi*");
        assert_eq!(t.emoji, None);
    }

    #[test]
    fn absent_booleans_default_to_false() {
        let f: ConversationFilter = serde_json::from_str(r#"{"include":["im"]}"#).unwrap();
        assert!(!f.exclude_bot_users);
        assert!(!f.exclude_external_shared_channels);
    }

    #[test]
    fn option_group_decodes_nested_options() {
        let g: OptionGroup = serde_json::from_str(
            r#"{
                "label": {"type": "plain_text", "text": "Group 1"},
                "options": [
                    {"text": {"type": "plain_text", "text": "a"}, "value": "v-a"},
                    {"text": {"type": "plain_text", "text": "b"}, "value": "v-b"}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(g.label.text, "Group 1");
        assert_eq!(g.options.len(), 2);
        assert_eq!(g.options[1].value, "v-b");
    }
}
