//! Block elements: the interactive controls embedded in layout blocks.
//!
//! [`BlockElement`] is the open discriminated union over the element
//! `type` vocabulary. Decoding is two-pass: the JSON object is first
//! captured whole, then the `type` discriminator selects the concrete
//! shape and the capture is decoded into it. The five select-menu
//! discriminators share one shape (as do their `multi_` counterparts,
//! and `mrkdwn`/`plain_text`); the discriminator is echoed into the
//! decoded record so no information is lost.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::composition::{ConfirmationDialog, ConversationFilter, OptionGroup, OptionObject, TextObject};
use crate::ids::{ChannelId, UserId};

/// A button.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonElement {
    /// Discriminator echo: `"button"`.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Button label.
    pub text: TextObject,
    /// Identifier echoed back in interaction payloads.
    pub action_id: String,
    /// URL opened instead of posting an interaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Value submitted with the interaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Visual style (`"primary"` or `"danger"`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    /// Confirmation dialog shown before the interaction fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

/// A group of checkboxes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckboxGroupsElement {
    /// Discriminator echo: `"checkboxes"`.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Identifier echoed back in interaction payloads.
    pub action_id: String,
    /// The selectable options.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionObject>,
    /// Options checked when the element first renders.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub initial_options: Vec<OptionObject>,
    /// Confirmation dialog shown before the interaction fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

/// A calendar date picker.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatePickerElement {
    /// Discriminator echo: `"datepicker"`.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Identifier echoed back in interaction payloads.
    pub action_id: String,
    /// Placeholder shown before a date is picked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Initially selected date, `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,
    /// Confirmation dialog shown before the interaction fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

/// A static image element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageElement {
    /// Discriminator echo: `"image"`.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Image source URL.
    pub image_url: String,
    /// Plain-text summary of the image.
    pub alt_text: String,
}

/// An overflow (`…`) menu.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverflowElement {
    /// Discriminator echo: `"overflow"`.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Identifier echoed back in interaction payloads.
    pub action_id: String,
    /// The menu entries.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionObject>,
    /// Confirmation dialog shown before the interaction fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

/// A plain-text input field.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlainTextInputElement {
    /// Discriminator echo: `"plain_text_input"`.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Identifier echoed back in interaction payloads.
    pub action_id: String,
    /// Placeholder shown while the field is empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Pre-filled value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    /// Whether the field spans multiple lines.
    pub multiline: bool,
    /// Minimum accepted length. Zero when absent from the wire.
    pub min_length: i64,
    /// Maximum accepted length. Zero when absent from the wire.
    pub max_length: i64,
}

/// A group of radio buttons.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadioButtonsElement {
    /// Discriminator echo: `"radio_buttons"`.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Identifier echoed back in interaction payloads.
    pub action_id: String,
    /// The selectable options.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionObject>,
    /// Option selected when the element first renders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    /// Confirmation dialog shown before the interaction fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

/// A single-choice select menu.
///
/// One shape for the five discriminators `static_select`,
/// `external_select`, `users_select`, `conversations_select`, and
/// `channels_select`; the wire discriminator is echoed into
/// [`element_type`](Self::element_type).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectElement {
    /// Discriminator echo, one of the five select discriminators.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Identifier echoed back in interaction payloads.
    pub action_id: String,
    /// Placeholder shown before a choice is made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Static options (`static_select`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionObject>,
    /// Grouped static options (`static_select`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub option_groups: Vec<OptionGroup>,
    /// Option selected when the menu first renders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    /// Pre-selected user (`users_select`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_user: Option<UserId>,
    /// Pre-selected conversation (`conversations_select`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_conversation: Option<ChannelId>,
    /// Pre-selected channel (`channels_select`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_channel: Option<ChannelId>,
    /// Minimum typed characters before external options load
    /// (`external_select`). Zero when absent from the wire.
    pub min_query_length: i64,
    /// Default to the conversation the interaction happened in
    /// (`conversations_select`).
    pub default_to_current_conversation: bool,
    /// Conversation filter (`conversations_select`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ConversationFilter>,
    /// Confirmation dialog shown before the interaction fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

/// A multi-choice select menu.
///
/// One shape for the five `multi_*` select discriminators, echoed into
/// [`element_type`](Self::element_type).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MultiSelectElement {
    /// Discriminator echo, one of the five `multi_*` discriminators.
    #[serde(rename = "type")]
    pub element_type: String,
    /// Identifier echoed back in interaction payloads.
    pub action_id: String,
    /// Placeholder shown before a choice is made.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    /// Static options (`multi_static_select`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionObject>,
    /// Grouped static options (`multi_static_select`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub option_groups: Vec<OptionGroup>,
    /// Options selected when the menu first renders.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub initial_options: Vec<OptionObject>,
    /// Pre-selected users (`multi_users_select`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub initial_users: Vec<UserId>,
    /// Pre-selected conversations (`multi_conversations_select`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub initial_conversations: Vec<ChannelId>,
    /// Pre-selected channels (`multi_channels_select`).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub initial_channels: Vec<ChannelId>,
    /// Minimum typed characters before external options load
    /// (`multi_external_select`). Zero when absent from the wire.
    pub min_query_length: i64,
    /// Maximum number of selectable items. Zero when absent.
    pub max_selected_items: i64,
    /// Conversation filter (`multi_conversations_select`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ConversationFilter>,
    /// Confirmation dialog shown before the interaction fires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmationDialog>,
}

/// An interactive control inside a layout block.
///
/// Construct by decoding; the variant matches the wire `type`
/// discriminator, retrievable via [`element_type()`](Self::element_type).
#[derive(Clone, Debug, PartialEq)]
pub enum BlockElement {
    /// `button`
    Button(ButtonElement),
    /// `checkboxes`
    Checkboxes(CheckboxGroupsElement),
    /// `datepicker`
    DatePicker(DatePickerElement),
    /// `image`
    Image(ImageElement),
    /// `overflow`
    Overflow(OverflowElement),
    /// `plain_text_input`
    PlainTextInput(PlainTextInputElement),
    /// `radio_buttons`
    RadioButtons(RadioButtonsElement),
    /// `static_select`, `external_select`, `users_select`,
    /// `conversations_select`, `channels_select`
    Select(SelectElement),
    /// `multi_static_select`, `multi_external_select`,
    /// `multi_users_select`, `multi_conversations_select`,
    /// `multi_channels_select`
    MultiSelect(MultiSelectElement),
    /// `mrkdwn`, `plain_text` — a text object used structurally as an
    /// element (context blocks).
    Text(TextObject),
}

impl BlockElement {
    /// The wire `type` discriminator this element was decoded from.
    #[must_use]
    pub fn element_type(&self) -> &str {
        match self {
            Self::Button(e) => &e.element_type,
            Self::Checkboxes(e) => &e.element_type,
            Self::DatePicker(e) => &e.element_type,
            Self::Image(e) => &e.element_type,
            Self::Overflow(e) => &e.element_type,
            Self::PlainTextInput(e) => &e.element_type,
            Self::RadioButtons(e) => &e.element_type,
            Self::Select(e) => &e.element_type,
            Self::MultiSelect(e) => &e.element_type,
            Self::Text(e) => &e.text_type,
        }
    }
}

fn element_from_value<T, E>(kind: &str, value: Value, wrap: fn(T) -> BlockElement) -> Result<BlockElement, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    serde_json::from_value::<T>(value)
        .map(wrap)
        .map_err(|e| de::Error::custom(format!("{kind} element: {e}")))
}

impl<'de> Deserialize<'de> for BlockElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| de::Error::custom("block element missing string \"type\""))?
            .to_owned();
        match kind.as_str() {
            "button" => element_from_value(&kind, value, Self::Button),
            "checkboxes" => element_from_value(&kind, value, Self::Checkboxes),
            "datepicker" => element_from_value(&kind, value, Self::DatePicker),
            "image" => element_from_value(&kind, value, Self::Image),
            "overflow" => element_from_value(&kind, value, Self::Overflow),
            "plain_text_input" => element_from_value(&kind, value, Self::PlainTextInput),
            "radio_buttons" => element_from_value(&kind, value, Self::RadioButtons),
            "static_select" | "external_select" | "users_select" | "conversations_select"
            | "channels_select" => element_from_value(&kind, value, Self::Select),
            "multi_static_select" | "multi_external_select" | "multi_users_select"
            | "multi_conversations_select" | "multi_channels_select" => {
                element_from_value(&kind, value, Self::MultiSelect)
            }
            "mrkdwn" | "plain_text" => element_from_value(&kind, value, Self::Text),
            other => Err(de::Error::custom(format!(
                "unknown block element type {other:?}"
            ))),
        }
    }
}

impl Serialize for BlockElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Button(e) => e.serialize(serializer),
            Self::Checkboxes(e) => e.serialize(serializer),
            Self::DatePicker(e) => e.serialize(serializer),
            Self::Image(e) => e.serialize(serializer),
            Self::Overflow(e) => e.serialize(serializer),
            Self::PlainTextInput(e) => e.serialize(serializer),
            Self::RadioButtons(e) => e.serialize(serializer),
            Self::Select(e) => e.serialize(serializer),
            Self::MultiSelect(e) => e.serialize(serializer),
            Self::Text(e) => e.serialize(serializer),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn datepicker_decodes_with_action_id_and_initial_date() {
        let el: BlockElement = serde_json::from_str(
            r#"{
                "type": "datepicker",
                "action_id": "pick-a-day",
                "initial_date": "1990-04-28",
                "placeholder": {"type": "plain_text", "text": "Select a date"}
            }"#,
        )
        .unwrap();
        assert_matches!(el, BlockElement::DatePicker(ref d) => {
            assert_eq!(d.action_id, "pick-a-day");
            assert_eq!(d.initial_date.as_deref(), Some("1990-04-28"));
        });
        assert_eq!(el.element_type(), "datepicker");
    }

    #[test]
    fn select_variants_share_one_shape_with_echoed_type() {
        for kind in [
            "static_select",
            "external_select",
            "users_select",
            "conversations_select",
            "channels_select",
        ] {
            let json = format!(r#"{{"type":"{kind}","action_id":"a"}}"#);
            let el: BlockElement = serde_json::from_str(&json).unwrap();
            assert_matches!(el, BlockElement::Select(ref s) => {
                assert_eq!(s.element_type, kind);
            });
        }
    }

    #[test]
    fn text_discriminators_both_map_to_text_object() {
        let m: BlockElement = serde_json::from_str(r#"{"type":"mrkdwn","text":"*x*"}"#).unwrap();
        let p: BlockElement =
            serde_json::from_str(r#"{"type":"plain_text","text":"x"}"#).unwrap();
        assert_eq!(m.element_type(), "mrkdwn");
        assert_eq!(p.element_type(), "plain_text");
        assert_matches!(m, BlockElement::Text(_));
        assert_matches!(p, BlockElement::Text(_));
    }

    #[test]
    fn unknown_discriminator_is_rejected_naming_the_value() {
        let err = serde_json::from_str::<BlockElement>(r#"{"type":"holo_display"}"#).unwrap_err();
        assert!(err.to_string().contains("holo_display"));
    }

    #[test]
    fn missing_discriminator_is_rejected() {
        let err = serde_json::from_str::<BlockElement>(r#"{"action_id":"a"}"#).unwrap_err();
        assert!(err.to_string().contains("missing string \"type\""));
    }

    #[test]
    fn absent_numerics_default_to_zero() {
        let el: BlockElement =
            serde_json::from_str(r#"{"type":"plain_text_input","action_id":"a"}"#).unwrap();
        assert_matches!(el, BlockElement::PlainTextInput(p) => {
            assert_eq!(p.min_length, 0);
            assert_eq!(p.max_length, 0);
            assert!(!p.multiline);
            assert_eq!(p.placeholder, None);
        });
    }

    #[test]
    fn serialize_round_trips_through_the_inner_shape() {
        let el: BlockElement = serde_json::from_str(
            r#"{"type":"button","text":{"type":"plain_text","text":"Go"},"action_id":"go"}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&el).unwrap();
        assert_eq!(json["type"], "button");
        assert_eq!(json["action_id"], "go");
    }
}
