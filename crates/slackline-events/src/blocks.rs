//! Layout blocks: the container shapes of the platform's layout tree.
//!
//! [`Block`] is the discriminated union over the seven container
//! discriminators. Four of the shapes embed [`BlockElement`] fields;
//! those decode in two passes (container first, each embedded element
//! value re-dispatched through the element union). A nested element
//! failure aborts the whole block decode, wrapped with the embedding
//! context.

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use crate::composition::TextObject;
use crate::elements::BlockElement;

/// A section: text, optional side-by-side fields, and one optional
/// accessory element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionBlock {
    /// Discriminator echo: `"section"`.
    #[serde(rename = "type")]
    pub block_type: String,
    /// Opaque identifier correlating interaction payload state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    /// Main text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextObject>,
    /// Up to ten side-by-side text fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<TextObject>,
    /// One interactive element rendered beside the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<BlockElement>,
}

/// A horizontal divider.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DividerBlock {
    /// Discriminator echo: `"divider"`.
    #[serde(rename = "type")]
    pub block_type: String,
    /// Opaque identifier correlating interaction payload state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

/// A full-width image.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageBlock {
    /// Discriminator echo: `"image"`.
    #[serde(rename = "type")]
    pub block_type: String,
    /// Opaque identifier correlating interaction payload state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    /// Image source URL.
    pub image_url: String,
    /// Plain-text summary of the image.
    pub alt_text: String,
    /// Optional title rendered above the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextObject>,
}

/// A row of interactive elements.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionsBlock {
    /// Discriminator echo: `"actions"`.
    #[serde(rename = "type")]
    pub block_type: String,
    /// Opaque identifier correlating interaction payload state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    /// The interactive elements, decoded through the element union.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<BlockElement>,
}

/// Contextual text and images rendered small.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextBlock {
    /// Discriminator echo: `"context"`.
    #[serde(rename = "type")]
    pub block_type: String,
    /// Opaque identifier correlating interaction payload state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    /// Text objects and image elements, decoded through the element union.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<BlockElement>,
}

/// A labelled input holding exactly one interactive element.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputBlock {
    /// Discriminator echo: `"input"`.
    #[serde(rename = "type")]
    pub block_type: String,
    /// Opaque identifier correlating interaction payload state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    /// Input label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<TextObject>,
    /// The embedded element, decoded through the element union.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element: Option<BlockElement>,
    /// Hint rendered below the element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<TextObject>,
    /// Whether the input may be left empty.
    pub optional: bool,
    /// Whether element interactions dispatch immediately.
    pub dispatch_action: bool,
}

/// A remote file reference.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBlock {
    /// Discriminator echo: `"file"`.
    #[serde(rename = "type")]
    pub block_type: String,
    /// Opaque identifier correlating interaction payload state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
    /// External file identifier.
    pub external_id: String,
    /// File source, always `"remote"`.
    pub source: String,
}

/// A layout container inside a view or message payload.
#[derive(Clone, Debug, PartialEq)]
pub enum Block {
    /// `section`
    Section(SectionBlock),
    /// `divider`
    Divider(DividerBlock),
    /// `image`
    Image(ImageBlock),
    /// `actions`
    Actions(ActionsBlock),
    /// `context`
    Context(ContextBlock),
    /// `input`
    Input(InputBlock),
    /// `file`
    File(FileBlock),
}

impl Block {
    /// The wire `type` discriminator this block was decoded from.
    #[must_use]
    pub fn block_type(&self) -> &str {
        match self {
            Self::Section(b) => &b.block_type,
            Self::Divider(b) => &b.block_type,
            Self::Image(b) => &b.block_type,
            Self::Actions(b) => &b.block_type,
            Self::Context(b) => &b.block_type,
            Self::Input(b) => &b.block_type,
            Self::File(b) => &b.block_type,
        }
    }

    /// The optional opaque block identifier.
    #[must_use]
    pub fn block_id(&self) -> Option<&str> {
        let id = match self {
            Self::Section(b) => &b.block_id,
            Self::Divider(b) => &b.block_id,
            Self::Image(b) => &b.block_id,
            Self::Actions(b) => &b.block_id,
            Self::Context(b) => &b.block_id,
            Self::Input(b) => &b.block_id,
            Self::File(b) => &b.block_id,
        };
        id.as_deref()
    }
}

fn block_from_value<T, E>(kind: &str, value: Value, wrap: fn(T) -> Block) -> Result<Block, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    serde_json::from_value::<T>(value)
        .map(wrap)
        .map_err(|e| de::Error::custom(format!("{kind} block: {e}")))
}

impl<'de> Deserialize<'de> for Block {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| de::Error::custom("block missing string \"type\""))?
            .to_owned();
        match kind.as_str() {
            "section" => block_from_value(&kind, value, Self::Section),
            "divider" => block_from_value(&kind, value, Self::Divider),
            "image" => block_from_value(&kind, value, Self::Image),
            "actions" => block_from_value(&kind, value, Self::Actions),
            "context" => block_from_value(&kind, value, Self::Context),
            "input" => block_from_value(&kind, value, Self::Input),
            "file" => block_from_value(&kind, value, Self::File),
            other => Err(de::Error::custom(format!("unknown block type {other:?}"))),
        }
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Section(b) => b.serialize(serializer),
            Self::Divider(b) => b.serialize(serializer),
            Self::Image(b) => b.serialize(serializer),
            Self::Actions(b) => b.serialize(serializer),
            Self::Context(b) => b.serialize(serializer),
            Self::Input(b) => b.serialize(serializer),
            Self::File(b) => b.serialize(serializer),
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
    fn section_accessory_decodes_to_concrete_datepicker() {
        // Two-level polymorphic nesting: Block -> BlockElement.
        let block: Block = serde_json::from_str(
            r#"{
                "type": "section",
                "block_id": "sec-1",
                "text": {"type": "mrkdwn", "text": "Pick a date"},
                "accessory": {
                    "type": "datepicker",
                    "action_id": "datepicker123",
                    "initial_date": "1990-04-28"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(block.block_id(), Some("sec-1"));
        assert_matches!(block, Block::Section(s) => {
            assert_matches!(s.accessory, Some(BlockElement::DatePicker(d)) => {
                assert_eq!(d.action_id, "datepicker123");
                assert_eq!(d.initial_date.as_deref(), Some("1990-04-28"));
            });
        });
    }

    #[test]
    fn actions_block_decodes_each_element_independently() {
        let block: Block = serde_json::from_str(
            r#"{
                "type": "actions",
                "elements": [
                    {"type": "button", "action_id": "ok", "text": {"type": "plain_text", "text": "OK"}},
                    {"type": "overflow", "action_id": "more"}
                ]
            }"#,
        )
        .unwrap();
        assert_matches!(block, Block::Actions(a) => {
            assert_eq!(a.elements.len(), 2);
            assert_eq!(a.elements[0].element_type(), "button");
            assert_eq!(a.elements[1].element_type(), "overflow");
        });
    }

    #[test]
    fn nested_element_failure_aborts_with_embedding_context() {
        let err = serde_json::from_str::<Block>(
            r#"{"type":"section","accessory":{"type":"warp_core"}}"#,
        )
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("section block"), "{msg}");
        assert!(msg.contains("warp_core"), "{msg}");
    }

    #[test]
    fn unknown_block_type_is_rejected_naming_the_value() {
        let err = serde_json::from_str::<Block>(r#"{"type":"hologram"}"#).unwrap_err();
        assert!(err.to_string().contains("hologram"));
    }

    #[test]
    fn divider_needs_only_its_discriminator() {
        let block: Block = serde_json::from_str(r#"{"type":"divider"}"#).unwrap();
        assert_eq!(block.block_type(), "divider");
        assert_eq!(block.block_id(), None);
    }

    #[test]
    fn serialize_emits_the_wire_discriminator() {
        let block: Block = serde_json::from_str(
            r#"{"type":"input","label":{"type":"plain_text","text":"Name"},"element":{"type":"plain_text_input","action_id":"n"}}"#,
        )
        .unwrap();
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "input");
        assert_eq!(json["element"]["type"], "plain_text_input");
    }
}
