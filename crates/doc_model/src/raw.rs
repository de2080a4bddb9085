//! Raw content - the serializable interchange form of a document
//!
//! Mirrors the draft-style raw JSON the editor widget produces: a `blocks`
//! array plus an `entityMap`. Only block text feeds the document model; the
//! style/entity fields are carried through untouched so a round trip does
//! not discard what the widget wrote.

use crate::{Block, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Block type tag used for plain paragraphs
pub const UNSTYLED: &str = "unstyled";

/// An inline style span within a raw block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStyleRange {
    pub offset: u32,
    pub length: u32,
    pub style: String,
}

/// An entity reference span within a raw block
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntityRange {
    pub offset: u32,
    pub length: u32,
    pub key: u32,
}

/// One block of the raw representation.
///
/// `text` is required; everything else defaults so hand-written or older
/// payloads still parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    #[serde(default)]
    pub key: String,
    pub text: String,
    #[serde(rename = "type", default = "default_block_type")]
    pub block_type: String,
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub inline_style_ranges: Vec<RawStyleRange>,
    #[serde(default)]
    pub entity_ranges: Vec<RawEntityRange>,
    #[serde(default)]
    pub data: Map<String, Value>,
}

fn default_block_type() -> String {
    UNSTYLED.to_string()
}

impl RawBlock {
    /// Create a plain unstyled block with a fresh key
    pub fn unstyled(text: impl Into<String>) -> Self {
        Self {
            key: generate_block_key(),
            text: text.into(),
            block_type: default_block_type(),
            depth: 0,
            inline_style_ranges: Vec::new(),
            entity_ranges: Vec::new(),
            data: Map::new(),
        }
    }
}

/// The complete raw document payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawContent {
    pub blocks: Vec<RawBlock>,
    #[serde(default)]
    pub entity_map: Map<String, Value>,
}

impl RawContent {
    /// Build the raw form of a document. Every block gets a fresh key and
    /// the unstyled type; there are no entities to carry.
    pub fn from_document(document: &Document) -> Self {
        Self {
            blocks: document
                .iter()
                .map(|block| RawBlock::unstyled(block.text.clone()))
                .collect(),
            entity_map: Map::new(),
        }
    }

    /// Rebuild a document from the raw form. Only block text survives;
    /// inline styles and entities are outside this model.
    pub fn to_document(&self) -> Document {
        self.blocks
            .iter()
            .map(|raw| Block::new(raw.text.clone()))
            .collect()
    }
}

/// Short random block key, unique enough for interchange payloads
pub fn generate_block_key() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string();
    id[..8].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget_payload() -> &'static str {
        r#"{
            "blocks": [
                {
                    "key": "9gm3s",
                    "text": "Hello world",
                    "type": "unstyled",
                    "depth": 0,
                    "inlineStyleRanges": [{"offset": 0, "length": 5, "style": "BOLD"}],
                    "entityRanges": [],
                    "data": {}
                },
                {
                    "key": "e23a8",
                    "text": "Second paragraph",
                    "type": "unstyled",
                    "depth": 0,
                    "inlineStyleRanges": [],
                    "entityRanges": [],
                    "data": {}
                }
            ],
            "entityMap": {}
        }"#
    }

    #[test]
    fn test_parse_widget_payload() {
        let raw: RawContent = serde_json::from_str(widget_payload()).unwrap();
        assert_eq!(raw.blocks.len(), 2);
        assert_eq!(raw.blocks[0].text, "Hello world");
        assert_eq!(raw.blocks[0].inline_style_ranges[0].style, "BOLD");
    }

    #[test]
    fn test_to_document_keeps_only_text() {
        let raw: RawContent = serde_json::from_str(widget_payload()).unwrap();
        let doc = raw.to_document();
        assert_eq!(doc.block_count(), 2);
        assert_eq!(doc.blocks()[1].text, "Second paragraph");
    }

    #[test]
    fn test_minimal_payload_fills_defaults() {
        let raw: RawContent =
            serde_json::from_str(r#"{"blocks": [{"text": "bare"}]}"#).unwrap();
        assert_eq!(raw.blocks[0].block_type, UNSTYLED);
        assert_eq!(raw.blocks[0].depth, 0);
        assert!(raw.entity_map.is_empty());
    }

    #[test]
    fn test_missing_blocks_is_an_error() {
        let result: Result<RawContent, _> = serde_json::from_str(r#"{"entityMap": {}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_document_round_trip() {
        let doc = Document::from_text("one\ntwo\nthree");
        let raw = RawContent::from_document(&doc);
        assert_eq!(raw.blocks.len(), 3);
        assert!(raw.blocks.iter().all(|b| b.key.len() == 8));
        assert_eq!(raw.to_document(), doc);
    }

    #[test]
    fn test_serialized_field_names_match_widget() {
        let raw = RawContent::from_document(&Document::from_text("x"));
        let json = serde_json::to_string(&raw).unwrap();
        assert!(json.contains("\"entityMap\""));
        assert!(json.contains("\"inlineStyleRanges\""));
        assert!(json.contains("\"type\":\"unstyled\""));
    }

    #[test]
    fn test_generated_keys_are_distinct() {
        assert_ne!(generate_block_key(), generate_block_key());
    }
}
