//! Document serialization
//!
//! The native save format is the raw-content JSON shape, so a saved
//! file can be re-imported through the JSON import path unchanged.

use crate::Result;
use doc_model::{Document, RawContent};

/// Serialize a document to JSON
pub fn serialize(document: &Document) -> Result<String> {
    let raw = RawContent::from_document(document);
    let json = serde_json::to_string_pretty(&raw)?;
    Ok(json)
}

/// Deserialize a document from JSON
pub fn deserialize(json: &str) -> Result<Document> {
    let raw: RawContent = serde_json::from_str(json)?;
    Ok(raw.to_document())
}
