//! Document - an ordered sequence of plain-text blocks
//!
//! Documents are replaced wholesale (import, undo/redo, widget edits); no
//! partial mutation API exists. Layout and export take the document by
//! shared reference and never modify it.

use crate::Block;
use serde::{Deserialize, Serialize};

/// An ordered sequence of [`Block`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    /// Create an empty document (no blocks)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document from existing blocks
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Create a document from plain text, one block per line.
    ///
    /// Line breaks (`\r\n`, `\r`, or `\n`) separate blocks; blank lines
    /// become empty blocks. This mirrors how the editor widget builds
    /// content from pasted or extracted text.
    pub fn from_text(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let blocks = normalized.split('\n').map(Block::new).collect();
        Self { blocks }
    }

    /// All blocks, in document order
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterate over blocks in document order
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Number of blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// True when the document holds no blocks
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// The full text, blocks joined with newlines
    pub fn text(&self) -> String {
        let parts: Vec<&str> = self.blocks.iter().map(|b| b.text.as_str()).collect();
        parts.join("\n")
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self {
            blocks: iter.into_iter().collect(),
        }
    }
}
