//! Block - one paragraph-unit of plain text

use serde::{Deserialize, Serialize};

/// A single paragraph-unit of plain text.
///
/// Blocks carry no inline style spans. The text may contain embedded
/// line-break characters; layout treats those as hard newlines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// The block's text content
    pub text: String,
}

impl Block {
    /// Create a block from any string-like value
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Create an empty block
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when the block holds no text at all
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of hard lines in this block (embedded line breaks plus one)
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }
}

impl From<&str> for Block {
    fn from(text: &str) -> Self {
        Block::new(text)
    }
}

impl From<String> for Block {
    fn from(text: String) -> Self {
        Block { text }
    }
}
