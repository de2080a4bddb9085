//! Export options

use layout_engine::FontFamily;
use serde::{Deserialize, Serialize};

/// Options accepted by the PDF export entry points
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfExportOptions {
    /// Document title for the information dictionary
    #[serde(default)]
    pub title: Option<String>,

    /// Document author for the information dictionary
    #[serde(default)]
    pub author: Option<String>,

    /// Face used for all page text
    #[serde(default)]
    pub font_family: FontFamily,

    /// Deflate-compress page content streams
    #[serde(default = "default_compress")]
    pub compress: bool,
}

fn default_compress() -> bool {
    true
}

impl Default for PdfExportOptions {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            font_family: FontFamily::default(),
            compress: true,
        }
    }
}

impl PdfExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}
