//! Layout output types: pages of placed lines

use crate::PageGeometry;

/// A single line of text placed on a page.
///
/// Coordinates are millimetres from the top-left page corner; `y` is the
/// text baseline, matching how the writer positions strings.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub x: f32,
    pub y: f32,
}

impl PlacedLine {
    pub fn new(text: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// One page of placed lines
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PageLayout {
    pub index: usize,
    pub lines: Vec<PlacedLine>,
}

impl PageLayout {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            lines: Vec::new(),
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Page text, lines joined with newlines
    pub fn text(&self) -> String {
        let parts: Vec<&str> = self.lines.iter().map(|l| l.text.as_str()).collect();
        parts.join("\n")
    }
}

/// Complete multi-page layout for one export
#[derive(Debug, Clone, PartialEq)]
pub struct TextLayout {
    pub geometry: PageGeometry,
    pub pages: Vec<PageLayout>,
}

impl TextLayout {
    pub fn new(geometry: PageGeometry) -> Self {
        Self {
            geometry,
            pages: Vec::new(),
        }
    }

    pub fn add_page(&mut self, page: PageLayout) {
        self.pages.push(page);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total placed lines across all pages
    pub fn line_count(&self) -> usize {
        self.pages.iter().map(PageLayout::line_count).sum()
    }

    /// All text in reading order, pages and lines joined with newlines
    pub fn text(&self) -> String {
        let parts: Vec<String> = self.pages.iter().map(PageLayout::text).collect();
        parts.join("\n")
    }
}
