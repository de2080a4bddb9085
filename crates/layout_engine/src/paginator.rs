//! Document pagination
//!
//! Flows a document's blocks onto pages: block text splits on hard
//! newlines, each raw line wraps to the content width, and placed lines
//! accumulate down the page under a vertical cursor. When the next line
//! would cross the bottom margin a fresh page is started.
//!
//! The vertical advance is a pure function of the user font size; glyph
//! metrics never enter the cursor arithmetic. The page-break check also
//! uses only the advance, so a rendered line's bottom edge may overshoot
//! the margin slightly at large sizes.

use crate::{
    FontFamily, LayoutError, LineWrapper, PageGeometry, PageLayout, PlacedLine, Result, TextLayout,
};
use doc_model::Document;
use serde::{Deserialize, Serialize};

/// Base line-height unit in millimetres
pub const LINE_HEIGHT_UNIT_MM: f32 = 0.2;
/// Font size the line-height unit is defined against
pub const REFERENCE_FONT_SIZE: f32 = 10.0;
/// Multiplier converting the scaled unit into the per-line advance
pub const LINE_SPACING_FACTOR: f32 = 12.0;
/// Default user font size
pub const DEFAULT_FONT_SIZE: u32 = 14;

/// Vertical advance per line in millimetres for a user font size
pub fn line_height_increment(font_size: u32) -> f32 {
    LINE_HEIGHT_UNIT_MM * (font_size as f32 / REFERENCE_FONT_SIZE) * LINE_SPACING_FACTOR
}

/// Vertical spacing of wrapped continuation lines.
///
/// `Legacy` reproduces the historical output exactly: every sub-line
/// after the first in a wrapped group advances the cursor once before
/// writing, on top of the advance after every write, so continuation
/// lines sit a double increment apart. `Uniform` spaces all lines a
/// single increment apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WrapSpacing {
    #[default]
    Legacy,
    Uniform,
}

/// Layout configuration for one export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutOptions {
    /// Font family used for wrap measurement and rendering
    #[serde(default)]
    pub font_family: FontFamily,
    /// User font size; scales the line-height advance only
    #[serde(default = "default_font_size")]
    pub font_size: u32,
    /// Continuation-line spacing policy
    #[serde(default)]
    pub wrap_spacing: WrapSpacing,
}

fn default_font_size() -> u32 {
    DEFAULT_FONT_SIZE
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            font_family: FontFamily::default(),
            font_size: DEFAULT_FONT_SIZE,
            wrap_spacing: WrapSpacing::default(),
        }
    }
}

impl LayoutOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_font_family(mut self, family: FontFamily) -> Self {
        self.font_family = family;
        self
    }

    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = size;
        self
    }

    pub fn with_wrap_spacing(mut self, spacing: WrapSpacing) -> Self {
        self.wrap_spacing = spacing;
        self
    }
}

/// Flows documents onto pages
pub struct Paginator {
    geometry: PageGeometry,
    options: LayoutOptions,
}

impl Paginator {
    /// Create a paginator for the given geometry and options
    pub fn new(geometry: PageGeometry, options: LayoutOptions) -> Self {
        Self { geometry, options }
    }

    /// Create a paginator for default A4 geometry
    pub fn a4(options: LayoutOptions) -> Self {
        Self::new(PageGeometry::a4(), options)
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn options(&self) -> &LayoutOptions {
        &self.options
    }

    /// Lay the document out into pages.
    ///
    /// The document is read only; every block's text appears in the
    /// output in order. An empty document still produces one page.
    pub fn layout(&self, document: &Document) -> Result<TextLayout> {
        self.geometry.validate()?;
        if self.options.font_size == 0 {
            return Err(LayoutError::InvalidArgument(
                "font size must be positive".to_string(),
            ));
        }

        let increment = line_height_increment(self.options.font_size);
        let margin = self.geometry.margin;
        let limit = self.geometry.height - margin;
        let content_width = self.geometry.content_width();
        let wrapper = LineWrapper::new(self.options.font_family);

        let mut layout = TextLayout::new(self.geometry);
        let mut page = PageLayout::new(0);
        let mut y = margin;

        for block in document.iter() {
            for raw_line in block.text.split('\n') {
                let sub_lines = wrapper.wrap(raw_line, content_width);
                for (wrap_index, sub_line) in sub_lines.iter().enumerate() {
                    if y + increment > limit {
                        let next_index = page.index + 1;
                        layout.add_page(std::mem::take(&mut page));
                        page.index = next_index;
                        y = margin;
                    }
                    if wrap_index > 0 && self.options.wrap_spacing == WrapSpacing::Legacy {
                        y += increment;
                    }
                    page.lines.push(PlacedLine::new(sub_line.clone(), margin, y));
                    y += increment;
                }
            }
            // Inter-block spacing
            y += increment;
        }

        if !page.lines.is_empty() || layout.pages.is_empty() {
            layout.add_page(page);
        }

        tracing::debug!(
            pages = layout.page_count(),
            lines = layout.line_count(),
            font_size = self.options.font_size,
            "document paginated"
        );
        Ok(layout)
    }
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new(PageGeometry::a4(), LayoutOptions::default())
    }
}
