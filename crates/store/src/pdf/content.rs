//! Page content stream construction
//!
//! Builds the operator sequence for one page. Only text-showing
//! operators are needed: each placed line becomes its own text object.

use crate::pdf::objects::{fmt_real, write_literal};

/// Accumulates content-stream operators for a single page
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_text(&mut self) -> &mut Self {
        self.data.extend_from_slice(b"BT\n");
        self
    }

    pub fn end_text(&mut self) -> &mut Self {
        self.data.extend_from_slice(b"ET\n");
        self
    }

    /// Selects `font` at `size` points
    pub fn set_font(&mut self, font: &str, size: f64) -> &mut Self {
        self.data
            .extend_from_slice(format!("/{} {} Tf\n", font, fmt_real(size)).as_bytes());
        self
    }

    /// Moves the text position to `(x, y)` in page space
    pub fn move_text(&mut self, x: f64, y: f64) -> &mut Self {
        self.data
            .extend_from_slice(format!("{} {} Td\n", fmt_real(x), fmt_real(y)).as_bytes());
        self
    }

    /// Shows `text` at the current position
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        write_literal(text, &mut self.data);
        self.data.extend_from_slice(b" Tj\n");
        self
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_a_text_object() {
        let mut content = ContentStream::new();
        content
            .begin_text()
            .set_font("F1", 16.0)
            .move_text(28.35, 780.5)
            .show_text("Hello")
            .end_text();
        let text = String::from_utf8(content.into_bytes()).unwrap();
        assert_eq!(text, "BT\n/F1 16 Tf\n28.35 780.5 Td\n(Hello) Tj\nET\n");
    }

    #[test]
    fn escapes_shown_text() {
        let mut content = ContentStream::new();
        content.show_text("f(x) = y");
        let text = String::from_utf8(content.into_bytes()).unwrap();
        assert_eq!(text, "(f\\(x\\) = y) Tj\n");
    }
}
