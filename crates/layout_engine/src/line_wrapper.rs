//! Line wrapping against a fixed content width
//!
//! Raw lines are wrapped greedily at UAX #14 break opportunities. A
//! segment wider than the whole content width is hard-split at grapheme
//! boundaries so nothing is ever dropped. Whitespace swallowed by a soft
//! break is the only text that does not reach the output.

use crate::{FontFamily, FontMetrics, BASE_FONT_SIZE_PT};
use unicode_linebreak::{linebreaks, BreakOpportunity};
use unicode_segmentation::UnicodeSegmentation;

/// Break classification for a segment boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BreakClass {
    Allowed,
    Mandatory,
}

/// Split `text` into wrappable segments. Each segment carries the break
/// class that applies after it; the final segment always ends the line.
fn segments(text: &str) -> Vec<(&str, BreakClass)> {
    let mut out = Vec::new();
    let mut start = 0;
    for (offset, opportunity) in linebreaks(text) {
        if offset == 0 || offset >= text.len() {
            continue;
        }
        let class = match opportunity {
            BreakOpportunity::Mandatory => BreakClass::Mandatory,
            BreakOpportunity::Allowed => BreakClass::Allowed,
        };
        out.push((&text[start..offset], class));
        start = offset;
    }
    out.push((&text[start..], BreakClass::Mandatory));
    out
}

/// Wraps single raw lines to a maximum width.
///
/// Measurement runs at [`BASE_FONT_SIZE_PT`], the size the writer renders
/// at; the user font size plays no part in wrapping.
pub struct LineWrapper {
    metrics: &'static FontMetrics,
}

impl LineWrapper {
    pub fn new(family: FontFamily) -> Self {
        Self {
            metrics: family.metrics(),
        }
    }

    /// Measured width of `text` at the base render size, in millimetres
    pub fn measure(&self, text: &str) -> f32 {
        self.metrics.text_width_mm(text, BASE_FONT_SIZE_PT)
    }

    /// Wrap one raw line (no embedded newlines) to `max_width` millimetres.
    ///
    /// Always returns at least one sub-line; an empty input yields one
    /// empty sub-line, which still occupies vertical space during layout.
    pub fn wrap(&self, text: &str, max_width: f32) -> Vec<String> {
        if text.is_empty() {
            return vec![String::new()];
        }

        let mut lines: Vec<String> = Vec::new();
        let mut current = String::new();

        for (segment, class) in segments(text) {
            let mut candidate = current.clone();
            candidate.push_str(segment);

            if self.measure(candidate.trim_end()) <= max_width {
                current = candidate;
            } else if current.trim_end().is_empty() {
                // Nothing committed on this line yet; the segment alone is
                // too wide and must be hard-split.
                current = self.hard_split(&candidate, max_width, &mut lines);
            } else {
                lines.push(current.trim_end().to_string());
                current = segment.to_string();
                if self.measure(current.trim_end()) > max_width {
                    let overflow = std::mem::take(&mut current);
                    current = self.hard_split(&overflow, max_width, &mut lines);
                }
            }

            if class == BreakClass::Mandatory {
                lines.push(current.trim_end().to_string());
                current.clear();
            }
        }

        lines
    }

    /// Emit grapheme-boundary chunks of `text` until the remainder fits,
    /// returning the remainder as the new current line.
    fn hard_split(&self, text: &str, max_width: f32, lines: &mut Vec<String>) -> String {
        let mut remainder = text;
        while self.measure(remainder.trim_end()) > max_width {
            let mut end = 0;
            let mut width = 0.0;
            for (idx, grapheme) in remainder.grapheme_indices(true) {
                let grapheme_width = self.metrics.text_width_mm(grapheme, BASE_FONT_SIZE_PT);
                // Never emit an empty chunk, even for an oversized grapheme
                if end > 0 && width + grapheme_width > max_width {
                    break;
                }
                width += grapheme_width;
                end = idx + grapheme.len();
            }
            lines.push(remainder[..end].to_string());
            remainder = &remainder[end..];
        }
        remainder.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn courier() -> LineWrapper {
        LineWrapper::new(FontFamily::CourierNew)
    }

    /// Width of `n` Courier characters at the base size
    fn courier_width(n: usize) -> f32 {
        n as f32 * 0.6 * BASE_FONT_SIZE_PT * crate::MM_PER_PT
    }

    #[test]
    fn test_short_line_is_untouched() {
        let lines = courier().wrap("hello", 100.0);
        assert_eq!(lines, vec!["hello"]);
    }

    #[test]
    fn test_empty_line_yields_one_empty_sub_line() {
        let lines = courier().wrap("", 100.0);
        assert_eq!(lines, vec![""]);
    }

    #[test]
    fn test_wraps_at_word_boundary() {
        // Ten characters fit per line
        let lines = courier().wrap("aaaa bbbb cccc", courier_width(10) + 0.01);
        assert_eq!(lines, vec!["aaaa bbbb", "cccc"]);
    }

    #[test]
    fn test_no_mid_word_split_when_word_fits() {
        let lines = courier().wrap("one twofold", courier_width(8) + 0.01);
        assert_eq!(lines, vec!["one", "twofold"]);
    }

    #[test]
    fn test_overlong_word_is_hard_split() {
        let lines = courier().wrap(&"x".repeat(25), courier_width(10) + 0.01);
        assert_eq!(lines, vec!["x".repeat(10), "x".repeat(10), "x".repeat(5)]);
    }

    #[test]
    fn test_hard_split_tail_joins_following_words() {
        // Oversized first word, then a word that fits beside the tail
        let text = format!("{} yz", "x".repeat(12));
        let lines = courier().wrap(&text, courier_width(10) + 0.01);
        assert_eq!(lines, vec!["x".repeat(10), "xx yz".to_string()]);
    }

    #[test]
    fn test_soft_break_drops_boundary_space_only() {
        let lines = courier().wrap("ab cd", courier_width(3) + 0.01);
        assert_eq!(lines, vec!["ab", "cd"]);
    }

    #[test]
    fn test_leading_whitespace_survives() {
        let lines = courier().wrap("  indented", 100.0);
        assert_eq!(lines, vec!["  indented"]);
    }

    #[test]
    fn test_wrapped_lines_fit_width() {
        let wrapper = LineWrapper::new(FontFamily::Arial);
        let text = "The quick brown fox jumps over the lazy dog again and again";
        for line in wrapper.wrap(text, 40.0) {
            assert!(wrapper.measure(line.trim_end()) <= 40.0 + 1e-3);
        }
    }

    #[test]
    fn test_combining_marks_stay_attached() {
        // "e" + combining acute must never be split apart
        let text = format!("{} tail", "e\u{301}".repeat(30));
        let lines = courier().wrap(&text, courier_width(8) + 0.01);
        for line in &lines {
            assert!(!line.starts_with('\u{301}'));
        }
    }

    proptest! {
        #[test]
        fn prop_non_whitespace_is_preserved(text in "[ -~]{0,160}") {
            let wrapper = LineWrapper::new(FontFamily::Arial);
            let joined: String = wrapper.wrap(&text, 45.0).concat();
            let original: String = text.chars().filter(|c| !c.is_whitespace()).collect();
            let kept: String = joined.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(original, kept);
        }

        #[test]
        fn prop_always_at_least_one_sub_line(text in "[ -~]{0,80}") {
            prop_assert!(!courier().wrap(&text, 50.0).is_empty());
        }
    }
}
