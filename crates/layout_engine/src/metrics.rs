//! Approximate text metrics for the selectable font families
//!
//! Widths are per character class in thousandths of an em, close to the
//! advance widths of the matching standard PDF fonts. The user font size
//! never reaches these tables: measurement always runs at the writer's
//! fixed base size, which is also the size glyphs render at. Only line
//! spacing follows the user font size.

use serde::{Deserialize, Serialize};

/// Font size glyphs are measured and rendered at, in points
pub const BASE_FONT_SIZE_PT: f32 = 16.0;

/// Millimetres per PostScript point
pub const MM_PER_PT: f32 = 25.4 / 72.0;

/// The font families offered by the editor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontFamily {
    #[default]
    Arial,
    #[serde(rename = "Courier New")]
    CourierNew,
    Georgia,
    #[serde(rename = "Times New Roman")]
    TimesNewRoman,
    Verdana,
}

impl FontFamily {
    /// All selectable families, in picker order
    pub fn all() -> [FontFamily; 5] {
        [
            FontFamily::Arial,
            FontFamily::CourierNew,
            FontFamily::Georgia,
            FontFamily::TimesNewRoman,
            FontFamily::Verdana,
        ]
    }

    /// Display name as the picker shows it
    pub fn name(&self) -> &'static str {
        match self {
            FontFamily::Arial => "Arial",
            FontFamily::CourierNew => "Courier New",
            FontFamily::Georgia => "Georgia",
            FontFamily::TimesNewRoman => "Times New Roman",
            FontFamily::Verdana => "Verdana",
        }
    }

    /// Look up a family by display name, case-insensitively
    pub fn from_name(name: &str) -> Option<FontFamily> {
        let lower = name.trim().to_lowercase();
        FontFamily::all()
            .into_iter()
            .find(|family| family.name().to_lowercase() == lower)
    }

    /// Width table for this family
    pub fn metrics(&self) -> &'static FontMetrics {
        match self {
            FontFamily::Arial => &ARIAL,
            FontFamily::CourierNew => &COURIER_NEW,
            FontFamily::Georgia => &GEORGIA,
            FontFamily::TimesNewRoman => &TIMES_NEW_ROMAN,
            FontFamily::Verdana => &VERDANA,
        }
    }
}

impl std::fmt::Display for FontFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-class advance widths in thousandths of an em
#[derive(Debug, Clone, Copy)]
pub struct FontMetrics {
    pub upper: u16,
    pub lower: u16,
    pub digit: u16,
    pub space: u16,
    pub punct: u16,
    pub other: u16,
}

pub static ARIAL: FontMetrics = FontMetrics {
    upper: 720,
    lower: 500,
    digit: 556,
    space: 278,
    punct: 333,
    other: 600,
};

pub static COURIER_NEW: FontMetrics = FontMetrics {
    upper: 600,
    lower: 600,
    digit: 600,
    space: 600,
    punct: 600,
    other: 600,
};

pub static GEORGIA: FontMetrics = FontMetrics {
    upper: 740,
    lower: 520,
    digit: 600,
    space: 260,
    punct: 330,
    other: 620,
};

pub static TIMES_NEW_ROMAN: FontMetrics = FontMetrics {
    upper: 680,
    lower: 460,
    digit: 500,
    space: 250,
    punct: 330,
    other: 560,
};

pub static VERDANA: FontMetrics = FontMetrics {
    upper: 780,
    lower: 570,
    digit: 635,
    space: 352,
    punct: 370,
    other: 650,
};

impl FontMetrics {
    /// Advance width of one character, in em thousandths
    pub fn char_width(&self, c: char) -> u16 {
        if ('\u{0300}'..='\u{036F}').contains(&c) {
            // Combining diacritics advance nothing
            0
        } else if c == ' ' || c == '\t' {
            self.space
        } else if c.is_ascii_digit() {
            self.digit
        } else if c.is_uppercase() {
            self.upper
        } else if c.is_lowercase() {
            self.lower
        } else if c.is_ascii_punctuation() {
            self.punct
        } else {
            self.other
        }
    }

    /// Width of `text` in em units at size 1
    pub fn text_width_em(&self, text: &str) -> f32 {
        text.chars()
            .map(|c| self.char_width(c) as f32 / 1000.0)
            .sum()
    }

    /// Width of `text` in millimetres at the given point size
    pub fn text_width_mm(&self, text: &str, font_size_pt: f32) -> f32 {
        self.text_width_em(text) * font_size_pt * MM_PER_PT
    }
}
