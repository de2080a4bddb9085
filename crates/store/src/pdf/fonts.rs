//! Standard 14 font selection
//!
//! The editor's font families map onto the base-14 faces every viewer
//! ships, so no font program is embedded.

use layout_engine::FontFamily;

use crate::pdf::objects::{Dict, Object};

/// Resource name the page content refers to
pub const FONT_RESOURCE: &str = "F1";

/// The subset of base-14 faces we emit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    Courier,
    TimesRoman,
}

impl StandardFont {
    /// PostScript name used as `/BaseFont`
    pub fn pdf_name(self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::Courier => "Courier",
            StandardFont::TimesRoman => "Times-Roman",
        }
    }

    /// Nearest base-14 face for an editor font family
    pub fn for_family(family: FontFamily) -> Self {
        match family {
            FontFamily::Arial | FontFamily::Verdana => StandardFont::Helvetica,
            FontFamily::CourierNew => StandardFont::Courier,
            FontFamily::Georgia | FontFamily::TimesNewRoman => StandardFont::TimesRoman,
        }
    }

    /// Font dictionary for this face, WinAnsi encoded
    pub fn font_dict(self) -> Dict {
        let mut dict = Dict::of_type("Font");
        dict.set("Subtype", Object::name("Type1"));
        dict.set("BaseFont", Object::name(self.pdf_name()));
        dict.set("Encoding", Object::name("WinAnsiEncoding"));
        dict
    }
}
