//! Document-level structures: catalog, page tree, and metadata

use layout_engine::PageGeometry;

use crate::pdf::fonts::FONT_RESOURCE;
use crate::pdf::objects::{Dict, ObjId, Object};

/// Converts millimetres to PDF points (1/72 inch)
pub(crate) fn mm_to_pt(mm: f32) -> f64 {
    f64::from(mm) * (72.0 / 25.4)
}

/// Page size in points, as emitted in `/MediaBox`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MediaBox {
    pub width: f64,
    pub height: f64,
}

impl MediaBox {
    pub fn from_geometry(geometry: &PageGeometry) -> Self {
        Self {
            width: mm_to_pt(geometry.width),
            height: mm_to_pt(geometry.height),
        }
    }

    pub fn to_array(self) -> Object {
        Object::Array(vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Real(self.width),
            Object::Real(self.height),
        ])
    }
}

/// Metadata written into the information dictionary
#[derive(Debug, Clone)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub creator: String,
    pub producer: String,
    pub creation_date: String,
}

impl DocumentInfo {
    pub fn new(title: Option<String>, author: Option<String>) -> Self {
        Self {
            title,
            author,
            creator: "Inkpad".to_string(),
            producer: "Inkpad PDF Export".to_string(),
            creation_date: pdf_date_now(),
        }
    }

    pub fn to_dict(&self) -> Dict {
        let mut dict = Dict::new();
        if let Some(title) = &self.title {
            dict.set("Title", Object::literal(title.clone()));
        }
        if let Some(author) = &self.author {
            dict.set("Author", Object::literal(author.clone()));
        }
        dict.set("Creator", Object::literal(self.creator.clone()));
        dict.set("Producer", Object::literal(self.producer.clone()));
        dict.set("CreationDate", Object::literal(self.creation_date.clone()));
        dict
    }
}

/// Current UTC time in PDF date format, `D:YYYYMMDDHHmmSSZ`
fn pdf_date_now() -> String {
    chrono::Utc::now().format("D:%Y%m%d%H%M%SZ").to_string()
}

/// Catalog dictionary pointing at the page tree root
pub fn catalog_dict(pages: ObjId) -> Dict {
    let mut dict = Dict::of_type("Catalog");
    dict.set("Pages", pages);
    dict
}

/// Page tree root listing every page
pub fn pages_dict(kids: &[ObjId]) -> Dict {
    let mut dict = Dict::of_type("Pages");
    dict.set(
        "Kids",
        Object::Array(kids.iter().map(|id| Object::Ref(*id)).collect()),
    );
    dict.set("Count", kids.len() as i64);
    dict
}

/// A single page object with its content stream and font resource
pub fn page_dict(parent: ObjId, media_box: MediaBox, contents: ObjId, font: ObjId) -> Dict {
    let mut fonts = Dict::new();
    fonts.set(FONT_RESOURCE, font);

    let mut resources = Dict::new();
    resources.set("Font", fonts);
    resources.set(
        "ProcSet",
        Object::Array(vec![Object::name("PDF"), Object::name("Text")]),
    );

    let mut dict = Dict::of_type("Page");
    dict.set("Parent", parent);
    dict.set("MediaBox", media_box.to_array());
    dict.set("Contents", contents);
    dict.set("Resources", resources);
    dict
}
