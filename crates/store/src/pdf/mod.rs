//! PDF export
//!
//! Turns a `layout_engine::TextLayout` into a complete PDF file:
//!
//! - `objects` - object model and serialization
//! - `content` - page content stream operators
//! - `fonts` - base-14 font selection
//! - `document` - catalog, page tree, and metadata dictionaries
//! - `options` - caller-facing export options
//! - `writer` - offset-tracking file writer and the exporter
//! - `api` - public entry points

mod api;
mod content;
mod document;
mod fonts;
mod objects;
mod options;
mod writer;

pub use api::{export_pdf, export_pdf_bytes, DEFAULT_EXPORT_FILE_NAME};
pub use options::PdfExportOptions;
pub use writer::{PdfError, PdfExporter};
