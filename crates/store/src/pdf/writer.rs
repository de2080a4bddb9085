//! Incremental PDF file writer
//!
//! `PdfWriter` emits objects one at a time while tracking the byte
//! offset of each so the cross-reference table can be written last.
//! `PdfExporter` drives it: one page object and one content stream per
//! laid-out page, plus catalog, page tree, info, and a single font.

use std::io::Write;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use layout_engine::{PageLayout, TextLayout, BASE_FONT_SIZE_PT};
use thiserror::Error;

use crate::pdf::content::ContentStream;
use crate::pdf::document::{
    catalog_dict, mm_to_pt, page_dict, pages_dict, DocumentInfo, MediaBox,
};
use crate::pdf::fonts::{StandardFont, FONT_RESOURCE};
use crate::pdf::objects::{Dict, ObjId, Object, Stream};
use crate::pdf::options::PdfExportOptions;

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

pub type Result<T> = std::result::Result<T, PdfError>;

/// Byte offset of one written object
struct XrefEntry {
    id: ObjId,
    offset: u64,
}

/// Low-level writer tracking object offsets
pub struct PdfWriter<W: Write> {
    writer: W,
    position: u64,
    entries: Vec<XrefEntry>,
    next_id: u32,
    compress: bool,
}

impl<W: Write> PdfWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            position: 0,
            entries: Vec::new(),
            next_id: 1,
            compress: true,
        }
    }

    pub fn set_compression(&mut self, compress: bool) {
        self.compress = compress;
    }

    /// Reserves the next object number
    pub fn alloc(&mut self) -> ObjId {
        let id = ObjId(self.next_id);
        self.next_id += 1;
        id
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        self.position += bytes.len() as u64;
        Ok(())
    }

    /// Writes the version line and the binary comment marker
    pub fn write_header(&mut self) -> Result<()> {
        self.write_bytes(b"%PDF-1.4\n")?;
        self.write_bytes(&[b'%', 0xE2, 0xE3, 0xCF, 0xD3, b'\n'])?;
        Ok(())
    }

    /// Writes one indirect object and records its offset
    pub fn write_object(&mut self, id: ObjId, object: &Object) -> Result<()> {
        self.entries.push(XrefEntry {
            id,
            offset: self.position,
        });
        self.write_bytes(format!("{} 0 obj\n", id.0).as_bytes())?;
        let mut body = Vec::new();
        object.serialize(&mut body);
        self.write_bytes(&body)?;
        self.write_bytes(b"\nendobj\n")?;
        Ok(())
    }

    /// Writes a stream object, deflating its data when enabled
    pub fn write_stream(&mut self, id: ObjId, stream: Stream) -> Result<()> {
        let stream = if self.compress {
            compress_stream(stream)?
        } else {
            stream
        };
        self.write_object(id, &Object::Stream(stream))
    }

    /// Writes the xref table, trailer, and end-of-file marker
    pub fn write_xref_and_trailer(&mut self, root: ObjId, info: ObjId) -> Result<()> {
        self.entries.sort_by_key(|entry| entry.id);
        let xref_position = self.position;

        self.write_bytes(b"xref\n")?;
        self.write_bytes(format!("0 {}\n", self.next_id).as_bytes())?;
        self.write_bytes(b"0000000000 65535 f \n")?;
        let lines: Vec<String> = self
            .entries
            .iter()
            .map(|entry| format!("{:010} 00000 n \n", entry.offset))
            .collect();
        for line in lines {
            self.write_bytes(line.as_bytes())?;
        }

        let mut trailer = Dict::new();
        trailer.set("Size", i64::from(self.next_id));
        trailer.set("Root", root);
        trailer.set("Info", info);
        let mut body = Vec::new();
        Object::Dict(trailer).serialize(&mut body);
        self.write_bytes(b"trailer\n")?;
        self.write_bytes(&body)?;
        self.write_bytes(b"\n")?;
        self.write_bytes(b"startxref\n")?;
        self.write_bytes(format!("{}\n", xref_position).as_bytes())?;
        self.write_bytes(b"%%EOF\n")?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Deflates stream data and marks the filter on its dictionary
fn compress_stream(stream: Stream) -> Result<Stream> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(&stream.data)?;
    let compressed = encoder.finish()?;

    let mut dict = stream.dict;
    dict.set("Filter", Object::name("FlateDecode"));
    Ok(Stream::new(dict, compressed))
}

/// Renders one page's placed lines as a content stream.
///
/// Placed-line `y` is millimetres down from the page top; PDF's origin
/// is the bottom-left corner, so the vertical axis flips here. The
/// resulting coordinate is the text baseline. Glyphs render at the
/// fixed base size regardless of the layout's user font size.
fn render_page(page: &PageLayout, page_height_mm: f32) -> Vec<u8> {
    let mut content = ContentStream::new();
    for line in &page.lines {
        content
            .begin_text()
            .set_font(FONT_RESOURCE, f64::from(BASE_FONT_SIZE_PT))
            .move_text(mm_to_pt(line.x), mm_to_pt(page_height_mm - line.y))
            .show_text(&line.text)
            .end_text();
    }
    content.into_bytes()
}

/// Serializes a laid-out document as a complete PDF file
pub struct PdfExporter {
    options: PdfExportOptions,
}

impl PdfExporter {
    pub fn new(options: PdfExportOptions) -> Self {
        Self { options }
    }

    /// Writes the layout to `writer` and returns it
    pub fn write<W: Write>(&self, layout: &TextLayout, writer: W) -> Result<W> {
        if layout.pages.is_empty() {
            return Err(PdfError::InvalidDocument(
                "layout has no pages".to_string(),
            ));
        }

        let mut pdf = PdfWriter::new(writer);
        pdf.set_compression(self.options.compress);

        let catalog_id = pdf.alloc();
        let pages_id = pdf.alloc();
        let info_id = pdf.alloc();
        let font_id = pdf.alloc();
        let page_ids: Vec<ObjId> = layout.pages.iter().map(|_| pdf.alloc()).collect();
        let content_ids: Vec<ObjId> = layout.pages.iter().map(|_| pdf.alloc()).collect();

        pdf.write_header()?;
        pdf.write_object(catalog_id, &Object::Dict(catalog_dict(pages_id)))?;
        pdf.write_object(pages_id, &Object::Dict(pages_dict(&page_ids)))?;

        let info = DocumentInfo::new(self.options.title.clone(), self.options.author.clone());
        pdf.write_object(info_id, &Object::Dict(info.to_dict()))?;

        let font = StandardFont::for_family(self.options.font_family);
        pdf.write_object(font_id, &Object::Dict(font.font_dict()))?;

        let media_box = MediaBox::from_geometry(&layout.geometry);
        for (index, page) in layout.pages.iter().enumerate() {
            let data = render_page(page, layout.geometry.height);
            pdf.write_stream(content_ids[index], Stream::new(Dict::new(), data))?;
            pdf.write_object(
                page_ids[index],
                &Object::Dict(page_dict(pages_id, media_box, content_ids[index], font_id)),
            )?;
        }

        pdf.write_xref_and_trailer(catalog_id, info_id)?;
        tracing::debug!(
            pages = layout.pages.len(),
            objects = 4 + 2 * layout.pages.len(),
            compressed = self.options.compress,
            "PDF written"
        );
        pdf.finish()
    }

    /// Writes the layout into a fresh byte buffer
    pub fn write_to_bytes(&self, layout: &TextLayout) -> Result<Vec<u8>> {
        self.write(layout, Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_model::{Block, Document};
    use layout_engine::{FontFamily, LayoutOptions, PageGeometry, Paginator};

    fn layout_of(texts: &[&str]) -> TextLayout {
        let document = Document::from_blocks(texts.iter().map(|t| Block::new(*t)).collect());
        Paginator::a4(LayoutOptions::default())
            .layout(&document)
            .unwrap()
    }

    fn export(texts: &[&str], options: PdfExportOptions) -> Vec<u8> {
        PdfExporter::new(options)
            .write_to_bytes(&layout_of(texts))
            .unwrap()
    }

    fn uncompressed(texts: &[&str]) -> String {
        let bytes = export(texts, PdfExportOptions::new().with_compression(false));
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn test_file_starts_and_ends_with_markers() {
        let bytes = export(&["hello"], PdfExportOptions::default());
        assert!(bytes.starts_with(b"%PDF-1.4\n"));
        assert!(bytes.ends_with(b"%%EOF\n"));
    }

    #[test]
    fn test_file_has_required_sections() {
        let text = uncompressed(&["hello"]);
        assert!(text.contains("1 0 obj"));
        assert!(text.contains("/Type /Catalog"));
        assert!(text.contains("/Type /Pages"));
        assert!(text.contains("/Type /Page"));
        assert!(text.contains("xref"));
        assert!(text.contains("trailer"));
        assert!(text.contains("startxref"));
    }

    #[test]
    fn test_uncompressed_content_shows_text_operators() {
        let text = uncompressed(&["Visible text"]);
        assert!(text.contains("(Visible text) Tj"));
        assert!(text.contains("/F1 16 Tf"));
        assert!(!text.contains("/Filter /FlateDecode"));
    }

    #[test]
    fn test_compression_hides_text_and_sets_filter() {
        let bytes = export(&["Hidden text"], PdfExportOptions::default());
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("/Filter /FlateDecode"));
        assert!(!text.contains("(Hidden text) Tj"));
    }

    #[test]
    fn test_metadata_reaches_info_dictionary() {
        let options = PdfExportOptions::new()
            .with_title("My Notes")
            .with_author("A. Writer")
            .with_compression(false);
        let text = String::from_utf8_lossy(&export(&["x"], options)).into_owned();
        assert!(text.contains("/Title (My Notes)"));
        assert!(text.contains("/Author (A. Writer)"));
        assert!(text.contains("/Producer (Inkpad PDF Export)"));
    }

    #[test]
    fn test_page_count_matches_layout() {
        let texts: Vec<String> = (0..50).map(|i| format!("block {i}")).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();
        let text = uncompressed(&refs);
        assert!(text.contains("/Count 2"));
    }

    #[test]
    fn test_empty_layout_is_rejected() {
        let layout = TextLayout::new(PageGeometry::a4());
        let result = PdfExporter::new(PdfExportOptions::default()).write_to_bytes(&layout);
        assert!(matches!(result, Err(PdfError::InvalidDocument(_))));
    }

    #[test]
    fn test_font_family_selects_base_font() {
        let options = PdfExportOptions::new()
            .with_font_family(FontFamily::CourierNew)
            .with_compression(false);
        let text = String::from_utf8_lossy(&export(&["mono"], options)).into_owned();
        assert!(text.contains("/BaseFont /Courier"));
    }
}
