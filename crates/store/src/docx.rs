//! DOCX text import
//!
//! Extracts the raw prose of a WordprocessingML package: run text in
//! document order, explicit breaks as `\n`, tabs as `\t`, paragraphs
//! joined with blank lines. All formatting is discarded.

use std::io::Cursor;

use doc_model::Document;
use quick_xml::events::Event;

use crate::error::{ImportError, ImportResult};
use crate::opc::{matches_element, xml_reader, OpcPackage};

/// Imports an in-memory DOCX file as a plain-text document
pub fn import_docx_bytes(bytes: &[u8]) -> ImportResult<Document> {
    let mut package = OpcPackage::new(Cursor::new(bytes))?;
    if !package.has_part("[Content_Types].xml") || !package.has_part("word/document.xml") {
        return Err(ImportError::InvalidStructure(
            "missing required WordprocessingML parts".to_string(),
        ));
    }

    let document_xml = package.read_part("word/document.xml")?;
    let text = extract_text(&document_xml)?;
    let document = Document::from_text(&text);
    tracing::debug!(blocks = document.block_count(), "DOCX imported");
    Ok(document)
}

/// Collects paragraph text from `word/document.xml`.
///
/// Text is only read inside `w:t` under an open run, so field
/// instructions (`w:instrText`) and deleted text never leak through.
/// `w:tab` counts only under an open run; the identically named
/// tab-stop definitions under `w:pPr` do not emit characters.
fn extract_text(content: &str) -> ImportResult<String> {
    let mut reader = xml_reader(content);
    let mut buf = Vec::new();

    let mut paragraphs: Vec<String> = Vec::new();
    let mut in_body = false;
    let mut current: Option<String> = None;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let name_ref = name.as_ref();

                if matches_element(name_ref, "body") {
                    in_body = true;
                } else if in_body && matches_element(name_ref, "p") {
                    current = Some(String::new());
                } else if current.is_some() && matches_element(name_ref, "r") {
                    in_run = true;
                } else if in_run && matches_element(name_ref, "t") {
                    in_text = true;
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = e.name();
                let name_ref = name.as_ref();

                if in_body && current.is_none() && matches_element(name_ref, "p") {
                    // Self-closed empty paragraph
                    paragraphs.push(String::new());
                } else if in_run && matches_element(name_ref, "br") {
                    if let Some(ref mut paragraph) = current {
                        paragraph.push('\n');
                    }
                } else if in_run && matches_element(name_ref, "tab") {
                    if let Some(ref mut paragraph) = current {
                        paragraph.push('\t');
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let name_ref = name.as_ref();

                if matches_element(name_ref, "body") {
                    in_body = false;
                } else if matches_element(name_ref, "p") {
                    if let Some(paragraph) = current.take() {
                        paragraphs.push(paragraph);
                    }
                } else if matches_element(name_ref, "r") {
                    in_run = false;
                } else if matches_element(name_ref, "t") {
                    in_text = false;
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let Some(ref mut paragraph) = current {
                        let text = e
                            .unescape()
                            .map_err(|e| ImportError::XmlParse(e.to_string()))?;
                        paragraph.push_str(&text);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ImportError::from(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n\n"))
}
