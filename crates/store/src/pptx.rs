//! PPTX speaker-notes import
//!
//! Reads only the notes slides of a PresentationML package: for each
//! `ppt/notesSlides/notesSlideN.xml`, in slide order, the text of the
//! body placeholder shape. Slide content itself is not imported, and
//! slide-number placeholders are skipped.

use std::io::Cursor;

use doc_model::Document;
use quick_xml::events::{BytesStart, Event};

use crate::error::{ImportError, ImportResult};
use crate::opc::{attribute, matches_element, xml_reader, OpcPackage};

const NOTES_PREFIX: &str = "ppt/notesSlides/notesSlide";
const NOTES_SUFFIX: &str = ".xml";

/// Imports the speaker notes of an in-memory PPTX file
pub fn import_pptx_bytes(bytes: &[u8]) -> ImportResult<Document> {
    let mut package = OpcPackage::new(Cursor::new(bytes))?;
    if !package.has_part("[Content_Types].xml") || !package.has_part("ppt/presentation.xml") {
        return Err(ImportError::InvalidStructure(
            "missing required PresentationML parts".to_string(),
        ));
    }

    let mut slides: Vec<(u32, String)> = package
        .part_names()
        .into_iter()
        .filter_map(|name| notes_slide_number(&name).map(|number| (number, name)))
        .collect();
    slides.sort_by_key(|(number, _)| *number);

    let mut segments = Vec::with_capacity(slides.len());
    for (_, name) in &slides {
        let xml = package.read_part(name)?;
        segments.push(extract_notes(&xml)?);
    }

    let document = Document::from_text(&segments.join("\n\n"));
    tracing::debug!(
        slides = slides.len(),
        blocks = document.block_count(),
        "PPTX notes imported"
    );
    Ok(document)
}

/// Slide number of a notes part name, if it is one
fn notes_slide_number(name: &str) -> Option<u32> {
    name.strip_prefix(NOTES_PREFIX)?
        .strip_suffix(NOTES_SUFFIX)?
        .parse()
        .ok()
}

/// Marks the open shape as the body placeholder when its `p:ph` says so.
///
/// A placeholder without an explicit type is a body placeholder per the
/// PresentationML defaults.
fn mark_body_placeholder(shape: &mut Option<(String, bool)>, event: &BytesStart) {
    let is_body = attribute(event, "type").map_or(true, |t| t == "body");
    if is_body {
        if let Some((_, ref mut body)) = shape {
            *body = true;
        }
    }
}

/// Collects body-placeholder text from one notes slide.
///
/// Every shape's text accumulates while the shape is open; it is kept
/// only if a `p:ph` marked the shape as the body placeholder by the
/// time it closes. Paragraph ends become `\n`.
fn extract_notes(content: &str) -> ImportResult<String> {
    let mut reader = xml_reader(content);
    let mut buf = Vec::new();

    let mut shape: Option<(String, bool)> = None;
    let mut in_text = false;
    let mut notes = String::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                let name = e.name();
                let name_ref = name.as_ref();

                if matches_element(name_ref, "sp") {
                    shape = Some((String::new(), false));
                } else if shape.is_some() && matches_element(name_ref, "ph") {
                    mark_body_placeholder(&mut shape, e);
                } else if shape.is_some() && matches_element(name_ref, "t") {
                    in_text = true;
                }
            }
            Ok(Event::Empty(ref e)) => {
                let name = e.name();
                let name_ref = name.as_ref();

                if shape.is_some() && matches_element(name_ref, "ph") {
                    mark_body_placeholder(&mut shape, e);
                } else if matches_element(name_ref, "p") {
                    if let Some((ref mut text, _)) = shape {
                        text.push('\n');
                    }
                }
            }
            Ok(Event::End(ref e)) => {
                let name = e.name();
                let name_ref = name.as_ref();

                if matches_element(name_ref, "sp") {
                    if let Some((text, is_body)) = shape.take() {
                        if is_body {
                            notes.push_str(text.trim_end_matches('\n'));
                        }
                    }
                } else if matches_element(name_ref, "p") {
                    if let Some((ref mut text, _)) = shape {
                        text.push('\n');
                    }
                } else if matches_element(name_ref, "t") {
                    in_text = false;
                }
            }
            Ok(Event::Text(ref e)) => {
                if in_text {
                    if let Some((ref mut text, _)) = shape {
                        let t = e
                            .unescape()
                            .map_err(|e| ImportError::XmlParse(e.to_string()))?;
                        text.push_str(&t);
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(ImportError::from(e)),
            _ => {}
        }
        buf.clear();
    }

    Ok(notes)
}
