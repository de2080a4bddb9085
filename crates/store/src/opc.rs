//! ZIP package access and XML utilities shared by the OOXML importers
//!
//! DOCX and PPTX files are both OPC packages: a ZIP archive of XML
//! parts. The importers only read; nothing here writes packages.

use std::io::{Read, Seek};

use quick_xml::events::BytesStart;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::{ImportError, ImportResult};

/// A read-only OPC package
pub(crate) struct OpcPackage<R: Read + Seek> {
    archive: ZipArchive<R>,
}

impl<R: Read + Seek> OpcPackage<R> {
    pub(crate) fn new(reader: R) -> ImportResult<Self> {
        let archive = ZipArchive::new(reader)?;
        Ok(Self { archive })
    }

    /// Reads a part as a UTF-8 string
    pub(crate) fn read_part(&mut self, name: &str) -> ImportResult<String> {
        let mut file = self.archive.by_name(name).map_err(|e| {
            if matches!(e, zip::result::ZipError::FileNotFound) {
                ImportError::MissingPart(name.to_string())
            } else {
                ImportError::from(e)
            }
        })?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents)
    }

    /// Checks whether a part exists in the package
    pub(crate) fn has_part(&self, name: &str) -> bool {
        self.archive.file_names().any(|n| n == name)
    }

    /// Names of every part in the package
    pub(crate) fn part_names(&self) -> Vec<String> {
        self.archive.file_names().map(String::from).collect()
    }
}

/// Creates an XML reader for an OOXML part.
///
/// Text nodes are not trimmed: leading and trailing whitespace inside
/// text runs is significant, and the extractors only collect character
/// data while inside a text element.
pub(crate) fn xml_reader(content: &str) -> Reader<&[u8]> {
    Reader::from_str(content)
}

/// Checks an element name against a local name, ignoring any namespace prefix
pub(crate) fn matches_element(name: &[u8], expected: &str) -> bool {
    let name_str = std::str::from_utf8(name).unwrap_or("");
    name_str == expected || name_str.ends_with(&format!(":{}", expected))
}

/// Looks up an attribute by local name, ignoring any namespace prefix
pub(crate) fn attribute(event: &BytesStart, name: &str) -> Option<String> {
    event
        .attributes()
        .filter_map(|a| a.ok())
        .find(|a| matches_element(a.key.as_ref(), name))
        .map(|a| String::from_utf8_lossy(&a.value).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn package(parts: &[(&str, &str)]) -> OpcPackage<Cursor<Vec<u8>>> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, content) in parts {
            zip.start_file(*name, options).unwrap();
            zip.write_all(content.as_bytes()).unwrap();
        }
        OpcPackage::new(zip.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_reads_named_part() {
        let mut pkg = package(&[("word/document.xml", "<w:document/>")]);
        assert_eq!(pkg.read_part("word/document.xml").unwrap(), "<w:document/>");
    }

    #[test]
    fn test_missing_part_is_its_own_error() {
        let mut pkg = package(&[("other.xml", "<x/>")]);
        let err = pkg.read_part("word/document.xml").unwrap_err();
        assert!(matches!(err, ImportError::MissingPart(name) if name == "word/document.xml"));
    }

    #[test]
    fn test_has_part() {
        let pkg = package(&[("a.xml", "<a/>"), ("dir/b.xml", "<b/>")]);
        assert!(pkg.has_part("a.xml"));
        assert!(pkg.has_part("dir/b.xml"));
        assert!(!pkg.has_part("c.xml"));
    }

    #[test]
    fn test_matches_element_with_and_without_prefix() {
        assert!(matches_element(b"p", "p"));
        assert!(matches_element(b"w:p", "p"));
        assert!(!matches_element(b"w:pPr", "p"));
        assert!(!matches_element(b"w:r", "p"));
    }

    #[test]
    fn test_attribute_lookup() {
        let mut start = BytesStart::new("p:ph");
        start.push_attribute(("type", "body"));
        assert_eq!(attribute(&start, "type").as_deref(), Some("body"));
        assert_eq!(attribute(&start, "idx"), None);
    }
}
