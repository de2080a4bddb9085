//! File import dispatch
//!
//! Routes incoming files to the right importer by declared MIME type
//! (exact match against the four known values) or by file extension.
//! JSON, DOCX, and PPTX produce a replacement document; PDF only
//! retains the raw bytes for later viewing.

use std::path::Path;

use doc_model::{Document, RawContent};

use crate::error::{ImportError, ImportResult};

/// MIME type of the native JSON format
pub const MIME_JSON: &str = "application/json";
/// MIME type of PDF files
pub const MIME_PDF: &str = "application/pdf";
/// MIME type of DOCX files
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
/// MIME type of PPTX files
pub const MIME_PPTX: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";

/// Extension filter a file picker should offer
pub const FILE_PICKER_ACCEPT: &str = ".json,.pdf,.docx,.pptx";

/// The recognized import formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportKind {
    Json,
    Pdf,
    Docx,
    Pptx,
}

impl ImportKind {
    /// Matches a declared MIME type, by exact string equality.
    ///
    /// Parameterized forms like `application/json; charset=utf-8` do
    /// not match and count as unsupported.
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            MIME_JSON => Some(ImportKind::Json),
            MIME_PDF => Some(ImportKind::Pdf),
            MIME_DOCX => Some(ImportKind::Docx),
            MIME_PPTX => Some(ImportKind::Pptx),
            _ => None,
        }
    }

    /// Matches a file extension, case-insensitively
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "json" => Some(ImportKind::Json),
            "pdf" => Some(ImportKind::Pdf),
            "docx" => Some(ImportKind::Docx),
            "pptx" => Some(ImportKind::Pptx),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            ImportKind::Json => MIME_JSON,
            ImportKind::Pdf => MIME_PDF,
            ImportKind::Docx => MIME_DOCX,
            ImportKind::Pptx => MIME_PPTX,
        }
    }
}

/// What a successful import produced
#[derive(Debug, Clone, PartialEq)]
pub enum ImportOutcome {
    /// The editor content is replaced by this document
    Replace(Document),
    /// A PDF was opened; its bytes are retained and the editor content
    /// stays as it was
    PdfRetained(Vec<u8>),
}

/// Imports in-memory file bytes under a declared MIME type
pub fn import_bytes(mime: &str, bytes: &[u8]) -> ImportResult<ImportOutcome> {
    let kind =
        ImportKind::from_mime(mime).ok_or_else(|| ImportError::Unsupported(mime.to_string()))?;
    import_bytes_as(kind, bytes)
}

/// Imports in-memory file bytes with a known format
pub fn import_bytes_as(kind: ImportKind, bytes: &[u8]) -> ImportResult<ImportOutcome> {
    tracing::debug!(?kind, len = bytes.len(), "importing file");
    match kind {
        ImportKind::Json => {
            let raw: RawContent = serde_json::from_slice(bytes)?;
            Ok(ImportOutcome::Replace(raw.to_document()))
        }
        ImportKind::Pdf => Ok(ImportOutcome::PdfRetained(bytes.to_vec())),
        ImportKind::Docx => Ok(ImportOutcome::Replace(crate::docx::import_docx_bytes(
            bytes,
        )?)),
        ImportKind::Pptx => Ok(ImportOutcome::Replace(crate::pptx::import_pptx_bytes(
            bytes,
        )?)),
    }
}

/// Imports a file from disk, choosing the importer from its extension
pub async fn import_file(path: impl AsRef<Path>) -> ImportResult<ImportOutcome> {
    let path = path.as_ref();
    let kind = path
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(ImportKind::from_extension)
        .ok_or_else(|| ImportError::Unsupported(path.display().to_string()))?;

    let bytes = tokio::fs::read(path).await?;
    import_bytes_as(kind, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    #[test]
    fn test_mime_dispatch_is_exact() {
        assert_eq!(ImportKind::from_mime(MIME_JSON), Some(ImportKind::Json));
        assert_eq!(ImportKind::from_mime(MIME_PDF), Some(ImportKind::Pdf));
        assert_eq!(ImportKind::from_mime(MIME_DOCX), Some(ImportKind::Docx));
        assert_eq!(ImportKind::from_mime(MIME_PPTX), Some(ImportKind::Pptx));
        assert_eq!(ImportKind::from_mime("application/json; charset=utf-8"), None);
        assert_eq!(ImportKind::from_mime("text/plain"), None);
        assert_eq!(ImportKind::from_mime(""), None);
    }

    #[test]
    fn test_extension_dispatch_ignores_case() {
        assert_eq!(ImportKind::from_extension("JSON"), Some(ImportKind::Json));
        assert_eq!(ImportKind::from_extension("Docx"), Some(ImportKind::Docx));
        assert_eq!(ImportKind::from_extension("txt"), None);
    }

    #[test]
    fn test_unknown_mime_is_unsupported() {
        let err = import_bytes("text/plain", b"hello").unwrap_err();
        assert!(matches!(err, ImportError::Unsupported(mime) if mime == "text/plain"));
    }

    #[test]
    fn test_json_import_replaces_document() {
        let payload = r#"{"blocks": [{"text": "from json"}], "entityMap": {}}"#;
        let outcome = import_bytes(MIME_JSON, payload.as_bytes()).unwrap();
        match outcome {
            ImportOutcome::Replace(document) => assert_eq!(document.text(), "from json"),
            other => panic!("expected Replace, got {other:?}"),
        }
    }

    #[test]
    fn test_malformed_json_is_a_json_error() {
        let err = import_bytes(MIME_JSON, b"{ not json").unwrap_err();
        assert!(matches!(err, ImportError::Json(_)));
    }

    #[test]
    fn test_pdf_import_retains_bytes_unchanged() {
        let bytes = b"%PDF-1.4 fake content";
        let outcome = import_bytes(MIME_PDF, bytes).unwrap();
        assert_eq!(outcome, ImportOutcome::PdfRetained(bytes.to_vec()));
    }

    #[test]
    fn test_docx_dispatch_runs_the_full_pipeline() {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        zip.start_file("[Content_Types].xml", options).unwrap();
        zip.write_all(b"<Types/>").unwrap();
        zip.start_file("word/document.xml", options).unwrap();
        zip.write_all(
            br#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>from docx</w:t></w:r></w:p></w:body></w:document>"#,
        )
        .unwrap();
        let bytes = zip.finish().unwrap().into_inner();

        let outcome = import_bytes(MIME_DOCX, &bytes).unwrap();
        match outcome {
            ImportOutcome::Replace(document) => assert_eq!(document.text(), "from docx"),
            other => panic!("expected Replace, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_import_file_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("saved.json");
        std::fs::write(&path, r#"{"blocks": [{"text": "on disk"}]}"#).unwrap();

        let outcome = import_file(&path).await.unwrap();
        match outcome {
            ImportOutcome::Replace(document) => assert_eq!(document.text(), "on disk"),
            other => panic!("expected Replace, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_import_file_unknown_extension_is_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("note.txt");
        std::fs::write(&path, "plain text").unwrap();

        let err = import_file(&path).await.unwrap_err();
        assert!(matches!(err, ImportError::Unsupported(_)));
    }
}
