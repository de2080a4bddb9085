//! User-visible notices for failed imports

use store::ImportError;

/// Classification of a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The declared type matched no importer
    UnsupportedFileType,
    /// The payload was recognized but could not be parsed
    MalformedPayload,
    /// The file could not be read at all
    ReadFailure,
}

/// A non-fatal message for the user.
///
/// Failed imports never touch the document; they surface as exactly
/// one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn from_import_error(error: &ImportError) -> Self {
        let kind = match error {
            ImportError::Unsupported(_) => NoticeKind::UnsupportedFileType,
            ImportError::Io(_) => NoticeKind::ReadFailure,
            _ => NoticeKind::MalformedPayload,
        };
        Self {
            kind,
            message: error.to_string(),
        }
    }
}
