//! Error types for storage and import operations

use thiserror::Error;

/// Errors from save/load of the native JSON document format
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Errors from importing foreign files.
///
/// `Unsupported` is the one kind callers branch on; every other variant
/// means the payload for a recognized type could not be read.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The declared type matches none of the recognized importers
    #[error("Unsupported file type: {0}")]
    Unsupported(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("XML parsing error: {0}")]
    XmlParse(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required part: {0}")]
    MissingPart(String),

    #[error("Invalid package structure: {0}")]
    InvalidStructure(String),
}

impl From<quick_xml::Error> for ImportError {
    fn from(err: quick_xml::Error) -> Self {
        ImportError::XmlParse(err.to_string())
    }
}

pub type ImportResult<T> = std::result::Result<T, ImportError>;
