//! Error types for session operations

use thiserror::Error;

/// Errors from the session's PDF export surface
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Layout error: {0}")]
    Layout(#[from] layout_engine::LayoutError),

    #[error("PDF error: {0}")]
    Pdf(#[from] store::pdf::PdfError),
}

pub type Result<T> = std::result::Result<T, ExportError>;
