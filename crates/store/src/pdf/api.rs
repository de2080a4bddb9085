//! Public export entry points

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use layout_engine::TextLayout;

use crate::pdf::options::PdfExportOptions;
use crate::pdf::writer::{PdfExporter, Result};

/// Artifact name offered when the caller does not pick one
pub const DEFAULT_EXPORT_FILE_NAME: &str = "document.pdf";

/// Exports a laid-out document to a PDF file at `path`
pub fn export_pdf(
    layout: &TextLayout,
    path: impl AsRef<Path>,
    options: PdfExportOptions,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    PdfExporter::new(options).write(layout, BufWriter::new(file))?;
    tracing::debug!(path = %path.display(), "PDF exported");
    Ok(())
}

/// Exports a laid-out document as in-memory PDF bytes
pub fn export_pdf_bytes(layout: &TextLayout, options: PdfExportOptions) -> Result<Vec<u8>> {
    PdfExporter::new(options).write_to_bytes(layout)
}
