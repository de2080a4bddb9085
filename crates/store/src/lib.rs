//! Persistence, file import, and PDF export
//!
//! This crate is the notepad's boundary with the filesystem and with
//! foreign file formats:
//!
//! - Native save/load of documents as raw-content JSON
//! - Import dispatch for JSON, PDF, DOCX, and PPTX payloads
//! - PDF export of a laid-out document

mod docx;
mod error;
mod file_io;
mod import;
mod opc;
mod pptx;
mod serializer;

pub mod pdf;

pub use docx::import_docx_bytes;
pub use error::*;
pub use file_io::*;
pub use import::*;
pub use pptx::import_pptx_bytes;
pub use serializer::*;
