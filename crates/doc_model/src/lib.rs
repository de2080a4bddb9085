//! Document Model - ordered plain-text blocks and their interchange form
//!
//! This crate provides the content representation for the notepad: a
//! [`Document`] of ordered [`Block`]s, replaced wholesale on import and
//! undo/redo, plus the raw serializable form used for JSON round trips.

mod block;
mod document;
mod raw;

pub use block::*;
pub use document::*;
pub use raw::*;
