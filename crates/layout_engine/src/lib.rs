//! Layout Engine - page geometry, line wrapping, and pagination
//!
//! This crate turns the block document into pages of placed lines ready
//! for the PDF writer: hard newlines split blocks into raw lines, raw
//! lines wrap to the content width, and a vertical cursor flows the
//! result onto as many pages as it needs.

mod error;
mod geometry;
mod layout;
mod line_wrapper;
mod metrics;
mod paginator;

pub use error::*;
pub use geometry::*;
pub use layout::*;
pub use line_wrapper::*;
pub use metrics::*;
pub use paginator::*;
