//! Editor session state and actions
//!
//! Ties the document model, layout, and store together behind one
//! immutable-value session type: content replacement with undo/redo,
//! import-outcome handling with user notices, appearance settings, and
//! the one-call PDF export surface.

mod error;
mod history;
mod notice;
mod session;
mod settings;

pub use error::*;
pub use history::*;
pub use notice::*;
pub use session::*;
pub use settings::*;
