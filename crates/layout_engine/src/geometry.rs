//! Page geometry in millimetres

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// A4 portrait width in millimetres
pub const A4_WIDTH_MM: f32 = 210.0;
/// A4 portrait height in millimetres
pub const A4_HEIGHT_MM: f32 = 297.0;
/// Default page margin in millimetres
pub const DEFAULT_MARGIN_MM: f32 = 10.0;

/// Page dimensions and the uniform margin, constant for one export.
///
/// All values are millimetres. The margin applies to all four edges;
/// `margin < width/2` and `margin < height/2` must hold or layout refuses
/// to run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PageGeometry {
    /// Page width
    pub width: f32,
    /// Page height
    pub height: f32,
    /// Uniform margin on all four edges
    pub margin: f32,
}

impl PageGeometry {
    /// A4 portrait with the default margin
    pub fn a4() -> Self {
        Self {
            width: A4_WIDTH_MM,
            height: A4_HEIGHT_MM,
            margin: DEFAULT_MARGIN_MM,
        }
    }

    /// Custom page dimensions with a uniform margin
    pub fn custom(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Horizontal space available for text
    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Vertical space available for text
    pub fn content_height(&self) -> f32 {
        self.height - 2.0 * self.margin
    }

    /// Check the geometry preconditions
    pub fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.height.is_finite() && self.margin.is_finite()) {
            return Err(LayoutError::InvalidArgument(
                "page geometry must be finite".to_string(),
            ));
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return Err(LayoutError::InvalidArgument(format!(
                "page dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.margin < 0.0 || self.margin >= self.width / 2.0 || self.margin >= self.height / 2.0
        {
            return Err(LayoutError::InvalidArgument(format!(
                "margin {} leaves no content area on a {}x{} page",
                self.margin, self.width, self.height
            )));
        }
        Ok(())
    }
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}
