/// Output dimensions in pixels

use crate::error::{Error, Result};
use crate::host::RenderSettings;

/// Output size of a render request or viewport region, in pixels.
///
/// Final-render dimensions come from the host resolution scaled by the
/// resolution percentage and truncated toward zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OutputDimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl OutputDimensions {
    /// Create dimensions without validation
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Derive final-render dimensions from host render settings
    pub fn from_settings(settings: &RenderSettings) -> Self {
        let scale = f64::from(settings.resolution_percentage) / 100.0;
        Self {
            width: (f64::from(settings.resolution_x) * scale) as u32,
            height: (f64::from(settings.resolution_y) * scale) as u32,
        }
    }

    /// Whether both dimensions are non-zero
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Return self if both dimensions are non-zero
    ///
    /// # Errors
    ///
    /// `Error::DegenerateOutput` when either dimension is zero.
    pub fn validate(self) -> Result<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(Error::DegenerateOutput { width: self.width, height: self.height })
        }
    }

    /// `width / height` as floating point
    ///
    /// # Errors
    ///
    /// `Error::DegenerateOutput` when either dimension is zero.
    pub fn aspect_ratio(&self) -> Result<f64> {
        let dims = self.validate()?;
        Ok(f64::from(dims.width) / f64::from(dims.height))
    }

    /// Number of pixels (`width * height`)
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}
