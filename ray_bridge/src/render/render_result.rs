/// RenderResult - layered final-render output committed to the host

use rustc_hash::FxHashMap;
use crate::dimensions::OutputDimensions;
use crate::error::{Error, Result};
use super::pixel_buffer::PixelBuffer;

/// Name of the combined (beauty) pass
pub const COMBINED_PASS: &str = "Combined";

/// A complete render result, built off to the side and handed to the
/// host in one piece
#[derive(Debug, Clone)]
pub struct RenderResult {
    dimensions: OutputDimensions,
    passes: FxHashMap<String, PixelBuffer>,
}

impl RenderResult {
    /// Begin an empty result of the given size
    pub fn new(dimensions: OutputDimensions) -> Self {
        Self { dimensions, passes: FxHashMap::default() }
    }

    /// Store a pass. The buffer must match the result dimensions.
    pub fn set_pass(&mut self, name: &str, buffer: PixelBuffer) -> Result<()> {
        if buffer.dimensions() != self.dimensions {
            return Err(Error::InvalidResource(format!(
                "pass '{}' is {}x{}, result is {}x{}",
                name,
                buffer.dimensions().width,
                buffer.dimensions().height,
                self.dimensions.width,
                self.dimensions.height
            )));
        }
        self.passes.insert(name.to_string(), buffer);
        Ok(())
    }

    /// Get a pass by name
    pub fn pass(&self, name: &str) -> Option<&PixelBuffer> {
        self.passes.get(name)
    }

    /// The combined pass, if written
    pub fn combined(&self) -> Option<&PixelBuffer> {
        self.pass(COMBINED_PASS)
    }

    /// Result dimensions
    pub fn dimensions(&self) -> OutputDimensions {
        self.dimensions
    }

    /// Number of passes
    pub fn pass_count(&self) -> usize {
        self.passes.len()
    }
}

/// Host sink for finished final renders
///
/// Receives a result only after the engine succeeded; the host either sees
/// the full image or nothing.
pub trait ResultWriter {
    /// Commit a finished result
    fn write_result(&mut self, result: RenderResult) -> Result<()>;
}
