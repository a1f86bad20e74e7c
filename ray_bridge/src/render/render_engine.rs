/// RenderEngine trait - the external ray tracer's call contract

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use crate::camera::CameraDescriptor;
use crate::dimensions::OutputDimensions;
use crate::error::Result;
use crate::extract::Triangle;
use super::pixel_buffer::PixelBuffer;

/// Everything one render call needs
///
/// Owned by the call that consumes it; triangles are not shared.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// Output size (both sides > 0)
    pub dimensions: OutputDimensions,
    /// Samples per pixel (> 0)
    pub samples: u32,
    /// Renderer camera
    pub camera: CameraDescriptor,
    /// World-space triangles
    pub triangles: Vec<Triangle>,
}

/// Cooperative cancellation flag shared between host and engine
///
/// Engines should poll `is_cancelled` between sample batches.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Create a token that is not cancelled
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Clear the flag before the next request
    pub fn reset(&self) {
        self.cancelled.store(false, Ordering::SeqCst);
    }
}

/// External ray-tracing engine
///
/// A blocking call: returns once the whole image is done, failed, or the
/// token was cancelled. Implementations return a buffer matching
/// `request.dimensions`.
pub trait RenderEngine: Send {
    /// Render one image
    fn render(&mut self, request: RenderRequest, cancel: &CancellationToken) -> Result<PixelBuffer>;
}
