/// PixelBuffer - render engine output

use crate::dimensions::OutputDimensions;
use crate::error::{Error, Result};

/// Row-major RGBA pixels in linear color, bottom row first
///
/// This is the row order the host result passes and GL textures expect:
/// row 0 lands at texture coordinate t = 0, the bottom of the quad.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    dimensions: OutputDimensions,
    pixels: Vec<[f32; 4]>,
}

impl PixelBuffer {
    /// Wrap pixels, checking that the length matches the dimensions
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` when `pixels.len() != width * height`.
    pub fn new(dimensions: OutputDimensions, pixels: Vec<[f32; 4]>) -> Result<Self> {
        if pixels.len() != dimensions.pixel_count() {
            return Err(Error::InvalidResource(format!(
                "pixel buffer holds {} pixels, {}x{} needs {}",
                pixels.len(),
                dimensions.width,
                dimensions.height,
                dimensions.pixel_count()
            )));
        }
        Ok(Self { dimensions, pixels })
    }

    /// A buffer filled with one color
    pub fn filled(dimensions: OutputDimensions, color: [f32; 4]) -> Self {
        Self { dimensions, pixels: vec![color; dimensions.pixel_count()] }
    }

    /// Adapt raw tracer output: RGB rows, top row first.
    ///
    /// Rows are flipped to bottom-first order and alpha is set to 1.0.
    pub fn from_rgb_top_down(dimensions: OutputDimensions, rgb: &[[f32; 3]]) -> Result<Self> {
        let width = dimensions.width as usize;
        if rgb.len() != dimensions.pixel_count() {
            return Err(Error::InvalidResource(format!(
                "raw output holds {} pixels, {}x{} needs {}",
                rgb.len(),
                dimensions.width,
                dimensions.height,
                dimensions.pixel_count()
            )));
        }
        let pixels = rgb
            .chunks_exact(width.max(1))
            .rev()
            .flatten()
            .map(|[r, g, b]| [*r, *g, *b, 1.0])
            .collect();
        Ok(Self { dimensions, pixels })
    }

    /// Buffer dimensions
    pub fn dimensions(&self) -> OutputDimensions {
        self.dimensions
    }

    /// Pixels as RGBA quadruples
    pub fn pixels(&self) -> &[[f32; 4]] {
        &self.pixels
    }

    /// Pixel at (x, y), y counted from the bottom
    pub fn pixel(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.dimensions.width || y >= self.dimensions.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.dimensions.width as usize + x as usize)
            .copied()
    }

    /// Flat float view (`width * height * 4` values)
    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Raw bytes for GPU upload
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Consume the buffer and return its pixels
    pub fn into_pixels(self) -> Vec<[f32; 4]> {
        self.pixels
    }
}

#[cfg(test)]
#[path = "pixel_buffer_tests.rs"]
mod tests;
