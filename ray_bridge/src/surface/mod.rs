//! Surface module - viewport presentation on the host GPU context.

mod graphics_device;
mod presentation_surface;

pub use graphics_device::*;
pub use presentation_surface::{
    quad_positions, PresentationSurface, SurfaceState, POSITION_ATTRIBUTE, QUAD_TEXCOORDS,
    TEXCOORD_ATTRIBUTE,
};

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
