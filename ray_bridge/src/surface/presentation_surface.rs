/// PresentationSurface - GPU texture + quad showing viewport renders.
///
/// One instance per viewport. Resizing is all-or-nothing: the old
/// resources are released and a full new set is created in a single call,
/// so a draw never sees mismatched sizes or a half-torn-down surface.

use std::sync::{Arc, Mutex, MutexGuard};
use crate::dimensions::OutputDimensions;
use crate::error::{Error, Result};
use crate::render::PixelBuffer;
use super::graphics_device::{
    BufferDesc, BufferHandle, BufferUsage, GraphicsDevice, PrimitiveTopology, TextureDesc,
    TextureFilter, TextureFormat, TextureHandle, VertexArrayHandle, VertexAttribute,
};

/// Shader attribute holding quad positions
pub const POSITION_ATTRIBUTE: &str = "pos";

/// Shader attribute holding quad texture coordinates
pub const TEXCOORD_ATTRIBUTE: &str = "texCoord";

/// Quad texture coordinates, matching `quad_positions` vertex order
pub const QUAD_TEXCOORDS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Pixel-space quad covering a region of the given size
pub fn quad_positions(dimensions: OutputDimensions) -> [[f32; 2]; 4] {
    let w = dimensions.width as f32;
    let h = dimensions.height as f32;
    [[0.0, 0.0], [w, 0.0], [w, h], [0.0, h]]
}

/// Lifecycle state of a surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceState {
    /// No GPU resources yet
    Uninitialized,
    /// Resources allocated for the recorded dimensions
    Ready,
    /// Resources allocated, but for other dimensions than requested
    Stale,
    /// Torn down for good
    Destroyed,
}

/// GPU handles owned by a surface
///
/// Every field is optional so release is safe after partial creation or a
/// previous release.
#[derive(Debug, Default)]
struct SurfaceResources {
    texture: Option<TextureHandle>,
    vertex_array: Option<VertexArrayHandle>,
    position_buffer: Option<BufferHandle>,
    texcoord_buffer: Option<BufferHandle>,
}

impl SurfaceResources {
    /// Allocate texture, quad buffers and vertex array for `dimensions`
    fn allocate(
        &mut self,
        device: &mut dyn GraphicsDevice,
        dimensions: OutputDimensions,
        fill: [f32; 4],
    ) -> Result<()> {
        let placeholder = PixelBuffer::filled(dimensions, fill);
        self.texture = Some(device.create_texture(TextureDesc {
            width: dimensions.width,
            height: dimensions.height,
            format: TextureFormat::R16G16B16A16_SFLOAT,
            filter: TextureFilter::Linear,
            data: Some(placeholder.as_bytes().to_vec()),
        })?);

        let texcoord_location = device.attribute_location(TEXCOORD_ATTRIBUTE).ok_or_else(|| {
            Error::InvalidResource(format!("bound program has no '{}' attribute", TEXCOORD_ATTRIBUTE))
        })?;
        let position_location = device.attribute_location(POSITION_ATTRIBUTE).ok_or_else(|| {
            Error::InvalidResource(format!("bound program has no '{}' attribute", POSITION_ATTRIBUTE))
        })?;

        let vertex_array = device.create_vertex_array()?;
        self.vertex_array = Some(vertex_array);

        let position_buffer = device.create_buffer(BufferDesc {
            data: bytemuck::cast_slice(&quad_positions(dimensions)).to_vec(),
            usage: BufferUsage::StaticDraw,
        })?;
        self.position_buffer = Some(position_buffer);
        device.set_vertex_attribute(
            vertex_array,
            position_buffer,
            VertexAttribute { location: position_location, components: 2 },
        )?;

        let texcoord_buffer = device.create_buffer(BufferDesc {
            data: bytemuck::cast_slice(&QUAD_TEXCOORDS).to_vec(),
            usage: BufferUsage::StaticDraw,
        })?;
        self.texcoord_buffer = Some(texcoord_buffer);
        device.set_vertex_attribute(
            vertex_array,
            texcoord_buffer,
            VertexAttribute { location: texcoord_location, components: 2 },
        )?;

        Ok(())
    }

    /// Release every live handle. Failures are logged, never returned.
    fn release(&mut self, device: &mut dyn GraphicsDevice) {
        for buffer in [self.position_buffer.take(), self.texcoord_buffer.take()].into_iter().flatten() {
            if let Err(err) = device.destroy_buffer(buffer) {
                log_teardown_failure(format!("buffer {}: {}", buffer.0, err));
            }
        }
        if let Some(vertex_array) = self.vertex_array.take() {
            if let Err(err) = device.destroy_vertex_array(vertex_array) {
                log_teardown_failure(format!("vertex array {}: {}", vertex_array.0, err));
            }
        }
        if let Some(texture) = self.texture.take() {
            device.bind_texture(None);
            if let Err(err) = device.destroy_texture(texture) {
                log_teardown_failure(format!("texture {}: {}", texture.0, err));
            }
        }
    }
}

fn log_teardown_failure(detail: String) {
    let err = Error::ResourceTeardown(detail);
    crate::bridge_warn!("raybridge::surface", "{}", err);
}

/// GPU-resident texture and quad for one viewport
pub struct PresentationSurface {
    /// Device owning the host GPU context
    graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
    state: SurfaceState,
    dimensions: Option<OutputDimensions>,
    resources: SurfaceResources,
    placeholder_color: [f32; 4],
}

impl PresentationSurface {
    /// Create an uninitialized surface. No GPU work happens until `ensure`.
    pub fn new(graphics_device: Arc<Mutex<dyn GraphicsDevice>>, placeholder_color: [f32; 4]) -> Self {
        Self {
            graphics_device,
            state: SurfaceState::Uninitialized,
            dimensions: None,
            resources: SurfaceResources::default(),
            placeholder_color,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SurfaceState {
        self.state
    }

    /// Dimensions of the live resources
    pub fn dimensions(&self) -> Option<OutputDimensions> {
        self.dimensions
    }

    /// Whether `ensure(dimensions)` would recreate resources
    pub fn needs_recreate(&self, dimensions: OutputDimensions) -> bool {
        !(self.state == SurfaceState::Ready && self.dimensions == Some(dimensions))
    }

    fn lock_device(&self) -> Result<MutexGuard<'_, dyn GraphicsDevice + 'static>> {
        self.graphics_device
            .lock()
            .map_err(|_| Error::BackendError("GraphicsDevice lock poisoned".to_string()))
    }

    /// Make the surface Ready at `dimensions`.
    ///
    /// First call allocates; a dimension change tears everything down and
    /// rebuilds. On failure the surface falls back to Uninitialized with
    /// nothing allocated.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidResource` if the surface was destroyed or the bound
    ///   program lacks the quad attributes
    /// - `Error::DegenerateOutput` for zero-sized regions
    pub fn ensure(&mut self, dimensions: OutputDimensions) -> Result<()> {
        match self.state {
            SurfaceState::Destroyed => {
                return Err(Error::InvalidResource("presentation surface was destroyed".to_string()));
            }
            SurfaceState::Ready if self.dimensions == Some(dimensions) => return Ok(()),
            SurfaceState::Ready => self.state = SurfaceState::Stale,
            SurfaceState::Uninitialized | SurfaceState::Stale => {}
        }
        let dimensions = dimensions.validate()?;

        let device_arc = Arc::clone(&self.graphics_device);
        let mut device = device_arc
            .lock()
            .map_err(|_| Error::BackendError("GraphicsDevice lock poisoned".to_string()))?;

        if self.state == SurfaceState::Stale {
            crate::bridge_debug!(
                "raybridge::surface",
                "Viewport resized to {}x{}, recreating surface",
                dimensions.width,
                dimensions.height
            );
        }
        self.resources.release(&mut *device);
        self.dimensions = None;
        self.state = SurfaceState::Uninitialized;

        if let Err(err) = self.resources.allocate(&mut *device, dimensions, self.placeholder_color) {
            self.resources.release(&mut *device);
            return Err(crate::bridge_err!("raybridge::surface", err));
        }

        self.dimensions = Some(dimensions);
        self.state = SurfaceState::Ready;
        Ok(())
    }

    /// Replace the texture contents with a rendered frame
    ///
    /// # Errors
    ///
    /// `Error::InvalidResource` if the surface is not Ready or the frame
    /// size differs from the surface size.
    pub fn upload(&mut self, frame: &PixelBuffer) -> Result<()> {
        let texture = match (self.state, self.resources.texture) {
            (SurfaceState::Ready, Some(texture)) => texture,
            _ => return Err(Error::InvalidResource(format!("cannot upload to a {:?} surface", self.state))),
        };
        if Some(frame.dimensions()) != self.dimensions {
            return Err(Error::InvalidResource(format!(
                "frame is {}x{}, surface is {:?}",
                frame.dimensions().width,
                frame.dimensions().height,
                self.dimensions
            )));
        }
        let dims = frame.dimensions();
        self.lock_device()?.update_texture(texture, dims.width, dims.height, frame.as_bytes())
    }

    /// Draw the textured quad into the current framebuffer.
    ///
    /// Call between the host display-shader bind/unbind. Does nothing
    /// unless Ready.
    pub fn draw(&self) {
        let (texture, vertex_array) = match (self.state, self.resources.texture, self.resources.vertex_array) {
            (SurfaceState::Ready, Some(texture), Some(vertex_array)) => (texture, vertex_array),
            _ => {
                crate::bridge_trace!("raybridge::surface", "Skipping draw of {:?} surface", self.state);
                return;
            }
        };
        let mut device = match self.lock_device() {
            Ok(device) => device,
            Err(err) => {
                crate::bridge_error!("raybridge::surface", "Draw skipped: {}", err);
                return;
            }
        };
        device.bind_texture(Some(texture));
        device.bind_vertex_array(Some(vertex_array));
        device.draw_arrays(PrimitiveTopology::TriangleFan, 0, 4);
        device.bind_vertex_array(None);
        device.bind_texture(None);
    }

    /// Release all GPU handles. Safe to call more than once.
    pub fn destroy(&mut self) {
        if self.state == SurfaceState::Destroyed {
            return;
        }
        match self.graphics_device.lock() {
            Ok(mut device) => self.resources.release(&mut *device),
            Err(_) => {
                log_teardown_failure("GraphicsDevice lock poisoned, handles leaked".to_string());
                self.resources = SurfaceResources::default();
            }
        }
        self.dimensions = None;
        self.state = SurfaceState::Destroyed;
    }
}

impl Drop for PresentationSurface {
    fn drop(&mut self) {
        self.destroy();
    }
}

#[cfg(test)]
#[path = "presentation_surface_tests.rs"]
mod tests;
