/// GraphicsDevice trait and GPU resource descriptors
///
/// A thin GL-style interface over the host's current GPU context. The host
/// owns the context; the bridge only creates, binds and deletes its own
/// objects through this trait.

use crate::error::Result;

/// Texture object handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

/// Vertex array object handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VertexArrayHandle(pub u32);

/// Buffer object handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

/// Texture storage format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(non_camel_case_types)]
pub enum TextureFormat {
    /// Half-float RGBA (viewport presentation)
    R16G16B16A16_SFLOAT,
    /// Full-float RGBA
    R32G32B32A32_SFLOAT,
}

/// Texture sampling filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFilter {
    /// Nearest texel
    Nearest,
    /// Bilinear
    Linear,
}

/// Descriptor for creating a 2D texture
#[derive(Debug, Clone)]
pub struct TextureDesc {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Storage format
    pub format: TextureFormat,
    /// Min and mag filter
    pub filter: TextureFilter,
    /// Initial RGBA float data as raw bytes (`width * height * 16` bytes)
    pub data: Option<Vec<u8>>,
}

/// Buffer update frequency hint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferUsage {
    /// Written once, drawn many times
    StaticDraw,
    /// Rewritten often
    DynamicDraw,
}

/// Descriptor for creating a vertex buffer
#[derive(Debug, Clone)]
pub struct BufferDesc {
    /// Contents
    pub data: Vec<u8>,
    /// Usage hint
    pub usage: BufferUsage,
}

/// Float vertex attribute layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexAttribute {
    /// Attribute location in the bound program
    pub location: u32,
    /// Float components per vertex (1..=4)
    pub components: u32,
}

/// Primitive topology of a draw call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveTopology {
    /// Independent triangles
    TriangleList,
    /// Triangle strip
    TriangleStrip,
    /// Triangle fan around the first vertex
    TriangleFan,
}

/// Blend state for draws
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlendMode {
    /// `ONE, ONE_MINUS_SRC_ALPHA`
    PremultipliedAlpha,
}

/// GPU device trait
///
/// Implemented over the host's GPU context (or a mock in tests).
pub trait GraphicsDevice: Send {
    /// Create a 2D texture
    fn create_texture(&mut self, desc: TextureDesc) -> Result<TextureHandle>;

    /// Replace the whole contents of a texture
    ///
    /// `data` holds RGBA float pixels as raw bytes.
    fn update_texture(&mut self, texture: TextureHandle, width: u32, height: u32, data: &[u8]) -> Result<()>;

    /// Delete a texture
    fn destroy_texture(&mut self, texture: TextureHandle) -> Result<()>;

    /// Create a vertex array object
    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle>;

    /// Delete a vertex array object
    fn destroy_vertex_array(&mut self, vertex_array: VertexArrayHandle) -> Result<()>;

    /// Create a vertex buffer
    fn create_buffer(&mut self, desc: BufferDesc) -> Result<BufferHandle>;

    /// Delete a vertex buffer
    fn destroy_buffer(&mut self, buffer: BufferHandle) -> Result<()>;

    /// Location of a named attribute in the currently bound program
    fn attribute_location(&self, name: &str) -> Option<u32>;

    /// Enable an attribute on a vertex array, sourcing floats from `buffer`
    fn set_vertex_attribute(
        &mut self,
        vertex_array: VertexArrayHandle,
        buffer: BufferHandle,
        attribute: VertexAttribute,
    ) -> Result<()>;

    /// Bind a texture to unit 0 (`None` unbinds)
    fn bind_texture(&mut self, texture: Option<TextureHandle>);

    /// Bind a vertex array (`None` unbinds)
    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayHandle>);

    /// Draw `count` vertices starting at `first`
    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: u32, count: u32);

    /// Set blending (`None` disables)
    fn set_blend(&mut self, mode: Option<BlendMode>);
}
