/// Mock GraphicsDevice for unit tests (no GPU required)
///
/// Tracks live handles so tests can assert that every created object is
/// deleted exactly once, and records draw-time commands as strings.

use rustc_hash::{FxHashMap, FxHashSet};
use crate::error::{Error, Result};
use super::graphics_device::{
    BlendMode, BufferDesc, BufferHandle, GraphicsDevice, PrimitiveTopology, TextureDesc,
    TextureHandle, VertexArrayHandle, VertexAttribute,
};

/// Failure injection points
#[derive(Debug, Default, Clone, Copy)]
pub struct MockFailures {
    pub create_texture: bool,
    pub create_vertex_array: bool,
    pub create_buffer: bool,
    pub destroy_texture: bool,
}

#[derive(Debug)]
pub struct MockGraphicsDevice {
    next_handle: u32,
    pub live_textures: FxHashSet<u32>,
    pub live_vertex_arrays: FxHashSet<u32>,
    pub live_buffers: FxHashSet<u32>,
    pub texture_sizes: FxHashMap<u32, (u32, u32)>,
    pub attributes: FxHashMap<String, u32>,
    pub bound_attributes: Vec<(u32, u32, VertexAttribute)>,
    pub buffer_contents: FxHashMap<u32, Vec<u8>>,
    /// Latest bytes written to each texture
    pub texture_contents: FxHashMap<u32, Vec<u8>>,
    pub uploads: Vec<(u32, u32, u32, usize)>,
    pub commands: Vec<String>,
    pub textures_created: u32,
    pub textures_destroyed: u32,
    pub failures: MockFailures,
}

impl MockGraphicsDevice {
    /// Device whose bound program exposes `pos` and `texCoord`
    pub fn new() -> Self {
        let mut attributes = FxHashMap::default();
        attributes.insert("pos".to_string(), 0);
        attributes.insert("texCoord".to_string(), 1);
        Self {
            next_handle: 1,
            live_textures: FxHashSet::default(),
            live_vertex_arrays: FxHashSet::default(),
            live_buffers: FxHashSet::default(),
            texture_sizes: FxHashMap::default(),
            attributes,
            bound_attributes: Vec::new(),
            buffer_contents: FxHashMap::default(),
            texture_contents: FxHashMap::default(),
            uploads: Vec::new(),
            commands: Vec::new(),
            textures_created: 0,
            textures_destroyed: 0,
            failures: MockFailures::default(),
        }
    }

    /// Device whose bound program has no attributes at all
    pub fn without_attributes() -> Self {
        let mut device = Self::new();
        device.attributes.clear();
        device
    }

    pub fn live_handle_count(&self) -> usize {
        self.live_textures.len() + self.live_vertex_arrays.len() + self.live_buffers.len()
    }

    fn allocate_handle(&mut self) -> u32 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_texture(&mut self, desc: TextureDesc) -> Result<TextureHandle> {
        if self.failures.create_texture {
            return Err(Error::BackendError("mock texture allocation failed".to_string()));
        }
        let handle = self.allocate_handle();
        self.live_textures.insert(handle);
        self.texture_sizes.insert(handle, (desc.width, desc.height));
        if let Some(data) = desc.data {
            self.texture_contents.insert(handle, data);
        }
        self.textures_created += 1;
        Ok(TextureHandle(handle))
    }

    fn update_texture(&mut self, texture: TextureHandle, width: u32, height: u32, data: &[u8]) -> Result<()> {
        if !self.live_textures.contains(&texture.0) {
            return Err(Error::InvalidResource(format!("texture {} is not live", texture.0)));
        }
        self.uploads.push((texture.0, width, height, data.len()));
        self.texture_contents.insert(texture.0, data.to_vec());
        Ok(())
    }

    fn destroy_texture(&mut self, texture: TextureHandle) -> Result<()> {
        if !self.live_textures.remove(&texture.0) {
            return Err(Error::InvalidResource(format!("texture {} deleted twice", texture.0)));
        }
        self.textures_destroyed += 1;
        if self.failures.destroy_texture {
            return Err(Error::BackendError("mock texture delete failed".to_string()));
        }
        Ok(())
    }

    fn create_vertex_array(&mut self) -> Result<VertexArrayHandle> {
        if self.failures.create_vertex_array {
            return Err(Error::BackendError("mock vertex array allocation failed".to_string()));
        }
        let handle = self.allocate_handle();
        self.live_vertex_arrays.insert(handle);
        Ok(VertexArrayHandle(handle))
    }

    fn destroy_vertex_array(&mut self, vertex_array: VertexArrayHandle) -> Result<()> {
        if !self.live_vertex_arrays.remove(&vertex_array.0) {
            return Err(Error::InvalidResource(format!("vertex array {} deleted twice", vertex_array.0)));
        }
        Ok(())
    }

    fn create_buffer(&mut self, desc: BufferDesc) -> Result<BufferHandle> {
        if self.failures.create_buffer {
            return Err(Error::BackendError("mock buffer allocation failed".to_string()));
        }
        let handle = self.allocate_handle();
        self.live_buffers.insert(handle);
        self.buffer_contents.insert(handle, desc.data);
        Ok(BufferHandle(handle))
    }

    fn destroy_buffer(&mut self, buffer: BufferHandle) -> Result<()> {
        if !self.live_buffers.remove(&buffer.0) {
            return Err(Error::InvalidResource(format!("buffer {} deleted twice", buffer.0)));
        }
        self.buffer_contents.remove(&buffer.0);
        Ok(())
    }

    fn attribute_location(&self, name: &str) -> Option<u32> {
        self.attributes.get(name).copied()
    }

    fn set_vertex_attribute(
        &mut self,
        vertex_array: VertexArrayHandle,
        buffer: BufferHandle,
        attribute: VertexAttribute,
    ) -> Result<()> {
        self.bound_attributes.push((vertex_array.0, buffer.0, attribute));
        Ok(())
    }

    fn bind_texture(&mut self, texture: Option<TextureHandle>) {
        match texture {
            Some(texture) => self.commands.push(format!("bind_texture({})", texture.0)),
            None => self.commands.push("unbind_texture".to_string()),
        }
    }

    fn bind_vertex_array(&mut self, vertex_array: Option<VertexArrayHandle>) {
        match vertex_array {
            Some(vertex_array) => self.commands.push(format!("bind_vertex_array({})", vertex_array.0)),
            None => self.commands.push("unbind_vertex_array".to_string()),
        }
    }

    fn draw_arrays(&mut self, topology: PrimitiveTopology, first: u32, count: u32) {
        self.commands.push(format!("draw_arrays({:?}, {}, {})", topology, first, count));
    }

    fn set_blend(&mut self, mode: Option<BlendMode>) {
        self.commands.push(format!("set_blend({:?})", mode));
    }
}
