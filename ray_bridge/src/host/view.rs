/// Viewport-side host interfaces

use crate::dimensions::OutputDimensions;
use crate::error::Result;

/// Viewport region the host is redrawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewContext {
    /// Region width in pixels
    pub region_width: u32,
    /// Region height in pixels
    pub region_height: u32,
}

impl ViewContext {
    /// Create a context for a region of the given size
    pub fn new(region_width: u32, region_height: u32) -> Self {
        Self { region_width, region_height }
    }

    /// Region size as output dimensions
    pub fn dimensions(&self) -> OutputDimensions {
        OutputDimensions::new(self.region_width, self.region_height)
    }
}

/// What changed in the evaluated scene since the last view update
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneUpdates {
    /// Names of datablocks reported as updated
    pub updated_ids: Vec<String>,
    /// Any object was added, removed or transformed
    pub objects_updated: bool,
    /// Any material was added, removed or changed
    pub materials_updated: bool,
}

/// Host display shader converting scene-linear to display space.
///
/// `bind` and `unbind` bracket every surface draw so the host applies its
/// color management.
pub trait DisplayShader {
    /// Bind the display-space shader
    fn bind(&mut self) -> Result<()>;

    /// Unbind the display-space shader
    fn unbind(&mut self);
}
