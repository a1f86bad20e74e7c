/// Host scene graph interface
///
/// Read-only view of the host's evaluated scene. The host (or a test double)
/// implements these traits; the bridge never mutates scene data.

use bitflags::bitflags;
use glam::{DMat4, DVec3};
use crate::error::Result;

/// Type of a scene object
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    /// Polygon mesh (the only renderable kind)
    Mesh,
    /// Camera
    Camera,
    /// Light source
    Light,
    /// Empty / transform-only object
    Empty,
    /// Anything else the host knows about (curves, volumes, ...)
    Other,
}

bitflags! {
    /// Per-object visibility switches
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Visibility: u32 {
        /// Excluded from final and preview renders
        const HIDE_RENDER = 1 << 0;
        /// Hidden in the interactive viewport
        const HIDE_VIEWPORT = 1 << 1;
    }
}

/// Camera data attached to a camera object
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraData {
    /// Vertical angular field of view in radians
    pub angle_y: f64,
}

/// Evaluated (modifier-applied) mesh in object-local space
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EvaluatedMesh {
    /// Vertex positions
    pub vertices: Vec<DVec3>,
    /// Polygon loops, each a list of indices into `vertices`
    pub polygons: Vec<Vec<u32>>,
    /// Triangulated loops when the host already computed them.
    ///
    /// When present these are used as-is and `polygons` is ignored.
    pub loop_triangles: Option<Vec<[u32; 3]>>,
}

impl EvaluatedMesh {
    /// Create a mesh from vertices and polygon loops
    pub fn new(vertices: Vec<DVec3>, polygons: Vec<Vec<u32>>) -> Self {
        Self { vertices, polygons, loop_triangles: None }
    }

    /// Attach host-computed loop triangles
    pub fn with_loop_triangles(mut self, triangles: Vec<[u32; 3]>) -> Self {
        self.loop_triangles = Some(triangles);
        self
    }
}

/// Render settings stored on the host scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSettings {
    /// Horizontal resolution in pixels
    pub resolution_x: u32,
    /// Vertical resolution in pixels
    pub resolution_y: u32,
    /// Resolution scale, 100 = full size
    pub resolution_percentage: u32,
    /// Samples per pixel for final renders
    pub samples: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            resolution_x: 1920,
            resolution_y: 1080,
            resolution_percentage: 100,
            samples: 128,
        }
    }
}

/// One object of the evaluated scene
pub trait SceneObject {
    /// Object name (used in warnings)
    fn name(&self) -> &str;

    /// Object type
    fn kind(&self) -> ObjectKind;

    /// Visibility switches
    fn visibility(&self) -> Visibility;

    /// Object-to-world matrix
    fn world_matrix(&self) -> DMat4;

    /// Evaluate the object's mesh with modifiers applied
    ///
    /// # Errors
    ///
    /// Returns an error when the host cannot produce a mesh for this object.
    fn evaluated_mesh(&self) -> Result<EvaluatedMesh>;

    /// Camera data, for camera objects
    fn camera_data(&self) -> Option<CameraData>;
}

/// The evaluated scene handed to every extraction and projection call
pub trait HostScene {
    /// All objects in host iteration order
    fn objects(&self) -> Box<dyn Iterator<Item = &dyn SceneObject> + '_>;

    /// The scene's active camera, if any
    fn active_camera(&self) -> Option<&dyn SceneObject>;

    /// Output resolution and sampling settings
    fn render_settings(&self) -> RenderSettings;
}
