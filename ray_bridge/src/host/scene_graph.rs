/// SceneGraph - in-memory HostScene implementation.
///
/// Uses a SlotMap for stable object keys plus an explicit order list, so
/// iteration always follows insertion order even after removals.
/// Embedders without a live host (tests, offline tools) build scenes here.

use slotmap::{new_key_type, SlotMap};
use glam::{DMat4, DQuat, DVec3};
use crate::error::{Error, Result};
use super::scene::{
    CameraData, EvaluatedMesh, HostScene, ObjectKind, RenderSettings, SceneObject, Visibility,
};

new_key_type! {
    /// Stable key of an object in a SceneGraph
    pub struct ObjectKey;
}

/// A stored scene object
#[derive(Debug, Clone)]
pub struct SceneNode {
    name: String,
    kind: ObjectKind,
    visibility: Visibility,
    world_matrix: DMat4,
    mesh: Option<EvaluatedMesh>,
    camera: Option<CameraData>,
}

impl SceneNode {
    /// Create a mesh object
    pub fn mesh(name: impl Into<String>, mesh: EvaluatedMesh, world_matrix: DMat4) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh,
            visibility: Visibility::empty(),
            world_matrix,
            mesh: Some(mesh),
            camera: None,
        }
    }

    /// Create a camera object
    pub fn camera(name: impl Into<String>, world_matrix: DMat4, angle_y: f64) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Camera,
            visibility: Visibility::empty(),
            world_matrix,
            mesh: None,
            camera: Some(CameraData { angle_y }),
        }
    }

    /// Create an object of any kind with no mesh or camera data
    pub fn other(name: impl Into<String>, kind: ObjectKind, world_matrix: DMat4) -> Self {
        Self {
            name: name.into(),
            kind,
            visibility: Visibility::empty(),
            world_matrix,
            mesh: None,
            camera: None,
        }
    }

    /// Set visibility flags
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }
}

impl SceneObject for SceneNode {
    fn name(&self) -> &str {
        &self.name
    }

    fn kind(&self) -> ObjectKind {
        self.kind
    }

    fn visibility(&self) -> Visibility {
        self.visibility
    }

    fn world_matrix(&self) -> DMat4 {
        self.world_matrix
    }

    fn evaluated_mesh(&self) -> Result<EvaluatedMesh> {
        self.mesh.clone().ok_or_else(|| Error::GeometryExtraction {
            object: self.name.clone(),
            reason: "object has no mesh data".to_string(),
        })
    }

    fn camera_data(&self) -> Option<CameraData> {
        self.camera
    }
}

/// In-memory scene graph
pub struct SceneGraph {
    /// Objects stored in a slot map for O(1) insert/remove
    nodes: SlotMap<ObjectKey, SceneNode>,
    /// Insertion order of live keys
    order: Vec<ObjectKey>,
    /// Active camera
    active_camera: Option<ObjectKey>,
    /// Output resolution and sampling
    settings: RenderSettings,
}

impl SceneGraph {
    /// Create an empty scene with default render settings
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            order: Vec::new(),
            active_camera: None,
            settings: RenderSettings::default(),
        }
    }

    /// Add an object and return its stable key
    pub fn insert(&mut self, node: SceneNode) -> ObjectKey {
        let key = self.nodes.insert(node);
        self.order.push(key);
        key
    }

    /// Remove an object. Returns false if the key is invalid.
    ///
    /// Removing the active camera clears it.
    pub fn remove(&mut self, key: ObjectKey) -> bool {
        if self.nodes.remove(key).is_none() {
            return false;
        }
        self.order.retain(|k| *k != key);
        if self.active_camera == Some(key) {
            self.active_camera = None;
        }
        true
    }

    /// Get an object by key
    pub fn node(&self, key: ObjectKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Number of objects
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the scene has no objects
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Set the active camera.
    ///
    /// # Errors
    ///
    /// `InvalidResource` if the key is unknown or the object has no camera data.
    pub fn set_active_camera(&mut self, key: ObjectKey) -> Result<()> {
        match self.nodes.get(key) {
            Some(node) if node.camera.is_some() => {
                self.active_camera = Some(key);
                Ok(())
            }
            Some(node) => Err(Error::InvalidResource(format!(
                "object '{}' is not a camera",
                node.name
            ))),
            None => Err(Error::InvalidResource("unknown object key".to_string())),
        }
    }

    /// Clear the active camera
    pub fn clear_active_camera(&mut self) {
        self.active_camera = None;
    }

    /// Set the world matrix of an object. Returns false if the key is invalid.
    pub fn set_world_matrix(&mut self, key: ObjectKey, matrix: DMat4) -> bool {
        match self.nodes.get_mut(key) {
            Some(node) => {
                node.world_matrix = matrix;
                true
            }
            None => false,
        }
    }

    /// Set the visibility of an object. Returns false if the key is invalid.
    pub fn set_visibility(&mut self, key: ObjectKey, visibility: Visibility) -> bool {
        match self.nodes.get_mut(key) {
            Some(node) => {
                node.visibility = visibility;
                true
            }
            None => false,
        }
    }

    /// Replace render settings
    pub fn set_render_settings(&mut self, settings: RenderSettings) {
        self.settings = settings;
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl HostScene for SceneGraph {
    fn objects(&self) -> Box<dyn Iterator<Item = &dyn SceneObject> + '_> {
        Box::new(
            self.order
                .iter()
                .filter_map(move |key| self.nodes.get(*key))
                .map(|node| node as &dyn SceneObject),
        )
    }

    fn active_camera(&self) -> Option<&dyn SceneObject> {
        self.active_camera
            .and_then(|key| self.nodes.get(key))
            .map(|node| node as &dyn SceneObject)
    }

    fn render_settings(&self) -> RenderSettings {
        self.settings
    }
}

/// World matrix of a camera at `position` looking along `direction` with `up`.
///
/// The camera's local -Z is mapped onto `direction`.
pub fn camera_world_matrix(position: DVec3, direction: DVec3, up: DVec3) -> DMat4 {
    let forward = direction.normalize();
    let right = forward.cross(up).normalize();
    let true_up = right.cross(forward);
    let rotation = DQuat::from_mat3(&glam::DMat3::from_cols(right, true_up, -forward));
    DMat4::from_rotation_translation(rotation, position)
}

#[cfg(test)]
#[path = "scene_graph_tests.rs"]
mod tests;
