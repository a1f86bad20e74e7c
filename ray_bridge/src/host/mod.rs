//! Host module - interfaces implemented by the host application.
//!
//! The bridge only reads from the host scene. Everything it needs (scene,
//! viewport region, display shader) is passed in explicitly.

mod scene;
mod scene_graph;
mod view;

pub use scene::{
    CameraData, EvaluatedMesh, HostScene, ObjectKind, RenderSettings, SceneObject, Visibility,
};
pub use scene_graph::{camera_world_matrix, ObjectKey, SceneGraph, SceneNode};
pub use view::{DisplayShader, SceneUpdates, ViewContext};
