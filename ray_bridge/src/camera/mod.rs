//! Camera module - host camera to renderer camera.
//!
//! The projector reads the active camera's world transform and angular
//! field of view and produces a `CameraDescriptor` for the render engine.

mod camera_descriptor;
mod projector;

pub use camera_descriptor::{
    degrees_to_radians, radians_to_degrees, CameraDescriptor, CameraSettings,
};
pub use projector::{project_camera, LOCAL_FORWARD, LOCAL_UP};

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
