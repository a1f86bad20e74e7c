/// Camera projection - host camera state to CameraDescriptor.

use glam::DVec3;
use crate::dimensions::OutputDimensions;
use crate::error::{Error, Result};
use crate::host::HostScene;
use super::camera_descriptor::{radians_to_degrees, CameraDescriptor, CameraSettings};

/// Camera-local viewing axis
pub const LOCAL_FORWARD: DVec3 = DVec3::NEG_Z;

/// Camera-local up axis
pub const LOCAL_UP: DVec3 = DVec3::Y;

/// Build the renderer camera from the scene's active camera.
///
/// Dimensions are validated before anything else so a zero height never
/// reaches the aspect-ratio division.
///
/// # Errors
///
/// - `Error::DegenerateOutput` if `dimensions` has a zero side
/// - `Error::MissingCamera` if the scene has no active camera, or the active
///   object carries no camera data
/// - `Error::InvalidConfig` if the clip planes are invalid
pub fn project_camera(
    scene: &dyn HostScene,
    dimensions: OutputDimensions,
    settings: &CameraSettings,
) -> Result<CameraDescriptor> {
    let aspect_ratio = dimensions.aspect_ratio()?;
    settings.validate()?;

    let camera = scene.active_camera().ok_or(Error::MissingCamera)?;
    let data = camera.camera_data().ok_or(Error::MissingCamera)?;

    let (_, rotation, translation) = camera.world_matrix().to_scale_rotation_translation();

    let descriptor = CameraDescriptor {
        position: translation,
        look_direction: rotation * LOCAL_FORWARD,
        up: rotation * LOCAL_UP,
        vertical_fov_degrees: radians_to_degrees(data.angle_y),
        aspect_ratio,
        near: settings.near,
        far: settings.far,
    };

    crate::bridge_debug!(
        "raybridge::camera",
        "Camera '{}' at {:?} looking {:?}, fov {:.3} deg, aspect {:.4}",
        camera.name(),
        descriptor.position,
        descriptor.look_direction,
        descriptor.vertical_fov_degrees,
        descriptor.aspect_ratio
    );

    Ok(descriptor)
}
