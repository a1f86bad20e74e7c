/// CameraDescriptor - the renderer's camera model.
///
/// A passive value built once per render request. The render engine turns
/// it into its own ray-generation basis.

use glam::DVec3;
use crate::error::{Error, Result};

/// Near/far clip planes handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    /// Near plane distance (> 0)
    pub near: f64,
    /// Far plane distance (> near)
    pub far: f64,
}

impl CameraSettings {
    /// Default near plane
    pub const DEFAULT_NEAR: f64 = 0.1;
    /// Default far plane
    pub const DEFAULT_FAR: f64 = 5.0;

    /// Check that `0 < near < far`
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` when the planes are out of order or not finite.
    pub fn validate(&self) -> Result<()> {
        if !(self.near.is_finite() && self.far.is_finite()) {
            return Err(Error::InvalidConfig("clip planes must be finite".to_string()));
        }
        if self.near <= 0.0 {
            return Err(Error::InvalidConfig(format!("near plane {} must be > 0", self.near)));
        }
        if self.far <= self.near {
            return Err(Error::InvalidConfig(format!(
                "far plane {} must be greater than near plane {}",
                self.far, self.near
            )));
        }
        Ok(())
    }
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self { near: Self::DEFAULT_NEAR, far: Self::DEFAULT_FAR }
    }
}

/// Camera as consumed by the render engine
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraDescriptor {
    /// World-space position
    pub position: DVec3,
    /// Viewing direction (a direction, not a look-at point)
    pub look_direction: DVec3,
    /// Up vector
    pub up: DVec3,
    /// Vertical field of view in degrees
    pub vertical_fov_degrees: f64,
    /// `width / height`
    pub aspect_ratio: f64,
    /// Near clip plane
    pub near: f64,
    /// Far clip plane
    pub far: f64,
}

impl CameraDescriptor {
    /// Look-at point one unit along the viewing direction
    pub fn look_at_point(&self) -> DVec3 {
        self.position + self.look_direction
    }
}

/// Radians to degrees (`rad * 180 / π`)
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}

/// Degrees to radians (`deg * π / 180`)
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}
