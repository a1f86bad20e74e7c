/// Bridge configuration

use crate::camera::CameraSettings;
use crate::error::{Error, Result};
use crate::extract::TransformMode;
use crate::registration::EngineInfo;

/// Configuration of one bridge instance
///
/// Every value that used to be a literal in the render path lives here
/// with a documented default.
#[derive(Debug, Clone, PartialEq)]
pub struct BridgeConfig {
    /// Near/far planes (default 0.1 / 5.0)
    pub camera: CameraSettings,
    /// Samples per pixel for viewport and material previews (default 1)
    pub preview_samples: u32,
    /// Local-to-world transform of extracted vertices (default Full)
    pub transform_mode: TransformMode,
    /// Color shown by a fresh presentation surface before the first
    /// preview frame arrives (default dark green)
    pub placeholder_color: [f32; 4],
    /// Identity the engine registers with in the host
    pub engine: EngineInfo,
}

impl BridgeConfig {
    /// Default preview sample count
    pub const DEFAULT_PREVIEW_SAMPLES: u32 = 1;
    /// Default placeholder color
    pub const DEFAULT_PLACEHOLDER_COLOR: [f32; 4] = [0.1, 0.2, 0.1, 1.0];

    /// Set the clip planes
    pub fn with_camera(mut self, camera: CameraSettings) -> Self {
        self.camera = camera;
        self
    }

    /// Set the preview sample count
    pub fn with_preview_samples(mut self, samples: u32) -> Self {
        self.preview_samples = samples;
        self
    }

    /// Set the transform mode
    pub fn with_transform_mode(mut self, mode: TransformMode) -> Self {
        self.transform_mode = mode;
        self
    }

    /// Set the placeholder color
    pub fn with_placeholder_color(mut self, color: [f32; 4]) -> Self {
        self.placeholder_color = color;
        self
    }

    /// Set the engine identity
    pub fn with_engine(mut self, engine: EngineInfo) -> Self {
        self.engine = engine;
        self
    }

    /// Check every value
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` for bad clip planes, zero preview samples or
    /// an empty engine id.
    pub fn validate(&self) -> Result<()> {
        self.camera.validate()?;
        if self.preview_samples == 0 {
            return Err(Error::InvalidConfig("preview_samples must be > 0".to_string()));
        }
        if self.engine.id.is_empty() {
            return Err(Error::InvalidConfig("engine id must not be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            camera: CameraSettings::default(),
            preview_samples: Self::DEFAULT_PREVIEW_SAMPLES,
            transform_mode: TransformMode::default(),
            placeholder_color: Self::DEFAULT_PLACEHOLDER_COLOR,
            engine: EngineInfo::default(),
        }
    }
}
