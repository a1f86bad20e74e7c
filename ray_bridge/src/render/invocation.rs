/// Render invocation - one synchronous engine call per request.
///
/// Validation order: output dimensions, camera, samples, geometry. Any
/// failure before the engine call means the engine is never invoked.

use crate::camera::project_camera;
use crate::config::BridgeConfig;
use crate::dimensions::OutputDimensions;
use crate::error::{Error, Result};
use crate::extract::{extract_triangles, ExtractOptions};
use crate::host::HostScene;
use super::pixel_buffer::PixelBuffer;
use super::render_engine::{CancellationToken, RenderEngine, RenderRequest};
use super::render_result::{RenderResult, ResultWriter, COMBINED_PASS};

/// Which quality a request renders at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderQuality {
    /// Final render: host sample count
    Final,
    /// Viewport or material preview: configured preview sample count
    Preview,
}

/// Prepares and issues render calls for one bridge configuration
pub struct RenderInvocation<'a> {
    config: &'a BridgeConfig,
    cancel: CancellationToken,
}

impl<'a> RenderInvocation<'a> {
    /// Create an invocation with a fresh cancellation token
    pub fn new(config: &'a BridgeConfig) -> Self {
        Self { config, cancel: CancellationToken::new() }
    }

    /// Use a host-owned cancellation token
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Sample count for a quality level
    pub fn sample_count(&self, scene: &dyn HostScene, quality: RenderQuality) -> Result<u32> {
        let samples = match quality {
            RenderQuality::Final => scene.render_settings().samples,
            RenderQuality::Preview => self.config.preview_samples,
        };
        if samples == 0 {
            return Err(Error::InvalidConfig(format!("{:?} sample count must be > 0", quality)));
        }
        Ok(samples)
    }

    /// Build a request at the scene's final output size
    pub fn prepare(&self, scene: &dyn HostScene, quality: RenderQuality) -> Result<RenderRequest> {
        let dimensions = OutputDimensions::from_settings(&scene.render_settings());
        self.prepare_with_dimensions(scene, dimensions, quality)
    }

    /// Build a request at an explicit output size (viewport regions)
    pub fn prepare_with_dimensions(
        &self,
        scene: &dyn HostScene,
        dimensions: OutputDimensions,
        quality: RenderQuality,
    ) -> Result<RenderRequest> {
        let dimensions = dimensions.validate()?;
        let camera = project_camera(scene, dimensions, &self.config.camera)?;
        let samples = self.sample_count(scene, quality)?;

        let options = ExtractOptions { transform_mode: self.config.transform_mode };
        let extraction = extract_triangles(scene, &options);

        Ok(RenderRequest {
            dimensions,
            samples,
            camera,
            triangles: extraction.triangles,
        })
    }

    /// Issue the engine call for a prepared request
    ///
    /// # Errors
    ///
    /// - `Error::Cancelled` if the token is set before or after the call
    /// - `Error::RenderEngineFailure` if the engine fails or returns a
    ///   buffer of the wrong size
    pub fn execute(&self, request: RenderRequest, engine: &mut dyn RenderEngine) -> Result<PixelBuffer> {
        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let expected = request.dimensions;
        crate::bridge_info!(
            "raybridge::render",
            "Rendering {}x{} at {} spp with {} triangles",
            expected.width,
            expected.height,
            request.samples,
            request.triangles.len()
        );

        let buffer = engine.render(request, &self.cancel).map_err(|err| match err {
            Error::Cancelled | Error::RenderEngineFailure(_) => err,
            other => Error::RenderEngineFailure(other.to_string()),
        })?;

        if self.cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }
        if buffer.dimensions() != expected {
            return Err(Error::RenderEngineFailure(format!(
                "engine returned {}x{}, expected {}x{}",
                buffer.dimensions().width,
                buffer.dimensions().height,
                expected.width,
                expected.height
            )));
        }
        Ok(buffer)
    }

    /// Prepare and execute at the scene's final output size
    pub fn run(
        &self,
        scene: &dyn HostScene,
        quality: RenderQuality,
        engine: &mut dyn RenderEngine,
    ) -> Result<PixelBuffer> {
        let request = self.prepare(scene, quality)?;
        self.execute(request, engine)
    }

    /// Final-render path: render, then commit the Combined pass in one piece
    ///
    /// Nothing reaches the writer unless the engine succeeded.
    pub fn render_final(
        &self,
        scene: &dyn HostScene,
        quality: RenderQuality,
        engine: &mut dyn RenderEngine,
        writer: &mut dyn ResultWriter,
    ) -> Result<()> {
        let buffer = self.run(scene, quality, engine)?;
        let mut result = RenderResult::new(buffer.dimensions());
        result.set_pass(COMBINED_PASS, buffer)?;
        writer.write_result(result)
    }
}

#[cfg(test)]
#[path = "invocation_tests.rs"]
mod tests;
