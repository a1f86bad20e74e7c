/// Render-engine capability exposed to the host
///
/// The host drives one `BridgeEngine` per engine instance (viewport or final
/// render) through the `RenderEngineCapability` trait. Instances come from a
/// `BridgeEngineFactory`; nothing is stored globally.

use std::sync::{Arc, Mutex};
use crate::config::BridgeConfig;
use crate::dimensions::OutputDimensions;
use crate::error::{Error, Result};
use crate::host::{DisplayShader, HostScene, SceneUpdates, ViewContext};
use crate::render::{CancellationToken, PixelBuffer, RenderEngine, RenderInvocation, RenderQuality, ResultWriter};
use crate::surface::{BlendMode, GraphicsDevice, PresentationSurface};

/// Entry points the host calls on a render engine instance
pub trait RenderEngineCapability {
    /// Final render (F12) or material preview
    fn render(
        &mut self,
        scene: &dyn HostScene,
        quality: RenderQuality,
        writer: &mut dyn ResultWriter,
    ) -> Result<()>;

    /// Scene or viewport changed
    fn view_update(
        &mut self,
        context: &ViewContext,
        scene: &dyn HostScene,
        updates: &SceneUpdates,
    ) -> Result<()>;

    /// Viewport redraw. Must stay cheap: no rendering happens here.
    fn view_draw(
        &mut self,
        context: &ViewContext,
        scene: &dyn HostScene,
        shader: &mut dyn DisplayShader,
    ) -> Result<()>;

    /// Release GPU resources. Further calls fail.
    fn shutdown(&mut self);
}

/// One engine instance bridging the host to the external ray tracer
pub struct BridgeEngine {
    config: BridgeConfig,
    engine: Box<dyn RenderEngine>,
    graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
    surface: Option<PresentationSurface>,
    /// Latest viewport frame, waiting for the next draw
    pending_frame: Option<PixelBuffer>,
    scene_seen: bool,
    cancel: CancellationToken,
    shut_down: bool,
}

impl BridgeEngine {
    /// Engine instance rendering through `engine` and presenting viewport
    /// frames on `graphics_device`. No GPU work happens until the first draw.
    pub fn new(
        config: BridgeConfig,
        engine: Box<dyn RenderEngine>,
        graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
    ) -> Self {
        Self {
            config,
            engine,
            graphics_device,
            surface: None,
            pending_frame: None,
            scene_seen: false,
            cancel: CancellationToken::new(),
            shut_down: false,
        }
    }

    /// Configuration this instance was created with
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Token the host can use to cancel a running render
    ///
    /// A cancelled render resets the token once it has returned.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    /// Surface presenting viewport frames, once the first draw created it
    pub fn surface(&self) -> Option<&PresentationSurface> {
        self.surface.as_ref()
    }

    /// Whether a viewport frame is waiting to be uploaded
    pub fn has_pending_frame(&self) -> bool {
        self.pending_frame.is_some()
    }

    fn check_alive(&self) -> Result<()> {
        if self.shut_down {
            return Err(Error::InvalidResource("engine instance was shut down".to_string()));
        }
        Ok(())
    }

    fn clear_cancellation(&self, result: &Result<()>) {
        if matches!(result, Err(Error::Cancelled)) {
            crate::bridge_info!("raybridge::capability", "Render cancelled");
            self.cancel.reset();
        }
    }

    fn render_preview_frame(&mut self, scene: &dyn HostScene, dimensions: OutputDimensions) -> Result<()> {
        let invocation = RenderInvocation::new(&self.config).with_cancellation(self.cancel.clone());
        let request = invocation.prepare_with_dimensions(scene, dimensions, RenderQuality::Preview)?;
        let frame = invocation.execute(request, self.engine.as_mut())?;
        self.pending_frame = Some(frame);
        Ok(())
    }

    fn set_blend(&self, mode: Option<BlendMode>) -> Result<()> {
        self.graphics_device
            .lock()
            .map_err(|_| Error::BackendError("GraphicsDevice lock poisoned".to_string()))?
            .set_blend(mode);
        Ok(())
    }

    /// Ensure the surface, upload the pending frame and draw
    fn present(&mut self, dimensions: OutputDimensions) -> Result<()> {
        let graphics_device = &self.graphics_device;
        let placeholder_color = self.config.placeholder_color;
        let surface = self
            .surface
            .get_or_insert_with(|| PresentationSurface::new(Arc::clone(graphics_device), placeholder_color));
        surface.ensure(dimensions)?;

        if let Some(frame) = self.pending_frame.take() {
            if frame.dimensions() == dimensions {
                surface.upload(&frame)?;
            } else {
                crate::bridge_debug!(
                    "raybridge::capability",
                    "Dropping {}x{} frame for {}x{} region",
                    frame.dimensions().width,
                    frame.dimensions().height,
                    dimensions.width,
                    dimensions.height
                );
            }
        }

        surface.draw();
        Ok(())
    }
}

impl RenderEngineCapability for BridgeEngine {
    fn render(
        &mut self,
        scene: &dyn HostScene,
        quality: RenderQuality,
        writer: &mut dyn ResultWriter,
    ) -> Result<()> {
        self.check_alive()?;
        let result = RenderInvocation::new(&self.config)
            .with_cancellation(self.cancel.clone())
            .render_final(scene, quality, self.engine.as_mut(), writer);
        self.clear_cancellation(&result);
        result
    }

    fn view_update(
        &mut self,
        context: &ViewContext,
        scene: &dyn HostScene,
        updates: &SceneUpdates,
    ) -> Result<()> {
        self.check_alive()?;

        let first_time = !self.scene_seen;
        self.scene_seen = true;
        if !first_time {
            for id in &updates.updated_ids {
                crate::bridge_debug!("raybridge::capability", "Datablock updated: {}", id);
            }
            if updates.materials_updated {
                crate::bridge_debug!("raybridge::capability", "Materials updated");
            }
        }

        if !(first_time || updates.objects_updated) {
            return Ok(());
        }

        let result = self.render_preview_frame(scene, context.dimensions());
        self.clear_cancellation(&result);
        result
    }

    fn view_draw(
        &mut self,
        context: &ViewContext,
        _scene: &dyn HostScene,
        shader: &mut dyn DisplayShader,
    ) -> Result<()> {
        self.check_alive()?;

        self.set_blend(Some(BlendMode::PremultipliedAlpha))?;
        let result = match shader.bind() {
            Ok(()) => {
                let drawn = self.present(context.dimensions());
                shader.unbind();
                drawn
            }
            Err(err) => Err(err),
        };
        self.set_blend(None)?;
        result
    }

    fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.cancel.cancel();
        if let Some(surface) = self.surface.as_mut() {
            surface.destroy();
        }
        self.pending_frame = None;
        self.shut_down = true;
        crate::bridge_debug!("raybridge::capability", "Engine instance shut down");
    }
}

/// Builds an external engine for each new instance
pub type EngineBuilder = Box<dyn Fn() -> Box<dyn RenderEngine> + Send + Sync>;

/// Creates `BridgeEngine` instances sharing one configuration and GPU device
pub struct BridgeEngineFactory {
    config: BridgeConfig,
    graphics_device: Arc<Mutex<dyn GraphicsDevice>>,
    engine_builder: EngineBuilder,
}

impl BridgeEngineFactory {
    /// Create a factory after validating `config`
    ///
    /// # Errors
    ///
    /// `Error::InvalidConfig` if the configuration is rejected.
    pub fn new<F>(config: BridgeConfig, graphics_device: Arc<Mutex<dyn GraphicsDevice>>, engine_builder: F) -> Result<Self>
    where
        F: Fn() -> Box<dyn RenderEngine> + Send + Sync + 'static,
    {
        if let Err(err) = config.validate() {
            crate::bridge_bail!("raybridge::capability", err);
        }
        Ok(Self {
            config,
            graphics_device,
            engine_builder: Box::new(engine_builder),
        })
    }

    /// Configuration handed to every created instance
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// New engine instance with its own surface and external engine
    pub fn create(&self) -> BridgeEngine {
        BridgeEngine::new(
            self.config.clone(),
            (self.engine_builder)(),
            Arc::clone(&self.graphics_device),
        )
    }
}

#[cfg(test)]
#[path = "capability_tests.rs"]
mod tests;
