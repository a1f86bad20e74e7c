/// Engine registration with the host
///
/// Registers the render engine and marks it compatible with the host's
/// built-in UI panels, so the standard render/output panels show up when the
/// engine is selected.

use rustc_hash::FxHashSet;
use crate::error::Result;

/// Panel tag identifying panels usable by any basic render engine
pub const BASE_PANEL_ENGINE: &str = "BLENDER_RENDER";

/// Panels replaced or unsupported by this engine
pub const EXCLUDED_PANELS: [&str; 2] = ["VIEWLAYER_PT_filter", "VIEWLAYER_PT_layer_passes"];

/// Identity the engine registers under
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineInfo {
    /// Internal identifier
    pub id: String,
    /// Name shown in the engine selector
    pub label: String,
    /// Whether the engine renders material previews
    pub use_preview: bool,
}

impl Default for EngineInfo {
    fn default() -> Self {
        Self {
            id: "RUST_RENDER".to_string(),
            label: "David Renderer".to_string(),
            use_preview: false,
        }
    }
}

/// A host UI panel and the engines it is shown for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelInfo {
    /// Panel identifier, e.g. `RENDER_PT_output`
    pub name: String,
    /// Engine ids the panel is shown for
    pub compat_engines: FxHashSet<String>,
}

impl PanelInfo {
    /// Panel `name` shown for each engine id in `compat_engines`
    pub fn new(name: impl Into<String>, compat_engines: &[&str]) -> Self {
        Self {
            name: name.into(),
            compat_engines: compat_engines.iter().map(|engine| engine.to_string()).collect(),
        }
    }
}

/// Host-side registry of engines and panels
pub trait HostRegistry {
    /// Make the engine selectable
    fn register_engine(&mut self, info: &EngineInfo) -> Result<()>;

    /// Remove the engine
    fn unregister_engine(&mut self, engine_id: &str) -> Result<()>;

    /// Snapshot of all panels that declare compatible engines
    fn panels(&self) -> Vec<PanelInfo>;

    /// Add (`compatible = true`) or remove an engine from a panel's set
    fn set_panel_compat(&mut self, panel: &str, engine_id: &str, compatible: bool) -> Result<()>;
}

/// Panels the engine should appear in: every base-engine panel minus the
/// excluded ones
pub fn compatible_panels(panels: &[PanelInfo]) -> Vec<&PanelInfo> {
    panels
        .iter()
        .filter(|panel| panel.compat_engines.contains(BASE_PANEL_ENGINE))
        .filter(|panel| !EXCLUDED_PANELS.contains(&panel.name.as_str()))
        .collect()
}

/// Registration lifecycle for one engine identity
///
/// Both `register` and `unregister` are idempotent. A registration that
/// failed half-way is completed by the next `register` call.
#[derive(Debug)]
pub struct Registration {
    info: EngineInfo,
    /// Engine known to the host
    engine_added: bool,
    /// Engine known to the host and every compatible panel patched
    registered: bool,
}

impl Registration {
    /// Registration for `info`, not yet known to any host
    pub fn new(info: EngineInfo) -> Self {
        Self { info, engine_added: false, registered: false }
    }

    /// Identity this registration manages
    pub fn info(&self) -> &EngineInfo {
        &self.info
    }

    /// Whether the last `register` call completed
    pub fn is_registered(&self) -> bool {
        self.registered
    }

    /// Register the engine and patch compatible panels
    ///
    /// # Errors
    ///
    /// Host failures are returned as-is. Panels patched before the failure
    /// stay patched; calling `register` again patches the rest.
    pub fn register(&mut self, host: &mut dyn HostRegistry) -> Result<()> {
        if self.registered {
            return Ok(());
        }
        if !self.engine_added {
            host.register_engine(&self.info)?;
            self.engine_added = true;
        }

        let panels = host.panels();
        let mut patched = 0;
        for panel in compatible_panels(&panels) {
            if !panel.compat_engines.contains(&self.info.id) {
                host.set_panel_compat(&panel.name, &self.info.id, true)?;
                patched += 1;
            }
        }
        self.registered = true;
        crate::bridge_info!(
            "raybridge::registration",
            "Registered engine '{}' ({}), {} panels enabled",
            self.info.label,
            self.info.id,
            patched
        );
        Ok(())
    }

    /// Unregister the engine and remove it from the panels it was added to
    pub fn unregister(&mut self, host: &mut dyn HostRegistry) -> Result<()> {
        if !self.engine_added {
            return Ok(());
        }
        host.unregister_engine(&self.info.id)?;
        self.engine_added = false;
        self.registered = false;

        let panels = host.panels();
        for panel in compatible_panels(&panels) {
            if panel.compat_engines.contains(&self.info.id) {
                host.set_panel_compat(&panel.name, &self.info.id, false)?;
            }
        }
        crate::bridge_info!("raybridge::registration", "Unregistered engine '{}'", self.info.id);
        Ok(())
    }
}

impl Default for Registration {
    fn default() -> Self {
        Self::new(EngineInfo::default())
    }
}

#[cfg(test)]
#[path = "registration_tests.rs"]
mod tests;
