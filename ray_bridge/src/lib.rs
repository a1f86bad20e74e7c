/*!
# RayBridge

Bridge between a 3D content-creation host and an external ray tracer.

The host drives the bridge through trait objects; the bridge reads the
evaluated scene, converts it into a self-contained render request, calls the
ray tracer once per frame and hands the pixels back, either as the final
render result or as a texture drawn in the interactive viewport.

## Architecture

- **HostScene / SceneObject**: read-only view of the evaluated scene graph
- **extract**: visible mesh objects to world-space triangles
- **camera**: active host camera to renderer camera
- **RenderEngine**: black-box ray tracer call contract
- **PresentationSurface**: GPU texture and quad for viewport frames
- **RenderEngineCapability**: what the host calls (render, view update/draw)
- **Registration**: engine id and UI panel compatibility

Scene, camera and GPU state are always passed in explicitly; the only global
is the logger slot on `Bridge`.
*/

// Internal modules
mod bridge;
mod error;
pub mod capability;
pub mod camera;
pub mod config;
pub mod dimensions;
pub mod extract;
pub mod host;
pub mod log;
pub mod registration;
pub mod render;
pub mod surface;

// Main raybridge namespace module
pub mod raybridge {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger hub
    pub use crate::bridge::Bridge;

    // Configuration
    pub use crate::config::BridgeConfig;
    pub use crate::dimensions::OutputDimensions;

    // Host-facing entry points
    pub use crate::capability::{BridgeEngine, BridgeEngineFactory, RenderEngineCapability};
    pub use crate::registration::{EngineInfo, HostRegistry, PanelInfo, Registration};

    // Logging sub-module (types only, macros live at the crate root)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Host interfaces
    pub mod host {
        pub use crate::host::*;
    }

    // Render sub-module
    pub mod render {
        pub use crate::render::*;
    }

    // GPU presentation sub-module
    pub mod surface {
        pub use crate::surface::*;
    }
}

// Re-export math library at crate root
pub use glam;
