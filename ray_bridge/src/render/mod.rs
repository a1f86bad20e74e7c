//! Render module - the call into the external ray tracer.
//!
//! Builds a `RenderRequest` from the host scene, invokes the engine once,
//! and delivers the pixels either to the host result writer (final render)
//! or back to the caller for viewport presentation.

mod invocation;
mod pixel_buffer;
mod render_engine;
mod render_result;

pub use invocation::{RenderInvocation, RenderQuality};
pub use pixel_buffer::PixelBuffer;
pub use render_engine::{CancellationToken, RenderEngine, RenderRequest};
pub use render_result::{RenderResult, ResultWriter, COMBINED_PASS};
