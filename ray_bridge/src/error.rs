//! Error types for RayBridge
//!
//! This module defines the error types used throughout the bridge:
//! request validation, camera projection, geometry extraction, the external
//! render engine and GPU presentation resources.

use std::fmt;

/// Result type for RayBridge operations
pub type Result<T> = std::result::Result<T, Error>;

/// RayBridge errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The scene has no active camera (aborts the render request)
    MissingCamera,

    /// Output width or height is zero (aborts the render request)
    DegenerateOutput {
        /// Requested width in pixels
        width: u32,
        /// Requested height in pixels
        height: u32,
    },

    /// A single mesh object could not be evaluated or triangulated.
    ///
    /// Non-fatal: reported as a warning, the object is skipped.
    GeometryExtraction {
        /// Name of the offending scene object
        object: String,
        /// Human readable failure reason
        reason: String,
    },

    /// The external render engine failed or returned an unusable buffer
    RenderEngineFailure(String),

    /// The render request was cancelled before a result was committed
    Cancelled,

    /// Releasing a GPU handle failed (logged, never escalated)
    ResourceTeardown(String),

    /// Invalid resource (texture, buffer, pixel buffer, surface state)
    InvalidResource(String),

    /// Invalid configuration value (near/far planes, sample count)
    InvalidConfig(String),

    /// Backend-specific error (GPU device, host callbacks, poisoned locks)
    BackendError(String),

    /// Initialization or registration failed
    InitializationFailed(String),
}

impl Error {
    /// Whether this error aborts the whole render request.
    ///
    /// Per-object extraction failures and teardown failures are isolated.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, Error::GeometryExtraction { .. } | Error::ResourceTeardown(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingCamera => write!(f, "Missing camera: the scene has no active camera"),
            Error::DegenerateOutput { width, height } => {
                write!(f, "Degenerate output: {}x{} has a zero dimension", width, height)
            }
            Error::GeometryExtraction { object, reason } => {
                write!(f, "Geometry extraction failed for '{}': {}", object, reason)
            }
            Error::RenderEngineFailure(msg) => write!(f, "Render engine failure: {}", msg),
            Error::Cancelled => write!(f, "Render cancelled"),
            Error::ResourceTeardown(msg) => write!(f, "Resource teardown failed: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InvalidConfig(msg) => write!(f, "Invalid configuration: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an error (with file:line) and evaluate to it
///
/// # Example
///
/// ```no_run
/// use ray_bridge::{bridge_err, raybridge::Error};
///
/// let err = bridge_err!("raybridge::camera", Error::MissingCamera);
/// ```
#[macro_export]
macro_rules! bridge_err {
    ($source:expr, $err:expr) => {{
        let err: $crate::raybridge::Error = $err;
        $crate::raybridge::Bridge::log_detailed(
            $crate::raybridge::log::LogSeverity::Error,
            $source,
            format!("{}", err),
            file!(),
            line!(),
        );
        err
    }};
}

/// Log an error (with file:line) and return it from the current function
#[macro_export]
macro_rules! bridge_bail {
    ($source:expr, $err:expr) => {
        return Err($crate::bridge_err!($source, $err))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
