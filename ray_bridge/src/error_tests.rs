//! Unit tests for error.rs

use crate::error::{Error, Result};

// ============================================================================
// DISPLAY
// ============================================================================

#[test]
fn test_missing_camera_display() {
    let err = Error::MissingCamera;
    assert!(format!("{}", err).contains("no active camera"));
}

#[test]
fn test_degenerate_output_display() {
    let err = Error::DegenerateOutput { width: 640, height: 0 };
    let display = format!("{}", err);
    assert!(display.contains("Degenerate output"));
    assert!(display.contains("640x0"));
}

#[test]
fn test_geometry_extraction_display() {
    let err = Error::GeometryExtraction {
        object: "Cube".to_string(),
        reason: "vertex index 9 out of range".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("'Cube'"));
    assert!(display.contains("vertex index 9 out of range"));
}

#[test]
fn test_render_engine_failure_display() {
    let err = Error::RenderEngineFailure("BVH build failed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Render engine failure"));
    assert!(display.contains("BVH build failed"));
}

#[test]
fn test_cancelled_display() {
    assert_eq!(format!("{}", Error::Cancelled), "Render cancelled");
}

#[test]
fn test_resource_teardown_display() {
    let err = Error::ResourceTeardown("texture 3".to_string());
    assert!(format!("{}", err).contains("Resource teardown failed: texture 3"));
}

// ============================================================================
// FATALITY
// ============================================================================

#[test]
fn test_request_errors_are_fatal() {
    assert!(Error::MissingCamera.is_fatal());
    assert!(Error::DegenerateOutput { width: 0, height: 0 }.is_fatal());
    assert!(Error::RenderEngineFailure("x".to_string()).is_fatal());
    assert!(Error::Cancelled.is_fatal());
}

#[test]
fn test_isolated_errors_are_not_fatal() {
    let warning = Error::GeometryExtraction {
        object: "Plane".to_string(),
        reason: "no mesh data".to_string(),
    };
    assert!(!warning.is_fatal());
    assert!(!Error::ResourceTeardown("vao".to_string()).is_fatal());
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::MissingCamera;
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_clone_and_eq() {
    let err = Error::InvalidConfig("far <= near".to_string());
    assert_eq!(err.clone(), err);
}

#[test]
fn test_result_question_mark() {
    fn inner() -> Result<u32> {
        Err(Error::MissingCamera)
    }
    fn outer() -> Result<u32> {
        let value = inner()?;
        Ok(value + 1)
    }
    assert_eq!(outer(), Err(Error::MissingCamera));
}

#[test]
fn test_bridge_err_macro_returns_error() {
    let err = crate::bridge_err!("raybridge::tests", Error::Cancelled);
    assert_eq!(err, Error::Cancelled);
}
