//! Integration tests for the logging system
//!
//! Verifies the global logger slot and the log lines emitted by the render
//! path. No GPU required.
//!
//! Run with: cargo test --test logging_integration_tests


use bridge_test_utils::{messages_at, reference_scene, CapturingLogger, RecordingEngine};
use ray_bridge::glam::{DMat4, DVec3};
use ray_bridge::raybridge::host::{EvaluatedMesh, SceneNode};
use ray_bridge::raybridge::log::LogSeverity;
use ray_bridge::raybridge::render::{RenderInvocation, RenderQuality};
use ray_bridge::raybridge::{Bridge, BridgeConfig};
use serial_test::serial;

// ============================================================================
// LOGGER SLOT
// ============================================================================

#[test]
#[serial]
fn test_integration_custom_logger() {
    let (logger, entries) = CapturingLogger::new();
    Bridge::set_logger(logger);

    Bridge::log(LogSeverity::Info, "test::module", "Test info message".to_string());
    Bridge::log(LogSeverity::Warn, "test::module", "Test warning message".to_string());

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 2);
        assert_eq!(captured[0].severity, LogSeverity::Info);
        assert_eq!(captured[0].source, "test::module");
        assert_eq!(captured[1].message, "Test warning message");
        assert_eq!(captured[1].file, None);
    }

    Bridge::reset_logger();
}

#[test]
#[serial]
fn test_integration_error_logging_with_location() {
    let (logger, entries) = CapturingLogger::new();
    Bridge::set_logger(logger);

    Bridge::log_detailed(
        LogSeverity::Error,
        "test::error",
        "Critical error occurred".to_string(),
        "test_file.rs",
        42,
    );

    {
        let captured = entries.lock().unwrap();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].file, Some("test_file.rs"));
        assert_eq!(captured[0].line, Some(42));
    }

    Bridge::reset_logger();
}

#[test]
#[serial]
fn test_integration_logger_reset() {
    let (logger, entries) = CapturingLogger::new();
    Bridge::set_logger(logger);
    Bridge::log(LogSeverity::Info, "test", "Message 1".to_string());

    Bridge::reset_logger();
    Bridge::log(LogSeverity::Info, "test", "Message 2".to_string());

    assert_eq!(entries.lock().unwrap().len(), 1);
}

// ============================================================================
// RENDER PATH LOG LINES
// ============================================================================

#[test]
#[serial]
fn test_integration_broken_object_logs_warning_and_render_continues() {
    let (mut scene, _) = reference_scene(16, 16, 1);
    scene.insert(SceneNode::mesh(
        "BrokenMesh",
        EvaluatedMesh::new(vec![DVec3::ZERO, DVec3::X], vec![vec![0, 1, 7]]),
        DMat4::IDENTITY,
    ));
    let (logger, entries) = CapturingLogger::new();
    Bridge::set_logger(logger);
    let (mut engine, requests) = RecordingEngine::new();
    let config = BridgeConfig::default();

    let result = RenderInvocation::new(&config).run(&scene, RenderQuality::Final, &mut engine);

    Bridge::reset_logger();
    assert!(result.is_ok());
    assert_eq!(requests.lock().unwrap()[0].triangles.len(), 1);
    let warnings = messages_at(&entries, LogSeverity::Warn);
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].contains("BrokenMesh"));
    let infos = messages_at(&entries, LogSeverity::Info);
    assert!(infos.iter().any(|message| message.starts_with("Rendering 16x16")));
}
