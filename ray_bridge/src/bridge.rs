/// RayBridge global hub
///
/// Holds the process-wide logger slot. Scene, camera and GPU state are never
/// stored here: they are passed explicitly to every operation.

use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};

/// Global logger (initialized with DefaultLogger)
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

fn logger_slot() -> &'static RwLock<Box<dyn Logger>> {
    LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger::default())))
}

/// Process-wide logging entry point used by the `bridge_*!` macros
///
/// # Example
///
/// ```no_run
/// use ray_bridge::raybridge::{Bridge, log::{Logger, LogEntry}};
///
/// struct ReportLogger;
/// impl Logger for ReportLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Forward to the host report panel...
///     }
/// }
///
/// Bridge::set_logger(ReportLogger);
/// ```
pub struct Bridge;

impl Bridge {
    /// Replace the current logger
    pub fn set_logger<L: Logger + 'static>(logger: L) {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(logger);
        }
    }

    /// Reset logger to the default console logger
    pub fn reset_logger() {
        if let Ok(mut lock) = logger_slot().write() {
            *lock = Box::new(DefaultLogger::default());
        }
    }

    /// Log a message without file:line
    ///
    /// Used by `bridge_trace!` through `bridge_warn!`.
    pub fn log(severity: LogSeverity, source: &str, message: String) {
        if let Ok(lock) = logger_slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: None,
                line: None,
            });
        }
    }

    /// Log a message with file:line information
    ///
    /// Used by `bridge_error!` and `bridge_err!`.
    pub fn log_detailed(
        severity: LogSeverity,
        source: &str,
        message: String,
        file: &'static str,
        line: u32,
    ) {
        if let Ok(lock) = logger_slot().read() {
            lock.log(&LogEntry {
                severity,
                timestamp: SystemTime::now(),
                source: source.to_string(),
                message,
                file: Some(file),
                line: Some(line),
            });
        }
    }
}
