//! Global logging for the reconciliation engine
//!
//! Events carry a [`Code`] and a context map. A thread-local run context
//! stamps every event with the run id while a reconcile run is active.
//! All macros are silent until [`init_global_logging`] is called.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::sync::{Arc, OnceLock};

pub use codes::Code;
pub use events::{LogEvent, LogLevel};
#[cfg(feature = "logging")]
pub use service::FacadeLogger;
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static RUN_CONTEXT: RefCell<Option<String>> = const { RefCell::new(None) };
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging from the installed runtime preferences
pub fn init_global_logging() -> Result<(), String> {
    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    logging_service.log_event(LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    ));

    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized".to_string())
}

pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// RUN CONTEXT
// ============================================================================

pub fn set_run_context(run_id: &str) {
    RUN_CONTEXT.with(|ctx| *ctx.borrow_mut() = Some(run_id.to_string()));
}

pub fn clear_run_context() {
    RUN_CONTEXT.with(|ctx| *ctx.borrow_mut() = None);
}

/// Execute function with the run id attached to every event
pub fn with_run_context<F, R>(run_id: &str, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_run_context(run_id);
    let result = f();
    clear_run_context();
    result
}

pub fn get_current_run_context() -> Option<String> {
    RUN_CONTEXT.with(|ctx| ctx.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT
// ============================================================================

/// Attach context and the current run id, then dispatch (used by the macros)
pub fn log_with_context(mut event: LogEvent, context: Vec<(&str, String)>) {
    let Some(logger) = try_get_global_logger() else {
        return;
    };

    for (key, value) in context {
        event = event.with_context(key, &value);
    }
    if let Some(run_id) = get_current_run_context() {
        event = event.with_context("run_id", &run_id);
    }

    logger.log_event(event);
}

/// Error logging that falls back to stderr when uninitialized
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        logger.log_event(LogEvent::error(code, message));
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}
