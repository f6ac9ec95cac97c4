//! Runtime logging preferences
//!
//! Preferences are installed once per process, normally from
//! [`EngineConfig`](crate::config::EngineConfig). Until then the
//! environment-derived defaults apply.

use crate::config::LoggingPreferences;
use std::sync::OnceLock;

type EventsLogLevel = crate::logging::events::LogLevel;

/// Bound on events kept by [`MemoryLogger`](super::MemoryLogger)
pub const LOG_BUFFER_SIZE: usize = 10_000;

static RUNTIME_PREFERENCES: OnceLock<LoggingPreferences> = OnceLock::new();

pub fn init_runtime_preferences(preferences: LoggingPreferences) -> Result<(), String> {
    RUNTIME_PREFERENCES
        .set(preferences)
        .map_err(|_| "Runtime preferences already initialized".to_string())
}

fn get_runtime_preferences() -> LoggingPreferences {
    RUNTIME_PREFERENCES.get().cloned().unwrap_or_default()
}

pub fn get_min_log_level() -> EventsLogLevel {
    get_runtime_preferences().min_log_level.to_events_log_level()
}

pub fn use_structured_logging() -> bool {
    get_runtime_preferences().use_structured_logging
}

pub fn use_log_facade() -> bool {
    get_runtime_preferences().use_log_facade
}

pub fn get_error_buffer_size() -> usize {
    LOG_BUFFER_SIZE
}
