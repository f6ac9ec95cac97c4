//! Engine configuration
//!
//! Compile-time limits live in [`constants`]; user preferences in
//! [`runtime`] default from `SECPOL_*` environment variables and can be
//! overridden by a TOML file.

pub mod constants;
pub mod runtime;

pub use runtime::{
    env_vars, parse_log_level, EngineConfig, LogLevel, LoggingPreferences, ToolPreferences,
};

use crate::error::PolicyError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Unable to read configuration '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration syntax: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl From<ConfigError> for PolicyError {
    fn from(error: ConfigError) -> Self {
        PolicyError::Config {
            reason: error.to_string(),
        }
    }
}
