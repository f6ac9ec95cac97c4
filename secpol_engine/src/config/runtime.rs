// RUNTIME PREFERENCES

use super::constants::compile_time::tools;
use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ToolPreferences {
    /// Directory for the export snapshot and transient import files
    pub temp_dir: PathBuf,

    pub secedit_path: String,
    pub reg_path: String,
    pub powershell_path: String,

    /// Timeout applied to every subprocess, in seconds
    pub command_timeout_secs: u64,

    /// Optional `PATH` for child processes
    pub search_path: Option<String>,
}

impl Default for ToolPreferences {
    fn default() -> Self {
        Self {
            temp_dir: env::var(env_vars::TEMP_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(tools::DEFAULT_TEMP_DIR)),
            secedit_path: env::var(env_vars::SECEDIT_PATH)
                .unwrap_or_else(|_| tools::SECEDIT.to_string()),
            reg_path: env::var(env_vars::REG_PATH).unwrap_or_else(|_| tools::REG.to_string()),
            powershell_path: env::var(env_vars::POWERSHELL_PATH)
                .unwrap_or_else(|_| tools::POWERSHELL.to_string()),
            command_timeout_secs: env::var(env_vars::COMMAND_TIMEOUT_SECS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(tools::DEFAULT_COMMAND_TIMEOUT_SECS),
            search_path: env::var(env_vars::SEARCH_PATH).ok(),
        }
    }
}

impl ToolPreferences {
    pub fn command_timeout(&self) -> Duration {
        Duration::from_secs(self.command_timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Emit JSON lines instead of text
    pub use_structured_logging: bool,

    /// Forward events to the `log` facade instead of printing them
    pub use_log_facade: bool,

    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            use_log_facade: env::var(env_vars::LOGGING_USE_FACADE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (environment variables and CLI flags)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Complete engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    pub tools: ToolPreferences,
    pub logging: LoggingPreferences,
}

impl EngineConfig {
    /// Parse a TOML document. Missing keys fall back to environment defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tools.temp_dir.as_os_str().is_empty() {
            return Err(ConfigError::Invalid {
                field: "tools.temp_dir",
                reason: "must not be empty".to_string(),
            });
        }
        for (field, value) in [
            ("tools.secedit_path", &self.tools.secedit_path),
            ("tools.reg_path", &self.tools.reg_path),
            ("tools.powershell_path", &self.tools.powershell_path),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "must not be empty".to_string(),
                });
            }
        }
        if self.tools.command_timeout_secs == 0
            || self.tools.command_timeout_secs > tools::MAX_COMMAND_TIMEOUT_SECS
        {
            return Err(ConfigError::Invalid {
                field: "tools.command_timeout_secs",
                reason: format!("must be between 1 and {}", tools::MAX_COMMAND_TIMEOUT_SECS),
            });
        }
        Ok(())
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    pub const TEMP_DIR: &str = "SECPOL_TEMP_DIR";
    pub const SECEDIT_PATH: &str = "SECPOL_SECEDIT_PATH";
    pub const REG_PATH: &str = "SECPOL_REG_PATH";
    pub const POWERSHELL_PATH: &str = "SECPOL_POWERSHELL_PATH";
    pub const COMMAND_TIMEOUT_SECS: &str = "SECPOL_COMMAND_TIMEOUT_SECS";
    pub const SEARCH_PATH: &str = "SECPOL_SEARCH_PATH";

    pub const LOGGING_USE_STRUCTURED: &str = "SECPOL_LOGGING_USE_STRUCTURED";
    pub const LOGGING_USE_FACADE: &str = "SECPOL_LOGGING_USE_FACADE";
    pub const LOGGING_MIN_LEVEL: &str = "SECPOL_LOGGING_MIN_LEVEL";
}
