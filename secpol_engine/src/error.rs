//! # Engine Errors

use crate::logging::{codes, Code};
use crate::strategies::CommandError;

/// Error type for policy reconciliation
#[derive(Debug, thiserror::Error)]
pub enum PolicyError {
    /// Desired state names a policy the catalog does not manage
    #[error("Unknown policy: '{name}'")]
    UnknownPolicy { name: String },

    /// A raw code or label has no entry in the policy's option table
    #[error("No option mapping for '{value}' in '{policy}'")]
    UnmappedOption { policy: String, value: String },

    #[error("Invalid policy value '{value}' for '{policy}': {reason}")]
    InvalidPolicyValue {
        policy: String,
        value: String,
        reason: String,
    },

    #[error("Unable to resolve identity '{identity}': {reason}")]
    IdentityResolutionFailure { identity: String, reason: String },

    /// External tool ran but reported failure
    #[error("{tool} exited with status {exit_code}: {stderr}")]
    ToolFailed {
        tool: String,
        exit_code: i32,
        stderr: String,
    },

    #[error("Command error: {0}")]
    Command(#[from] CommandError),

    #[error("Unable to decode exported policy file: {reason}")]
    ExportDecode { reason: String },

    #[error("Unable to parse exported policy file: {0}")]
    ExportParse(#[from] ini::ParseError),

    #[error("Configuration error: {reason}")]
    Config { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PolicyError {
    pub fn invalid_value(
        policy: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        PolicyError::InvalidPolicyValue {
            policy: policy.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn unmapped_option(policy: impl Into<String>, value: impl Into<String>) -> Self {
        PolicyError::UnmappedOption {
            policy: policy.into(),
            value: value.into(),
        }
    }

    /// Errors that only affect a single observed record during enumeration
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            PolicyError::UnmappedOption { .. } | PolicyError::IdentityResolutionFailure { .. }
        )
    }

    /// Errors raised before anything was written to the system
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            PolicyError::UnknownPolicy { .. }
                | PolicyError::InvalidPolicyValue { .. }
                | PolicyError::UnmappedOption { .. }
        )
    }

    /// Log code for this error
    pub fn code(&self) -> Code {
        match self {
            PolicyError::UnknownPolicy { .. } => codes::catalog::UNKNOWN_POLICY,
            PolicyError::UnmappedOption { .. } => codes::codec::UNMAPPED_OPTION,
            PolicyError::InvalidPolicyValue { .. } => codes::codec::INVALID_POLICY_VALUE,
            PolicyError::IdentityResolutionFailure { .. } => codes::codec::IDENTITY_RESOLUTION,
            PolicyError::ToolFailed { .. } => codes::apply::TOOL_FAILED,
            PolicyError::Command(_) => codes::apply::COMMAND_FAILED,
            PolicyError::ExportDecode { .. } | PolicyError::ExportParse(_) => {
                codes::store::EXPORT_UNREADABLE
            }
            PolicyError::Config { .. } => codes::system::CONFIGURATION_ERROR,
            PolicyError::Io(_) => codes::system::IO_ERROR,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            PolicyError::UnknownPolicy { name } => {
                format!("'{}' is not a supported local security policy", name)
            }
            PolicyError::ToolFailed { tool, exit_code, .. } => {
                format!("{} failed with exit code {}", tool, exit_code)
            }
            other => other.to_string(),
        }
    }
}
