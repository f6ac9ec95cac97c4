//! Error and success codes with their classification metadata
//!
//! Every event the engine emits carries one of these codes so operators can
//! filter structured output without matching on message text.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Metadata for a code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub description: &'static str,
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
    pub const CONFIGURATION_ERROR: Code = Code::new("ERR003");
    pub const IO_ERROR: Code = Code::new("ERR004");
}

/// Catalog lookups
pub mod catalog {
    use super::Code;

    pub const UNKNOWN_POLICY: Code = Code::new("E010");
    pub const UNMANAGED_SETTING: Code = Code::new("D010");
}

/// Value translation
pub mod codec {
    use super::Code;

    pub const UNMAPPED_OPTION: Code = Code::new("E020");
    pub const INVALID_POLICY_VALUE: Code = Code::new("E021");
    pub const IDENTITY_RESOLUTION: Code = Code::new("E022");
    pub const RECORD_SKIPPED: Code = Code::new("W020");
}

/// Export snapshot
pub mod store {
    use super::Code;

    pub const EXPORT_FAILED: Code = Code::new("E030");
    pub const EXPORT_UNREADABLE: Code = Code::new("E031");
}

/// Import, registry deletion and cleanup
pub mod apply {
    use super::Code;

    pub const TOOL_FAILED: Code = Code::new("E040");
    pub const COMMAND_FAILED: Code = Code::new("E041");
    pub const CHANGE_FAILED: Code = Code::new("E042");
    pub const CLEANUP_FAILED: Code = Code::new("W040");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const EXPORT_COMPLETE: Code = Code::new("I010");
    pub const ENUMERATION_COMPLETE: Code = Code::new("I011");
    pub const POLICY_IMPORTED: Code = Code::new("I020");
    pub const REGISTRY_VALUE_DELETED: Code = Code::new("I021");
    pub const POLICY_IN_SYNC: Code = Code::new("I022");
    pub const RUN_COMPLETE: Code = Code::new("I030");
}

// ============================================================================
// METADATA REGISTRY
// ============================================================================

const METADATA: &[(&str, &str, Severity, bool, &str)] = &[
    ("ERR001", "System", Severity::Critical, false, "Critical internal error"),
    ("ERR002", "System", Severity::Critical, false, "Logging or engine initialization failure"),
    ("ERR003", "System", Severity::High, false, "Invalid engine configuration"),
    ("ERR004", "System", Severity::High, false, "File system operation failed"),
    ("E010", "Catalog", Severity::High, false, "Desired state names a policy that is not managed"),
    ("D010", "Catalog", Severity::Low, true, "Exported setting has no catalog entry"),
    ("E020", "Codec", Severity::Medium, true, "Value has no entry in the policy option table"),
    ("E021", "Codec", Severity::High, false, "Desired value rejected by validation"),
    ("E022", "Codec", Severity::Medium, true, "Account name or SID could not be resolved"),
    ("W020", "Codec", Severity::Low, true, "Exported record skipped during enumeration"),
    ("E030", "Store", Severity::Critical, false, "Policy export tool failed"),
    ("E031", "Store", Severity::Critical, false, "Exported policy file could not be read"),
    ("E040", "Apply", Severity::High, false, "Policy tool exited with a failure status"),
    ("E041", "Apply", Severity::High, false, "Policy tool could not be executed"),
    ("E042", "Apply", Severity::High, false, "Desired change could not be applied"),
    ("W040", "Apply", Severity::Low, true, "Transient file could not be removed"),
    ("I001", "Success", Severity::Low, true, "Logging initialized"),
    ("I010", "Success", Severity::Low, true, "Policy export read"),
    ("I011", "Success", Severity::Low, true, "Policy instances enumerated"),
    ("I020", "Success", Severity::Low, true, "Policy section imported"),
    ("I021", "Success", Severity::Low, true, "Registry value deleted"),
    ("I022", "Success", Severity::Low, true, "Policy already in desired state"),
    ("I030", "Success", Severity::Low, true, "Reconcile run finished"),
];

static REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn registry() -> &'static HashMap<&'static str, CodeMetadata> {
    REGISTRY.get_or_init(|| {
        METADATA
            .iter()
            .map(|&(code, category, severity, recoverable, description)| {
                (
                    code,
                    CodeMetadata {
                        code,
                        category,
                        severity,
                        recoverable,
                        description,
                    },
                )
            })
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

pub fn get_metadata(code: &str) -> Option<&'static CodeMetadata> {
    registry().get(code)
}

pub fn get_severity(code: &str) -> Severity {
    get_metadata(code)
        .map(|m| m.severity)
        .unwrap_or(Severity::Medium)
}

pub fn is_recoverable(code: &str) -> bool {
    get_metadata(code).map(|m| m.recoverable).unwrap_or(true)
}

pub fn get_description(code: &str) -> &'static str {
    get_metadata(code)
        .map(|m| m.description)
        .unwrap_or("Unknown error")
}

pub fn get_category(code: &str) -> &'static str {
    get_metadata(code).map(|m| m.category).unwrap_or("Unknown")
}
