//! Shared engine types

use crate::catalog::{DataKind, PolicyDefinition, RegistryType, Section};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a policy is considered actively configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ensure {
    #[default]
    Present,
    Absent,
}

impl fmt::Display for Ensure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ensure::Present => f.write_str("present"),
            Ensure::Absent => f.write_str("absent"),
        }
    }
}

/// One key/value pair read from an exported policy file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedRecord {
    pub section: Section,
    pub machine_name: String,
    /// `None` when the key is present without a value
    pub raw_value: Option<String>,
}

impl ObservedRecord {
    pub fn new(section: Section, machine_name: impl Into<String>, raw_value: Option<String>) -> Self {
        Self {
            section,
            machine_name: machine_name.into(),
            raw_value,
        }
    }
}

/// Current state of one managed policy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PolicyInstance {
    pub name: String,
    pub section: Section,
    pub machine_name: String,
    pub default_value: Option<String>,
    pub current_value: Option<String>,
    pub data_kind: Option<DataKind>,
    pub registry_type: Option<RegistryType>,
    pub ensure: Ensure,
}

impl PolicyInstance {
    pub fn from_definition(
        definition: &PolicyDefinition,
        current_value: Option<String>,
        ensure: Ensure,
    ) -> Self {
        Self {
            name: definition.display_name.to_string(),
            section: definition.section(),
            machine_name: definition.machine_name.to_string(),
            default_value: definition.default_value.map(str::to_string),
            current_value,
            data_kind: definition.data_kind(),
            registry_type: definition.registry_type(),
            ensure,
        }
    }
}

/// A requested change for one policy, keyed by display name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesiredChange {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub ensure: Ensure,
}

impl DesiredChange {
    pub fn present(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            ensure: Ensure::Present,
        }
    }

    pub fn absent(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            ensure: Ensure::Absent,
        }
    }
}
