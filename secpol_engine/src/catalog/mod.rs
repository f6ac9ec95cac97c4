//! Policy catalog
//!
//! Immutable table of every managed local security policy, indexed by the
//! human-facing display name (desired state) and by the machine name used in
//! exported policy files (observed state).

mod entries;

use crate::error::PolicyError;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// Raw code -> human label pairs for multi-select policies
pub type OptionTable = &'static [(&'static str, &'static str)];

// ============================================================================
// CLASSIFICATION TYPES
// ============================================================================

/// Section of the exported policy file a setting lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Section {
    #[serde(rename = "System Access")]
    SystemAccess,
    #[serde(rename = "Event Audit")]
    EventAudit,
    #[serde(rename = "Privilege Rights")]
    PrivilegeRights,
    #[serde(rename = "Registry Values")]
    RegistryValues,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::SystemAccess,
        Section::EventAudit,
        Section::PrivilegeRights,
        Section::RegistryValues,
    ];

    /// Section header as written in the policy file
    pub fn header(&self) -> &'static str {
        match self {
            Section::SystemAccess => "System Access",
            Section::EventAudit => "Event Audit",
            Section::PrivilegeRights => "Privilege Rights",
            Section::RegistryValues => "Registry Values",
        }
    }

    /// Resolve a section header. Header sections (`Unicode`, `Version`) and
    /// sections this engine does not manage return `None`.
    pub fn from_header(header: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.header() == header.trim())
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

/// Shape of a policy value independent of its section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataKind {
    Boolean,
    Integer,
    String,
    MultiSelect(OptionTable),
}

impl DataKind {
    pub fn name(&self) -> &'static str {
        match self {
            DataKind::Boolean => "boolean",
            DataKind::Integer => "integer",
            DataKind::String => "string",
            DataKind::MultiSelect(_) => "multi_select",
        }
    }
}

impl Serialize for DataKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Registry value type tag carried in front of every `Registry Values` entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryType {
    Sz,
    ExpandSz,
    Binary,
    Dword,
    MultiSz,
}

impl RegistryType {
    pub fn tag(&self) -> &'static str {
        match self {
            RegistryType::Sz => "1",
            RegistryType::ExpandSz => "2",
            RegistryType::Binary => "3",
            RegistryType::Dword => "4",
            RegistryType::MultiSz => "7",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag.trim() {
            "1" => Some(RegistryType::Sz),
            "2" => Some(RegistryType::ExpandSz),
            "3" => Some(RegistryType::Binary),
            "4" => Some(RegistryType::Dword),
            "7" => Some(RegistryType::MultiSz),
            _ => None,
        }
    }
}

impl Serialize for RegistryType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// Section and value shape of a policy.
///
/// Audit and privilege policies carry no data kind: their values are always
/// audit labels or identifier lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyClass {
    SystemAccess(DataKind),
    EventAudit,
    PrivilegeRights,
    RegistryValues {
        registry_type: RegistryType,
        kind: DataKind,
    },
}

// ============================================================================
// POLICY DEFINITION
// ============================================================================

/// One catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyDefinition {
    pub display_name: &'static str,
    pub machine_name: &'static str,
    pub class: PolicyClass,
    pub default_value: Option<&'static str>,
}

impl PolicyDefinition {
    pub const fn system_access(
        display_name: &'static str,
        machine_name: &'static str,
        kind: DataKind,
        default_value: Option<&'static str>,
    ) -> Self {
        Self {
            display_name,
            machine_name,
            class: PolicyClass::SystemAccess(kind),
            default_value,
        }
    }

    pub const fn event_audit(display_name: &'static str, machine_name: &'static str) -> Self {
        Self {
            display_name,
            machine_name,
            class: PolicyClass::EventAudit,
            default_value: Some(crate::codec::NO_AUDITING),
        }
    }

    pub const fn privilege_right(
        display_name: &'static str,
        machine_name: &'static str,
        default_value: &'static str,
    ) -> Self {
        Self {
            display_name,
            machine_name,
            class: PolicyClass::PrivilegeRights,
            default_value: Some(default_value),
        }
    }

    pub const fn registry_value(
        display_name: &'static str,
        machine_name: &'static str,
        registry_type: RegistryType,
        kind: DataKind,
        default_value: Option<&'static str>,
    ) -> Self {
        Self {
            display_name,
            machine_name,
            class: PolicyClass::RegistryValues {
                registry_type,
                kind,
            },
            default_value,
        }
    }

    pub fn section(&self) -> Section {
        match self.class {
            PolicyClass::SystemAccess(_) => Section::SystemAccess,
            PolicyClass::EventAudit => Section::EventAudit,
            PolicyClass::PrivilegeRights => Section::PrivilegeRights,
            PolicyClass::RegistryValues { .. } => Section::RegistryValues,
        }
    }

    pub fn data_kind(&self) -> Option<DataKind> {
        match self.class {
            PolicyClass::SystemAccess(kind) | PolicyClass::RegistryValues { kind, .. } => {
                Some(kind)
            }
            PolicyClass::EventAudit | PolicyClass::PrivilegeRights => None,
        }
    }

    pub fn registry_type(&self) -> Option<RegistryType> {
        match self.class {
            PolicyClass::RegistryValues { registry_type, .. } => Some(registry_type),
            _ => None,
        }
    }

    pub fn options(&self) -> Option<OptionTable> {
        match self.data_kind() {
            Some(DataKind::MultiSelect(table)) => Some(table),
            _ => None,
        }
    }

    /// Split a registry machine name into the `reg.exe` key path and value name
    ///
    /// `MACHINE\System\...\Lsa\NoLMHash` becomes
    /// (`HKEY_LOCAL_MACHINE\System\...\Lsa`, `NoLMHash`).
    pub fn registry_location(&self) -> Option<(String, &'static str)> {
        self.registry_type()?;
        let (parent, value) = self.machine_name.rsplit_once('\\')?;
        Some((format!("HKEY_LOCAL_{}", parent), value))
    }
}

// ============================================================================
// CATALOG
// ============================================================================

/// Dual-indexed policy table
#[derive(Debug)]
pub struct PolicyCatalog {
    entries: &'static [PolicyDefinition],
    by_display_name: HashMap<&'static str, usize>,
    by_machine_name: HashMap<&'static str, usize>,
}

static CATALOG: OnceLock<PolicyCatalog> = OnceLock::new();

/// Process-wide catalog, built on first use
pub fn catalog() -> &'static PolicyCatalog {
    CATALOG.get_or_init(|| PolicyCatalog::from_entries(entries::ENTRIES))
}

impl PolicyCatalog {
    pub fn from_entries(entries: &'static [PolicyDefinition]) -> Self {
        let mut by_display_name = HashMap::with_capacity(entries.len());
        let mut by_machine_name = HashMap::with_capacity(entries.len());

        for (index, definition) in entries.iter().enumerate() {
            by_display_name.insert(definition.display_name, index);
            by_machine_name.insert(definition.machine_name, index);
        }

        Self {
            entries,
            by_display_name,
            by_machine_name,
        }
    }

    /// Case-sensitive lookup by display name
    pub fn lookup_by_display_name(
        &self,
        name: &str,
    ) -> Result<&'static PolicyDefinition, PolicyError> {
        self.by_display_name
            .get(name)
            .map(|&index| &self.entries[index])
            .ok_or_else(|| PolicyError::UnknownPolicy {
                name: name.to_string(),
            })
    }

    /// Lookup by the identifier used in exported policy files.
    ///
    /// A miss is normal: exports carry many settings the catalog does not
    /// manage.
    pub fn lookup_by_machine_name(&self, name: &str) -> Option<&'static PolicyDefinition> {
        self.by_machine_name
            .get(name)
            .map(|&index| &self.entries[index])
    }

    pub fn is_known_policy(&self, name: &str) -> bool {
        self.by_display_name.contains_key(name)
    }

    /// All definitions in table order
    pub fn definitions(&self) -> impl Iterator<Item = &'static PolicyDefinition> {
        self.entries.iter()
    }

    pub fn in_section(&self, section: Section) -> impl Iterator<Item = &'static PolicyDefinition> {
        self.entries.iter().filter(move |d| d.section() == section)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
