//! Collaborator seams for the OS policy tools
//!
//! The engine never shells out directly. Everything that touches the system
//! goes through these traits so runs can be driven by fakes in tests.

use crate::error::PolicyError;
use std::path::Path;

/// Writes the current security policy to an INF file
pub trait PolicyExporter {
    fn export(&self, destination: &Path) -> Result<(), PolicyError>;
}

/// Commits an INF file into the local policy database
pub trait PolicyImporter {
    fn import(&self, database: &Path, source: &Path, log: &Path) -> Result<(), PolicyError>;
}

/// Removes registry-backed security options
pub trait RegistryEditor {
    /// `key` is the full `HKEY_LOCAL_MACHINE\...` path
    fn delete_value(&self, key: &str, value_name: &str) -> Result<(), PolicyError>;
}
