//! Recording stand-in for secedit.exe and reg.exe

#![allow(dead_code)]

use secpol_engine::strategies::{PolicyExporter, PolicyImporter, RegistryEditor};
use secpol_engine::{PolicyError, PolicyStore, ReconcilerProvider, WellKnownIdentities};
use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;

pub const FIXTURE: &str = include_str!("../fixtures/secedit.inf");

/// Encode text the way `secedit /export` writes it: UTF-16LE, BOM, CRLF
pub fn utf16_export(text: &str) -> Vec<u8> {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in text.replace('\n', "\r\n").encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    bytes
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deletion {
    pub key: String,
    pub value_name: String,
}

pub struct FakeSystem {
    export: Vec<u8>,
    pub exports: Cell<usize>,
    pub imports: RefCell<Vec<String>>,
    pub deletions: RefCell<Vec<Deletion>>,
    /// Fail any import whose file contains this text
    pub fail_import_containing: Option<&'static str>,
}

impl FakeSystem {
    pub fn new(export_text: &str) -> Self {
        Self {
            export: utf16_export(export_text),
            exports: Cell::new(0),
            imports: RefCell::new(Vec::new()),
            deletions: RefCell::new(Vec::new()),
            fail_import_containing: None,
        }
    }

    pub fn from_fixture() -> Self {
        Self::new(FIXTURE)
    }

    pub fn failing_on(mut self, needle: &'static str) -> Self {
        self.fail_import_containing = Some(needle);
        self
    }

    pub fn provider<'a>(&'a self, temp_dir: &Path) -> ReconcilerProvider<'a> {
        ReconcilerProvider::new(
            PolicyStore::new(self, temp_dir),
            self,
            self,
            &WellKnownIdentities,
            temp_dir,
        )
    }
}

impl PolicyExporter for FakeSystem {
    fn export(&self, destination: &Path) -> Result<(), PolicyError> {
        self.exports.set(self.exports.get() + 1);
        fs::write(destination, &self.export)?;
        Ok(())
    }
}

impl PolicyImporter for FakeSystem {
    fn import(&self, database: &Path, source: &Path, log: &Path) -> Result<(), PolicyError> {
        let content = fs::read_to_string(source)?;
        fs::write(database, b"sdb")?;
        fs::write(log, b"log")?;

        let fail = self
            .fail_import_containing
            .is_some_and(|needle| content.contains(needle));
        self.imports.borrow_mut().push(content);
        if fail {
            return Err(PolicyError::ToolFailed {
                tool: "secedit.exe".to_string(),
                exit_code: 1,
                stderr: "Task is completed. Errors occurred".to_string(),
            });
        }
        Ok(())
    }
}

impl RegistryEditor for FakeSystem {
    fn delete_value(&self, key: &str, value_name: &str) -> Result<(), PolicyError> {
        self.deletions.borrow_mut().push(Deletion {
            key: key.to_string(),
            value_name: value_name.to_string(),
        });
        Ok(())
    }
}

/// Files left behind in a temp directory
pub fn leftover_files(dir: &Path) -> Vec<String> {
    fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(Result::ok)
                .map(|e| e.file_name().to_string_lossy().into_owned())
                .collect()
        })
        .unwrap_or_default()
}
