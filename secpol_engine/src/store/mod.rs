//! # Policy Store
//!
//! Run-scoped snapshot of the exported system policy. The export tool runs
//! at most once per run; every later lookup reads the cached records.

pub mod decode;

pub use decode::{decode_export, parse_records};

use crate::catalog::{catalog, PolicyDefinition};
use crate::codec;
use crate::config::constants::compile_time::files;
use crate::error::PolicyError;
use crate::identity::IdentityResolver;
use crate::logging::codes;
use crate::strategies::PolicyExporter;
use crate::types::ObservedRecord;
use crate::{log_error, log_success, log_warning};
use std::cell::OnceCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub struct PolicyStore<'a> {
    exporter: &'a dyn PolicyExporter,
    export_path: PathBuf,
    records: OnceCell<Vec<ObservedRecord>>,
}

impl<'a> PolicyStore<'a> {
    /// `temp_dir` receives the export file for the duration of a snapshot
    pub fn new(exporter: &'a dyn PolicyExporter, temp_dir: &Path) -> Self {
        Self {
            exporter,
            export_path: temp_dir.join(files::EXPORT_FILE_NAME),
            records: OnceCell::new(),
        }
    }

    pub fn export_path(&self) -> &Path {
        &self.export_path
    }

    /// Records from the system export, exported on first call
    pub fn snapshot(&self) -> Result<&[ObservedRecord], PolicyError> {
        if let Some(records) = self.records.get() {
            return Ok(records);
        }
        let records = self.export_records()?;
        Ok(self.records.get_or_init(|| records))
    }

    /// Drop the cached snapshot so the next call exports again
    pub fn reset(&mut self) {
        self.records.take();
    }

    pub fn is_loaded(&self) -> bool {
        self.records.get().is_some()
    }

    /// Raw record for a definition, if the export contains one
    pub fn record_for(
        &self,
        definition: &PolicyDefinition,
    ) -> Result<Option<&ObservedRecord>, PolicyError> {
        Ok(self.snapshot()?.iter().find(|record| {
            record.section == definition.section() && record.machine_name == definition.machine_name
        }))
    }

    /// Decoded current value of a policy.
    ///
    /// `None` means the export has no record for it. A record without a
    /// value decodes as an empty raw value.
    pub fn current_value_of(
        &self,
        display_name: &str,
        resolver: &dyn IdentityResolver,
    ) -> Result<Option<String>, PolicyError> {
        let definition = catalog().lookup_by_display_name(display_name)?;
        match self.record_for(definition)? {
            None => Ok(None),
            Some(record) => {
                let raw = record.raw_value.as_deref().unwrap_or_default();
                codec::decode(definition, raw, resolver).map(Some)
            }
        }
    }

    fn export_records(&self) -> Result<Vec<ObservedRecord>, PolicyError> {
        if let Err(e) = self.exporter.export(&self.export_path) {
            log_error!(codes::store::EXPORT_FAILED, "Policy export failed",
                "path" => self.export_path.display(),
                "error" => &e
            );
            self.remove_export_file();
            return Err(e);
        }

        let result = read_export(&self.export_path);
        self.remove_export_file();
        let records = result.inspect_err(|e| {
            log_error!(codes::store::EXPORT_UNREADABLE, "Exported policy file unreadable",
                "path" => self.export_path.display(),
                "error" => e
            );
        })?;

        log_success!(codes::success::EXPORT_COMPLETE, "Policy export read",
            "records" => records.len()
        );
        Ok(records)
    }

    fn remove_export_file(&self) {
        remove_transient(&self.export_path);
    }
}

fn read_export(path: &Path) -> Result<Vec<ObservedRecord>, PolicyError> {
    let size = fs::metadata(path)?.len();
    if size > files::MAX_EXPORT_SIZE {
        return Err(PolicyError::ExportDecode {
            reason: format!(
                "export is {} bytes, limit is {}",
                size,
                files::MAX_EXPORT_SIZE
            ),
        });
    }
    let bytes = fs::read(path)?;
    parse_records(&decode_export(&bytes)?)
}

/// Remove a transient file. A missing file is not a failure.
pub(crate) fn remove_transient(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            log_warning!(code = codes::apply::CLEANUP_FAILED, "Unable to remove transient file",
                "path" => path.display(),
                "error" => e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::WellKnownIdentities;
    use assert_matches::assert_matches;
    use std::cell::Cell;

    const EXPORT: &str = "[Unicode]\nUnicode=yes\n[System Access]\nNewAdministratorName = \"Administrator\"\nMinimumPasswordLength = 7\n[Event Audit]\nAuditLogonEvents = 3\n[Privilege Rights]\nSeBackupPrivilege = *S-1-5-32-551,*S-1-5-32-544\nSeTrustedCredManAccessPrivilege =\n[Version]\nsignature=\"$CHICAGO$\"\nRevision=1\n";

    struct FakeExporter {
        content: &'static str,
        calls: Cell<usize>,
    }

    impl FakeExporter {
        fn new(content: &'static str) -> Self {
            Self {
                content,
                calls: Cell::new(0),
            }
        }
    }

    impl PolicyExporter for FakeExporter {
        fn export(&self, destination: &Path) -> Result<(), PolicyError> {
            self.calls.set(self.calls.get() + 1);
            fs::write(destination, self.content)?;
            Ok(())
        }
    }

    struct FailingExporter;

    impl PolicyExporter for FailingExporter {
        fn export(&self, _destination: &Path) -> Result<(), PolicyError> {
            Err(PolicyError::ToolFailed {
                tool: "secedit.exe".into(),
                exit_code: 1,
                stderr: "Access is denied.".into(),
            })
        }
    }

    #[test]
    fn test_snapshot_exports_once() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FakeExporter::new(EXPORT);
        let store = PolicyStore::new(&exporter, dir.path());

        assert_eq!(store.snapshot().unwrap().len(), 5);
        assert_eq!(store.snapshot().unwrap().len(), 5);
        assert_eq!(exporter.calls.get(), 1);
        assert!(!store.export_path().exists());
    }

    #[test]
    fn test_reset_forces_new_export() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FakeExporter::new(EXPORT);
        let mut store = PolicyStore::new(&exporter, dir.path());

        store.snapshot().unwrap();
        store.reset();
        assert!(!store.is_loaded());
        store.snapshot().unwrap();
        assert_eq!(exporter.calls.get(), 2);
    }

    #[test]
    fn test_current_value_of() {
        let dir = tempfile::tempdir().unwrap();
        let exporter = FakeExporter::new(EXPORT);
        let store = PolicyStore::new(&exporter, dir.path());
        let resolver = WellKnownIdentities;

        assert_eq!(
            store.current_value_of("Audit logon events", &resolver).unwrap(),
            Some("Success,Failure".to_string())
        );
        assert_eq!(
            store.current_value_of("Back up files and directories", &resolver).unwrap(),
            Some("*S-1-5-32-544,*S-1-5-32-551".to_string())
        );
        assert_eq!(
            store
                .current_value_of("Access Credential Manager as a trusted caller", &resolver)
                .unwrap(),
            Some(String::new())
        );
        assert_eq!(store.current_value_of("Audit policy change", &resolver).unwrap(), None);
        assert_matches!(
            store.current_value_of("No such policy", &resolver),
            Err(PolicyError::UnknownPolicy { .. })
        );
    }

    #[test]
    fn test_export_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let store = PolicyStore::new(&FailingExporter, dir.path());

        assert_matches!(store.snapshot(), Err(PolicyError::ToolFailed { .. }));
        assert!(!store.is_loaded());
    }
}
