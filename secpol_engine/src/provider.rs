//! # Reconciler Provider
//!
//! Enumerates the current policy instances and turns one desired change into
//! a plan: nothing, a single-entry import, or a registry value deletion.
//!
//! ## Ensure determination
//!
//! - no value in the export: `absent`
//! - Event Audit: `absent` when the decoded value equals the default
//! - everything else: `present`
//!
//! ## Destroy (`ensure = absent`)
//!
//! | Section          | Effect                                             |
//! |------------------|----------------------------------------------------|
//! | Registry Values  | value deleted, or the default written when it is `enabled` |
//! | Event Audit      | default written, no-op when already absent         |
//! | Privilege Rights | empty assignment written                           |
//! | System Access    | default written, error without a default          |

use crate::catalog::{catalog, PolicyClass, PolicyDefinition, Section};
use crate::codec::{self, ENABLED, NO_AUDITING};
use crate::config::constants::compile_time::{files, inf};
use crate::error::PolicyError;
use crate::identity::IdentityResolver;
use crate::logging::codes;
use crate::store::{remove_transient, PolicyStore};
use crate::strategies::{PolicyImporter, RegistryEditor};
use crate::types::{DesiredChange, Ensure, ObservedRecord, PolicyInstance};
use crate::{log_debug, log_success, log_warning};
use ini::{EscapePolicy, Ini, LineSeparator, WriteOption};
use serde::Serialize;
use std::path::{Path, PathBuf};

// ============================================================================
// PLAN TYPES
// ============================================================================

/// What has to happen on the system for one change
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlannedAction {
    /// Already in the desired state
    Noop,
    /// Import one section/key/value record
    Import {
        section: Section,
        machine_name: &'static str,
        value: String,
    },
    /// Remove a registry-backed option outright
    DeleteRegistryValue {
        key: String,
        value_name: &'static str,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePlan {
    pub name: String,
    #[serde(skip)]
    pub definition: &'static PolicyDefinition,
    pub ensure: Ensure,
    pub current_value: Option<String>,
    pub desired_value: Option<String>,
    pub action: PlannedAction,
}

impl ChangePlan {
    pub fn in_sync(&self) -> bool {
        self.action == PlannedAction::Noop
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyOutcome {
    Unchanged,
    Imported,
    RegistryValueDeleted,
}

// ============================================================================
// PROVIDER
// ============================================================================

pub struct ReconcilerProvider<'a> {
    store: PolicyStore<'a>,
    importer: &'a dyn PolicyImporter,
    registry: &'a dyn RegistryEditor,
    resolver: &'a dyn IdentityResolver,
    temp_dir: PathBuf,
}

impl<'a> ReconcilerProvider<'a> {
    pub fn new(
        store: PolicyStore<'a>,
        importer: &'a dyn PolicyImporter,
        registry: &'a dyn RegistryEditor,
        resolver: &'a dyn IdentityResolver,
        temp_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            store,
            importer,
            registry,
            resolver,
            temp_dir: temp_dir.into(),
        }
    }

    pub fn store(&self) -> &PolicyStore<'a> {
        &self.store
    }

    /// Start over with a fresh export on next access
    pub fn reset(&mut self) {
        self.store.reset();
    }

    /// One instance per exported record that the catalog manages.
    ///
    /// Records whose value cannot be decoded are skipped with a warning.
    pub fn enumerate(&self) -> Result<Vec<PolicyInstance>, PolicyError> {
        let mut instances = Vec::new();

        for record in self.store.snapshot()? {
            let Some(definition) = catalog().lookup_by_machine_name(&record.machine_name) else {
                log_debug!(code = codes::catalog::UNMANAGED_SETTING, "Skipping unmanaged setting",
                    "section" => record.section,
                    "machine_name" => &record.machine_name
                );
                continue;
            };
            if definition.section() != record.section {
                continue;
            }

            match self.instance_for(definition, record) {
                Ok(instance) => instances.push(instance),
                Err(e) if e.is_recoverable() => {
                    log_warning!(code = codes::codec::RECORD_SKIPPED, "Skipping undecodable record",
                        "policy" => definition.display_name,
                        "error" => e
                    );
                }
                Err(e) => return Err(e),
            }
        }

        log_success!(codes::success::ENUMERATION_COMPLETE, "Policy instances enumerated",
            "instances" => instances.len()
        );
        Ok(instances)
    }

    /// Every catalog entry, with entries missing from the export reported
    /// as absent and without a current value
    pub fn enumerate_all(&self) -> Result<Vec<PolicyInstance>, PolicyError> {
        let found = self.enumerate()?;
        let mut all = Vec::with_capacity(catalog().len());
        for definition in catalog().definitions() {
            match found.iter().find(|i| i.name == definition.display_name) {
                Some(instance) => all.push(instance.clone()),
                None => all.push(PolicyInstance::from_definition(definition, None, Ensure::Absent)),
            }
        }
        Ok(all)
    }

    fn instance_for(
        &self,
        definition: &PolicyDefinition,
        record: &ObservedRecord,
    ) -> Result<PolicyInstance, PolicyError> {
        let current = self.decode_current(definition, record.raw_value.as_deref())?;
        let ensure = ensure_for(definition, current.as_deref());
        Ok(PolicyInstance::from_definition(definition, current, ensure))
    }

    /// Decode an exported value. An empty audit value reads as "No auditing".
    fn decode_current(
        &self,
        definition: &PolicyDefinition,
        raw: Option<&str>,
    ) -> Result<Option<String>, PolicyError> {
        match (raw, definition.class) {
            (Some(raw), _) => codec::decode(definition, raw, self.resolver).map(Some),
            (None, PolicyClass::EventAudit) => Ok(Some(NO_AUDITING.to_string())),
            (None, _) => Ok(None),
        }
    }

    /// Current decoded value and ensure state used as the base of a plan
    fn current_state(
        &self,
        definition: &PolicyDefinition,
    ) -> Result<(Option<String>, Ensure), PolicyError> {
        let record = self.store.record_for(definition)?;
        let current =
            self.decode_current(definition, record.and_then(|r| r.raw_value.as_deref()))?;
        let ensure = ensure_for(definition, current.as_deref());

        // Missing rights records behave like an empty list
        let base = match (current, definition.class) {
            (None, PolicyClass::PrivilegeRights) => Some(String::new()),
            (current, _) => current,
        };
        Ok((base, ensure))
    }

    /// Validate a change and work out what applying it would do.
    ///
    /// Nothing is written. All validation errors surface here.
    pub fn plan(&self, change: &DesiredChange) -> Result<ChangePlan, PolicyError> {
        let definition = catalog().lookup_by_display_name(&change.name)?;

        if change.ensure == Ensure::Present {
            let value = change.value.as_deref().ok_or_else(|| {
                PolicyError::invalid_value(
                    definition.display_name,
                    "",
                    "a policy value is required when ensure is present",
                )
            })?;
            codec::validate_desired_value(definition, value)?;
        }

        let (current_value, current_ensure) = self.current_state(definition)?;
        let plan = |desired_value: Option<String>, action| ChangePlan {
            name: definition.display_name.to_string(),
            definition,
            ensure: change.ensure,
            current_value: current_value.clone(),
            desired_value,
            action,
        };

        let desired = match change.ensure {
            Ensure::Present => change.value.clone().unwrap_or_default(),
            Ensure::Absent => match definition.class {
                PolicyClass::RegistryValues { .. } if definition.default_value != Some(ENABLED) => {
                    if current_ensure == Ensure::Absent {
                        return Ok(plan(None, PlannedAction::Noop));
                    }
                    let (key, value_name) = definition.registry_location().ok_or_else(|| {
                        PolicyError::invalid_value(
                            definition.display_name,
                            definition.machine_name,
                            "registry path has no value name",
                        )
                    })?;
                    return Ok(plan(None, PlannedAction::DeleteRegistryValue { key, value_name }));
                }
                PolicyClass::EventAudit if current_ensure == Ensure::Absent => {
                    return Ok(plan(None, PlannedAction::Noop));
                }
                PolicyClass::PrivilegeRights => String::new(),
                _ => definition.default_value.map(str::to_string).ok_or_else(|| {
                    PolicyError::invalid_value(
                        definition.display_name,
                        "",
                        "policy has no default value to restore",
                    )
                })?,
            },
        };

        let encoded = codec::encode(
            definition,
            &desired,
            current_value.as_deref(),
            change.ensure,
            self.resolver,
        )?;
        let desired_value = codec::decode(definition, &encoded, self.resolver)?;

        if current_value.as_deref() == Some(desired_value.as_str()) {
            return Ok(plan(Some(desired_value), PlannedAction::Noop));
        }

        Ok(plan(
            Some(desired_value),
            PlannedAction::Import {
                section: definition.section(),
                machine_name: definition.machine_name,
                value: encoded,
            },
        ))
    }

    /// Carry out a plan against the system
    pub fn apply(&self, plan: &ChangePlan) -> Result<ApplyOutcome, PolicyError> {
        match &plan.action {
            PlannedAction::Noop => {
                log_success!(codes::success::POLICY_IN_SYNC, "Policy already in desired state",
                    "policy" => &plan.name
                );
                Ok(ApplyOutcome::Unchanged)
            }
            PlannedAction::DeleteRegistryValue { key, value_name } => {
                let _cleanup = TransientFiles::new(vec![self.store.export_path().to_path_buf()]);
                self.registry.delete_value(key, value_name)?;
                log_success!(codes::success::REGISTRY_VALUE_DELETED, "Registry value deleted",
                    "policy" => &plan.name,
                    "key" => key,
                    "value" => value_name
                );
                Ok(ApplyOutcome::RegistryValueDeleted)
            }
            PlannedAction::Import {
                section,
                machine_name,
                value,
            } => {
                let paths = ImportPaths::new(&self.temp_dir, &timestamp());
                let _cleanup = TransientFiles::new(vec![
                    paths.source.clone(),
                    paths.database.clone(),
                    paths.log.clone(),
                    self.store.export_path().to_path_buf(),
                ]);

                write_import_file(&paths.source, *section, machine_name, value)?;
                self.importer
                    .import(&paths.database, &paths.source, &paths.log)?;

                log_success!(codes::success::POLICY_IMPORTED, "Policy section imported",
                    "policy" => &plan.name,
                    "section" => section,
                    "machine_name" => machine_name
                );
                Ok(ApplyOutcome::Imported)
            }
        }
    }
}

/// Ensure state of an observed policy value
pub fn ensure_for(definition: &PolicyDefinition, current: Option<&str>) -> Ensure {
    match (current, definition.class) {
        (None, _) => Ensure::Absent,
        (Some(value), PolicyClass::EventAudit) if Some(value) == definition.default_value => {
            Ensure::Absent
        }
        _ => Ensure::Present,
    }
}

// ============================================================================
// IMPORT FILES
// ============================================================================

fn timestamp() -> String {
    chrono::Local::now()
        .format(files::TIMESTAMP_FORMAT)
        .to_string()
}

/// Transient paths for one import
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPaths {
    pub source: PathBuf,
    pub database: PathBuf,
    pub log: PathBuf,
}

impl ImportPaths {
    pub fn new(temp_dir: &Path, stamp: &str) -> Self {
        Self {
            source: temp_dir.join(format!("{}-{}.inf", files::IMPORT_FILE_PREFIX, stamp)),
            database: temp_dir.join(format!("{}-{}.sdb", files::DATABASE_FILE_PREFIX, stamp)),
            log: temp_dir.join(format!("{}-{}.log", files::LOG_FILE_PREFIX, stamp)),
        }
    }
}

/// Header sections plus the single policy entry
pub fn build_import_file(section: Section, machine_name: &str, value: &str) -> Ini {
    let mut file = Ini::new();
    file.with_section(Some(inf::UNICODE_SECTION))
        .set("Unicode", "yes");
    file.with_section(Some(inf::VERSION_SECTION))
        .set("signature", format!("\"{}\"", inf::SIGNATURE))
        .set("Revision", inf::REVISION);
    file.with_section(Some(section.header()))
        .set(machine_name, value);
    file
}

fn write_import_file(
    path: &Path,
    section: Section,
    machine_name: &str,
    value: &str,
) -> Result<(), PolicyError> {
    let options = WriteOption {
        escape_policy: EscapePolicy::Nothing,
        line_separator: LineSeparator::CRLF,
        ..WriteOption::default()
    };
    build_import_file(section, machine_name, value).write_to_file_opt(path, options)?;
    Ok(())
}

/// Removes the listed files when dropped, whatever the outcome
struct TransientFiles {
    paths: Vec<PathBuf>,
}

impl TransientFiles {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl Drop for TransientFiles {
    fn drop(&mut self) {
        for path in &self.paths {
            remove_transient(path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::WellKnownIdentities;
    use crate::strategies::PolicyExporter;
    use assert_matches::assert_matches;
    use std::cell::RefCell;
    use std::fs;

    const EXPORT: &str = "[Unicode]\nUnicode=yes\n\
[System Access]\nNewAdministratorName = \"Administrator\"\nEnableGuestAccount = 0\n\
[Event Audit]\nAuditLogonEvents = 0\nAuditPolicyChange = 3\nAuditSystemEvents = 7\n\
[Privilege Rights]\nSeBackupPrivilege = *S-1-5-32-544,*S-1-5-32-551\nSeTrustedCredManAccessPrivilege =\n\
[Registry Values]\n\
MACHINE\\System\\CurrentControlSet\\Control\\Lsa\\EveryoneIncludesAnonymous=4,0\n\
MACHINE\\System\\CurrentControlSet\\Control\\Lsa\\LmCompatibilityLevel=4,9\n\
MACHINE\\System\\CurrentControlSet\\Control\\Lsa\\NoLMHash=4,1\n\
MACHINE\\Software\\Microsoft\\Windows\\CurrentVersion\\Policies\\System\\EnableLUA=4,1\n\
MACHINE\\Software\\Vendor\\Unmanaged=4,1\n\
[Version]\nsignature=\"$CHICAGO$\"\nRevision=1\n";

    #[derive(Default)]
    struct FakeSystem {
        export: &'static str,
        imports: RefCell<Vec<String>>,
        deletions: RefCell<Vec<(String, String)>>,
        fail_import: bool,
    }

    impl PolicyExporter for FakeSystem {
        fn export(&self, destination: &Path) -> Result<(), PolicyError> {
            fs::write(destination, self.export)?;
            Ok(())
        }
    }

    impl PolicyImporter for FakeSystem {
        fn import(&self, database: &Path, source: &Path, log: &Path) -> Result<(), PolicyError> {
            assert!(database.to_string_lossy().ends_with(".sdb"));
            assert!(log.to_string_lossy().ends_with(".log"));
            self.imports.borrow_mut().push(fs::read_to_string(source)?);
            if self.fail_import {
                return Err(PolicyError::ToolFailed {
                    tool: "secedit.exe".into(),
                    exit_code: 3,
                    stderr: String::new(),
                });
            }
            Ok(())
        }
    }

    impl RegistryEditor for FakeSystem {
        fn delete_value(&self, key: &str, value_name: &str) -> Result<(), PolicyError> {
            self.deletions
                .borrow_mut()
                .push((key.to_string(), value_name.to_string()));
            Ok(())
        }
    }

    fn provider<'a>(system: &'a FakeSystem, dir: &Path) -> ReconcilerProvider<'a> {
        ReconcilerProvider::new(
            PolicyStore::new(system, dir),
            system,
            system,
            &WellKnownIdentities,
            dir,
        )
    }

    fn system() -> FakeSystem {
        FakeSystem {
            export: EXPORT,
            ..FakeSystem::default()
        }
    }

    #[test]
    fn test_enumerate_ensure_determination() {
        let dir = tempfile::tempdir().unwrap();
        let system = system();
        let provider = provider(&system, dir.path());

        let instances = provider.enumerate().unwrap();
        let find = |name: &str| instances.iter().find(|i| i.name == name).unwrap();

        assert_eq!(find("Audit logon events").ensure, Ensure::Absent);
        assert_eq!(find("Audit policy change").ensure, Ensure::Present);
        assert_eq!(find("Audit policy change").current_value.as_deref(), Some("Success,Failure"));
        assert_eq!(find("Audit system events").current_value.as_deref(), Some("No auditing"));
        assert_eq!(find("Audit system events").ensure, Ensure::Absent);

        let trusted = find("Access Credential Manager as a trusted caller");
        assert_eq!(trusted.ensure, Ensure::Absent);
        assert_eq!(trusted.current_value, None);

        assert_eq!(find("Accounts: Guest account status").current_value.as_deref(), Some("disabled"));
        assert_eq!(find("Accounts: Guest account status").ensure, Ensure::Present);
    }

    #[test]
    fn test_enumerate_skips_unmapped_and_undecodable_records() {
        let dir = tempfile::tempdir().unwrap();
        let system = system();
        let provider = provider(&system, dir.path());

        let instances = provider.enumerate().unwrap();
        assert!(instances.iter().all(|i| !i.machine_name.ends_with("Unmanaged")));
        // LmCompatibilityLevel = 9 has no option label
        assert!(instances
            .iter()
            .all(|i| i.name != "Network security: LAN Manager authentication level"));
        assert_eq!(instances.len(), 10);
    }

    #[test]
    fn test_enumerate_empty_audit_value_reads_no_auditing() {
        let dir = tempfile::tempdir().unwrap();
        let system = FakeSystem {
            export: "[Event Audit]\nAuditLogonEvents =\nAuditPolicyChange = 1\n",
            ..FakeSystem::default()
        };
        let provider = provider(&system, dir.path());

        let instances = provider.enumerate().unwrap();
        let logon = instances.iter().find(|i| i.name == "Audit logon events").unwrap();
        assert_eq!(logon.current_value.as_deref(), Some("No auditing"));
        assert_eq!(logon.ensure, Ensure::Absent);
        assert_eq!(instances.len(), 2);
    }

    #[test]
    fn test_enumerate_all_covers_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let system = system();
        let provider = provider(&system, dir.path());

        let all = provider.enumerate_all().unwrap();
        assert_eq!(all.len(), catalog().len());
        let missing = all.iter().find(|i| i.name == "Minimum password length").unwrap();
        assert_eq!(missing.ensure, Ensure::Absent);
        assert_eq!(missing.current_value, None);
    }

    #[test]
    fn test_plan_rejects_before_any_write() {
        let dir = tempfile::tempdir().unwrap();
        let system = system();
        let provider = provider(&system, dir.path());

        assert_matches!(
            provider.plan(&DesiredChange::present("Not a policy", "x")),
            Err(PolicyError::UnknownPolicy { .. })
        );
        assert_matches!(
            provider.plan(&DesiredChange::present("Back up files and directories", "-Users")),
            Err(PolicyError::InvalidPolicyValue { .. })
        );
        assert_matches!(
            provider.plan(&DesiredChange {
                name: "Audit logon events".into(),
                value: None,
                ensure: Ensure::Present,
            }),
            Err(PolicyError::InvalidPolicyValue { .. })
        );
        assert!(system.imports.borrow().is_empty());
    }

    #[test]
    fn test_plan_in_sync() {
        let dir = tempfile::tempdir().unwrap();
        let system = system();
        let provider = provider(&system, dir.path());

        let plan = provider
            .plan(&DesiredChange::present("Audit policy change", "Success,Failure"))
            .unwrap();
        assert!(plan.in_sync());

        let plan = provider
            .plan(&DesiredChange::present(
                "Back up files and directories",
                "merge:+Administrators",
            ))
            .unwrap();
        assert!(plan.in_sync());
    }

    #[test]
    fn test_apply_writes_single_import_record() {
        let dir = tempfile::tempdir().unwrap();
        let system = system();
        let provider = provider(&system, dir.path());

        let plan = provider
            .plan(&DesiredChange::present("Audit logon events", "Failure"))
            .unwrap();
        assert_eq!(
            plan.action,
            PlannedAction::Import {
                section: Section::EventAudit,
                machine_name: "AuditLogonEvents",
                value: "2".into(),
            }
        );
        assert_eq!(provider.apply(&plan).unwrap(), ApplyOutcome::Imported);

        let imports = system.imports.borrow();
        assert_eq!(imports.len(), 1);
        assert!(imports[0].contains("[Event Audit]"));
        assert!(imports[0].contains("AuditLogonEvents=2"));
        assert!(imports[0].contains("signature=\"$CHICAGO$\""));
        assert!(imports[0].contains("Unicode=yes"));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_cleanup_after_failed_import() {
        let dir = tempfile::tempdir().unwrap();
        let system = FakeSystem {
            fail_import: true,
            ..system()
        };
        let provider = provider(&system, dir.path());

        let plan = provider
            .plan(&DesiredChange::present("Accounts: Guest account status", "enabled"))
            .unwrap();
        assert_matches!(provider.apply(&plan), Err(PolicyError::ToolFailed { exit_code: 3, .. }));
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_destroy_registry_value_deletes() {
        let dir = tempfile::tempdir().unwrap();
        let system = system();
        let provider = provider(&system, dir.path());

        let plan = provider
            .plan(&DesiredChange::absent("Network security: Do not store LAN Manager hash value on next password change"))
            .unwrap();
        assert_eq!(
            plan.action,
            PlannedAction::DeleteRegistryValue {
                key: "HKEY_LOCAL_MACHINE\\System\\CurrentControlSet\\Control\\Lsa".into(),
                value_name: "NoLMHash",
            }
        );
        assert_eq!(provider.apply(&plan).unwrap(), ApplyOutcome::RegistryValueDeleted);
        assert!(system.imports.borrow().is_empty());
        assert_eq!(system.deletions.borrow().len(), 1);
    }

    #[test]
    fn test_destroy_registry_value_already_absent_is_noop() {
        let dir = tempfile::tempdir().unwrap();
        let system = system();
        let provider = provider(&system, dir.path());

        let plan = provider
            .plan(&DesiredChange::absent("Network security: Allow LocalSystem NULL session fallback"))
            .unwrap();
        assert!(plan.in_sync());
    }

    #[test]
    fn test_destroy_registry_value_with_enabled_default_restores_it() {
        let dir = tempfile::tempdir().unwrap();
        let system = FakeSystem {
            export: "[Registry Values]\nMACHINE\\System\\CurrentControlSet\\Control\\Session Manager\\Kernel\\ObCaseInsensitive=4,0\n",
            ..FakeSystem::default()
        };
        let provider = provider(&system, dir.path());

        let plan = provider
            .plan(&DesiredChange::absent(
                "System objects: Require case insensitivity for non-Windows subsystems",
            ))
            .unwrap();
        assert_matches!(&plan.action, PlannedAction::Import { value, .. } if value == "4,1");
    }

    #[test]
    fn test_destroy_event_audit() {
        let dir = tempfile::tempdir().unwrap();
        let system = system();
        let provider = provider(&system, dir.path());

        let already = provider.plan(&DesiredChange::absent("Audit logon events")).unwrap();
        assert!(already.in_sync());

        let plan = provider.plan(&DesiredChange::absent("Audit policy change")).unwrap();
        assert_matches!(&plan.action, PlannedAction::Import { value, .. } if value == "0");
    }

    #[test]
    fn test_destroy_privilege_right_writes_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let system = system();
        let provider = provider(&system, dir.path());

        let plan = provider
            .plan(&DesiredChange::absent("Back up files and directories"))
            .unwrap();
        assert_matches!(&plan.action, PlannedAction::Import { value, .. } if value.is_empty());
    }

    #[test]
    fn test_destroy_system_access() {
        let dir = tempfile::tempdir().unwrap();
        let system = system();
        let provider = provider(&system, dir.path());

        let plan = provider
            .plan(&DesiredChange::absent("Accounts: Guest account status"))
            .unwrap();
        assert!(plan.in_sync());

        let plan = provider
            .plan(&DesiredChange::absent("Network access: Allow anonymous SID/name translation"))
            .unwrap_err();
        assert_matches!(plan, PolicyError::InvalidPolicyValue { .. });
    }

    #[test]
    fn test_import_paths() {
        let paths = ImportPaths::new(Path::new("C:\\Windows\\Temp"), "20240102030405");
        assert!(paths.source.ends_with("infimport-20240102030405.inf"));
        assert!(paths.database.ends_with("sdbimport-20240102030405.sdb"));
        assert!(paths.log.ends_with("logout-20240102030405.log"));
    }
}
