mod common;

use assert_matches::assert_matches;
use common::{leftover_files, Deletion, FakeSystem, FIXTURE};
use secpol_engine::results::RunStatus;
use secpol_engine::store::parse_records;
use secpol_engine::{
    catalog, ChangeStatus, DesiredState, Ensure, PlannedAction, PolicyError, Reconciler, RunMode,
};

fn desired(toml: &str) -> DesiredState {
    DesiredState::from_toml_str(toml).unwrap()
}

#[test]
fn fixture_records_map_to_catalog() {
    let records = parse_records(FIXTURE).unwrap();
    assert_eq!(records.len(), 118);

    let unmanaged: Vec<_> = records
        .iter()
        .filter(|r| catalog().lookup_by_machine_name(&r.machine_name).is_none())
        .map(|r| r.machine_name.as_str())
        .collect();
    assert_eq!(
        unmanaged,
        [
            r"MACHINE\System\CurrentControlSet\Control\Lsa\SubmitControl",
            r"MACHINE\System\CurrentControlSet\Services\NTDS\Parameters\LDAPServerIntegrity",
        ]
    );

    for record in &records {
        if let Some(definition) = catalog().lookup_by_machine_name(&record.machine_name) {
            assert_eq!(definition.section(), record.section, "{}", record.machine_name);
        }
    }
}

#[test]
fn enumerate_fixture() {
    let dir = tempfile::tempdir().unwrap();
    let system = FakeSystem::from_fixture();
    let provider = system.provider(dir.path());

    let instances = provider.enumerate().unwrap();
    let find = |name: &str| instances.iter().find(|i| i.name == name);

    // Two unmanaged keys, two rights naming an account that cannot be resolved offline
    assert_eq!(instances.len(), 114);
    assert!(find("Deny log on locally").is_none());
    assert!(find("Deny access to this computer from the network").is_none());

    let audit = find("Audit logon events").unwrap();
    assert_eq!(audit.current_value.as_deref(), Some("No auditing"));
    assert_eq!(audit.ensure, Ensure::Absent);

    let cases = [
        ("Accounts: Rename administrator account", "\"Administrator\""),
        ("Accounts: Administrator account status", "disabled"),
        ("Network access: Restrict clients allowed to make remote calls to SAM", "O:BAG:BAD:(A;;RC;;;BA)"),
        ("User Account Control: Behavior of the elevation prompt for standard users", "Prompt for credentials"),
        ("Interactive logon: Smart card removal behavior", "No Action"),
        ("Interactive logon: Number of previous logons to cache (in case domain controller is not available)", "10"),
        ("Network security: LDAP client signing requirements", "Negotiate signing"),
        ("Audit: Audit the use of Backup and Restore privilege", "disabled"),
        ("Interactive logon: Message text for users attempting to log on", ""),
        ("Back up files and directories", "*S-1-5-32-544,*S-1-5-32-551"),
    ];
    for (name, expected) in cases {
        let instance = find(name).unwrap_or_else(|| panic!("missing {}", name));
        assert_eq!(instance.current_value.as_deref(), Some(expected), "{}", name);
        assert_eq!(instance.ensure, Ensure::Present, "{}", name);
    }

    assert_eq!(system.exports.get(), 1);
    assert!(leftover_files(dir.path()).is_empty());
}

#[test]
fn rename_administrator_writes_one_record() {
    let dir = tempfile::tempdir().unwrap();
    let system = FakeSystem::from_fixture();
    let mut reconciler = Reconciler::new(system.provider(dir.path()));

    let report = reconciler
        .run(
            &desired("[\"Accounts: Rename administrator account\"]\npolicy_value = \"CustomAdmin\"\n"),
            RunMode::Apply,
        )
        .unwrap();

    assert_eq!(report.summary.changed, 1);
    assert_eq!(report.summary.status, RunStatus::Converged);
    assert_eq!(report.results[0].status, ChangeStatus::Changed);
    assert_eq!(report.results[0].desired_value.as_deref(), Some("\"CustomAdmin\""));

    let imports = system.imports.borrow();
    assert_eq!(imports.len(), 1);
    let import = &imports[0];
    assert!(import.contains("[Unicode]\r\nUnicode=yes\r\n"));
    assert!(import.contains("[Version]\r\nsignature=\"$CHICAGO$\"\r\nRevision=1\r\n"));
    assert!(import.contains("[System Access]\r\nNewAdministratorName=\"CustomAdmin\"\r\n"));
    assert_eq!(import.lines().filter(|l| l.contains('=')).count(), 4);

    assert!(system.deletions.borrow().is_empty());
    assert!(leftover_files(dir.path()).is_empty());
}

#[test]
fn registry_destroy_deletes_value() {
    let dir = tempfile::tempdir().unwrap();
    let system = FakeSystem::from_fixture();
    let mut reconciler = Reconciler::new(system.provider(dir.path()));

    let report = reconciler
        .run(
            &desired("[\"Network access: Let Everyone permissions apply to anonymous users\"]\nensure = \"absent\"\n"),
            RunMode::Apply,
        )
        .unwrap();

    assert_eq!(report.summary.changed, 1);
    assert_matches!(
        report.results[0].action,
        Some(PlannedAction::DeleteRegistryValue { .. })
    );
    assert_eq!(
        *system.deletions.borrow(),
        vec![Deletion {
            key: r"HKEY_LOCAL_MACHINE\System\CurrentControlSet\Control\Lsa".to_string(),
            value_name: "EveryoneIncludesAnonymous".to_string(),
        }]
    );
    assert!(system.imports.borrow().is_empty());
}

#[test]
fn privilege_merge_adds_and_removes() {
    let dir = tempfile::tempdir().unwrap();
    let system = FakeSystem::from_fixture();
    let mut reconciler = Reconciler::new(system.provider(dir.path()));

    let report = reconciler
        .run(
            &desired(
                "[\"Back up files and directories\"]\npolicy_value = \"merge:+Users,-Backup Operators\"\n\n\
                 [\"Debug programs\"]\npolicy_value = \"merge:+Administrators\"\n",
            ),
            RunMode::Apply,
        )
        .unwrap();

    assert_eq!(report.summary.changed, 1);
    assert_eq!(report.summary.in_sync, 1);

    let imports = system.imports.borrow();
    assert_eq!(imports.len(), 1);
    assert!(imports[0].contains("[Privilege Rights]\r\nSeBackupPrivilege=*S-1-5-32-544,*S-1-5-32-545\r\n"));
}

#[test]
fn check_reports_drift_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let system = FakeSystem::from_fixture();
    let mut reconciler = Reconciler::new(system.provider(dir.path()));

    let report = reconciler
        .run(
            &desired(
                "[\"Minimum password length\"]\npolicy_value = 14\n\n\
                 [\"Audit logon events\"]\npolicy_value = \"No auditing\"\n\n\
                 [\"Network security: LAN Manager authentication level\"]\n\
                 policy_value = \"Send NTLMv2 response only. Refuse LM & NTLM\"\n",
            ),
            RunMode::Check,
        )
        .unwrap();

    assert_eq!(report.summary.total, 3);
    assert_eq!(report.summary.in_sync, 1);
    assert_eq!(report.summary.drift, 2);
    assert_eq!(report.summary.status, RunStatus::Drifted);

    // Results follow display-name order
    let names: Vec<_> = report.results.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(
        names,
        [
            "Audit logon events",
            "Minimum password length",
            "Network security: LAN Manager authentication level",
        ]
    );

    assert_eq!(system.exports.get(), 1);
    assert!(system.imports.borrow().is_empty());
    assert!(leftover_files(dir.path()).is_empty());
}

#[test]
fn unknown_names_abort_before_any_write() {
    let dir = tempfile::tempdir().unwrap();
    let system = FakeSystem::from_fixture();
    let mut reconciler = Reconciler::new(system.provider(dir.path()));

    let result = reconciler.run(
        &desired(
            "[\"Minimum password length\"]\npolicy_value = 14\n\n\
             [\"Minimum pasword length\"]\npolicy_value = 14\n",
        ),
        RunMode::Apply,
    );

    assert_matches!(result, Err(PolicyError::UnknownPolicy { name }) if name == "Minimum pasword length");
    assert_eq!(system.exports.get(), 0);
    assert!(system.imports.borrow().is_empty());
}

#[test]
fn invalid_values_fail_only_their_change() {
    let dir = tempfile::tempdir().unwrap();
    let system = FakeSystem::from_fixture();
    let mut reconciler = Reconciler::new(system.provider(dir.path()));

    let report = reconciler
        .run(
            &desired(
                "[\"Accounts: Guest account status\"]\npolicy_value = \"on\"\n\n\
                 [\"Minimum password length\"]\npolicy_value = 14\n",
            ),
            RunMode::Apply,
        )
        .unwrap();

    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.changed, 1);
    assert_eq!(report.summary.status, RunStatus::Failed);

    let failed = report.results_with_status(ChangeStatus::Failed).next().unwrap();
    assert_eq!(failed.name, "Accounts: Guest account status");
    assert_eq!(failed.error_code.as_deref(), Some("E021"));
}

#[test]
fn failed_import_is_reported_and_cleaned_up() {
    let dir = tempfile::tempdir().unwrap();
    let system = FakeSystem::from_fixture().failing_on("MinimumPasswordLength");
    let mut reconciler = Reconciler::new(system.provider(dir.path()));

    let report = reconciler
        .run(
            &desired(
                "[\"Minimum password length\"]\npolicy_value = 14\n\n\
                 [\"Audit policy change\"]\npolicy_value = \"Success\"\n",
            ),
            RunMode::Apply,
        )
        .unwrap();

    assert_eq!(report.summary.failed, 1);
    assert_eq!(report.summary.changed, 1);
    assert_eq!(system.imports.borrow().len(), 2);
    assert!(leftover_files(dir.path()).is_empty());

    let json = report.to_json().unwrap();
    assert!(json.contains("\"error_code\": \"E040\""));
}

#[test]
fn each_run_exports_once() {
    let dir = tempfile::tempdir().unwrap();
    let system = FakeSystem::from_fixture();
    let mut reconciler = Reconciler::new(system.provider(dir.path()));
    let state = desired(
        "[\"Minimum password length\"]\npolicy_value = 0\n\n\
         [\"Audit logon events\"]\npolicy_value = \"No auditing\"\n\n\
         [\"Debug programs\"]\npolicy_value = \"Administrators\"\n",
    );

    let report = reconciler.run(&state, RunMode::DryRun).unwrap();
    assert_eq!(report.summary.in_sync, 3);
    assert_eq!(system.exports.get(), 1);

    reconciler.run(&state, RunMode::DryRun).unwrap();
    assert_eq!(system.exports.get(), 2);
}
