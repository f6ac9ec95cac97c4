//! # Reconcile Report
//!
//! JSON-serializable record of one reconcile run: where it ran, when, and
//! what happened to every requested change.

use crate::error::PolicyError;
use crate::provider::{ChangePlan, PlannedAction};
use crate::types::Ensure;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// How a run treats drift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// Report drift only
    Check,
    /// Plan every change without writing
    DryRun,
    /// Plan and write
    Apply,
}

impl RunMode {
    pub fn writes(&self) -> bool {
        matches!(self, RunMode::Apply)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeStatus {
    /// Already in the desired state
    InSync,
    /// Out of sync and not written (check and dry runs)
    Drift,
    /// Written to the system
    Changed,
    /// Planning or applying failed
    Failed,
}

/// Outcome for one desired change
#[derive(Debug, Clone, Serialize)]
pub struct ChangeResult {
    pub name: String,
    pub ensure: Ensure,
    pub status: ChangeStatus,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_value: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<PlannedAction>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
}

impl ChangeResult {
    pub fn from_plan(plan: &ChangePlan, status: ChangeStatus) -> Self {
        Self {
            name: plan.name.clone(),
            ensure: plan.ensure,
            status,
            current_value: plan.current_value.clone(),
            desired_value: plan.desired_value.clone(),
            action: (!plan.in_sync()).then(|| plan.action.clone()),
            message: None,
            error_code: None,
        }
    }

    /// Failure before a plan existed
    pub fn failed(name: impl Into<String>, ensure: Ensure, error: &PolicyError) -> Self {
        Self {
            name: name.into(),
            ensure,
            status: ChangeStatus::Failed,
            current_value: None,
            desired_value: None,
            action: None,
            message: Some(error.user_message()),
            error_code: Some(error.code().to_string()),
        }
    }

    /// Failure while applying a plan
    pub fn apply_failed(plan: &ChangePlan, error: &PolicyError) -> Self {
        Self {
            message: Some(error.user_message()),
            error_code: Some(error.code().to_string()),
            ..Self::from_plan(plan, ChangeStatus::Failed)
        }
    }
}

/// Host execution context
#[derive(Debug, Clone, Serialize)]
pub struct HostContext {
    pub hostname: String,
    pub os_info: String,
}

impl HostContext {
    pub fn from_system() -> Self {
        Self {
            hostname: hostname::get()
                .unwrap_or_else(|_| std::ffi::OsString::from("unknown"))
                .to_string_lossy()
                .to_string(),
            os_info: format!("{} {}", std::env::consts::OS, std::env::consts::ARCH),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TimestampInfo {
    pub run_start: DateTime<Utc>,
    pub run_end: DateTime<Utc>,
    pub duration_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    /// Every change in sync or written
    Converged,
    /// Some changes out of sync, nothing failed
    Drifted,
    /// At least one change failed
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub total: u32,
    pub in_sync: u32,
    pub drift: u32,
    pub changed: u32,
    pub failed: u32,
    pub status: RunStatus,
}

impl Default for RunSummary {
    fn default() -> Self {
        Self {
            total: 0,
            in_sync: 0,
            drift: 0,
            changed: 0,
            failed: 0,
            status: RunStatus::Converged,
        }
    }
}

/// Complete report for one reconcile run
#[derive(Debug, Clone, Serialize)]
pub struct ReconcileReport {
    pub run_id: String,
    pub mode: RunMode,
    pub host: HostContext,
    pub timestamp: TimestampInfo,
    pub summary: RunSummary,
    pub results: Vec<ChangeResult>,
}

impl ReconcileReport {
    pub fn new(run_id: impl Into<String>, mode: RunMode, host: HostContext) -> Self {
        let now = Utc::now();
        Self {
            run_id: run_id.into(),
            mode,
            host,
            timestamp: TimestampInfo {
                run_start: now,
                run_end: now,
                duration_ms: 0,
            },
            summary: RunSummary::default(),
            results: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: ChangeResult) {
        let summary = &mut self.summary;
        summary.total += 1;
        match result.status {
            ChangeStatus::InSync => summary.in_sync += 1,
            ChangeStatus::Drift => summary.drift += 1,
            ChangeStatus::Changed => summary.changed += 1,
            ChangeStatus::Failed => summary.failed += 1,
        }
        self.results.push(result);
    }

    /// Stamp the end time and settle the overall status
    pub fn finalize(&mut self) {
        self.timestamp.run_end = Utc::now();
        self.timestamp.duration_ms = (self.timestamp.run_end - self.timestamp.run_start)
            .num_milliseconds()
            .max(0) as u64;

        let summary = &mut self.summary;
        summary.status = if summary.failed > 0 {
            RunStatus::Failed
        } else if summary.drift > 0 {
            RunStatus::Drifted
        } else {
            RunStatus::Converged
        };
    }

    pub fn has_drift(&self) -> bool {
        self.summary.drift > 0
    }

    pub fn has_failures(&self) -> bool {
        self.summary.failed > 0
    }

    pub fn results_with_status(&self, status: ChangeStatus) -> impl Iterator<Item = &ChangeResult> {
        self.results.iter().filter(move |r| r.status == status)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(name: &str, status: ChangeStatus) -> ChangeResult {
        ChangeResult {
            name: name.into(),
            ensure: Ensure::Present,
            status,
            current_value: None,
            desired_value: None,
            action: None,
            message: None,
            error_code: None,
        }
    }

    fn host() -> HostContext {
        HostContext {
            hostname: "ws01".into(),
            os_info: "windows x86_64".into(),
        }
    }

    #[test]
    fn test_summary_counts_and_status() {
        let mut report = ReconcileReport::new("run-1", RunMode::Apply, host());
        report.add_result(result("a", ChangeStatus::InSync));
        report.add_result(result("b", ChangeStatus::Changed));
        report.finalize();
        assert_eq!(report.summary.total, 2);
        assert_eq!(report.summary.status, RunStatus::Converged);

        report.add_result(result("c", ChangeStatus::Drift));
        report.finalize();
        assert_eq!(report.summary.status, RunStatus::Drifted);
        assert!(report.has_drift());

        report.add_result(result("d", ChangeStatus::Failed));
        report.finalize();
        assert_eq!(report.summary.status, RunStatus::Failed);
        assert_eq!(report.results_with_status(ChangeStatus::Failed).count(), 1);
    }

    #[test]
    fn test_failed_result_carries_code() {
        let error = PolicyError::UnknownPolicy {
            name: "Nope".into(),
        };
        let failed = ChangeResult::failed("Nope", Ensure::Present, &error);
        assert_eq!(failed.error_code.as_deref(), Some("E010"));
        assert!(failed.message.unwrap().contains("Nope"));
    }

    #[test]
    fn test_json_shape() {
        let mut report = ReconcileReport::new("run-2", RunMode::Check, host());
        report.add_result(result("Audit logon events", ChangeStatus::InSync));
        report.finalize();

        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
        assert_eq!(value["run_id"], "run-2");
        assert_eq!(value["mode"], "check");
        assert_eq!(value["host"]["hostname"], "ws01");
        assert_eq!(value["summary"]["in_sync"], 1);
        assert_eq!(value["results"][0]["status"], "in_sync");
        assert!(value["results"][0].get("message").is_none());
    }
}
