//! # Reconcile Runs
//!
//! Loads a desired-state document and drives every entry through the
//! provider in display-name order. Unknown policy names abort the run
//! before anything is written.

use crate::catalog::catalog;
use crate::config::constants::compile_time::files;
use crate::error::PolicyError;
use crate::logging::{self, codes};
use crate::provider::{ApplyOutcome, ChangePlan, ReconcilerProvider};
use crate::results::{ChangeResult, ChangeStatus, HostContext, ReconcileReport, RunMode};
use crate::types::{DesiredChange, Ensure};
use crate::{log_error, log_info, log_success};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

// ============================================================================
// DESIRED STATE
// ============================================================================

/// Value as written in a desired-state document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PolicyValue {
    Text(String),
    Number(i64),
}

impl PolicyValue {
    pub fn into_text(self) -> String {
        match self {
            PolicyValue::Text(text) => text,
            PolicyValue::Number(n) => n.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DesiredEntry {
    #[serde(default)]
    pub ensure: Ensure,
    #[serde(default)]
    pub policy_value: Option<PolicyValue>,
}

/// Desired policies keyed by display name
///
/// ```toml
/// ["Minimum password length"]
/// policy_value = 14
///
/// ["Deny log on locally"]
/// ensure = "absent"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesiredState {
    pub policies: BTreeMap<String, DesiredEntry>,
}

impl DesiredState {
    pub fn from_toml_str(content: &str) -> Result<Self, PolicyError> {
        toml::from_str(content).map_err(|e| PolicyError::Config {
            reason: format!("invalid desired state: {}", e),
        })
    }

    pub fn from_json_str(content: &str) -> Result<Self, PolicyError> {
        serde_json::from_str(content).map_err(|e| PolicyError::Config {
            reason: format!("invalid desired state: {}", e),
        })
    }

    /// Load a `.toml` or `.json` document
    pub fn load(path: &Path) -> Result<Self, PolicyError> {
        let size = fs::metadata(path)?.len();
        if size > files::MAX_DESIRED_STATE_SIZE {
            return Err(PolicyError::Config {
                reason: format!(
                    "{} is {} bytes, limit is {}",
                    path.display(),
                    size,
                    files::MAX_DESIRED_STATE_SIZE
                ),
            });
        }

        let content = fs::read_to_string(path)?;
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(PolicyError::Config {
                reason: format!(
                    "{}: desired state must be a .toml or .json file",
                    path.display()
                ),
            }),
        }
    }

    /// Changes in display-name order
    pub fn changes(&self) -> Vec<DesiredChange> {
        self.policies
            .iter()
            .map(|(name, entry)| DesiredChange {
                name: name.clone(),
                value: entry.policy_value.clone().map(PolicyValue::into_text),
                ensure: entry.ensure,
            })
            .collect()
    }

    /// Names with no catalog entry
    pub fn unknown_names(&self) -> Vec<&str> {
        self.policies
            .keys()
            .map(String::as_str)
            .filter(|name| !catalog().is_known_policy(name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.policies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.policies.is_empty()
    }
}

// ============================================================================
// RECONCILER
// ============================================================================

pub struct Reconciler<'a> {
    provider: ReconcilerProvider<'a>,
}

impl<'a> Reconciler<'a> {
    pub fn new(provider: ReconcilerProvider<'a>) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &ReconcilerProvider<'a> {
        &self.provider
    }

    /// Reconcile every desired entry.
    ///
    /// Unknown names and export failures fail the whole run. Any other
    /// failure is recorded against its change and the run continues.
    pub fn run(
        &mut self,
        desired: &DesiredState,
        mode: RunMode,
    ) -> Result<ReconcileReport, PolicyError> {
        let run_id = uuid::Uuid::new_v4().to_string();
        self.provider.reset();

        logging::with_run_context(&run_id, || {
            log_info!("Reconcile run started",
                "mode" => format!("{:?}", mode),
                "policies" => desired.len()
            );

            let unknown = desired.unknown_names();
            if !unknown.is_empty() {
                let error = PolicyError::UnknownPolicy {
                    name: unknown.join(", "),
                };
                log_error!(error.code(), "Desired state names unknown policies",
                    "names" => unknown.join(", ")
                );
                return Err(error);
            }

            let mut report = ReconcileReport::new(run_id.as_str(), mode, HostContext::from_system());
            let mut plans = Vec::new();

            for change in desired.changes() {
                match self.provider.plan(&change) {
                    Ok(plan) => plans.push(plan),
                    Err(e) if e.is_validation_error() || e.is_recoverable() => {
                        log_error!(e.code(), "Change rejected",
                            "policy" => &change.name,
                            "error" => &e
                        );
                        report.add_result(ChangeResult::failed(&change.name, change.ensure, &e));
                    }
                    Err(e) => return Err(e),
                }
            }

            for plan in &plans {
                report.add_result(self.settle(plan, mode));
            }

            report.finalize();
            log_success!(codes::success::RUN_COMPLETE, "Reconcile run finished",
                "in_sync" => report.summary.in_sync,
                "drift" => report.summary.drift,
                "changed" => report.summary.changed,
                "failed" => report.summary.failed
            );
            Ok(report)
        })
    }

    fn settle(&self, plan: &ChangePlan, mode: RunMode) -> ChangeResult {
        if plan.in_sync() {
            return ChangeResult::from_plan(plan, ChangeStatus::InSync);
        }
        if !mode.writes() {
            return ChangeResult::from_plan(plan, ChangeStatus::Drift);
        }

        match self.provider.apply(plan) {
            Ok(ApplyOutcome::Unchanged) => ChangeResult::from_plan(plan, ChangeStatus::InSync),
            Ok(_) => ChangeResult::from_plan(plan, ChangeStatus::Changed),
            Err(e) => {
                log_error!(codes::apply::CHANGE_FAILED, "Change could not be applied",
                    "policy" => &plan.name,
                    "error" => &e
                );
                ChangeResult::apply_failed(plan, &e)
            }
        }
    }
}
