//! Local security policy reconciliation engine
//!
//! Reads the system policy through `secedit /export`, compares it with a
//! desired state keyed by policy display name, and writes single-entry
//! imports or registry deletions to converge.

// Internal modules
pub mod catalog;
pub mod codec;
pub mod config;
pub mod error;
pub mod identity;
#[macro_use]
pub mod logging;
pub mod provider;
pub mod reconciler;
pub mod results;
pub mod store;
pub mod strategies;
pub mod types;

// Re-export key types for library consumers
pub use catalog::{catalog, PolicyCatalog, PolicyDefinition, Section};
pub use error::PolicyError;
pub use identity::{IdentityResolver, PowerShellIdentityResolver, WellKnownIdentities};
pub use provider::{ApplyOutcome, ChangePlan, PlannedAction, ReconcilerProvider};
pub use reconciler::{DesiredState, Reconciler};
pub use results::{ChangeStatus, ReconcileReport, RunMode};
pub use store::PolicyStore;
pub use types::{DesiredChange, Ensure, PolicyInstance};
