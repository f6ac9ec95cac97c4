//! Command execution configurations for the policy tools

pub mod windows;

pub use windows::{create_identity_resolver, create_policy_tool};
