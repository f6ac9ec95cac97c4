//! User rights identifier lists
//!
//! Desired values are a comma-separated list with an optional verb prefix:
//!
//! - `set:a,b` (or just `a,b`) replaces the assignment
//! - `merge:+a,-b` adds `a` and removes `b` from the current assignment
//!
//! Every token is resolved to `*S-1-...` form. Results are sorted and
//! deduplicated.

use crate::error::PolicyError;
use crate::identity::{to_identifier, IdentityResolver};
use crate::types::Ensure;
use std::collections::BTreeSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeVerb {
    Set,
    Merge,
}

/// Split a desired value into its verb and member list
pub fn parse_verb(value: &str) -> Result<(MergeVerb, &str), String> {
    match value.split_once(':') {
        None => Ok((MergeVerb::Set, value)),
        Some((verb, members)) => match verb.trim().to_ascii_lowercase().as_str() {
            "set" => Ok((MergeVerb::Set, members)),
            "merge" => Ok((MergeVerb::Merge, members)),
            other => Err(format!(
                "unknown verb '{}', expected 'set:' or 'merge:'",
                other
            )),
        },
    }
}

fn tokens(list: &str) -> impl Iterator<Item = &str> {
    list.split(',').map(str::trim).filter(|t| !t.is_empty())
}

/// Resolve an observed list to sorted identifier form
pub fn decode_list(raw: &str, resolver: &dyn IdentityResolver) -> Result<String, PolicyError> {
    let mut identifiers = BTreeSet::new();
    for token in tokens(raw) {
        identifiers.insert(to_identifier(token, resolver)?);
    }
    Ok(join(identifiers))
}

/// Compute the list to import for a desired value
pub fn merge(
    policy: &str,
    desired: &str,
    current: Option<&str>,
    ensure: Ensure,
    resolver: &dyn IdentityResolver,
) -> Result<String, PolicyError> {
    if ensure == Ensure::Absent {
        return Ok(String::new());
    }

    let (verb, members) =
        parse_verb(desired).map_err(|reason| PolicyError::invalid_value(policy, desired, reason))?;

    let mut working = BTreeSet::new();
    match verb {
        MergeVerb::Set => {
            for token in tokens(members) {
                working.insert(to_identifier(token, resolver)?);
            }
        }
        MergeVerb::Merge => {
            for token in tokens(current.unwrap_or_default()) {
                working.insert(to_identifier(token, resolver)?);
            }
            for token in tokens(members) {
                if let Some(removed) = token.strip_prefix('-') {
                    working.remove(&to_identifier(removed, resolver)?);
                } else {
                    let added = token.strip_prefix('+').unwrap_or(token);
                    working.insert(to_identifier(added, resolver)?);
                }
            }
        }
    }

    Ok(join(working))
}

/// Reject `+`/`-` member prefixes outside of `merge:`
pub fn validate(policy: &str, value: &str) -> Result<(), PolicyError> {
    let (verb, members) =
        parse_verb(value).map_err(|reason| PolicyError::invalid_value(policy, value, reason))?;

    if verb == MergeVerb::Merge {
        return Ok(());
    }

    for token in tokens(members) {
        if token.starts_with('-') {
            return Err(PolicyError::invalid_value(
                policy,
                value,
                "value may not start with a '-' without 'merge:'",
            ));
        }
        if token.starts_with('+') {
            return Err(PolicyError::invalid_value(
                policy,
                value,
                "value may not start with a '+' without 'merge:'",
            ));
        }
    }
    Ok(())
}

fn join(identifiers: BTreeSet<String>) -> String {
    identifiers.into_iter().collect::<Vec<_>>().join(",")
}
