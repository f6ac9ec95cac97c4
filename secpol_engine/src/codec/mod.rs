//! # Value Codec
//!
//! Translates between the encoded values stored in exported policy files and
//! the human-facing strings used in desired state and reports.
//!
//! Decoding runs the section transform first and the data-kind transform
//! second. Encoding runs them in the opposite order.
//!
//! | Section          | Stored form                   | Human form           |
//! |------------------|-------------------------------|----------------------|
//! | System Access    | `1`, `42`, `"Administrator"`  | `enabled`, `42`, ... |
//! | Event Audit      | `0`..`3`                      | `Success,Failure`    |
//! | Privilege Rights | `*S-1-5-32-544,*S-1-5-32-545` | same, sorted         |
//! | Registry Values  | `4,1`, `1,"O:BAG:BAD:..."`    | `enabled`, ...       |

mod audit;
pub mod privilege;

pub use audit::{
    code_for_label, label_for_code, EVENT_TYPES, FAILURE, NO_AUDITING, SUCCESS, SUCCESS_FAILURE,
};

use crate::catalog::{DataKind, OptionTable, PolicyClass, PolicyDefinition, RegistryType};
use crate::error::PolicyError;
use crate::identity::IdentityResolver;
use crate::types::Ensure;

pub const ENABLED: &str = "enabled";
pub const DISABLED: &str = "disabled";

/// Accepted boolean values
pub const STATE_TYPES: [&str; 2] = [ENABLED, DISABLED];

// ============================================================================
// DECODE
// ============================================================================

/// Decode a raw exported value to its human-facing form
pub fn decode(
    definition: &PolicyDefinition,
    raw: &str,
    resolver: &dyn IdentityResolver,
) -> Result<String, PolicyError> {
    match definition.class {
        PolicyClass::SystemAccess(kind) => decode_kind(definition, kind, raw.trim()),
        PolicyClass::EventAudit => Ok(label_for_code(raw).to_string()),
        PolicyClass::PrivilegeRights => privilege::decode_list(raw, resolver),
        PolicyClass::RegistryValues {
            registry_type,
            kind,
        } => {
            let value = strip_registry_tag(raw, registry_type);
            decode_kind(definition, kind, &value)
        }
    }
}

/// Drop the leading type tag field. String values lose their quotes.
fn strip_registry_tag(raw: &str, registry_type: RegistryType) -> String {
    let value = match raw.trim().split_once(',') {
        Some((_, rest)) => rest,
        None => "",
    };
    match registry_type {
        RegistryType::Sz => value.replace('"', ""),
        _ => value.to_string(),
    }
}

fn decode_kind(
    definition: &PolicyDefinition,
    kind: DataKind,
    value: &str,
) -> Result<String, PolicyError> {
    match kind {
        DataKind::Boolean => Ok(if leading_integer(value) != 0 {
            ENABLED.to_string()
        } else {
            DISABLED.to_string()
        }),
        DataKind::MultiSelect(options) => option_label(options, value)
            .map(str::to_string)
            .ok_or_else(|| PolicyError::unmapped_option(definition.display_name, value)),
        DataKind::Integer | DataKind::String => Ok(value.to_string()),
    }
}

/// Integer prefix of a value, 0 when it does not start with a number
fn leading_integer(value: &str) -> i64 {
    let value = value.trim();
    let digits_start = usize::from(value.starts_with('-') || value.starts_with('+'));
    let end = value[digits_start..]
        .find(|c: char| !c.is_ascii_digit())
        .map(|i| i + digits_start)
        .unwrap_or(value.len());
    value[..end].parse().unwrap_or(0)
}

fn option_label(options: OptionTable, code: &str) -> Option<&'static str> {
    let code = code.trim();
    options
        .iter()
        .find(|(raw, _)| *raw == code)
        .map(|(_, label)| *label)
}

fn option_code(options: OptionTable, label: &str) -> Option<&'static str> {
    let wanted = label.to_lowercase();
    options
        .iter()
        .find(|(_, known)| known.to_lowercase() == wanted)
        .map(|(code, _)| *code)
}

// ============================================================================
// ENCODE
// ============================================================================

/// Encode a desired value to the form written into an import file.
///
/// `current` is the decoded current value and is only consulted as the merge
/// base for privilege rights.
pub fn encode(
    definition: &PolicyDefinition,
    desired: &str,
    current: Option<&str>,
    ensure: Ensure,
    resolver: &dyn IdentityResolver,
) -> Result<String, PolicyError> {
    match definition.class {
        PolicyClass::SystemAccess(kind) => encode_kind(definition, kind, desired, true),
        PolicyClass::EventAudit => Ok(code_for_label(desired)),
        PolicyClass::PrivilegeRights => {
            privilege::merge(definition.display_name, desired, current, ensure, resolver)
        }
        PolicyClass::RegistryValues {
            registry_type,
            kind,
        } => {
            let quote = registry_type != RegistryType::MultiSz;
            let value = encode_kind(definition, kind, desired, quote)?;
            Ok(format!("{},{}", registry_type.tag(), value))
        }
    }
}

fn encode_kind(
    definition: &PolicyDefinition,
    kind: DataKind,
    desired: &str,
    quote_strings: bool,
) -> Result<String, PolicyError> {
    match kind {
        DataKind::Boolean => Ok(if desired == ENABLED { "1" } else { "0" }.to_string()),
        DataKind::MultiSelect(options) => option_code(options, desired)
            .map(str::to_string)
            .ok_or_else(|| PolicyError::unmapped_option(definition.display_name, desired)),
        DataKind::String if quote_strings => Ok(format!("\"{}\"", desired)),
        DataKind::String | DataKind::Integer => Ok(desired.to_string()),
    }
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Check a desired value before anything is written
pub fn validate_desired_value(
    definition: &PolicyDefinition,
    value: &str,
) -> Result<(), PolicyError> {
    let policy = definition.display_name;
    match definition.class {
        PolicyClass::EventAudit => {
            if !EVENT_TYPES.contains(&value) {
                return Err(PolicyError::invalid_value(
                    policy,
                    value,
                    format!("should be one of '{}'", EVENT_TYPES.join("', '")),
                ));
            }
            Ok(())
        }
        PolicyClass::PrivilegeRights => privilege::validate(policy, value),
        PolicyClass::SystemAccess(kind) | PolicyClass::RegistryValues { kind, .. } => match kind {
            DataKind::Boolean if !STATE_TYPES.contains(&value) => Err(PolicyError::invalid_value(
                policy,
                value,
                format!("should be one of '{}'", STATE_TYPES.join("', '")),
            )),
            DataKind::MultiSelect(options) if option_code(options, value).is_none() => {
                let labels: Vec<&str> = options.iter().map(|(_, label)| *label).collect();
                Err(PolicyError::invalid_value(
                    policy,
                    value,
                    format!("should be one of '{}'", labels.join("', '")),
                ))
            }
            DataKind::Integer if value.trim().parse::<i64>().is_err() => Err(
                PolicyError::invalid_value(policy, value, "should be an integer"),
            ),
            _ => Ok(()),
        },
    }
}
