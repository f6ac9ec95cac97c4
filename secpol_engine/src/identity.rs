//! Account name <-> security identifier resolution
//!
//! Privilege assignments are stored as `*S-1-...` identifier lists. Desired
//! values may name accounts instead, so every token goes through an
//! [`IdentityResolver`] before it is compared or written.

use crate::error::PolicyError;
use crate::strategies::SystemCommandExecutor;
use regex::Regex;
use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::OnceLock;
use std::time::Duration;

/// Name <-> SID lookup service
pub trait IdentityResolver {
    /// Resolve an account or group name to its bare SID (`S-1-...`)
    fn name_to_sid(&self, name: &str) -> Result<String, PolicyError>;

    /// Resolve a SID (with or without the `*` marker) to an account name
    fn sid_to_name(&self, sid: &str) -> Result<String, PolicyError>;
}

static SID_PATTERN: OnceLock<Regex> = OnceLock::new();

fn sid_pattern() -> &'static Regex {
    SID_PATTERN.get_or_init(|| Regex::new(r"^\*?[Ss]-1(-\d+)+$").expect("valid SID pattern"))
}

/// True when the token is already in identifier form
pub fn is_sid(token: &str) -> bool {
    sid_pattern().is_match(token.trim())
}

/// Canonical `*S-1-...` form of an identifier token
pub fn normalize_sid(token: &str) -> String {
    let bare = token.trim().trim_start_matches('*');
    format!("*S{}", &bare[1..])
}

/// Resolve one privilege list token to `*S-1-...` form
pub fn to_identifier(token: &str, resolver: &dyn IdentityResolver) -> Result<String, PolicyError> {
    let token = token.trim();
    if is_sid(token) {
        return Ok(normalize_sid(token));
    }

    let sid = resolver.name_to_sid(token)?;
    if !is_sid(&sid) {
        return Err(PolicyError::IdentityResolutionFailure {
            identity: token.to_string(),
            reason: format!("lookup returned '{}' which is not a SID", sid),
        });
    }
    Ok(normalize_sid(&sid))
}

// ============================================================================
// WELL-KNOWN PRINCIPALS
// ============================================================================

const WELL_KNOWN: &[(&str, &str)] = &[
    ("Everyone", "S-1-1-0"),
    ("CREATOR OWNER", "S-1-3-0"),
    ("NT AUTHORITY\\NETWORK", "S-1-5-2"),
    ("NT AUTHORITY\\BATCH", "S-1-5-3"),
    ("NT AUTHORITY\\INTERACTIVE", "S-1-5-4"),
    ("NT AUTHORITY\\SERVICE", "S-1-5-6"),
    ("NT AUTHORITY\\ANONYMOUS LOGON", "S-1-5-7"),
    ("NT AUTHORITY\\ENTERPRISE DOMAIN CONTROLLERS", "S-1-5-9"),
    ("NT AUTHORITY\\Authenticated Users", "S-1-5-11"),
    ("NT AUTHORITY\\SYSTEM", "S-1-5-18"),
    ("NT AUTHORITY\\LOCAL SERVICE", "S-1-5-19"),
    ("NT AUTHORITY\\NETWORK SERVICE", "S-1-5-20"),
    ("NT AUTHORITY\\Local account", "S-1-5-113"),
    ("NT AUTHORITY\\Local account and member of Administrators group", "S-1-5-114"),
    ("BUILTIN\\Administrators", "S-1-5-32-544"),
    ("BUILTIN\\Users", "S-1-5-32-545"),
    ("BUILTIN\\Guests", "S-1-5-32-546"),
    ("BUILTIN\\Power Users", "S-1-5-32-547"),
    ("BUILTIN\\Account Operators", "S-1-5-32-548"),
    ("BUILTIN\\Server Operators", "S-1-5-32-549"),
    ("BUILTIN\\Print Operators", "S-1-5-32-550"),
    ("BUILTIN\\Backup Operators", "S-1-5-32-551"),
    ("BUILTIN\\Replicator", "S-1-5-32-552"),
    ("BUILTIN\\Remote Desktop Users", "S-1-5-32-555"),
    ("BUILTIN\\Network Configuration Operators", "S-1-5-32-556"),
    ("BUILTIN\\Performance Monitor Users", "S-1-5-32-558"),
    ("BUILTIN\\Performance Log Users", "S-1-5-32-559"),
    ("BUILTIN\\Distributed COM Users", "S-1-5-32-562"),
    ("BUILTIN\\IIS_IUSRS", "S-1-5-32-568"),
    ("BUILTIN\\Cryptographic Operators", "S-1-5-32-569"),
    ("BUILTIN\\Event Log Readers", "S-1-5-32-573"),
    ("BUILTIN\\Hyper-V Administrators", "S-1-5-32-578"),
    ("BUILTIN\\Remote Management Users", "S-1-5-32-580"),
    ("NT SERVICE\\ALL SERVICES", "S-1-5-80-0"),
    (
        "NT SERVICE\\WdiServiceHost",
        "S-1-5-80-3139157870-2983391045-3678747466-658725712-1809340420",
    ),
];

/// Offline resolver for built-in principals.
///
/// Names match case-insensitively, with or without their authority prefix.
#[derive(Debug, Default, Clone, Copy)]
pub struct WellKnownIdentities;

impl WellKnownIdentities {
    pub fn lookup_name(name: &str) -> Option<&'static str> {
        let wanted = name.trim();
        WELL_KNOWN
            .iter()
            .find(|(qualified, _)| {
                qualified.eq_ignore_ascii_case(wanted)
                    || qualified
                        .rsplit_once('\\')
                        .map(|(_, short)| short.eq_ignore_ascii_case(wanted))
                        .unwrap_or(false)
            })
            .map(|(_, sid)| *sid)
    }

    pub fn lookup_sid(sid: &str) -> Option<&'static str> {
        let bare = sid.trim().trim_start_matches('*');
        WELL_KNOWN
            .iter()
            .find(|(_, known)| known.eq_ignore_ascii_case(bare))
            .map(|(name, _)| *name)
    }
}

impl IdentityResolver for WellKnownIdentities {
    fn name_to_sid(&self, name: &str) -> Result<String, PolicyError> {
        Self::lookup_name(name)
            .map(str::to_string)
            .ok_or_else(|| PolicyError::IdentityResolutionFailure {
                identity: name.to_string(),
                reason: "not a well-known principal".to_string(),
            })
    }

    fn sid_to_name(&self, sid: &str) -> Result<String, PolicyError> {
        Self::lookup_sid(sid)
            .map(str::to_string)
            .ok_or_else(|| PolicyError::IdentityResolutionFailure {
                identity: sid.to_string(),
                reason: "not a well-known SID".to_string(),
            })
    }
}

// ============================================================================
// SYSTEM RESOLVER
// ============================================================================

/// Resolver backed by the .NET account translation APIs via PowerShell.
///
/// Well-known principals are answered locally; everything else is looked up
/// once per run and memoized.
pub struct PowerShellIdentityResolver {
    executor: SystemCommandExecutor,
    program: String,
    timeout: Option<Duration>,
    cache: RefCell<HashMap<String, String>>,
}

impl PowerShellIdentityResolver {
    pub fn new(executor: SystemCommandExecutor, program: impl Into<String>) -> Self {
        Self {
            executor,
            program: program.into(),
            timeout: None,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn run_script(&self, identity: &str, script: &str) -> Result<String, PolicyError> {
        let output = self
            .executor
            .execute(
                &self.program,
                &["-NoProfile", "-NonInteractive", "-Command", script],
                self.timeout,
            )
            .map_err(|e| PolicyError::IdentityResolutionFailure {
                identity: identity.to_string(),
                reason: e.to_string(),
            })?;

        let value = output.stdout.trim();
        if output.exit_code != 0 || value.is_empty() {
            return Err(PolicyError::IdentityResolutionFailure {
                identity: identity.to_string(),
                reason: if output.stderr.trim().is_empty() {
                    format!("lookup exited with status {}", output.exit_code)
                } else {
                    output.stderr.trim().to_string()
                },
            });
        }
        Ok(value.to_string())
    }
}

/// Quote a value for a single-quoted PowerShell string literal
fn ps_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}

impl IdentityResolver for PowerShellIdentityResolver {
    fn name_to_sid(&self, name: &str) -> Result<String, PolicyError> {
        if let Some(sid) = WellKnownIdentities::lookup_name(name) {
            return Ok(sid.to_string());
        }
        let key = name.trim().to_lowercase();
        if let Some(sid) = self.cache.borrow().get(&key) {
            return Ok(sid.clone());
        }

        let script = format!(
            "(New-Object System.Security.Principal.NTAccount({})).Translate([System.Security.Principal.SecurityIdentifier]).Value",
            ps_quote(name.trim())
        );
        let sid = self.run_script(name, &script)?;
        self.cache.borrow_mut().insert(key, sid.clone());
        Ok(sid)
    }

    fn sid_to_name(&self, sid: &str) -> Result<String, PolicyError> {
        if let Some(name) = WellKnownIdentities::lookup_sid(sid) {
            return Ok(name.to_string());
        }
        if !is_sid(sid) {
            return Err(PolicyError::IdentityResolutionFailure {
                identity: sid.to_string(),
                reason: "not a SID".to_string(),
            });
        }

        let bare = sid.trim().trim_start_matches('*');
        let script = format!(
            "(New-Object System.Security.Principal.SecurityIdentifier({})).Translate([System.Security.Principal.NTAccount]).Value",
            ps_quote(bare)
        );
        self.run_script(sid, &script)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_sid_detection() {
        assert!(is_sid("*S-1-5-32-544"));
        assert!(is_sid("S-1-5-32-544"));
        assert!(is_sid(" *S-1-1-0 "));
        assert!(!is_sid("Administrators"));
        assert!(!is_sid("*S-1-"));
        assert!(!is_sid("S-2-5-1"));
    }

    #[test]
    fn test_normalize_sid() {
        assert_eq!(normalize_sid("S-1-5-32-544"), "*S-1-5-32-544");
        assert_eq!(normalize_sid("*S-1-5-32-544"), "*S-1-5-32-544");
        assert_eq!(normalize_sid("s-1-5-19"), "*S-1-5-19");
    }

    #[test]
    fn test_well_known_names() {
        let resolver = WellKnownIdentities;
        assert_eq!(resolver.name_to_sid("Administrators").unwrap(), "S-1-5-32-544");
        assert_eq!(resolver.name_to_sid("builtin\\users").unwrap(), "S-1-5-32-545");
        assert_eq!(resolver.name_to_sid("LOCAL SERVICE").unwrap(), "S-1-5-19");
        assert_eq!(resolver.name_to_sid("NT SERVICE\\ALL SERVICES").unwrap(), "S-1-5-80-0");
        assert_matches!(
            resolver.name_to_sid("CustomAdmin"),
            Err(PolicyError::IdentityResolutionFailure { .. })
        );
    }

    #[test]
    fn test_well_known_sids() {
        let resolver = WellKnownIdentities;
        assert_eq!(
            resolver.sid_to_name("*S-1-5-32-556").unwrap(),
            "BUILTIN\\Network Configuration Operators"
        );
        assert_eq!(resolver.sid_to_name("S-1-1-0").unwrap(), "Everyone");
    }

    #[test]
    fn test_to_identifier() {
        let resolver = WellKnownIdentities;
        assert_eq!(to_identifier("Everyone", &resolver).unwrap(), "*S-1-1-0");
        assert_eq!(to_identifier("S-1-5-6", &resolver).unwrap(), "*S-1-5-6");
        assert_eq!(to_identifier(" *S-1-5-20 ", &resolver).unwrap(), "*S-1-5-20");
        assert!(to_identifier("nobody-here", &resolver).is_err());
    }

    #[test]
    fn test_ps_quote() {
        assert_eq!(ps_quote("O'Brien"), "'O''Brien'");
    }

    #[test]
    fn test_powershell_resolver_answers_well_known_offline() {
        // Empty whitelist: any subprocess call would be a security violation
        let resolver =
            PowerShellIdentityResolver::new(SystemCommandExecutor::new(), "powershell.exe");

        assert_eq!(resolver.name_to_sid("Backup Operators").unwrap(), "S-1-5-32-551");
        assert_matches!(
            resolver.name_to_sid("CONTOSO\\svc_sql"),
            Err(PolicyError::IdentityResolutionFailure { .. })
        );
    }
}
