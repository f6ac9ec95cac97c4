//! Catalog content

use super::{DataKind, OptionTable, PolicyDefinition, RegistryType};

use DataKind::{Boolean, Integer, MultiSelect};
use RegistryType::{Binary, Dword, MultiSz, Sz};

const STRING: DataKind = DataKind::String;

// ============================================================================
// OPTION TABLES
// ============================================================================

const BLOCK_MICROSOFT_ACCOUNTS: OptionTable = &[
    ("0", "This policy is disabled"),
    ("1", "Users can`t add Microsoft accounts"),
    ("3", "Users can`t add or log on with Microsoft accounts"),
];

const ALLOCATE_DASD: OptionTable = &[
    ("0", "Administrators"),
    ("1", "Administrators and Power Users"),
    ("2", "Administrators and Interactive Users"),
];

const LOCKED_USER_DISPLAY: OptionTable = &[
    ("1", "User display name, domain and user names"),
    ("2", "User display name only"),
    ("3", "Do not display user information"),
];

const SMART_CARD_REMOVAL: OptionTable = &[
    ("0", "No Action"),
    ("1", "Lock Workstation"),
    ("2", "Force Logoff"),
    ("3", "Disconnect if a Remote Desktop Services session"),
];

const SPN_VALIDATION_LEVEL: OptionTable = &[
    ("0", "Off"),
    ("1", "Accept if provided by client"),
    ("2", "Required from client"),
];

const SHARING_MODEL: OptionTable = &[
    ("0", "Classic - local users authenticate as themselves"),
    ("1", "Guest only - local users authenticate as Guest"),
];

// Labels keep their trailing commas; they are what existing manifests use.
const KERBEROS_ENCRYPTION_TYPES: OptionTable = &[
    ("1", "DES_CBC_CRC"),
    ("2", "DES_CBC_MB5"),
    ("3", "DES_CBC_CRC,DES_CBC_MB5,"),
    ("4", "RC4_HMAC_MD5"),
    ("5", "DES_CBC_CRC,RC4_HMAC_MD5,"),
    ("6", "DES_CBC_MB5,RC4_HMAC_MD5,"),
    ("7", "DES_CBC_CRC,DES_CBC_MB5,RC4_HMAC_MD5,"),
    ("8", "AES128_HMAC_SHA1"),
    ("9", "DES_CBC_CRC,AES128_HMAC_SHA1,"),
    ("10", "DES_CBC_MB5,AES128_HMAC_SHA1,"),
    ("11", "DES_CBC_CRC,DES_CBC_MB5,AES128_HMAC_SHA1,"),
    ("12", "RC4_HMAC_MD5,AES128_HMAC_SHA1,"),
    ("13", "DES_CBC_CRC,RC4_HMAC_MD5,AES128_HMAC_SHA1,"),
    ("14", "DES_CBC_MB5,RC4_HMAC_MD5,AES128_HMAC_SHA1,"),
    ("15", "DES_CBC_CRC,DES_CBC_MB5,RC4_HMAC_MD5,AES128_HMAC_SHA1,"),
    ("16", "AES256_HMAC_SHA1"),
    ("17", "DES_CBC_CRC,AES256_HMAC_SHA1,"),
    ("18", "DES_CBC_MB5,AES256_HMAC_SHA1,"),
    ("19", "DES_CBC_CRC,DES_CBC_MB5,AES256_HMAC_SHA1,"),
    ("20", "RC4_HMAC_MD5,AES256_HMAC_SHA1,"),
    ("21", "DES_CBC_CRC,RC4_HMAC_MD5,AES256_HMAC_SHA1,"),
    ("22", "DES_CBC_MB5,RC4_HMAC_MD5,AES256_HMAC_SHA1,"),
    ("23", "DES_CBC_CRC,DES_CBC_MB5,RC4_HMAC_MD5,AES256_HMAC_SHA1,"),
    ("24", "AES128_HMAC_SHA1,AES256_HMAC_SHA1,"),
    ("25", "DES_CBC_CRC,AES128_HMAC_SHA1,AES256_HMAC_SHA1,"),
    ("26", "DES_CBC_MB5,AES128_HMAC_SHA1,AES256_HMAC_SHA1,"),
    ("27", "DES_CBC_CRC,DES_CBC_MB5,AES128_HMAC_SHA1,AES256_HMAC_SHA1,"),
    ("28", "RC4_HMAC_MD5,AES128_HMAC_SHA1,AES256_HMAC_SHA1,"),
    ("29", "DES_CBC_CRC,RC4_HMAC_MD5,AES128_HMAC_SHA1,AES256_HMAC_SHA1,"),
    ("30", "DES_CBC_MB5,RC4_HMAC_MD5,AES128_HMAC_SHA1,AES256_HMAC_SHA1,"),
    ("31", "DES_CBC_CRC,DES_CBC_MB5,RC4_HMAC_MD5,AES128_HMAC_SHA1,AES256_HMAC_SHA1,"),
    ("2147483616", "Future encryption types"),
    ("2147483617", "DES_CBC_CRC,Future encryption types"),
    ("2147483618", "DES_CBC_MB5,Future encryption types"),
    ("2147483619", "DES_CBC_CRC,DES_CBC_MB5,Future encryption types"),
    ("2147483620", "RC4_HMAC_MD5,Future encryption types"),
    ("2147483621", "DES_CBC_CRC,RC4_HMAC_MD5,Future encryption types"),
    ("2147483622", "DES_CBC_MB5,RC4_HMAC_MD5,Future encryption types"),
    ("2147483623", "DES_CBC_CRC,DES_CBC_MB5,RC4_HMAC_MD5,Future encryption types"),
    ("2147483624", "AES128_HMAC_SHA1,Future encryption types"),
    ("2147483625", "DES_CBC_CRC,AES128_HMAC_SHA1,Future encryption types"),
    ("2147483626", "DES_CBC_MB5,AES128_HMAC_SHA1,Future encryption types"),
    ("2147483627", "DES_CBC_CRC,DES_CBC_MB5,AES128_HMAC_SHA1,Future encryption types"),
    ("2147483628", "RC4_HMAC_MD5,AES128_HMAC_SHA1,Future encryption types"),
    ("2147483629", "DES_CBC_CRC,RC4_HMAC_MD5,AES128_HMAC_SHA1,Future encryption types"),
    ("2147483630", "DES_CBC_MB5,RC4_HMAC_MD5,AES128_HMAC_SHA1,Future encryption types"),
    ("2147483631", "DES_CBC_CRC,DES_CBC_MB5,RC4_HMAC_MD5,AES128_HMAC_SHA1,Future encryption types"),
    ("2147483632", "AES256_HMAC_SHA1,Future encryption types"),
    ("2147483633", "DES_CBC_CRC,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483634", "DES_CBC_MB5,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483635", "DES_CBC_CRC,DES_CBC_MB5,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483636", "RC4_HMAC_MD5,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483637", "DES_CBC_CRC,RC4_HMAC_MD5,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483638", "DES_CBC_MB5,RC4_HMAC_MD5,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483639", "DES_CBC_CRC,DES_CBC_MB5,RC4_HMAC_MD5,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483640", "AES128_HMAC_SHA1,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483641", "DES_CBC_CRC,AES128_HMAC_SHA1,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483642", "DES_CBC_MB5,AES128_HMAC_SHA1,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483643", "DES_CBC_CRC,DES_CBC_MB5,AES128_HMAC_SHA1,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483644", "RC4_HMAC_MD5,AES128_HMAC_SHA1,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483645", "DES_CBC_CRC,RC4_HMAC_MD5,AES128_HMAC_SHA1,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483646", "DES_CBC_MB5,RC4_HMAC_MD5,AES128_HMAC_SHA1,AES256_HMAC_SHA1,Future encryption types"),
    ("2147483647", "DES_CBC_CRC,DES_CBC_MB5,RC4_HMAC_MD5,AES128_HMAC_SHA1,AES256_HMAC_SHA1,Future encryption types"),
];

const LAN_MANAGER_LEVEL: OptionTable = &[
    ("0", "Send LM & NTLM responses"),
    ("1", "Send LM & NTLM - use NTLMv2 session security if negotiated"),
    ("2", "Send NTLM response only"),
    ("3", "Send NTLMv2 response only"),
    ("4", "Send NTLMv2 response only. Refuse LM"),
    ("5", "Send NTLMv2 response only. Refuse LM & NTLM"),
];

const LDAP_CLIENT_SIGNING: OptionTable = &[
    ("0", "None"),
    ("1", "Negotiate signing"),
    ("2", "Require signing"),
];

const NTLM_SESSION_SECURITY: OptionTable = &[
    ("524288", "Require NTLMv2 session security"),
    ("536870912", "Require 128-bit encryption"),
    ("537395200", "Require NTLMv2 session security,Require 128-bit encryption"),
];

const NTLM_AUDIT_INCOMING: OptionTable = &[
    ("0", "Disable"),
    ("1", "Enable auditing for domain accounts"),
    ("2", "Enable auditing for all accounts"),
];

const NTLM_RESTRICT_INCOMING: OptionTable = &[
    ("0", "Allow all"),
    ("1", "Deny all domain accounts"),
    ("2", "Deny all accounts"),
];

const NTLM_RESTRICT_OUTGOING: OptionTable = &[
    ("0", "Allow all"),
    ("1", "Audit all"),
    ("2", "Deny all"),
];

const KEY_PROTECTION: OptionTable = &[
    ("0", "User input is not required when new keys are stored and used"),
    ("1", "User is prompted when the key is first used"),
    ("2", "User must enter a password each time they use a key"),
];

const ADMIN_ELEVATION_PROMPT: OptionTable = &[
    ("0", "Elevate without prompting"),
    ("1", "Prompt for credentials on the secure desktop"),
    ("2", "Prompt for consent on the secure desktop"),
    ("3", "Prompt for credentials"),
    ("4", "Prompt for consent"),
    ("5", "Prompt for consent for non-Windows binaries"),
];

const USER_ELEVATION_PROMPT: OptionTable = &[
    ("0", "Automatically deny elevation requests"),
    ("1", "Prompt for credentials on the secure desktop"),
    ("3", "Prompt for credentials"),
];

// ============================================================================
// ENTRIES
// ============================================================================

const fn sa(
    display_name: &'static str,
    machine_name: &'static str,
    kind: DataKind,
    default_value: Option<&'static str>,
) -> PolicyDefinition {
    PolicyDefinition::system_access(display_name, machine_name, kind, default_value)
}

const fn audit(display_name: &'static str, machine_name: &'static str) -> PolicyDefinition {
    PolicyDefinition::event_audit(display_name, machine_name)
}

const fn right(
    display_name: &'static str,
    machine_name: &'static str,
    default_value: &'static str,
) -> PolicyDefinition {
    PolicyDefinition::privilege_right(display_name, machine_name, default_value)
}

const fn reg(
    display_name: &'static str,
    machine_name: &'static str,
    registry_type: RegistryType,
    kind: DataKind,
) -> PolicyDefinition {
    PolicyDefinition::registry_value(display_name, machine_name, registry_type, kind, None)
}

pub(super) static ENTRIES: &[PolicyDefinition] = &[
    // Password and account lockout policy
    sa("Enforce password history", "PasswordHistorySize", Integer, Some("0")),
    sa("Maximum password age", "MaximumPasswordAge", Integer, Some("42")),
    sa("Minimum password age", "MinimumPasswordAge", Integer, Some("0")),
    sa("Minimum password length", "MinimumPasswordLength", Integer, Some("0")),
    sa("Password must meet complexity requirements", "PasswordComplexity", Boolean, Some("enabled")),
    sa("Store passwords using reversible encryption", "ClearTextPassword", Boolean, Some("disabled")),
    sa("Account lockout duration", "LockoutDuration", Integer, Some("30")),
    sa("Account lockout threshold", "LockoutBadCount", Integer, Some("0")),
    sa("Reset account lockout counter after", "ResetLockoutCount", Integer, Some("30")),
    // Audit policy
    audit("Audit account logon events", "AuditAccountLogon"),
    audit("Audit account management", "AuditAccountManage"),
    audit("Audit directory service access", "AuditDSAccess"),
    audit("Audit logon events", "AuditLogonEvents"),
    audit("Audit object access", "AuditObjectAccess"),
    audit("Audit policy change", "AuditPolicyChange"),
    audit("Audit privilege use", "AuditPrivilegeUse"),
    audit("Audit process tracking", "AuditProcessTracking"),
    audit("Audit system events", "AuditSystemEvents"),
    // User rights assignment
    right("Access Credential Manager as a trusted caller", "SeTrustedCredManAccessPrivilege", ""),
    right("Access this computer from the network", "SeNetworkLogonRight", "*S-1-1-0,*S-1-5-32-544,*S-1-5-32-545,*S-1-5-32-551"),
    right("Act as part of the operating system", "SeTcbPrivilege", ""),
    right("Add workstations to domain", "SeMachineAccountPrivilege", ""),
    right("Adjust memory quotas for a process", "SeIncreaseQuotaPrivilege", "*S-1-5-19,*S-1-5-20,*S-1-5-32-544"),
    right("Allow log on locally", "SeInteractiveLogonRight", "*S-1-5-32-544,*S-1-5-32-545,*S-1-5-32-551"),
    right("Allow log on through Remote Desktop Services", "SeRemoteInteractiveLogonRight", "*S-1-5-32-544,*S-1-5-32-555"),
    right("Back up files and directories", "SeBackupPrivilege", "*S-1-5-32-544,*S-1-5-32-551"),
    right("Bypass traverse checking", "SeChangeNotifyPrivilege", "*S-1-1-0,*S-1-5-19,*S-1-5-20,*S-1-5-32-544,*S-1-5-32-545,*S-1-5-32-551"),
    right("Change the system time", "SeSystemtimePrivilege", "*S-1-5-19,*S-1-5-32-544"),
    right("Change the time zone", "SeTimeZonePrivilege", "*S-1-5-19,*S-1-5-32-544"),
    right("Create a pagefile", "SeCreatePagefilePrivilege", "*S-1-5-32-544"),
    right("Create a token object", "SeCreateTokenPrivilege", ""),
    right("Create global objects", "SeCreateGlobalPrivilege", "*S-1-5-19,*S-1-5-20,*S-1-5-32-544,*S-1-5-6"),
    right("Create permanent shared objects", "SeCreatePermanentPrivilege", ""),
    right("Create symbolic links", "SeCreateSymbolicLinkPrivilege", "*S-1-5-32-544"),
    right("Debug programs", "SeDebugPrivilege", "*S-1-5-32-544"),
    right("Deny access to this computer from the network", "SeDenyNetworkLogonRight", ""),
    right("Deny log on as a batch job", "SeDenyBatchLogonRight", ""),
    right("Deny log on as a service", "SeDenyServiceLogonRight", ""),
    right("Deny log on locally", "SeDenyInteractiveLogonRight", ""),
    right("Deny log on through Remote Desktop Services", "SeDenyRemoteInteractiveLogonRight", ""),
    right("Enable computer and user accounts to be trusted for delegation", "SeEnableDelegationPrivilege", ""),
    right("Force shutdown from a remote system", "SeRemoteShutdownPrivilege", "*S-1-5-32-544"),
    right("Generate security audits", "SeAuditPrivilege", "*S-1-5-19,*S-1-5-20"),
    right("Impersonate a client after authentication", "SeImpersonatePrivilege", "*S-1-5-19,*S-1-5-20,*S-1-5-32-544,*S-1-5-6"),
    right("Increase a process working set", "SeIncreaseWorkingSetPrivilege", "*S-1-5-32-545"),
    right("Increase scheduling priority", "SeIncreaseBasePriorityPrivilege", "*S-1-5-32-544"),
    right("Load and unload device drivers", "SeLoadDriverPrivilege", "*S-1-5-32-544"),
    right("Lock pages in memory", "SeLockMemoryPrivilege", ""),
    right("Log on as a batch job", "SeBatchLogonRight", "*S-1-5-32-544,*S-1-5-32-551,*S-1-5-32-559"),
    right("Log on as a service", "SeServiceLogonRight", "*S-1-5-80-0"),
    right("Manage auditing and security log", "SeSecurityPrivilege", "*S-1-5-32-544"),
    right("Modify an object label", "SeRelabelPrivilege", ""),
    right("Modify firmware environment values", "SeSystemEnvironmentPrivilege", "*S-1-5-32-544"),
    right("Obtain an impersonation token for another user in the same session", "SeDelegateSessionUserImpersonatePrivilege", "*S-1-5-32-544"),
    right("Perform volume maintenance tasks", "SeManageVolumePrivilege", "*S-1-5-32-544"),
    right("Profile single process", "SeProfileSingleProcessPrivilege", "*S-1-5-32-544"),
    right("Profile system performance", "SeSystemProfilePrivilege", "*S-1-5-32-544,*S-1-5-80-3139157870-2983391045-3678747466-658725712-1809340420"),
    right("Remove computer from docking station", "SeUndockPrivilege", "*S-1-5-32-544"),
    right("Replace a process level token", "SeAssignPrimaryTokenPrivilege", "*S-1-5-19,*S-1-5-20"),
    right("Restore files and directories", "SeRestorePrivilege", "*S-1-5-32-544,*S-1-5-32-551"),
    right("Shut down the system", "SeShutdownPrivilege", "*S-1-5-32-544,*S-1-5-32-551"),
    right("Synchronize directory service data", "SeSyncAgentPrivilege", ""),
    right("Take ownership of files or other objects", "SeTakeOwnershipPrivilege", "*S-1-5-32-544"),
    // Security options
    sa("Accounts: Administrator account status", "EnableAdminAccount", Boolean, Some("enabled")),
    reg("Accounts: Block Microsoft accounts", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\NoConnectedUser", Dword, MultiSelect(BLOCK_MICROSOFT_ACCOUNTS)),
    sa("Accounts: Guest account status", "EnableGuestAccount", Boolean, Some("disabled")),
    reg("Accounts: Limit local account use of blank passwords to console logon only", r"MACHINE\System\CurrentControlSet\Control\Lsa\LimitBlankPasswordUse", Dword, Boolean),
    sa("Accounts: Rename administrator account", "NewAdministratorName", STRING, Some("Administrator")),
    sa("Accounts: Rename guest account", "NewGuestName", STRING, Some("Guest")),
    reg("Audit: Audit the access of global system objects", r"MACHINE\System\CurrentControlSet\Control\Lsa\AuditBaseObjects", Dword, Boolean),
    reg("Audit: Audit the use of Backup and Restore privilege", r"MACHINE\System\CurrentControlSet\Control\Lsa\FullPrivilegeAuditing", Binary, Boolean),
    reg("Audit: Force audit policy subcategory settings (Windows Vista or later) to override audit policy category settings", r"MACHINE\System\CurrentControlSet\Control\Lsa\SCENoApplyLegacyAuditPolicy", Dword, Boolean),
    reg("Audit: Shut down system immediately if unable to log security audits", r"MACHINE\System\CurrentControlSet\Control\Lsa\CrashOnAuditFail", Dword, Boolean),
    reg("DCOM: Machine Access Restrictions in Security Descriptor Definition Language (SDDL) syntax", r"MACHINE\Software\Policies\Microsoft\Windows NT\DCOM\MachineAccessRestriction", Sz, STRING),
    reg("DCOM: Machine Launch Restrictions in Security Descriptor Definition Language (SDDL) syntax", r"MACHINE\Software\Policies\Microsoft\Windows NT\DCOM\MachineLaunchRestriction", Sz, STRING),
    reg("Devices: Allow undock without having to log on", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\UndockWithoutLogon", Dword, Boolean),
    reg("Devices: Allowed to format and eject removable media", r"MACHINE\Software\Microsoft\Windows NT\CurrentVersion\Winlogon\AllocateDASD", Sz, MultiSelect(ALLOCATE_DASD)),
    reg("Devices: Prevent users from installing printer drivers", r"MACHINE\System\CurrentControlSet\Control\Print\Providers\LanMan Print Services\Servers\AddPrinterDrivers", Dword, Boolean),
    reg("Devices: Restrict CD-ROM access to locally logged-on user only", r"MACHINE\Software\Microsoft\Windows NT\CurrentVersion\Winlogon\AllocateCDRoms", Sz, Boolean),
    reg("Devices: Restrict floppy access to locally logged-on user only", r"MACHINE\Software\Microsoft\Windows NT\CurrentVersion\Winlogon\AllocateFloppies", Sz, Boolean),
    reg("Domain member: Digitally encrypt or sign secure channel data (always)", r"MACHINE\System\CurrentControlSet\Services\Netlogon\Parameters\RequireSignOrSeal", Dword, Boolean),
    reg("Domain member: Digitally encrypt secure channel data (when possible)", r"MACHINE\System\CurrentControlSet\Services\Netlogon\Parameters\SealSecureChannel", Dword, Boolean),
    reg("Domain member: Digitally sign secure channel data (when possible)", r"MACHINE\System\CurrentControlSet\Services\Netlogon\Parameters\SignSecureChannel", Dword, Boolean),
    reg("Domain member: Disable machine account password changes", r"MACHINE\System\CurrentControlSet\Services\Netlogon\Parameters\DisablePasswordChange", Dword, Boolean),
    reg("Domain member: Maximum machine account password age", r"MACHINE\System\CurrentControlSet\Services\Netlogon\Parameters\MaximumPasswordAge", Dword, Integer),
    reg("Domain member: Require strong (Windows 2000 or later) session key", r"MACHINE\System\CurrentControlSet\Services\Netlogon\Parameters\RequireStrongKey", Dword, Boolean),
    reg("Interactive logon: Display user information when the session is locked", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\DontDisplayLockedUserId", Dword, MultiSelect(LOCKED_USER_DISPLAY)),
    reg("Interactive logon: Do not display last user name", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\DontDisplayLastUserName", Dword, Boolean),
    reg("Interactive logon: Don't display username at sign-in", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\DontDisplayUserName", Dword, Boolean),
    reg("Interactive logon: Do not require CTRL+ALT+DEL", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\DisableCAD", Dword, Boolean),
    reg("Interactive logon: Message title for users attempting to log on", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\LegalNoticeCaption", Sz, STRING),
    reg("Interactive logon: Message text for users attempting to log on", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\LegalNoticeText", MultiSz, STRING),
    reg("Interactive logon: Number of previous logons to cache (in case domain controller is not available)", r"MACHINE\Software\Microsoft\Windows NT\CurrentVersion\Winlogon\CachedLogonsCount", Sz, Integer),
    reg("Interactive logon: Prompt user to change password before expiration", r"MACHINE\Software\Microsoft\Windows NT\CurrentVersion\Winlogon\PasswordExpiryWarning", Dword, Integer),
    reg("Interactive logon: Require Domain Controller authentication to unlock workstation", r"MACHINE\Software\Microsoft\Windows NT\CurrentVersion\Winlogon\ForceUnlockLogon", Dword, Boolean),
    reg("Interactive logon: Require smart card", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\ScForceOption", Dword, Boolean),
    reg("Interactive logon: Smart card removal behavior", r"MACHINE\Software\Microsoft\Windows NT\CurrentVersion\Winlogon\ScRemoveOption", Sz, MultiSelect(SMART_CARD_REMOVAL)),
    reg("Interactive logon: Machine inactivity limit", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\InactivityTimeoutSecs", Dword, Integer),
    reg("Interactive logon: Machine account lockout threshold", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\MaxDevicePasswordFailedAttempts", Dword, Integer),
    reg("Microsoft network client: Digitally sign communications (always)", r"MACHINE\System\CurrentControlSet\Services\LanmanWorkstation\Parameters\RequireSecuritySignature", Dword, Boolean),
    reg("Microsoft network client: Digitally sign communications (if server agrees)", r"MACHINE\System\CurrentControlSet\Services\LanmanWorkstation\Parameters\EnableSecuritySignature", Dword, Boolean),
    reg("Microsoft network client: Send unencrypted password to third-party SMB servers", r"MACHINE\System\CurrentControlSet\Services\LanmanWorkstation\Parameters\EnablePlainTextPassword", Dword, Boolean),
    reg("Microsoft network server: Amount of idle time required before suspending session", r"MACHINE\System\CurrentControlSet\Services\LanManServer\Parameters\AutoDisconnect", Dword, Integer),
    reg("Microsoft network server: Digitally sign communications (always)", r"MACHINE\System\CurrentControlSet\Services\LanManServer\Parameters\RequireSecuritySignature", Dword, Boolean),
    reg("Microsoft network server: Digitally sign communications (if client agrees)", r"MACHINE\System\CurrentControlSet\Services\LanManServer\Parameters\EnableSecuritySignature", Dword, Boolean),
    reg("Microsoft network server: Disconnect clients when logon hours expire", r"MACHINE\System\CurrentControlSet\Services\LanManServer\Parameters\EnableForcedLogOff", Dword, Boolean),
    reg("Microsoft network server: Server SPN target name validation level", r"MACHINE\System\CurrentControlSet\Services\LanManServer\Parameters\SmbServerNameHardeningLevel", Dword, MultiSelect(SPN_VALIDATION_LEVEL)),
    sa("Network access: Allow anonymous SID/name translation", "LSAAnonymousNameLookup", Boolean, None),
    reg("Network access: Do not allow anonymous enumeration of SAM accounts", r"MACHINE\System\CurrentControlSet\Control\Lsa\RestrictAnonymousSAM", Dword, Boolean),
    reg("Network access: Do not allow anonymous enumeration of SAM accounts and shares", r"MACHINE\System\CurrentControlSet\Control\Lsa\RestrictAnonymous", Dword, Boolean),
    reg("Network access: Do not allow storage of passwords and credentials for network authentication", r"MACHINE\System\CurrentControlSet\Control\Lsa\DisableDomainCreds", Dword, Boolean),
    reg("Network access: Let Everyone permissions apply to anonymous users", r"MACHINE\System\CurrentControlSet\Control\Lsa\EveryoneIncludesAnonymous", Dword, Boolean),
    reg("Network access: Named Pipes that can be accessed anonymously", r"MACHINE\System\CurrentControlSet\Services\LanManServer\Parameters\NullSessionPipes", MultiSz, STRING),
    reg("Network access: Remotely accessible registry paths", r"MACHINE\System\CurrentControlSet\Control\SecurePipeServers\Winreg\AllowedExactPaths\Machine", MultiSz, STRING),
    reg("Network access: Remotely accessible registry paths and sub-paths", r"MACHINE\System\CurrentControlSet\Control\SecurePipeServers\Winreg\AllowedPaths\Machine", MultiSz, STRING),
    reg("Network access: Restrict anonymous access to Named Pipes and Shares", r"MACHINE\System\CurrentControlSet\Services\LanManServer\Parameters\RestrictNullSessAccess", Dword, Boolean),
    reg("Network access: Restrict clients allowed to make remote calls to SAM", r"MACHINE\System\CurrentControlSet\Control\Lsa\RestrictRemoteSAM", Sz, STRING),
    reg("Network access: Shares that can be accessed anonymously", r"MACHINE\System\CurrentControlSet\Services\LanManServer\Parameters\NullSessionShares", MultiSz, STRING),
    reg("Network access: Sharing and security model for local accounts", r"MACHINE\System\CurrentControlSet\Control\Lsa\ForceGuest", Dword, MultiSelect(SHARING_MODEL)),
    reg("Network security: Allow Local System to use computer identity for NTLM", r"MACHINE\System\CurrentControlSet\Control\Lsa\UseMachineId", Dword, Boolean),
    reg("Network security: Allow LocalSystem NULL session fallback", r"MACHINE\System\CurrentControlSet\Control\Lsa\MSV1_0\allownullsessionfallback", Dword, Boolean),
    reg("Network Security: Allow PKU2U authentication requests to this computer to use online identities", r"MACHINE\System\CurrentControlSet\Control\Lsa\pku2u\AllowOnlineID", Dword, Boolean),
    reg("Network security: Configure encryption types allowed for Kerberos", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\Kerberos\Parameters\SupportedEncryptionTypes", Dword, MultiSelect(KERBEROS_ENCRYPTION_TYPES)),
    reg("Network security: Do not store LAN Manager hash value on next password change", r"MACHINE\System\CurrentControlSet\Control\Lsa\NoLMHash", Dword, Boolean),
    sa("Network security: Force logoff when logon hours expire", "ForceLogoffWhenHourExpire", Boolean, Some("disabled")),
    reg("Network security: LAN Manager authentication level", r"MACHINE\System\CurrentControlSet\Control\Lsa\LmCompatibilityLevel", Dword, MultiSelect(LAN_MANAGER_LEVEL)),
    reg("Network security: LDAP client signing requirements", r"MACHINE\System\CurrentControlSet\Services\LDAP\LDAPClientIntegrity", Dword, MultiSelect(LDAP_CLIENT_SIGNING)),
    reg("Network security: Minimum session security for NTLM SSP based (including secure RPC) clients", r"MACHINE\System\CurrentControlSet\Control\Lsa\MSV1_0\NTLMMinClientSec", Dword, MultiSelect(NTLM_SESSION_SECURITY)),
    reg("Network security: Minimum session security for NTLM SSP based (including secure RPC) servers", r"MACHINE\System\CurrentControlSet\Control\Lsa\MSV1_0\NTLMMinServerSec", Dword, MultiSelect(NTLM_SESSION_SECURITY)),
    reg("Network security: Restrict NTLM: Audit Incoming NTLM Traffic", r"MACHINE\System\CurrentControlSet\Control\Lsa\MSV1_0\AuditReceivingNTLMTraffic", Dword, MultiSelect(NTLM_AUDIT_INCOMING)),
    reg("Network security: Restrict NTLM: Incoming NTLM traffic", r"MACHINE\System\CurrentControlSet\Control\Lsa\MSV1_0\RestrictReceivingNTLMTraffic", Dword, MultiSelect(NTLM_RESTRICT_INCOMING)),
    reg("Network security: Restrict NTLM: Outgoing NTLM traffic to remote servers", r"MACHINE\System\CurrentControlSet\Control\Lsa\MSV1_0\RestrictSendingNTLMTraffic", Dword, MultiSelect(NTLM_RESTRICT_OUTGOING)),
    reg("Recovery console: Allow automatic administrative logon", r"MACHINE\Software\Microsoft\Windows NT\CurrentVersion\Setup\RecoveryConsole\SecurityLevel", Dword, Boolean),
    reg("Recovery console: Allow floppy copy and access to all drives and all folders", r"MACHINE\Software\Microsoft\Windows NT\CurrentVersion\Setup\RecoveryConsole\SetCommand", Dword, Boolean),
    reg("Shutdown: Allow system to be shut down without having to log on", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\ShutdownWithoutLogon", Dword, Boolean),
    reg("Shutdown: Clear virtual memory pagefile", r"MACHINE\System\CurrentControlSet\Control\Session Manager\Memory Management\ClearPageFileAtShutdown", Dword, Boolean),
    reg("System cryptography: Force strong key protection for user keys stored on the computer", r"MACHINE\Software\Policies\Microsoft\Cryptography\ForceKeyProtection", Dword, MultiSelect(KEY_PROTECTION)),
    reg("System cryptography: Use FIPS compliant algorithms for encryption, hashing, and signing", r"MACHINE\System\CurrentControlSet\Control\Lsa\FIPSAlgorithmPolicy\Enabled", Dword, Boolean),
    PolicyDefinition::registry_value("System objects: Require case insensitivity for non-Windows subsystems", r"MACHINE\System\CurrentControlSet\Control\Session Manager\Kernel\ObCaseInsensitive", Dword, Boolean, Some("enabled")),
    reg("System objects: Strengthen default permissions of internal system objects (e.g. Symbolic Links)", r"MACHINE\System\CurrentControlSet\Control\Session Manager\ProtectionMode", Dword, Boolean),
    reg("System settings: Optional subsystems", r"MACHINE\System\CurrentControlSet\Control\Session Manager\SubSystems\optional", MultiSz, STRING),
    reg("System settings: Use Certificate Rules on Windows Executables for Software Restriction Policies", r"MACHINE\Software\Policies\Microsoft\Windows\Safer\CodeIdentifiers\AuthenticodeEnabled", Dword, Boolean),
    reg("User Account Control: Admin Approval Mode for the Built-in Administrator account", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\FilterAdministratorToken", Dword, Boolean),
    reg("User Account Control: Allow UIAccess applications to prompt for elevation without using the secure desktop", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\EnableUIADesktopToggle", Dword, Boolean),
    reg("User Account Control: Behavior of the elevation prompt for administrators in Admin Approval Mode", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\ConsentPromptBehaviorAdmin", Dword, MultiSelect(ADMIN_ELEVATION_PROMPT)),
    reg("User Account Control: Behavior of the elevation prompt for standard users", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\ConsentPromptBehaviorUser", Dword, MultiSelect(USER_ELEVATION_PROMPT)),
    reg("User Account Control: Detect application installations and prompt for elevation", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\EnableInstallerDetection", Dword, Boolean),
    reg("User Account Control: Only elevate executable files that are signed and validated", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\ValidateAdminCodeSignatures", Dword, Boolean),
    reg("User Account Control: Only elevate UIAccess applications that are installed in secure locations", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\EnableSecureUIAPaths", Dword, Boolean),
    reg("User Account Control: Run all administrators in Admin Approval Mode", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\EnableLUA", Dword, Boolean),
    reg("User Account Control: Switch to the secure desktop when prompting for elevation", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\PromptOnSecureDesktop", Dword, Boolean),
    reg("User Account Control: Virtualize file and registry write failures to per-user locations", r"MACHINE\Software\Microsoft\Windows\CurrentVersion\Policies\System\EnableVirtualization", Dword, Boolean),
    // Ignored by the OS since Windows 2000 but still exported
    sa("Accounts: Require Login to Change Password", "RequireLogonToChangePassword", Boolean, Some("disabled")),
];
