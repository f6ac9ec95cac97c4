//! Windows command executor configuration
//!
//! Provides the whitelisted executor and tool handles used to read and write
//! local security policy.

use secpol_engine::config::ToolPreferences;
use secpol_engine::strategies::{SeceditTool, SystemCommandExecutor};
use secpol_engine::PowerShellIdentityResolver;

/// Create command executor configured for local security policy tools
///
/// Whitelist includes:
/// - secedit: policy export and import
/// - reg: registry value deletion
/// - powershell: account name and SID translation
pub fn create_windows_command_executor(tools: &ToolPreferences) -> SystemCommandExecutor {
    let mut executor = SystemCommandExecutor::with_timeout(tools.command_timeout());

    executor.allow_commands(&[
        tools.secedit_path.as_str(),
        tools.reg_path.as_str(),
        tools.powershell_path.as_str(),
    ]);
    if let Some(path) = &tools.search_path {
        executor.set_search_path(path.clone());
    }

    executor
}

pub fn create_policy_tool(tools: &ToolPreferences) -> SeceditTool {
    SeceditTool::new(create_windows_command_executor(tools), tools)
}

pub fn create_identity_resolver(tools: &ToolPreferences) -> PowerShellIdentityResolver {
    PowerShellIdentityResolver::new(
        create_windows_command_executor(tools),
        tools.powershell_path.clone(),
    )
    .with_timeout(tools.command_timeout())
}
