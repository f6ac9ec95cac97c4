//! `secedit.exe` / `reg.exe` backed implementation of the tool traits

use super::command_executor::{CommandOutput, SystemCommandExecutor};
use super::traits::{PolicyExporter, PolicyImporter, RegistryEditor};
use crate::config::ToolPreferences;
use crate::error::PolicyError;
use crate::logging::codes;
use crate::{log_debug, log_error};
use std::path::Path;
use std::time::Duration;

pub struct SeceditTool {
    executor: SystemCommandExecutor,
    secedit: String,
    reg: String,
    timeout: Option<Duration>,
}

impl SeceditTool {
    pub fn new(executor: SystemCommandExecutor, preferences: &ToolPreferences) -> Self {
        Self {
            executor,
            secedit: preferences.secedit_path.clone(),
            reg: preferences.reg_path.clone(),
            timeout: Some(preferences.command_timeout()),
        }
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, PolicyError> {
        log_debug!("Running policy tool", "program" => program, "args" => args.join(" "));

        let output = self.executor.execute(program, args, self.timeout)?;
        if !output.success() {
            log_error!(codes::apply::TOOL_FAILED, "Policy tool reported failure",
                "program" => program,
                "exit_code" => output.exit_code
            );
            return Err(PolicyError::ToolFailed {
                tool: program.to_string(),
                exit_code: output.exit_code,
                stderr: failure_text(&output),
            });
        }
        Ok(output)
    }
}

/// secedit writes its errors to stdout
fn failure_text(output: &CommandOutput) -> String {
    let stderr = output.stderr.trim();
    if stderr.is_empty() {
        output.stdout.trim().to_string()
    } else {
        stderr.to_string()
    }
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

impl PolicyExporter for SeceditTool {
    fn export(&self, destination: &Path) -> Result<(), PolicyError> {
        let cfg = path_arg(destination);
        self.run(&self.secedit, &["/export", "/cfg", &cfg, "/quiet"])?;
        Ok(())
    }
}

impl PolicyImporter for SeceditTool {
    fn import(&self, database: &Path, source: &Path, log: &Path) -> Result<(), PolicyError> {
        let db = path_arg(database);
        let cfg = path_arg(source);
        let log = path_arg(log);
        self.run(
            &self.secedit,
            &["/configure", "/db", &db, "/cfg", &cfg, "/log", &log, "/quiet"],
        )?;
        Ok(())
    }
}

impl RegistryEditor for SeceditTool {
    fn delete_value(&self, key: &str, value_name: &str) -> Result<(), PolicyError> {
        self.run(&self.reg, &["delete", key, "/v", value_name, "/f"])?;
        Ok(())
    }
}
