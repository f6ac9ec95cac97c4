//! Whitelisted subprocess execution for the Windows policy tools

use std::collections::HashSet;
use std::io::{self, Read};
use std::process::{Command, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

/// Variables copied from the parent environment by default.
///
/// `secedit` and `reg` fail in odd ways without `SystemRoot`.
pub const DEFAULT_PRESERVED_ENV: &[&str] = &["SystemRoot", "windir", "SystemDrive", "TEMP", "TMP"];

/// Executes system commands with security controls and timeout enforcement
#[derive(Debug, Clone)]
pub struct SystemCommandExecutor {
    default_timeout: Duration,
    allowed_commands: HashSet<String>,
    search_path: Option<String>,
    preserved_env: Vec<String>,
}

impl Default for SystemCommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCommandExecutor {
    /// Create executor with empty whitelist - must be configured before use
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(60))
    }

    /// Create executor with custom timeout and empty whitelist
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            default_timeout: timeout,
            allowed_commands: HashSet::new(),
            search_path: None,
            preserved_env: DEFAULT_PRESERVED_ENV.iter().map(|v| v.to_string()).collect(),
        }
    }

    /// Restrict `PATH` for child processes
    pub fn set_search_path(&mut self, path: impl Into<String>) {
        self.search_path = Some(path.into());
    }

    /// Copy an extra variable from the parent environment into children
    pub fn preserve_env(&mut self, name: impl Into<String>) {
        self.preserved_env.push(name.into());
    }

    /// Add command to whitelist
    pub fn allow_command(&mut self, command: impl Into<String>) {
        self.allowed_commands.insert(command.into());
    }

    /// Add multiple commands to whitelist
    pub fn allow_commands(&mut self, commands: &[&str]) {
        for cmd in commands {
            self.allowed_commands.insert(cmd.to_string());
        }
    }

    /// Check if command is whitelisted
    pub fn is_allowed(&self, command: &str) -> bool {
        self.allowed_commands.contains(command)
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Execute command with timeout and capture output
    pub fn execute(
        &self,
        program: &str,
        args: &[&str],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput, CommandError> {
        if !self.allowed_commands.contains(program) {
            return Err(CommandError::SecurityViolation {
                reason: format!("Command '{}' not in whitelist", program),
            });
        }

        let timeout_duration = timeout.unwrap_or(self.default_timeout);
        let start = Instant::now();

        let mut cmd = Command::new(program);
        cmd.args(args)
            .env_clear()
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        for name in &self.preserved_env {
            if let Some(value) = std::env::var_os(name) {
                cmd.env(name, value);
            }
        }
        if let Some(path) = &self.search_path {
            cmd.env("PATH", path);
        }

        let mut child = cmd.spawn().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CommandError::ProgramNotFound {
                program: program.to_string(),
            },
            std::io::ErrorKind::PermissionDenied => CommandError::PermissionDenied {
                program: program.to_string(),
            },
            _ => CommandError::ExecutionFailed {
                program: program.to_string(),
                reason: e.to_string(),
            },
        })?;

        // Drain both pipes while waiting so a chatty child never blocks on a full buffer
        let stdout_reader = spawn_reader(child.stdout.take());
        let stderr_reader = spawn_reader(child.stderr.take());

        let result = match wait_timeout::ChildExt::wait_timeout(&mut child, timeout_duration) {
            Ok(result) => result,
            Err(e) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(CommandError::ExecutionFailed {
                    program: program.to_string(),
                    reason: e.to_string(),
                });
            }
        };

        match result {
            Some(status) => {
                let stdout = collect_reader(stdout_reader, program)?;
                let stderr = collect_reader(stderr_reader, program)?;

                Ok(CommandOutput {
                    stdout: String::from_utf8_lossy(&stdout).to_string(),
                    stderr: String::from_utf8_lossy(&stderr).to_string(),
                    exit_code: status.code().unwrap_or(-1),
                    duration: start.elapsed(),
                })
            }
            None => {
                let _ = child.kill();
                let _ = child.wait();
                let _ = collect_reader(stdout_reader, program);
                let _ = collect_reader(stderr_reader, program);
                Err(CommandError::Timeout {
                    program: program.to_string(),
                    timeout_ms: timeout_duration.as_millis() as u64,
                })
            }
        }
    }
}

type PipeReader = Option<JoinHandle<io::Result<Vec<u8>>>>;

fn spawn_reader<R: Read + Send + 'static>(pipe: Option<R>) -> PipeReader {
    pipe.map(|mut pipe| {
        thread::spawn(move || {
            let mut buffer = Vec::new();
            pipe.read_to_end(&mut buffer)?;
            Ok(buffer)
        })
    })
}

fn collect_reader(reader: PipeReader, program: &str) -> Result<Vec<u8>, CommandError> {
    let Some(handle) = reader else {
        return Ok(Vec::new());
    };
    let failed = |reason: String| CommandError::ExecutionFailed {
        program: program.to_string(),
        reason,
    };
    handle
        .join()
        .map_err(|_| failed("output reader panicked".to_string()))?
        .map_err(|e| failed(e.to_string()))
}

/// Command execution output
#[derive(Debug, Clone)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
    pub duration: Duration,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Command execution errors
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Program not found: {program}")]
    ProgramNotFound { program: String },

    #[error("Execution failed for '{program}': {reason}")]
    ExecutionFailed { program: String, reason: String },

    #[error("'{program}' timed out after {timeout_ms}ms")]
    Timeout { program: String, timeout_ms: u64 },

    #[error("Permission denied: {program}")]
    PermissionDenied { program: String },

    #[error("Security violation: {reason}")]
    SecurityViolation { reason: String },
}
