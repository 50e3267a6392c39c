use std::time::Duration;

use tokio::process::Command;
use tracing::{info, warn};

use crate::config::DEFAULT_TIMEOUT;
use crate::process::{run_with_deadline, ExecutionResult, RunError};

impl ExecutionResult {
    /// Render as `STDOUT:` / `STDERR:` sections (each only when non-empty)
    /// followed by the `Return code:` line.
    pub fn report(&self) -> String {
        let mut output = String::new();
        if !self.stdout.is_empty() {
            output.push_str(&format!("STDOUT:\n{}\n", self.stdout));
        }
        if !self.stderr.is_empty() {
            output.push_str(&format!("STDERR:\n{}\n", self.stderr));
        }
        output.push_str(&format!("Return code: {}", self.exit_code));
        output
    }
}

/// Runs arbitrary command lines through the host shell.
#[derive(Debug, Clone)]
pub struct CommandExecutor {
    shell: String,
    timeout: Duration,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_TIMEOUT)
    }
}

impl CommandExecutor {
    pub fn new(timeout: Duration) -> Self {
        Self::with_shell(default_shell(), timeout)
    }

    /// Use `shell` instead of the platform shell; it is invoked as
    /// `<shell> -c <command>` (`/C` when the platform is Windows).
    pub fn with_shell(shell: impl Into<String>, timeout: Duration) -> Self {
        Self {
            shell: shell.into(),
            timeout,
        }
    }

    /// Run `command` and return the raw result.
    pub async fn run(&self, command: &str) -> Result<ExecutionResult, RunError> {
        run_with_deadline(self.shell_command(command), self.timeout).await
    }

    /// Run `command` and render the outcome; failures become error text.
    pub async fn execute(&self, command: &str) -> String {
        info!(command = %command, "Executing command");

        match self.run(command).await {
            Ok(result) => {
                info!(exit_code = result.exit_code, "Command finished");
                result.report()
            }
            Err(RunError::Timeout(deadline)) => {
                warn!(command = %command, "Command timed out");
                format!("Error: Command timed out after {} seconds", deadline.as_secs())
            }
            Err(e) => {
                warn!(command = %command, error = %e, "Command failed");
                format!("Error executing command: {}", e)
            }
        }
    }

    fn shell_command(&self, command: &str) -> Command {
        let flag = if cfg!(target_os = "windows") { "/C" } else { "-c" };
        let mut c = Command::new(&self.shell);
        c.args([flag, command]);
        c
    }
}

fn default_shell() -> &'static str {
    if cfg!(target_os = "windows") {
        "cmd"
    } else {
        "sh"
    }
}
