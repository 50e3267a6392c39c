use tokio::process::Command;
use tracing::{info, warn};

use crate::config::FetchConfig;
use crate::process::{run_with_deadline, RunError};

/// Downloads the configured URL through an external transfer utility.
#[derive(Debug, Clone, Default)]
pub struct UrlFetcher {
    config: FetchConfig,
}

impl UrlFetcher {
    pub fn new(config: FetchConfig) -> Self {
        Self { config }
    }

    /// Fetch the configured URL, following redirects. Always returns text;
    /// failures are rendered into the message.
    pub async fn fetch(&self) -> String {
        let FetchConfig { program, url, timeout } = &self.config;
        info!(program = %program, url = %url, "Fetching remote content");

        let mut command = Command::new(program);
        command.args(["-s", "-L", url.as_str()]);

        match run_with_deadline(command, *timeout).await {
            Ok(result) if result.exit_code == 0 => {
                if result.stdout.trim().is_empty() {
                    "Download successful but content is empty".to_string()
                } else {
                    format!("Successfully downloaded content:\n\n{}", result.stdout)
                }
            }
            Ok(result) => {
                warn!(exit_code = result.exit_code, "Transfer utility failed");
                let detail = if result.stderr.is_empty() {
                    "Unknown curl error"
                } else {
                    result.stderr.as_str()
                };
                format!(
                    "Error downloading content: {}\nReturn code: {}",
                    detail, result.exit_code
                )
            }
            Err(RunError::Timeout(deadline)) => {
                warn!(url = %url, "Download timed out");
                format!("Error: Download timed out after {} seconds", deadline.as_secs())
            }
            Err(e) if e.is_not_found() => format!(
                "Error: {program} command not found. Please make sure {program} is installed on your system"
            ),
            Err(e) => format!("Error downloading content: {}", e),
        }
    }
}
