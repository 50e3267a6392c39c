//! Runtime configuration for the shell and fetch tools.

use std::time::Duration;

use tracing::warn;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_FETCH_PROGRAM: &str = "curl";
pub const DEFAULT_FETCH_URL: &str = "https://example.com/";

pub const ENV_COMMAND_TIMEOUT: &str = "DESK_SHELL_COMMAND_TIMEOUT";
pub const ENV_FETCH_URL: &str = "DESK_SHELL_FETCH_URL";
pub const ENV_FETCH_PROGRAM: &str = "DESK_SHELL_FETCH_PROGRAM";
pub const ENV_FETCH_TIMEOUT: &str = "DESK_SHELL_FETCH_TIMEOUT";

/// Target and deadline of the fetch tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    /// Transfer utility invoked as `<program> -s -L <url>`.
    pub program: String,
    pub url: String,
    pub timeout: Duration,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_FETCH_PROGRAM.to_string(),
            url: DEFAULT_FETCH_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub command_timeout: Duration,
    pub fetch: FetchConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            command_timeout: DEFAULT_TIMEOUT,
            fetch: FetchConfig::default(),
        }
    }
}

impl ShellConfig {
    /// Build from `DESK_SHELL_*` environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let secs = |key: &str, default: Duration| parse_secs(non_empty(key), key, default);

        Self {
            command_timeout: secs(ENV_COMMAND_TIMEOUT, defaults.command_timeout),
            fetch: FetchConfig {
                program: non_empty(ENV_FETCH_PROGRAM).unwrap_or(defaults.fetch.program),
                url: non_empty(ENV_FETCH_URL).unwrap_or(defaults.fetch.url),
                timeout: secs(ENV_FETCH_TIMEOUT, defaults.fetch.timeout),
            },
        }
    }
}

fn parse_secs(raw: Option<String>, key: &str, default: Duration) -> Duration {
    let Some(raw) = raw else {
        return default;
    };
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Duration::from_secs(secs),
        _ => {
            warn!(key = %key, value = %raw, "Invalid timeout, using default of {}s", default.as_secs());
            default
        }
    }
}
