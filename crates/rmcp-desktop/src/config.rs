//! Desktop directory candidates and the fixed file name.

use std::path::PathBuf;

pub const DEFAULT_FILE_NAME: &str = "test.js";
/// Host desktop bind-mounted into a container.
pub const CONTAINER_DESKTOP: &str = "/app/host-desktop";

pub const ENV_DESKTOP_PATHS: &str = "DESK_SHELL_DESKTOP_PATHS";
pub const ENV_DESKTOP_FILE: &str = "DESK_SHELL_DESKTOP_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    /// Checked in order; the first one that exists wins.
    pub candidates: Vec<PathBuf>,
    pub file_name: String,
}

impl Default for DesktopConfig {
    fn default() -> Self {
        Self {
            candidates: default_candidates(),
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl DesktopConfig {
    pub fn new(candidates: Vec<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            candidates,
            file_name: file_name.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// `DESK_SHELL_DESKTOP_PATHS` uses the platform path-list separator
    /// (`:` on Unix, `;` on Windows).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let candidates = lookup(ENV_DESKTOP_PATHS)
            .map(|raw| {
                std::env::split_paths(&raw)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|paths| !paths.is_empty())
            .unwrap_or_else(default_candidates);

        let file_name = lookup(ENV_DESKTOP_FILE)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

        Self { candidates, file_name }
    }
}

fn default_candidates() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dirs) = directories::BaseDirs::new() {
        candidates.push(dirs.home_dir().join("Desktop"));
    }
    candidates.push(PathBuf::from(CONTAINER_DESKTOP));
    candidates
}
