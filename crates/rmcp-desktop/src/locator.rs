use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::config::DesktopConfig;

/// Resolves the desktop directory on every call; nothing is cached.
#[derive(Debug, Clone, Default)]
pub struct DesktopLocator {
    config: DesktopConfig,
}

impl DesktopLocator {
    pub fn new(config: DesktopConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DesktopConfig {
        &self.config
    }

    /// First candidate that exists, in configured order.
    pub async fn resolve(&self) -> Option<PathBuf> {
        for candidate in &self.config.candidates {
            if tokio::fs::try_exists(candidate).await.unwrap_or(false) {
                debug!(path = %candidate.display(), "Resolved desktop directory");
                return Some(candidate.clone());
            }
        }
        warn!(candidates = ?self.config.candidates, "No desktop directory found");
        None
    }

    /// Text of the fixed desktop file, or a message describing why it could
    /// not be read.
    pub async fn read_fixed_file(&self) -> String {
        let Some(desktop) = self.resolve().await else {
            return self.not_found_message();
        };

        let name = &self.config.file_name;
        let path = desktop.join(name);
        if !tokio::fs::try_exists(&path).await.unwrap_or(false) {
            return format!("Error: {} file not found at {}", name, path.display());
        }

        match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) => format!("Error reading {} file: {}", name, e),
        }
    }

    /// Names of the regular files directly inside the desktop directory, in
    /// directory enumeration order. Failures come back as a single message.
    pub async fn list_files(&self) -> Vec<String> {
        let Some(desktop) = self.resolve().await else {
            return vec![self.not_found_message()];
        };

        match regular_files(&desktop).await {
            Ok(files) => files,
            Err(e) => vec![format!("Error listing desktop files: {}", e)],
        }
    }

    fn not_found_message(&self) -> String {
        let checked: Vec<String> = self
            .config
            .candidates
            .iter()
            .map(|p| format!("'{}'", p.display()))
            .collect();
        format!(
            "Error: Desktop directory not found. Checked paths: [{}]",
            checked.join(", ")
        )
    }
}

async fn regular_files(dir: &Path) -> io::Result<Vec<String>> {
    let mut entries = tokio::fs::read_dir(dir).await?;
    let mut files = Vec::new();

    while let Some(entry) = entries.next_entry().await? {
        // Follows symlinks; dangling links are skipped.
        let is_file = tokio::fs::metadata(entry.path())
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if is_file {
            files.push(entry.file_name().to_string_lossy().into_owned());
        }
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locator(candidates: Vec<PathBuf>) -> DesktopLocator {
        DesktopLocator::new(DesktopConfig::new(candidates, "test.js"))
    }

    #[tokio::test]
    async fn first_existing_candidate_wins() {
        let missing = PathBuf::from("/definitely/not/a/desktop");
        let first = tempfile::tempdir().unwrap();
        let second = tempfile::tempdir().unwrap();

        let resolved = locator(vec![
            missing,
            first.path().to_path_buf(),
            second.path().to_path_buf(),
        ])
        .resolve()
        .await;

        assert_eq!(resolved.as_deref(), Some(first.path()));
    }

    #[tokio::test]
    async fn lists_only_regular_files() {
        let desktop = tempfile::tempdir().unwrap();
        std::fs::write(desktop.path().join("a.txt"), "alpha").unwrap();
        std::fs::create_dir(desktop.path().join("sub")).unwrap();

        let files = locator(vec![desktop.path().to_path_buf()]).list_files().await;

        assert_eq!(files, vec!["a.txt".to_string()]);
    }

    #[tokio::test]
    async fn listing_without_desktop_is_single_error() {
        let files = locator(vec![
            PathBuf::from("/no/such/desktop-a"),
            PathBuf::from("/no/such/desktop-b"),
        ])
        .list_files()
        .await;

        assert_eq!(files.len(), 1);
        assert!(files[0].contains("Error"));
        assert!(files[0].contains("/no/such/desktop-a"));
        assert!(files[0].contains("/no/such/desktop-b"));
    }

    #[tokio::test]
    async fn reads_fixed_file() {
        let desktop = tempfile::tempdir().unwrap();
        std::fs::write(desktop.path().join("test.js"), "console.log('hi');\n").unwrap();

        let content = locator(vec![desktop.path().to_path_buf()]).read_fixed_file().await;

        assert_eq!(content, "console.log('hi');\n");
    }

    #[tokio::test]
    async fn missing_fixed_file_names_full_path() {
        let desktop = tempfile::tempdir().unwrap();

        let content = locator(vec![desktop.path().to_path_buf()]).read_fixed_file().await;

        let expected = desktop.path().join("test.js");
        assert_eq!(
            content,
            format!("Error: test.js file not found at {}", expected.display())
        );
    }

    #[tokio::test]
    async fn read_without_desktop_lists_checked_paths() {
        let content = locator(vec![PathBuf::from("/no/such/desktop")])
            .read_fixed_file()
            .await;

        assert_eq!(
            content,
            "Error: Desktop directory not found. Checked paths: ['/no/such/desktop']"
        );
    }

    #[tokio::test]
    async fn checked_paths_are_quoted_in_order() {
        let files = locator(vec![PathBuf::from("/a"), PathBuf::from("/b")])
            .list_files()
            .await;

        assert_eq!(
            files,
            vec!["Error: Desktop directory not found. Checked paths: ['/a', '/b']".to_string()]
        );
    }

    #[tokio::test]
    async fn unreadable_fixed_file_is_reported() {
        let desktop = tempfile::tempdir().unwrap();
        // A directory under the fixed name exists but cannot be read as text.
        std::fs::create_dir(desktop.path().join("test.js")).unwrap();

        let content = locator(vec![desktop.path().to_path_buf()]).read_fixed_file().await;

        assert!(content.starts_with("Error reading test.js file: "));
    }
}
