use rmcp::{model::*, ErrorData as McpError};

use crate::locator::DesktopLocator;

pub const DESKTOP_DIR_URI: &str = "dir://desktop";

/// The two desktop resources: the fixed file and the directory listing.
#[derive(Debug, Clone, Default)]
pub struct DesktopResources {
    locator: DesktopLocator,
}

impl DesktopResources {
    pub fn new(locator: DesktopLocator) -> Self {
        Self { locator }
    }

    pub fn file_uri(&self) -> String {
        format!("file://desktop/{}", self.locator.config().file_name)
    }

    pub fn list(&self) -> Vec<Resource> {
        let file_name = &self.locator.config().file_name;

        let mut file = RawResource::new(self.file_uri(), format!("desktop {}", file_name));
        file.description = Some(format!(
            "Contents of {} from the user's desktop directory",
            file_name
        ));
        file.mime_type = Some("text/plain".into());

        let mut dir = RawResource::new(DESKTOP_DIR_URI, "desktop files".to_string());
        dir.description =
            Some("Names of the regular files in the user's desktop directory (JSON array)".into());
        dir.mime_type = Some("application/json".into());

        vec![file.no_annotation(), dir.no_annotation()]
    }

    /// Text served for `uri`, or `None` when the URI is not one of ours.
    pub async fn read_text(&self, uri: &str) -> Option<String> {
        if uri == self.file_uri() {
            Some(self.locator.read_fixed_file().await)
        } else if uri == DESKTOP_DIR_URI {
            let files = self.locator.list_files().await;
            Some(serde_json::to_string(&files).unwrap_or_default())
        } else {
            None
        }
    }

    pub async fn read(&self, uri: &str) -> Result<ReadResourceResult, McpError> {
        match self.read_text(uri).await {
            Some(text) => Ok(ReadResourceResult {
                contents: vec![ResourceContents::text(text, uri)],
            }),
            None => Err(McpError::resource_not_found(
                "Resource not found",
                Some(serde_json::json!({ "uri": uri })),
            )),
        }
    }
}
