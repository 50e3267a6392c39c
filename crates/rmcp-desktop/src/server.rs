use rmcp::{
    handler::server::ServerHandler,
    model::*,
    service::{RequestContext, RoleServer},
    ErrorData as McpError,
};

use crate::config::DesktopConfig;
use crate::locator::DesktopLocator;
use crate::resources::DesktopResources;

#[derive(Debug, Default)]
pub struct DesktopServer {
    resources: DesktopResources,
}

impl DesktopServer {
    pub fn new(config: DesktopConfig) -> Self {
        Self {
            resources: DesktopResources::new(DesktopLocator::new(config)),
        }
    }
}

impl ServerHandler for DesktopServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_resources().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("Desktop server: exposes a desktop file and the desktop file listing as resources.".into()),
        }
    }

    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        Ok(ListResourcesResult::with_all_items(self.resources.list()))
    }

    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        self.resources.read(&request.uri).await
    }
}
