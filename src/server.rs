use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::*,
    service::{RequestContext, RoleServer},
    ErrorData as McpError,
};
use rmcp_desktop::{DesktopLocator, DesktopResources};
use rmcp_shell::{CommandExecutor, CommandParams, UrlFetcher};

use crate::config::AppConfig;

// ============================================================================
// Unified Desk Server
// ============================================================================

#[derive(Debug)]
pub struct DeskServer {
    pub tool_router: ToolRouter<Self>,
    executor: CommandExecutor,
    fetcher: UrlFetcher,
    resources: DesktopResources,
}

impl Default for DeskServer {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl DeskServer {
    pub fn new(config: AppConfig) -> Self {
        Self {
            tool_router: Self::tool_router(),
            executor: CommandExecutor::new(config.shell.command_timeout),
            fetcher: UrlFetcher::new(config.shell.fetch),
            resources: DesktopResources::new(DesktopLocator::new(config.desktop)),
        }
    }
}

#[rmcp::tool_router]
impl DeskServer {
    // ========================================================================
    // SHELL
    // ========================================================================

    #[rmcp::tool(description = "Execute a terminal command through the host shell and return its stdout, stderr and return code")]
    pub async fn run_terminal_command(
        &self,
        Parameters(params): Parameters<CommandParams>,
    ) -> Result<CallToolResult, McpError> {
        let output = self.executor.execute(&params.command).await;
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    // ========================================================================
    // FETCH
    // ========================================================================

    #[rmcp::tool(description = "Download the server's configured URL with curl (following redirects) and return the downloaded text")]
    pub async fn fetch_remote_text(&self) -> Result<CallToolResult, McpError> {
        let output = self.fetcher.fetch().await;
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }
}

#[rmcp::tool_handler]
impl ServerHandler for DeskServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Desk Shell - runs terminal commands, downloads a configured URL, \
                 and exposes a desktop file and the desktop file listing as resources."
                    .into(),
            ),
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
