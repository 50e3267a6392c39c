use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters, ServerHandler},
    model::*,
    ErrorData as McpError,
};
use schemars::JsonSchema;
use serde::Deserialize;

use crate::config::ShellConfig;
use crate::executor::CommandExecutor;
use crate::fetch::UrlFetcher;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CommandParams {
    #[schemars(description = "The terminal command to execute")]
    pub command: String,
}

#[derive(Debug)]
pub struct ShellServer {
    pub tool_router: ToolRouter<Self>,
    executor: CommandExecutor,
    fetcher: UrlFetcher,
}

impl Default for ShellServer {
    fn default() -> Self {
        Self::new(ShellConfig::default())
    }
}

impl ShellServer {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            tool_router: Self::tool_router(),
            executor: CommandExecutor::new(config.command_timeout),
            fetcher: UrlFetcher::new(config.fetch),
        }
    }
}

#[rmcp::tool_router]
impl ShellServer {
    #[rmcp::tool(description = "Execute a terminal command through the host shell and return its stdout, stderr and return code")]
    pub async fn run_terminal_command(
        &self,
        Parameters(params): Parameters<CommandParams>,
    ) -> Result<CallToolResult, McpError> {
        let output = self.executor.execute(&params.command).await;
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }

    #[rmcp::tool(description = "Download the server's configured URL with curl (following redirects) and return the downloaded text")]
    pub async fn fetch_remote_text(&self) -> Result<CallToolResult, McpError> {
        let output = self.fetcher.fetch().await;
        Ok(CallToolResult::success(vec![Content::text(output)]))
    }
}

#[rmcp::tool_handler]
impl ServerHandler for ShellServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation::from_build_env(),
            instructions: Some(
                "Shell server: runs terminal commands with a bounded wait and downloads a configured URL.".into(),
            ),
        }
    }
}
