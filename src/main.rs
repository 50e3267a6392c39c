//! desk-shell-mcp - desktop files and shell access for AI assistants
//!
//! A unified MCP server that exposes the shell tools and desktop resources in
//! one binary.

mod config;
mod server;

use rmcp::{transport::stdio, ServiceExt};

use config::AppConfig;
use server::DeskServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env();
    tracing::info!(
        command_timeout_secs = config.shell.command_timeout.as_secs(),
        fetch_url = %config.shell.fetch.url,
        desktop_candidates = ?config.desktop.candidates,
        "desk-shell-mcp starting..."
    );

    let server = DeskServer::new(config);
    let service = server.serve(stdio()).await?;
    service.waiting().await?;

    tracing::info!("desk-shell-mcp stopped");
    Ok(())
}
