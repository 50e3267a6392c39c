//! rmcp-desktop: MCP server for desktop directory resources
//!
//! Run with: `rmcp-desktop` (serves on stdio)

use rmcp::ServiceExt;
use rmcp_desktop::{DesktopConfig, DesktopServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = DesktopConfig::from_env();
    tracing::info!(candidates = ?config.candidates, file = %config.file_name, "Starting rmcp-desktop server");

    let server = DesktopServer::new(config);
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    tracing::info!("rmcp-desktop server stopped");
    Ok(())
}
