//! rmcp-shell: MCP server for shell command execution
//!
//! Run with: `rmcp-shell` (serves on stdio)

use rmcp::ServiceExt;
use rmcp_shell::{ShellConfig, ShellServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ShellConfig::from_env();
    tracing::info!(
        command_timeout_secs = config.command_timeout.as_secs(),
        fetch_url = %config.fetch.url,
        "Starting rmcp-shell server"
    );

    let server = ShellServer::new(config);
    let service = server.serve(rmcp::transport::stdio()).await?;
    service.waiting().await?;

    tracing::info!("rmcp-shell server stopped");
    Ok(())
}
