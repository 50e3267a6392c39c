//! rmcp-desktop: desktop directory resources for MCP servers.

pub mod config;
pub mod locator;
pub mod resources;
mod server;

pub use config::DesktopConfig;
pub use locator::DesktopLocator;
pub use resources::{DesktopResources, DESKTOP_DIR_URI};
pub use server::DesktopServer;
