//! rmcp-shell: command execution and fixed-URL fetching for MCP servers.
//!
//! Both tools run a subprocess under a deadline and always answer with text;
//! failures are rendered into the returned string rather than surfaced as
//! protocol errors.

pub mod config;
pub mod executor;
pub mod fetch;
pub mod process;
mod server;

pub use config::{FetchConfig, ShellConfig};
pub use executor::CommandExecutor;
pub use fetch::UrlFetcher;
pub use process::{ExecutionResult, RunError};
pub use server::{CommandParams, ShellServer};
