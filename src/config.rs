use rmcp_desktop::DesktopConfig;
use rmcp_shell::ShellConfig;

/// Combined configuration of the unified server.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub shell: ShellConfig,
    pub desktop: DesktopConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            shell: ShellConfig::from_env(),
            desktop: DesktopConfig::from_env(),
        }
    }
}
