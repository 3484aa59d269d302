//! Install-help command configuration

use crate::cli::OutputFormat;
use crate::impl_builder;
use crate::platform::Platform;

#[derive(Debug, Clone)]
pub struct InstallHelpConfig {
    pub tool: String,
    pub platform: Platform,
    pub format: OutputFormat,
}

impl InstallHelpConfig {
    pub fn builder() -> InstallHelpConfigBuilder {
        InstallHelpConfigBuilder::new()
    }
}

impl_builder! {
    InstallHelpConfigBuilder => InstallHelpConfig {
        tool: String => with_tool,
        platform: Platform => with_platform,
        format: OutputFormat => with_format,
    }
}
