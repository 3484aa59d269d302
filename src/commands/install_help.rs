//! Install-help command implementation

use miette::{Result, WrapErr};
use serde::Serialize;

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::InstallHelpConfig;
use crate::ecosystem::{self, Ecosystem};
use crate::error::StackscoutError;
use crate::platform::Platform;
use crate::tools;

#[derive(Debug, Serialize)]
pub struct InstallHelpReport {
    pub tool: String,
    pub platform: Platform,
    /// Ecosystem the tool is registered under, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ecosystem: Option<Ecosystem>,
    pub help: String,
}

impl InstallHelpReport {
    pub fn lookup(config: &InstallHelpConfig) -> Self {
        Self {
            tool: config.tool.clone(),
            platform: config.platform,
            ecosystem: ecosystem::find_tool(&config.tool).map(|(definition, _)| definition.id),
            help: tools::installation_help(&config.tool, config.platform),
        }
    }
}

impl FromCommand for InstallHelpConfig {
    fn from_command(command: Commands) -> Result<Self, StackscoutError> {
        match command {
            Commands::InstallHelp {
                tool,
                platform,
                format,
            } => InstallHelpConfig::builder()
                .with_tool(tool)
                .with_platform(platform.resolve()?)
                .with_format(format.format)
                .build(),
            _ => Err(StackscoutError::ConfigurationError {
                message: "Invalid command type for InstallHelpConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(InstallHelpConfig);

/// Execute the install-help command
pub fn execute_install_help_command(command: Commands) -> Result<()> {
    let config = InstallHelpConfig::from_command(command)
        .wrap_err("Failed to parse install-help command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::install_help::InstallHelpExecutor;
    InstallHelpExecutor::execute(config)
}
