//! Command-generation command implementation

use miette::{Result, WrapErr};
use serde::Serialize;

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::{CommandAction, CommandGenerationConfig};
use crate::ecosystem::{Ecosystem, JvmBuildTool, NodePackageManager, PythonPackageManager};
use crate::error::StackscoutError;
use crate::generator::{self, CommandConfig, Intent};

#[derive(Debug, Serialize)]
pub struct CommandReport {
    pub ecosystem: Ecosystem,
    pub intent: String,
    pub command: String,
    pub config: CommandConfig,
}

impl CommandReport {
    pub fn generate(config: &CommandGenerationConfig) -> Self {
        let command = match &config.action {
            CommandAction::Intent(intent) => {
                generator::command(config.ecosystem, *intent, &config.generator)
            }
            CommandAction::Run(script) => {
                generator::run_command(config.ecosystem, script, &config.generator)
            }
        };

        Self {
            ecosystem: config.ecosystem,
            intent: config.action.label().to_string(),
            command,
            config: config.generator,
        }
    }
}

fn parse_action(intent: &str, script: Option<String>) -> Result<CommandAction, StackscoutError> {
    if intent.trim().eq_ignore_ascii_case("run") {
        return Ok(CommandAction::Run(script.unwrap_or_default()));
    }

    Intent::parse(intent)
        .map(CommandAction::Intent)
        .ok_or_else(|| StackscoutError::UnknownIntent {
            name: intent.to_string(),
        })
}

/// `--package-manager` is read as a Node or Python manager depending on the
/// ecosystem; unknown names fall back to that ecosystem's default.
fn generator_config(
    ecosystem: Ecosystem,
    package_manager: Option<&str>,
    build_tool: Option<&str>,
    use_wrapper: bool,
) -> CommandConfig {
    let mut config = CommandConfig::default()
        .with_build_tool(JvmBuildTool::parse_or_default(build_tool))
        .with_wrapper(use_wrapper);

    match ecosystem {
        Ecosystem::Node => {
            config = config
                .with_node_package_manager(NodePackageManager::parse_or_default(package_manager));
        }
        Ecosystem::Python => {
            config = config.with_python_package_manager(PythonPackageManager::parse_or_default(
                package_manager,
            ));
        }
        Ecosystem::Rust | Ecosystem::Jvm => {}
    }

    config
}

impl FromCommand for CommandGenerationConfig {
    fn from_command(command: Commands) -> Result<Self, StackscoutError> {
        match command {
            Commands::Command {
                ecosystem,
                intent,
                script,
                package_manager,
                build_tool,
                no_wrapper,
                platform,
                format,
            } => {
                let ecosystem = super::tools::parse_ecosystem(&ecosystem)?;
                let generator = generator_config(
                    ecosystem,
                    package_manager.as_deref(),
                    build_tool.as_deref(),
                    !no_wrapper,
                )
                .with_platform(platform.resolve()?);

                CommandGenerationConfig::builder()
                    .with_ecosystem(ecosystem)
                    .with_action(parse_action(&intent, script)?)
                    .with_generator(generator)
                    .with_format(format.format)
                    .build()
            }
            _ => Err(StackscoutError::ConfigurationError {
                message: "Invalid command type for CommandGenerationConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(CommandGenerationConfig);

/// Execute the command command
pub fn execute_command_command(command: Commands) -> Result<()> {
    let config = CommandGenerationConfig::from_command(command)
        .wrap_err("Failed to parse command command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::command::CommandGenerationExecutor;
    CommandGenerationExecutor::execute(config)
}
