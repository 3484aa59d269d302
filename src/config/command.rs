//! Command-generation command configuration

use crate::cli::OutputFormat;
use crate::ecosystem::Ecosystem;
use crate::error::StackscoutError;
use crate::generator::{CommandConfig, Intent};

/// What to generate a command for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandAction {
    Intent(Intent),
    /// Run a named script, task or binary
    Run(String),
}

impl CommandAction {
    pub fn label(&self) -> &str {
        match self {
            CommandAction::Intent(intent) => intent.as_str(),
            CommandAction::Run(_) => "run",
        }
    }
}

/// Configuration for the command subcommand
///
/// `generator` carries the package manager, build tool, wrapper policy and
/// platform handed to the generator unchanged.
#[derive(Debug, Clone)]
pub struct CommandGenerationConfig {
    pub ecosystem: Ecosystem,
    pub action: CommandAction,
    pub generator: CommandConfig,
    pub format: OutputFormat,
}

impl CommandGenerationConfig {
    pub fn builder() -> CommandGenerationConfigBuilder {
        CommandGenerationConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct CommandGenerationConfigBuilder {
    ecosystem: Option<Ecosystem>,
    action: Option<CommandAction>,
    generator: Option<CommandConfig>,
    format: Option<OutputFormat>,
}

impl CommandGenerationConfigBuilder {
    pub fn new() -> Self {
        Self {
            ecosystem: None,
            action: None,
            generator: None,
            format: None,
        }
    }

    pub fn with_ecosystem(mut self, ecosystem: Ecosystem) -> Self {
        self.ecosystem = Some(ecosystem);
        self
    }

    pub fn with_action(mut self, action: CommandAction) -> Self {
        self.action = Some(action);
        self
    }

    pub fn with_generator(mut self, generator: CommandConfig) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

impl crate::common::ConfigBuilder for CommandGenerationConfigBuilder {
    type Config = CommandGenerationConfig;

    fn build(self) -> Result<Self::Config, StackscoutError> {
        Ok(CommandGenerationConfig {
            ecosystem: self
                .ecosystem
                .ok_or_else(|| StackscoutError::ConfigurationError {
                    message: "Missing required field: ecosystem".to_string(),
                })?,
            action: self
                .action
                .ok_or_else(|| StackscoutError::ConfigurationError {
                    message: "Missing required field: action".to_string(),
                })?,
            // an unset generator means "all defaults"
            generator: self.generator.unwrap_or_default(),
            format: self
                .format
                .ok_or_else(|| StackscoutError::ConfigurationError {
                    message: "Missing required field: format".to_string(),
                })?,
        })
    }
}
