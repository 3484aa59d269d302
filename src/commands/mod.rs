//! Command implementations for the stackscout CLI
//!
//! This module contains the implementations for each CLI command:
//! - workspace: find the enclosing workspace and list its packages
//! - ecosystem: classify a single directory
//! - tools: probe an ecosystem's tools
//! - command: print the command for an intent
//! - install-help: show installation guidance for a tool

pub mod command;
pub mod ecosystem;
pub mod install_help;
pub mod tools;
pub mod workspace;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Workspace { .. } => workspace::execute_workspace_command(command),
        Commands::Ecosystem { .. } => ecosystem::execute_ecosystem_command(command),
        Commands::Tools { .. } => tools::execute_tools_command(command),
        Commands::Command { .. } => command::execute_command_command(command),
        Commands::InstallHelp { .. } => install_help::execute_install_help_command(command),
    }
}
