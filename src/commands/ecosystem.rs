//! Ecosystem command implementation

use std::path::PathBuf;

use miette::{Result, WrapErr};
use serde::Serialize;

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::EcosystemScanConfig;
use crate::ecosystem::{
    self, Ecosystem, JvmBuildTool, NodePackageManager, PythonPackageManager,
};
use crate::error::StackscoutError;

/// Classification of one directory, with the ecosystem-specific details
/// that can be inferred from the files present
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemReport {
    pub path: PathBuf,
    #[serde(serialize_with = "ecosystem::serialize_detected")]
    pub ecosystem: Option<Ecosystem>,
    /// Every ecosystem with an indicator present; only filled with `--all`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matches: Vec<Ecosystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<NodePackageManager>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_tool: Option<JvmBuildTool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapper: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub python_package_managers: Vec<PythonPackageManager>,
}

impl EcosystemReport {
    pub fn collect(config: &EcosystemScanConfig) -> Self {
        let path = config.path.as_path();
        let detected = ecosystem::detect_ecosystem(path);

        let build_tool = match detected {
            Some(Ecosystem::Jvm) => ecosystem::detect_jvm_build_tool(path),
            _ => None,
        };

        Self {
            path: path.to_path_buf(),
            ecosystem: detected,
            matches: if config.all {
                ecosystem::detect_all_ecosystems(path)
            } else {
                Vec::new()
            },
            package_manager: match detected {
                Some(Ecosystem::Node) => ecosystem::detect_node_package_manager(path),
                _ => None,
            },
            build_tool,
            wrapper: build_tool.map(|tool| ecosystem::has_wrapper(path, tool)),
            python_package_managers: match detected {
                Some(Ecosystem::Python) => ecosystem::python_package_manager_candidates(path),
                _ => Vec::new(),
            },
        }
    }
}

impl FromCommand for EcosystemScanConfig {
    fn from_command(command: Commands) -> Result<Self, StackscoutError> {
        match command {
            Commands::Ecosystem {
                common,
                all,
                format,
            } => EcosystemScanConfig::builder()
                .with_path(common.get_path())
                .with_all(all)
                .with_format(format.format)
                .build(),
            _ => Err(StackscoutError::ConfigurationError {
                message: "Invalid command type for EcosystemScanConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(EcosystemScanConfig);

/// Execute the ecosystem command
pub fn execute_ecosystem_command(command: Commands) -> Result<()> {
    let config = EcosystemScanConfig::from_command(command)
        .wrap_err("Failed to parse ecosystem command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::ecosystem::EcosystemExecutor;
    EcosystemExecutor::execute(config)
}
