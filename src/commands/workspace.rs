//! Workspace command implementation

use std::path::PathBuf;

use miette::{Result, WrapErr};
use serde::Serialize;

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::WorkspaceScanConfig;
use crate::error::StackscoutError;
use crate::workspace::{WorkspaceDetector, WorkspaceResult};

/// Outcome of a workspace scan, as reported
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceReport {
    pub start: PathBuf,
    pub in_workspace: bool,
    pub workspace: Option<WorkspaceResult>,
}

impl WorkspaceReport {
    pub fn collect(config: &WorkspaceScanConfig) -> Self {
        let detector = WorkspaceDetector::detect_with_depth(&config.path, config.max_depth);
        Self {
            start: detector.start_dir().to_path_buf(),
            in_workspace: detector.is_in_workspace(),
            workspace: detector.into_result(),
        }
    }
}

impl FromCommand for WorkspaceScanConfig {
    fn from_command(command: Commands) -> Result<Self, StackscoutError> {
        match command {
            Commands::Workspace {
                common,
                max_depth,
                format,
            } => WorkspaceScanConfig::builder()
                .with_path(common.get_path())
                .with_max_depth(max_depth)
                .with_format(format.format)
                .build(),
            _ => Err(StackscoutError::ConfigurationError {
                message: "Invalid command type for WorkspaceScanConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(WorkspaceScanConfig);

/// Execute the workspace command
pub fn execute_workspace_command(command: Commands) -> Result<()> {
    let config = WorkspaceScanConfig::from_command(command)
        .wrap_err("Failed to parse workspace command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::workspace::WorkspaceExecutor;
    WorkspaceExecutor::execute(config)
}
