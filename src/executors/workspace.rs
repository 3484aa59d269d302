//! Workspace command executor

use miette::Result;
use tracing::debug;

use crate::commands::workspace::WorkspaceReport;
use crate::config::WorkspaceScanConfig;
use crate::executors::{CommandExecutor, print_report};

pub struct WorkspaceExecutor;

impl CommandExecutor for WorkspaceExecutor {
    type Config = WorkspaceScanConfig;

    fn execute(config: Self::Config) -> Result<()> {
        debug!(path = %config.path.display(), max_depth = config.max_depth, "scanning for workspace");

        let report = WorkspaceReport::collect(&config);
        print_report(&report, config.format)
    }
}
