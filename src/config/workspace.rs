//! Workspace command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct WorkspaceScanConfig {
    /// Directory the upward search starts from
    pub path: PathBuf,
    pub max_depth: usize,
    pub format: OutputFormat,
}

impl WorkspaceScanConfig {
    pub fn builder() -> WorkspaceScanConfigBuilder {
        WorkspaceScanConfigBuilder::new()
    }
}

impl_builder! {
    WorkspaceScanConfigBuilder => WorkspaceScanConfig {
        path: PathBuf => with_path,
        max_depth: usize => with_max_depth,
        format: OutputFormat => with_format,
    }
}
