//! Ecosystem command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::impl_builder;

#[derive(Debug, Clone)]
pub struct EcosystemScanConfig {
    /// Directory to classify
    pub path: PathBuf,
    /// Report every matching ecosystem instead of only the winner
    pub all: bool,
    pub format: OutputFormat,
}

impl EcosystemScanConfig {
    pub fn builder() -> EcosystemScanConfigBuilder {
        EcosystemScanConfigBuilder::new()
    }
}

impl_builder! {
    EcosystemScanConfigBuilder => EcosystemScanConfig {
        path: PathBuf => with_path,
        all: bool => with_all,
        format: OutputFormat => with_format,
    }
}
