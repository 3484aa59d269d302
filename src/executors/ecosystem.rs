//! Ecosystem command executor

use miette::Result;

use crate::commands::ecosystem::EcosystemReport;
use crate::config::EcosystemScanConfig;
use crate::executors::{CommandExecutor, print_report};

pub struct EcosystemExecutor;

impl CommandExecutor for EcosystemExecutor {
    type Config = EcosystemScanConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let report = EcosystemReport::collect(&config);
        print_report(&report, config.format)
    }
}
