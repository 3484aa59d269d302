//! Install-help executor

use miette::Result;

use crate::commands::install_help::InstallHelpReport;
use crate::config::InstallHelpConfig;
use crate::executors::{CommandExecutor, print_report};

pub struct InstallHelpExecutor;

impl CommandExecutor for InstallHelpExecutor {
    type Config = InstallHelpConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let report = InstallHelpReport::lookup(&config);
        print_report(&report, config.format)
    }
}
