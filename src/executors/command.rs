//! Command-generation executor

use miette::Result;

use crate::commands::command::CommandReport;
use crate::config::CommandGenerationConfig;
use crate::executors::{CommandExecutor, print_report};

pub struct CommandGenerationExecutor;

impl CommandExecutor for CommandGenerationExecutor {
    type Config = CommandGenerationConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let report = CommandReport::generate(&config);
        print_report(&report, config.format)
    }
}
