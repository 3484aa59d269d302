//! Tools command executor

use miette::Result;

use crate::commands::tools::ToolsReport;
use crate::config::ToolCheckConfig;
use crate::executors::{CommandExecutor, print_report};
use crate::progress::ProgressReporter;
use crate::tools::ToolDetector;

pub struct ToolsExecutor;

impl CommandExecutor for ToolsExecutor {
    type Config = ToolCheckConfig;

    fn execute(config: Self::Config) -> Result<()> {
        let detector = ToolDetector::new().with_timeout(config.timeout);

        // Only spin when a human is watching stderr
        let mut progress = ProgressReporter::for_terminal();
        if let Some(p) = progress.as_mut() {
            p.start_probing(
                config.ecosystem.as_str(),
                config.ecosystem.definition().tools.len(),
            );
        }

        let report = ToolsReport::collect(&config, &detector, progress.as_ref());

        if let Some(p) = progress.as_mut() {
            p.finish_probing(report.missing_critical().count());
        }

        print_report(&report, config.format)
    }
}
