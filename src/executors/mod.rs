//! Command executors that handle the actual logic for each command

pub mod command;
pub mod ecosystem;
pub mod install_help;
pub mod tools;
pub mod workspace;

use miette::Result;

use crate::cli::OutputFormat;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Render `report` in the requested format and print it to stdout
pub(crate) fn print_report<T>(report: &T, format: OutputFormat) -> Result<()>
where
    HumanReportGenerator: ReportGenerator<T>,
    JsonReportGenerator: ReportGenerator<T>,
{
    let output = match format {
        OutputFormat::Human => HumanReportGenerator::new().generate_report(report)?,
        OutputFormat::Json => JsonReportGenerator::new().generate_report(report)?,
    };
    print!("{output}");
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
