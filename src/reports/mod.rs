//! Report generation for the command outputs
//!
//! - human: styled console output
//! - json: pretty-printed JSON for scripts and CI

pub mod human;
pub mod json;

use crate::error::StackscoutError;

/// Renders a report subject into its final text form
pub trait ReportGenerator<T> {
    fn generate_report(&self, subject: &T) -> Result<String, StackscoutError>;
}

pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
