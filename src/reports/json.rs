//! JSON format report generation

use serde::Serialize;

use super::ReportGenerator;
use crate::error::StackscoutError;

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReportGenerator;

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl<T: Serialize> ReportGenerator<T> for JsonReportGenerator {
    fn generate_report(&self, subject: &T) -> Result<String, StackscoutError> {
        Ok(serde_json::to_string_pretty(subject)?)
    }
}
