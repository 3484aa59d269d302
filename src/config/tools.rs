//! Tools command configuration

use std::time::Duration;

use crate::cli::OutputFormat;
use crate::ecosystem::Ecosystem;
use crate::impl_builder;
use crate::platform::Platform;

#[derive(Debug, Clone)]
pub struct ToolCheckConfig {
    pub ecosystem: Ecosystem,
    /// Upper bound for each version probe
    pub timeout: Duration,
    /// Platform whose install hints are shown for missing tools
    pub platform: Platform,
    pub format: OutputFormat,
}

impl ToolCheckConfig {
    pub fn builder() -> ToolCheckConfigBuilder {
        ToolCheckConfigBuilder::new()
    }
}

impl_builder! {
    ToolCheckConfigBuilder => ToolCheckConfig {
        ecosystem: Ecosystem => with_ecosystem,
        timeout: Duration => with_timeout,
        platform: Platform => with_platform,
        format: OutputFormat => with_format,
    }
}
