//! Tools command implementation

use std::time::Duration;

use miette::{Result, WrapErr};
use serde::Serialize;

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ToolCheckConfig;
use crate::ecosystem::{Ecosystem, ToolCategory};
use crate::error::StackscoutError;
use crate::platform::Platform;
use crate::progress::ProgressReporter;
use crate::tools::{self, ProbeRunner, ToolDetector, ToolProbeResult};

/// Probe outcome for one registered tool
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolStatus {
    #[serde(flatten)]
    pub probe: ToolProbeResult,
    pub category: ToolCategory,
    pub critical: bool,
    /// Only present for tools that are missing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_help: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ToolsReport {
    pub ecosystem: Ecosystem,
    pub platform: Platform,
    pub tools: Vec<ToolStatus>,
}

impl ToolsReport {
    /// Probe every tool of the configured ecosystem in registry order.
    pub fn collect<R: ProbeRunner>(
        config: &ToolCheckConfig,
        detector: &ToolDetector<R>,
        progress: Option<&ProgressReporter>,
    ) -> Self {
        let tools = config
            .ecosystem
            .definition()
            .tools
            .iter()
            .map(|spec| {
                if let Some(p) = progress {
                    p.probing_tool(spec.name);
                }
                let probe = detector.check_tool(spec.name);
                let install_help =
                    (!probe.installed).then(|| tools::installation_help(spec.name, config.platform));
                ToolStatus {
                    probe,
                    category: spec.category,
                    critical: spec.critical,
                    install_help,
                }
            })
            .collect();

        Self {
            ecosystem: config.ecosystem,
            platform: config.platform,
            tools,
        }
    }

    pub fn missing_critical(&self) -> impl Iterator<Item = &ToolStatus> {
        self.tools
            .iter()
            .filter(|status| status.critical && !status.probe.installed)
    }
}

pub(crate) fn parse_ecosystem(name: &str) -> Result<Ecosystem, StackscoutError> {
    Ecosystem::parse(name).ok_or_else(|| StackscoutError::UnknownEcosystem {
        name: name.to_string(),
    })
}

impl FromCommand for ToolCheckConfig {
    fn from_command(command: Commands) -> Result<Self, StackscoutError> {
        match command {
            Commands::Tools {
                ecosystem,
                timeout_ms,
                platform,
                format,
            } => ToolCheckConfig::builder()
                .with_ecosystem(parse_ecosystem(&ecosystem)?)
                .with_timeout(Duration::from_millis(timeout_ms))
                .with_platform(platform.resolve()?)
                .with_format(format.format)
                .build(),
            _ => Err(StackscoutError::ConfigurationError {
                message: "Invalid command type for ToolCheckConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ToolCheckConfig);

/// Execute the tools command
pub fn execute_tools_command(command: Commands) -> Result<()> {
    let config = ToolCheckConfig::from_command(command)
        .wrap_err("Failed to parse tools command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::tools::ToolsExecutor;
    ToolsExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use crate::common::{FormatArgs, PlatformArgs};
    use crate::tools::ProbeOutput;

    struct OnlyCargo;

    impl ProbeRunner for OnlyCargo {
        fn run(&self, program: &str, _args: &[&str], _timeout: Duration) -> Option<ProbeOutput> {
            (program == "cargo").then(|| ProbeOutput {
                success: true,
                stdout: "cargo 1.75.0 (1d8b05cdd 2023-11-20)".to_string(),
                stderr: String::new(),
            })
        }
    }

    #[test]
    fn test_unknown_ecosystem_is_rejected() {
        let command = Commands::Tools {
            ecosystem: "cobol".to_string(),
            timeout_ms: 100,
            platform: PlatformArgs { platform: None },
            format: FormatArgs {
                format: OutputFormat::Human,
            },
        };

        assert!(matches!(
            ToolCheckConfig::from_command(command),
            Err(StackscoutError::UnknownEcosystem { .. })
        ));
    }

    #[test]
    fn test_collect_report() {
        let config = ToolCheckConfig::builder()
            .with_ecosystem(Ecosystem::Rust)
            .with_timeout(Duration::from_secs(1))
            .with_platform(Platform::Linux)
            .with_format(OutputFormat::Json)
            .build()
            .unwrap();
        let detector = ToolDetector::with_runner(OnlyCargo);

        let report = ToolsReport::collect(&config, &detector, None);

        let cargo = report.tools.iter().find(|t| t.probe.tool == "cargo").unwrap();
        assert_eq!(cargo.probe.version.as_deref(), Some("1.75.0"));
        assert!(cargo.install_help.is_none());

        // clippy is probed through cargo, so it reports installed as well
        let clippy = report.tools.iter().find(|t| t.probe.tool == "clippy").unwrap();
        assert!(clippy.probe.installed);

        let missing: Vec<&str> = report
            .missing_critical()
            .map(|status| status.probe.tool.as_str())
            .collect();
        assert_eq!(missing, vec!["rustc"]);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["tools"][0]["tool"], "rustc");
        assert_eq!(json["tools"][0]["installed"], false);
        assert!(json["tools"][0]["installHelp"].is_string());
    }
}
