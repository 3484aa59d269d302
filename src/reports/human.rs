//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::commands::command::CommandReport;
use crate::commands::ecosystem::EcosystemReport;
use crate::commands::install_help::InstallHelpReport;
use crate::commands::tools::ToolsReport;
use crate::commands::workspace::WorkspaceReport;
use crate::ecosystem::Ecosystem;
use crate::error::StackscoutError;
use crate::utils::string::pluralize;

#[derive(Debug, Default, Clone, Copy)]
pub struct HumanReportGenerator;

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

fn ecosystem_label(ecosystem: Option<Ecosystem>) -> &'static str {
    ecosystem.map_or("unknown", |eco| eco.definition().display_name)
}

impl ReportGenerator<WorkspaceReport> for HumanReportGenerator {
    fn generate_report(&self, report: &WorkspaceReport) -> Result<String, StackscoutError> {
        let mut output = String::new();

        let Some(workspace) = &report.workspace else {
            writeln!(
                output,
                "{} {} is not inside a workspace",
                style("ℹ").blue(),
                style(report.start.display()).bold()
            )?;
            return Ok(output);
        };

        writeln!(
            output,
            "{} {} workspace at {}",
            style("📦").blue(),
            style(workspace.kind).cyan().bold(),
            style(workspace.root.display()).bold()
        )?;

        let count = workspace.packages.len();
        if count == 0 {
            writeln!(output, "  {} No member packages found", style("→").dim())?;
            return Ok(output);
        }

        writeln!(
            output,
            "  {} {} {}:",
            style("→").dim(),
            style(count).yellow().bold(),
            pluralize("package", count)
        )?;

        let width = workspace
            .packages
            .iter()
            .map(|package| package.name.len())
            .max()
            .unwrap_or(0);

        for package in &workspace.packages {
            let relative = package
                .path
                .strip_prefix(&workspace.root)
                .unwrap_or(&package.path);
            write!(
                output,
                "    {} {:<width$}  {:<7} {}",
                style("•").dim(),
                style(&package.name).bold(),
                ecosystem_label(package.ecosystem),
                style(relative.display()).dim()
            )?;
            if let Some(manager) = package.package_manager {
                write!(output, " ({})", manager.as_str())?;
            }
            if let Some(tool) = package.build_tool {
                write!(output, " ({})", tool.as_str())?;
            }
            writeln!(output)?;
        }

        Ok(output)
    }
}

impl ReportGenerator<EcosystemReport> for HumanReportGenerator {
    fn generate_report(&self, report: &EcosystemReport) -> Result<String, StackscoutError> {
        let mut output = String::new();

        match report.ecosystem {
            Some(ecosystem) => writeln!(
                output,
                "{} {} is a {} project",
                style("🧭").cyan(),
                style(report.path.display()).bold(),
                style(ecosystem.definition().display_name).green().bold()
            )?,
            None => {
                writeln!(
                    output,
                    "{} No known ecosystem at {}",
                    style("✗").red(),
                    style(report.path.display()).bold()
                )?;
                return Ok(output);
            }
        }

        if let Some(manager) = report.package_manager {
            writeln!(
                output,
                "  {} Package manager: {}",
                style("→").dim(),
                manager.as_str()
            )?;
        }
        if let Some(tool) = report.build_tool {
            let wrapper = if report.wrapper == Some(true) {
                style("wrapper present").green()
            } else {
                style("no wrapper").yellow()
            };
            writeln!(
                output,
                "  {} Build tool: {} ({wrapper})",
                style("→").dim(),
                tool.as_str()
            )?;
        }
        if !report.python_package_managers.is_empty() {
            let names: Vec<&str> = report
                .python_package_managers
                .iter()
                .map(|manager| manager.as_str())
                .collect();
            writeln!(
                output,
                "  {} Package managers: {}",
                style("→").dim(),
                names.join(", ")
            )?;
        }
        if report.matches.len() > 1 {
            let names: Vec<&str> = report.matches.iter().map(|eco| eco.as_str()).collect();
            writeln!(
                output,
                "  {} Also matches: {}",
                style("→").dim(),
                names.join(", ")
            )?;
        }

        Ok(output)
    }
}

impl ReportGenerator<ToolsReport> for HumanReportGenerator {
    fn generate_report(&self, report: &ToolsReport) -> Result<String, StackscoutError> {
        let mut output = String::new();

        writeln!(
            output,
            "{} {} toolchain on {}",
            style("🔧").cyan(),
            style(report.ecosystem.definition().display_name).bold(),
            report.platform.as_str()
        )?;

        for status in &report.tools {
            let marker = if status.probe.installed {
                style("✓").green()
            } else if status.critical {
                style("✗").red().bold()
            } else {
                style("-").yellow()
            };
            let version = match (&status.probe.version, status.probe.installed) {
                (Some(version), _) => version.clone(),
                (None, true) => "installed".to_string(),
                (None, false) => "not found".to_string(),
            };
            writeln!(
                output,
                "  {marker} {:<10} {}",
                style(&status.probe.tool).bold(),
                style(version).dim()
            )?;
            if let Some(help) = &status.install_help {
                writeln!(output, "      {} {help}", style("💡").yellow())?;
            }
        }

        let missing = report.missing_critical().count();
        if missing > 0 {
            writeln!(
                output,
                "\n{} {} critical {} missing",
                style("⚠").yellow().bold(),
                style(missing).red().bold(),
                pluralize("tool", missing)
            )?;
        }

        Ok(output)
    }
}

impl ReportGenerator<CommandReport> for HumanReportGenerator {
    fn generate_report(&self, report: &CommandReport) -> Result<String, StackscoutError> {
        // Bare command so the output can be fed to a shell
        Ok(format!("{}\n", report.command))
    }
}

impl ReportGenerator<InstallHelpReport> for HumanReportGenerator {
    fn generate_report(&self, report: &InstallHelpReport) -> Result<String, StackscoutError> {
        let mut output = String::new();
        writeln!(
            output,
            "{} Installing {} on {}:",
            style("💡").yellow(),
            style(&report.tool).bold(),
            report.platform.as_str()
        )?;
        writeln!(output, "  {}", report.help)?;
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::commands::tools::ToolStatus;
    use crate::ecosystem::{NodePackageManager, ToolCategory};
    use crate::platform::Platform;
    use crate::tools::ToolProbeResult;
    use crate::workspace::{PackageDescriptor, WorkspaceConfig, WorkspaceKind, WorkspaceResult};

    fn render<T>(report: &T) -> String
    where
        HumanReportGenerator: ReportGenerator<T>,
    {
        console::strip_ansi_codes(&HumanReportGenerator.generate_report(report).unwrap())
            .into_owned()
    }

    #[test]
    fn test_workspace_listing() {
        let root = PathBuf::from("/repo");
        let report = WorkspaceReport {
            start: root.join("apps/web"),
            in_workspace: true,
            workspace: Some(WorkspaceResult {
                kind: WorkspaceKind::Pnpm,
                root: root.clone(),
                packages: vec![PackageDescriptor {
                    name: "web".to_string(),
                    path: root.join("apps/web"),
                    ecosystem: Some(Ecosystem::Node),
                    package_manager: Some(NodePackageManager::Pnpm),
                    build_tool: None,
                }],
                config: WorkspaceConfig::Pnpm {
                    packages: vec!["apps/*".to_string()],
                },
            }),
        };

        let output = render(&report);
        assert!(output.contains("pnpm workspace at /repo"));
        assert!(output.contains("1 package:"));
        assert!(output.contains("apps/web (pnpm)"));
    }

    #[test]
    fn test_not_in_workspace() {
        let report = WorkspaceReport {
            start: PathBuf::from("/tmp/loose"),
            in_workspace: false,
            workspace: None,
        };

        assert!(render(&report).contains("is not inside a workspace"));
    }

    #[test]
    fn test_tools_missing_critical() {
        let report = ToolsReport {
            ecosystem: Ecosystem::Rust,
            platform: Platform::Linux,
            tools: vec![
                ToolStatus {
                    probe: ToolProbeResult {
                        tool: "rustc".to_string(),
                        installed: false,
                        version: None,
                    },
                    category: ToolCategory::Runtime,
                    critical: true,
                    install_help: Some("Install via rustup".to_string()),
                },
                ToolStatus {
                    probe: ToolProbeResult {
                        tool: "cargo".to_string(),
                        installed: true,
                        version: Some("1.75.0".to_string()),
                    },
                    category: ToolCategory::BuildTool,
                    critical: true,
                    install_help: None,
                },
            ],
        };

        let output = render(&report);
        assert!(output.contains("1.75.0"));
        assert!(output.contains("Install via rustup"));
        assert!(output.contains("1 critical tool missing"));
    }
}
