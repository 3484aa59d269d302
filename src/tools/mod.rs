//! Installed-tool probing
//!
//! A tool counts as installed when its version probe exits successfully
//! within the timeout. Absence is an ordinary answer here and never an
//! error.

mod runner;

use std::collections::BTreeMap;
use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use serde::Serialize;
use tracing::debug;

pub use self::runner::{ProbeOutput, ProbeRunner, SystemRunner};
use crate::constants::probe::DEFAULT_TIMEOUT;
use crate::ecosystem::{self, Ecosystem};
use crate::platform::Platform;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+\.\d+(?:\.\d+)?").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolProbeResult {
    pub tool: String,
    pub installed: bool,
    pub version: Option<String>,
}

impl ToolProbeResult {
    fn missing(tool: &str) -> Self {
        Self {
            tool: tool.to_string(),
            installed: false,
            version: None,
        }
    }
}

/// First `major.minor[.patch]` in `text`.
pub fn parse_version(text: &str) -> Option<String> {
    VERSION_PATTERN
        .find(text)
        .map(|found| found.as_str().to_string())
}

/// Installation guidance for `tool` on `platform`, with a generic hint for
/// tools the registry does not know or has no entry for.
pub fn installation_help(tool: &str, platform: Platform) -> String {
    ecosystem::find_tool(tool)
        .and_then(|(_, spec)| spec.install_help_for(platform))
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!("Install {tool} with your system package manager and make sure it is on PATH")
        })
}

pub struct ToolDetector<R = SystemRunner> {
    runner: R,
    timeout: Duration,
}

impl Default for ToolDetector<SystemRunner> {
    fn default() -> Self {
        Self::new()
    }
}

impl ToolDetector<SystemRunner> {
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl<R: ProbeRunner> ToolDetector<R> {
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Probe a single tool. Registered tools use their own probe command;
    /// anything else is asked for `<name> --version`.
    pub fn check_tool(&self, name: &str) -> ToolProbeResult {
        let (program, args): (&str, &[&str]) = match ecosystem::find_tool(name) {
            Some((_, spec)) => (spec.probe.program, spec.probe.args),
            None => (name, &["--version"]),
        };

        let Some(output) = self.runner.run(program, args, self.timeout) else {
            return ToolProbeResult::missing(name);
        };
        if !output.success {
            debug!(tool = name, "probe exited unsuccessfully");
            return ToolProbeResult::missing(name);
        }

        // `java -version` reports on stderr
        let version = parse_version(&output.stdout).or_else(|| parse_version(&output.stderr));
        debug!(tool = name, version = ?version, "tool installed");

        ToolProbeResult {
            tool: name.to_string(),
            installed: true,
            version,
        }
    }

    /// Probe every tool registered for `ecosystem`, keyed by tool name.
    pub fn check_ecosystem_tools(&self, ecosystem: Ecosystem) -> BTreeMap<String, ToolProbeResult> {
        ecosystem
            .definition()
            .tools
            .iter()
            .map(|spec| (spec.name.to_string(), self.check_tool(spec.name)))
            .collect()
    }

    /// Names of the ecosystem's critical tools that are not installed.
    pub fn missing_critical_tools(&self, ecosystem: Ecosystem) -> Vec<&'static str> {
        ecosystem
            .definition()
            .critical_tools()
            .filter(|spec| !self.check_tool(spec.name).installed)
            .map(|spec| spec.name)
            .collect()
    }
}
