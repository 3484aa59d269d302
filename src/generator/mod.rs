//! # Command Generator
//!
//! Maps `(ecosystem, intent, config)` to a single shell-invocable command
//! string. Generation is a pure table lookup: no filesystem access and no
//! inference. Whatever package manager or build tool the caller wants must
//! be set on [`CommandConfig`].
//!
//! ```
//! use stackscout::ecosystem::{Ecosystem, JvmBuildTool};
//! use stackscout::generator::{CommandConfig, build_command};
//! use stackscout::platform::Platform;
//!
//! let config = CommandConfig::default()
//!     .with_build_tool(JvmBuildTool::Gradle)
//!     .with_platform(Platform::Windows);
//! assert_eq!(build_command(Ecosystem::Jvm, &config), "gradlew.bat build");
//! ```

mod jvm;
mod node;
mod python;
mod rust;

use std::fmt;

use serde::Serialize;

use crate::ecosystem::{Ecosystem, JvmBuildTool, NodePackageManager, PythonPackageManager};
use crate::platform::Platform;

/// What the caller wants to do with a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Install,
    Build,
    Test,
    Lint,
    Format,
}

impl Intent {
    pub const ALL: [Intent; 5] = [
        Intent::Install,
        Intent::Build,
        Intent::Test,
        Intent::Lint,
        Intent::Format,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "install" => Some(Intent::Install),
            "build" => Some(Intent::Build),
            "test" => Some(Intent::Test),
            "lint" => Some(Intent::Lint),
            "format" | "fmt" => Some(Intent::Format),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Install => "install",
            Intent::Build => "build",
            Intent::Test => "test",
            Intent::Lint => "lint",
            Intent::Format => "format",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs to command generation.
///
/// Each field only matters to its own ecosystem; Rust ignores all of them.
/// Defaults: npm, pip, Maven, wrapper enabled, host platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandConfig {
    pub node_package_manager: NodePackageManager,
    pub python_package_manager: PythonPackageManager,
    pub build_tool: JvmBuildTool,
    /// Prefer the project-local Gradle/Maven wrapper over the global binary
    pub use_wrapper: bool,
    pub platform: Platform,
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            node_package_manager: NodePackageManager::default(),
            python_package_manager: PythonPackageManager::default(),
            build_tool: JvmBuildTool::default(),
            use_wrapper: true,
            platform: Platform::current(),
        }
    }
}

impl CommandConfig {
    pub fn with_node_package_manager(mut self, manager: NodePackageManager) -> Self {
        self.node_package_manager = manager;
        self
    }

    pub fn with_python_package_manager(mut self, manager: PythonPackageManager) -> Self {
        self.python_package_manager = manager;
        self
    }

    pub fn with_build_tool(mut self, build_tool: JvmBuildTool) -> Self {
        self.build_tool = build_tool;
        self
    }

    pub fn with_wrapper(mut self, use_wrapper: bool) -> Self {
        self.use_wrapper = use_wrapper;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

/// The command for `intent` in `ecosystem`.
pub fn command(ecosystem: Ecosystem, intent: Intent, config: &CommandConfig) -> String {
    match ecosystem {
        Ecosystem::Rust => rust::command(intent),
        Ecosystem::Jvm => jvm::command(intent, config.build_tool, config.use_wrapper, config.platform),
        Ecosystem::Python => python::command(intent, config.python_package_manager),
        Ecosystem::Node => node::command(intent, config.node_package_manager),
    }
}

/// The command running `script`: an npm script, a Maven goal or Gradle
/// task, a Cargo binary, or a Python module/script.
pub fn run_command(ecosystem: Ecosystem, script: &str, config: &CommandConfig) -> String {
    let script = script.trim();
    match ecosystem {
        Ecosystem::Rust => rust::run(script),
        Ecosystem::Jvm => jvm::run(script, config.build_tool, config.use_wrapper, config.platform),
        Ecosystem::Python => python::run(script, config.python_package_manager),
        Ecosystem::Node => node::run(script, config.node_package_manager),
    }
}

pub fn install_command(ecosystem: Ecosystem, config: &CommandConfig) -> String {
    command(ecosystem, Intent::Install, config)
}

pub fn build_command(ecosystem: Ecosystem, config: &CommandConfig) -> String {
    command(ecosystem, Intent::Build, config)
}

pub fn test_command(ecosystem: Ecosystem, config: &CommandConfig) -> String {
    command(ecosystem, Intent::Test, config)
}

pub fn lint_command(ecosystem: Ecosystem, config: &CommandConfig) -> String {
    command(ecosystem, Intent::Lint, config)
}

pub fn format_command(ecosystem: Ecosystem, config: &CommandConfig) -> String {
    command(ecosystem, Intent::Format, config)
}

/// Join a program prefix and a trailing argument, dropping the space when
/// the argument is empty.
fn join(prefix: &str, argument: &str) -> String {
    if argument.is_empty() {
        prefix.to_string()
    } else {
        format!("{prefix} {argument}")
    }
}
