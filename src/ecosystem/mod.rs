//! # Ecosystem Registry
//!
//! A closed set of language/runtime ecosystems, each described by one static
//! [`EcosystemDefinition`] record: which files signal it, which tools it
//! needs, how to probe their versions and how to install them.
//!
//! The registry is a plain table ordered by detection priority, so the
//! tie-breaking order between ecosystems is auditable in one place:
//!
//! | Ecosystem | Priority |
//! |-----------|----------|
//! | Rust      | 10       |
//! | JVM       | 20       |
//! | Python    | 30       |
//! | Node      | 40       |
//!
//! ## Example
//!
//! ```
//! use stackscout::ecosystem::{self, Ecosystem};
//!
//! let rust = ecosystem::definition(Ecosystem::Rust);
//! assert_eq!(rust.detection_priority, 10);
//! assert!(rust.indicator_files.contains(&"Cargo.toml"));
//!
//! let first = ecosystem::registry().first().map(|d| d.id);
//! assert_eq!(first, Some(Ecosystem::Rust));
//! ```

mod definitions;
pub mod detect;
pub mod managers;

use std::fmt;

use serde::{Serialize, Serializer};

pub use detect::{
    detect_all_ecosystems, detect_ecosystem, detect_jvm_build_tool, detect_node_package_manager,
    has_manifest, has_wrapper, python_package_manager_candidates,
};
pub use managers::{JvmBuildTool, NodePackageManager, PythonPackageManager};

use crate::platform::Platform;

/// Supported language/runtime families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    Rust,
    Jvm,
    Python,
    Node,
}

impl Ecosystem {
    pub const ALL: [Ecosystem; 4] = [
        Ecosystem::Rust,
        Ecosystem::Jvm,
        Ecosystem::Python,
        Ecosystem::Node,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "rust" | "cargo" => Some(Ecosystem::Rust),
            "jvm" | "java" | "kotlin" => Some(Ecosystem::Jvm),
            "python" | "py" => Some(Ecosystem::Python),
            "node" | "node-family" | "nodejs" | "javascript" | "typescript" => {
                Some(Ecosystem::Node)
            }
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Ecosystem::Rust => "rust",
            Ecosystem::Jvm => "jvm",
            Ecosystem::Python => "python",
            Ecosystem::Node => "node",
        }
    }

    pub fn definition(self) -> &'static EcosystemDefinition {
        definition(self)
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializes a possibly-undetected ecosystem as its id or `"unknown"`.
pub fn serialize_detected<S: Serializer>(
    ecosystem: &Option<Ecosystem>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(ecosystem.map_or("unknown", Ecosystem::as_str))
}

/// Role a tool plays inside its ecosystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolCategory {
    Runtime,
    PackageManager,
    BuildTool,
    Linter,
    Formatter,
}

/// Program and arguments used to ask a tool for its version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionProbe {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

impl VersionProbe {
    pub const fn version_flag(program: &'static str) -> Self {
        Self {
            program,
            args: &["--version"],
        }
    }

    pub fn command_line(&self) -> String {
        let mut line = self.program.to_string();
        for arg in self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub name: &'static str,
    pub category: ToolCategory,
    /// Critical tools must be present for the ecosystem to be usable
    pub critical: bool,
    pub probe: VersionProbe,
    pub install_help: &'static [(Platform, &'static str)],
    /// Used when no platform-specific entry exists
    pub fallback_help: Option<&'static str>,
}

impl ToolSpec {
    pub fn install_help_for(&self, platform: Platform) -> Option<&'static str> {
        self.install_help
            .iter()
            .find(|(p, _)| *p == platform)
            .map(|(_, help)| *help)
            .or(self.fallback_help)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct EcosystemDefinition {
    pub id: Ecosystem,
    pub display_name: &'static str,
    /// Lower is checked first when indicators of several ecosystems coexist
    pub detection_priority: u8,
    /// Presence of any of these files marks a directory as this ecosystem
    pub indicator_files: &'static [&'static str],
    /// Subset of indicators that make a directory a package of its own
    pub manifest_files: &'static [&'static str],
    pub file_extensions: &'static [&'static str],
    pub tools: &'static [ToolSpec],
}

impl EcosystemDefinition {
    pub fn critical_tools(&self) -> impl Iterator<Item = &'static ToolSpec> {
        self.tools.iter().filter(|tool| tool.critical)
    }

    pub fn optional_tools(&self) -> impl Iterator<Item = &'static ToolSpec> {
        self.tools.iter().filter(|tool| !tool.critical)
    }

    pub fn tools_in(&self, category: ToolCategory) -> impl Iterator<Item = &'static ToolSpec> {
        self.tools.iter().filter(move |tool| tool.category == category)
    }
}

// Declared in ascending detection priority.
static REGISTRY: [EcosystemDefinition; 4] = [
    definitions::rust::DEFINITION,
    definitions::jvm::DEFINITION,
    definitions::python::DEFINITION,
    definitions::node::DEFINITION,
];

/// All registered ecosystems in ascending detection priority
pub fn registry() -> &'static [EcosystemDefinition] {
    &REGISTRY
}

pub fn definition(ecosystem: Ecosystem) -> &'static EcosystemDefinition {
    match ecosystem {
        Ecosystem::Rust => &REGISTRY[0],
        Ecosystem::Jvm => &REGISTRY[1],
        Ecosystem::Python => &REGISTRY[2],
        Ecosystem::Node => &REGISTRY[3],
    }
}

/// Look up a tool by name across every ecosystem.
pub fn find_tool(name: &str) -> Option<(&'static EcosystemDefinition, &'static ToolSpec)> {
    registry().iter().find_map(|definition| {
        definition
            .tools
            .iter()
            .find(|tool| tool.name == name)
            .map(|tool| (definition, tool))
    })
}

/// Map a source file extension (without the dot) to its ecosystem.
pub fn ecosystem_for_extension(extension: &str) -> Option<Ecosystem> {
    let extension = extension.trim_start_matches('.');
    registry()
        .iter()
        .find(|definition| {
            definition
                .file_extensions
                .iter()
                .any(|ext| ext.eq_ignore_ascii_case(extension))
        })
        .map(|definition| definition.id)
}
