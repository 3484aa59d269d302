//! Package managers and build tools selectable per ecosystem
//!
//! Each selector parses leniently: an unset or unrecognised value falls back
//! to the documented default instead of failing.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodePackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl NodePackageManager {
    /// Parses `npm`, `pnpm`, `yarn`, `bun`, also with a corepack-style
    /// version suffix (`pnpm@8.15.0`).
    pub fn parse(value: &str) -> Option<Self> {
        let name = value.trim().split('@').next().unwrap_or_default();
        match name.to_ascii_lowercase().as_str() {
            "npm" => Some(NodePackageManager::Npm),
            "pnpm" => Some(NodePackageManager::Pnpm),
            "yarn" => Some(NodePackageManager::Yarn),
            "bun" => Some(NodePackageManager::Bun),
            _ => None,
        }
    }

    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodePackageManager::Npm => "npm",
            NodePackageManager::Pnpm => "pnpm",
            NodePackageManager::Yarn => "yarn",
            NodePackageManager::Bun => "bun",
        }
    }

    /// Lockfiles in the order they are checked during inference
    pub const LOCKFILES: [(&'static str, NodePackageManager); 4] = [
        ("bun.lockb", NodePackageManager::Bun),
        ("pnpm-lock.yaml", NodePackageManager::Pnpm),
        ("yarn.lock", NodePackageManager::Yarn),
        ("package-lock.json", NodePackageManager::Npm),
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PythonPackageManager {
    #[default]
    Pip,
    Pip3,
    Poetry,
    Uv,
}

impl PythonPackageManager {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pip" => Some(PythonPackageManager::Pip),
            "pip3" => Some(PythonPackageManager::Pip3),
            "poetry" => Some(PythonPackageManager::Poetry),
            "uv" => Some(PythonPackageManager::Uv),
            _ => None,
        }
    }

    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PythonPackageManager::Pip => "pip",
            PythonPackageManager::Pip3 => "pip3",
            PythonPackageManager::Poetry => "poetry",
            PythonPackageManager::Uv => "uv",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JvmBuildTool {
    #[default]
    Maven,
    Gradle,
}

impl JvmBuildTool {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "maven" | "mvn" => Some(JvmBuildTool::Maven),
            "gradle" => Some(JvmBuildTool::Gradle),
            _ => None,
        }
    }

    pub fn parse_or_default(value: Option<&str>) -> Self {
        value.and_then(Self::parse).unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            JvmBuildTool::Maven => "maven",
            JvmBuildTool::Gradle => "gradle",
        }
    }

    /// Globally installed binary name
    pub fn binary(self) -> &'static str {
        match self {
            JvmBuildTool::Maven => "mvn",
            JvmBuildTool::Gradle => "gradle",
        }
    }

    /// Project-local wrapper scripts as `(unix, windows)`
    pub fn wrapper_scripts(self) -> (&'static str, &'static str) {
        match self {
            JvmBuildTool::Maven => ("mvnw", "mvnw.cmd"),
            JvmBuildTool::Gradle => ("gradlew", "gradlew.bat"),
        }
    }
}

macro_rules! impl_display_via_as_str {
    ($($ty:ty),+) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

impl_display_via_as_str!(NodePackageManager, PythonPackageManager, JvmBuildTool);
