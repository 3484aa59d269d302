//! Workspace data types
//!
//! Plain data produced by a resolution pass; nothing here touches the
//! filesystem.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use super::parsers::WorkspaceConfig;
use crate::ecosystem::{self, Ecosystem, JvmBuildTool, NodePackageManager};

/// Workspace tooling governing a directory tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkspaceKind {
    Pnpm,
    Nx,
    Lerna,
    Turborepo,
    Yarn,
    Npm,
    None,
}

impl WorkspaceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkspaceKind::Pnpm => "pnpm",
            WorkspaceKind::Nx => "nx",
            WorkspaceKind::Lerna => "lerna",
            WorkspaceKind::Turborepo => "turborepo",
            WorkspaceKind::Yarn => "yarn",
            WorkspaceKind::Npm => "npm",
            WorkspaceKind::None => "none",
        }
    }
}

impl fmt::Display for WorkspaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One discovered workspace member
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDescriptor {
    pub name: String,
    pub path: PathBuf,
    /// `None` when no registered ecosystem recognised the directory
    #[serde(serialize_with = "ecosystem::serialize_detected")]
    pub ecosystem: Option<Ecosystem>,
    /// Only inferred for Node packages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_manager: Option<NodePackageManager>,
    /// Only inferred for JVM packages
    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_tool: Option<JvmBuildTool>,
}

/// Outcome of resolving a directory that belongs to a workspace
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkspaceResult {
    #[serde(rename = "type")]
    pub kind: WorkspaceKind,
    pub root: PathBuf,
    pub packages: Vec<PackageDescriptor>,
    pub config: WorkspaceConfig,
}

impl WorkspaceResult {
    pub fn package(&self, name: &str) -> Option<&PackageDescriptor> {
        self.packages.iter().find(|package| package.name == name)
    }

    pub fn packages_in(&self, ecosystem: Ecosystem) -> impl Iterator<Item = &PackageDescriptor> {
        self.packages
            .iter()
            .filter(move |package| package.ecosystem == Some(ecosystem))
    }

    /// Distinct member ecosystems in priority order. Members with no
    /// detected ecosystem are left out.
    pub fn ecosystems(&self) -> Vec<Ecosystem> {
        let mut found: Vec<Ecosystem> = self
            .packages
            .iter()
            .filter_map(|package| package.ecosystem)
            .collect();
        found.sort_by_key(|eco| eco.definition().detection_priority);
        found.dedup();
        found
    }
}
