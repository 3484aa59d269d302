//! Entry point composing root search, config parsing and package discovery

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::discovery::{discover_nx_packages, discover_packages};
use super::parsers::{WorkspaceConfig, parse_workspace_config};
use super::root::find_workspace_root;
use super::types::{PackageDescriptor, WorkspaceKind, WorkspaceResult};
use crate::constants::search::DEFAULT_MAX_DEPTH;
use crate::ecosystem::Ecosystem;

/// Workspace resolution for one start directory.
///
/// Resolution happens inside the constructor, so every accessor reads an
/// already-computed value. Detecting again means building a new detector.
#[derive(Debug, Clone)]
pub struct WorkspaceDetector {
    start_dir: PathBuf,
    result: Option<WorkspaceResult>,
}

impl WorkspaceDetector {
    pub fn detect(start_dir: impl AsRef<Path>) -> Self {
        Self::detect_with_depth(start_dir, DEFAULT_MAX_DEPTH)
    }

    pub fn detect_with_depth(start_dir: impl AsRef<Path>, max_depth: usize) -> Self {
        let start_dir = start_dir.as_ref().to_path_buf();
        let result = resolve_workspace(&start_dir, max_depth);
        Self { start_dir, result }
    }

    pub fn start_dir(&self) -> &Path {
        &self.start_dir
    }

    pub fn result(&self) -> Option<&WorkspaceResult> {
        self.result.as_ref()
    }

    pub fn into_result(self) -> Option<WorkspaceResult> {
        self.result
    }

    pub fn is_in_workspace(&self) -> bool {
        self.result.is_some()
    }

    pub fn root(&self) -> Option<&Path> {
        self.result.as_ref().map(|result| result.root.as_path())
    }

    pub fn kind(&self) -> WorkspaceKind {
        self.result
            .as_ref()
            .map_or(WorkspaceKind::None, |result| result.kind)
    }

    pub fn config(&self) -> Option<&WorkspaceConfig> {
        self.result.as_ref().map(|result| &result.config)
    }

    pub fn packages(&self) -> &[PackageDescriptor] {
        self.result
            .as_ref()
            .map_or(&[], |result| result.packages.as_slice())
    }

    pub fn package(&self, name: &str) -> Option<&PackageDescriptor> {
        self.result.as_ref()?.package(name)
    }

    pub fn packages_by_ecosystem(&self, ecosystem: Ecosystem) -> Vec<&PackageDescriptor> {
        self.packages()
            .iter()
            .filter(|package| package.ecosystem == Some(ecosystem))
            .collect()
    }
}

/// Resolve the workspace containing `start_dir`, searching at most
/// `max_depth` ancestors for its root.
///
/// A root whose indicator files all fail to parse counts as no workspace.
pub fn resolve_workspace(start_dir: &Path, max_depth: usize) -> Option<WorkspaceResult> {
    let root = find_workspace_root(start_dir, max_depth)?;

    let Some(config) = parse_workspace_config(&root) else {
        warn!(root = %root.display(), "workspace indicators present but none could be parsed");
        return None;
    };

    let packages = match config.nx_projects() {
        Some(projects) => discover_nx_packages(&root, projects),
        None => discover_packages(&root, config.patterns()),
    };

    debug!(
        root = %root.display(),
        kind = %config.kind(),
        packages = packages.len(),
        "resolved workspace"
    );

    Some(WorkspaceResult {
        kind: config.kind(),
        root,
        packages,
        config,
    })
}

/// Whether `dir` sits inside a resolvable workspace.
pub fn is_in_workspace(dir: &Path) -> bool {
    resolve_workspace(dir, DEFAULT_MAX_DEPTH).is_some()
}
