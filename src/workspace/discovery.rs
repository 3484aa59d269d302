//! Expansion of workspace member patterns into package descriptors

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Component, Path, PathBuf};

use glob::Pattern;
use tracing::{debug, warn};
use walkdir::WalkDir;

use super::manifest;
use super::parsers::NxProject;
use super::types::PackageDescriptor;
use crate::constants::search::{NX_PROJECT_SCAN_DEPTH, PRUNED_DIRS};
use crate::ecosystem::{self, Ecosystem};

fn is_pruned(name: &str) -> bool {
    PRUNED_DIRS.contains(&name)
}

/// Whether any component of `relative` is a pruned directory.
fn crosses_pruned_dir(relative: &Path) -> bool {
    relative.components().any(|component| match component {
        Component::Normal(name) => is_pruned(&name.to_string_lossy()),
        _ => false,
    })
}

/// A negated member pattern. `dir/**` also excludes `dir` itself, the way
/// pnpm matches it.
struct Exclude {
    pattern: Pattern,
    base: Option<Pattern>,
}

impl Exclude {
    fn new(raw: &str) -> Result<Self, glob::PatternError> {
        let pattern = normalize_pattern(raw);
        let base = match pattern.strip_suffix("/**") {
            Some(base) if !base.is_empty() => Some(Pattern::new(base)?),
            _ => None,
        };
        Ok(Self {
            pattern: Pattern::new(pattern)?,
            base,
        })
    }

    fn matches(&self, relative: &str) -> bool {
        self.pattern.matches(relative)
            || self.base.as_ref().is_some_and(|base| base.matches(relative))
    }
}

fn normalize_pattern(pattern: &str) -> &str {
    let pattern = pattern.trim();
    let pattern = pattern.strip_prefix("./").unwrap_or(pattern);
    pattern.trim_end_matches('/')
}

fn relative_str(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

/// Describe the package living in `dir`. The Node package manager falls back
/// to the workspace root's lockfile since members rarely carry their own.
pub fn describe_package(root: &Path, dir: &Path, name: Option<String>) -> PackageDescriptor {
    let ecosystem = ecosystem::detect_ecosystem(dir);

    let package_manager = match ecosystem {
        Some(Ecosystem::Node) => ecosystem::detect_node_package_manager(dir)
            .or_else(|| ecosystem::detect_node_package_manager(root)),
        _ => None,
    };
    let build_tool = match ecosystem {
        Some(Ecosystem::Jvm) => ecosystem::detect_jvm_build_tool(dir),
        _ => None,
    };

    PackageDescriptor {
        name: name.unwrap_or_else(|| manifest::package_name(dir)),
        path: dir.to_path_buf(),
        ecosystem,
        package_manager,
        build_tool,
    }
}

/// Expand glob `patterns` relative to `root` into workspace members.
///
/// Entries starting with `!` exclude whatever they match. Candidates must be
/// directories holding a manifest of some registered ecosystem; anything else
/// is skipped silently. The result is deduplicated and sorted by path.
pub fn discover_packages(root: &Path, patterns: &[String]) -> Vec<PackageDescriptor> {
    let mut includes = Vec::new();
    let mut excludes = Vec::new();

    for raw in patterns {
        match raw.trim().strip_prefix('!') {
            Some(negated) => match Exclude::new(negated) {
                Ok(exclude) => excludes.push(exclude),
                Err(e) => warn!(pattern = %raw, error = %e, "skipping invalid exclude pattern"),
            },
            None => {
                let pattern = normalize_pattern(raw);
                if !pattern.is_empty() {
                    includes.push(pattern);
                }
            }
        }
    }

    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let mut candidates = BTreeSet::new();

    for pattern in includes {
        let full = format!("{escaped_root}/{pattern}");
        let paths = match glob::glob(&full) {
            Ok(paths) => paths,
            Err(e) => {
                warn!(pattern, error = %e, "skipping invalid workspace pattern");
                continue;
            }
        };

        for path in paths.flatten() {
            if !path.is_dir() {
                continue;
            }
            let relative = path.strip_prefix(root).unwrap_or(&path);
            if crosses_pruned_dir(relative) {
                continue;
            }
            let relative = relative_str(root, &path);
            if excludes.iter().any(|exclude| exclude.matches(&relative)) {
                debug!(path = %path.display(), "excluded by negated pattern");
                continue;
            }
            if !ecosystem::has_manifest(&path) {
                debug!(path = %path.display(), "no manifest, not a package");
                continue;
            }
            candidates.insert(path);
        }
    }

    candidates
        .into_iter()
        .map(|dir| describe_package(root, &dir, None))
        .collect()
}

/// Nx members come from the `projects` map. When the map is empty the tree
/// is scanned for `project.json` files instead.
pub fn discover_nx_packages(
    root: &Path,
    projects: &BTreeMap<String, NxProject>,
) -> Vec<PackageDescriptor> {
    let mut packages: Vec<PackageDescriptor> = if projects.is_empty() {
        scan_project_files(root)
            .into_iter()
            .map(|(name, dir)| describe_package(root, &dir, Some(name)))
            .collect()
    } else {
        projects
            .iter()
            .filter_map(|(name, project)| {
                let Some(project_root) = &project.root else {
                    debug!(project = %name, "nx project without a root");
                    return None;
                };
                let dir = root.join(project_root);
                if !dir.is_dir() {
                    warn!(project = %name, path = %dir.display(), "nx project directory missing");
                    return None;
                }
                Some(describe_package(root, &dir, Some(name.clone())))
            })
            .collect()
    };

    packages.sort_by(|a, b| a.path.cmp(&b.path));
    packages
}

fn scan_project_files(root: &Path) -> Vec<(String, PathBuf)> {
    WalkDir::new(root)
        .max_depth(NX_PROJECT_SCAN_DEPTH)
        .into_iter()
        .filter_entry(|entry| !is_pruned(&entry.file_name().to_string_lossy()))
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == "project.json")
        .filter_map(|entry| {
            let dir = entry.path().parent()?.to_path_buf();
            // the workspace root itself is never a project
            if dir == root {
                return None;
            }
            let name = project_json_name(entry.path()).unwrap_or_else(|| manifest::directory_name(&dir));
            Some((name, dir))
        })
        .collect()
}

fn project_json_name(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .map_err(|e| warn!(path = %path.display(), error = %e, "unparsable project.json"))
        .ok()?;
    value.get("name")?.as_str().map(str::to_string)
}
