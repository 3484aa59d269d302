//! Presence-based ecosystem classification for a single directory
//!
//! [`detect_ecosystem`] only checks whether indicator files exist. The
//! package-manager helpers below may peek into manifests, but they never
//! decide the ecosystem.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{Ecosystem, JvmBuildTool, NodePackageManager, PythonPackageManager, registry};

fn indicator_present(dir: &Path, file: &str) -> bool {
    dir.join(file).exists()
}

/// Classify `dir` by the first registered ecosystem (in ascending detection
/// priority) with at least one indicator file present. Returns `None` when
/// nothing matches or `dir` is not a directory.
pub fn detect_ecosystem(dir: &Path) -> Option<Ecosystem> {
    if !dir.is_dir() {
        return None;
    }

    let detected = registry()
        .iter()
        .find(|definition| {
            definition
                .indicator_files
                .iter()
                .any(|file| indicator_present(dir, file))
        })
        .map(|definition| definition.id);

    debug!(dir = %dir.display(), ecosystem = ?detected, "classified directory");
    detected
}

/// Every ecosystem with an indicator in `dir`, in priority order.
pub fn detect_all_ecosystems(dir: &Path) -> Vec<Ecosystem> {
    if !dir.is_dir() {
        return Vec::new();
    }

    registry()
        .iter()
        .filter(|definition| {
            definition
                .indicator_files
                .iter()
                .any(|file| indicator_present(dir, file))
        })
        .map(|definition| definition.id)
        .collect()
}

/// Whether `dir` holds a manifest of any registered ecosystem.
pub fn has_manifest(dir: &Path) -> bool {
    registry().iter().any(|definition| {
        definition
            .manifest_files
            .iter()
            .any(|file| dir.join(file).is_file())
    })
}

/// Infer the Node package manager for `dir`.
///
/// The `packageManager` field of `package.json` wins over lockfiles since it
/// is an explicit declaration. Lockfiles are checked in
/// [`NodePackageManager::LOCKFILES`] order.
pub fn detect_node_package_manager(dir: &Path) -> Option<NodePackageManager> {
    if let Some(declared) = declared_package_manager(dir) {
        return Some(declared);
    }

    NodePackageManager::LOCKFILES
        .iter()
        .find(|(lockfile, _)| dir.join(lockfile).is_file())
        .map(|(_, manager)| *manager)
}

fn declared_package_manager(dir: &Path) -> Option<NodePackageManager> {
    let path = dir.join("package.json");
    let content = fs::read_to_string(&path).ok()?;
    let manifest: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            debug!(path = %path.display(), error = %e, "ignoring unparsable package.json");
            return None;
        }
    };

    manifest
        .get("packageManager")
        .and_then(|value| value.as_str())
        .and_then(NodePackageManager::parse)
}

/// Gradle build files take precedence over Maven ones.
pub fn detect_jvm_build_tool(dir: &Path) -> Option<JvmBuildTool> {
    const GRADLE_FILES: [&str; 5] = [
        "build.gradle",
        "build.gradle.kts",
        "settings.gradle",
        "settings.gradle.kts",
        "gradlew",
    ];
    const MAVEN_FILES: [&str; 2] = ["pom.xml", "mvnw"];

    if GRADLE_FILES.iter().any(|file| dir.join(file).exists()) {
        Some(JvmBuildTool::Gradle)
    } else if MAVEN_FILES.iter().any(|file| dir.join(file).exists()) {
        Some(JvmBuildTool::Maven)
    } else {
        None
    }
}

/// Whether the project-local wrapper script for `tool` exists in `dir`.
pub fn has_wrapper(dir: &Path, tool: JvmBuildTool) -> bool {
    let (unix, windows) = tool.wrapper_scripts();
    dir.join(unix).is_file() || dir.join(windows).is_file()
}

/// Every Python package manager with evidence in `dir`.
///
/// Several can legitimately coexist (a `uv.lock` next to a
/// `requirements.txt` export), so this returns all of them and leaves the
/// choice to the caller.
pub fn python_package_manager_candidates(dir: &Path) -> Vec<PythonPackageManager> {
    let mut candidates = Vec::new();

    if dir.join("uv.lock").is_file() {
        candidates.push(PythonPackageManager::Uv);
    }
    if dir.join("poetry.lock").is_file() || declares_poetry(dir) {
        candidates.push(PythonPackageManager::Poetry);
    }
    if dir.join("requirements.txt").is_file() || dir.join("setup.py").is_file() {
        candidates.push(PythonPackageManager::Pip);
    }

    candidates
}

fn declares_poetry(dir: &Path) -> bool {
    let Ok(content) = fs::read_to_string(dir.join("pyproject.toml")) else {
        return false;
    };

    match toml::from_str::<toml::Table>(&content) {
        Ok(table) => table
            .get("tool")
            .and_then(|tool| tool.get("poetry"))
            .is_some(),
        Err(e) => {
            debug!(dir = %dir.display(), error = %e, "ignoring unparsable pyproject.toml");
            false
        }
    }
}
