//! Upward search for the directory that owns the workspace configuration

use std::path::{Path, PathBuf};

use tracing::debug;

use super::parsers::{package_json, pnpm};

/// JSON indicator files that mark a root by mere presence
const MARKER_FILES: [&str; 3] = ["nx.json", "lerna.json", "turbo.json"];

/// Whether `dir` itself carries any workspace indicator: a pnpm workspace
/// file, one of the marker files, or a `package.json` declaring a non-empty
/// `workspaces` field.
pub fn has_workspace_indicator(dir: &Path) -> bool {
    pnpm::workspace_file(dir).is_some()
        || MARKER_FILES.iter().any(|file| dir.join(file).is_file())
        || declares_workspaces(dir)
}

fn declares_workspaces(dir: &Path) -> bool {
    matches!(
        package_json::workspace_patterns(dir),
        Ok(Some(patterns)) if !patterns.is_empty()
    )
}

/// Walk upward from `start_dir` and return the first directory carrying a
/// workspace indicator.
///
/// `start_dir` is level 0; at most `max_depth` ancestors above it are
/// inspected. A start path that does not exist or is not a directory yields
/// `None`.
pub fn find_workspace_root(start_dir: &Path, max_depth: usize) -> Option<PathBuf> {
    if !start_dir.is_dir() {
        debug!(start = %start_dir.display(), "start path is not a directory");
        return None;
    }

    let start = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    for (level, dir) in start.ancestors().take(max_depth.saturating_add(1)).enumerate() {
        if has_workspace_indicator(dir) {
            debug!(root = %dir.display(), level, "found workspace root");
            return Some(dir.to_path_buf());
        }
    }

    debug!(start = %start.display(), max_depth, "no workspace root found");
    None
}
