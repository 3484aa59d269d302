//! Yarn/npm `workspaces` field of the root `package.json`

use std::path::Path;

use serde_json::Value;
use tracing::warn;

use super::{WorkspaceConfig, read_json_object, string_list};
use crate::error::ParseError;

/// Member patterns declared in `root/package.json`.
///
/// `Ok(None)` when there is no `package.json` or it has no `workspaces`
/// field. Both the array form and Yarn's `{ "packages": [...] }` object form
/// are accepted.
pub fn workspace_patterns(root: &Path) -> Result<Option<Vec<String>>, ParseError> {
    let path = root.join("package.json");
    let Some(manifest) = read_json_object(&path)? else {
        return Ok(None);
    };

    match manifest.get("workspaces") {
        None | Some(Value::Null) => Ok(None),
        Some(value @ Value::Array(_)) => string_list(&path, "workspaces", value).map(Some),
        Some(Value::Object(config)) => match config.get("packages") {
            Some(value) => string_list(&path, "workspaces.packages", value).map(Some),
            None => Ok(Some(Vec::new())),
        },
        Some(_) => Err(ParseError::shape(
            &path,
            "`workspaces` must be an array or an object with `packages`",
        )),
    }
}

/// Patterns for formats that borrow `workspaces` from `package.json`
/// (Turborepo, Lerna with `useWorkspaces`). The manifest is auxiliary there,
/// so a malformed one is reported and treated as declaring nothing.
pub fn borrowed_patterns(root: &Path) -> Vec<String> {
    workspace_patterns(root)
        .unwrap_or_else(|e| {
            warn!(root = %root.display(), error = %e, "ignoring malformed package.json workspaces");
            None
        })
        .unwrap_or_default()
}

pub fn parse(root: &Path) -> Result<Option<WorkspaceConfig>, ParseError> {
    let packages = match workspace_patterns(root)? {
        Some(packages) if !packages.is_empty() => packages,
        _ => return Ok(None),
    };

    if root.join("yarn.lock").is_file() {
        Ok(Some(WorkspaceConfig::Yarn { packages }))
    } else {
        Ok(Some(WorkspaceConfig::Npm { packages }))
    }
}
