//! `nx.json` parser
//!
//! Older Nx layouts list projects in `nx.json` or a sibling `workspace.json`;
//! newer ones omit the map entirely and rely on `project.json` files, which
//! package discovery scans for when the map comes back empty.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::warn;

use super::{NxProject, WorkspaceConfig, optional_string, read_json_object};
use crate::error::ParseError;

pub fn parse(root: &Path) -> Result<Option<WorkspaceConfig>, ParseError> {
    let path = root.join("nx.json");
    let Some(nx) = read_json_object(&path)? else {
        return Ok(None);
    };

    let projects = match nx.get("projects") {
        Some(value) => parse_projects(&path, value)?,
        None => legacy_workspace_projects(root),
    };

    Ok(Some(WorkspaceConfig::Nx {
        projects,
        npm_scope: optional_string(&nx, "npmScope"),
    }))
}

/// `workspace.json` is auxiliary; a broken one is reported and ignored rather
/// than invalidating `nx.json`.
fn legacy_workspace_projects(root: &Path) -> BTreeMap<String, NxProject> {
    let path = root.join("workspace.json");
    let parsed = read_json_object(&path).and_then(|workspace| match workspace {
        Some(map) => match map.get("projects") {
            Some(value) => parse_projects(&path, value),
            None => Ok(BTreeMap::new()),
        },
        None => Ok(BTreeMap::new()),
    });

    parsed.unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "ignoring malformed workspace.json");
        BTreeMap::new()
    })
}

/// Accepts both `"name": "path/to/project"` and `"name": { "root": ... }`.
fn parse_projects(path: &Path, value: &Value) -> Result<BTreeMap<String, NxProject>, ParseError> {
    let Value::Object(entries) = value else {
        return Err(ParseError::shape(path, "`projects` must be an object"));
    };

    entries
        .iter()
        .map(|(name, entry)| {
            let project = match entry {
                Value::String(root) => NxProject {
                    root: Some(PathBuf::from(root)),
                    project_type: None,
                },
                Value::Object(config) => NxProject {
                    root: optional_string(config, "root").map(PathBuf::from),
                    project_type: optional_string(config, "projectType"),
                },
                _ => {
                    return Err(ParseError::shape(
                        path,
                        format!("project `{name}` must be a path or an object"),
                    ));
                }
            };
            Ok((name.clone(), project))
        })
        .collect()
}
