//! Workspace configuration parsers
//!
//! One parser per workspace format. Every parser has the signature
//! `fn(&Path) -> Result<Option<WorkspaceConfig>, ParseError>`:
//!
//! - `Ok(None)`: the format's indicator file is not there
//! - `Ok(Some(_))`: the file is present and fully parsed
//! - `Err(_)`: the file is present but malformed
//!
//! [`parse_workspace_config`] tries them in a fixed order (pnpm, Nx, Lerna,
//! Turborepo, then Yarn/npm `workspaces`) and returns the first success. A
//! parser error is not fatal: the dispatcher moves on to the next format.

pub mod lerna;
pub mod nx;
pub mod package_json;
pub mod pnpm;
pub mod turbo;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::WorkspaceKind;
use crate::error::ParseError;

/// A parsed workspace configuration. Each variant holds only data that was
/// successfully read; there is no partially-populated state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum WorkspaceConfig {
    Pnpm {
        packages: Vec<String>,
    },
    Nx {
        projects: BTreeMap<String, NxProject>,
        #[serde(skip_serializing_if = "Option::is_none")]
        npm_scope: Option<String>,
    },
    Lerna {
        packages: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        version: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        npm_client: Option<String>,
    },
    Turborepo {
        packages: Vec<String>,
        /// Task names declared in the pipeline; their settings are not kept
        pipeline: Vec<String>,
    },
    Yarn {
        packages: Vec<String>,
    },
    Npm {
        packages: Vec<String>,
    },
}

impl WorkspaceConfig {
    pub fn kind(&self) -> WorkspaceKind {
        match self {
            WorkspaceConfig::Pnpm { .. } => WorkspaceKind::Pnpm,
            WorkspaceConfig::Nx { .. } => WorkspaceKind::Nx,
            WorkspaceConfig::Lerna { .. } => WorkspaceKind::Lerna,
            WorkspaceConfig::Turborepo { .. } => WorkspaceKind::Turborepo,
            WorkspaceConfig::Yarn { .. } => WorkspaceKind::Yarn,
            WorkspaceConfig::Npm { .. } => WorkspaceKind::Npm,
        }
    }

    /// Member glob patterns. Nx has none; see [`WorkspaceConfig::nx_projects`].
    pub fn patterns(&self) -> &[String] {
        match self {
            WorkspaceConfig::Pnpm { packages }
            | WorkspaceConfig::Lerna { packages, .. }
            | WorkspaceConfig::Turborepo { packages, .. }
            | WorkspaceConfig::Yarn { packages }
            | WorkspaceConfig::Npm { packages } => packages,
            WorkspaceConfig::Nx { .. } => &[],
        }
    }

    pub fn nx_projects(&self) -> Option<&BTreeMap<String, NxProject>> {
        match self {
            WorkspaceConfig::Nx { projects, .. } => Some(projects),
            _ => None,
        }
    }
}

/// One entry of an Nx `projects` map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NxProject {
    /// Project directory relative to the workspace root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
}

type Parser = fn(&Path) -> Result<Option<WorkspaceConfig>, ParseError>;

/// Parsers in precedence order; the most specific format comes first.
const PARSERS: [(&str, Parser); 5] = [
    ("pnpm", pnpm::parse),
    ("nx", nx::parse),
    ("lerna", lerna::parse),
    ("turborepo", turbo::parse),
    ("package.json workspaces", package_json::parse),
];

/// Parse the workspace configuration at `root`, returning the first format
/// that parses successfully.
pub fn parse_workspace_config(root: &Path) -> Option<WorkspaceConfig> {
    for (format, parser) in PARSERS {
        match parser(root) {
            Ok(Some(config)) => {
                debug!(root = %root.display(), format, "parsed workspace config");
                return Some(config);
            }
            Ok(None) => {}
            Err(e) => {
                debug!(
                    root = %root.display(),
                    format,
                    error = %e,
                    "workspace config rejected, trying next format"
                );
            }
        }
    }

    None
}

/// Read a JSON file that must hold an object. A missing file is `Ok(None)`.
pub(crate) fn read_json_object(path: &Path) -> Result<Option<Map<String, Value>>, ParseError> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = fs::read_to_string(path).map_err(|e| ParseError::read(path, e))?;
    let value: Value =
        serde_json::from_str(&content).map_err(|e| ParseError::json(path, &content, e))?;

    match value {
        Value::Object(map) => Ok(Some(map)),
        other => Err(ParseError::shape(
            path,
            format!("expected a JSON object at the top level, found {}", json_kind(&other)),
        )),
    }
}

/// Interpret `value` as an array of strings.
pub(crate) fn string_list(path: &Path, key: &str, value: &Value) -> Result<Vec<String>, ParseError> {
    let Value::Array(items) = value else {
        return Err(ParseError::shape(
            path,
            format!("`{key}` must be an array, found {}", json_kind(value)),
        ));
    };

    items
        .iter()
        .map(|item| {
            item.as_str().map(str::to_string).ok_or_else(|| {
                ParseError::shape(
                    path,
                    format!("`{key}` entries must be strings, found {}", json_kind(item)),
                )
            })
        })
        .collect()
}

/// Optional string field; any non-string value is treated as absent.
pub(crate) fn optional_string(map: &Map<String, Value>, key: &str) -> Option<String> {
    map.get(key).and_then(Value::as_str).map(str::to_string)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_pnpm_wins_over_nx() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("pnpm-workspace.yaml"),
            "packages:\n  - \"libs/*\"\n",
        )
        .unwrap();
        fs::write(temp.path().join("nx.json"), r#"{"npmScope": "acme"}"#).unwrap();

        let config = parse_workspace_config(temp.path()).unwrap();
        assert_eq!(config.kind(), WorkspaceKind::Pnpm);
        assert_eq!(config.patterns(), ["libs/*".to_string()]);
    }

    #[test]
    fn test_malformed_higher_priority_falls_through() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("nx.json"), "{ not json").unwrap();
        fs::write(
            temp.path().join("lerna.json"),
            r#"{"packages": ["modules/*"], "version": "1.2.3"}"#,
        )
        .unwrap();

        let config = parse_workspace_config(temp.path()).unwrap();
        assert_eq!(
            config,
            WorkspaceConfig::Lerna {
                packages: vec!["modules/*".to_string()],
                version: Some("1.2.3".to_string()),
                npm_client: None,
            }
        );
    }

    #[test]
    fn test_all_malformed_is_none() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("turbo.json"), "[1, 2").unwrap();
        fs::write(temp.path().join("package.json"), r#"{"workspaces": 7}"#).unwrap();

        assert_eq!(parse_workspace_config(temp.path()), None);
    }

    #[test]
    fn test_empty_directory_is_none() {
        let temp = TempDir::new().unwrap();
        assert_eq!(parse_workspace_config(temp.path()), None);
    }

    #[test]
    fn test_read_json_object_rejects_arrays() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nx.json");
        fs::write(&path, "[]").unwrap();

        let err = read_json_object(&path).unwrap_err();
        assert!(matches!(err, ParseError::Shape { .. }));
    }

    #[test]
    fn test_string_list_rejects_mixed_entries() {
        let value = serde_json::json!(["a", 1]);
        let err = string_list(Path::new("lerna.json"), "packages", &value).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Unexpected structure in 'lerna.json': `packages` entries must be strings, found a \
             number"
        );
    }

    #[test]
    fn test_config_serializes_with_type_tag() {
        let config = WorkspaceConfig::Nx {
            projects: BTreeMap::new(),
            npm_scope: Some("acme".to_string()),
        };

        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["type"], "nx");
        assert_eq!(json["npmScope"], "acme");
    }
}
