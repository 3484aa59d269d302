//! `turbo.json` parser
//!
//! Turborepo does not list members itself; it runs on top of the package
//! manager's `workspaces`. The pipeline is kept only as a list of task names.

use std::path::Path;

use serde_json::Value;

use super::{WorkspaceConfig, package_json, read_json_object};
use crate::error::ParseError;

pub fn parse(root: &Path) -> Result<Option<WorkspaceConfig>, ParseError> {
    let path = root.join("turbo.json");
    let Some(turbo) = read_json_object(&path)? else {
        return Ok(None);
    };

    // Turborepo 2 renamed `pipeline` to `tasks`.
    let pipeline = match turbo.get("pipeline").or_else(|| turbo.get("tasks")) {
        Some(Value::Object(tasks)) => {
            let mut names: Vec<String> = tasks.keys().cloned().collect();
            names.sort();
            names
        }
        Some(_) => return Err(ParseError::shape(&path, "`pipeline` must be an object")),
        None => Vec::new(),
    };

    let packages = package_json::borrowed_patterns(root);

    Ok(Some(WorkspaceConfig::Turborepo { packages, pipeline }))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_pipeline_names_and_workspaces() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("turbo.json"),
            r#"{"pipeline": {"test": {"dependsOn": ["build"]}, "build": {"outputs": ["dist/**"]}}}"#,
        )
        .unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"workspaces": ["apps/*", "packages/*"]}"#,
        )
        .unwrap();

        assert_eq!(
            parse(temp.path()).unwrap(),
            Some(WorkspaceConfig::Turborepo {
                packages: vec!["apps/*".to_string(), "packages/*".to_string()],
                pipeline: vec!["build".to_string(), "test".to_string()],
            })
        );
    }

    #[test]
    fn test_tasks_key() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("turbo.json"),
            r#"{"$schema": "https://turbo.build/schema.json", "tasks": {"lint": {}}}"#,
        )
        .unwrap();

        let config = parse(temp.path()).unwrap().unwrap();
        assert_eq!(
            config,
            WorkspaceConfig::Turborepo {
                packages: vec![],
                pipeline: vec!["lint".to_string()],
            }
        );
    }

    #[test]
    fn test_pipeline_wrong_type_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("turbo.json"), r#"{"pipeline": ["build"]}"#).unwrap();

        assert!(matches!(parse(temp.path()), Err(ParseError::Shape { .. })));
    }

    #[test]
    fn test_broken_package_json_keeps_turbo_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("turbo.json"), r#"{"pipeline": {"build": {}}}"#).unwrap();
        fs::write(temp.path().join("package.json"), "{ broken").unwrap();

        assert_eq!(
            parse(temp.path()).unwrap(),
            Some(WorkspaceConfig::Turborepo {
                packages: vec![],
                pipeline: vec!["build".to_string()],
            })
        );
        assert_eq!(
            crate::workspace::parse_workspace_config(temp.path()).map(|c| c.kind()),
            Some(crate::workspace::WorkspaceKind::Turborepo)
        );
    }
}
