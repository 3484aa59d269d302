//! `lerna.json` parser

use std::path::Path;

use serde_json::Value;

use super::{WorkspaceConfig, optional_string, package_json, read_json_object, string_list};
use crate::error::ParseError;

/// Lerna's own default when `packages` is omitted
pub const DEFAULT_PACKAGES: &str = "packages/*";

pub fn parse(root: &Path) -> Result<Option<WorkspaceConfig>, ParseError> {
    let path = root.join("lerna.json");
    let Some(lerna) = read_json_object(&path)? else {
        return Ok(None);
    };

    let mut packages = match lerna.get("packages") {
        Some(value) => string_list(&path, "packages", value)?,
        None => vec![DEFAULT_PACKAGES.to_string()],
    };

    // Lerna 3-6 could defer to the package manager's workspaces instead.
    if lerna.get("useWorkspaces").and_then(Value::as_bool) == Some(true) {
        let patterns = package_json::borrowed_patterns(root);
        if !patterns.is_empty() {
            packages = patterns;
        }
    }

    Ok(Some(WorkspaceConfig::Lerna {
        packages,
        version: optional_string(&lerna, "version"),
        npm_client: optional_string(&lerna, "npmClient"),
    }))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_defaults_packages() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("lerna.json"),
            r#"{"version": "independent", "npmClient": "yarn"}"#,
        )
        .unwrap();

        assert_eq!(
            parse(temp.path()).unwrap(),
            Some(WorkspaceConfig::Lerna {
                packages: vec!["packages/*".to_string()],
                version: Some("independent".to_string()),
                npm_client: Some("yarn".to_string()),
            })
        );
    }

    #[test]
    fn test_use_workspaces_reads_package_json() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("lerna.json"),
            r#"{"useWorkspaces": true, "version": "0.3.0"}"#,
        )
        .unwrap();
        fs::write(
            temp.path().join("package.json"),
            r#"{"workspaces": ["modules/*", "tools/*"]}"#,
        )
        .unwrap();

        let config = parse(temp.path()).unwrap().unwrap();
        assert_eq!(config.patterns(), ["modules/*", "tools/*"]);
    }

    #[test]
    fn test_use_workspaces_with_broken_package_json() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("lerna.json"),
            r#"{"useWorkspaces": true, "packages": ["libs/*"]}"#,
        )
        .unwrap();
        fs::write(temp.path().join("package.json"), "{ broken").unwrap();

        let config = parse(temp.path()).unwrap().unwrap();
        assert_eq!(config.patterns(), ["libs/*"]);
    }

    #[test]
    fn test_packages_wrong_type_is_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("lerna.json"), r#"{"packages": "libs/*"}"#).unwrap();

        assert!(matches!(parse(temp.path()), Err(ParseError::Shape { .. })));
    }

    #[test]
    fn test_absent_file() {
        let temp = TempDir::new().unwrap();
        assert!(parse(temp.path()).unwrap().is_none());
    }
}
