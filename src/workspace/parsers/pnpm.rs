//! `pnpm-workspace.yaml` parser
//!
//! The document is first checked for well-formedness with `serde_yaml`, then
//! the top-level `packages:` sequence is pulled out line by line. The scan
//! understands block sequences (`- "glob"`) and single-line flow sequences
//! (`[a, b]`); other layouts, such as multi-line flow sequences, are taken
//! from the parsed document instead.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::WorkspaceConfig;
use crate::error::ParseError;

const PACKAGES_KEYS: [&str; 3] = ["packages:", "\"packages\":", "'packages':"];

pub const WORKSPACE_FILES: [&str; 2] = ["pnpm-workspace.yaml", "pnpm-workspace.yml"];

/// The workspace file in `root`, preferring the `.yaml` spelling.
pub fn workspace_file(root: &Path) -> Option<PathBuf> {
    WORKSPACE_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

pub fn parse(root: &Path) -> Result<Option<WorkspaceConfig>, ParseError> {
    let Some(path) = workspace_file(root) else {
        return Ok(None);
    };

    let content = fs::read_to_string(&path).map_err(|e| ParseError::read(&path, e))?;

    let document: serde_yaml::Value =
        serde_yaml::from_str(&content).map_err(|source| ParseError::Yaml {
            path: path.clone(),
            source,
        })?;
    if !matches!(
        document,
        serde_yaml::Value::Null | serde_yaml::Value::Mapping(_)
    ) {
        return Err(ParseError::shape(&path, "top level must be a mapping"));
    }

    // The line scan covers the documented layouts; anything else it misses
    // is read from the parsed document.
    let packages = match extract_packages(&content) {
        Ok(packages) if !packages.is_empty() => packages,
        scanned => {
            if let Err(message) = scanned {
                debug!(path = %path.display(), %message, "line scan failed, reading parsed document");
            }
            packages_from_document(&document).map_err(|message| ParseError::shape(&path, message))?
        }
    };

    Ok(Some(WorkspaceConfig::Pnpm { packages }))
}

/// Pull the top-level `packages:` entries out of the document text. A
/// document without the key yields an empty list.
fn extract_packages(content: &str) -> Result<Vec<String>, String> {
    let mut lines = content.lines().map(strip_comment);

    let inline = loop {
        let Some(line) = lines.next() else {
            return Ok(Vec::new());
        };
        if line.starts_with(char::is_whitespace) {
            continue;
        }
        if let Some(rest) = PACKAGES_KEYS.iter().find_map(|key| line.strip_prefix(key)) {
            break rest.trim().to_string();
        }
    };

    match inline.as_str() {
        "" => {}
        "~" | "null" | "[]" => return Ok(Vec::new()),
        flow if flow.starts_with('[') => return parse_flow_sequence(flow),
        other => return Err(format!("`packages` must be a sequence, found `{other}`")),
    }

    let mut packages = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let indented = line.starts_with(char::is_whitespace);
        if let Some(item) = trimmed.strip_prefix('-') {
            if !item.is_empty() && !item.starts_with(char::is_whitespace) {
                return Err(format!("malformed sequence item `{trimmed}`"));
            }
            let item = unquote(item.trim());
            if !item.is_empty() {
                packages.push(item.to_string());
            }
        } else if indented {
            return Err(format!("`packages` entries must be list items, found `{trimmed}`"));
        } else {
            // next top-level key
            break;
        }
    }

    Ok(packages)
}

/// `packages` as read by `serde_yaml`: a sequence of strings, null, or absent.
fn packages_from_document(document: &serde_yaml::Value) -> Result<Vec<String>, String> {
    let Some(value) = document.get("packages") else {
        return Ok(Vec::new());
    };

    match value {
        serde_yaml::Value::Null => Ok(Vec::new()),
        serde_yaml::Value::Sequence(items) => items
            .iter()
            .map(|item| match item {
                serde_yaml::Value::String(entry) => Ok(entry.clone()),
                other => Err(format!("`packages` entries must be strings, found {other:?}")),
            })
            .collect(),
        _ => Err("`packages` must be a sequence".to_string()),
    }
}

fn parse_flow_sequence(flow: &str) -> Result<Vec<String>, String> {
    let inner = flow
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(|| "flow sequence for `packages` must close on the same line".to_string())?;

    Ok(inner
        .split(',')
        .map(|item| unquote(item.trim()))
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

/// Drop a trailing `# comment`, ignoring `#` inside quotes or glued to a
/// preceding character.
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut previous = ' ';

    for (index, ch) in line.char_indices() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == '#' && previous.is_whitespace() => return line[..index].trim_end(),
            None => {}
        }
        previous = ch;
    }

    line.trim_end()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write_workspace(content: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pnpm-workspace.yaml"), content).unwrap();
        temp
    }

    fn packages_of(config: Option<WorkspaceConfig>) -> Vec<String> {
        match config {
            Some(WorkspaceConfig::Pnpm { packages }) => packages,
            other => panic!("Expected pnpm config, got {other:?}"),
        }
    }

    #[test]
    fn test_block_sequence() {
        let temp = write_workspace("packages:\n  - \"packages/*\"\n  - \"apps/*\"\n");

        assert_eq!(
            packages_of(parse(temp.path()).unwrap()),
            vec!["packages/*", "apps/*"]
        );
    }

    #[test]
    fn test_missing_packages_key_is_empty() {
        let temp = write_workspace("catalog:\n  react: ^18.2.0\n");

        assert_eq!(packages_of(parse(temp.path()).unwrap()), Vec::<String>::new());
    }

    #[test]
    fn test_empty_file_is_empty() {
        let temp = write_workspace("");

        assert_eq!(packages_of(parse(temp.path()).unwrap()), Vec::<String>::new());
    }

    #[test]
    fn test_comments_quotes_and_negations() {
        let temp = write_workspace(
            "# workspace layout\npackages:\n  # apps first\n  - 'apps/*'   # web + api\n  - \
             packages/**\n  - \"!**/test/**\"\n\ncatalog:\n  lodash: 4.17.21\n",
        );

        assert_eq!(
            packages_of(parse(temp.path()).unwrap()),
            vec!["apps/*", "packages/**", "!**/test/**"]
        );
    }

    #[test]
    fn test_unindented_sequence() {
        let temp = write_workspace("packages:\n- libs/*\n- tools/cli\n");

        assert_eq!(
            packages_of(parse(temp.path()).unwrap()),
            vec!["libs/*", "tools/cli"]
        );
    }

    #[test]
    fn test_flow_sequence() {
        let temp = write_workspace("packages: [\"a/*\", 'b/*']\n");

        assert_eq!(packages_of(parse(temp.path()).unwrap()), vec!["a/*", "b/*"]);
    }

    #[test]
    fn test_quoted_key() {
        let temp = write_workspace("\"packages\":\n  - \"apps/*\"\n");

        assert_eq!(packages_of(parse(temp.path()).unwrap()), vec!["apps/*"]);
    }

    #[test]
    fn test_multi_line_flow_sequence() {
        let temp = write_workspace("packages: [\n  \"apps/*\",\n  \"libs/*\"\n]\n");

        assert_eq!(
            packages_of(parse(temp.path()).unwrap()),
            vec!["apps/*", "libs/*"]
        );
    }

    #[test]
    fn test_yml_extension() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("pnpm-workspace.yml"), "packages:\n  - x/*\n").unwrap();

        assert_eq!(packages_of(parse(temp.path()).unwrap()), vec!["x/*"]);
    }

    #[test]
    fn test_absent_file() {
        let temp = TempDir::new().unwrap();
        assert!(parse(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        let temp = write_workspace("packages:\n  - \"unterminated\n  - [\n");

        assert!(matches!(parse(temp.path()), Err(ParseError::Yaml { .. })));
    }

    #[test]
    fn test_scalar_packages_is_error() {
        let temp = write_workspace("packages: apps\n");

        assert!(matches!(parse(temp.path()), Err(ParseError::Shape { .. })));
    }

    #[test]
    fn test_mapping_under_packages_is_error() {
        let temp = write_workspace("packages:\n  apps: true\n");

        assert!(matches!(parse(temp.path()), Err(ParseError::Shape { .. })));
    }

    #[test]
    fn test_top_level_sequence_is_error() {
        let temp = write_workspace("- packages/*\n");

        assert!(matches!(parse(temp.path()), Err(ParseError::Shape { .. })));
    }

    #[test]
    fn test_strip_comment() {
        assert_eq!(strip_comment("  - a # note"), "  - a");
        assert_eq!(strip_comment("  - \"a # b\""), "  - \"a # b\"");
        assert_eq!(strip_comment("  - a#b"), "  - a#b");
        assert_eq!(strip_comment("# only"), "");
    }
}
