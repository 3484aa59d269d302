use std::path::{Path, PathBuf};

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON syntax in '{file}'")]
#[diagnostic(
    code(stackscout::json_syntax_error),
    help("Check the JSON syntax near the highlighted position")
)]
pub struct JsonSyntaxError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

/// Failure to read a workspace configuration file that is present on disk.
///
/// The parser dispatcher treats every variant the same way (fall through to
/// the next format); the variants exist so the reason shows up in logs and
/// diagnostics.
#[derive(Error, Debug, Diagnostic)]
pub enum ParseError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(stackscout::read_error),
        help("Check if the file exists and you have read permissions")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Json(Box<JsonSyntaxError>),

    #[error("Invalid YAML syntax in '{path}'")]
    #[diagnostic(
        code(stackscout::yaml_syntax_error),
        help("Check indentation and quoting in the workspace file")
    )]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unexpected structure in '{path}': {message}")]
    #[diagnostic(
        code(stackscout::shape_error),
        help("The file parsed, but a required key has the wrong type")
    )]
    Shape { path: PathBuf, message: String },
}

impl ParseError {
    pub fn read(path: &Path, source: std::io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn shape(path: &Path, message: impl Into<String>) -> Self {
        Self::Shape {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    /// Wrap a `serde_json` failure, pointing the span at the reported
    /// line/column.
    pub fn json(path: &Path, content: &str, source: serde_json::Error) -> Self {
        let span = byte_offset(content, source.line(), source.column())
            .map(|offset| SourceSpan::new(offset.into(), 1));

        Self::Json(Box::new(JsonSyntaxError {
            file: path.display().to_string(),
            source_code: NamedSource::new(path.display().to_string(), content.to_string()),
            span,
            source,
        }))
    }

    pub fn path(&self) -> &Path {
        match self {
            Self::Read { path, .. } | Self::Yaml { path, .. } | Self::Shape { path, .. } => path,
            Self::Json(err) => Path::new(&err.file),
        }
    }
}

/// serde_json reports 1-based lines and columns; column 0 means "before the
/// first character" (e.g. unexpected EOF on an empty line).
fn byte_offset(content: &str, line: usize, column: usize) -> Option<usize> {
    if line == 0 {
        return None;
    }

    let mut offset = 0;
    for (index, text) in content.split_inclusive('\n').enumerate() {
        if index + 1 == line {
            let within = column.saturating_sub(1).min(text.len());
            return Some((offset + within).min(content.len().saturating_sub(1)));
        }
        offset += text.len();
    }

    None
}

#[derive(Error, Debug, Diagnostic)]
pub enum StackscoutError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error("JSON serialization error")]
    #[diagnostic(
        code(stackscout::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(stackscout::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(stackscout::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(stackscout::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },

    #[error("Unknown ecosystem '{name}'")]
    #[diagnostic(
        code(stackscout::unknown_ecosystem),
        help("Supported ecosystems: rust, jvm, python, node")
    )]
    UnknownEcosystem { name: String },

    #[error("Unknown intent '{name}'")]
    #[diagnostic(
        code(stackscout::unknown_intent),
        help("Supported intents: install, build, test, lint, format, run")
    )]
    UnknownIntent { name: String },
}
