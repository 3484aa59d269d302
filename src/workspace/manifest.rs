//! Package name lookup from ecosystem manifests
//!
//! Only the declared name is read. Anything that fails to parse falls back to
//! the next source and eventually to the directory name.

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct NamedSection {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CargoManifest {
    package: Option<NamedSection>,
}

#[derive(Debug, Deserialize)]
struct PyProject {
    project: Option<NamedSection>,
    tool: Option<PyProjectTools>,
}

#[derive(Debug, Deserialize)]
struct PyProjectTools {
    poetry: Option<NamedSection>,
}

static POM_PARENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<parent>.*?</parent>").expect("valid regex"));
static POM_ARTIFACT_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<artifactId>\s*([^<\s]+)\s*</artifactId>").expect("valid regex"));
static GRADLE_ROOT_PROJECT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"rootProject\.name\s*=\s*["']([^"']+)["']"#).expect("valid regex")
});

fn read_toml<T: for<'de> Deserialize<'de>>(path: &Path) -> Option<T> {
    let content = fs::read_to_string(path).ok()?;
    toml::from_str(&content)
        .map_err(|e| debug!(path = %path.display(), error = %e, "unparsable manifest"))
        .ok()
}

fn node_name(dir: &Path) -> Option<String> {
    let content = fs::read_to_string(dir.join("package.json")).ok()?;
    let manifest: serde_json::Value = serde_json::from_str(&content).ok()?;
    manifest.get("name")?.as_str().map(str::to_string)
}

fn rust_name(dir: &Path) -> Option<String> {
    read_toml::<CargoManifest>(&dir.join("Cargo.toml"))?
        .package?
        .name
}

fn python_name(dir: &Path) -> Option<String> {
    let pyproject = read_toml::<PyProject>(&dir.join("pyproject.toml"))?;
    pyproject
        .project
        .and_then(|project| project.name)
        .or_else(|| pyproject.tool?.poetry?.name)
}

fn jvm_name(dir: &Path) -> Option<String> {
    if let Ok(pom) = fs::read_to_string(dir.join("pom.xml")) {
        let without_parent = POM_PARENT.replace(&pom, "");
        if let Some(captures) = POM_ARTIFACT_ID.captures(&without_parent) {
            return Some(captures[1].to_string());
        }
    }

    ["settings.gradle.kts", "settings.gradle"]
        .iter()
        .filter_map(|file| fs::read_to_string(dir.join(file)).ok())
        .find_map(|settings| {
            GRADLE_ROOT_PROJECT
                .captures(&settings)
                .map(|captures| captures[1].to_string())
        })
}

/// Manifest readers in lookup order
const NAME_SOURCES: [fn(&Path) -> Option<String>; 4] = [node_name, rust_name, python_name, jvm_name];

/// Declared package name for `dir`: `package.json`, then `Cargo.toml`, then
/// `pyproject.toml`, then the Maven/Gradle project name, then the directory
/// name.
pub fn package_name(dir: &Path) -> String {
    NAME_SOURCES
        .iter()
        .filter_map(|source| source(dir))
        .find(|name| !name.trim().is_empty())
        .unwrap_or_else(|| directory_name(dir))
}

pub fn directory_name(dir: &Path) -> String {
    dir.file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}
