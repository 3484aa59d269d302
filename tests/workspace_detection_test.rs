//! Integration tests for workspace and ecosystem resolution using the
//! library interface

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use stackscout::ecosystem::{self, Ecosystem, JvmBuildTool, NodePackageManager};
use stackscout::workspace::{
    self, WorkspaceConfig, WorkspaceDetector, WorkspaceKind, find_workspace_root,
    is_in_workspace, parse_workspace_config,
};
use tempfile::TempDir;

const MAX_DEPTH: usize = 10;

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn canonical(path: &Path) -> PathBuf {
    path.canonicalize().unwrap()
}

/// A pnpm monorepo with one Node package, one Rust crate and one Gradle
/// service
fn create_polyglot_repo(root: &Path) {
    write(
        &root.join("pnpm-workspace.yaml"),
        "packages:\n  - \"packages/*\"\n  - \"services/*\"\n  - \"!packages/scratch\"\n",
    );
    write(&root.join("pnpm-lock.yaml"), "lockfileVersion: '9.0'\n");
    write(&root.join("package.json"), r#"{"name": "polyglot", "private": true}"#);

    write(
        &root.join("packages/ui/package.json"),
        r#"{"name": "@acme/ui", "version": "1.0.0"}"#,
    );
    write(&root.join("packages/ui/src/index.ts"), "export {};\n");

    write(
        &root.join("packages/scratch/package.json"),
        r#"{"name": "scratch"}"#,
    );

    write(
        &root.join("services/indexer/Cargo.toml"),
        "[package]\nname = \"indexer\"\nversion = \"0.1.0\"\n",
    );

    write(&root.join("services/billing/build.gradle.kts"), "plugins { java }\n");
    write(
        &root.join("services/billing/settings.gradle.kts"),
        "rootProject.name = \"billing\"\n",
    );
    write(&root.join("services/billing/gradlew"), "#!/bin/sh\n");

    // Not a package: no manifest
    fs::create_dir_all(root.join("services/docs")).unwrap();
}

#[test]
fn test_root_found_from_nested_directory() {
    let temp = TempDir::new().unwrap();
    create_polyglot_repo(temp.path());

    let nested = temp.path().join("packages/ui/src");
    assert_eq!(
        find_workspace_root(&nested, MAX_DEPTH),
        Some(canonical(temp.path()))
    );
    assert!(is_in_workspace(&nested));
}

#[test]
fn test_root_search_respects_depth() {
    let temp = TempDir::new().unwrap();
    create_polyglot_repo(temp.path());

    // packages/ui itself has no indicator; the root is two levels up
    let start = temp.path().join("packages/ui");
    assert_eq!(find_workspace_root(&start, 1), None);
    assert_eq!(
        find_workspace_root(&start, 2),
        Some(canonical(temp.path()))
    );
}

#[test]
fn test_resolves_polyglot_workspace() {
    let temp = TempDir::new().unwrap();
    create_polyglot_repo(temp.path());

    let detector = WorkspaceDetector::detect(temp.path().join("services/indexer"));
    assert!(detector.is_in_workspace());
    assert_eq!(detector.kind(), WorkspaceKind::Pnpm);

    let names: Vec<&str> = detector
        .packages()
        .iter()
        .map(|package| package.name.as_str())
        .collect();
    assert_eq!(names, vec!["@acme/ui", "billing", "indexer"]);

    let ui = detector.package("@acme/ui").unwrap();
    assert_eq!(ui.ecosystem, Some(Ecosystem::Node));
    // Inherited from the root lockfile
    assert_eq!(ui.package_manager, Some(NodePackageManager::Pnpm));

    let billing = detector.package("billing").unwrap();
    assert_eq!(billing.ecosystem, Some(Ecosystem::Jvm));
    assert_eq!(billing.build_tool, Some(JvmBuildTool::Gradle));

    let indexer = detector.package("indexer").unwrap();
    assert_eq!(indexer.ecosystem, Some(Ecosystem::Rust));
    assert_eq!(indexer.package_manager, None);

    assert!(detector.package("scratch").is_none());

    let result = detector.result().unwrap();
    assert_eq!(
        result.ecosystems(),
        vec![Ecosystem::Rust, Ecosystem::Jvm, Ecosystem::Node]
    );
}

#[test]
fn test_pnpm_takes_precedence_over_nx() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("pnpm-workspace.yaml"),
        "packages:\n  - \"libs/*\"\n",
    );
    write(&temp.path().join("nx.json"), r#"{"npmScope": "acme"}"#);

    let config = parse_workspace_config(temp.path()).unwrap();
    assert_eq!(config.kind(), WorkspaceKind::Pnpm);
}

#[test]
fn test_rust_takes_precedence_over_node() {
    let temp = TempDir::new().unwrap();
    write(
        &temp.path().join("Cargo.toml"),
        "[package]\nname = \"napi-binding\"\n",
    );
    write(&temp.path().join("package.json"), r#"{"name": "binding"}"#);

    assert_eq!(
        ecosystem::detect_ecosystem(temp.path()),
        Some(Ecosystem::Rust)
    );
    assert_eq!(
        ecosystem::detect_all_ecosystems(temp.path()),
        vec![Ecosystem::Rust, Ecosystem::Node]
    );
}

#[test]
fn test_malformed_configs_never_yield_partial_results() {
    let cases: [(&str, &str); 5] = [
        ("pnpm-workspace.yaml", "packages: [\"a/*\"\n  - : :"),
        ("nx.json", "{\"projects\": "),
        ("lerna.json", "[1, 2, 3]"),
        ("turbo.json", "not json at all"),
        ("package.json", r#"{"workspaces": 42}"#),
    ];

    for (file, content) in cases {
        let temp = TempDir::new().unwrap();
        write(&temp.path().join(file), content);

        assert_eq!(
            parse_workspace_config(temp.path()),
            None,
            "{file} with malformed content must not parse"
        );
    }
}

#[test]
fn test_malformed_format_falls_through_to_next() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("nx.json"), "{ broken");
    write(
        &temp.path().join("lerna.json"),
        r#"{"packages": ["modules/*"], "version": "independent"}"#,
    );

    let config = parse_workspace_config(temp.path()).unwrap();
    assert_eq!(config.kind(), WorkspaceKind::Lerna);
    assert_eq!(config.patterns(), ["modules/*".to_string()]);
}

#[test]
fn test_pnpm_scenarios() {
    let temp = TempDir::new().unwrap();
    let proj = temp.path().join("proj");
    write(
        &proj.join("pnpm-workspace.yaml"),
        "packages:\n  - \"packages/*\"\n  - \"apps/*\"",
    );

    assert_eq!(
        parse_workspace_config(&proj),
        Some(WorkspaceConfig::Pnpm {
            packages: vec!["packages/*".to_string(), "apps/*".to_string()],
        })
    );

    let bare = temp.path().join("bare");
    write(&bare.join("pnpm-workspace.yaml"), "catalog:\n  react: ^18\n");

    assert_eq!(
        parse_workspace_config(&bare),
        Some(WorkspaceConfig::Pnpm {
            packages: Vec::new()
        })
    );
}

#[test]
fn test_standalone_package_is_not_a_workspace() {
    let temp = TempDir::new().unwrap();
    let solo = temp.path().join("solo");
    write(&solo.join("package.json"), r#"{"name": "solo"}"#);

    assert_eq!(find_workspace_root(&solo, MAX_DEPTH), None);
    assert!(!is_in_workspace(&solo));

    let detector = WorkspaceDetector::detect(&solo);
    assert!(detector.result().is_none());
    assert!(detector.packages().is_empty());
    assert_eq!(detector.kind(), WorkspaceKind::None);
}

#[test]
fn test_gradle_kotlin_dsl_is_jvm() {
    let temp = TempDir::new().unwrap();
    let jvm = temp.path().join("jvm-proj");
    write(&jvm.join("build.gradle.kts"), "plugins { kotlin(\"jvm\") }\n");

    assert_eq!(ecosystem::detect_ecosystem(&jvm), Some(Ecosystem::Jvm));
    assert_eq!(
        ecosystem::detect_jvm_build_tool(&jvm),
        Some(JvmBuildTool::Gradle)
    );
}

#[test]
fn test_yarn_workspaces_object_form() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("yarn.lock"), "");
    write(
        &temp.path().join("package.json"),
        r#"{"name": "root", "workspaces": {"packages": ["pkgs/*"]}}"#,
    );
    write(
        &temp.path().join("pkgs/core/package.json"),
        r#"{"name": "core"}"#,
    );

    let result = workspace::resolve_workspace(&temp.path().join("pkgs/core"), MAX_DEPTH).unwrap();
    assert_eq!(result.kind, WorkspaceKind::Yarn);
    assert_eq!(result.packages.len(), 1);
    assert_eq!(result.packages[0].name, "core");
    assert_eq!(
        result.packages[0].package_manager,
        Some(NodePackageManager::Yarn)
    );
}

#[test]
fn test_nx_projects_discovered_from_project_files() {
    let temp = TempDir::new().unwrap();
    write(&temp.path().join("nx.json"), r#"{"npmScope": "acme"}"#);
    write(
        &temp.path().join("apps/shop/project.json"),
        r#"{"name": "shop", "projectType": "application"}"#,
    );
    write(&temp.path().join("apps/shop/package.json"), r#"{"name": "@acme/shop"}"#);
    write(
        &temp.path().join("node_modules/dep/project.json"),
        r#"{"name": "ignored"}"#,
    );

    let detector = WorkspaceDetector::detect(temp.path());
    assert_eq!(detector.kind(), WorkspaceKind::Nx);

    let names: Vec<&str> = detector
        .packages()
        .iter()
        .map(|package| package.name.as_str())
        .collect();
    assert_eq!(names, vec!["shop"]);
}
