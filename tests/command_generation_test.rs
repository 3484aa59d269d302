//! Integration tests for command generation and tool probing

use std::cell::RefCell;
use std::time::Duration;

use pretty_assertions::assert_eq;
use stackscout::ecosystem::{Ecosystem, JvmBuildTool, NodePackageManager, PythonPackageManager};
use stackscout::generator::{self, CommandConfig, Intent};
use stackscout::platform::Platform;
use stackscout::tools::{ProbeOutput, ProbeRunner, ToolDetector};

fn gradle(platform: Platform, use_wrapper: bool) -> CommandConfig {
    CommandConfig::default()
        .with_build_tool(JvmBuildTool::Gradle)
        .with_wrapper(use_wrapper)
        .with_platform(platform)
}

#[test]
fn test_gradle_wrapper_selection() {
    assert_eq!(
        generator::build_command(Ecosystem::Jvm, &gradle(Platform::Windows, true)),
        "gradlew.bat build"
    );
    assert_eq!(
        generator::build_command(Ecosystem::Jvm, &gradle(Platform::Linux, true)),
        "./gradlew build"
    );
    assert_eq!(
        generator::build_command(Ecosystem::Jvm, &gradle(Platform::Linux, false)),
        "gradle build"
    );
}

#[test]
fn test_maven_install_without_wrapper() {
    let config = CommandConfig::default()
        .with_build_tool(JvmBuildTool::Maven)
        .with_wrapper(false);

    assert_eq!(
        generator::install_command(Ecosystem::Jvm, &config),
        "mvn install"
    );
}

#[test]
fn test_generation_is_deterministic() {
    let configs = [
        CommandConfig::default(),
        gradle(Platform::MacOs, true),
        CommandConfig::default().with_node_package_manager(NodePackageManager::Bun),
        CommandConfig::default().with_python_package_manager(PythonPackageManager::Uv),
    ];

    for config in configs {
        for ecosystem in Ecosystem::ALL {
            for intent in Intent::ALL {
                let copy = config;
                assert_eq!(
                    generator::command(ecosystem, intent, &config),
                    generator::command(ecosystem, intent, &copy),
                    "{ecosystem:?} {intent} must be stable"
                );
            }
        }
    }
}

#[test]
fn test_every_intent_has_a_command() {
    let config = CommandConfig::default();
    for ecosystem in Ecosystem::ALL {
        for intent in Intent::ALL {
            assert!(
                !generator::command(ecosystem, intent, &config).is_empty(),
                "{ecosystem:?} has no {intent} command"
            );
        }
    }
}

#[test]
fn test_node_managers() {
    let pnpm = CommandConfig::default().with_node_package_manager(NodePackageManager::Pnpm);
    let yarn = CommandConfig::default().with_node_package_manager(NodePackageManager::Yarn);

    assert_eq!(generator::test_command(Ecosystem::Node, &pnpm), "pnpm test");
    assert_eq!(generator::run_command(Ecosystem::Node, "dev", &yarn), "yarn dev");
    assert_eq!(generator::install_command(Ecosystem::Node, &yarn), "yarn install");
}

/// Answers probes from a fixed table and records what was asked
struct ScriptedRunner {
    answers: Vec<(&'static str, ProbeOutput)>,
    calls: RefCell<Vec<String>>,
}

impl ProbeRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[&str], _timeout: Duration) -> Option<ProbeOutput> {
        self.calls
            .borrow_mut()
            .push(format!("{program} {}", args.join(" ")));
        self.answers
            .iter()
            .find(|(name, _)| *name == program)
            .map(|(_, output)| output.clone())
    }
}

#[test]
fn test_check_cargo_version() {
    let runner = ScriptedRunner {
        answers: vec![(
            "cargo",
            ProbeOutput {
                success: true,
                stdout: "cargo 1.75.0 (1d8b05cdd 2023-11-20)\n".to_string(),
                stderr: String::new(),
            },
        )],
        calls: RefCell::new(Vec::new()),
    };
    let detector = ToolDetector::with_runner(runner);

    let cargo = detector.check_tool("cargo");
    assert!(cargo.installed);
    assert_eq!(cargo.version.as_deref(), Some("1.75.0"));

    assert_eq!(detector.missing_critical_tools(Ecosystem::Rust), vec!["rustc"]);
}

#[test]
fn test_missing_tool_reports_not_installed() {
    let detector = ToolDetector::with_runner(ScriptedRunner {
        answers: Vec::new(),
        calls: RefCell::new(Vec::new()),
    });

    let result = detector.check_tool("poetry");
    assert!(!result.installed);
    assert_eq!(result.version, None);
}
