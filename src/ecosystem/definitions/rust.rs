use crate::ecosystem::{Ecosystem, EcosystemDefinition, ToolCategory, ToolSpec, VersionProbe};
use crate::platform::Platform;

const RUSTUP_HELP: &[(Platform, &str)] = &[
    (
        Platform::Windows,
        "Download and run rustup-init.exe from https://rustup.rs",
    ),
    (
        Platform::MacOs,
        "curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh",
    ),
    (
        Platform::Linux,
        "curl --proto '=https' --tlsv1.2 -sSf https://sh.rustup.rs | sh",
    ),
];

const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "rustc",
        category: ToolCategory::Runtime,
        critical: true,
        probe: VersionProbe::version_flag("rustc"),
        install_help: RUSTUP_HELP,
        fallback_help: Some("Install the Rust toolchain from https://rustup.rs"),
    },
    ToolSpec {
        name: "cargo",
        category: ToolCategory::BuildTool,
        critical: true,
        probe: VersionProbe::version_flag("cargo"),
        install_help: RUSTUP_HELP,
        fallback_help: Some("Install the Rust toolchain from https://rustup.rs"),
    },
    ToolSpec {
        name: "rustup",
        category: ToolCategory::PackageManager,
        critical: false,
        probe: VersionProbe::version_flag("rustup"),
        install_help: RUSTUP_HELP,
        fallback_help: Some("See https://rustup.rs"),
    },
    ToolSpec {
        name: "clippy",
        category: ToolCategory::Linter,
        critical: false,
        probe: VersionProbe {
            program: "cargo",
            args: &["clippy", "--version"],
        },
        install_help: &[],
        fallback_help: Some("rustup component add clippy"),
    },
    ToolSpec {
        name: "rustfmt",
        category: ToolCategory::Formatter,
        critical: false,
        probe: VersionProbe::version_flag("rustfmt"),
        install_help: &[],
        fallback_help: Some("rustup component add rustfmt"),
    },
];

pub(in crate::ecosystem) const DEFINITION: EcosystemDefinition = EcosystemDefinition {
    id: Ecosystem::Rust,
    display_name: "Rust",
    detection_priority: 10,
    indicator_files: &["Cargo.toml", "Cargo.lock"],
    manifest_files: &["Cargo.toml"],
    file_extensions: &["rs"],
    tools: TOOLS,
};
