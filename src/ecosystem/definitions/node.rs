use crate::ecosystem::{Ecosystem, EcosystemDefinition, ToolCategory, ToolSpec, VersionProbe};
use crate::platform::Platform;

const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "node",
        category: ToolCategory::Runtime,
        critical: true,
        probe: VersionProbe::version_flag("node"),
        install_help: &[
            (Platform::Windows, "winget install OpenJS.NodeJS.LTS"),
            (Platform::MacOs, "brew install node"),
            (
                Platform::Linux,
                "Install Node.js with nvm: https://github.com/nvm-sh/nvm",
            ),
        ],
        fallback_help: Some("Download Node.js from https://nodejs.org"),
    },
    ToolSpec {
        name: "npm",
        category: ToolCategory::PackageManager,
        critical: true,
        probe: VersionProbe::version_flag("npm"),
        install_help: &[],
        fallback_help: Some("npm ships with Node.js; reinstall Node.js from https://nodejs.org"),
    },
    ToolSpec {
        name: "pnpm",
        category: ToolCategory::PackageManager,
        critical: false,
        probe: VersionProbe::version_flag("pnpm"),
        install_help: &[(Platform::MacOs, "brew install pnpm")],
        fallback_help: Some("corepack enable pnpm"),
    },
    ToolSpec {
        name: "yarn",
        category: ToolCategory::PackageManager,
        critical: false,
        probe: VersionProbe::version_flag("yarn"),
        install_help: &[],
        fallback_help: Some("corepack enable yarn"),
    },
    ToolSpec {
        name: "bun",
        category: ToolCategory::PackageManager,
        critical: false,
        probe: VersionProbe::version_flag("bun"),
        install_help: &[
            (
                Platform::Windows,
                "powershell -c \"irm bun.sh/install.ps1 | iex\"",
            ),
            (Platform::MacOs, "curl -fsSL https://bun.sh/install | bash"),
            (Platform::Linux, "curl -fsSL https://bun.sh/install | bash"),
        ],
        fallback_help: None,
    },
];

pub(in crate::ecosystem) const DEFINITION: EcosystemDefinition = EcosystemDefinition {
    id: Ecosystem::Node,
    display_name: "Node.js",
    detection_priority: 40,
    indicator_files: &[
        "package.json",
        "package-lock.json",
        "yarn.lock",
        "pnpm-lock.yaml",
        "bun.lockb",
    ],
    manifest_files: &["package.json"],
    file_extensions: &["js", "jsx", "mjs", "cjs", "ts", "tsx"],
    tools: TOOLS,
};
