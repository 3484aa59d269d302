use crate::ecosystem::{Ecosystem, EcosystemDefinition, ToolCategory, ToolSpec, VersionProbe};
use crate::platform::Platform;

const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "python3",
        category: ToolCategory::Runtime,
        critical: true,
        probe: VersionProbe::version_flag("python3"),
        install_help: &[
            (Platform::Windows, "winget install Python.Python.3.12"),
            (Platform::MacOs, "brew install python@3.12"),
            (Platform::Linux, "sudo apt install python3"),
        ],
        fallback_help: Some("Download Python from https://www.python.org/downloads"),
    },
    ToolSpec {
        name: "pip3",
        category: ToolCategory::PackageManager,
        critical: true,
        probe: VersionProbe::version_flag("pip3"),
        install_help: &[
            (Platform::Windows, "python -m ensurepip --upgrade"),
            (Platform::MacOs, "python3 -m ensurepip --upgrade"),
            (Platform::Linux, "sudo apt install python3-pip"),
        ],
        fallback_help: Some("python3 -m ensurepip --upgrade"),
    },
    ToolSpec {
        name: "poetry",
        category: ToolCategory::PackageManager,
        critical: false,
        probe: VersionProbe::version_flag("poetry"),
        install_help: &[],
        fallback_help: Some("pipx install poetry"),
    },
    ToolSpec {
        name: "uv",
        category: ToolCategory::PackageManager,
        critical: false,
        probe: VersionProbe::version_flag("uv"),
        install_help: &[
            (
                Platform::Windows,
                "powershell -c \"irm https://astral.sh/uv/install.ps1 | iex\"",
            ),
            (Platform::MacOs, "brew install uv"),
            (Platform::Linux, "curl -LsSf https://astral.sh/uv/install.sh | sh"),
        ],
        fallback_help: Some("See https://docs.astral.sh/uv"),
    },
    ToolSpec {
        name: "ruff",
        category: ToolCategory::Linter,
        critical: false,
        probe: VersionProbe::version_flag("ruff"),
        install_help: &[(Platform::MacOs, "brew install ruff")],
        fallback_help: Some("pip install ruff"),
    },
];

pub(in crate::ecosystem) const DEFINITION: EcosystemDefinition = EcosystemDefinition {
    id: Ecosystem::Python,
    display_name: "Python",
    detection_priority: 30,
    indicator_files: &[
        "pyproject.toml",
        "setup.py",
        "requirements.txt",
        "Pipfile",
        "poetry.lock",
        "uv.lock",
    ],
    manifest_files: &["pyproject.toml", "setup.py", "requirements.txt", "Pipfile"],
    file_extensions: &["py", "pyi"],
    tools: TOOLS,
};
