use crate::ecosystem::{Ecosystem, EcosystemDefinition, ToolCategory, ToolSpec, VersionProbe};
use crate::platform::Platform;

const TOOLS: &[ToolSpec] = &[
    ToolSpec {
        name: "java",
        category: ToolCategory::Runtime,
        critical: true,
        // `java -version` predates `--version` and writes to stderr
        probe: VersionProbe {
            program: "java",
            args: &["-version"],
        },
        install_help: &[
            (Platform::Windows, "winget install EclipseAdoptium.Temurin.21.JDK"),
            (Platform::MacOs, "brew install openjdk@21"),
            (Platform::Linux, "sudo apt install openjdk-21-jdk"),
        ],
        fallback_help: Some("Install a JDK from https://adoptium.net"),
    },
    ToolSpec {
        name: "mvn",
        category: ToolCategory::BuildTool,
        critical: false,
        probe: VersionProbe::version_flag("mvn"),
        install_help: &[
            (Platform::Windows, "scoop install maven"),
            (Platform::MacOs, "brew install maven"),
            (Platform::Linux, "sudo apt install maven"),
        ],
        fallback_help: Some("Download Maven from https://maven.apache.org/download.cgi"),
    },
    ToolSpec {
        name: "gradle",
        category: ToolCategory::BuildTool,
        critical: false,
        probe: VersionProbe::version_flag("gradle"),
        install_help: &[
            (Platform::Windows, "scoop install gradle"),
            (Platform::MacOs, "brew install gradle"),
            (Platform::Linux, "sdk install gradle"),
        ],
        fallback_help: Some("See https://gradle.org/install"),
    },
];

pub(in crate::ecosystem) const DEFINITION: EcosystemDefinition = EcosystemDefinition {
    id: Ecosystem::Jvm,
    display_name: "JVM",
    detection_priority: 20,
    indicator_files: &[
        "pom.xml",
        "build.gradle",
        "build.gradle.kts",
        "settings.gradle",
        "settings.gradle.kts",
        "gradlew",
        "gradlew.bat",
        "mvnw",
        "mvnw.cmd",
    ],
    manifest_files: &["pom.xml", "build.gradle", "build.gradle.kts"],
    file_extensions: &["java", "kt", "kts", "scala", "groovy"],
    tools: TOOLS,
};
