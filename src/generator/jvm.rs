use super::{Intent, join};
use crate::ecosystem::JvmBuildTool;
use crate::platform::Platform;

fn goal(intent: Intent, build_tool: JvmBuildTool) -> &'static str {
    match (build_tool, intent) {
        (JvmBuildTool::Maven, Intent::Install) => "install",
        (JvmBuildTool::Maven, Intent::Build) => "package",
        (JvmBuildTool::Maven, Intent::Test) => "test",
        (JvmBuildTool::Maven, Intent::Lint) => "checkstyle:check",
        (JvmBuildTool::Maven, Intent::Format) => "spotless:apply",
        (JvmBuildTool::Gradle, Intent::Install) => "assemble",
        (JvmBuildTool::Gradle, Intent::Build) => "build",
        (JvmBuildTool::Gradle, Intent::Test) => "test",
        (JvmBuildTool::Gradle, Intent::Lint) => "check",
        (JvmBuildTool::Gradle, Intent::Format) => "spotlessApply",
    }
}

/// Wrapper scripts are invoked by relative path on Unix and by bare name on
/// Windows, where `cmd` resolves them from the current directory.
fn prefix(build_tool: JvmBuildTool, use_wrapper: bool, platform: Platform) -> String {
    if !use_wrapper {
        return build_tool.binary().to_string();
    }

    let (unix, windows) = build_tool.wrapper_scripts();
    if platform.is_windows() {
        windows.to_string()
    } else {
        format!("./{unix}")
    }
}

pub(super) fn command(
    intent: Intent,
    build_tool: JvmBuildTool,
    use_wrapper: bool,
    platform: Platform,
) -> String {
    run(goal(intent, build_tool), build_tool, use_wrapper, platform)
}

pub(super) fn run(
    script: &str,
    build_tool: JvmBuildTool,
    use_wrapper: bool,
    platform: Platform,
) -> String {
    join(&prefix(build_tool, use_wrapper, platform), script)
}
