use super::Intent;

pub(super) fn command(intent: Intent) -> String {
    let subcommand = match intent {
        Intent::Install => "fetch",
        Intent::Build => "build",
        Intent::Test => "test",
        Intent::Lint => "clippy",
        Intent::Format => "fmt",
    };
    format!("cargo {subcommand}")
}

pub(super) fn run(binary: &str) -> String {
    if binary.is_empty() {
        "cargo run".to_string()
    } else {
        format!("cargo run --bin {binary}")
    }
}
