use clap::{Parser, Subcommand};

use crate::common::{CommonArgs, FormatArgs, PlatformArgs};

#[derive(Parser)]
#[command(
    name = "stackscout",
    about = "🧭 Resolve monorepo workspaces, package ecosystems, and toolchain commands",
    long_about = "stackscout walks up from a directory to find the workspace that owns it \
                  (pnpm, Nx, Lerna, Turborepo, Yarn or npm workspaces), lists its member \
                  packages with their ecosystem, checks which toolchain binaries are installed, \
                  and prints the right install/build/test/lint/format command for a project.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    /// Log resolution steps to stderr
    #[arg(short, long, global = true, env = "STACKSCOUT_VERBOSE")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find the workspace containing a directory and list its packages
    #[command(
        long_about = "Search upward from PATH (default: current directory) for a workspace root. \
                      Indicator files are checked in order pnpm-workspace.yaml, nx.json, \
                      lerna.json, turbo.json, then the package.json workspaces field. The first \
                      configuration that parses wins, and its member patterns are expanded into \
                      packages, each tagged with its ecosystem."
    )]
    Workspace {
        #[command(flatten)]
        common: CommonArgs,

        /// Number of ancestor directories inspected above PATH
        #[arg(
            long,
            default_value_t = crate::constants::search::DEFAULT_MAX_DEPTH,
            env = "STACKSCOUT_MAX_DEPTH"
        )]
        max_depth: usize,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Classify a single directory by ecosystem
    #[command(
        long_about = "Report which ecosystem a directory belongs to, based only on the presence \
                      of indicator files. When several ecosystems match, the one with the lowest \
                      detection priority wins (rust, jvm, python, node). Also reports the inferred \
                      Node package manager, JVM build tool and wrapper, and Python package \
                      manager candidates."
    )]
    Ecosystem {
        #[command(flatten)]
        common: CommonArgs,

        /// List every ecosystem with an indicator present, not just the winner
        #[arg(long, env = "STACKSCOUT_ALL")]
        all: bool,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Check which of an ecosystem's tools are installed
    Tools {
        /// Ecosystem to check (rust, jvm, python, node)
        #[arg(value_name = "ECOSYSTEM", env = "STACKSCOUT_ECOSYSTEM")]
        ecosystem: String,

        /// Time allowed for each version probe, in milliseconds
        #[arg(
            long,
            default_value_t = crate::constants::probe::DEFAULT_TIMEOUT.as_millis() as u64,
            env = "STACKSCOUT_TIMEOUT_MS"
        )]
        timeout_ms: u64,

        #[command(flatten)]
        platform: PlatformArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Print the command for an intent in an ecosystem
    #[command(
        long_about = "Print the shell command that performs INTENT (install, build, test, lint, \
                      format, or run) for ECOSYSTEM. Nothing is inferred from the filesystem: \
                      pick the package manager or build tool explicitly, otherwise npm, pip and \
                      maven are assumed. JVM commands go through the project wrapper unless \
                      --no-wrapper is given."
    )]
    Command {
        /// Ecosystem (rust, jvm, python, node)
        #[arg(value_name = "ECOSYSTEM")]
        ecosystem: String,

        /// install, build, test, lint, format or run
        #[arg(value_name = "INTENT")]
        intent: String,

        /// Script, task or binary for the run intent
        #[arg(long, env = "STACKSCOUT_SCRIPT")]
        script: Option<String>,

        /// Node (npm, pnpm, yarn, bun) or Python (pip, pip3, poetry, uv)
        /// package manager
        #[arg(long, env = "STACKSCOUT_PACKAGE_MANAGER")]
        package_manager: Option<String>,

        /// JVM build tool (maven, gradle)
        #[arg(long, env = "STACKSCOUT_BUILD_TOOL")]
        build_tool: Option<String>,

        /// Call the global Maven/Gradle binary instead of the wrapper
        #[arg(long, env = "STACKSCOUT_NO_WRAPPER")]
        no_wrapper: bool,

        #[command(flatten)]
        platform: PlatformArgs,

        #[command(flatten)]
        format: FormatArgs,
    },

    /// Show how to install a tool
    InstallHelp {
        /// Tool name, e.g. cargo, gradle, poetry
        #[arg(value_name = "TOOL")]
        tool: String,

        #[command(flatten)]
        platform: PlatformArgs,

        #[command(flatten)]
        format: FormatArgs,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
