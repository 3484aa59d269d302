//! # stackscout - Resolve Monorepo Workspaces and Toolchains
//!
//! stackscout answers three questions about a directory in a polyglot
//! repository: which workspace owns it, which ecosystem each member package
//! belongs to, and which command installs, builds, tests, lints or formats
//! it. It also probes whether an ecosystem's tools are installed.
//!
//! ## Main Components
//!
//! - **Workspace**: upward root search, configuration parsing for pnpm, Nx,
//!   Lerna, Turborepo, Yarn and npm, and package discovery
//! - **Ecosystem**: the registry of Rust, JVM, Python and Node definitions
//!   plus indicator-file detection
//! - **Tools**: version probing with a per-probe timeout
//! - **Generator**: pure intent-to-command mapping
//! - **Reports**: human-readable and JSON output
//!
//! ## Usage
//!
//! ### Resolving the workspace around a package
//!
//! ```no_run
//! use stackscout::workspace::WorkspaceDetector;
//!
//! let detector = WorkspaceDetector::detect("/path/to/monorepo/packages/api");
//!
//! if let Some(result) = detector.result() {
//!     println!("{} workspace at {}", result.kind, result.root.display());
//!     for package in &result.packages {
//!         println!("  {} -> {}", package.name, package.path.display());
//!     }
//! }
//! ```
//!
//! ### Generating commands
//!
//! ```
//! use stackscout::ecosystem::{Ecosystem, NodePackageManager};
//! use stackscout::generator::{self, CommandConfig, Intent};
//!
//! let config = CommandConfig::default().with_node_package_manager(NodePackageManager::Pnpm);
//!
//! assert_eq!(
//!     generator::command(Ecosystem::Node, Intent::Install, &config),
//!     "pnpm install"
//! );
//! assert_eq!(
//!     generator::run_command(Ecosystem::Node, "dev", &config),
//!     "pnpm run dev"
//! );
//! ```
//!
//! ### Checking installed tools
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use stackscout::ecosystem::Ecosystem;
//! use stackscout::tools::ToolDetector;
//!
//! let detector = ToolDetector::new().with_timeout(Duration::from_secs(2));
//!
//! for (name, probe) in detector.check_ecosystem_tools(Ecosystem::Python) {
//!     println!("{name}: {:?}", probe.version);
//! }
//!
//! let missing = detector.missing_critical_tools(Ecosystem::Python);
//! if !missing.is_empty() {
//!     eprintln!("missing: {}", missing.join(", "));
//! }
//! ```

// Private modules
mod constants;
mod progress;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod ecosystem;
pub mod error;
pub mod executors;
pub mod generator;
pub mod platform;
pub mod reports;
pub mod tools;
pub mod workspace;

use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber. `STACKSCOUT_LOG` takes precedence over
/// `--verbose`.
fn init_logging(verbose: bool) {
    let fallback = if verbose { "stackscout=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(constants::LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    execute_command(cli.command)
}
