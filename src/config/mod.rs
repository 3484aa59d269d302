//! # Configuration Module
//!
//! This module provides configuration structures for all stackscout
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **WorkspaceScanConfig**: `workspace` command, upward root search and
//!   package listing
//! - **EcosystemScanConfig**: `ecosystem` command, single-directory
//!   classification
//! - **ToolCheckConfig**: `tools` command, installed-tool probing
//! - **CommandGenerationConfig**: `command` command, per-intent command
//!   strings
//! - **InstallHelpConfig**: `install-help` command
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//!
//! use stackscout::cli::OutputFormat;
//! use stackscout::common::ConfigBuilder;
//! use stackscout::config::ToolCheckConfig;
//! use stackscout::ecosystem::Ecosystem;
//! use stackscout::platform::Platform;
//!
//! let config = ToolCheckConfig::builder()
//!     .with_ecosystem(Ecosystem::Python)
//!     .with_timeout(Duration::from_secs(2))
//!     .with_platform(Platform::Linux)
//!     .with_format(OutputFormat::Json)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.ecosystem, Ecosystem::Python);
//! ```

pub mod command;
pub mod ecosystem;
pub mod install_help;
pub mod tools;
pub mod workspace;

pub use command::{CommandAction, CommandGenerationConfig};
pub use ecosystem::EcosystemScanConfig;
pub use install_help::InstallHelpConfig;
pub use tools::ToolCheckConfig;
pub use workspace::WorkspaceScanConfig;
