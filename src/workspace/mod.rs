//! Workspace resolution
//!
//! Given a starting directory, [`WorkspaceDetector`] walks upward to the
//! directory carrying a workspace indicator (pnpm, Nx, Lerna, Turborepo or a
//! `package.json` `workspaces` field), parses its configuration and expands
//! the member patterns into [`PackageDescriptor`]s tagged with their
//! ecosystem.
//!
//! ```no_run
//! use stackscout::workspace::WorkspaceDetector;
//!
//! let detector = WorkspaceDetector::detect("packages/web");
//! if let Some(result) = detector.result() {
//!     println!("{} workspace at {}", result.kind, result.root.display());
//!     for package in &result.packages {
//!         println!("  {} ({})", package.name, package.path.display());
//!     }
//! }
//! ```

pub mod detector;
pub mod discovery;
pub mod manifest;
pub mod parsers;
pub mod root;
mod types;

pub use detector::{WorkspaceDetector, is_in_workspace, resolve_workspace};
pub use discovery::{describe_package, discover_nx_packages, discover_packages};
pub use parsers::{NxProject, WorkspaceConfig, parse_workspace_config};
pub use root::{find_workspace_root, has_workspace_indicator};
pub use types::{PackageDescriptor, WorkspaceKind, WorkspaceResult};
