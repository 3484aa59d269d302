//! Configuration constants for stackscout
//!
//! This module contains the tunables used throughout the resolver. CLI flags
//! and environment variables override the ones that are user-facing.

use std::time::Duration;

/// Workspace root search configuration
pub mod search {
    /// Number of ancestor levels inspected above the start directory
    pub const DEFAULT_MAX_DEPTH: usize = 10;

    /// Maximum depth walked when looking for Nx `project.json` files
    pub const NX_PROJECT_SCAN_DEPTH: usize = 6;

    /// Directories never treated as workspace members or walked into
    pub const PRUNED_DIRS: &[&str] = &["node_modules", ".git", "target", "dist"];
}

/// Tool probe configuration
pub mod probe {
    use super::*;

    /// Upper bound on a single `--version` invocation
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

    /// How often a running probe is polled for exit
    pub const POLL_INTERVAL: Duration = Duration::from_millis(10);
}

/// Progress spinner configuration
pub mod progress {
    use super::*;

    /// Duration between spinner updates
    pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

    /// Spinner frames for the compass animation
    pub const SPINNER_FRAMES: &[&str] = &["◴", "◷", "◶", "◵"];
}

/// Output formatting configuration
pub mod output {
    /// Default output format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

/// Environment variable that seeds the log filter
pub const LOG_ENV: &str = "STACKSCOUT_LOG";
