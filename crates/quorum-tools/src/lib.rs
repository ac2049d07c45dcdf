// Allow unwrap in tests
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! Quorum Tools
//!
//! CLI tools for working with BFT simulation results: bulk-rewriting
//! experiment directory names and generating harness run configurations.

use tracing_subscriber::{fmt, EnvFilter};

pub mod results;
pub mod rewrite;

pub use results::{apply_renames, scan_results_dir};
pub use rewrite::{rewrite_names, RenamePlan, RewriteError, RewriteOutcome};

/// Initialize logging with a default filter.
///
/// Use `RUST_LOG` environment variable to override the default filter.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,quorum_tools=debug"));

    fmt().with_env_filter(filter).with_target(false).init();
}
