//! edgedock - Edge docking and auto-hide for a top-level window.
//!
//! A window dragged within a small threshold of one of the desktop's edges
//! docks against it, slides out of view once the pointer leaves it, and
//! slides back when the pointer touches the edge again. The windowing system
//! is reached through the [`dock::DockWindow`] and [`dock::Desktop`] traits,
//! so hosts plug in their own toolkit.
//!
//! The library also backs the `edgedock` CLI, which simulates a docking
//! session against a virtual window and manages the configuration file.

pub mod animation;
pub mod cli;
pub mod config;
pub mod constants;
pub mod dock;
pub mod error;
pub mod schema;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `EDGEDOCK_LOG=debug`.
pub const LOG_ENV: &str = "EDGEDOCK_LOG";

/// Installs the global `tracing` subscriber, logging to stderr.
///
/// The filter is read from `EDGEDOCK_LOG`, then `RUST_LOG`, and defaults to
/// `warn`. Calling this more than once is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::trace!("tracing subscriber already installed");
    }
}
