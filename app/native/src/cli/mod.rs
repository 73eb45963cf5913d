//! CLI module for edgedock.
//!
//! Provides the command-line interface: a scripted docking simulation, config
//! file management, the configuration JSON Schema and shell completions.

mod commands;
mod output;

use clap::Parser;
pub use commands::{Cli, Commands, ConfigCommands, SimulateArgs};

use crate::error::EdgeDockError;

/// Runs the CLI.
///
/// Parses command-line arguments and executes the appropriate command.
///
/// # Errors
///
/// Returns an error if the command execution fails.
pub fn run() -> Result<(), EdgeDockError> {
    let cli = Cli::parse();
    cli.execute()
}
