//! CLI command definitions using Clap.
//!
//! This module defines all CLI commands and their arguments, organized into
//! submodules:
//!
//! - `config_cmd` - Configuration file commands
//! - `simulate` - Scripted docking session against a virtual window
//! - `types` - Shared argument types

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Generator, Shell, generate};

use crate::constants::APP_NAME;
use crate::error::EdgeDockError;
use crate::{config, schema};

pub mod config_cmd;
pub mod simulate;
pub mod types;

pub use config_cmd::ConfigCommands;
pub use simulate::SimulateArgs;

/// Application version from Cargo.toml.
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// edgedock - Dock a window against the desktop edges and slide it out of view.
#[derive(Parser, Debug)]
#[command(name = "edgedock")]
#[command(author, version = APP_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a custom configuration file.
    ///
    /// Overrides the default configuration file search paths.
    /// Supports JSONC format (JSON with comments).
    #[arg(long, short, global = true, value_name = "PATH", env = "EDGEDOCK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
#[command(next_display_order = None)]
pub enum Commands {
    /// Run a scripted docking session against a virtual window.
    ///
    /// Drags a window against an edge, moves the pointer away, back into the
    /// activation band and away again, then shows the window. Every state
    /// change is printed as it happens.
    #[command(after_long_help = r#"Examples:
  edgedock simulate                              # Top edge, configured threshold
  edgedock simulate --edge left --threshold 4    # Left edge, 4px threshold
  edgedock simulate --edge bottom --bounds 1280x720
  edgedock simulate --edge right --directions top,right"#)]
    Simulate(SimulateArgs),

    /// Configuration file management commands.
    #[command(subcommand)]
    Config(ConfigCommands),

    /// Output the configuration JSON Schema.
    ///
    /// Outputs a JSON Schema to stdout that describes the structure of the
    /// configuration file. Can be redirected to a file for use with editors
    /// that support JSON Schema validation.
    Schema,

    /// Generate shell completions.
    ///
    /// Outputs shell completion script to stdout for the specified shell.
    ///
    /// Usage:
    ///   eval "$(edgedock completions --shell zsh)"
    ///   edgedock completions --shell fish > ~/.config/fish/completions/edgedock.fish
    Completions {
        /// The shell to generate completions for.
        #[arg(long, short, value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command execution fails.
    pub fn execute(&self) -> Result<(), EdgeDockError> {
        if let Some(ref path) = self.config {
            let creates_file = matches!(self.command, Commands::Config(ConfigCommands::Init { .. }));
            if !path.exists() && !creates_file {
                return Err(EdgeDockError::ConfigError(format!(
                    "Configuration file not found: {}",
                    path.display()
                )));
            }
            config::set_custom_config_path(path.clone());
        }

        match &self.command {
            Commands::Simulate(args) => simulate::execute(args),
            Commands::Config(cmd) => config_cmd::execute(cmd),

            Commands::Schema => {
                println!("{}", schema::generate_schema_json());
                Ok(())
            }

            Commands::Completions { shell } => {
                Self::print_completions(*shell);
                Ok(())
            }
        }
    }

    /// Print shell completions to stdout.
    fn print_completions<G: Generator>(generator: G) {
        let mut cmd = Self::command();
        generate(generator, &mut cmd, APP_NAME, &mut io::stdout());
    }
}
