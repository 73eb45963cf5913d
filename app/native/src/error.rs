//! Error types for edgedock.
//!
//! The dock core has no fatal conditions. These types cover the surfaces
//! around it: the CLI, configuration loading and the dock actor.

use serde::Serialize;
use thiserror::Error;

use crate::config::ConfigError;
use crate::dock::ActorError;

/// Errors that can occur while running edgedock.
///
/// Serializes as `{"kind": ..., "message": ...}` for machine-readable output.
#[derive(Debug, Error, Serialize)]
#[serde(tag = "kind", content = "message")]
pub enum EdgeDockError {
    /// Invalid command arguments.
    #[error("{0}")]
    InvalidArguments(String),
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// IO error.
    #[error("IO error: {0}")]
    IoError(String),
    /// The dock actor could not be reached.
    #[error("Dock actor error: {0}")]
    ActorError(String),
    /// Generic command error.
    #[error("{0}")]
    CommandError(String),
}

impl From<std::io::Error> for EdgeDockError {
    fn from(err: std::io::Error) -> Self { Self::IoError(err.to_string()) }
}

impl From<serde_json::Error> for EdgeDockError {
    fn from(err: serde_json::Error) -> Self { Self::CommandError(err.to_string()) }
}

impl From<ConfigError> for EdgeDockError {
    fn from(err: ConfigError) -> Self { Self::ConfigError(err.to_string()) }
}

impl From<ActorError> for EdgeDockError {
    fn from(err: ActorError) -> Self { Self::ActorError(err.to_string()) }
}

impl From<String> for EdgeDockError {
    fn from(msg: String) -> Self { Self::CommandError(msg) }
}

impl From<&str> for EdgeDockError {
    fn from(msg: &str) -> Self { Self::CommandError(msg.to_string()) }
}
