//! Configuration types for EdgeDock.
//!
//! The configuration file supports JSONC format (JSON with comments).
//! Both single-line (`//`) and multi-line (`/* */`) comments are allowed.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    APP_NAME, DEFAULT_HIDE_THRESHOLD, MAX_POLL_INTERVAL_MS,
    MIN_POLL_INTERVAL_MS, POLL_INTERVAL_MS,
};
use crate::dock::edge::{Edge, EdgeMask};

// ============================================================================
// Auto-hide
// ============================================================================

/// Auto-hide behavior of the docked window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoHideConfig {
    /// Distance in pixels from a desktop edge at which the window docks.
    /// Must be positive; other values are ignored.
    /// Default: 10
    pub threshold: f64,

    /// Edges the window may hide behind, tested in the order
    /// top, right, bottom, left.
    /// Default: all four edges
    pub directions: Vec<Edge>,

    /// Interval in milliseconds between two polls of the window position and
    /// pointer. Clamped to 16..=1000.
    /// Default: 100
    pub poll_interval_ms: u64,
}

impl Default for AutoHideConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_HIDE_THRESHOLD,
            directions: Edge::PRIORITY.to_vec(),
            poll_interval_ms: POLL_INTERVAL_MS,
        }
    }
}

/// Whether `threshold` can be used as a docking distance.
#[must_use]
pub fn is_valid_threshold(threshold: f64) -> bool { threshold.is_finite() && threshold > 0.0 }

impl AutoHideConfig {
    /// Returns the configured threshold, or the default when it is not a
    /// positive finite number.
    #[must_use]
    pub fn effective_threshold(&self) -> f64 {
        if is_valid_threshold(self.threshold) {
            self.threshold
        } else {
            tracing::warn!(
                threshold = self.threshold,
                "config: autoHide.threshold must be a positive number, using default"
            );
            DEFAULT_HIDE_THRESHOLD
        }
    }

    /// Returns the enabled edges as a mask.
    #[must_use]
    pub fn direction_mask(&self) -> EdgeMask { self.directions.iter().copied().collect() }

    /// Returns the poll interval, clamped to the supported range.
    #[must_use]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(
            self.poll_interval_ms.clamp(MIN_POLL_INTERVAL_MS, MAX_POLL_INTERVAL_MS),
        )
    }
}

// ============================================================================
// Root Config
// ============================================================================

/// Root configuration for EdgeDock.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default, rename_all = "camelCase")]
pub struct EdgeDockConfig {
    /// Auto-hide behavior.
    pub auto_hide: AutoHideConfig,
}

// ============================================================================
// Loading
// ============================================================================

/// Errors that can occur when loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No configuration file was found in any of the expected locations.
    #[error(
        "No configuration file found. Expected at ~/.config/edgedock/config.json \
         or ~/.edgedock.json"
    )]
    NotFound,
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),
    /// The configuration file contains invalid JSON.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Configuration file names searched in each config directory.
const CONFIG_FILE_NAMES: &[&str] = &["config.jsonc", "config.json"];

/// Configuration file names searched in the home directory.
const HOME_CONFIG_FILE_NAMES: &[&str] = &[".edgedock.jsonc", ".edgedock.json"];

/// Appends the config file candidates inside `dir`, skipping duplicates.
fn push_config_dir(paths: &mut Vec<PathBuf>, dir: &Path) {
    for filename in CONFIG_FILE_NAMES {
        let path = dir.join(filename);
        if !paths.contains(&path) {
            paths.push(path);
        }
    }
}

/// Returns the possible configuration file paths in priority order.
///
/// The function checks the following locations (both `.jsonc` and `.json` variants):
/// 1. `$XDG_CONFIG_HOME/edgedock/config.jsonc` (if set)
/// 2. `~/.config/edgedock/config.jsonc`
/// 3. The platform config directory (`~/Library/Application Support/edgedock/`, `%APPDATA%\edgedock\`)
/// 4. `~/.edgedock.jsonc`
#[must_use]
pub fn config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        push_config_dir(&mut paths, &PathBuf::from(xdg_config).join(APP_NAME));
    }

    // ~/.config/edgedock/ is checked even when XDG_CONFIG_HOME points elsewhere
    if let Some(home) = dirs::home_dir() {
        push_config_dir(&mut paths, &home.join(".config").join(APP_NAME));
    }

    if let Some(config_dir) = dirs::config_dir() {
        push_config_dir(&mut paths, &config_dir.join(APP_NAME));
    }

    if let Some(home) = dirs::home_dir() {
        for filename in HOME_CONFIG_FILE_NAMES {
            paths.push(home.join(filename));
        }
    }

    paths
}

/// Loads the configuration from the first available config file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if no configuration file exists in any of the expected locations.
/// Returns `ConfigError::IoError` if a configuration file exists but could not be read.
/// Returns `ConfigError::ParseError` if the configuration file contains invalid JSON.
pub fn load_config() -> Result<(EdgeDockConfig, PathBuf), ConfigError> {
    config_paths()
        .into_iter()
        .find(|path| path.exists())
        .map_or(Err(ConfigError::NotFound), load_config_from_path)
}

/// Loads the configuration from a specific file.
///
/// # Errors
///
/// Returns `ConfigError::NotFound` if the file does not exist, or the I/O and
/// parse errors of [`load_config`].
pub fn load_config_from_path<P: AsRef<Path>>(
    path: P,
) -> Result<(EdgeDockConfig, PathBuf), ConfigError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(ConfigError::NotFound);
    }

    let file = fs::File::open(path)?;
    // Strip comments from JSONC before parsing
    let reader = json_comments::StripComments::new(file);
    let config: EdgeDockConfig = serde_json::from_reader(reader)?;
    Ok((config, path.to_path_buf()))
}

// ============================================================================
// Tests
// ============================================================================
