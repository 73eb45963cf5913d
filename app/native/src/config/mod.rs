//! Configuration for edgedock.
//!
//! The configuration is read once, on first use, from a JSONC file (JSON with
//! `//` and `/* */` comments). A path given with `--config` replaces the
//! search. When no file exists anywhere, the defaults are used and a
//! commented template is written to the preferred location.

pub mod template;
pub mod types;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub use types::{
    AutoHideConfig, ConfigError, EdgeDockConfig, config_paths, is_valid_threshold,
    load_config as load_config_default, load_config_from_path,
};

/// A configuration together with the file it came from.
#[derive(Debug, Clone, Default, PartialEq)]
struct Loaded {
    config: EdgeDockConfig,
    path: Option<PathBuf>,
}

static LOADED: OnceLock<Loaded> = OnceLock::new();

/// Path given on the command line, consulted instead of the search paths.
static CUSTOM_CONFIG_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Uses `path` instead of the search paths. Only effective before the first
/// [`get_config`] call.
///
/// Returns `false` if a path was already set.
pub fn set_custom_config_path(path: PathBuf) -> bool { CUSTOM_CONFIG_PATH.set(path).is_ok() }

/// The path set with [`set_custom_config_path`], if any.
pub fn custom_config_path() -> Option<&'static PathBuf> { CUSTOM_CONFIG_PATH.get() }

/// The global configuration, loaded on first call.
pub fn get_config() -> &'static EdgeDockConfig {
    &LOADED.get_or_init(|| load(custom_config_path().map(PathBuf::as_path))).config
}

/// File the global configuration was read from (or the template written on
/// first run), if any.
pub fn get_config_path() -> Option<&'static PathBuf> { LOADED.get()?.path.as_ref() }

fn load(custom: Option<&Path>) -> Loaded {
    let result = custom.map_or_else(load_config_default, load_config_from_path);

    match result {
        Ok((config, path)) => {
            tracing::debug!(path = %path.display(), "config: loaded configuration");
            Loaded {
                config,
                path: Some(path),
            }
        }
        Err(ConfigError::NotFound) if custom.is_none() => Loaded {
            config: EdgeDockConfig::default(),
            path: write_first_run_template(),
        },
        Err(err) => {
            tracing::warn!(error = %err, "config: failed to load configuration, using defaults");
            Loaded::default()
        }
    }
}

/// Writes the template to the preferred search path. Returns its path on success.
fn write_first_run_template() -> Option<PathBuf> {
    let path = config_paths().into_iter().next()?;
    if path.exists() {
        return None;
    }

    match template::create_config_file(&path) {
        Ok(()) => {
            tracing::info!(path = %path.display(), "config: created default configuration file");
            Some(path)
        }
        Err(err) => {
            tracing::debug!(
                error = %err,
                path = %path.display(),
                "config: could not create default configuration file"
            );
            None
        }
    }
}
