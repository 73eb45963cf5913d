//! Configuration template generation.
//!
//! Generates a commented configuration template with all available options.

use std::fs;
use std::path::Path;

/// Generates a configuration template with every option set to its default.
#[must_use]
pub fn generate_config_template() -> String {
    r#"// EdgeDock Configuration File
// ===========================
// This file uses JSONC format (JSON with comments).
// Every option below shows its default value.
{
  // ============================================================================
  // Auto-hide
  // ============================================================================
  "autoHide": {
    // Distance in pixels from a desktop edge at which the window docks.
    // Must be positive.
    "threshold": 10,

    // Edges the window may hide behind. When a window touches several
    // edges at once, the first one in the order top, right, bottom, left wins.
    "directions": ["top", "right", "bottom", "left"],

    // How often the window position and pointer are checked (16-1000 ms)
    "pollIntervalMs": 100
  }
}
"#
    .to_string()
}

/// Writes the configuration template to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if the directory or the file cannot be written.
pub fn create_config_file(path: &Path) -> Result<(), std::io::Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_config_template())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EdgeDockConfig, load_config_from_path};

    #[test]
    fn test_generate_config_template_is_valid_jsonc() {
        let template = generate_config_template();
        let stripped = json_comments::StripComments::new(template.as_bytes());
        let config: EdgeDockConfig = serde_json::from_reader(stripped).unwrap();
        assert_eq!(config, EdgeDockConfig::default());
    }

    #[test]
    fn test_create_config_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("edgedock").join("config.jsonc");

        create_config_file(&path).unwrap();

        let (config, _) = load_config_from_path(&path).unwrap();
        assert_eq!(config, EdgeDockConfig::default());
    }
}
