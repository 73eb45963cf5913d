//! JSON Schema generation for the configuration file.

use crate::config::EdgeDockConfig;

/// Generates a JSON Schema for the edgedock configuration.
///
/// The schema includes all configuration options with their types,
/// descriptions, and default values.
#[must_use]
pub fn generate_schema() -> schemars::Schema {
    let mut schema = schemars::schema_for!(EdgeDockConfig);

    if let Some(obj) = schema.as_object_mut() {
        obj.insert(
            "description".to_string(),
            serde_json::json!("Configuration for the edgedock window docking controller."),
        );
    }

    schema
}

/// Generates a pretty-printed JSON Schema string for the configuration.
#[must_use]
pub fn generate_schema_json() -> String {
    let schema = generate_schema();
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}
