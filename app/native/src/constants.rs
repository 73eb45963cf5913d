//! Application-wide constants.

/// Application name, used for config directories and CLI output.
pub const APP_NAME: &str = "edgedock";

/// Interval between two polls of window geometry and pointer position (ms).
pub const POLL_INTERVAL_MS: u64 = 100;

/// Shortest accepted poll interval (ms).
pub const MIN_POLL_INTERVAL_MS: u64 = 16;

/// Longest accepted poll interval (ms).
pub const MAX_POLL_INTERVAL_MS: u64 = 1000;

/// Duration of the hide and reveal slides (ms).
pub const ANIMATION_DURATION_MS: u64 = 500;

/// Interval between animation frames while a slide is running (ms).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Default distance (px) from an edge at which a window docks.
pub const DEFAULT_HIDE_THRESHOLD: f64 = 10.0;
