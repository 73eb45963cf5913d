//! CLI output formatting for the docking simulation.

use std::path::Path;

use colored::Colorize;

use crate::dock::actor::{DockSnapshot, StateChange};
use crate::dock::{DockSettings, DockState, Edge, Point, Rect};

/// Formats a dock state, colored by how far the window is from view.
#[must_use]
pub fn format_state(state: DockState) -> String {
    let name = state.name();
    match state {
        DockState::Free => name.green().to_string(),
        DockState::Preview(_) => name.yellow().to_string(),
        DockState::Hidden(_) => name.magenta().to_string(),
    }
}

/// Formats a frame as `(x, y) WxH`.
#[must_use]
pub fn format_frame(frame: Rect) -> String {
    format!("({}, {}) {}x{}", frame.x, frame.y, frame.width, frame.height)
}

/// Formats a boolean as a colored check mark.
#[must_use]
pub fn format_bool(value: bool) -> String {
    if value {
        "✓".green().to_string()
    } else {
        "✗".red().to_string()
    }
}

/// Prints which configuration file the simulation uses.
pub fn print_config_source(path: Option<&Path>) {
    match path {
        Some(path) => println!("{} {}", "Config".dimmed(), path.display()),
        None => println!("{} built-in defaults", "Config".dimmed()),
    }
}

pub fn print_header(edge: Edge, bounds: Rect, frame: Rect, settings: &DockSettings) {
    println!(
        "{} {} edge of a {}x{} desktop",
        "Simulating".bold(),
        edge.to_string().cyan(),
        bounds.width,
        bounds.height
    );
    println!(
        "  threshold {}px, directions {}, window {}\n",
        settings.threshold,
        settings.directions,
        format_frame(frame)
    );
}

pub fn print_step(name: &str, pointer: Option<Point>) {
    match pointer {
        Some(pointer) => println!("{} pointer → ({}, {})", name.bold().cyan(), pointer.x, pointer.y),
        None => println!("{}", name.bold().cyan()),
    }
}

pub fn print_change(change: &StateChange) {
    println!(
        "  {} → {}  {}",
        format_state(change.from),
        format_state(change.to),
        format_frame(change.frame).dimmed()
    );
}

pub fn print_snapshot(snapshot: &DockSnapshot) {
    println!(
        "  resting in {}  visible {}  topmost {}\n",
        format_state(snapshot.state),
        format_bool(snapshot.visible),
        format_bool(snapshot.topmost)
    );
}
