//! Shared types for CLI commands.

use std::fmt;
use std::str::FromStr;

use crate::dock::Rect;

/// Size of the simulated desktop, parsed from `WIDTHxHEIGHT`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DesktopSize {
    pub width: f64,
    pub height: f64,
}

impl DesktopSize {
    /// Desktop bounds with the origin at `(0, 0)`.
    #[must_use]
    pub const fn bounds(self) -> Rect { Rect::new(0.0, 0.0, self.width, self.height) }
}

impl Default for DesktopSize {
    fn default() -> Self {
        Self {
            width: 1920.0,
            height: 1080.0,
        }
    }
}

impl FromStr for DesktopSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || format!("Invalid desktop size '{s}'. Expected WIDTHxHEIGHT, e.g. 1920x1080.");

        let (width, height) = s.to_lowercase().split_once('x').map_or_else(
            || Err(invalid()),
            |(w, h)| {
                let width = w.trim().parse::<f64>().map_err(|_| invalid())?;
                let height = h.trim().parse::<f64>().map_err(|_| invalid())?;
                Ok((width, height))
            },
        )?;

        if !(width.is_finite() && height.is_finite() && width >= 100.0 && height >= 100.0) {
            return Err(format!("Desktop size '{s}' is too small; both sides must be at least 100."));
        }

        Ok(Self { width, height })
    }
}

impl fmt::Display for DesktopSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
