//! Desktop edges and the set of edges a window may dock against.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::geometry::Axis;

// ============================================================================
// Edge
// ============================================================================

/// One side of the virtual desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in docking priority order.
    ///
    /// When a window touches several edges at once (e.g. it sits in a corner),
    /// only the first enabled edge in this list docks.
    pub const PRIORITY: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// The axis a window moves along when hiding behind this edge.
    #[must_use]
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Right => Axis::Horizontal,
        }
    }

    /// Direction of travel along [`Self::axis`] when hiding: `-1.0` towards the
    /// origin (top, left), `+1.0` away from it (right, bottom).
    #[must_use]
    pub const fn hide_sign(self) -> f64 {
        match self {
            Self::Top | Self::Left => -1.0,
            Self::Right | Self::Bottom => 1.0,
        }
    }

    /// Bit used by [`EdgeMask`].
    const fn bit(self) -> u8 {
        match self {
            Self::Top => 1,
            Self::Right => 2,
            Self::Bottom => 4,
            Self::Left => 8,
        }
    }

    /// Lowercase name, as used in config files and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    /// Name used in the legacy state names (`PreviewTopHidden`, `TopHidden`, ...).
    pub(crate) const fn title(self) -> &'static str {
        match self {
            Self::Top => "Top",
            Self::Right => "Right",
            Self::Bottom => "Bottom",
            Self::Left => "Left",
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "right" => Ok(Self::Right),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            other => Err(format!(
                "Invalid edge '{other}'. Expected 'top', 'right', 'bottom' or 'left'."
            )),
        }
    }
}

// ============================================================================
// Edge Mask
// ============================================================================

/// Set of edges that auto-hide is enabled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeMask(u8);

impl EdgeMask {
    /// No edge enabled: the window never docks.
    pub const NONE: Self = Self(0);
    pub const TOP: Self = Self(1);
    pub const RIGHT: Self = Self(2);
    pub const BOTTOM: Self = Self(4);
    pub const LEFT: Self = Self(8);
    /// Every edge enabled (the default).
    pub const ALL: Self = Self(15);

    /// Returns whether `edge` is enabled.
    #[must_use]
    pub const fn contains(self, edge: Edge) -> bool { self.0 & edge.bit() != 0 }

    /// Returns a copy with `edge` enabled.
    #[must_use]
    pub const fn with(self, edge: Edge) -> Self { Self(self.0 | edge.bit()) }

    /// Returns a copy with `edge` disabled.
    #[must_use]
    pub const fn without(self, edge: Edge) -> Self { Self(self.0 & !edge.bit()) }

    #[must_use]
    pub const fn is_empty(self) -> bool { self.0 == 0 }

    /// Enabled edges, in priority order.
    pub fn iter(self) -> impl Iterator<Item = Edge> {
        Edge::PRIORITY.into_iter().filter(move |edge| self.contains(*edge))
    }

    /// Raw bit representation (`Top = 1`, `Right = 2`, `Bottom = 4`, `Left = 8`).
    #[must_use]
    pub const fn bits(self) -> u8 { self.0 }
}

impl Default for EdgeMask {
    fn default() -> Self { Self::ALL }
}

impl From<Edge> for EdgeMask {
    fn from(edge: Edge) -> Self { Self(edge.bit()) }
}

impl std::ops::BitOr for EdgeMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self { Self(self.0 | rhs.0) }
}

impl FromIterator<Edge> for EdgeMask {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

impl fmt::Display for EdgeMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let names: Vec<&str> = self.iter().map(Edge::as_str).collect();
        f.write_str(&names.join(","))
    }
}

impl FromStr for EdgeMask {
    type Err = String;

    /// Parses `all`, `none`, or a comma-separated list such as `top,right`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::ALL),
            "none" | "" => Ok(Self::NONE),
            list => list.split(',').map(str::parse::<Edge>).collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(Edge::PRIORITY, [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left]);
    }

    #[test]
    fn test_axis_and_sign() {
        assert_eq!(Edge::Top.axis(), Axis::Vertical);
        assert_eq!(Edge::Bottom.axis(), Axis::Vertical);
        assert_eq!(Edge::Left.axis(), Axis::Horizontal);
        assert_eq!(Edge::Right.axis(), Axis::Horizontal);
        assert!(Edge::Top.hide_sign() < 0.0);
        assert!(Edge::Left.hide_sign() < 0.0);
        assert!(Edge::Right.hide_sign() > 0.0);
        assert!(Edge::Bottom.hide_sign() > 0.0);
    }

    #[test]
    fn test_mask_default_is_all() {
        let mask = EdgeMask::default();
        assert_eq!(mask, EdgeMask::ALL);
        assert_eq!(mask.iter().collect::<Vec<_>>(), Edge::PRIORITY.to_vec());
    }

    #[test]
    fn test_mask_bits_match_flags() {
        assert_eq!(EdgeMask::TOP.bits(), 1);
        assert_eq!(EdgeMask::RIGHT.bits(), 2);
        assert_eq!(EdgeMask::BOTTOM.bits(), 4);
        assert_eq!(EdgeMask::LEFT.bits(), 8);
        assert_eq!((EdgeMask::TOP | EdgeMask::RIGHT).bits(), 3);
    }

    #[test]
    fn test_mask_with_without() {
        let mask = EdgeMask::NONE.with(Edge::Left).with(Edge::Top);
        assert!(mask.contains(Edge::Top));
        assert!(mask.contains(Edge::Left));
        assert!(!mask.contains(Edge::Right));
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![Edge::Top, Edge::Left]);

        let mask = mask.without(Edge::Top);
        assert!(!mask.contains(Edge::Top));
    }

    #[test]
    fn test_mask_parse() {
        assert_eq!("all".parse::<EdgeMask>(), Ok(EdgeMask::ALL));
        assert_eq!("none".parse::<EdgeMask>(), Ok(EdgeMask::NONE));
        assert_eq!("Top, right".parse::<EdgeMask>(), Ok(EdgeMask::TOP | EdgeMask::RIGHT));
        assert!("top,middle".parse::<EdgeMask>().is_err());
    }

    #[test]
    fn test_mask_display() {
        assert_eq!((EdgeMask::LEFT | EdgeMask::TOP).to_string(), "top,left");
        assert_eq!(EdgeMask::NONE.to_string(), "none");
    }

    #[test]
    fn test_edge_serde_lowercase() {
        let json = serde_json::to_string(&Edge::Bottom).unwrap();
        assert_eq!(json, "\"bottom\"");
        let edge: Edge = serde_json::from_str("\"left\"").unwrap();
        assert_eq!(edge, Edge::Left);
    }
}
