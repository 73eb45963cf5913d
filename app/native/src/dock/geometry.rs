//! Geometry types and the per-edge docking math.
//!
//! All four edges share one set of formulas. Each edge is described by the
//! axis it moves along, the sign of the hide direction, and how distances
//! are measured from it. [`DockGeometry`] evaluates those formulas for one
//! snapshot of window frame, desktop bounds and threshold.

use serde::{Deserialize, Serialize};

use super::edge::Edge;

// ============================================================================
// Geometry Types
// ============================================================================

/// A rectangle with position and size.
///
/// `x`/`y` are the left/top coordinates in global desktop space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge coordinate.
    #[must_use]
    pub fn right(&self) -> f64 { self.x + self.width }

    /// Bottom edge coordinate.
    #[must_use]
    pub fn bottom(&self) -> f64 { self.y + self.height }

    /// Position along `axis` (left for horizontal, top for vertical).
    #[must_use]
    pub const fn position(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Size along `axis` (width for horizontal, height for vertical).
    #[must_use]
    pub const fn extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// A point in global desktop coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }

    /// Coordinate along `axis`.
    #[must_use]
    pub const fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

/// A single window coordinate that can be animated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The window's left coordinate.
    Horizontal,
    /// The window's top coordinate.
    Vertical,
}

impl Axis {
    /// The other axis.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

// ============================================================================
// Docking Geometry
// ============================================================================

/// Snapshot of everything the docking tests need for one tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DockGeometry {
    /// Current window frame.
    pub frame: Rect,
    /// Bounding rectangle of all monitors.
    pub bounds: Rect,
    /// Auto-hide threshold in pixels.
    pub threshold: f64,
}

impl DockGeometry {
    #[must_use]
    pub const fn new(frame: Rect, bounds: Rect, threshold: f64) -> Self {
        Self { frame, bounds, threshold }
    }

    /// Distance from the desktop edge to a coordinate on the edge's axis,
    /// measured towards the inside of the desktop.
    fn inward(&self, edge: Edge, coordinate: f64) -> f64 {
        let axis = edge.axis();
        match edge {
            Edge::Top | Edge::Left => coordinate - self.bounds.position(axis),
            Edge::Right | Edge::Bottom => {
                self.bounds.position(axis) + self.bounds.extent(axis) - coordinate
            }
        }
    }

    /// Distance between the window's side facing `edge` and the edge itself.
    #[must_use]
    pub fn near_distance(&self, edge: Edge) -> f64 {
        let axis = edge.axis();
        let near_side = match edge {
            Edge::Top | Edge::Left => self.frame.position(axis),
            Edge::Right | Edge::Bottom => self.frame.position(axis) + self.frame.extent(axis),
        };
        self.inward(edge, near_side)
    }

    /// Distance between the window's side opposite `edge` and the edge.
    #[must_use]
    pub fn far_distance(&self, edge: Edge) -> f64 {
        let axis = edge.axis();
        let far_side = match edge {
            Edge::Top | Edge::Left => self.frame.position(axis) + self.frame.extent(axis),
            Edge::Right | Edge::Bottom => self.frame.position(axis),
        };
        self.inward(edge, far_side)
    }

    /// Distance of the pointer from `edge`.
    #[must_use]
    pub fn pointer_distance(&self, edge: Edge, pointer: Point) -> f64 {
        self.inward(edge, pointer.along(edge.axis()))
    }

    /// Whether the pointer lies within the window's span on the axis
    /// perpendicular to `edge` (bounds inclusive).
    #[must_use]
    pub fn within_span(&self, edge: Edge, pointer: Point) -> bool {
        let axis = edge.axis().perpendicular();
        let value = pointer.along(axis);
        let start = self.frame.position(axis);
        value >= start && value <= start + self.frame.extent(axis)
    }

    /// The window is docked against `edge` (inclusive of the threshold).
    #[must_use]
    pub fn is_touching(&self, edge: Edge) -> bool { self.near_distance(edge) <= self.threshold }

    /// The pointer left the window's footprint, treating `edge` as the
    /// occluded side.
    #[must_use]
    pub fn pointer_outside(&self, edge: Edge, pointer: Point) -> bool {
        !self.within_span(edge, pointer)
            || self.pointer_distance(edge, pointer) > self.far_distance(edge)
    }

    /// The pointer is in the activation band of a window hidden behind `edge`.
    #[must_use]
    pub fn pointer_in_band(&self, edge: Edge, pointer: Point) -> bool {
        self.pointer_distance(edge, pointer) <= self.threshold && self.within_span(edge, pointer)
    }

    /// How far the window travels when hiding or revealing.
    #[must_use]
    pub fn travel(&self, edge: Edge) -> f64 { self.frame.extent(edge.axis()) + self.threshold }

    /// Axis coordinate after sliding the window past `edge`.
    #[must_use]
    pub fn hidden_position(&self, edge: Edge) -> f64 {
        self.frame.position(edge.axis()) + edge.hide_sign() * self.travel(edge)
    }

    /// Axis coordinate after sliding a hidden window back towards the desktop.
    #[must_use]
    pub fn revealed_position(&self, edge: Edge) -> f64 {
        self.frame.position(edge.axis()) - edge.hide_sign() * self.travel(edge)
    }

    /// Axis coordinate that puts the window's side exactly on `edge`.
    #[must_use]
    pub fn flush_position(&self, edge: Edge) -> f64 {
        let axis = edge.axis();
        match edge {
            Edge::Top | Edge::Left => self.bounds.position(axis),
            Edge::Right | Edge::Bottom => {
                self.bounds.position(axis) + self.bounds.extent(axis) - self.frame.extent(axis)
            }
        }
    }

    /// Axis coordinate one pixel beyond the threshold inside `edge`, so the
    /// window no longer counts as docked.
    #[must_use]
    pub fn inset_position(&self, edge: Edge) -> f64 {
        self.flush_position(edge) - edge.hide_sign() * (self.threshold + 1.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
