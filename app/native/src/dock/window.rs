//! Capabilities the controller needs from its environment.
//!
//! The controller never talks to a windowing system directly. Hosts implement
//! [`DockWindow`] for the window being docked and [`Desktop`] for the global
//! pointer and monitor layout, which keeps the state machine testable without
//! a display.

use super::geometry::{Axis, Point, Rect};

/// A top-level window the controller is attached to.
///
/// The controller only moves, shows, hides, activates and raises the window.
/// It never creates or destroys it.
pub trait DockWindow {
    /// Current frame (left, top, width, height) in global coordinates.
    fn frame(&self) -> Rect;

    fn set_left(&mut self, left: f64);

    fn set_top(&mut self, top: f64);

    /// Whether the window's surface is currently rendered.
    fn is_visible(&self) -> bool;

    fn show(&mut self);

    fn hide(&mut self);

    /// Bring the window to the foreground and give it focus.
    fn activate(&mut self);

    fn is_topmost(&self) -> bool;

    fn set_topmost(&mut self, topmost: bool);

    /// Reads the coordinate animated along `axis`.
    fn axis_value(&self, axis: Axis) -> f64 { self.frame().position(axis) }

    /// Writes the coordinate animated along `axis`.
    fn set_axis_value(&mut self, axis: Axis, value: f64) {
        match axis {
            Axis::Horizontal => self.set_left(value),
            Axis::Vertical => self.set_top(value),
        }
    }
}

/// Global desktop queries.
pub trait Desktop {
    /// Current pointer position, or `None` when no pointer is available
    /// (the OS query failed or there is no pointing device).
    fn cursor_position(&self) -> Option<Point>;

    /// Bounding rectangle of every monitor combined.
    fn virtual_bounds(&self) -> Rect;
}

impl<T: DockWindow + ?Sized> DockWindow for Box<T> {
    fn frame(&self) -> Rect { (**self).frame() }

    fn set_left(&mut self, left: f64) { (**self).set_left(left) }

    fn set_top(&mut self, top: f64) { (**self).set_top(top) }

    fn is_visible(&self) -> bool { (**self).is_visible() }

    fn show(&mut self) { (**self).show() }

    fn hide(&mut self) { (**self).hide() }

    fn activate(&mut self) { (**self).activate() }

    fn is_topmost(&self) -> bool { (**self).is_topmost() }

    fn set_topmost(&mut self, topmost: bool) { (**self).set_topmost(topmost) }
}

impl<T: Desktop + ?Sized> Desktop for Box<T> {
    fn cursor_position(&self) -> Option<Point> { (**self).cursor_position() }

    fn virtual_bounds(&self) -> Rect { (**self).virtual_bounds() }
}
