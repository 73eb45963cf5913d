//! In-memory window and desktop.
//!
//! Used by the `simulate` command, tests and benchmarks to drive the
//! controller without a windowing system.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use super::geometry::{Point, Rect};
use super::window::{Desktop, DockWindow};

// ============================================================================
// Virtual Window
// ============================================================================

/// A window that only records what was done to it.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualWindow {
    frame: Rect,
    visible: bool,
    topmost: bool,
    activations: u32,
}

impl VirtualWindow {
    /// Creates a visible, non-topmost window with the given frame.
    #[must_use]
    pub const fn new(frame: Rect) -> Self {
        Self {
            frame,
            visible: true,
            topmost: false,
            activations: 0,
        }
    }

    /// Moves the window as a user drag would.
    pub const fn move_to(&mut self, left: f64, top: f64) {
        self.frame.x = left;
        self.frame.y = top;
    }

    /// Number of times [`DockWindow::activate`] was called.
    #[must_use]
    pub const fn activations(&self) -> u32 { self.activations }
}

impl DockWindow for VirtualWindow {
    fn frame(&self) -> Rect { self.frame }

    fn set_left(&mut self, left: f64) { self.frame.x = left; }

    fn set_top(&mut self, top: f64) { self.frame.y = top; }

    fn is_visible(&self) -> bool { self.visible }

    fn show(&mut self) { self.visible = true; }

    fn hide(&mut self) { self.visible = false; }

    fn activate(&mut self) { self.activations += 1; }

    fn is_topmost(&self) -> bool { self.topmost }

    fn set_topmost(&mut self, topmost: bool) { self.topmost = topmost; }
}

// ============================================================================
// Scripted Desktop
// ============================================================================

/// A desktop whose pointer position is set by the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedDesktop {
    bounds: Rect,
    cursor: Option<Point>,
}

impl ScriptedDesktop {
    /// Creates a desktop with the given virtual bounds and no pointer.
    #[must_use]
    pub const fn new(bounds: Rect) -> Self { Self { bounds, cursor: None } }

    /// Moves the pointer. `None` makes the pointer query fail.
    pub fn set_cursor(&mut self, cursor: Option<Point>) { self.cursor = cursor; }

    /// Moves the pointer to `(x, y)`.
    pub fn move_cursor(&mut self, x: f64, y: f64) { self.cursor = Some(Point::new(x, y)); }
}

impl Desktop for ScriptedDesktop {
    fn cursor_position(&self) -> Option<Point> { self.cursor }

    fn virtual_bounds(&self) -> Rect { self.bounds }
}

// ============================================================================
// Shared Handle
// ============================================================================

/// Shares a window or desktop between the controller and the code scripting it.
///
/// The controller gets one clone and the caller keeps another to move the
/// window or pointer while the controller runs.
#[derive(Debug, Default)]
pub struct Shared<T>(Arc<Mutex<T>>);

impl<T> Shared<T> {
    #[must_use]
    pub fn new(value: T) -> Self { Self(Arc::new(Mutex::new(value))) }

    /// Locks the shared value.
    pub fn lock(&self) -> MutexGuard<'_, T> { self.0.lock() }
}

impl<T> Clone for Shared<T> {
    fn clone(&self) -> Self { Self(Arc::clone(&self.0)) }
}

impl<T: DockWindow> DockWindow for Shared<T> {
    fn frame(&self) -> Rect { self.lock().frame() }

    fn set_left(&mut self, left: f64) { self.lock().set_left(left); }

    fn set_top(&mut self, top: f64) { self.lock().set_top(top); }

    fn is_visible(&self) -> bool { self.lock().is_visible() }

    fn show(&mut self) { self.lock().show(); }

    fn hide(&mut self) { self.lock().hide(); }

    fn activate(&mut self) { self.lock().activate(); }

    fn is_topmost(&self) -> bool { self.lock().is_topmost() }

    fn set_topmost(&mut self, topmost: bool) { self.lock().set_topmost(topmost); }
}

impl<T: Desktop> Desktop for Shared<T> {
    fn cursor_position(&self) -> Option<Point> { self.lock().cursor_position() }

    fn virtual_bounds(&self) -> Rect { self.lock().virtual_bounds() }
}
