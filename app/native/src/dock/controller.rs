//! The edge-docking state machine.
//!
//! [`EdgeDockController`] is polled by its owner. Each [`tick`] reads the
//! pointer and window frame and advances the state of one edge. Moves are
//! animated and the state only changes once the animation completes, which
//! [`advance`] reports. While a move is in flight the controller is locked
//! and ticks are skipped.
//!
//! [`tick`]: EdgeDockController::tick
//! [`advance`]: EdgeDockController::advance

use std::time::Instant;

use super::edge::{Edge, EdgeMask};
use super::geometry::DockGeometry;
use super::state::DockState;
use super::window::{Desktop, DockWindow};
use crate::animation::AxisAnimator;
use crate::config::{EdgeDockConfig, is_valid_threshold};
use crate::constants::DEFAULT_HIDE_THRESHOLD;

// ============================================================================
// Types
// ============================================================================

/// Auto-hide settings of a controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockSettings {
    /// Distance (px) from an edge at which the window docks. Always positive.
    pub threshold: f64,
    /// Edges the window may dock against.
    pub directions: EdgeMask,
}

impl Default for DockSettings {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_HIDE_THRESHOLD,
            directions: EdgeMask::ALL,
        }
    }
}

impl DockSettings {
    /// Creates settings from the application configuration.
    #[must_use]
    pub fn from_config(config: &EdgeDockConfig) -> Self {
        Self {
            threshold: config.auto_hide.effective_threshold(),
            directions: config.auto_hide.direction_mask(),
        }
    }
}

/// A move that is animating and what happens when it finishes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PendingTransition {
    /// Sliding past the edge. Ends in [`DockState::Hidden`] at `position`.
    Hide { edge: Edge, position: f64 },
    /// Sliding back after the pointer hit the sliver. Ends flush against the
    /// edge in [`DockState::Preview`].
    Reveal(Edge),
    /// Sliding back after an explicit show. Ends just inside the threshold in
    /// [`DockState::Free`].
    Restore(Edge),
}

impl PendingTransition {
    /// Edge the transition moves against.
    #[must_use]
    pub const fn edge(self) -> Edge {
        match self {
            Self::Hide { edge, .. } | Self::Reveal(edge) | Self::Restore(edge) => edge,
        }
    }
}

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TickOutcome {
    /// A move is in flight; the tick was skipped.
    Locked,
    /// The pointer position was unavailable; the tick was skipped.
    NoCursor,
    /// Nothing changed.
    Idle,
    /// The state changed synchronously.
    Transitioned { from: DockState, to: DockState },
    /// A move was started; the state changes when it completes.
    Animating(PendingTransition),
}

// ============================================================================
// Controller
// ============================================================================

/// Docks a window against the desktop edges and slides it out of view.
#[derive(Debug)]
pub struct EdgeDockController<W, D> {
    window: W,
    desktop: D,
    settings: DockSettings,
    state: DockState,
    /// Set while a move is animating; ticks are skipped until it completes.
    pending: Option<PendingTransition>,
    animator: AxisAnimator<PendingTransition>,
}

impl<W: DockWindow, D: Desktop> EdgeDockController<W, D> {
    /// Attaches a controller with default settings.
    pub fn new(window: W, desktop: D) -> Self {
        Self::with_settings(window, desktop, DockSettings::default())
    }

    /// Attaches a controller with explicit settings.
    ///
    /// An invalid threshold in `settings` is replaced by the default.
    pub fn with_settings(window: W, desktop: D, settings: DockSettings) -> Self {
        let mut controller = Self {
            window,
            desktop,
            settings: DockSettings {
                threshold: DEFAULT_HIDE_THRESHOLD,
                directions: settings.directions,
            },
            state: DockState::Free,
            pending: None,
            animator: AxisAnimator::new(),
        };
        controller.set_auto_hide_factor(settings.threshold);
        controller
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// Sets the docking threshold.
    ///
    /// Anything but a positive finite distance is ignored. Returns whether
    /// the value was accepted.
    pub fn set_auto_hide_factor(&mut self, threshold: f64) -> bool {
        if is_valid_threshold(threshold) {
            self.settings.threshold = threshold;
            true
        } else {
            tracing::debug!(
                rejected = threshold,
                current = self.settings.threshold,
                "dock: ignoring invalid auto-hide factor"
            );
            false
        }
    }

    #[must_use]
    pub const fn auto_hide_factor(&self) -> f64 { self.settings.threshold }

    /// Sets the edges the window may dock against.
    ///
    /// Only affects docking from [`DockState::Free`]; a window already docked
    /// against a disabled edge finishes its cycle.
    pub fn set_auto_hide_direction(&mut self, directions: EdgeMask) {
        tracing::debug!(%directions, "dock: auto-hide directions changed");
        self.settings.directions = directions;
    }

    #[must_use]
    pub const fn auto_hide_direction(&self) -> EdgeMask { self.settings.directions }

    // ========================================================================
    // Queries
    // ========================================================================

    /// Whether the window is docked (previewing or hidden) against any edge.
    #[must_use]
    pub const fn is_hidden(&self) -> bool { self.state.is_docked() }

    #[must_use]
    pub const fn state(&self) -> DockState { self.state }

    /// Whether a move is in flight.
    #[must_use]
    pub const fn is_locked(&self) -> bool { self.pending.is_some() }

    #[must_use]
    pub const fn pending(&self) -> Option<PendingTransition> { self.pending }

    /// Whether the owner needs to keep calling [`Self::advance`].
    #[must_use]
    pub const fn is_animating(&self) -> bool { self.animator.is_active() }

    pub const fn window(&self) -> &W { &self.window }

    pub const fn window_mut(&mut self) -> &mut W { &mut self.window }

    pub const fn desktop(&self) -> &D { &self.desktop }

    pub const fn desktop_mut(&mut self) -> &mut D { &mut self.desktop }

    fn geometry(&self) -> DockGeometry {
        DockGeometry::new(
            self.window.frame(),
            self.desktop.virtual_bounds(),
            self.settings.threshold,
        )
    }

    // ========================================================================
    // Polling
    // ========================================================================

    /// Runs one poll of the state machine.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        if self.pending.is_some() {
            return TickOutcome::Locked;
        }

        let Some(pointer) = self.desktop.cursor_position() else {
            tracing::trace!("dock: pointer position unavailable, skipping tick");
            return TickOutcome::NoCursor;
        };

        let geometry = self.geometry();

        match self.state {
            DockState::Free => {
                let Some(edge) =
                    self.settings.directions.iter().find(|edge| geometry.is_touching(*edge))
                else {
                    return TickOutcome::Idle;
                };
                self.window.set_topmost(true);
                self.transition(DockState::Preview(edge))
            }
            DockState::Preview(edge) => {
                if !geometry.is_touching(edge) {
                    self.window.set_topmost(false);
                    return self.transition(DockState::Free);
                }
                if !geometry.pointer_outside(edge, pointer) {
                    return TickOutcome::Idle;
                }
                let position = geometry.hidden_position(edge);
                self.begin(position, PendingTransition::Hide { edge, position }, now)
            }
            DockState::Hidden(edge) => {
                if !geometry.pointer_in_band(edge, pointer) {
                    return TickOutcome::Idle;
                }
                self.window.show();
                self.window.activate();
                self.begin(geometry.revealed_position(edge), PendingTransition::Reveal(edge), now)
            }
        }
    }

    /// Advances the running move to `now`.
    ///
    /// Returns the new state when a move completed during this call.
    pub fn advance(&mut self, now: Instant) -> Option<DockState> {
        let mut settled = None;
        for pending in self.animator.step(now, &mut self.window) {
            settled = Some(self.complete(pending));
        }
        settled
    }

    // ========================================================================
    // Show
    // ========================================================================

    /// Brings the window back into view and releases it from its edge.
    ///
    /// A previewing window is moved just inside the threshold immediately. A
    /// hidden window slides back first and is released when the slide
    /// completes.
    pub fn show(&mut self, now: Instant) {
        self.window.show();
        self.window.activate();

        if self.state == DockState::Free {
            return;
        }
        self.window.set_topmost(false);

        let geometry = self.geometry();
        match self.state {
            DockState::Free => {}
            DockState::Preview(edge) => {
                // A hide that is still sliding must not complete afterwards.
                self.animator.stop(edge.axis());
                self.pending = None;
                self.window.set_axis_value(edge.axis(), geometry.inset_position(edge));
                self.transition(DockState::Free);
            }
            DockState::Hidden(edge) => match self.pending {
                Some(PendingTransition::Restore(_)) => {}
                Some(PendingTransition::Reveal(_)) => {
                    let target = self
                        .animator
                        .target(edge.axis())
                        .unwrap_or_else(|| geometry.revealed_position(edge));
                    self.begin(target, PendingTransition::Restore(edge), now);
                }
                _ => {
                    self.begin(
                        geometry.revealed_position(edge),
                        PendingTransition::Restore(edge),
                        now,
                    );
                }
            },
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    fn transition(&mut self, next: DockState) -> TickOutcome {
        let from = self.state;
        self.state = next;
        tracing::debug!(%from, to = %next, "dock: state changed");
        TickOutcome::Transitioned { from, to: next }
    }

    /// Starts the slide for `pending` and locks the controller until it completes.
    fn begin(&mut self, target: f64, pending: PendingTransition, now: Instant) -> TickOutcome {
        let axis = pending.edge().axis();
        let transition = self.animator.start(&self.window, axis, target, now, Some(pending));
        self.pending = Some(pending);
        tracing::debug!(
            ?pending,
            from = transition.from,
            to = transition.to,
            "dock: slide started"
        );
        TickOutcome::Animating(pending)
    }

    fn complete(&mut self, pending: PendingTransition) -> DockState {
        let geometry = self.geometry();
        match pending {
            PendingTransition::Hide { edge, position } => {
                self.window.set_axis_value(edge.axis(), position);
                self.transition(DockState::Hidden(edge));
                self.window.hide();
            }
            PendingTransition::Reveal(edge) => {
                self.window.set_axis_value(edge.axis(), geometry.flush_position(edge));
                self.transition(DockState::Preview(edge));
            }
            PendingTransition::Restore(edge) => {
                self.window.set_axis_value(edge.axis(), geometry.inset_position(edge));
                self.transition(DockState::Free);
            }
        }
        self.pending = None;
        self.state
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::dock::geometry::{Axis, Point, Rect};
    use crate::dock::virtual_window::{ScriptedDesktop, VirtualWindow};

    type TestController = EdgeDockController<VirtualWindow, ScriptedDesktop>;

    const SLIDE: Duration = Duration::from_millis(500);

    fn desktop() -> ScriptedDesktop {
        let mut desktop = ScriptedDesktop::new(Rect::new(0.0, 0.0, 1920.0, 1080.0));
        desktop.move_cursor(960.0, 540.0);
        desktop
    }

    fn controller(frame: Rect, threshold: f64) -> TestController {
        EdgeDockController::with_settings(
            VirtualWindow::new(frame),
            desktop(),
            DockSettings {
                threshold,
                directions: EdgeMask::ALL,
            },
        )
    }

    /// A 200x100 window touching only `edge` (3px away from it).
    fn frame_at(edge: Edge) -> Rect {
        match edge {
            Edge::Top => Rect::new(800.0, 3.0, 200.0, 100.0),
            Edge::Right => Rect::new(1717.0, 500.0, 200.0, 100.0),
            Edge::Bottom => Rect::new(800.0, 977.0, 200.0, 100.0),
            Edge::Left => Rect::new(3.0, 500.0, 200.0, 100.0),
        }
    }

    /// A pointer position well outside any of the `frame_at` windows.
    fn pointer_away(dock: &mut TestController) { dock.desktop_mut().move_cursor(960.0, 540.0); }

    /// A pointer position inside the activation band of `edge`.
    fn pointer_in_band(dock: &mut TestController, edge: Edge) {
        let frame = dock.window().frame();
        let (x, y) = match edge {
            Edge::Top => (frame.x + 50.0, 2.0),
            Edge::Right => (1918.0, frame.y + 50.0),
            Edge::Bottom => (frame.x + 50.0, 1078.0),
            Edge::Left => (2.0, frame.y + 50.0),
        };
        dock.desktop_mut().move_cursor(x, y);
    }

    /// Ticks until docked and hidden against `edge`, returning the time used.
    fn hide(dock: &mut TestController, edge: Edge, start: Instant) -> Instant {
        pointer_away(dock);
        assert!(matches!(dock.tick(start), TickOutcome::Transitioned { .. }));
        assert_eq!(dock.state(), DockState::Preview(edge));
        assert!(matches!(dock.tick(start), TickOutcome::Animating(_)));
        let end = start + SLIDE;
        assert_eq!(dock.advance(end), Some(DockState::Hidden(edge)));
        end
    }

    #[test]
    fn test_defaults() {
        let dock = TestController::new(VirtualWindow::new(Rect::new(500.0, 500.0, 200.0, 100.0)), desktop());
        assert!((dock.auto_hide_factor() - 10.0).abs() < f64::EPSILON);
        assert_eq!(dock.auto_hide_direction(), EdgeMask::ALL);
        assert_eq!(dock.state(), DockState::Free);
        assert!(!dock.is_hidden());
        assert!(!dock.is_locked());
    }

    #[test]
    fn test_each_edge_enters_its_own_preview() {
        for edge in Edge::PRIORITY {
            let mut dock = controller(frame_at(edge), 10.0);
            let now = Instant::now();
            let outcome = dock.tick(now);
            assert_eq!(outcome, TickOutcome::Transitioned {
                from: DockState::Free,
                to: DockState::Preview(edge),
            });
            assert!(dock.window().is_topmost());
            assert!(dock.is_hidden());
            assert!(!dock.is_locked());
        }
    }

    #[test]
    fn test_disabled_edge_does_not_dock() {
        for edge in Edge::PRIORITY {
            let mut dock = controller(frame_at(edge), 10.0);
            dock.set_auto_hide_direction(EdgeMask::ALL.without(edge));
            assert_eq!(dock.tick(Instant::now()), TickOutcome::Idle);
            assert_eq!(dock.state(), DockState::Free);
            assert!(!dock.window().is_topmost());
        }
    }

    #[test]
    fn test_corner_uses_priority_order() {
        // Top-left corner touches Top and Left.
        let mut dock = controller(Rect::new(2.0, 2.0, 200.0, 100.0), 10.0);
        dock.tick(Instant::now());
        assert_eq!(dock.state(), DockState::Preview(Edge::Top));

        let mut dock = controller(Rect::new(2.0, 2.0, 200.0, 100.0), 10.0);
        dock.set_auto_hide_direction(EdgeMask::BOTTOM | EdgeMask::LEFT);
        dock.tick(Instant::now());
        assert_eq!(dock.state(), DockState::Preview(Edge::Left));

        // Bottom-right corner touches Right and Bottom.
        let mut dock = controller(Rect::new(1718.0, 978.0, 200.0, 100.0), 10.0);
        dock.tick(Instant::now());
        assert_eq!(dock.state(), DockState::Preview(Edge::Right));
    }

    #[test]
    fn test_empty_mask_never_docks() {
        let mut dock = controller(Rect::new(0.0, 0.0, 1920.0, 1080.0), 10.0);
        dock.set_auto_hide_direction(EdgeMask::NONE);
        assert_eq!(dock.tick(Instant::now()), TickOutcome::Idle);
        assert_eq!(dock.state(), DockState::Free);
    }

    #[test]
    fn test_moving_away_from_edge_returns_to_free() {
        for edge in Edge::PRIORITY {
            let mut dock = controller(frame_at(edge), 10.0);
            let now = Instant::now();
            dock.tick(now);
            assert_eq!(dock.state(), DockState::Preview(edge));

            dock.window_mut().move_to(800.0, 500.0);
            let outcome = dock.tick(now);
            assert_eq!(outcome, TickOutcome::Transitioned {
                from: DockState::Preview(edge),
                to: DockState::Free,
            });
            assert!(!dock.window().is_topmost());
            assert!(!dock.is_hidden());
        }
    }

    #[test]
    fn test_pointer_inside_window_keeps_preview() {
        let mut dock = controller(frame_at(Edge::Top), 10.0);
        dock.desktop_mut().move_cursor(850.0, 50.0);
        let now = Instant::now();
        dock.tick(now);
        assert_eq!(dock.tick(now), TickOutcome::Idle);
        assert_eq!(dock.state(), DockState::Preview(Edge::Top));
        assert!(!dock.is_locked());
    }

    #[test]
    fn test_hide_offsets_by_extent_plus_threshold() {
        for edge in Edge::PRIORITY {
            let frame = frame_at(edge);
            let mut dock = controller(frame, 10.0);
            hide(&mut dock, edge, Instant::now());

            let hidden = dock.window().frame();
            let axis = edge.axis();
            let travel = frame.extent(axis) + 10.0;
            let moved = hidden.position(axis) - frame.position(axis);
            assert!((moved - edge.hide_sign() * travel).abs() < 1e-9, "{edge}: moved {moved}");
            assert!(
                (hidden.position(axis.perpendicular()) - frame.position(axis.perpendicular()))
                    .abs()
                    < f64::EPSILON
            );
            assert!(!dock.window().is_visible());
            assert!(dock.is_hidden());
            assert!(!dock.is_locked());
        }
    }

    #[test]
    fn test_ticks_are_skipped_while_sliding() {
        let mut dock = controller(frame_at(Edge::Top), 10.0);
        let start = Instant::now();
        dock.tick(start);
        assert!(matches!(dock.tick(start), TickOutcome::Animating(PendingTransition::Hide { .. })));
        assert!(dock.is_locked());

        // Moving the window away would normally release it; the lock wins.
        dock.window_mut().move_to(800.0, 500.0);
        assert_eq!(dock.tick(start + Duration::from_millis(100)), TickOutcome::Locked);
        assert_eq!(dock.state(), DockState::Preview(Edge::Top));

        assert_eq!(dock.advance(start + Duration::from_millis(200)), None);
        assert!(dock.is_locked());
        assert_eq!(dock.advance(start + SLIDE), Some(DockState::Hidden(Edge::Top)));
        assert!(!dock.is_locked());
    }

    #[test]
    fn test_reveal_ends_flush_against_edge() {
        for edge in Edge::PRIORITY {
            let mut dock = controller(frame_at(edge), 10.0);
            let hidden_at = hide(&mut dock, edge, Instant::now());

            pointer_in_band(&mut dock, edge);
            let outcome = dock.tick(hidden_at);
            assert_eq!(outcome, TickOutcome::Animating(PendingTransition::Reveal(edge)));
            assert!(dock.window().is_visible());
            assert_eq!(dock.window().activations(), 1);

            assert_eq!(dock.advance(hidden_at + SLIDE), Some(DockState::Preview(edge)));
            let frame = dock.window().frame();
            let near = DockGeometry::new(frame, dock.desktop().virtual_bounds(), 10.0)
                .near_distance(edge);
            assert!(near.abs() < 1e-9, "{edge}: {near}px from the edge");
            assert!(dock.window().is_topmost());
        }
    }

    #[test]
    fn test_hidden_ignores_pointer_outside_band() {
        let mut dock = controller(frame_at(Edge::Left), 10.0);
        let hidden_at = hide(&mut dock, Edge::Left, Instant::now());

        // In the band but above the window's vertical span.
        dock.desktop_mut().move_cursor(2.0, 100.0);
        assert_eq!(dock.tick(hidden_at), TickOutcome::Idle);
        // Aligned with the window but too far from the edge.
        dock.desktop_mut().move_cursor(11.0, 550.0);
        assert_eq!(dock.tick(hidden_at), TickOutcome::Idle);
        assert_eq!(dock.state(), DockState::Hidden(Edge::Left));
        assert!(!dock.window().is_visible());
    }

    #[test]
    fn test_top_scenario_hide_and_reveal() {
        let mut dock = controller(Rect::new(100.0, 3.0, 200.0, 40.0), 5.0);
        dock.desktop_mut().move_cursor(150.0, 20.0);
        let start = Instant::now();

        dock.tick(start);
        assert_eq!(dock.state(), DockState::Preview(Edge::Top));
        assert!(dock.window().is_topmost());

        dock.desktop_mut().move_cursor(500.0, 400.0);
        let outcome = dock.tick(start);
        assert_eq!(
            outcome,
            TickOutcome::Animating(PendingTransition::Hide {
                edge: Edge::Top,
                position: -42.0,
            })
        );

        dock.advance(start + Duration::from_millis(250));
        assert!((dock.window().frame().y - -19.5).abs() < 1e-9);

        assert_eq!(dock.advance(start + SLIDE), Some(DockState::Hidden(Edge::Top)));
        assert!((dock.window().frame().y - -42.0).abs() < f64::EPSILON);
        assert!(!dock.window().is_visible());

        let hidden_at = start + SLIDE;
        dock.desktop_mut().move_cursor(150.0, 2.0);
        assert_eq!(dock.tick(hidden_at), TickOutcome::Animating(PendingTransition::Reveal(Edge::Top)));
        assert!(dock.window().is_visible());
        assert_eq!(dock.window().activations(), 1);

        assert_eq!(dock.advance(hidden_at + SLIDE), Some(DockState::Preview(Edge::Top)));
        assert!(dock.window().frame().y.abs() < f64::EPSILON);
    }

    #[test]
    fn test_show_from_hidden_slides_back_and_releases() {
        let mut dock = controller(Rect::new(100.0, 3.0, 200.0, 40.0), 5.0);
        let hidden_at = hide(&mut dock, Edge::Top, Instant::now());

        dock.show(hidden_at);
        assert!(dock.window().is_visible());
        assert!(!dock.window().is_topmost());
        assert_eq!(dock.window().activations(), 1);
        assert_eq!(dock.pending(), Some(PendingTransition::Restore(Edge::Top)));
        assert_eq!(dock.tick(hidden_at), TickOutcome::Locked);

        assert_eq!(dock.advance(hidden_at + SLIDE), Some(DockState::Free));
        assert!((dock.window().frame().y - 6.0).abs() < f64::EPSILON);
        assert!(!dock.window().is_topmost());
        assert!(!dock.is_hidden());

        // Released just outside the threshold, so the next poll keeps it free.
        assert_eq!(dock.tick(hidden_at + SLIDE), TickOutcome::Idle);
    }

    #[test]
    fn test_show_from_preview_snaps_without_sliding() {
        for edge in Edge::PRIORITY {
            let mut dock = controller(frame_at(edge), 10.0);
            let now = Instant::now();
            dock.tick(now);

            dock.show(now);
            assert_eq!(dock.state(), DockState::Free);
            assert!(!dock.is_animating());
            assert!(!dock.is_locked());
            assert!(!dock.window().is_topmost());

            let frame = dock.window().frame();
            let near =
                DockGeometry::new(frame, dock.desktop().virtual_bounds(), 10.0).near_distance(edge);
            assert!((near - 11.0).abs() < 1e-9, "{edge}: {near}");
        }
    }

    #[test]
    fn test_show_while_hiding_cancels_the_hide() {
        let mut dock = controller(frame_at(Edge::Top), 10.0);
        let start = Instant::now();
        dock.tick(start);
        dock.tick(start);
        dock.advance(start + Duration::from_millis(100));

        dock.show(start + Duration::from_millis(100));
        assert_eq!(dock.state(), DockState::Free);
        assert!((dock.window().frame().y - 11.0).abs() < f64::EPSILON);

        assert_eq!(dock.advance(start + SLIDE), None);
        assert!(dock.window().is_visible());
        assert_eq!(dock.state(), DockState::Free);
    }

    #[test]
    fn test_show_while_revealing_retargets() {
        let mut dock = controller(Rect::new(100.0, 3.0, 200.0, 40.0), 5.0);
        let hidden_at = hide(&mut dock, Edge::Top, Instant::now());
        dock.desktop_mut().move_cursor(150.0, 2.0);
        dock.tick(hidden_at);
        dock.advance(hidden_at + Duration::from_millis(250));

        let show_at = hidden_at + Duration::from_millis(250);
        dock.show(show_at);
        assert_eq!(dock.pending(), Some(PendingTransition::Restore(Edge::Top)));

        assert_eq!(dock.advance(show_at + SLIDE), Some(DockState::Free));
        assert!((dock.window().frame().y - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_show_when_free_only_activates() {
        let mut dock = controller(Rect::new(500.0, 500.0, 200.0, 100.0), 10.0);
        dock.window_mut().hide();
        dock.show(Instant::now());
        assert!(dock.window().is_visible());
        assert_eq!(dock.window().activations(), 1);
        assert_eq!(dock.window().frame(), Rect::new(500.0, 500.0, 200.0, 100.0));
        assert_eq!(dock.state(), DockState::Free);
    }

    #[test]
    fn test_rejects_invalid_factor() {
        let mut dock = controller(frame_at(Edge::Top), 7.0);
        assert!(!dock.set_auto_hide_factor(0.0));
        assert!(!dock.set_auto_hide_factor(-4.0));
        assert!(!dock.set_auto_hide_factor(f64::NAN));
        assert!(!dock.set_auto_hide_factor(f64::INFINITY));
        assert!(!dock.set_auto_hide_factor(f64::NEG_INFINITY));
        assert!((dock.auto_hide_factor() - 7.0).abs() < f64::EPSILON);

        assert!(dock.set_auto_hide_factor(2.5));
        assert!((dock.auto_hide_factor() - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_infinite_factor_keeps_window_free() {
        let mut dock = controller(Rect::new(500.0, 500.0, 200.0, 100.0), 10.0);
        assert!(!dock.set_auto_hide_factor(f64::INFINITY));

        assert_eq!(dock.tick(Instant::now()), TickOutcome::Idle);
        assert_eq!(dock.state(), DockState::Free);
        assert!(!dock.is_locked());
        assert_eq!(dock.window().frame(), Rect::new(500.0, 500.0, 200.0, 100.0));
    }

    #[test]
    fn test_invalid_initial_threshold_uses_default() {
        let dock = controller(frame_at(Edge::Top), -1.0);
        assert!((dock.auto_hide_factor() - DEFAULT_HIDE_THRESHOLD).abs() < f64::EPSILON);

        let dock = controller(frame_at(Edge::Top), f64::INFINITY);
        assert!((dock.auto_hide_factor() - DEFAULT_HIDE_THRESHOLD).abs() < f64::EPSILON);
    }

    #[test]
    fn test_missing_pointer_skips_tick() {
        let mut dock = controller(frame_at(Edge::Top), 10.0);
        dock.desktop_mut().set_cursor(None);
        assert_eq!(dock.tick(Instant::now()), TickOutcome::NoCursor);
        assert_eq!(dock.state(), DockState::Free);
        assert!(!dock.is_locked());

        dock.desktop_mut().set_cursor(Some(Point::new(960.0, 540.0)));
        dock.tick(Instant::now());
        assert_eq!(dock.state(), DockState::Preview(Edge::Top));
    }

    #[test]
    fn test_only_moving_axis_is_animated() {
        let mut dock = controller(frame_at(Edge::Right), 10.0);
        let start = Instant::now();
        dock.tick(start);
        dock.tick(start);
        assert!(dock.animator.is_animating(Axis::Horizontal));
        assert!(!dock.animator.is_animating(Axis::Vertical));
    }
}
