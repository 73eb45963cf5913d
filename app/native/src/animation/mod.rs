//! Animation driver for sliding a window along one axis.
//!
//! The driver does not own a timer. Its owner calls [`AxisAnimator::step`]
//! on every frame with the current time, and completion payloads are handed
//! back from that call. Completions therefore run on the owner's thread, in
//! the same place where dock state is mutated.
//!
//! The slide is linear and always takes [`SLIDE_DURATION`].
//!
//! # Usage
//!
//! ```rust,ignore
//! let mut animator = AxisAnimator::new();
//! animator.start(&window, Axis::Vertical, -42.0, Instant::now(), Some(Pending::Hide));
//!
//! // every frame
//! for done in animator.step(Instant::now(), &mut window) {
//!     handle_completion(done);
//! }
//! ```

mod transition;

use std::time::{Duration, Instant};

pub use transition::AxisTransition;

use crate::constants::ANIMATION_DURATION_MS;
use crate::dock::geometry::Axis;
use crate::dock::window::DockWindow;

/// Time a hide or reveal slide takes.
pub const SLIDE_DURATION: Duration = Duration::from_millis(ANIMATION_DURATION_MS);

// ============================================================================
// Axis Animator
// ============================================================================

/// An animation in flight, with the payload to return when it finishes.
#[derive(Debug)]
struct Running<T> {
    transition: AxisTransition,
    started: Instant,
    on_complete: Option<T>,
}

/// Drives at most one animation per axis.
///
/// Starting an animation on an axis that is already animating replaces the
/// old one. The replaced animation never completes, so its payload is
/// dropped.
#[derive(Debug)]
pub struct AxisAnimator<T> {
    duration: Duration,
    horizontal: Option<Running<T>>,
    vertical: Option<Running<T>>,
}

impl<T> Default for AxisAnimator<T> {
    fn default() -> Self { Self::new() }
}

impl<T> AxisAnimator<T> {
    /// Creates an idle animator.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            duration: SLIDE_DURATION,
            horizontal: None,
            vertical: None,
        }
    }

    /// Creates an idle animator whose slides take `duration`.
    #[cfg(test)]
    pub(crate) const fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            horizontal: None,
            vertical: None,
        }
    }

    /// Returns whether any axis is animating.
    #[must_use]
    pub const fn is_active(&self) -> bool { self.horizontal.is_some() || self.vertical.is_some() }

    /// Returns whether `axis` is animating.
    #[must_use]
    pub const fn is_animating(&self, axis: Axis) -> bool {
        match axis {
            Axis::Horizontal => self.horizontal.is_some(),
            Axis::Vertical => self.vertical.is_some(),
        }
    }

    /// Target value of the animation running on `axis`, if any.
    #[must_use]
    pub fn target(&self, axis: Axis) -> Option<f64> {
        self.slot(axis).as_ref().map(|running| running.transition.to)
    }

    const fn slot(&self, axis: Axis) -> &Option<Running<T>> {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    const fn slot_mut(&mut self, axis: Axis) -> &mut Option<Running<T>> {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }

    /// Starts animating `axis` from the window's current value to `to`.
    ///
    /// `on_complete` is returned exactly once by the [`Self::step`] call that
    /// finishes the animation.
    pub fn start<W: DockWindow + ?Sized>(
        &mut self,
        window: &W,
        axis: Axis,
        to: f64,
        now: Instant,
        on_complete: Option<T>,
    ) -> AxisTransition {
        let transition = AxisTransition::new(axis, window.axis_value(axis), to, self.duration);

        let previous = self.slot_mut(axis).replace(Running {
            transition,
            started: now,
            on_complete,
        });
        if let Some(previous) = previous {
            tracing::debug!(
                ?axis,
                from = previous.transition.from,
                to = previous.transition.to,
                dropped_completion = previous.on_complete.is_some(),
                "animation: superseded running animation"
            );
        }

        tracing::trace!(?axis, from = transition.from, to, "animation: started");
        transition
    }

    /// Stops the animation on `axis` where it is, dropping its payload.
    ///
    /// Returns whether an animation was running.
    pub fn stop(&mut self, axis: Axis) -> bool {
        let stopped = self.slot_mut(axis).take();
        if stopped.is_some() {
            tracing::debug!(?axis, "animation: stopped running animation");
        }
        stopped.is_some()
    }

    /// Advances every running animation to `now`, writing the sampled values
    /// to the window.
    ///
    /// Finished animations write their exact end value (the window keeps it)
    /// and their completion payloads are returned, horizontal first.
    pub fn step<W: DockWindow + ?Sized>(&mut self, now: Instant, window: &mut W) -> Vec<T> {
        let mut completed = Vec::new();

        for axis in [Axis::Horizontal, Axis::Vertical] {
            let slot = self.slot_mut(axis);
            let Some(running) = slot.as_ref() else {
                continue;
            };

            let elapsed = now.saturating_duration_since(running.started);
            let progress = running.transition.progress(elapsed);

            if progress >= 1.0 {
                let transition = running.transition;
                window.set_axis_value(axis, transition.to);
                if let Some(done) = slot.take().and_then(|running| running.on_complete) {
                    completed.push(done);
                }
                tracing::trace!(?axis, to = transition.to, "animation: completed");
            } else {
                let value = running.transition.interpolate(progress);
                window.set_axis_value(axis, value);
            }
        }

        completed
    }
}

// ============================================================================
// Tests
// ============================================================================
