//! Single-axis transition type for animation. Progress maps linearly onto
//! the coordinate.

use std::time::Duration;

use crate::dock::geometry::Axis;

/// A move of one window coordinate from one value to another.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisTransition {
    /// Coordinate being animated.
    pub axis: Axis,
    /// Starting value.
    pub from: f64,
    /// Target value, held once the transition finishes.
    pub to: f64,
    /// Total running time.
    pub duration: Duration,
}

impl AxisTransition {
    /// Creates a new transition.
    #[must_use]
    pub const fn new(axis: Axis, from: f64, to: f64, duration: Duration) -> Self {
        Self { axis, from, to, duration }
    }

    /// Linear progress (0.0 to 1.0) after `elapsed`.
    ///
    /// A zero duration is complete immediately.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    /// Interpolates the coordinate at a given progress (0.0 to 1.0).
    #[must_use]
    pub fn interpolate(&self, progress: f64) -> f64 {
        (self.to - self.from).mul_add(progress.clamp(0.0, 1.0), self.from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let t = AxisTransition::new(Axis::Vertical, 0.0, 100.0, Duration::from_millis(500));
        assert!(t.progress(Duration::ZERO).abs() < f64::EPSILON);
        assert!((t.progress(Duration::from_millis(250)) - 0.5).abs() < 1e-9);
        assert!((t.progress(Duration::from_secs(2)) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let t = AxisTransition::new(Axis::Horizontal, 0.0, 100.0, Duration::ZERO);
        assert!((t.progress(Duration::ZERO) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_interpolate_clamps() {
        let t = AxisTransition::new(Axis::Horizontal, 1720.0, 1930.0, Duration::from_millis(500));
        assert!((t.interpolate(-1.0) - 1720.0).abs() < f64::EPSILON);
        assert!((t.interpolate(0.5) - 1825.0).abs() < f64::EPSILON);
        assert!((t.interpolate(2.0) - 1930.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_interpolate_towards_lower_value() {
        let t = AxisTransition::new(Axis::Vertical, -42.0, 3.0, Duration::from_millis(500));
        assert!((t.interpolate(0.5) - -19.5).abs() < f64::EPSILON);

        let t = AxisTransition::new(Axis::Vertical, 3.0, -42.0, Duration::from_millis(500));
        assert!((t.interpolate(1.0) - -42.0).abs() < f64::EPSILON);
    }
}
