//! Message types for the dock actor.
//!
//! All communication with the dock actor happens through messages:
//! - `DockMessage` - commands sent to the actor
//! - `DockQuery` - requests for controller data (with response channel)
//! - `QueryResult` - responses from queries
//! - `StateChange` - broadcast to subscribers whenever the dock state changes

use tokio::sync::oneshot;

use crate::dock::edge::EdgeMask;
use crate::dock::geometry::Rect;
use crate::dock::state::DockState;

// ============================================================================
// Dock Messages
// ============================================================================

/// Messages sent to the dock actor.
#[derive(Debug)]
pub enum DockMessage {
    /// Run one poll of the state machine outside the regular interval.
    Tick,

    /// Bring the window back into view and release it from its edge.
    Show,

    /// Change the docking threshold. Non-positive values are ignored.
    SetAutoHideFactor(f64),

    /// Change the edges the window may dock against.
    SetAutoHideDirection(EdgeMask),

    /// Query controller data.
    Query {
        query: DockQuery,
        respond_to: oneshot::Sender<QueryResult>,
    },

    /// Stop the poll loop and drop the controller.
    Shutdown,
}

impl DockMessage {
    /// Message name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Tick => "Tick",
            Self::Show => "Show",
            Self::SetAutoHideFactor(_) => "SetAutoHideFactor",
            Self::SetAutoHideDirection(_) => "SetAutoHideDirection",
            Self::Query { .. } => "Query",
            Self::Shutdown => "Shutdown",
        }
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Requests for controller data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DockQuery {
    State,
    IsHidden,
    AutoHideFactor,
    AutoHideDirection,
    Snapshot,
}

/// Everything observable about a docked window at one point in time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DockSnapshot {
    pub state: DockState,
    pub frame: Rect,
    pub visible: bool,
    pub topmost: bool,
    /// A slide is in flight and ticks are being skipped.
    pub locked: bool,
}

/// Results from queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueryResult {
    State(DockState),
    Hidden(bool),
    Factor(f64),
    Direction(EdgeMask),
    Snapshot(DockSnapshot),
}

impl QueryResult {
    /// Try to get the dock state from the result.
    #[must_use]
    pub const fn into_state(self) -> Option<DockState> {
        match self {
            Self::State(state) => Some(state),
            Self::Snapshot(snapshot) => Some(snapshot.state),
            _ => None,
        }
    }

    /// Try to get the hidden flag from the result.
    #[must_use]
    pub const fn into_hidden(self) -> Option<bool> {
        match self {
            Self::Hidden(hidden) => Some(hidden),
            _ => None,
        }
    }

    /// Try to get the threshold from the result.
    #[must_use]
    pub const fn into_factor(self) -> Option<f64> {
        match self {
            Self::Factor(factor) => Some(factor),
            _ => None,
        }
    }

    /// Try to get the edge mask from the result.
    #[must_use]
    pub const fn into_direction(self) -> Option<EdgeMask> {
        match self {
            Self::Direction(mask) => Some(mask),
            _ => None,
        }
    }

    /// Try to get the snapshot from the result.
    #[must_use]
    pub const fn into_snapshot(self) -> Option<DockSnapshot> {
        match self {
            Self::Snapshot(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}

// ============================================================================
// Notifications
// ============================================================================

/// Broadcast by the actor whenever the dock state changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StateChange {
    pub from: DockState,
    pub to: DockState,
    /// Window frame right after the change.
    pub frame: Rect,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dock::edge::Edge;

    #[test]
    fn test_message_names() {
        assert_eq!(DockMessage::Tick.name(), "Tick");
        assert_eq!(DockMessage::SetAutoHideFactor(4.0).name(), "SetAutoHideFactor");
        assert_eq!(DockMessage::SetAutoHideDirection(EdgeMask::TOP).name(), "SetAutoHideDirection");
        assert_eq!(DockMessage::Shutdown.name(), "Shutdown");
    }

    #[test]
    fn test_query_result_accessors() {
        let state = DockState::Hidden(Edge::Left);
        assert_eq!(QueryResult::State(state).into_state(), Some(state));
        assert_eq!(QueryResult::Hidden(true).into_hidden(), Some(true));
        assert_eq!(QueryResult::Hidden(true).into_state(), None);
        assert_eq!(QueryResult::Direction(EdgeMask::ALL).into_direction(), Some(EdgeMask::ALL));
        assert_eq!(QueryResult::Factor(3.0).into_hidden(), None);

        let snapshot = DockSnapshot {
            state,
            frame: Rect::new(-210.0, 0.0, 200.0, 100.0),
            visible: false,
            topmost: true,
            locked: false,
        };
        assert_eq!(QueryResult::Snapshot(snapshot).into_state(), Some(state));
        assert_eq!(QueryResult::Snapshot(snapshot).into_snapshot(), Some(snapshot));
    }
}
