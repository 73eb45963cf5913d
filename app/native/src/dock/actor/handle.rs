//! Handle for communicating with the dock actor.
//!
//! The `DockHandle` provides a cloneable interface for sending messages to
//! the dock actor and subscribing to state changes.

use std::time::Duration;

use tokio::sync::{broadcast, mpsc, oneshot};

use super::messages::{DockMessage, DockQuery, DockSnapshot, QueryResult, StateChange};
use crate::dock::edge::EdgeMask;
use crate::dock::state::DockState;

/// Error types for actor communication.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    /// Failed to send message to actor.
    #[error("Failed to send message to dock actor: channel closed")]
    SendFailed,

    /// Failed to receive response from actor.
    #[error("Failed to receive response from dock actor: channel closed")]
    ReceiveFailed,

    /// Query timed out.
    #[error("Query timed out after {0:?}")]
    Timeout(Duration),
}

/// Handle for communicating with the dock actor.
///
/// Cheap to clone and can be shared across threads. The actor stops once it
/// is detached or every handle has been dropped.
#[derive(Clone)]
pub struct DockHandle {
    sender: mpsc::Sender<DockMessage>,
    events: broadcast::Sender<StateChange>,
}

impl DockHandle {
    pub(crate) const fn new(
        sender: mpsc::Sender<DockMessage>,
        events: broadcast::Sender<StateChange>,
    ) -> Self {
        Self { sender, events }
    }

    /// Whether the actor is still running.
    #[must_use]
    pub fn is_alive(&self) -> bool { !self.sender.is_closed() }

    /// Subscribe to state changes.
    ///
    /// Only changes that happen after this call are received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> { self.events.subscribe() }

    // ========================================================================
    // Fire-and-forget sending
    // ========================================================================

    /// Send a message to the actor without waiting for delivery.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed or full.
    pub fn send(&self, msg: DockMessage) -> Result<(), ActorError> {
        self.sender.try_send(msg).map_err(|_| ActorError::SendFailed)
    }

    /// Send a message to the actor and wait for delivery.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed.
    pub async fn send_async(&self, msg: DockMessage) -> Result<(), ActorError> {
        self.sender.send(msg).await.map_err(|_| ActorError::SendFailed)
    }

    // ========================================================================
    // Query methods
    // ========================================================================

    /// Execute a query and wait for the result.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the channel is closed, or
    /// [`ActorError::ReceiveFailed`] if the response channel is closed.
    pub async fn query(&self, query: DockQuery) -> Result<QueryResult, ActorError> {
        let (tx, rx) = oneshot::channel();

        self.sender
            .send(DockMessage::Query { query, respond_to: tx })
            .await
            .map_err(|_| ActorError::SendFailed)?;

        rx.await.map_err(|_| ActorError::ReceiveFailed)
    }

    /// Execute a query with a timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::Timeout`] if the query doesn't complete in time,
    /// or any error from [`Self::query`].
    pub async fn query_timeout(
        &self,
        query: DockQuery,
        timeout: Duration,
    ) -> Result<QueryResult, ActorError> {
        tokio::time::timeout(timeout, self.query(query))
            .await
            .map_err(|_| ActorError::Timeout(timeout))?
    }

    // ========================================================================
    // Convenience methods
    // ========================================================================

    /// Bring the window back into view and release it from its edge.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub fn show(&self) -> Result<(), ActorError> { self.send(DockMessage::Show) }

    /// Change the docking threshold. Non-positive values are ignored by the actor.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub fn set_auto_hide_factor(&self, threshold: f64) -> Result<(), ActorError> {
        self.send(DockMessage::SetAutoHideFactor(threshold))
    }

    /// Change the edges the window may dock against.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has stopped.
    pub fn set_auto_hide_direction(&self, directions: EdgeMask) -> Result<(), ActorError> {
        self.send(DockMessage::SetAutoHideDirection(directions))
    }

    /// Whether the window is docked against any edge.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn is_hidden(&self) -> Result<bool, ActorError> {
        self.query(DockQuery::IsHidden)
            .await?
            .into_hidden()
            .ok_or(ActorError::ReceiveFailed)
    }

    /// Current dock state.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn state(&self) -> Result<DockState, ActorError> {
        self.query(DockQuery::State).await?.into_state().ok_or(ActorError::ReceiveFailed)
    }

    /// Current docking threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn auto_hide_factor(&self) -> Result<f64, ActorError> {
        self.query(DockQuery::AutoHideFactor)
            .await?
            .into_factor()
            .ok_or(ActorError::ReceiveFailed)
    }

    /// Edges the window may currently dock against.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn auto_hide_direction(&self) -> Result<EdgeMask, ActorError> {
        self.query(DockQuery::AutoHideDirection)
            .await?
            .into_direction()
            .ok_or(ActorError::ReceiveFailed)
    }

    /// State, frame and flags of the docked window.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the actor fails.
    pub async fn snapshot(&self) -> Result<DockSnapshot, ActorError> {
        self.query(DockQuery::Snapshot)
            .await?
            .into_snapshot()
            .ok_or(ActorError::ReceiveFailed)
    }

    /// Stop the actor. Any slide in flight is abandoned where it is.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::SendFailed`] if the actor has already stopped.
    pub async fn detach(&self) -> Result<(), ActorError> {
        self.send_async(DockMessage::Shutdown).await
    }
}
