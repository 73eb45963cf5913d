//! Dock actor module.
//!
//! The dock actor owns an [`EdgeDockController`] and processes messages
//! sequentially on one tokio task. The same task runs the poll interval and,
//! while a slide is in flight, the animation frame interval. Every state read,
//! geometry query, animation start and completion therefore happens on one
//! logical thread, and the controller needs no locking.
//!
//! # Panic Recovery
//!
//! If a message handler or a timer tick panics (for example inside a host
//! [`DockWindow`] implementation), the panic is caught and logged and the
//! actor keeps running. The dock state may be stale afterwards but the window
//! stays usable.

mod handle;
mod messages;

use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::Duration;

pub use handle::{ActorError, DockHandle};
pub use messages::{DockMessage, DockQuery, DockSnapshot, QueryResult, StateChange};
use tokio::sync::{broadcast, mpsc};
use tokio::time::{Instant, MissedTickBehavior};

use super::controller::{EdgeDockController, TickOutcome};
use super::state::DockState;
use super::window::{Desktop, DockWindow};
use crate::constants::{FRAME_INTERVAL_MS, MAX_POLL_INTERVAL_MS, MIN_POLL_INTERVAL_MS};

/// Channel buffer size for the dock actor.
const CHANNEL_BUFFER_SIZE: usize = 64;

/// Buffer size of the state change broadcast.
const EVENT_BUFFER_SIZE: usize = 32;

/// The actor that owns a dock controller.
pub struct DockActor<W, D> {
    controller: EdgeDockController<W, D>,
    receiver: mpsc::Receiver<DockMessage>,
    events: broadcast::Sender<StateChange>,
    poll_interval: Duration,
}

impl<W, D> DockActor<W, D>
where
    W: DockWindow + Send + 'static,
    D: Desktop + Send + 'static,
{
    /// Spawn a dock actor on the current tokio runtime and return a handle
    /// for communication.
    ///
    /// The poll loop starts immediately; the first tick runs right away.
    /// `poll_interval` is clamped to the supported range.
    ///
    /// # Panics
    ///
    /// Panics if called outside of a tokio runtime.
    #[must_use]
    pub fn spawn(controller: EdgeDockController<W, D>, poll_interval: Duration) -> DockHandle {
        let poll_interval = clamp_poll_interval(poll_interval);
        tracing::debug!(
            poll_interval_ms = poll_interval.as_millis(),
            threshold = controller.auto_hide_factor(),
            directions = %controller.auto_hide_direction(),
            "dock: spawning actor"
        );
        let (sender, receiver) = mpsc::channel(CHANNEL_BUFFER_SIZE);
        let (events, _) = broadcast::channel(EVENT_BUFFER_SIZE);

        let actor = Self {
            controller,
            receiver,
            events: events.clone(),
            poll_interval,
        };

        tokio::spawn(async move {
            actor.run().await;
        });

        DockHandle::new(sender, events)
    }

    /// Run the actor's loop until it is detached or every handle is dropped.
    async fn run(mut self) {
        tracing::trace!("dock: actor loop starting");

        let mut poll = tokio::time::interval(self.poll_interval);
        poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

        let mut frames = tokio::time::interval(Duration::from_millis(FRAME_INTERVAL_MS));
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                msg = self.receiver.recv() => match msg {
                    Some(DockMessage::Shutdown) => {
                        tracing::debug!("dock: actor received shutdown message");
                        break;
                    }
                    Some(msg) => self.guarded(msg.name(), |actor| actor.handle_message(msg)),
                    None => {
                        tracing::debug!("dock: actor channel closed, exiting");
                        break;
                    }
                },
                _ = poll.tick() => self.guarded("poll", Self::on_poll),
                _ = frames.tick(), if self.controller.is_animating() => {
                    self.guarded("frame", Self::on_frame);
                }
            }
        }
    }

    /// Runs `work` on the actor, recovering from panics inside it.
    fn guarded(&mut self, task: &'static str, work: impl FnOnce(&mut Self)) {
        let result = catch_unwind(AssertUnwindSafe(|| work(self)));

        if let Err(panic_info) = result {
            let panic_msg = panic_info
                .downcast_ref::<&str>()
                .map(|s| (*s).to_string())
                .or_else(|| panic_info.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "unknown panic".to_string());

            tracing::error!(task, panic = %panic_msg, "dock: actor recovered from panic");
        }
    }

    fn handle_message(&mut self, msg: DockMessage) {
        match msg {
            DockMessage::Tick => self.on_poll(),
            DockMessage::Show => {
                let from = self.controller.state();
                self.controller.show(now());
                self.publish(from);
            }
            DockMessage::SetAutoHideFactor(threshold) => {
                self.controller.set_auto_hide_factor(threshold);
            }
            DockMessage::SetAutoHideDirection(directions) => {
                self.controller.set_auto_hide_direction(directions);
            }
            DockMessage::Query { query, respond_to } => {
                if respond_to.send(self.answer(query)).is_err() {
                    tracing::trace!(?query, "dock: query caller went away");
                }
            }
            // Handled by the loop.
            DockMessage::Shutdown => {}
        }
    }

    fn answer(&self, query: DockQuery) -> QueryResult {
        match query {
            DockQuery::State => QueryResult::State(self.controller.state()),
            DockQuery::IsHidden => QueryResult::Hidden(self.controller.is_hidden()),
            DockQuery::AutoHideFactor => QueryResult::Factor(self.controller.auto_hide_factor()),
            DockQuery::AutoHideDirection => {
                QueryResult::Direction(self.controller.auto_hide_direction())
            }
            DockQuery::Snapshot => {
                let window = self.controller.window();
                QueryResult::Snapshot(DockSnapshot {
                    state: self.controller.state(),
                    frame: window.frame(),
                    visible: window.is_visible(),
                    topmost: window.is_topmost(),
                    locked: self.controller.is_locked(),
                })
            }
        }
    }

    // ========================================================================
    // Timers
    // ========================================================================

    fn on_poll(&mut self) {
        match self.controller.tick(now()) {
            TickOutcome::Transitioned { from, .. } => self.publish(from),
            TickOutcome::Animating(pending) => {
                tracing::trace!(?pending, "dock: poll started a slide");
            }
            TickOutcome::Locked | TickOutcome::NoCursor | TickOutcome::Idle => {}
        }
    }

    fn on_frame(&mut self) {
        let from = self.controller.state();
        if self.controller.advance(now()).is_some() {
            self.publish(from);
        }
    }

    /// Broadcast a state change if the state differs from `from`.
    fn publish(&self, from: DockState) {
        let to = self.controller.state();
        if from == to {
            return;
        }
        let change = StateChange {
            from,
            to,
            frame: self.controller.window().frame(),
        };
        // No subscribers is fine.
        self.events.send(change).ok();
    }
}

/// Limits `interval` to the supported poll range.
fn clamp_poll_interval(interval: Duration) -> Duration {
    let clamped = interval.clamp(
        Duration::from_millis(MIN_POLL_INTERVAL_MS),
        Duration::from_millis(MAX_POLL_INTERVAL_MS),
    );
    if clamped != interval {
        tracing::debug!(
            requested_ms = interval.as_millis(),
            poll_interval_ms = clamped.as_millis(),
            "dock: poll interval out of range, clamped"
        );
    }
    clamped
}

/// Current time on the runtime clock, which follows tokio's paused clock in tests.
fn now() -> std::time::Instant { Instant::now().into_std() }
