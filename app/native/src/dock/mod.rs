//! Edge docking for a single top-level window.
//!
//! A window dragged within a threshold of one of the four desktop edges is
//! docked against it. Once the pointer leaves the window, it slides past the
//! edge until only the threshold band remains reachable; moving the pointer
//! into that band slides it back.
//!
//! # Submodules
//!
//! - `edge` - Edge descriptors and the enabled-edge mask
//! - `geometry` - Rectangles and the per-edge docking formulas
//! - `state` - The dock state register
//! - `window` - Capabilities the controller needs from the host
//! - `controller` - The polled state machine
//! - `actor` - A tokio task that owns a controller and drives its timers
//! - `virtual_window` - In-memory window and desktop used by tests and the simulator

pub mod actor;
pub mod controller;
pub mod edge;
pub mod geometry;
pub mod state;
pub mod virtual_window;
pub mod window;

pub use actor::{ActorError, DockActor, DockHandle, DockMessage, DockQuery, StateChange};
pub use controller::{DockSettings, EdgeDockController, PendingTransition, TickOutcome};
pub use edge::{Edge, EdgeMask};
pub use geometry::{Axis, DockGeometry, Point, Rect};
pub use state::DockState;
pub use window::{Desktop, DockWindow};
