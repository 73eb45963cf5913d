//! Scripted docking session against a virtual window.
//!
//! Spawns a real dock actor around an in-memory window, then moves the
//! pointer through a drag, leave, return, leave and show sequence, printing
//! every state change the actor reports.

use std::path::PathBuf;
use std::time::Duration;

use clap::Args;

use super::types::DesktopSize;
use crate::animation::SLIDE_DURATION;
use crate::cli::output;
use crate::config::{self, EdgeDockConfig, is_valid_threshold};
use crate::dock::actor::DockSnapshot;
use crate::dock::virtual_window::{ScriptedDesktop, Shared, VirtualWindow};
use crate::dock::{
    DockActor, DockHandle, DockQuery, DockSettings, DockState, Edge, EdgeDockController, EdgeMask,
    Point, Rect,
};
use crate::error::EdgeDockError;

/// How long a single snapshot query may take.
const QUERY_TIMEOUT: Duration = Duration::from_secs(1);

/// Arguments of the `simulate` command.
#[derive(Args, Debug, Clone)]
pub struct SimulateArgs {
    /// Docking threshold in pixels. Defaults to the configured value.
    #[arg(long, short)]
    pub threshold: Option<f64>,

    /// Edges the window may dock against: a comma separated list, `all` or `none`.
    /// Defaults to the configured directions.
    #[arg(long, short, value_name = "EDGES")]
    pub directions: Option<EdgeMask>,

    /// Edge the window is dragged against.
    #[arg(long, short, default_value = "top")]
    pub edge: Edge,

    /// Size of the simulated desktop.
    #[arg(long, short, default_value = "1920x1080", value_name = "WxH")]
    pub bounds: DesktopSize,
}

/// Runs the simulation with the global configuration.
///
/// # Errors
///
/// Returns an error if the arguments are inconsistent, the runtime cannot be
/// created, or the window does not reach an expected state in time.
pub fn execute(args: &SimulateArgs) -> Result<(), EdgeDockError> {
    let scenario = Scenario::new(args, config::get_config())?;
    output::print_config_source(config::get_config_path().map(PathBuf::as_path));

    let runtime = tokio::runtime::Builder::new_current_thread().enable_time().build()?;
    runtime.block_on(scenario.run())
}

// ============================================================================
// Scenario
// ============================================================================

/// One pointer move (or show request) and the state it should lead to.
struct Step {
    name: &'static str,
    pointer: Option<Point>,
    show: bool,
    expect: DockState,
}

/// A resolved simulation: desktop, window placement and dock settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    edge: Edge,
    bounds: Rect,
    frame: Rect,
    settings: DockSettings,
    poll_interval: Duration,
}

impl Scenario {
    /// Resolves `args` against `config`.
    ///
    /// # Errors
    ///
    /// Returns [`EdgeDockError::InvalidArguments`] for a non-positive threshold
    /// or when the chosen edge is not among the enabled directions.
    pub fn new(args: &SimulateArgs, config: &EdgeDockConfig) -> Result<Self, EdgeDockError> {
        let mut settings = DockSettings::from_config(config);

        if let Some(threshold) = args.threshold {
            if !is_valid_threshold(threshold) {
                return Err(EdgeDockError::InvalidArguments(format!(
                    "Threshold must be a positive number of pixels, got {threshold}"
                )));
            }
            settings.threshold = threshold;
        }
        if let Some(directions) = args.directions {
            settings.directions = directions;
        }
        if !settings.directions.contains(args.edge) {
            return Err(EdgeDockError::InvalidArguments(format!(
                "The {} edge is not enabled (directions: {}).",
                args.edge, settings.directions
            )));
        }

        let bounds = args.bounds.bounds();
        Ok(Self {
            edge: args.edge,
            bounds,
            frame: docked_frame(bounds, args.edge, settings.threshold),
            settings,
            poll_interval: config.auto_hide.poll_interval(),
        })
    }

    /// Center of the window while it is docked.
    fn inside_point(&self) -> Point {
        Point::new(
            self.frame.x + self.frame.width / 2.0,
            self.frame.y + self.frame.height / 2.0,
        )
    }

    /// A point on the far side of the desktop, outside the docked window.
    fn far_point(&self) -> Point {
        let center = self.inside_point();
        let b = self.bounds;
        match self.edge {
            Edge::Top => Point::new(center.x, b.bottom() - 1.0),
            Edge::Right => Point::new(b.x + 1.0, center.y),
            Edge::Bottom => Point::new(center.x, b.y + 1.0),
            Edge::Left => Point::new(b.right() - 1.0, center.y),
        }
    }

    /// A point inside the activation band of the edge, aligned with the window.
    fn band_point(&self) -> Point {
        let center = self.inside_point();
        let inset = self.settings.threshold / 2.0;
        let b = self.bounds;
        match self.edge {
            Edge::Top => Point::new(center.x, b.y + inset),
            Edge::Right => Point::new(b.right() - inset, center.y),
            Edge::Bottom => Point::new(center.x, b.bottom() - inset),
            Edge::Left => Point::new(b.x + inset, center.y),
        }
    }

    fn steps(&self) -> [Step; 5] {
        let edge = self.edge;
        [
            Step {
                name: "drag",
                pointer: Some(self.inside_point()),
                show: false,
                expect: DockState::Preview(edge),
            },
            Step {
                name: "leave",
                pointer: Some(self.far_point()),
                show: false,
                expect: DockState::Hidden(edge),
            },
            Step {
                name: "return",
                pointer: Some(self.band_point()),
                show: false,
                expect: DockState::Preview(edge),
            },
            Step {
                name: "leave",
                pointer: Some(self.far_point()),
                show: false,
                expect: DockState::Hidden(edge),
            },
            Step {
                name: "show",
                pointer: None,
                show: true,
                expect: DockState::Free,
            },
        ]
    }

    /// Runs every step against a fresh actor and prints what happens.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor stops responding or a step does not
    /// reach its expected state in time.
    pub async fn run(self) -> Result<(), EdgeDockError> {
        let window = Shared::new(VirtualWindow::new(self.frame));
        let desktop = Shared::new(ScriptedDesktop::new(self.bounds));
        desktop.lock().set_cursor(Some(self.inside_point()));

        let controller = EdgeDockController::with_settings(
            window,
            desktop.clone(),
            self.settings,
        );
        let handle = DockActor::spawn(controller, self.poll_interval);
        let mut changes = handle.subscribe();

        output::print_header(self.edge, self.bounds, self.frame, &self.settings);

        for step in self.steps() {
            output::print_step(step.name, step.pointer);
            if let Some(pointer) = step.pointer {
                desktop.lock().set_cursor(Some(pointer));
            }
            if step.show {
                handle.show()?;
            }

            let snapshot = self.settle(&handle, step.expect).await?;
            while let Ok(change) = changes.try_recv() {
                output::print_change(&change);
            }
            output::print_snapshot(&snapshot);
        }

        handle.detach().await?;
        Ok(())
    }

    /// Polls the actor until it rests in `expected`.
    async fn settle(
        &self,
        handle: &DockHandle,
        expected: DockState,
    ) -> Result<DockSnapshot, EdgeDockError> {
        let deadline = tokio::time::Instant::now() + SLIDE_DURATION + self.poll_interval * 5;

        loop {
            tokio::time::sleep(self.poll_interval).await;

            let snapshot = handle
                .query_timeout(DockQuery::Snapshot, QUERY_TIMEOUT)
                .await?
                .into_snapshot()
                .ok_or_else(|| EdgeDockError::CommandError("Unexpected query result".to_string()))?;

            if snapshot.state == expected && !snapshot.locked {
                return Ok(snapshot);
            }
            if tokio::time::Instant::now() >= deadline {
                return Err(EdgeDockError::CommandError(format!(
                    "Expected the window to reach {expected}, but it stayed in {}",
                    snapshot.state
                )));
            }
        }
    }
}

/// A window a quarter of the desktop in size, centered along `edge` and half
/// the threshold away from it.
fn docked_frame(bounds: Rect, edge: Edge, threshold: f64) -> Rect {
    let width = (bounds.width / 4.0).min(400.0);
    let height = (bounds.height / 4.0).min(300.0);
    let gap = threshold / 2.0;

    let centered_x = bounds.x + (bounds.width - width) / 2.0;
    let centered_y = bounds.y + (bounds.height - height) / 2.0;

    match edge {
        Edge::Top => Rect::new(centered_x, bounds.y + gap, width, height),
        Edge::Right => Rect::new(bounds.right() - width - gap, centered_y, width, height),
        Edge::Bottom => Rect::new(centered_x, bounds.bottom() - height - gap, width, height),
        Edge::Left => Rect::new(bounds.x + gap, centered_y, width, height),
    }
}
