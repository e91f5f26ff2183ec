//! The presentation boundary.
//!
//! The driver hands a [`Frame`] to a [`Renderer`] once per tick. Frames
//! borrow the sequence for the duration of the callback only, so a
//! renderer can never observe a half-applied resumption or hold on to
//! the sequence across ticks.

use crate::event::StepEvent;
use crate::metrics::Metrics;
use crate::sequence::Sequence;

/// Lifecycle of one run.
///
/// `Finished` and `Aborted` are absorbing: a new run needs a fresh engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    /// No engine has been pulled yet.
    #[default]
    Idle,
    /// The driver is resuming the engine.
    Running,
    /// The engine emitted `Done`.
    Finished,
    /// An engine error ended the run.
    Aborted,
}

impl RunState {
    /// Whether the run can make no further progress.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Finished | Self::Aborted)
    }
}

/// Per-tick snapshot handed to a renderer.
#[derive(Clone, Copy, Debug)]
pub struct Frame<'a> {
    /// Current values, read-only.
    pub sequence: &'a Sequence,
    /// Counters after the tick's last resumption.
    pub metrics: Metrics,
    /// Most recent event of this tick, if any resumption succeeded.
    pub last_event: Option<StepEvent>,
    /// Run state after the tick.
    pub state: RunState,
}

/// Receives one [`Frame`] per driver tick.
///
/// Any `FnMut(&Frame)` closure is a renderer.
pub trait Renderer {
    /// Draw or record the frame.
    fn render(&mut self, frame: &Frame<'_>);
}

impl<F> Renderer for F
where
    F: FnMut(&Frame<'_>),
{
    fn render(&mut self, frame: &Frame<'_>) {
        self(frame)
    }
}

/// Renderer that discards every frame. Useful for headless runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn render(&mut self, _frame: &Frame<'_>) {}
}
