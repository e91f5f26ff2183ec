//! Test utilities and fixtures for stepsort development.
//!
//! Provides a run-to-completion harness ([`run_to_done`]) that records
//! every event and a per-resumption metrics history, a
//! [`RecordingRenderer`] that keeps owned copies of every frame, and the
//! sortedness/permutation checks shared by the property tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{is_non_decreasing, is_permutation_of, run_to_done, Trace};

use stepsort_core::{Frame, Metrics, Renderer, RunState, StepEvent};

/// Owned copy of one rendered [`Frame`].
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedFrame {
    pub values: Vec<f64>,
    pub metrics: Metrics,
    pub last_event: Option<StepEvent>,
    pub state: RunState,
}

/// Renderer that stores every frame it receives.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub frames: Vec<RecordedFrame>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent frame, if any.
    pub fn last(&self) -> Option<&RecordedFrame> {
        self.frames.last()
    }
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &Frame<'_>) {
        self.frames.push(RecordedFrame {
            values: frame.sequence.as_slice().to_vec(),
            metrics: frame.metrics,
            last_event: frame.last_event,
            state: frame.state,
        });
    }
}
