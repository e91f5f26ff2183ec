//! Per-run operation counters.
//!
//! [`Metrics`] is reset at the start of every run. Engines bump
//! `comparisons`, `swaps`, and `internal_steps` as a side effect of the
//! events they emit; the driver bumps `steps` once per resumption.

/// Operation counters for one run.
///
/// Distribution sorts follow a counting convention inherited from the
/// classic visualizer: radix sort's digit tallies are recorded as
/// `comparisons` even though no ordering comparison takes place, and
/// counting sort's tallies and prefix sums land in `internal_steps`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Metrics {
    /// Comparison events, plus radix digit tallies.
    pub comparisons: u64,
    /// Writes reported as swaps or assignments.
    pub swaps: u64,
    /// Engine resumptions made by the driver, including the one that
    /// produced `Done`.
    pub steps: u64,
    /// Work units an engine accounts for itself without a dedicated
    /// resumption (bucket tallies, prefix sums).
    pub internal_steps: u64,
}

impl Metrics {
    /// Zero every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Resumptions plus engine-internal work, the value a UI shows as
    /// "steps".
    pub fn total_steps(&self) -> u64 {
        self.steps + self.internal_steps
    }
}
