//! Insertion sort and shell sort.
//!
//! Both run the same gapped insertion loop. Insertion sort makes a
//! single pass with gap 1; shell sort starts at `n / 2` and halves the
//! gap (integer division) after every pass, finishing with gap 1.

use stepsort_core::{Metrics, StepEvent};

use crate::engine::Stepper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Pick up the key at `i`, or finish the pass.
    Load,
    /// Move one larger gapped predecessor into the hole.
    Shift,
    /// Drop the key into the hole.
    Settle,
    /// Shrink the gap or stop.
    NextGap,
    Done,
}

pub(crate) struct GappedInsertion {
    n: usize,
    gap: usize,
    halving: bool,
    i: usize,
    hole: usize,
    key: f64,
    phase: Phase,
}

impl GappedInsertion {
    pub(crate) fn insertion(n: usize) -> Self {
        Self::with_gap(n, 1, false)
    }

    pub(crate) fn shell(n: usize) -> Self {
        Self::with_gap(n, n / 2, true)
    }

    fn with_gap(n: usize, gap: usize, halving: bool) -> Self {
        Self {
            n,
            gap,
            halving,
            i: gap,
            hole: gap,
            key: 0.0,
            phase: if gap == 0 { Phase::Done } else { Phase::Load },
        }
    }
}

impl Stepper for GappedInsertion {
    fn step(&mut self, values: &mut [f64], metrics: &mut Metrics) -> StepEvent {
        loop {
            match self.phase {
                Phase::Load => {
                    if self.i < self.n {
                        self.key = values[self.i];
                        self.hole = self.i;
                        self.phase = Phase::Shift;
                    } else {
                        self.phase = Phase::NextGap;
                    }
                }
                Phase::Shift => {
                    let gap = self.gap;
                    if self.hole >= gap && values[self.hole - gap] > self.key {
                        metrics.comparisons += 1;
                        values[self.hole] = values[self.hole - gap];
                        metrics.swaps += 1;
                        self.hole -= gap;
                        return StepEvent::swap(self.hole, self.hole + gap);
                    }
                    self.phase = Phase::Settle;
                }
                Phase::Settle => {
                    values[self.hole] = self.key;
                    let settled = self.i;
                    self.i += 1;
                    self.phase = Phase::Load;
                    return StepEvent::Insert(settled);
                }
                Phase::NextGap => {
                    self.gap = if self.halving { self.gap / 2 } else { 0 };
                    if self.gap == 0 {
                        self.phase = Phase::Done;
                    } else {
                        self.i = self.gap;
                        self.phase = Phase::Load;
                    }
                }
                Phase::Done => return StepEvent::Done,
            }
        }
    }
}
