//! Bubble sort with a clean-pass early exit.

use stepsort_core::{Metrics, StepEvent};

use crate::engine::Stepper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Compare `j` with `j + 1`, or end the pass.
    Compare,
    /// Exchange the pair just compared if it is out of order.
    Resolve,
    /// Decide whether another pass is needed.
    PassEnd,
    Done,
}

pub(crate) struct BubbleSort {
    n: usize,
    pass: usize,
    j: usize,
    swapped: bool,
    phase: Phase,
}

impl BubbleSort {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            pass: 0,
            j: 0,
            swapped: false,
            phase: if n < 2 { Phase::Done } else { Phase::Compare },
        }
    }
}

impl Stepper for BubbleSort {
    fn step(&mut self, values: &mut [f64], metrics: &mut Metrics) -> StepEvent {
        loop {
            match self.phase {
                Phase::Compare => {
                    if self.j < self.n - self.pass - 1 {
                        metrics.comparisons += 1;
                        self.phase = Phase::Resolve;
                        return StepEvent::compare(self.j, self.j + 1);
                    }
                    self.phase = Phase::PassEnd;
                }
                Phase::Resolve => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Compare;
                    if values[j] > values[j + 1] {
                        values.swap(j, j + 1);
                        self.swapped = true;
                        metrics.swaps += 1;
                        return StepEvent::swap(j, j + 1);
                    }
                }
                Phase::PassEnd => {
                    self.pass += 1;
                    if !self.swapped || self.pass >= self.n - 1 {
                        self.phase = Phase::Done;
                    } else {
                        self.j = 0;
                        self.swapped = false;
                        self.phase = Phase::Compare;
                    }
                }
                Phase::Done => return StepEvent::Done,
            }
        }
    }
}
