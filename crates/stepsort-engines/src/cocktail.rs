//! Cocktail shaker sort: alternating forward and backward bubble passes.

use stepsort_core::{Metrics, StepEvent};

use crate::engine::Stepper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Forward,
    ForwardResolve,
    ForwardEnd,
    Backward,
    BackwardResolve,
    BackwardEnd,
    Done,
}

pub(crate) struct CocktailShakerSort {
    start: usize,
    end: usize,
    i: usize,
    swapped: bool,
    phase: Phase,
}

impl CocktailShakerSort {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            start: 0,
            end: n.saturating_sub(1),
            i: 0,
            swapped: false,
            phase: if n < 2 { Phase::Done } else { Phase::Forward },
        }
    }

    fn exchange(&mut self, values: &mut [f64], metrics: &mut Metrics, lo: usize) -> StepEvent {
        values.swap(lo, lo + 1);
        self.swapped = true;
        metrics.swaps += 1;
        StepEvent::swap(lo, lo + 1)
    }
}

impl Stepper for CocktailShakerSort {
    fn step(&mut self, values: &mut [f64], metrics: &mut Metrics) -> StepEvent {
        loop {
            match self.phase {
                Phase::Forward => {
                    if self.i < self.end {
                        metrics.comparisons += 1;
                        self.phase = Phase::ForwardResolve;
                        return StepEvent::compare(self.i, self.i + 1);
                    }
                    self.phase = Phase::ForwardEnd;
                }
                Phase::ForwardResolve => {
                    let lo = self.i;
                    self.i += 1;
                    self.phase = Phase::Forward;
                    if values[lo] > values[lo + 1] {
                        return self.exchange(values, metrics, lo);
                    }
                }
                Phase::ForwardEnd => {
                    if !self.swapped {
                        self.phase = Phase::Done;
                        continue;
                    }
                    self.swapped = false;
                    self.end -= 1;
                    self.i = self.end;
                    self.phase = Phase::Backward;
                }
                Phase::Backward => {
                    if self.i > self.start {
                        metrics.comparisons += 1;
                        self.phase = Phase::BackwardResolve;
                        return StepEvent::compare(self.i - 1, self.i);
                    }
                    self.phase = Phase::BackwardEnd;
                }
                Phase::BackwardResolve => {
                    let lo = self.i - 1;
                    self.i -= 1;
                    self.phase = Phase::Backward;
                    if values[lo] > values[lo + 1] {
                        return self.exchange(values, metrics, lo);
                    }
                }
                Phase::BackwardEnd => {
                    self.start += 1;
                    if self.swapped {
                        self.swapped = false;
                        self.i = self.start;
                        self.phase = Phase::Forward;
                    } else {
                        self.phase = Phase::Done;
                    }
                }
                Phase::Done => return StepEvent::Done,
            }
        }
    }
}
