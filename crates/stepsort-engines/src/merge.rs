//! Bottom-up merge sort.
//!
//! Runs of width 1, 2, 4, ... are merged pairwise left to right. Each
//! merge copies its two halves into scratch buffers and writes back one
//! element per resumption. Both the comparison and the write are reported
//! at the destination index, not at the source.

use stepsort_core::{Metrics, StepEvent};

use crate::engine::Stepper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Set up the next merge, or widen the runs.
    Schedule,
    /// Compare the heads of both halves.
    Compare,
    /// Write the smaller head to the destination.
    Write,
    /// Copy whatever remains of either half.
    Drain,
    Done,
}

pub(crate) struct MergeSort {
    n: usize,
    width: usize,
    left_start: usize,
    left: Vec<f64>,
    right: Vec<f64>,
    li: usize,
    ri: usize,
    dest: usize,
    phase: Phase,
}

impl MergeSort {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            width: 1,
            left_start: 0,
            left: Vec::with_capacity(n / 2 + 1),
            right: Vec::with_capacity(n / 2 + 1),
            li: 0,
            ri: 0,
            dest: 0,
            phase: if n < 2 { Phase::Done } else { Phase::Schedule },
        }
    }

    /// Load `values[lo..=mid]` and `values[mid+1..=hi]` into scratch.
    fn begin_merge(&mut self, values: &[f64], lo: usize, mid: usize, hi: usize) {
        self.left.clear();
        self.left.extend_from_slice(&values[lo..=mid]);
        self.right.clear();
        self.right.extend_from_slice(&values[mid + 1..=hi]);
        self.li = 0;
        self.ri = 0;
        self.dest = lo;
    }

    fn emit_write(&mut self, values: &mut [f64], metrics: &mut Metrics, value: f64) -> StepEvent {
        let k = self.dest;
        values[k] = value;
        metrics.swaps += 1;
        self.dest += 1;
        StepEvent::write_at(k)
    }
}

impl Stepper for MergeSort {
    fn step(&mut self, values: &mut [f64], metrics: &mut Metrics) -> StepEvent {
        loop {
            match self.phase {
                Phase::Schedule => {
                    if self.width >= self.n {
                        self.phase = Phase::Done;
                    } else if self.left_start < self.n - 1 {
                        let lo = self.left_start;
                        let mid = (lo + self.width - 1).min(self.n - 1);
                        let hi = (lo + 2 * self.width - 1).min(self.n - 1);
                        self.begin_merge(values, lo, mid, hi);
                        self.left_start += 2 * self.width;
                        self.phase = Phase::Compare;
                    } else {
                        self.width *= 2;
                        self.left_start = 0;
                    }
                }
                Phase::Compare => {
                    if self.li < self.left.len() && self.ri < self.right.len() {
                        metrics.comparisons += 1;
                        self.phase = Phase::Write;
                        return StepEvent::compare_at(self.dest);
                    }
                    self.phase = Phase::Drain;
                }
                Phase::Write => {
                    // Ties take the left head, which keeps the sort stable.
                    let (l, r) = (self.left[self.li], self.right[self.ri]);
                    let value = if l <= r {
                        self.li += 1;
                        l
                    } else {
                        self.ri += 1;
                        r
                    };
                    self.phase = Phase::Compare;
                    return self.emit_write(values, metrics, value);
                }
                Phase::Drain => {
                    if self.li < self.left.len() {
                        let value = self.left[self.li];
                        self.li += 1;
                        return self.emit_write(values, metrics, value);
                    }
                    if self.ri < self.right.len() {
                        let value = self.right[self.ri];
                        self.ri += 1;
                        return self.emit_write(values, metrics, value);
                    }
                    self.phase = Phase::Schedule;
                }
                Phase::Done => return StepEvent::Done,
            }
        }
    }
}
