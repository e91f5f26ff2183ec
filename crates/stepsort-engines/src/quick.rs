//! Quicksort over an explicit stack of index ranges.
//!
//! Partitioning uses the last element of the range as pivot (Lomuto).
//! After placing a pivot at `p`, the ranges `low..=p-1` and `p+1..=high`
//! are pushed in that order, so the right-hand range is partitioned first.

use stepsort_core::{Metrics, StepEvent};

use crate::engine::Stepper;

/// Inclusive index range awaiting a partition pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Range {
    low: usize,
    high: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Pop the next pending range.
    Pop,
    /// Compare `j` with the pivot slot, or finish the scan.
    Scan,
    /// Move `j` into the store slot if it is below the pivot.
    Resolve,
    /// Exchange the pivot into its final slot.
    Place,
    Done,
}

pub(crate) struct QuickSort {
    stack: Vec<Range>,
    current: Range,
    pivot: f64,
    store: usize,
    j: usize,
    phase: Phase,
}

impl QuickSort {
    pub(crate) fn new(n: usize) -> Self {
        let mut stack = Vec::new();
        if n >= 2 {
            stack.push(Range {
                low: 0,
                high: n - 1,
            });
        }
        Self {
            stack,
            current: Range { low: 0, high: 0 },
            pivot: 0.0,
            store: 0,
            j: 0,
            phase: Phase::Pop,
        }
    }

    /// Queue `low..=high` if it holds at least two elements.
    ///
    /// Shorter ranges are already sorted and would produce no events.
    fn push_if_unsorted(&mut self, low: usize, high: usize) {
        if low < high {
            self.stack.push(Range { low, high });
        }
    }
}

impl Stepper for QuickSort {
    fn step(&mut self, values: &mut [f64], metrics: &mut Metrics) -> StepEvent {
        loop {
            match self.phase {
                Phase::Pop => match self.stack.pop() {
                    Some(range) => {
                        self.current = range;
                        self.pivot = values[range.high];
                        self.store = range.low;
                        self.j = range.low;
                        self.phase = Phase::Scan;
                    }
                    None => self.phase = Phase::Done,
                },
                Phase::Scan => {
                    if self.j < self.current.high {
                        metrics.comparisons += 1;
                        self.phase = Phase::Resolve;
                        return StepEvent::compare(self.j, self.current.high);
                    }
                    self.phase = Phase::Place;
                }
                Phase::Resolve => {
                    let j = self.j;
                    self.j += 1;
                    self.phase = Phase::Scan;
                    if values[j] < self.pivot {
                        let store = self.store;
                        values.swap(store, j);
                        self.store += 1;
                        metrics.swaps += 1;
                        return StepEvent::swap(store, j);
                    }
                }
                Phase::Place => {
                    let Range { low, high } = self.current;
                    let p = self.store;
                    values.swap(p, high);
                    metrics.swaps += 1;
                    if p > low {
                        self.push_if_unsorted(low, p - 1);
                    }
                    self.push_if_unsorted(p + 1, high);
                    self.phase = Phase::Pop;
                    return StepEvent::swap(p, high);
                }
                Phase::Done => return StepEvent::Done,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::testing::drain;
    use stepsort_core::{Algorithm, StepEvent};

    #[test]
    fn single_element_is_done_immediately() {
        let trace = drain(Algorithm::Quick, &[1.0]);
        assert_eq!(trace.events, vec![StepEvent::Done]);
        assert_eq!(trace.metrics.comparisons, 0);
        assert_eq!(trace.metrics.swaps, 0);
    }

    #[test]
    fn pivot_placement_is_always_reported() {
        let trace = drain(Algorithm::Quick, &[1.0, 2.0]);
        assert_eq!(
            trace.events,
            vec![
                StepEvent::compare(0, 1),
                StepEvent::swap(0, 0),
                StepEvent::swap(1, 1),
                StepEvent::Done,
            ]
        );
        assert_eq!(trace.metrics.swaps, 2);
    }

    #[test]
    fn right_partition_is_processed_first() {
        let trace = drain(Algorithm::Quick, &[3.0, 5.0, 1.0, 4.0, 2.0]);
        assert_eq!(trace.values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        // First pass: pivot 2 lands at index 1 after one store swap.
        assert_eq!(
            &trace.events[..7],
            &[
                StepEvent::compare(0, 4),
                StepEvent::compare(1, 4),
                StepEvent::compare(2, 4),
                StepEvent::swap(0, 2),
                StepEvent::compare(3, 4),
                StepEvent::swap(1, 4),
                // Next range popped is 2..=4, not 0..=0.
                StepEvent::compare(2, 4),
            ]
        );
    }

    #[test]
    fn duplicates_are_sorted() {
        let trace = drain(Algorithm::Quick, &[2.0, 2.0, 1.0, 2.0, 1.0]);
        assert_eq!(trace.values, vec![1.0, 1.0, 2.0, 2.0, 2.0]);
    }
}
