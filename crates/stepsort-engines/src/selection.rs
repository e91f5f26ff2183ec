//! Selection sort.

use stepsort_core::{Metrics, StepEvent};

use crate::engine::Stepper;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Compare the running minimum with `j`, or end the scan.
    Scan,
    /// Move the running minimum to `j` if `j` holds a smaller value.
    Resolve,
    /// Exchange position `i` with the minimum, then start the next scan.
    Place,
    Done,
}

pub(crate) struct SelectionSort {
    n: usize,
    i: usize,
    j: usize,
    min: usize,
    phase: Phase,
}

impl SelectionSort {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            n,
            i: 0,
            j: 1,
            min: 0,
            phase: if n == 0 { Phase::Done } else { Phase::Scan },
        }
    }
}

impl Stepper for SelectionSort {
    fn step(&mut self, values: &mut [f64], metrics: &mut Metrics) -> StepEvent {
        loop {
            match self.phase {
                Phase::Scan => {
                    if self.j < self.n {
                        metrics.comparisons += 1;
                        self.phase = Phase::Resolve;
                        return StepEvent::compare(self.min, self.j);
                    }
                    self.phase = Phase::Place;
                }
                Phase::Resolve => {
                    if values[self.j] < values[self.min] {
                        self.min = self.j;
                    }
                    self.j += 1;
                    self.phase = Phase::Scan;
                }
                Phase::Place => {
                    let (i, min) = (self.i, self.min);
                    self.i += 1;
                    self.min = self.i;
                    self.j = self.i + 1;
                    self.phase = if self.i < self.n {
                        Phase::Scan
                    } else {
                        Phase::Done
                    };
                    if min != i {
                        values.swap(i, min);
                        metrics.swaps += 1;
                        return StepEvent::swap(i, min);
                    }
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
    fn sorted_input_compares_but_never_swaps() {
        let trace = drain(Algorithm::Selection, &[1.0, 2.0, 3.0]);
        assert_eq!(trace.metrics.comparisons, 3);
        assert_eq!(trace.metrics.swaps, 0);
        assert_eq!(trace.events.last(), Some(&StepEvent::Done));
        assert_eq!(trace.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn compares_against_the_running_minimum() {
        let trace = drain(Algorithm::Selection, &[3.0, 2.0, 1.0]);
        assert_eq!(
            trace.events,
            vec![
                StepEvent::compare(0, 1),
                StepEvent::compare(1, 2),
                StepEvent::swap(0, 2),
                StepEvent::compare(1, 2),
                StepEvent::Done,
            ]
        );
        assert_eq!(trace.values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn one_swap_per_displaced_position() {
        let trace = drain(Algorithm::Selection, &[2.0, 1.0, 4.0, 3.0]);
        assert_eq!(trace.values, vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(trace.metrics.swaps, 2);
        assert_eq!(trace.metrics.comparisons, 6);
    }
}
