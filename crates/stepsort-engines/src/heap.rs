//! Heap sort with a resumable sift-down.
//!
//! The build phase sifts down every internal node from `n/2 - 1` to the
//! root; the extract phase swaps the root behind the shrinking heap and
//! sifts the new root down. Sift-down is tail recursive, so its whole
//! call chain collapses into one [`SiftDown`] cursor that advances from
//! a node to the child it exchanged with.

use stepsort_core::{Metrics, StepEvent};

use crate::engine::Stepper;

/// Position of an in-progress sift-down.
#[derive(Clone, Copy, Debug, Default)]
struct SiftDown {
    /// Number of elements currently in the heap.
    size: usize,
    /// Node being restored.
    node: usize,
    /// Largest of `node` and the children examined so far.
    largest: usize,
}

impl SiftDown {
    fn at(size: usize, node: usize) -> Self {
        Self {
            size,
            node,
            largest: node,
        }
    }

    fn left(&self) -> usize {
        2 * self.node + 1
    }

    fn right(&self) -> usize {
        2 * self.node + 2
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// Start the sift-down of the next internal node.
    Build,
    /// Move the root behind the heap and start its sift-down.
    Extract,
    CompareLeft,
    ResolveLeft,
    CompareRight,
    ResolveRight,
    /// Exchange with the larger child, or end the sift-down.
    Exchange,
    Done,
}

pub(crate) struct HeapSort {
    /// Internal nodes not yet sifted during the build phase.
    unbuilt: usize,
    /// Last index of the heap during the extract phase.
    end: usize,
    sift: SiftDown,
    /// Where to continue once the current sift-down completes.
    after_sift: Phase,
    phase: Phase,
}

impl HeapSort {
    pub(crate) fn new(n: usize) -> Self {
        Self {
            unbuilt: n / 2,
            end: n.saturating_sub(1),
            sift: SiftDown::default(),
            after_sift: Phase::Build,
            phase: if n < 2 { Phase::Done } else { Phase::Build },
        }
    }
}

impl Stepper for HeapSort {
    fn step(&mut self, values: &mut [f64], metrics: &mut Metrics) -> StepEvent {
        loop {
            match self.phase {
                Phase::Build => {
                    if self.unbuilt > 0 {
                        self.unbuilt -= 1;
                        self.sift = SiftDown::at(values.len(), self.unbuilt);
                        self.after_sift = Phase::Build;
                        self.phase = Phase::CompareLeft;
                    } else {
                        self.phase = Phase::Extract;
                    }
                }
                Phase::Extract => {
                    if self.end == 0 {
                        self.phase = Phase::Done;
                        continue;
                    }
                    let end = self.end;
                    values.swap(0, end);
                    metrics.swaps += 1;
                    self.end -= 1;
                    self.sift = SiftDown::at(end, 0);
                    self.after_sift = Phase::Extract;
                    self.phase = Phase::CompareLeft;
                    return StepEvent::swap(0, end);
                }
                Phase::CompareLeft => {
                    let left = self.sift.left();
                    if left < self.sift.size {
                        metrics.comparisons += 1;
                        self.phase = Phase::ResolveLeft;
                        return StepEvent::compare(self.sift.largest, left);
                    }
                    self.phase = Phase::CompareRight;
                }
                Phase::ResolveLeft => {
                    let left = self.sift.left();
                    if values[left] > values[self.sift.largest] {
                        self.sift.largest = left;
                    }
                    self.phase = Phase::CompareRight;
                }
                Phase::CompareRight => {
                    let right = self.sift.right();
                    if right < self.sift.size {
                        metrics.comparisons += 1;
                        self.phase = Phase::ResolveRight;
                        return StepEvent::compare(self.sift.largest, right);
                    }
                    self.phase = Phase::Exchange;
                }
                Phase::ResolveRight => {
                    let right = self.sift.right();
                    if values[right] > values[self.sift.largest] {
                        self.sift.largest = right;
                    }
                    self.phase = Phase::Exchange;
                }
                Phase::Exchange => {
                    let SiftDown {
                        size,
                        node,
                        largest,
                    } = self.sift;
                    if largest == node {
                        self.phase = self.after_sift;
                        continue;
                    }
                    values.swap(node, largest);
                    metrics.swaps += 1;
                    self.sift = SiftDown::at(size, largest);
                    self.phase = Phase::CompareLeft;
                    return StepEvent::swap(node, largest);
                }
                Phase::Done => return StepEvent::Done,
            }
        }
    }
}
