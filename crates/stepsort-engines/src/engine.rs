//! The [`Engine`] handle and the [`create_engine`] factory.
//!
//! Every algorithm is an explicit state machine behind the crate-private
//! [`Stepper`] trait. [`Engine`] wraps a stepper with the checks shared by
//! all ten: the sequence must keep the length it had at creation, and
//! nothing may be resumed once `Done` has been emitted.

use stepsort_core::{Algorithm, EngineError, Metrics, Sequence, StepEvent};

use crate::bubble::BubbleSort;
use crate::cocktail::CocktailShakerSort;
use crate::counting::CountingSort;
use crate::heap::HeapSort;
use crate::insertion::GappedInsertion;
use crate::merge::MergeSort;
use crate::quick::QuickSort;
use crate::radix::RadixSort;
use crate::selection::SelectionSort;

/// One resumable algorithm.
///
/// # Contract
///
/// - `step()` performs the minimal work needed to produce exactly one
///   event, mutating `values` and `metrics` as that event requires.
/// - Phases that produce no event (loop bookkeeping, prefix sums) are
///   folded into the same call as the next event.
/// - `values` always has the length the stepper was built for.
/// - After returning [`StepEvent::Done`], `step()` is never called again.
pub(crate) trait Stepper: Send {
    fn step(&mut self, values: &mut [f64], metrics: &mut Metrics) -> StepEvent;
}

/// A running sorting algorithm, resumed one event at a time.
///
/// Created by [`create_engine`]. The engine is bound to the length of the
/// sequence it was created over and owns all of its progress state: loop
/// indices, explicit range stacks, and scratch buffers. No call stack
/// outlives a single [`resume()`](Engine::resume).
pub struct Engine {
    algorithm: Algorithm,
    len: usize,
    finished: bool,
    stepper: Box<dyn Stepper>,
}

impl Engine {
    /// Perform one unit of work and report it.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ResumedAfterDone`] if `Done` was already emitted.
    /// - [`EngineError::SequenceLengthChanged`] if `sequence` is not the
    ///   length the engine was created for.
    pub fn resume(
        &mut self,
        sequence: &mut Sequence,
        metrics: &mut Metrics,
    ) -> Result<StepEvent, EngineError> {
        if self.finished {
            return Err(EngineError::ResumedAfterDone {
                algorithm: self.algorithm,
            });
        }
        if sequence.len() != self.len {
            return Err(EngineError::SequenceLengthChanged {
                expected: self.len,
                actual: sequence.len(),
            });
        }
        let event = self.stepper.step(sequence.as_mut_slice(), metrics);
        if event.is_done() {
            self.finished = true;
        }
        Ok(event)
    }

    /// Algorithm this engine runs.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sequence length the engine is bound to.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the bound sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `Done` has been emitted.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("algorithm", &self.algorithm)
            .field("len", &self.len)
            .field("finished", &self.finished)
            .finish()
    }
}

/// Build the engine for `algorithm` over `sequence`.
///
/// Comparison sorts accept any sequence. Counting and radix sort inspect
/// the values up front and reject sequences they cannot bucket.
///
/// # Errors
///
/// Returns [`EngineError::PreconditionViolation`] when a distribution sort
/// sees a non-finite value or a value range too wide to bucket.
pub fn create_engine(algorithm: Algorithm, sequence: &Sequence) -> Result<Engine, EngineError> {
    let n = sequence.len();
    let stepper: Box<dyn Stepper> = match algorithm {
        Algorithm::Bubble => Box::new(BubbleSort::new(n)),
        Algorithm::Insertion => Box::new(GappedInsertion::insertion(n)),
        Algorithm::Selection => Box::new(SelectionSort::new(n)),
        Algorithm::Merge => Box::new(MergeSort::new(n)),
        Algorithm::Quick => Box::new(QuickSort::new(n)),
        Algorithm::Heap => Box::new(HeapSort::new(n)),
        Algorithm::Shell => Box::new(GappedInsertion::shell(n)),
        Algorithm::Cocktail => Box::new(CocktailShakerSort::new(n)),
        Algorithm::Counting => Box::new(CountingSort::new(sequence)?),
        Algorithm::Radix => Box::new(RadixSort::new(sequence)?),
    };
    Ok(Engine {
        algorithm,
        len: n,
        finished: false,
        stepper,
    })
}
