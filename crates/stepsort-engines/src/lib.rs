//! Resumable step-event engines for ten classic sorting algorithms.
//!
//! Each algorithm is an explicit state machine: a phase enum plus the
//! loop indices, range stack, or scratch buffers it needs to pick up
//! where it left off. [`create_engine`] builds one behind the common
//! [`Engine`] handle; every [`Engine::resume`] call performs one unit of
//! work and returns the [`StepEvent`](stepsort_core::StepEvent) that
//! describes it.
//!
//! # Event granularity
//!
//! | Algorithm | Events per unit of work |
//! |-----------|-------------------------|
//! | Bubble, Cocktail | `Compare(i, i+1)`, then `Swap(i, i+1)` if out of order |
//! | Insertion, Shell | `Swap(j, j+gap)` per shift, `Insert(i)` when the key settles |
//! | Selection | `Compare(min, j)` per scan step, `Swap(i, min)` per pass |
//! | Merge | `Compare(k)` and `Swap(k)` keyed to the destination slot |
//! | Quick | `Compare(j, high)`, `Swap(store, j)`, pivot `Swap(p, high)` |
//! | Heap | `Compare(largest, child)`, `Swap(node, largest)`, `Swap(0, end)` |
//! | Counting, Radix | `Count(i)` per tally, `Assign(i)` per placement and copy-back |
//!
//! # Preconditions
//!
//! Counting and radix sort bucket values by `floor`. They require finite
//! values and a bounded range ([`MAX_COUNTING_BUCKETS`],
//! [`MAX_RADIX_MAGNITUDE`]); violations are reported by [`create_engine`].
//! Their output is fully ordered only for integer inputs.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod bubble;
mod cocktail;
mod counting;
mod distribution;
pub mod engine;
mod heap;
mod insertion;
mod merge;
mod quick;
mod radix;
mod selection;

pub use counting::MAX_COUNTING_BUCKETS;
pub use engine::{create_engine, Engine};
pub use radix::MAX_RADIX_MAGNITUDE;

#[cfg(test)]
pub(crate) mod testing {
    use stepsort_core::{Algorithm, EventKind, Metrics, Sequence, StepEvent};

    pub(crate) struct Trace {
        pub events: Vec<StepEvent>,
        pub values: Vec<f64>,
        pub metrics: Metrics,
    }

    impl Trace {
        pub fn count(&self, kind: EventKind) -> usize {
            self.events.iter().filter(|e| e.kind() == kind).count()
        }
    }

    /// Resume `algorithm` over `values` until `Done`.
    pub(crate) fn drain(algorithm: Algorithm, values: &[f64]) -> Trace {
        let mut seq = Sequence::from(values);
        let mut metrics = Metrics::default();
        let mut engine = crate::create_engine(algorithm, &seq).unwrap();
        let mut events = Vec::new();
        loop {
            let event = engine.resume(&mut seq, &mut metrics).unwrap();
            events.push(event);
            if event.is_done() {
                break;
            }
            assert!(events.len() < 1_000_000, "{algorithm} did not terminate");
        }
        Trace {
            events,
            values: seq.into_vec(),
            metrics,
        }
    }
}
