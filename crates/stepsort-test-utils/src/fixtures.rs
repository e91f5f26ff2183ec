//! Run-to-completion harness and ordering checks.

use stepsort_core::{Algorithm, EngineError, EventKind, Metrics, Sequence, StepEvent};
use stepsort_engines::create_engine;

/// Upper bound on resumptions before [`run_to_done`] gives up.
///
/// Comfortably above the quadratic algorithms' worst case for the input
/// sizes used in tests.
pub const MAX_RESUMES: usize = 4_000_000;

/// Everything observed while driving one engine to `Done`.
#[derive(Clone, Debug)]
pub struct Trace {
    pub input: Vec<f64>,
    pub output: Vec<f64>,
    pub events: Vec<StepEvent>,
    /// Metrics after each resumption, `steps` included.
    pub history: Vec<Metrics>,
}

impl Trace {
    /// Metrics after the final resumption.
    pub fn metrics(&self) -> Metrics {
        self.history.last().copied().unwrap_or_default()
    }

    /// Number of events of `kind`.
    pub fn count(&self, kind: EventKind) -> usize {
        self.events.iter().filter(|e| e.kind() == kind).count()
    }
}

/// Drive `algorithm` over `values` to `Done`, counting `steps` the way
/// the driver does.
///
/// # Panics
///
/// Panics if the engine has not finished after [`MAX_RESUMES`] calls.
pub fn run_to_done(algorithm: Algorithm, values: &[f64]) -> Result<Trace, EngineError> {
    let mut seq = Sequence::from(values);
    let mut metrics = Metrics::default();
    let mut engine = create_engine(algorithm, &seq)?;
    let mut events = Vec::new();
    let mut history = Vec::new();
    for _ in 0..MAX_RESUMES {
        let event = engine.resume(&mut seq, &mut metrics)?;
        metrics.steps += 1;
        events.push(event);
        history.push(metrics);
        if event.is_done() {
            return Ok(Trace {
                input: values.to_vec(),
                output: seq.into_vec(),
                events,
                history,
            });
        }
    }
    panic!("{algorithm} did not reach Done within {MAX_RESUMES} resumptions");
}

/// Whether every element is `<=` its successor.
pub fn is_non_decreasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Whether `a` and `b` hold the same multiset of values.
///
/// Compares bit patterns after a total-order sort, so `-0.0` and `0.0`
/// are distinct.
pub fn is_permutation_of(a: &[f64], b: &[f64]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_by(f64::total_cmp);
    b.sort_by(f64::total_cmp);
    a.iter().zip(&b).all(|(x, y)| x.to_bits() == y.to_bits())
}
