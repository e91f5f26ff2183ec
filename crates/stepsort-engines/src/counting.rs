//! Counting sort over the full value range.

use stepsort_core::{Algorithm, EngineError, Metrics, Sequence, StepEvent};

use crate::distribution::{require_finite, BucketKey, BucketPass, TallyMetric};
use crate::engine::Stepper;

/// Largest bucket table counting sort will allocate.
///
/// A sequence whose `floor(max - min) + 1` exceeds this is rejected at
/// engine creation rather than allocated.
pub const MAX_COUNTING_BUCKETS: usize = 1 << 20;

pub(crate) struct CountingSort {
    /// `None` for an empty sequence.
    pass: Option<BucketPass>,
}

impl CountingSort {
    pub(crate) fn new(sequence: &Sequence) -> Result<Self, EngineError> {
        require_finite(Algorithm::Counting, sequence)?;
        let Some((min, max)) = sequence.bounds() else {
            return Ok(Self { pass: None });
        };
        let span = (max - min).floor();
        if span >= MAX_COUNTING_BUCKETS as f64 {
            return Err(EngineError::PreconditionViolation {
                algorithm: Algorithm::Counting,
                reason: format!(
                    "value range {min}..={max} needs more than {MAX_COUNTING_BUCKETS} buckets"
                ),
            });
        }
        let buckets = span as usize + 1;
        Ok(Self {
            pass: Some(BucketPass::new(
                BucketKey::Offset { min },
                buckets,
                sequence.len(),
                TallyMetric::InternalSteps,
            )),
        })
    }
}

impl Stepper for CountingSort {
    fn step(&mut self, values: &mut [f64], metrics: &mut Metrics) -> StepEvent {
        self.pass
            .as_mut()
            .and_then(|pass| pass.advance(values, metrics))
            .unwrap_or(StepEvent::Done)
    }
}
