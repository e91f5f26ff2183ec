//! One stable counting pass, shared by counting sort and radix sort.
//!
//! A pass runs four stages: tally every element into its bucket
//! (`Count` per element), turn the tallies into prefix sums (silent),
//! place elements into a scratch buffer from the back (`Assign` per
//! element), then copy the buffer back (`Assign` per element).

use stepsort_core::{Algorithm, EngineError, Metrics, Sequence, StepEvent};

/// How a value maps to its bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum BucketKey {
    /// `floor(v - min)`: counting sort over the whole value range.
    Offset { min: f64 },
    /// `floor(v / exp) % 10`: one decimal digit of a non-negative value.
    Digit { exp: f64 },
}

impl BucketKey {
    fn bucket(self, value: f64) -> usize {
        match self {
            Self::Offset { min } => (value - min).floor() as usize,
            Self::Digit { exp } => ((value / exp).floor() % 10.0) as usize,
        }
    }
}

/// Counter a tally event is recorded in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum TallyMetric {
    /// Counting sort: tallies are engine-internal steps.
    InternalSteps,
    /// Radix sort: digit extraction counts as a comparison.
    Comparisons,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    Tally,
    Prefix,
    Place,
    CopyBack,
    Complete,
}

pub(crate) struct BucketPass {
    key: BucketKey,
    tally_metric: TallyMetric,
    counts: Vec<usize>,
    output: Vec<f64>,
    cursor: usize,
    stage: Stage,
}

impl BucketPass {
    pub(crate) fn new(key: BucketKey, buckets: usize, n: usize, tally_metric: TallyMetric) -> Self {
        Self {
            key,
            tally_metric,
            counts: vec![0; buckets],
            output: vec![0.0; n],
            cursor: 0,
            stage: Stage::Tally,
        }
    }

    /// Rewind for another pass with a new key, reusing the buffers.
    pub(crate) fn restart(&mut self, key: BucketKey) {
        self.key = key;
        self.counts.fill(0);
        self.cursor = 0;
        self.stage = Stage::Tally;
    }

    /// Produce the next event of this pass, or `None` once it is complete.
    pub(crate) fn advance(&mut self, values: &mut [f64], metrics: &mut Metrics) -> Option<StepEvent> {
        let n = values.len();
        loop {
            match self.stage {
                Stage::Tally => {
                    if self.cursor < n {
                        let i = self.cursor;
                        self.counts[self.key.bucket(values[i])] += 1;
                        match self.tally_metric {
                            TallyMetric::InternalSteps => metrics.internal_steps += 1,
                            TallyMetric::Comparisons => metrics.comparisons += 1,
                        }
                        self.cursor += 1;
                        return Some(StepEvent::Count(i));
                    }
                    self.stage = Stage::Prefix;
                }
                Stage::Prefix => {
                    for b in 1..self.counts.len() {
                        self.counts[b] += self.counts[b - 1];
                        metrics.internal_steps += 1;
                    }
                    self.cursor = n;
                    self.stage = Stage::Place;
                }
                Stage::Place => {
                    if self.cursor > 0 {
                        self.cursor -= 1;
                        let i = self.cursor;
                        let b = self.key.bucket(values[i]);
                        self.counts[b] -= 1;
                        self.output[self.counts[b]] = values[i];
                        metrics.swaps += 1;
                        return Some(StepEvent::Assign(i));
                    }
                    self.stage = Stage::CopyBack;
                }
                Stage::CopyBack => {
                    if self.cursor < n {
                        let i = self.cursor;
                        values[i] = self.output[i];
                        metrics.swaps += 1;
                        self.cursor += 1;
                        return Some(StepEvent::Assign(i));
                    }
                    self.stage = Stage::Complete;
                }
                Stage::Complete => return None,
            }
        }
    }
}

/// Reject sequences containing NaN or infinities.
pub(crate) fn require_finite(algorithm: Algorithm, sequence: &Sequence) -> Result<(), EngineError> {
    match sequence.first_non_finite() {
        Some(index) => Err(EngineError::PreconditionViolation {
            algorithm,
            reason: format!("value at index {index} is not finite"),
        }),
        None => Ok(()),
    }
}
