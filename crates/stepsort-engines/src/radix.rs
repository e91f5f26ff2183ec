//! Least-significant-digit radix sort in base 10.
//!
//! Negative inputs are shifted up by `-min` before the digit passes and
//! shifted back afterwards; both shift passes report one `Assign` per
//! element. The number of digit passes is governed by the digit count of
//! the (shifted) maximum.

use stepsort_core::{Algorithm, EngineError, Metrics, Sequence, StepEvent};

use crate::distribution::{require_finite, BucketKey, BucketPass, TallyMetric};
use crate::engine::Stepper;

/// Largest shifted maximum radix sort accepts: beyond `2^53`, `f64` no
/// longer represents every integer and digit extraction is meaningless.
pub const MAX_RADIX_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    ShiftDown,
    /// Start the pass for `exp`, or stop when the maximum has no more digits.
    NextDigit,
    Digit,
    ShiftUp,
    Done,
}

pub(crate) struct RadixSort {
    /// Amount subtracted before the digit passes; `0.0` when all values
    /// are already non-negative.
    shift: f64,
    /// Maximum after shifting.
    max: f64,
    exp: f64,
    cursor: usize,
    pass: BucketPass,
    phase: Phase,
}

impl RadixSort {
    pub(crate) fn new(sequence: &Sequence) -> Result<Self, EngineError> {
        require_finite(Algorithm::Radix, sequence)?;
        let (min, max) = sequence.bounds().unwrap_or((0.0, 0.0));
        let shift = if min < 0.0 { min } else { 0.0 };
        let max = max - shift;
        if max > MAX_RADIX_MAGNITUDE {
            return Err(EngineError::PreconditionViolation {
                algorithm: Algorithm::Radix,
                reason: format!("shifted maximum {max} exceeds 2^53"),
            });
        }
        let phase = if sequence.is_empty() {
            Phase::Done
        } else if shift < 0.0 {
            Phase::ShiftDown
        } else {
            Phase::NextDigit
        };
        Ok(Self {
            shift,
            max,
            exp: 1.0,
            cursor: 0,
            pass: BucketPass::new(
                BucketKey::Digit { exp: 1.0 },
                10,
                sequence.len(),
                TallyMetric::Comparisons,
            ),
            phase,
        })
    }
}

impl Stepper for RadixSort {
    fn step(&mut self, values: &mut [f64], metrics: &mut Metrics) -> StepEvent {
        loop {
            match self.phase {
                Phase::ShiftDown => {
                    if self.cursor < values.len() {
                        let i = self.cursor;
                        values[i] -= self.shift;
                        self.cursor += 1;
                        return StepEvent::Assign(i);
                    }
                    self.phase = Phase::NextDigit;
                }
                Phase::NextDigit => {
                    if (self.max / self.exp).floor() > 0.0 {
                        self.pass.restart(BucketKey::Digit { exp: self.exp });
                        self.phase = Phase::Digit;
                    } else {
                        self.cursor = 0;
                        self.phase = if self.shift < 0.0 {
                            Phase::ShiftUp
                        } else {
                            Phase::Done
                        };
                    }
                }
                Phase::Digit => match self.pass.advance(values, metrics) {
                    Some(event) => return event,
                    None => {
                        self.exp *= 10.0;
                        self.phase = Phase::NextDigit;
                    }
                },
                Phase::ShiftUp => {
                    if self.cursor < values.len() {
                        let i = self.cursor;
                        values[i] += self.shift;
                        self.cursor += 1;
                        return StepEvent::Assign(i);
                    }
                    self.phase = Phase::Done;
                }
                Phase::Done => return StepEvent::Done,
            }
        }
    }
}
