//! The numeric sequence under sort.

use std::ops::Index;

/// Fixed-length, in-place mutable sequence of `f64` values.
///
/// A run owns its sequence for the run's lifetime. The active engine is
/// the only writer; renderers read it through [`as_slice`](Self::as_slice).
/// The length never changes once constructed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Sequence {
    values: Vec<f64>,
}

impl Sequence {
    /// Wrap explicit values.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read-only view of the values.
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Mutable view of the values. Length is fixed.
    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.values
    }

    /// Consume the sequence, returning its values.
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }

    /// Whether every element is `<=` its successor.
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// Smallest and largest value, or `None` when empty.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        let first = *self.values.first()?;
        Some(
            self.values
                .iter()
                .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
        )
    }

    /// Index of the first value that is NaN or infinite.
    pub fn first_non_finite(&self) -> Option<usize> {
        self.values.iter().position(|v| !v.is_finite())
    }
}

impl From<Vec<f64>> for Sequence {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Sequence {
    fn from(values: &[f64]) -> Self {
        Self::new(values.to_vec())
    }
}

impl Index<usize> for Sequence {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}
