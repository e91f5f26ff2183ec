//! Seeded sequence generation.

use rand::Rng;
use stepsort_core::Sequence;

use crate::config::ValueRange;

/// Draw `len` values from `range`.
///
/// `range` must already be validated; an unchecked range may panic
/// inside the sampler.
pub fn random_sequence<R: Rng + ?Sized>(rng: &mut R, len: usize, range: ValueRange) -> Sequence {
    let values = match range {
        ValueRange::Integers { low, high } => (0..len)
            .map(|_| rng.random_range(low..=high) as f64)
            .collect(),
        ValueRange::Continuous { low, high } => {
            (0..len).map(|_| rng.random_range(low..high)).collect()
        }
    };
    Sequence::new(values)
}
