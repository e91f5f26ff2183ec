//! Benchmark profiles for the stepsort engines and driver.
//!
//! - [`reference_profile`]: 256 integers, 64 resumptions per tick
//! - [`stress_profile`]: 4096 integers, 1024 resumptions per tick
//! - [`bench_sequence`]: deterministic input for direct engine benches

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use stepsort_core::{Algorithm, Sequence};
use stepsort_driver::{random_sequence, DriverConfig, ValueRange};

/// Value range shared by every profile. Fits counting sort's bucket
/// limit and gives radix sort four digits.
pub const BENCH_VALUES: ValueRange = ValueRange::Integers { low: 0, high: 9_999 };

/// Driver config for a 256-value run.
pub fn reference_profile(algorithm: Algorithm, seed: u64) -> DriverConfig {
    DriverConfig {
        sequence_length: 256,
        steps_per_tick: 64,
        algorithm,
        seed,
        values: BENCH_VALUES,
    }
}

/// Driver config for a 4096-value run.
///
/// Quadratic algorithms take millions of resumptions at this size;
/// benches use it for the `n log n` and distribution sorts only.
pub fn stress_profile(algorithm: Algorithm, seed: u64) -> DriverConfig {
    DriverConfig {
        sequence_length: 4096,
        steps_per_tick: 1024,
        algorithm,
        seed,
        values: BENCH_VALUES,
    }
}

/// Whether `algorithm` is quadratic in the worst case.
pub fn is_quadratic(algorithm: Algorithm) -> bool {
    matches!(
        algorithm,
        Algorithm::Bubble | Algorithm::Insertion | Algorithm::Selection | Algorithm::Cocktail
    )
}

/// `len` values from [`BENCH_VALUES`], fixed by `seed`.
pub fn bench_sequence(len: usize, seed: u64) -> Sequence {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    random_sequence(&mut rng, len, BENCH_VALUES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_validate() {
        for algo in Algorithm::ALL {
            reference_profile(algo, 42).validate().unwrap();
            stress_profile(algo, 42).validate().unwrap();
        }
    }

    #[test]
    fn bench_sequence_deterministic() {
        assert_eq!(bench_sequence(100, 42), bench_sequence(100, 42));
        assert_eq!(bench_sequence(100, 42).len(), 100);
    }

    #[test]
    fn quadratic_set_excludes_shell() {
        assert!(is_quadratic(Algorithm::Bubble));
        assert!(!is_quadratic(Algorithm::Shell));
        assert_eq!(Algorithm::ALL.iter().filter(|a| is_quadratic(**a)).count(), 4);
    }
}
