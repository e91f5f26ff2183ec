//! Property tests over generated sequences for all ten algorithms.

use proptest::prelude::*;
use stepsort_core::{Algorithm, Metrics, RunState};
use stepsort_driver::{Driver, DriverConfig, ValueRange};
use stepsort_test_utils::{is_non_decreasing, is_permutation_of, RecordingRenderer};

fn any_algorithm() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(Algorithm::ALL.to_vec())
}

fn config(algorithm: Algorithm, len: usize, steps: usize, seed: u64, low: i64) -> DriverConfig {
    DriverConfig {
        sequence_length: len,
        steps_per_tick: steps,
        algorithm,
        seed,
        values: ValueRange::Integers {
            low,
            high: low + 200,
        },
    }
}

proptest! {
    #[test]
    fn every_run_ends_sorted_and_permuted(
        algo in any_algorithm(),
        len in 1usize..40,
        steps in 1usize..16,
        seed in any::<u64>(),
        low in -300i64..300,
    ) {
        let mut driver = Driver::new(config(algo, len, steps, seed, low)).unwrap();
        let input = driver.sequence().as_slice().to_vec();
        let mut renderer = RecordingRenderer::new();
        let summary = driver.run_to_completion(&mut renderer, 1_000_000).unwrap();

        prop_assert_eq!(summary.state, RunState::Finished);
        prop_assert!(is_non_decreasing(driver.sequence().as_slice()));
        prop_assert!(is_permutation_of(&input, driver.sequence().as_slice()));
        prop_assert_eq!(renderer.frames.len(), summary.ticks);

        // No tick exceeds its budget.
        let mut prev = Metrics::default();
        for frame in &renderer.frames {
            prop_assert!(frame.metrics.steps - prev.steps <= steps as u64);
            prop_assert!(frame.metrics.steps > prev.steps);
            prop_assert!(frame.metrics.comparisons >= prev.comparisons);
            prop_assert!(frame.metrics.swaps >= prev.swaps);
            prev = frame.metrics;
        }
    }

    #[test]
    fn reset_then_rerun_starts_from_zero(
        algo in any_algorithm(),
        len in 1usize..24,
        seed in any::<u64>(),
    ) {
        let mut driver = Driver::new(config(algo, len, 4, seed, 0)).unwrap();
        driver.run_to_completion(&mut RecordingRenderer::new(), 1_000_000).unwrap();

        driver.reset();
        prop_assert_eq!(driver.state(), RunState::Idle);
        prop_assert_eq!(driver.metrics(), Metrics::default());
        prop_assert_eq!(driver.sequence().len(), len);

        driver.start().unwrap();
        prop_assert_eq!(driver.metrics(), Metrics::default());
        let summary = driver.run_to_completion(&mut RecordingRenderer::new(), 1_000_000).unwrap();
        prop_assert_eq!(summary.state, RunState::Finished);
        prop_assert!(driver.sequence().is_sorted());
    }

    #[test]
    fn same_seed_same_run(algo in any_algorithm(), seed in any::<u64>()) {
        let mut a = Driver::new(config(algo, 20, 3, seed, 0)).unwrap();
        let mut b = Driver::new(config(algo, 20, 3, seed, 0)).unwrap();
        let mut ra = RecordingRenderer::new();
        let mut rb = RecordingRenderer::new();
        a.run_to_completion(&mut ra, 1_000_000).unwrap();
        b.run_to_completion(&mut rb, 1_000_000).unwrap();
        prop_assert_eq!(ra.frames, rb.frames);
    }
}

#[test]
fn continuous_values_sort_with_comparison_engines() {
    for algo in Algorithm::ALL.into_iter().filter(|a| !a.is_distribution()) {
        let mut driver = Driver::new(DriverConfig {
            sequence_length: 30,
            steps_per_tick: 7,
            algorithm: algo,
            seed: 5,
            values: ValueRange::Continuous {
                low: 10.0,
                high: 500.0,
            },
        })
        .unwrap();
        let summary = driver
            .run_to_completion(&mut RecordingRenderer::new(), 1_000_000)
            .unwrap();
        assert_eq!(summary.state, RunState::Finished, "{algo}");
        assert!(driver.sequence().is_sorted(), "{algo}");
    }
}
