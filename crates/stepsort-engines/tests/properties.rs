//! Property tests: every engine sorts, terminates exactly once, and keeps
//! its counters monotonic.

use proptest::prelude::*;
use stepsort_core::{Algorithm, EngineError, EventKind, Metrics, Sequence, StepEvent};
use stepsort_engines::create_engine;
use stepsort_test_utils::{is_non_decreasing, is_permutation_of, run_to_done, Trace};

fn comparison_algorithms() -> impl Strategy<Value = Algorithm> {
    prop::sample::select(
        Algorithm::ALL
            .into_iter()
            .filter(|a| !a.is_distribution())
            .collect::<Vec<_>>(),
    )
}

fn distribution_algorithms() -> impl Strategy<Value = Algorithm> {
    prop_oneof![Just(Algorithm::Counting), Just(Algorithm::Radix)]
}

fn check_trace(trace: &Trace) -> Result<(), TestCaseError> {
    prop_assert!(
        is_non_decreasing(&trace.output),
        "not sorted: {:?}",
        trace.output
    );
    prop_assert!(is_permutation_of(&trace.input, &trace.output));

    // Done exactly once, and last.
    prop_assert_eq!(trace.count(EventKind::Done), 1);
    prop_assert_eq!(trace.events.last(), Some(&StepEvent::Done));

    // One step per resumption; other counters never decrease.
    prop_assert_eq!(trace.metrics().steps, trace.events.len() as u64);
    let mut prev = Metrics::default();
    for m in &trace.history {
        prop_assert!(m.comparisons >= prev.comparisons);
        prop_assert!(m.swaps >= prev.swaps);
        prop_assert!(m.internal_steps >= prev.internal_steps);
        prop_assert_eq!(m.steps, prev.steps + 1);
        prev = *m;
    }
    Ok(())
}

proptest! {
    #[test]
    fn comparison_sorts_order_any_finite_input(
        algo in comparison_algorithms(),
        values in prop::collection::vec(-1000.0f64..1000.0, 1..48),
    ) {
        let trace = run_to_done(algo, &values).unwrap();
        check_trace(&trace)?;
    }

    #[test]
    fn distribution_sorts_order_non_negative_integers(
        algo in distribution_algorithms(),
        values in prop::collection::vec(0u32..2000, 1..48),
    ) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let trace = run_to_done(algo, &values).unwrap();
        check_trace(&trace)?;
        prop_assert_eq!(trace.count(EventKind::Count) % values.len(), 0);
    }

    #[test]
    fn distribution_sorts_shift_negative_integers(
        algo in distribution_algorithms(),
        values in prop::collection::vec(-2000i32..2000, 1..48),
    ) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let trace = run_to_done(algo, &values).unwrap();
        check_trace(&trace)?;
    }

    #[test]
    fn counting_sort_event_totals_follow_input_length(
        values in prop::collection::vec(0u32..100, 1..64),
    ) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let trace = run_to_done(Algorithm::Counting, &values).unwrap();
        prop_assert_eq!(trace.count(EventKind::Count), values.len());
        prop_assert_eq!(trace.count(EventKind::Assign), 2 * values.len());
        prop_assert_eq!(trace.metrics().swaps, 2 * values.len() as u64);
    }

    #[test]
    fn event_indices_stay_in_bounds(
        algo in comparison_algorithms(),
        values in prop::collection::vec(-50.0f64..50.0, 1..32),
    ) {
        let trace = run_to_done(algo, &values).unwrap();
        for event in &trace.events {
            for i in event.indices() {
                prop_assert!(i < values.len(), "{} out of bounds", event);
            }
        }
    }
}

#[test]
fn every_engine_rejects_resume_after_done() {
    for algo in Algorithm::ALL {
        let mut seq = Sequence::from(vec![3.0, 1.0, 2.0]);
        let mut metrics = Metrics::default();
        let mut engine = create_engine(algo, &seq).unwrap();
        while !engine.resume(&mut seq, &mut metrics).unwrap().is_done() {}
        assert_eq!(
            engine.resume(&mut seq, &mut metrics),
            Err(EngineError::ResumedAfterDone { algorithm: algo })
        );
        assert_eq!(seq.as_slice(), &[1.0, 2.0, 3.0], "{algo}");
    }
}

#[test]
fn reversed_inputs_sort_for_every_algorithm() {
    let values: Vec<f64> = (0..64).rev().map(f64::from).collect();
    for algo in Algorithm::ALL {
        let trace = run_to_done(algo, &values).unwrap();
        assert!(is_non_decreasing(&trace.output), "{algo}");
    }
}
