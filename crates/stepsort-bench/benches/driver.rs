//! Criterion benchmarks for the tick loop, renderer callback included.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use stepsort_bench::{reference_profile, stress_profile};
use stepsort_core::{Algorithm, Frame, NullRenderer};
use stepsort_driver::Driver;

fn bench_quick_reference(c: &mut Criterion) {
    c.bench_function("run_quick_256", |b| {
        b.iter(|| {
            let mut driver = Driver::new(reference_profile(Algorithm::Quick, 42)).unwrap();
            black_box(driver.run_to_completion(&mut NullRenderer, usize::MAX).unwrap());
        });
    });
}

fn bench_merge_stress_with_renderer(c: &mut Criterion) {
    c.bench_function("run_merge_4096_sum_frames", |b| {
        b.iter(|| {
            let mut driver = Driver::new(stress_profile(Algorithm::Merge, 42)).unwrap();
            let mut total = 0.0;
            let mut renderer = |frame: &Frame<'_>| {
                total += frame.sequence.as_slice().iter().sum::<f64>();
            };
            driver.run_to_completion(&mut renderer, usize::MAX).unwrap();
            black_box(total);
        });
    });
}

fn bench_single_tick(c: &mut Criterion) {
    let mut driver = Driver::new(reference_profile(Algorithm::Bubble, 42)).unwrap();
    driver.start().unwrap();
    c.bench_function("tick_bubble_64_steps", |b| {
        b.iter(|| {
            if !driver.state().is_terminal() {
                black_box(driver.tick(&mut NullRenderer).unwrap());
            } else {
                driver.reset();
                driver.start().unwrap();
            }
        });
    });
}

criterion_group!(
    benches,
    bench_quick_reference,
    bench_merge_stress_with_renderer,
    bench_single_tick
);
criterion_main!(benches);
