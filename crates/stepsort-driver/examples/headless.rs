//! Headless run that prints ASCII bars to stdout.
//!
//! ```text
//! RUST_LOG=info cargo run -p stepsort-driver --example headless -- quick 24 4
//! ```
//!
//! Arguments (all optional): algorithm name, sequence length, steps per tick.

use std::env;
use std::error::Error;

use stepsort_core::{Frame, RunState};
use stepsort_driver::{Driver, DriverConfig, ValueRange};

const BAR_WIDTH: f64 = 40.0;
const HIGH: i64 = 99;

fn draw(frame: &Frame<'_>) {
    let touched = frame
        .last_event
        .map(|e| e.indices())
        .unwrap_or_default();
    println!("\x1b[2J\x1b[H{:?}", frame.state);
    for (i, &v) in frame.sequence.as_slice().iter().enumerate() {
        let len = (v / HIGH as f64 * BAR_WIDTH).round() as usize;
        let mark = if touched.contains(&i) { '>' } else { ' ' };
        println!("{mark}{:>3} {}", v, "#".repeat(len));
    }
    let m = frame.metrics;
    println!(
        "comparisons {}  swaps {}  steps {}",
        m.comparisons,
        m.swaps,
        m.total_steps()
    );
    if let Some(event) = frame.last_event {
        println!("last: {event}");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let name = args.next().unwrap_or_else(|| "bubble".to_owned());
    let sequence_length = args.next().map(|s| s.parse::<usize>()).transpose()?.unwrap_or(20);
    let steps_per_tick = args.next().map(|s| s.parse::<usize>()).transpose()?.unwrap_or(1);

    let config = DriverConfig {
        sequence_length,
        steps_per_tick,
        seed: 2024,
        values: ValueRange::Integers { low: 1, high: HIGH },
        ..DriverConfig::default()
    }
    .with_algorithm_name(&name)?;

    let theory = config.algorithm.theory();
    let mut driver = Driver::new(config)?;
    driver.start()?;

    let mut renderer = |frame: &Frame<'_>| {
        draw(frame);
        std::thread::sleep(std::time::Duration::from_millis(30));
    };
    while driver.state() == RunState::Running {
        driver.tick(&mut renderer)?;
    }

    println!();
    println!("{}", theory.description);
    println!(
        "time {}  space {}",
        theory.time_complexity, theory.space_complexity
    );
    Ok(())
}
