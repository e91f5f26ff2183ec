//! Stepsort: ten classic sorting algorithms, one observable step at a time.
//!
//! This is the facade crate that re-exports the public API of the
//! stepsort sub-crates. Adding `stepsort` as a single dependency is
//! enough for most users.
//!
//! # Quick start
//!
//! ```rust
//! use stepsort::prelude::*;
//!
//! let config = DriverConfig {
//!     sequence_length: 32,
//!     steps_per_tick: 4,
//!     algorithm: "shell".parse().unwrap(),
//!     seed: 7,
//!     ..DriverConfig::default()
//! };
//! let mut driver = Driver::new(config).unwrap();
//! driver.start().unwrap();
//!
//! let mut frames = 0;
//! while driver.state() == RunState::Running {
//!     driver
//!         .tick(&mut |frame: &Frame<'_>| {
//!             assert_eq!(frame.sequence.len(), 32);
//!             frames += 1;
//!         })
//!         .unwrap();
//! }
//! assert!(driver.sequence().is_sorted());
//! assert!(frames > 0);
//! ```
//!
//! Engines can also be resumed directly, without a driver:
//!
//! ```rust
//! use stepsort::prelude::*;
//!
//! let mut seq = Sequence::from(vec![3.0, 1.0, 2.0]);
//! let mut metrics = Metrics::default();
//! let mut engine = create_engine(Algorithm::Merge, &seq).unwrap();
//! while !engine.resume(&mut seq, &mut metrics).unwrap().is_done() {}
//! assert_eq!(seq.as_slice(), &[1.0, 2.0, 3.0]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stepsort-core` | Sequence, events, metrics, algorithms, renderer trait, errors |
//! | [`engines`] | `stepsort-engines` | The ten resumable engines and `create_engine` |
//! | [`driver`] | `stepsort-driver` | Configuration, runs, the tick loop, sequence generation |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`stepsort-core`).
pub use stepsort_core as types;

/// Resumable engines (`stepsort-engines`).
///
/// [`engines::create_engine`] builds an [`engines::Engine`] for any of the
/// ten algorithms.
pub use stepsort_engines as engines;

/// Tick-paced driver (`stepsort-driver`).
pub use stepsort_driver as driver;

/// Common imports for typical stepsort usage.
pub mod prelude {
    // Core types
    pub use stepsort_core::{
        Algorithm, EventKind, Frame, Metrics, NullRenderer, Renderer, RunState, Sequence,
        StepEvent, Theory,
    };

    // Errors
    pub use stepsort_core::{AlgorithmParseError, EngineError};
    pub use stepsort_driver::{ConfigError, DriverError};

    // Engines
    pub use stepsort_engines::{create_engine, Engine};

    // Driver
    pub use stepsort_driver::{Driver, DriverConfig, RunSummary, TickReport, ValueRange};
}
