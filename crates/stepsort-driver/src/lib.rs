//! Tick-paced driver for stepsort engines.
//!
//! The driver owns one [`Run`] at a time: a [`Sequence`](stepsort_core::Sequence),
//! the engine sorting it, and the run's [`Metrics`](stepsort_core::Metrics).
//! Callers configure it with a [`DriverConfig`], call
//! [`Driver::start`], then call [`Driver::tick`] at whatever rate suits
//! their display. Every tick resumes the engine up to `steps_per_tick`
//! times and hands one [`Frame`](stepsort_core::Frame) to a
//! [`Renderer`](stepsort_core::Renderer).
//!
//! Sequences are drawn from a seeded `ChaCha8Rng`, so a seed fully
//! determines every sequence a driver will produce.
//!
//! The driver reports through the [`log`] facade: run start, finish,
//! abort, cancellation, reset, and rejected starts. It never installs a
//! logger.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod driver;
pub mod generate;
pub mod run;

pub use config::{ConfigError, DriverConfig, ValueRange};
pub use driver::{Driver, DriverError, RunSummary, TickReport};
pub use generate::random_sequence;
pub use run::Run;
