//! Core types and traits for the stepsort step-event engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every other crate in the workspace: the
//! mutable [`Sequence`] under sort, the [`StepEvent`] stream, the
//! [`Metrics`] counters, algorithm names and theory records, the
//! [`Renderer`] boundary, and the engine error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod algorithm;
pub mod error;
pub mod event;
pub mod metrics;
pub mod render;
pub mod sequence;
pub mod theory;

pub use algorithm::Algorithm;
pub use error::{AlgorithmParseError, EngineError};
pub use event::{EventKind, Indices, StepEvent};
pub use metrics::Metrics;
pub use render::{Frame, NullRenderer, Renderer, RunState};
pub use sequence::Sequence;
pub use theory::Theory;
