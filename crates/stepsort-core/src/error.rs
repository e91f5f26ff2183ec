//! Error types for algorithm selection and engine execution.
//!
//! Construction-time failures ([`EngineError::PreconditionViolation`])
//! surface before a run starts; the remaining [`EngineError`] variants
//! report misuse of an engine and abort the run that observed them.

use std::error::Error;
use std::fmt;

use crate::algorithm::Algorithm;

/// An algorithm name that matches none of the ten supported algorithms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmParseError {
    /// The name as supplied by the caller.
    pub name: String,
}

impl fmt::Display for AlgorithmParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized algorithm '{}'", self.name)
    }
}

impl Error for AlgorithmParseError {}

/// Errors from creating or resuming an engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineError {
    /// The sequence cannot be bucketed by a distribution sort: a value is
    /// not finite, or the value range would need an unreasonable number of
    /// buckets.
    PreconditionViolation {
        /// Engine that rejected the sequence.
        algorithm: Algorithm,
        /// Which constraint failed.
        reason: String,
    },
    /// `resume` was called after the engine already emitted `Done`.
    ResumedAfterDone {
        /// Engine that was resumed.
        algorithm: Algorithm,
    },
    /// The sequence handed to `resume` is not the length the engine was
    /// created for.
    SequenceLengthChanged {
        /// Length at engine creation.
        expected: usize,
        /// Length seen on resume.
        actual: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PreconditionViolation { algorithm, reason } => {
                write!(f, "{algorithm} precondition violated: {reason}")
            }
            Self::ResumedAfterDone { algorithm } => {
                write!(f, "{algorithm} engine resumed after Done")
            }
            Self::SequenceLengthChanged { expected, actual } => {
                write!(
                    f,
                    "sequence length changed from {expected} to {actual} during a run"
                )
            }
        }
    }
}

impl Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_algorithm() {
        let err = EngineError::ResumedAfterDone {
            algorithm: Algorithm::Quick,
        };
        assert_eq!(err.to_string(), "Quick Sort engine resumed after Done");

        let err = EngineError::PreconditionViolation {
            algorithm: Algorithm::Counting,
            reason: "value at index 3 is not finite".into(),
        };
        assert!(err.to_string().starts_with("Counting Sort precondition"));
    }

    #[test]
    fn length_change_reports_both_lengths() {
        let err = EngineError::SequenceLengthChanged {
            expected: 8,
            actual: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains('8') && msg.contains('7'));
    }
}
