//! Driver configuration, validation, and error types.
//!
//! [`DriverConfig`] is checked once by [`validate()`](DriverConfig::validate)
//! when a [`Driver`](crate::Driver) is built, and again by every setter.
//! Invalid values are rejected, never clamped.

use std::error::Error;
use std::fmt;

use stepsort_core::{Algorithm, AlgorithmParseError};

/// Largest integer magnitude a generated value may have. Beyond 2^53
/// consecutive integers are no longer representable as `f64`.
pub const MAX_INTEGER_MAGNITUDE: i64 = 1 << 53;

// ── ValueRange ─────────────────────────────────────────────────────

/// Distribution that fresh sequences are drawn from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueRange {
    /// Uniform integers in `low..=high`.
    ///
    /// Suitable for every algorithm, distribution sorts included.
    Integers {
        /// Smallest value, inclusive.
        low: i64,
        /// Largest value, inclusive.
        high: i64,
    },
    /// Uniform reals in `low..high`.
    ///
    /// Counting and radix sort only order these by their integer part.
    Continuous {
        /// Lower bound, inclusive.
        low: f64,
        /// Upper bound, exclusive.
        high: f64,
    },
}

impl Default for ValueRange {
    fn default() -> Self {
        Self::Integers { low: 1, high: 100 }
    }
}

impl ValueRange {
    /// Check the bounds are ordered and representable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = match *self {
            Self::Integers { low, high } => {
                low <= high
                    && (-MAX_INTEGER_MAGNITUDE..=MAX_INTEGER_MAGNITUDE).contains(&low)
                    && (-MAX_INTEGER_MAGNITUDE..=MAX_INTEGER_MAGNITUDE).contains(&high)
            }
            // The sampler needs a finite span, not just finite bounds.
            Self::Continuous { low, high } => low < high && (high - low).is_finite(),
        };
        if ok {
            Ok(())
        } else {
            let (low, high) = self.bounds();
            Err(ConfigError::InvalidValueRange { low, high })
        }
    }

    /// Bounds as `f64`, for diagnostics.
    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            Self::Integers { low, high } => (low as f64, high as f64),
            Self::Continuous { low, high } => (low, high),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected by [`DriverConfig::validate()`] and the driver setters.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `sequence_length` is zero.
    ZeroSequenceLength,
    /// `steps_per_tick` is zero.
    ZeroStepBudget,
    /// An algorithm name did not match any of the ten algorithms.
    UnknownAlgorithm(AlgorithmParseError),
    /// Value range bounds are unordered, non-finite, too large, or span
    /// more than `f64` can hold.
    InvalidValueRange {
        /// Configured lower bound.
        low: f64,
        /// Configured upper bound.
        high: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSequenceLength => write!(f, "sequence_length must be at least 1"),
            Self::ZeroStepBudget => write!(f, "steps_per_tick must be at least 1"),
            Self::UnknownAlgorithm(e) => write!(f, "algorithm: {e}"),
            Self::InvalidValueRange { low, high } => {
                write!(f, "invalid value range [{low}, {high}]")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnknownAlgorithm(e) => Some(e),
            _ => None,
        }
    }
}

impl From<AlgorithmParseError> for ConfigError {
    fn from(e: AlgorithmParseError) -> Self {
        Self::UnknownAlgorithm(e)
    }
}

// ── DriverConfig ───────────────────────────────────────────────────

/// Inputs for constructing a [`Driver`](crate::Driver).
#[derive(Clone, Debug, PartialEq)]
pub struct DriverConfig {
    /// Number of values in each freshly generated sequence. Default: 50.
    pub sequence_length: usize,
    /// Maximum engine resumptions per tick. Default: 1.
    pub steps_per_tick: usize,
    /// Algorithm used by the next [`start()`](crate::Driver::start).
    /// Default: bubble sort.
    pub algorithm: Algorithm,
    /// Seed for the sequence generator. Default: 0.
    pub seed: u64,
    /// Distribution of generated values. Default: integers `1..=100`.
    pub values: ValueRange,
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            sequence_length: 50,
            steps_per_tick: 1,
            algorithm: Algorithm::Bubble,
            seed: 0,
            values: ValueRange::default(),
        }
    }
}

impl DriverConfig {
    /// Check every field, returning the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_sequence_length(self.sequence_length)?;
        validate_steps_per_tick(self.steps_per_tick)?;
        self.values.validate()
    }

    /// Set the algorithm by display name or short identifier.
    pub fn with_algorithm_name(mut self, name: &str) -> Result<Self, ConfigError> {
        self.algorithm = name.parse()?;
        Ok(self)
    }
}

pub(crate) fn validate_sequence_length(n: usize) -> Result<(), ConfigError> {
    if n == 0 {
        Err(ConfigError::ZeroSequenceLength)
    } else {
        Ok(())
    }
}

pub(crate) fn validate_steps_per_tick(n: usize) -> Result<(), ConfigError> {
    if n == 0 {
        Err(ConfigError::ZeroStepBudget)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DriverConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.values, ValueRange::Integers { low: 1, high: 100 });
    }

    #[test]
    fn zero_length_rejected() {
        let config = DriverConfig {
            sequence_length: 0,
            ..DriverConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroSequenceLength));
    }

    #[test]
    fn zero_step_budget_rejected() {
        let config = DriverConfig {
            steps_per_tick: 0,
            ..DriverConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroStepBudget));
    }

    #[test]
    fn value_range_bounds_checked() {
        assert!(ValueRange::Integers { low: 5, high: 5 }.validate().is_ok());
        assert_eq!(
            ValueRange::Integers { low: 6, high: 5 }.validate(),
            Err(ConfigError::InvalidValueRange { low: 6.0, high: 5.0 })
        );
        assert!(ValueRange::Integers {
            low: 0,
            high: MAX_INTEGER_MAGNITUDE + 1
        }
        .validate()
        .is_err());
        assert!(ValueRange::Continuous { low: 1.0, high: 1.0 }
            .validate()
            .is_err());
        assert!(ValueRange::Continuous {
            low: 0.0,
            high: f64::INFINITY
        }
        .validate()
        .is_err());
        assert!(ValueRange::Continuous { low: -1.0, high: 1.0 }
            .validate()
            .is_ok());
        assert_eq!(
            ValueRange::Continuous {
                low: -1e308,
                high: 1e308
            }
            .validate(),
            Err(ConfigError::InvalidValueRange {
                low: -1e308,
                high: 1e308
            })
        );
        assert!(ValueRange::Continuous {
            low: f64::MAX / 2.0,
            high: f64::MAX
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn overflowing_span_rejected_by_driver_config() {
        let config = DriverConfig {
            values: ValueRange::Continuous {
                low: f64::MIN,
                high: f64::MAX,
            },
            ..DriverConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValueRange { .. })
        ));
    }

    #[test]
    fn algorithm_name_parsed_or_rejected() {
        let config = DriverConfig::default()
            .with_algorithm_name("Heap Sort")
            .unwrap();
        assert_eq!(config.algorithm, Algorithm::Heap);

        let err = DriverConfig::default()
            .with_algorithm_name("bogo")
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownAlgorithm(_)));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("bogo"));
    }
}
