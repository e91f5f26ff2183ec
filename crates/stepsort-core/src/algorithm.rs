//! The ten supported sorting algorithms and their names.

use std::fmt;
use std::str::FromStr;

use crate::error::AlgorithmParseError;

/// Selects which engine a run is built from.
///
/// The display name (`"Bubble Sort"`) is what a UI shows; the short
/// identifier (`"bubble"`) is convenient for configuration files and
/// tests. [`FromStr`] accepts either, ignoring ASCII case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// Adjacent-exchange passes with an early exit on a clean pass.
    Bubble,
    /// Shift larger predecessors right, then settle the held key.
    Insertion,
    /// Scan for the running minimum, one exchange per position.
    Selection,
    /// Bottom-up merge of doubling run widths.
    Merge,
    /// Lomuto partitioning over an explicit range stack.
    Quick,
    /// Build a max-heap, then extract the root repeatedly.
    Heap,
    /// Gapped insertion with halving gaps.
    Shell,
    /// Bidirectional bubble passes with shrinking bounds.
    Cocktail,
    /// Tally, prefix sum, stable placement, copy back.
    Counting,
    /// Least-significant-digit counting passes in base 10.
    Radix,
}

impl Algorithm {
    /// Every algorithm, in display order.
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Shell,
        Algorithm::Cocktail,
        Algorithm::Counting,
        Algorithm::Radix,
    ];

    /// Human-readable name, e.g. `"Cocktail Shaker Sort"`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Insertion => "Insertion Sort",
            Self::Selection => "Selection Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
            Self::Heap => "Heap Sort",
            Self::Shell => "Shell Sort",
            Self::Cocktail => "Cocktail Shaker Sort",
            Self::Counting => "Counting Sort",
            Self::Radix => "Radix Sort",
        }
    }

    /// Short lowercase identifier, e.g. `"cocktail"`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Selection => "selection",
            Self::Merge => "merge",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Shell => "shell",
            Self::Cocktail => "cocktail",
            Self::Counting => "counting",
            Self::Radix => "radix",
        }
    }

    /// Whether the algorithm buckets values instead of comparing them.
    ///
    /// Distribution sorts carry value-range preconditions checked when
    /// the engine is created.
    pub fn is_distribution(self) -> bool {
        matches!(self, Self::Counting | Self::Radix)
    }

    /// Display names of all algorithms, for validating UI input.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|a| a.name())
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|a| {
                a.name().eq_ignore_ascii_case(trimmed) || a.id().eq_ignore_ascii_case(trimmed)
            })
            .ok_or_else(|| AlgorithmParseError {
                name: s.to_string(),
            })
    }
}
