//! The [`StepEvent`] vocabulary emitted by engines.
//!
//! One event is produced per engine resumption. Events name positions in
//! the sequence, never values: a renderer reads values from the sequence
//! itself after the event has been applied.

use smallvec::{smallvec, SmallVec};
use std::fmt;

/// Positions touched by a compare or swap event.
///
/// Most events name a pair of indices. Merge sort keys both its compare
/// and its write to the single destination slot, so it reports `One`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Indices {
    /// A single destination index.
    One(usize),
    /// Two indices, in the order the algorithm names them.
    Two(usize, usize),
}

impl Indices {
    /// The indices as an inline list.
    pub fn to_smallvec(self) -> SmallVec<[usize; 2]> {
        match self {
            Self::One(i) => smallvec![i],
            Self::Two(i, j) => smallvec![i, j],
        }
    }
}

impl fmt::Display for Indices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(i) => write!(f, "{i}"),
            Self::Two(i, j) => write!(f, "{i}, {j}"),
        }
    }
}

/// A single observable unit of algorithm progress.
///
/// `Done` is terminal: an engine emits it exactly once, as its last event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StepEvent {
    /// Values at these positions are being compared.
    Compare(Indices),
    /// Values at these positions were written (exchanged, shifted, or
    /// merged into place).
    Swap(Indices),
    /// The element that started this pass at `index` has settled.
    Insert(usize),
    /// The element at `index` was tallied into a frequency bucket.
    Count(usize),
    /// A value was written at, or read from, `index` by a distribution
    /// pass.
    Assign(usize),
    /// The sequence is sorted. No further events follow.
    Done,
}

/// Discriminant of a [`StepEvent`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// [`StepEvent::Compare`].
    Compare,
    /// [`StepEvent::Swap`].
    Swap,
    /// [`StepEvent::Insert`].
    Insert,
    /// [`StepEvent::Count`].
    Count,
    /// [`StepEvent::Assign`].
    Assign,
    /// [`StepEvent::Done`].
    Done,
}

impl StepEvent {
    /// `Compare(i, j)`.
    pub fn compare(i: usize, j: usize) -> Self {
        Self::Compare(Indices::Two(i, j))
    }

    /// `Compare(k)`, keyed to a single destination index.
    pub fn compare_at(k: usize) -> Self {
        Self::Compare(Indices::One(k))
    }

    /// `Swap(i, j)`.
    pub fn swap(i: usize, j: usize) -> Self {
        Self::Swap(Indices::Two(i, j))
    }

    /// `Swap(k)`, a positional write at a single index.
    pub fn write_at(k: usize) -> Self {
        Self::Swap(Indices::One(k))
    }

    /// The event's kind.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Compare(_) => EventKind::Compare,
            Self::Swap(_) => EventKind::Swap,
            Self::Insert(_) => EventKind::Insert,
            Self::Count(_) => EventKind::Count,
            Self::Assign(_) => EventKind::Assign,
            Self::Done => EventKind::Done,
        }
    }

    /// Positions a renderer should highlight for this event.
    ///
    /// Empty for `Done`.
    pub fn indices(&self) -> SmallVec<[usize; 2]> {
        match *self {
            Self::Compare(ix) | Self::Swap(ix) => ix.to_smallvec(),
            Self::Insert(i) | Self::Count(i) | Self::Assign(i) => smallvec![i],
            Self::Done => SmallVec::new(),
        }
    }

    /// Whether this is the terminal event.
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare(ix) => write!(f, "Compare({ix})"),
            Self::Swap(ix) => write!(f, "Swap({ix})"),
            Self::Insert(i) => write!(f, "Insert({i})"),
            Self::Count(i) => write!(f, "Count({i})"),
            Self::Assign(i) => write!(f, "Assign({i})"),
            Self::Done => f.write_str("Done"),
        }
    }
}
