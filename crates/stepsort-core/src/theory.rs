//! Static theory records shown alongside each algorithm.

use crate::algorithm::Algorithm;

/// Short description and complexity summary of one algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theory {
    /// One-sentence explanation.
    pub description: &'static str,
    /// Time complexity, in big-O notation.
    pub time_complexity: &'static str,
    /// Auxiliary space complexity, in big-O notation.
    pub space_complexity: &'static str,
}

impl Algorithm {
    /// Theory record for this algorithm.
    pub fn theory(self) -> Theory {
        match self {
            Self::Bubble => Theory {
                description: "Repeatedly steps through the list, comparing adjacent elements \
                              and swapping them if they are in the wrong order.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            Self::Insertion => Theory {
                description: "Builds the sorted array one element at a time by inserting \
                              elements in their correct position.",
                time_complexity: "O(n²) worst, O(n) best",
                space_complexity: "O(1)",
            },
            Self::Selection => Theory {
                description: "Selects the minimum element from the unsorted portion and swaps \
                              it with the first unsorted element.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            Self::Merge => Theory {
                description: "Divides the list into halves, recursively sorts them, and then \
                              merges the sorted halves.",
                time_complexity: "O(n log n)",
                space_complexity: "O(n)",
            },
            Self::Quick => Theory {
                description: "Partitions the list around a pivot and recursively sorts the \
                              partitions.",
                time_complexity: "O(n log n) average, O(n²) worst",
                space_complexity: "O(log n)",
            },
            Self::Heap => Theory {
                description: "Builds a heap and repeatedly extracts the maximum element to \
                              sort the list.",
                time_complexity: "O(n log n)",
                space_complexity: "O(1)",
            },
            Self::Shell => Theory {
                description: "A generalization of insertion sort that allows swapping \
                              elements far apart.",
                time_complexity: "O(n^(3/2)) average",
                space_complexity: "O(1)",
            },
            Self::Cocktail => Theory {
                description: "A bidirectional bubble sort that sorts in both directions on \
                              each pass.",
                time_complexity: "O(n²)",
                space_complexity: "O(1)",
            },
            Self::Counting => Theory {
                description: "Counts occurrences of each value and uses arithmetic to \
                              determine positions (non-comparison based).",
                time_complexity: "O(n + k)",
                space_complexity: "O(k)",
            },
            Self::Radix => Theory {
                description: "Sorts numbers digit by digit using a stable sort as a \
                              subroutine.",
                time_complexity: "O(nk)",
                space_complexity: "O(n + k)",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_algorithm_has_theory() {
        for algo in Algorithm::ALL {
            let t = algo.theory();
            assert!(!t.description.is_empty(), "{algo} has no description");
            assert!(t.time_complexity.starts_with("O("));
            assert!(t.space_complexity.starts_with("O("));
        }
    }

    #[test]
    fn merge_sort_needs_linear_space() {
        assert_eq!(Algorithm::Merge.theory().space_complexity, "O(n)");
        assert_eq!(Algorithm::Counting.theory().time_complexity, "O(n + k)");
    }
}
