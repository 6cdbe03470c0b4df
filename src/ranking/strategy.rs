//! Ordering strategies
//!
//! Defines the `SortStrategy` trait and the two interchangeable implementations.

use super::merge_sort::merge_sort_descending;
use std::fmt;

/// A strategy for ordering filtered integers from largest to smallest
pub trait SortStrategy {
    /// Return a new vector holding `values` in descending order
    fn sort_descending(&self, values: &[i64]) -> Vec<i64>;

    /// Name shown in logs and reports
    fn name(&self) -> &'static str;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyType {
    /// Hand-written merge sort (default)
    #[default]
    MergeSort,
    /// The standard library sort, reversed
    Builtin,
}

impl SortStrategy for StrategyType {
    fn sort_descending(&self, values: &[i64]) -> Vec<i64> {
        match self {
            Self::MergeSort => MergeSortStrategy.sort_descending(values),
            Self::Builtin => BuiltinSortStrategy.sort_descending(values),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Self::MergeSort => MergeSortStrategy.name(),
            Self::Builtin => BuiltinSortStrategy.name(),
        }
    }
}

impl StrategyType {
    /// Every strategy, in presentation order
    pub const ALL: [Self; 2] = [Self::MergeSort, Self::Builtin];

    /// Create strategy from name string
    ///
    /// Supported names (case-insensitive): "merge-sort", "manual", "builtin-sort", "built-in".
    /// Returns `None` for anything else.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "merge-sort" | "mergesort" | "manual" => Some(Self::MergeSort),
            "builtin-sort" | "builtin" | "built-in" => Some(Self::Builtin),
            _ => None,
        }
    }
}

impl fmt::Display for StrategyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Merge sort written from scratch
pub struct MergeSortStrategy;

impl SortStrategy for MergeSortStrategy {
    fn sort_descending(&self, values: &[i64]) -> Vec<i64> {
        merge_sort_descending(values)
    }

    fn name(&self) -> &'static str {
        "merge-sort"
    }
}

/// Delegates to `slice::sort_unstable_by` with the comparison reversed
pub struct BuiltinSortStrategy;

impl SortStrategy for BuiltinSortStrategy {
    fn sort_descending(&self, values: &[i64]) -> Vec<i64> {
        let mut sorted = values.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted
    }

    fn name(&self) -> &'static str {
        "builtin-sort"
    }
}
