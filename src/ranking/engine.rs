//! Second-largest selection
//!
//! Runs the filter → sort → select pipeline with a pluggable ordering strategy.

use super::filter::{contains_integer, filter_integers};
use super::strategy::{SortStrategy, StrategyType};
use crate::core::Value;
use tracing::debug;

/// Everything the pipeline computed for one input, for verbose display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankReport {
    pub strategy: &'static str,
    pub filtered: Vec<i64>,
    pub sorted: Vec<i64>,
    pub second_largest: Option<i64>,
}

/// Extracts ranked integers from heterogeneous sequences
///
/// Coordinates filtering and selection around a given ordering strategy.
pub struct RankExtractor<S: SortStrategy> {
    strategy: S,
}

impl<S: SortStrategy> RankExtractor<S> {
    /// Create a new extractor with the given ordering strategy
    pub const fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// Second-largest integer of `input`, or `None` for insufficient data
    ///
    /// Anything that is not a sequence counts as insufficient data.
    pub fn second_largest(&self, input: &Value) -> Option<i64> {
        input
            .as_list()
            .and_then(|items| self.second_largest_of(items))
    }

    /// Second-largest integer of `items`, by position after a descending sort
    ///
    /// A duplicated maximum is returned as-is: `[9, 9, 3]` yields `9`.
    pub fn second_largest_of(&self, items: &[Value]) -> Option<i64> {
        self.nth_largest_of(items, 2)
    }

    /// Integer at 1-based `rank` of the descending order, or `None` if out of range
    ///
    /// Rank 1 is the maximum; rank 0 is never valid.
    pub fn nth_largest_of(&self, items: &[Value], rank: usize) -> Option<i64> {
        if rank == 0 || !contains_integer(items) {
            return None;
        }

        self.ranked(items).get(rank - 1).copied()
    }

    /// All integers of `items`, largest first
    pub fn ranked(&self, items: &[Value]) -> Vec<i64> {
        let filtered = filter_integers(items);
        debug!(
            total = items.len(),
            integers = filtered.len(),
            strategy = self.strategy.name(),
            "filtered sequence"
        );
        self.strategy.sort_descending(&filtered)
    }

    /// Run the full pipeline and keep every intermediate sequence
    pub fn report(&self, items: &[Value]) -> RankReport {
        let filtered = filter_integers(items);
        let sorted = self.strategy.sort_descending(&filtered);
        let second_largest = sorted.get(1).copied();

        RankReport {
            strategy: self.strategy.name(),
            filtered,
            sorted,
            second_largest,
        }
    }

    /// The ordering strategy in use
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }
}

/// Second-largest integer of `input` using the named strategy
///
/// # Examples
/// ```
/// use competition::core::Value;
/// use competition::ranking::{second_largest, StrategyType};
///
/// let input = Value::List(vec![Value::from("xd"), Value::Integer(12), Value::Integer(75)]);
/// assert_eq!(second_largest(&input, &StrategyType::MergeSort), Some(12));
/// assert_eq!(second_largest(&Value::Null, &StrategyType::Builtin), None);
/// ```
#[must_use]
pub fn second_largest(input: &Value, strategy: &StrategyType) -> Option<i64> {
    RankExtractor::new(*strategy).second_largest(input)
}
