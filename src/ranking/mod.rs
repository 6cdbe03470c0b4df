//! Ranked extraction from heterogeneous sequences
//!
//! Filters a sequence down to its integers, orders them from largest to smallest with a
//! chosen strategy, and selects by rank.

mod engine;
pub mod filter;
pub mod merge_sort;
pub mod strategy;

pub use engine::{RankExtractor, RankReport, second_largest};
pub use filter::{contains_integer, filter_integers};
pub use merge_sort::merge_sort_descending;
pub use strategy::{BuiltinSortStrategy, MergeSortStrategy, SortStrategy, StrategyType};
