//! Competition drills
//!
//! Three small utilities behind one library: second-largest extraction from heterogeneous
//! sequences, exam grading, and an interactive puzzle-word game.
//!
//! # Quick Start
//!
//! ```rust
//! use competition::core::Value;
//! use competition::ranking::{RankExtractor, MergeSortStrategy};
//!
//! let items = vec![Value::from("xd"), Value::Integer(12), Value::Null, Value::Integer(75)];
//! let extractor = RankExtractor::new(MergeSortStrategy);
//! assert_eq!(extractor.second_largest_of(&items), Some(12));
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Second-largest extraction
pub mod ranking;

// Exam grading
pub mod grading;

// Puzzle-word game
pub mod puzzle;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Console prompting
pub mod interactive;
