//! Command implementations

pub mod demo;
pub mod grade;
pub mod puzzle;
pub mod rank;

pub use demo::{DemoCase, run_demo};
pub use grade::{GradeConfig, GradeReport, collect_and_grade, grade_exam, run_grade};
pub use puzzle::{play_puzzle, run_puzzle};
pub use rank::{RankConfig, RankResult, parse_sequence, run_rank};
