//! Exam paper grading
//!
//! Five question marks, validated to 0..=100, are averaged (rounding up) and mapped to a
//! letter grade.

mod exam;
mod questions;

pub use exam::{Exam, GRADE_RANGES, Grade, grade_marks, paper_total};
pub use questions::{MAX_MARK, MIN_MARK, Mark, QUESTION_LABELS, Questions, mark_in_range};
