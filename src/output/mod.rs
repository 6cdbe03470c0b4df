//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_demo, print_game_outcome, print_grade_report, print_rank_result};
pub use formatters::{TextColor, TextStyle, format_text};
