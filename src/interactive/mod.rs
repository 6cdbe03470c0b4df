//! Interactive console input
//!
//! Prompting helpers shared by the grading and puzzle-word commands.

mod prompt;

pub use prompt::Prompter;
