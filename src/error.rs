//! Error types shared across the crate

use std::io;
use thiserror::Error;

/// Invalid exam marks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GradeError {
    #[error("mark for the {question} question must be between 0 and 100, got {mark}")]
    MarkOutOfRange { question: &'static str, mark: i64 },

    #[error("incomplete marks provided: exactly 5 questions are needed, found {0}")]
    IncompleteMarks(usize),

    #[error("highest mark for a question can be 100, got {0}")]
    MarkTooHigh(i64),

    #[error("lowest mark for a question can be 0, got {0}")]
    MarkTooLow(i64),
}

/// Unusable command-line input
#[derive(Debug, Error)]
pub enum InputError {
    #[error("input is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown strategy '{0}': expected merge-sort or builtin-sort")]
    UnknownStrategy(String),

    #[error("expected exactly 5 marks, got {0}")]
    MarkCount(usize),

    #[error(transparent)]
    Grade(#[from] GradeError),
}

/// Failure while talking to the player
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed before an answer was given")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Puzzle settings no guess can satisfy, or a failed game
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("only {letters} letter(s) to draw from but {needed} must match to win")]
    TooFewLetters { letters: usize, needed: usize },

    #[error("guesses of {min}-{max} letters cannot hold {needed} distinct matches")]
    WordLength { min: usize, max: usize, needed: usize },

    #[error(transparent)]
    Prompt(#[from] PromptError),
}
