//! Puzzle-word game
//!
//! The player is shown randomly drawn letters and must guess a short word that contains
//! enough of them, optionally in the order they were drawn.

mod game;
mod letters;
mod verdict;

pub use game::{GameOutcome, PuzzleGame};
pub use letters::{ALPHABET_SIZE, LetterSet};
pub use verdict::{PuzzleConfig, Verdict, evaluate_guess};
