//! Guess evaluation
//!
//! Pure rules deciding whether a guessed word wins against a letter set.

use super::letters::{ALPHABET_SIZE, LetterSet};
use crate::error::PuzzleError;
use rustc_hash::FxHashMap;

/// Puzzle-word game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// How many distinct letters are drawn
    pub letter_count: usize,
    /// Shortest accepted guess (after trimming)
    pub min_word_len: usize,
    /// Longest accepted guess (after trimming)
    pub max_word_len: usize,
    /// Matched letters needed to win
    pub min_matches: usize,
    /// Matched letters must appear in the word in the order they were drawn
    pub affirm_order: bool,
}

impl PuzzleConfig {
    #[must_use]
    pub const fn new(affirm_order: bool) -> Self {
        Self {
            letter_count: 5,
            min_word_len: 1,
            max_word_len: 6,
            min_matches: 2,
            affirm_order,
        }
    }

    /// Distinct letters a winning guess must contain
    #[must_use]
    pub const fn needed_matches(&self) -> usize {
        if self.min_matches == 0 {
            1
        } else {
            self.min_matches
        }
    }

    /// Check that some guess can win with `letter_count` drawn letters
    ///
    /// # Errors
    /// Returns `PuzzleError::TooFewLetters` if fewer letters can be drawn than must match,
    /// or `PuzzleError::WordLength` if no accepted word length can hold the matches.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        self.check_winnable(self.letter_count.min(ALPHABET_SIZE))
    }

    /// Check that some guess can win against `letters` drawn letters
    ///
    /// # Errors
    /// Same as [`PuzzleConfig::validate`].
    pub fn check_winnable(&self, letters: usize) -> Result<(), PuzzleError> {
        let needed = self.needed_matches();
        if self.min_word_len > self.max_word_len || self.max_word_len < needed {
            return Err(PuzzleError::WordLength {
                min: self.min_word_len,
                max: self.max_word_len,
                needed,
            });
        }
        if letters < needed {
            return Err(PuzzleError::TooFewLetters { letters, needed });
        }
        Ok(())
    }
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Outcome of evaluating one guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Trimmed guess length is outside the accepted range
    InvalidLength(usize),
    /// No drawn letter occurs in the guess
    NoMatches,
    /// Some letters occur, but fewer than needed
    TooFewMatches(Vec<char>),
    /// Enough letters occur, but not in drawn order
    OutOfOrder(Vec<char>),
    /// Enough letters occur (in order, when required)
    Win(Vec<char>),
}

impl Verdict {
    #[must_use]
    pub const fn is_win(&self) -> bool {
        matches!(self, Self::Win(_))
    }
}

/// Evaluate `answer` against the drawn `letters`
///
/// Matching ignores case. Matched letters are reported in drawn order.
///
/// # Examples
/// ```
/// use competition::puzzle::{LetterSet, PuzzleConfig, Verdict, evaluate_guess};
///
/// let letters = LetterSet::from_letters("abcde");
/// let ordered = PuzzleConfig::new(true);
///
/// assert_eq!(evaluate_guess(&letters, "game", &ordered), Verdict::Win(vec!['a', 'e']));
/// assert_eq!(
///     evaluate_guess(&letters, "each", &ordered),
///     Verdict::OutOfOrder(vec!['a', 'c', 'e'])
/// );
/// ```
#[must_use]
pub fn evaluate_guess(letters: &LetterSet, answer: &str, config: &PuzzleConfig) -> Verdict {
    let answer = answer.trim().to_lowercase();
    let length = answer.chars().count();
    if length < config.min_word_len || length > config.max_word_len {
        return Verdict::InvalidLength(length);
    }

    // First occurrence of every character in the answer
    let mut first_seen: FxHashMap<char, usize> = FxHashMap::default();
    for (index, c) in answer.chars().enumerate() {
        first_seen.entry(c).or_insert(index);
    }

    let matched: Vec<(char, usize)> = letters
        .letters()
        .iter()
        .filter_map(|&letter| first_seen.get(&letter).map(|&index| (letter, index)))
        .collect();
    let matched_letters: Vec<char> = matched.iter().map(|&(letter, _)| letter).collect();

    if matched.is_empty() {
        Verdict::NoMatches
    } else if matched.len() < config.min_matches {
        Verdict::TooFewMatches(matched_letters)
    } else if config.affirm_order && matched.windows(2).any(|pair| pair[0].1 > pair[1].1) {
        Verdict::OutOfOrder(matched_letters)
    } else {
        Verdict::Win(matched_letters)
    }
}
