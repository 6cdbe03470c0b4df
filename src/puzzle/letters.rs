//! Random letter sets for the puzzle-word game

use rand::Rng;
use rustc_hash::FxHashSet;
use std::fmt;

/// Number of distinct lowercase ASCII letters
pub const ALPHABET_SIZE: usize = 26;

/// Distinct lowercase letters, kept in the order they were drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterSet {
    letters: Vec<char>,
}

impl LetterSet {
    /// Draw `count` distinct letters, capped at the alphabet size
    pub fn random<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Self {
        let count = count.min(ALPHABET_SIZE);
        let mut seen = FxHashSet::default();
        let mut letters = Vec::with_capacity(count);

        while letters.len() < count {
            let letter = char::from(rng.random_range(b'a'..=b'z'));
            if seen.insert(letter) {
                letters.push(letter);
            }
        }

        Self { letters }
    }

    /// Build a set from explicit letters, lowercased, dropping repeats and non-letters
    ///
    /// # Examples
    /// ```
    /// use competition::puzzle::LetterSet;
    ///
    /// let set = LetterSet::from_letters("aBca1");
    /// assert_eq!(set.letters(), &['a', 'b', 'c']);
    /// ```
    #[must_use]
    pub fn from_letters(letters: &str) -> Self {
        let mut seen = FxHashSet::default();
        let letters = letters
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_lowercase())
            .filter(|c| seen.insert(*c))
            .collect();

        Self { letters }
    }

    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

impl fmt::Display for LetterSet {
    /// Letters joined with " - ", as shown to the player
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, letter) in self.letters.iter().enumerate() {
            if i > 0 {
                write!(f, " - ")?;
            }
            write!(f, "{letter}")?;
        }
        Ok(())
    }
}
