//! Interactive puzzle-word game loop

use super::letters::LetterSet;
use super::verdict::{PuzzleConfig, Verdict, evaluate_guess};
use crate::error::{PromptError, PuzzleError};
use crate::interactive::Prompter;
use crate::output::formatters::{TextColor, TextStyle, error_text, format_text};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Result of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    /// Guesses made, including rejected ones
    pub attempts: usize,
    pub word: String,
    pub matched: Vec<char>,
}

/// One round of the puzzle-word game
///
/// The player sees a set of random letters and must guess a short word containing enough
/// of them. Words are not checked against a dictionary.
pub struct PuzzleGame {
    letters: LetterSet,
    config: PuzzleConfig,
}

impl PuzzleGame {
    /// Start a game with freshly drawn letters
    ///
    /// # Errors
    /// Returns `PuzzleError` if `config` leaves no winning guess.
    pub fn new<R: Rng + ?Sized>(rng: &mut R, config: PuzzleConfig) -> Result<Self, PuzzleError> {
        config.validate()?;
        let letters = LetterSet::random(rng, config.letter_count);
        debug!(letters = %letters, affirm_order = config.affirm_order, "letters drawn");
        Ok(Self { letters, config })
    }

    /// Start a game with a fixed letter set
    ///
    /// # Errors
    /// Returns `PuzzleError` if no guess can win against `letters` under `config`.
    pub fn with_letters(letters: LetterSet, config: PuzzleConfig) -> Result<Self, PuzzleError> {
        config.check_winnable(letters.len())?;
        Ok(Self { letters, config })
    }

    #[must_use]
    pub const fn letters(&self) -> &LetterSet {
        &self.letters
    }

    #[must_use]
    pub const fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Play until the player wins
    ///
    /// # Errors
    /// Returns `PromptError::Closed` if input ends before a winning guess, or
    /// `PromptError::Io` on terminal failure.
    pub fn run<R: BufRead, W: Write>(
        &self,
        prompter: &mut Prompter<R, W>,
    ) -> Result<GameOutcome, PromptError> {
        prompter.say(&format!(
            "The following letters are provided: {}\n",
            format_text(
                &self.letters.to_string(),
                Some(TextColor::Yellow),
                TextStyle::BOLD
            )
        ))?;

        let mut answer = prompter.ask(&format!(
            "Try to guess a word ({}-{} letters) which contains the aforementioned letters: ",
            self.config.min_word_len, self.config.max_word_len
        ))?;
        let mut attempts = 1;

        loop {
            let verdict = evaluate_guess(&self.letters, &answer, &self.config);
            debug!(attempt = attempts, ?verdict, "guess evaluated");

            if let Verdict::Win(matched) = verdict {
                prompter.say(&win_message(answer.trim(), &matched))?;
                info!(attempts, word = answer.trim(), "puzzle solved");

                return Ok(GameOutcome {
                    attempts,
                    word: answer.trim().to_string(),
                    matched,
                });
            }

            prompter.say(&self.retry_message(answer.trim(), &verdict))?;
            answer = prompter.ask("Please try to guess again: ")?;
            attempts += 1;
        }
    }

    fn retry_message(&self, answer: &str, verdict: &Verdict) -> String {
        match verdict {
            Verdict::InvalidLength(_) => error_text(&format!(
                "ERR! Invalid answer! Word can only contain {}-{} letters. Try again.\n",
                self.config.min_word_len, self.config.max_word_len
            )),
            Verdict::NoMatches => format_text(
                &format!("'{answer}' contains no matching letters!"),
                Some(TextColor::Red),
                TextStyle::BOLD_UNDERLINE,
            ),
            Verdict::TooFewMatches(matched) => error_text(&format!(
                "'{answer}' does not contain a sufficient amount of letters (ONLY {})!\n",
                matched.len()
            )),
            Verdict::OutOfOrder(_) => {
                let example =
                    |text: &str| format_text(text, Some(TextColor::Yellow), TextStyle::PLAIN);
                format!(
                    "{}\nExample letters: {}\nValid outputs: {}\nInvalid outputs: {}\n",
                    format_text(
                        &format!("'{answer}' does not respect the letter order!"),
                        Some(TextColor::Red),
                        TextStyle::BOLD_UNDERLINE
                    ),
                    example("a - b - c - d - e"),
                    example("[ game, fame, abide ]"),
                    example("[ great, feat ]"),
                )
            }
            Verdict::Win(_) => String::new(),
        }
    }
}

fn win_message(answer: &str, matched: &[char]) -> String {
    format!(
        "'{answer}' contains a sufficient amount of letters: {}!\n{}",
        join_letters(matched),
        format_text(
            "Congratulations, you won!",
            Some(TextColor::Green),
            TextStyle::BOLD_UNDERLINE
        )
    )
}

fn join_letters(letters: &[char]) -> String {
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    fn play(game: &PuzzleGame, input: &str) -> (Result<GameOutcome, PromptError>, String) {
        let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
        let outcome = game.run(&mut prompter);
        let output = String::from_utf8(prompter.into_output()).unwrap();
        (outcome, output)
    }

    fn abcde(affirm_order: bool) -> PuzzleGame {
        PuzzleGame::with_letters(LetterSet::from_letters("abcde"), PuzzleConfig::new(affirm_order))
            .unwrap()
    }

    #[test]
    fn first_guess_wins() {
        let (outcome, output) = play(&abcde(false), "bead\n");
        let outcome = outcome.unwrap();

        assert_eq!(outcome.attempts, 1);
        assert_eq!(outcome.word, "bead");
        assert_eq!(outcome.matched, vec!['a', 'b', 'd', 'e']);
        assert!(output.contains("a - b - c - d - e"));
        assert!(output.contains("contains a sufficient amount of letters: a, b, d, e!"));
        assert!(output.contains("Congratulations, you won!"));
    }

    #[test]
    fn retries_until_win() {
        let (outcome, output) = play(&abcde(false), "toolongword\nxyz\nbunny\ngame\n");
        let outcome = outcome.unwrap();

        assert_eq!(outcome.attempts, 4);
        assert_eq!(outcome.word, "game");
        assert!(output.contains("Word can only contain 1-6 letters"));
        assert!(output.contains("'xyz' contains no matching letters!"));
        assert!(output.contains("(ONLY 1)"));
        assert!(output.contains("Please try to guess again: "));
    }

    #[test]
    fn order_is_enforced_on_every_attempt() {
        let (outcome, output) = play(&abcde(true), "great\nfeat\nfame\n");
        let outcome = outcome.unwrap();

        assert_eq!(outcome.attempts, 3);
        assert_eq!(outcome.word, "fame");
        assert!(output.contains("'great' does not respect the letter order!"));
        assert!(output.contains("'feat' does not respect the letter order!"));
    }

    #[test]
    fn closed_input_ends_the_game() {
        let (outcome, _) = play(&abcde(false), "xyz\n");
        assert!(matches!(outcome, Err(PromptError::Closed)));
    }

    #[test]
    fn random_game_uses_configured_letter_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let config = PuzzleConfig {
            letter_count: 8,
            ..PuzzleConfig::default()
        };
        let game = PuzzleGame::new(&mut rng, config).unwrap();
        assert_eq!(game.letters().len(), 8);
        assert_eq!(game.config().letter_count, 8);
    }

    #[test]
    fn single_letter_game_is_refused() {
        let config = PuzzleConfig {
            letter_count: 1,
            ..PuzzleConfig::default()
        };
        assert!(matches!(
            PuzzleGame::with_letters(LetterSet::from_letters("a"), config),
            Err(PuzzleError::TooFewLetters { letters: 1, needed: 2 })
        ));
        assert!(matches!(
            PuzzleGame::new(&mut StdRng::seed_from_u64(1), config),
            Err(PuzzleError::TooFewLetters { letters: 1, needed: 2 })
        ));
    }

    #[test]
    fn empty_letter_set_is_refused() {
        let config = PuzzleConfig {
            min_matches: 0,
            ..PuzzleConfig::default()
        };
        assert!(matches!(
            PuzzleGame::with_letters(LetterSet::from_letters(""), config),
            Err(PuzzleError::TooFewLetters { letters: 0, needed: 1 })
        ));
    }
}
