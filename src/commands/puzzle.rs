//! Puzzle-word game command

use crate::error::PuzzleError;
use crate::interactive::Prompter;
use crate::puzzle::{GameOutcome, PuzzleConfig, PuzzleGame};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{BufRead, Write};

/// Play one game with letters drawn from `rng`
///
/// # Errors
///
/// Returns `PuzzleError` if `config` leaves no winning guess, or if input ends before a
/// win or the terminal fails.
pub fn play_puzzle<G, R, W>(
    rng: &mut G,
    config: PuzzleConfig,
    prompter: &mut Prompter<R, W>,
) -> Result<GameOutcome, PuzzleError>
where
    G: Rng + ?Sized,
    R: BufRead,
    W: Write,
{
    Ok(PuzzleGame::new(rng, config)?.run(prompter)?)
}

/// Play one game on the terminal
///
/// A `seed` makes the drawn letters reproducible.
///
/// # Errors
///
/// Returns `PuzzleError` if `config` leaves no winning guess, or if input ends before a
/// win or the terminal fails.
pub fn run_puzzle(config: PuzzleConfig, seed: Option<u64>) -> Result<GameOutcome, PuzzleError> {
    let mut prompter = Prompter::stdio();

    match seed {
        Some(seed) => play_puzzle(&mut StdRng::seed_from_u64(seed), config, &mut prompter),
        None => play_puzzle(&mut rand::rng(), config, &mut prompter),
    }
}
