//! Word solving command
//!
//! Solves a held secret by self-play and returns the solution path.

use crate::core::{FeedbackVector, Word};
use crate::solver::{LetterFrequency, Outcome, SecretWord, Session, SolverConfig};
use rand::prelude::IndexedRandom;

/// Result of solving a word
pub struct SolveResult {
    pub target: String,
    pub guesses: Vec<GuessStep>,
    pub outcome: Outcome,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub word: String,
    pub feedback: FeedbackVector,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Pick a random secret from the dictionary
#[must_use]
pub fn random_secret(dictionary: &[Word]) -> Option<&Word> {
    dictionary.choose(&mut rand::rng())
}

/// Solve `secret` with a fresh session over `dictionary`
///
/// The secret does not have to be in the dictionary; when it is not, the
/// session ends `Exhausted` or `RoundLimitReached`, never `Solved`.
#[must_use]
pub fn solve_word(
    dictionary: &[Word],
    frequency: &LetterFrequency,
    config: SolverConfig,
    secret: &Word,
    opening: Option<&Word>,
) -> SolveResult {
    let mut session = Session::new(dictionary, frequency, config);
    if let Some(word) = opening {
        session = session.with_opening(word);
    }

    let mut guesses = Vec::new();
    let mut source = SecretWord(secret.clone());
    let Ok(outcome) = session.run(&mut source, |report| {
        guesses.push(GuessStep {
            word: report.guess.text().to_string(),
            feedback: report.feedback,
            candidates_before: report.candidates_before,
            candidates_after: report.candidates_after,
        });
    });

    SolveResult {
        target: secret.text().to_string(),
        guesses,
        outcome: source.confirm(outcome),
    }
}
