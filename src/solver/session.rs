//! Round loop for a single solving session
//!
//! A `Session` owns the live candidate set and constraint state for one
//! secret. The dictionary and letter frequencies are borrowed, so any number
//! of sessions can share them, including across threads.

use super::config::{FilterMode, SolverConfig};
use super::constraints::ConstraintState;
use super::oracle::filter_candidates;
use super::ranker::{GuessRanker, LetterFrequency};
use crate::core::{FeedbackVector, Word};
use std::convert::Infallible;
use std::fmt;

/// Supplies feedback for the session's guesses
///
/// Implemented by the self-play `SecretWord` and by interactive front ends
/// that ask an operator.
pub trait FeedbackSource {
    type Error;

    /// Feedback for `guess` in round `round` (1-based)
    ///
    /// # Errors
    /// Implementations return an error when no feedback can be obtained
    /// (for example the operator quit).
    fn feedback(&mut self, guess: &Word, round: usize) -> Result<FeedbackVector, Self::Error>;
}

/// Self-play feedback computed from a held secret
#[derive(Debug, Clone)]
pub struct SecretWord(pub Word);

impl FeedbackSource for SecretWord {
    type Error = Infallible;

    fn feedback(&mut self, guess: &Word, _round: usize) -> Result<FeedbackVector, Infallible> {
        Ok(FeedbackVector::compute(&self.0, guess))
    }
}

impl SecretWord {
    /// Check a finished outcome against the held secret
    ///
    /// A lone surviving candidate is reported `Solved` before it is played.
    /// When that candidate is not the secret, playing it would have emptied
    /// the candidate set, so the outcome becomes `Exhausted` in that round.
    #[must_use]
    pub fn confirm(&self, outcome: Outcome) -> Outcome {
        match outcome {
            Outcome::Solved { word, rounds } if word != self.0 => Outcome::Exhausted { rounds },
            other => other,
        }
    }
}

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Target identified; `rounds` counts the final guess
    Solved { word: Word, rounds: usize },
    /// No candidate survived the feedback; the feedback source disagrees
    /// with the feedback engine or the target is not in the dictionary
    Exhausted { rounds: usize },
    /// Attempt limit reached without solving
    RoundLimitReached { rounds: usize },
}

impl Outcome {
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        matches!(self, Self::Solved { .. })
    }

    /// Rounds the session used
    #[must_use]
    pub const fn rounds(&self) -> usize {
        match self {
            Self::Solved { rounds, .. }
            | Self::Exhausted { rounds }
            | Self::RoundLimitReached { rounds } => *rounds,
        }
    }
}

/// Where the round loop currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ranking,
    AwaitingFeedback,
    Finished,
}

/// What happened in one completed round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport<'a> {
    pub round: usize,
    pub guess: &'a Word,
    pub feedback: FeedbackVector,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Result of asking the session for its next move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<'a> {
    Guess(&'a Word),
    Finished(Outcome),
}

/// Error type for feedback submitted out of turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    NoPendingGuess,
    AlreadyFinished,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPendingGuess => write!(f, "No guess is waiting for feedback"),
            Self::AlreadyFinished => write!(f, "Session has already finished"),
        }
    }
}

impl std::error::Error for SessionError {}

/// One solving session over a shared dictionary
pub struct Session<'a> {
    frequency: &'a LetterFrequency,
    config: SolverConfig,
    candidates: Vec<&'a Word>,
    constraints: ConstraintState,
    round: usize,
    opening: Option<&'a Word>,
    pending: Option<&'a Word>,
    outcome: Option<Outcome>,
}

impl<'a> Session<'a> {
    /// Start a session with every dictionary word as a candidate
    ///
    /// `frequency` must be built from the same dictionary.
    #[must_use]
    pub fn new(dictionary: &'a [Word], frequency: &'a LetterFrequency, config: SolverConfig) -> Self {
        Self {
            frequency,
            config,
            candidates: dictionary.iter().collect(),
            constraints: ConstraintState::new(),
            round: 0,
            opening: None,
            pending: None,
            outcome: None,
        }
    }

    /// Play `word` in the first round instead of the ranker's choice
    #[must_use]
    pub const fn with_opening(mut self, word: &'a Word) -> Self {
        self.opening = Some(word);
        self
    }

    /// Rank the candidates and return the next guess, or the outcome once
    /// the session has ended
    ///
    /// Calling this again before `submit` returns the same guess.
    pub fn propose(&mut self) -> Step<'a> {
        if let Some(outcome) = &self.outcome {
            return Step::Finished(outcome.clone());
        }
        if let Some(guess) = self.pending {
            return Step::Guess(guess);
        }

        if let &[only] = self.candidates.as_slice() {
            return self.finish(Outcome::Solved {
                word: only.clone(),
                rounds: self.round + 1,
            });
        }

        let chosen = match (self.round, self.opening) {
            _ if self.candidates.is_empty() => None,
            (0, Some(opening)) => Some(opening),
            _ => GuessRanker::new(
                self.frequency,
                self.constraints.statuses(),
                self.config.novelty_bonus,
            )
            .select(&self.candidates),
        };

        match chosen {
            Some(guess) => {
                self.pending = Some(guess);
                Step::Guess(guess)
            }
            None => self.finish(Outcome::Exhausted { rounds: self.round }),
        }
    }

    /// Record feedback for the pending guess
    ///
    /// # Errors
    /// Returns `SessionError` if the session has finished or no guess is
    /// waiting for feedback. The session is left unchanged in that case.
    pub fn submit(&mut self, feedback: FeedbackVector) -> Result<RoundReport<'a>, SessionError> {
        if self.outcome.is_some() {
            return Err(SessionError::AlreadyFinished);
        }
        let guess = self.pending.take().ok_or(SessionError::NoPendingGuess)?;
        Ok(self.apply(guess, feedback))
    }

    /// Drive the session to completion
    ///
    /// `on_round` sees every completed round before the next guess is ranked.
    ///
    /// # Errors
    /// Propagates the first error from `source`.
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::Word;
    /// use wordle_heuristic::solver::{LetterFrequency, SecretWord, Session, SolverConfig};
    /// use wordle_heuristic::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["crane", "slate", "trace", "grape", "craze"]);
    /// let frequency = LetterFrequency::from_words(&words);
    /// let mut session = Session::new(&words, &frequency, SolverConfig::default());
    ///
    /// let mut secret = SecretWord(Word::new("craze").unwrap());
    /// let outcome = session.run(&mut secret, |_| {}).unwrap();
    /// assert!(outcome.is_solved());
    /// ```
    pub fn run<F, R>(&mut self, source: &mut F, mut on_round: R) -> Result<Outcome, F::Error>
    where
        F: FeedbackSource,
        R: FnMut(&RoundReport<'a>),
    {
        loop {
            match self.propose() {
                Step::Finished(outcome) => return Ok(outcome),
                Step::Guess(guess) => {
                    let feedback = source.feedback(guess, self.round + 1)?;
                    self.pending = None;
                    let report = self.apply(guess, feedback);
                    on_round(&report);
                }
            }
        }
    }

    fn apply(&mut self, guess: &'a Word, feedback: FeedbackVector) -> RoundReport<'a> {
        self.round += 1;
        let candidates_before = self.candidates.len();

        self.constraints.update(guess, &feedback);
        self.candidates = match self.config.filter {
            FilterMode::Oracle => filter_candidates(&self.candidates, guess, &feedback),
            FilterMode::Constraints => self.constraints.filter(&self.candidates),
            FilterMode::Both => {
                let narrowed = self.constraints.filter(&self.candidates);
                filter_candidates(&narrowed, guess, &feedback)
            }
        };

        if feedback.is_solved() {
            self.finish(Outcome::Solved {
                word: guess.clone(),
                rounds: self.round,
            });
        } else if self.candidates.is_empty() {
            self.finish(Outcome::Exhausted { rounds: self.round });
        } else if self.round >= self.config.max_attempts {
            self.finish(Outcome::RoundLimitReached { rounds: self.round });
        }

        RoundReport {
            round: self.round,
            guess,
            feedback,
            candidates_before,
            candidates_after: self.candidates.len(),
        }
    }

    fn finish(&mut self, outcome: Outcome) -> Step<'a> {
        self.outcome = Some(outcome.clone());
        Step::Finished(outcome)
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.outcome.is_some() {
            Phase::Finished
        } else if self.pending.is_some() {
            Phase::AwaitingFeedback
        } else {
            Phase::Ranking
        }
    }

    /// Candidates still consistent with every round so far
    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintState {
        &self.constraints
    }

    /// Completed rounds
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    #[must_use]
    pub const fn config(&self) -> &SolverConfig {
        &self.config
    }
}
