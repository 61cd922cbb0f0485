//! Accumulated letter constraints
//!
//! `ConstraintState` folds every (guess, feedback) pair of a session into
//! per-position and per-letter knowledge, so candidates can be checked without
//! replaying feedback computation.
//!
//! Letter exclusion is tracked as occurrence bounds rather than a single
//! "excluded" flag: a guess with two E's where one is correct and the other
//! absent proves the target has exactly one E, not zero.

use crate::core::{ALPHABET_LEN, Feedback, FeedbackVector, WORD_LEN, Word, letter_index};

/// What the session has learned about a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LetterStatus {
    /// Not yet seen in any guess
    #[default]
    Unused,
    /// Guessed, and every occurrence came back absent
    ProvenAbsent,
    /// In the target, position not yet confirmed
    MustAppearElsewhere,
    /// Confirmed at one or more positions
    ConfirmedPosition,
}

/// Knowledge accumulated across the rounds of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintState {
    known: [Option<u8>; WORD_LEN],
    status: [LetterStatus; ALPHABET_LEN],
    min_count: [u8; ALPHABET_LEN],
    max_count: [Option<u8>; ALPHABET_LEN],
    /// Bitmask per position of letters the target cannot have there
    excluded_at: [u32; WORD_LEN],
}

impl Default for ConstraintState {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            known: [None; WORD_LEN],
            status: [LetterStatus::Unused; ALPHABET_LEN],
            min_count: [0; ALPHABET_LEN],
            max_count: [None; ALPHABET_LEN],
            excluded_at: [0; WORD_LEN],
        }
    }

    /// Fold one round of feedback into the state
    ///
    /// Known positions are never cleared and letter statuses only move
    /// forward. Occurrence bounds tighten: the minimum becomes the number of
    /// correct or present occurrences of a letter in this guess, and when any
    /// occurrence came back absent the maximum is capped at that same number.
    pub fn update(&mut self, guess: &Word, feedback: &FeedbackVector) {
        let mut matched = [0u8; ALPHABET_LEN];
        let mut saw_absent = [false; ALPHABET_LEN];

        for (i, (&letter, &symbol)) in guess.letters().iter().zip(feedback.symbols()).enumerate() {
            let idx = letter_index(letter);
            match symbol {
                Feedback::Correct => {
                    self.known[i] = Some(letter);
                    self.status[idx] = LetterStatus::ConfirmedPosition;
                    matched[idx] += 1;
                }
                Feedback::Present => {
                    if self.status[idx] != LetterStatus::ConfirmedPosition {
                        self.status[idx] = LetterStatus::MustAppearElsewhere;
                    }
                    self.excluded_at[i] |= letter_bit(letter);
                    matched[idx] += 1;
                }
                Feedback::Absent => {
                    self.excluded_at[i] |= letter_bit(letter);
                    saw_absent[idx] = true;
                }
            }
        }

        for idx in 0..ALPHABET_LEN {
            self.min_count[idx] = self.min_count[idx].max(matched[idx]);
            if saw_absent[idx] {
                let cap = self.max_count[idx].map_or(matched[idx], |max| max.min(matched[idx]));
                self.max_count[idx] = Some(cap);
                if matched[idx] == 0 && self.status[idx] == LetterStatus::Unused {
                    self.status[idx] = LetterStatus::ProvenAbsent;
                }
            }
        }
    }

    /// Check whether `word` satisfies every constraint gathered so far
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::{FeedbackVector, Word};
    /// use wordle_heuristic::solver::ConstraintState;
    ///
    /// let mut state = ConstraintState::new();
    /// state.update(&Word::new("crane").unwrap(), &FeedbackVector::parse("GGG.G").unwrap());
    ///
    /// assert!(state.matches(&Word::new("craze").unwrap()));
    /// assert!(!state.matches(&Word::new("crank").unwrap()));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &Word) -> bool {
        let letters = word.letters();

        let positions_ok = letters.iter().enumerate().all(|(i, &letter)| {
            self.known[i].is_none_or(|known| known == letter)
                && self.excluded_at[i] & letter_bit(letter) == 0
        });
        if !positions_ok {
            return false;
        }

        let counts = word.letter_counts();
        (0..ALPHABET_LEN).all(|idx| {
            let count = counts[idx];
            count >= self.min_count[idx]
                && self.max_count[idx].is_none_or(|max| count <= max)
                && (self.status[idx] != LetterStatus::MustAppearElsewhere || count > 0)
        })
    }

    /// Keep the candidates that satisfy the accumulated constraints
    #[must_use]
    pub fn filter<'a>(&self, candidates: &[&'a Word]) -> Vec<&'a Word> {
        candidates
            .iter()
            .copied()
            .filter(|candidate| self.matches(candidate))
            .collect()
    }

    /// Confirmed letter per position
    #[must_use]
    pub const fn known(&self) -> &[Option<u8>; WORD_LEN] {
        &self.known
    }

    /// Status of an uppercase letter
    ///
    /// # Panics
    /// Panics if `letter` is not an uppercase ASCII letter.
    #[must_use]
    pub const fn status(&self, letter: u8) -> LetterStatus {
        self.status[letter_index(letter)]
    }

    /// Status of every letter, indexed by alphabet position
    #[must_use]
    pub const fn statuses(&self) -> &[LetterStatus; ALPHABET_LEN] {
        &self.status
    }

    /// Fewest occurrences of `letter` the target can have
    ///
    /// # Panics
    /// Panics if `letter` is not an uppercase ASCII letter.
    #[must_use]
    pub const fn min_count(&self, letter: u8) -> u8 {
        self.min_count[letter_index(letter)]
    }

    /// Most occurrences of `letter` the target can have, `None` if unbounded
    ///
    /// # Panics
    /// Panics if `letter` is not an uppercase ASCII letter.
    #[must_use]
    pub const fn max_count(&self, letter: u8) -> Option<u8> {
        self.max_count[letter_index(letter)]
    }

    /// Check whether `letter` is proven to be entirely missing from the target
    ///
    /// # Panics
    /// Panics if `letter` is not an uppercase ASCII letter.
    #[must_use]
    pub fn is_excluded(&self, letter: u8) -> bool {
        self.max_count(letter) == Some(0)
    }
}

#[inline]
const fn letter_bit(letter: u8) -> u32 {
    1 << letter_index(letter)
}
