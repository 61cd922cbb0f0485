//! Per-letter feedback for a guess
//!
//! A `FeedbackVector` holds one `Feedback` symbol per guess position:
//! - `Correct`: the letter matches the target at that index
//! - `Present`: the letter occurs elsewhere in the target and that occurrence
//!   was not already claimed by another position
//! - `Absent`: the letter contributes no further matches

use super::word::{WORD_LEN, Word};
use std::fmt;
use std::ops::Index;

/// Classification of a single guess letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feedback {
    /// Letter is in the target at this exact position
    Correct,
    /// Letter is in the target, but at another unclaimed position
    Present,
    /// Letter does not contribute any further match
    Absent,
}

/// Feedback for every position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedbackVector([Feedback; WORD_LEN]);

/// Error type for operator-entered feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackError {
    InvalidLength(usize),
    InvalidSymbol(char),
}

impl fmt::Display for FeedbackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Feedback must have exactly {WORD_LEN} symbols, got {len}")
            }
            Self::InvalidSymbol(ch) => {
                write!(f, "Unrecognized feedback symbol '{ch}' (use G, Y or a non-letter)")
            }
        }
    }
}

impl std::error::Error for FeedbackError {}

impl FeedbackVector {
    /// Every position correct
    pub const SOLVED: Self = Self([Feedback::Correct; WORD_LEN]);

    #[must_use]
    pub const fn new(symbols: [Feedback; WORD_LEN]) -> Self {
        Self(symbols)
    }

    /// Compute the feedback a guess receives against `secret`
    ///
    /// Exact position matches are claimed first. Each remaining guess letter
    /// then claims the leftmost unclaimed secret occurrence of the same letter,
    /// so a secret letter is never counted by two guess positions.
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::{Feedback, FeedbackVector, Word};
    ///
    /// let secret = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// let feedback = FeedbackVector::compute(&secret, &guess);
    ///
    /// assert_eq!(feedback.to_string(), "..G.G");
    /// assert_eq!(feedback[2], Feedback::Correct);
    /// ```
    #[must_use]
    pub fn compute(secret: &Word, guess: &Word) -> Self {
        let secret = secret.letters();
        let guess = guess.letters();
        let mut result = [Feedback::Absent; WORD_LEN];
        let mut consumed = [false; WORD_LEN];

        // Allow: Index needed to compare guess[i] with secret[i] and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess[i] == secret[i] {
                result[i] = Feedback::Correct;
                consumed[i] = true;
            }
        }

        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if result[i] == Feedback::Correct {
                continue;
            }
            let claim = (0..WORD_LEN).find(|&j| !consumed[j] && secret[j] == guess[i]);
            if let Some(j) = claim {
                result[i] = Feedback::Present;
                consumed[j] = true;
            }
        }

        Self(result)
    }

    /// Parse operator feedback like `"GY.G."` or `"🟩🟨⬜🟩⬜"`
    ///
    /// Accepts:
    /// - `G`/`g`/🟩 for correct position
    /// - `Y`/`y`/🟨 for present elsewhere
    /// - any other non-letter symbol for absent, spaces included
    ///
    /// A trailing line ending is ignored.
    ///
    /// # Errors
    /// Returns `FeedbackError` if the symbol count is not `WORD_LEN` or a
    /// letter other than G/Y appears.
    pub fn parse(input: &str) -> Result<Self, FeedbackError> {
        let chars: Vec<char> = input.trim_end_matches(['\r', '\n']).chars().collect();

        if chars.len() != WORD_LEN {
            return Err(FeedbackError::InvalidLength(chars.len()));
        }

        let mut symbols = [Feedback::Absent; WORD_LEN];
        for (slot, ch) in symbols.iter_mut().zip(chars) {
            *slot = match ch {
                'G' | 'g' | '🟩' => Feedback::Correct,
                'Y' | 'y' | '🟨' => Feedback::Present,
                c if c.is_alphabetic() => return Err(FeedbackError::InvalidSymbol(c)),
                _ => Feedback::Absent,
            };
        }

        Ok(Self(symbols))
    }

    #[inline]
    #[must_use]
    pub const fn symbols(&self) -> &[Feedback; WORD_LEN] {
        &self.0
    }

    /// Check if every position is correct
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Count positions carrying `kind`
    #[must_use]
    pub fn count(&self, kind: Feedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }
}

impl Index<usize> for FeedbackVector {
    type Output = Feedback;

    fn index(&self, position: usize) -> &Feedback {
        &self.0[position]
    }
}

impl fmt::Display for FeedbackVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.0 {
            let ch = match symbol {
                Feedback::Correct => 'G',
                Feedback::Present => 'Y',
                Feedback::Absent => '.',
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl std::str::FromStr for FeedbackVector {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::Feedback::{Absent as A, Correct as C, Present as P};

    fn feedback(secret: &str, guess: &str) -> FeedbackVector {
        FeedbackVector::compute(&Word::new(secret).unwrap(), &Word::new(guess).unwrap())
    }

    #[test]
    fn all_absent() {
        assert_eq!(feedback("fghij", "abcde"), FeedbackVector::new([A; WORD_LEN]));
    }

    #[test]
    fn word_against_itself_is_solved() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert!(feedback(word, word).is_solved());
        }
    }

    #[test]
    fn repeated_guess_letters_claim_distinct_secret_letters() {
        // ERASE guessed against SPEED: both secret E's are claimed once each
        assert_eq!(feedback("speed", "erase"), FeedbackVector::new([P, A, A, P, P]));
        // SPEED guessed against ERASE
        assert_eq!(feedback("erase", "speed"), FeedbackVector::new([P, A, P, P, A]));
    }

    #[test]
    fn exact_match_claims_before_present() {
        // LLAMA against ALLOW: the second L is exact, the first L takes the
        // other secret L, and only one A can be claimed
        assert_eq!(feedback("allow", "llama"), FeedbackVector::new([P, C, P, A, A]));
        // ROBOT against FLOOR: the second O is exact, the first O takes the
        // remaining secret O
        assert_eq!(feedback("floor", "robot"), FeedbackVector::new([P, P, A, C, A]));
    }

    #[test]
    fn surplus_guess_letter_is_absent() {
        // Only one E in the secret and it is matched exactly
        assert_eq!(feedback("crane", "geese"), FeedbackVector::new([A, A, A, A, C]));
    }

    #[test]
    fn scenario_vector() {
        assert_eq!(feedback("craze", "crane"), FeedbackVector::new([C, C, C, A, C]));
    }

    #[test]
    fn parse_accepts_letters_and_emoji() {
        let p1 = FeedbackVector::parse("GY.G-").unwrap();
        let p2 = FeedbackVector::parse("🟩🟨⬜🟩⬜").unwrap();
        let p3 = FeedbackVector::parse("gy_g ").unwrap();
        assert_eq!(p1, p2);
        assert_eq!(p1, p3);
        assert_eq!(p1, FeedbackVector::new([C, P, A, C, A]));
    }

    #[test]
    fn spaces_are_absent_symbols() {
        assert_eq!(
            FeedbackVector::parse("GG   "),
            Ok(FeedbackVector::new([C, C, A, A, A]))
        );
        assert_eq!(
            FeedbackVector::parse("  Y .\r\n"),
            Ok(FeedbackVector::new([A, A, P, A, A]))
        );
        assert_eq!(FeedbackVector::parse("GG  "), Err(FeedbackError::InvalidLength(4)));
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(
            FeedbackVector::parse("GYGGYX"),
            Err(FeedbackError::InvalidLength(6))
        );
        assert_eq!(FeedbackVector::parse(""), Err(FeedbackError::InvalidLength(0)));
        assert_eq!(
            FeedbackVector::parse("GXGGY"),
            Err(FeedbackError::InvalidSymbol('X'))
        );
    }

    #[test]
    fn display_round_trips_through_parse() {
        let fb = feedback("allow", "llama");
        assert_eq!(fb.to_string(), "YGY..");
        assert_eq!(fb.to_string().parse::<FeedbackVector>(), Ok(fb));
    }

    #[test]
    fn count_symbols() {
        let fb = feedback("erase", "speed");
        assert_eq!(fb.count(C), 0);
        assert_eq!(fb.count(P), 3);
        assert_eq!(fb.count(A), 2);
    }
}
