//! Word representation
//!
//! A `Word` stores a fixed-length uppercase word as bytes so feedback and
//! constraint checks can index letters directly.

use std::fmt;

/// Number of letters in every word the solver handles
pub const WORD_LEN: usize = 5;

/// Size of the letter alphabet (`A`..=`Z`)
pub const ALPHABET_LEN: usize = 26;

/// A fixed-length uppercase word
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    letters: [u8; WORD_LEN],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_LEN} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly `WORD_LEN`
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    ///
    /// # Panics
    /// Will not panic - the `expect()` call is guaranteed safe by length validation.
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text: String = text.into();

        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let text = text.to_ascii_uppercase();

        if text.len() != WORD_LEN {
            return Err(WordError::InvalidLength(text.len()));
        }

        if !text.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(WordError::InvalidCharacters);
        }

        let mut letters = [0u8; WORD_LEN];
        letters.copy_from_slice(text.as_bytes());

        Ok(Self { text, letters })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word as an uppercase byte array
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[u8; WORD_LEN] {
        &self.letters
    }

    /// Get the letter at a specific position
    ///
    /// # Panics
    /// Panics if `position >= WORD_LEN`
    #[inline]
    #[must_use]
    pub const fn letter_at(&self, position: usize) -> u8 {
        self.letters[position]
    }

    /// Check if the word contains a specific letter
    #[inline]
    #[must_use]
    pub fn has_letter(&self, letter: u8) -> bool {
        self.letters.contains(&letter)
    }

    /// Occurrence count of each letter, indexed by `letter_index`
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_LEN] {
        let mut counts = [0u8; ALPHABET_LEN];
        for &letter in &self.letters {
            counts[letter_index(letter)] += 1;
        }
        counts
    }

    /// Letters of the word with repeats removed, in first-occurrence order
    pub fn unique_letters(&self) -> impl Iterator<Item = u8> + '_ {
        self.letters
            .iter()
            .enumerate()
            .filter(|&(i, letter)| !self.letters[..i].contains(letter))
            .map(|(_, &letter)| letter)
    }
}

/// Alphabet index (0-25) of an uppercase ASCII letter
///
/// # Panics
/// Panics if `letter` is not in `b'A'..=b'Z'`. Letters taken from a `Word`
/// always are.
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    assert!(letter.is_ascii_uppercase(), "letter must be uppercase ASCII");
    (letter - b'A') as usize
}

/// Uppercase ASCII letter for an alphabet index (0-25)
#[inline]
#[must_use]
pub const fn index_letter(index: usize) -> u8 {
    b'A' + index as u8
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
