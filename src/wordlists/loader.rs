//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use the embedded constant.

use crate::core::Word;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for dictionary loading
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list could not be read
    Io(io::Error),
    /// No line survived length filtering
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Could not read word list: {e}"),
            Self::Empty => write!(f, "Word list contains no usable words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Load words from a file, one word per line
///
/// Lines are uppercased and stripped of line endings and surrounding
/// whitespace; lines that are not a valid word of the fixed length are
/// skipped.
///
/// # Errors
///
/// Returns `DictionaryError::Io` if the file cannot be read, and
/// `DictionaryError::Empty` if no line is a valid word.
///
/// # Examples
/// ```no_run
/// use wordle_heuristic::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>, DictionaryError> {
    let content = fs::read_to_string(path)?;
    non_empty(words_from_lines(&content))
}

/// Parse words from newline-separated text, skipping unusable lines
#[must_use]
pub fn words_from_lines(content: &str) -> Vec<Word> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_heuristic::wordlists::loader::words_from_slice;
/// use wordle_heuristic::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}

/// Load the dictionary named on the command line
///
/// `"embedded"` selects the built-in list; anything else is a file path.
///
/// # Errors
///
/// Returns `DictionaryError` if the file cannot be read or yields no words.
pub fn load_dictionary(source: &str) -> Result<Vec<Word>, DictionaryError> {
    match source {
        "embedded" => non_empty(words_from_slice(super::WORDS)),
        path => load_from_file(path),
    }
}

fn non_empty(words: Vec<Word>) -> Result<Vec<Word>, DictionaryError> {
    if words.is_empty() {
        Err(DictionaryError::Empty)
    } else {
        Ok(words)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "slate", "irate"]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_lines_strips_line_endings_and_keeps_order() {
        let words = words_from_lines("crane\r\nabc\r\n\r\nSlate\nlonger\ncrane\n");
        let texts: Vec<&str> = words.iter().map(Word::text).collect();

        // Duplicates are kept as they appear
        assert_eq!(texts, ["CRANE", "SLATE", "CRANE"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = std::env::temp_dir().join(format!("wordle_heuristic_{}.txt", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "crane\nabcdef\ntrace").unwrap();
        drop(file);

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words.len(), 2);
        assert_eq!(words[1].text(), "TRACE");
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let result = load_from_file("/definitely/not/a/word/list.txt");
        assert!(matches!(result, Err(DictionaryError::Io(_))));
    }

    #[test]
    fn empty_dictionary_is_rejected() {
        let path = std::env::temp_dir().join(format!("wordle_heuristic_empty_{}.txt", std::process::id()));
        fs::write(&path, "abc\ntoolong\n").unwrap();

        let result = load_from_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(DictionaryError::Empty)));
    }

    #[test]
    fn load_embedded_dictionary() {
        let words = load_dictionary("embedded").unwrap();
        assert_eq!(words.len(), crate::wordlists::WORDS_COUNT);
    }
}
