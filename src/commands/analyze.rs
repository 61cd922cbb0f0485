//! Word analysis command
//!
//! Breaks down the opening ranking score of a specific word.

use crate::core::Word;
use crate::solver::{ConstraintState, GuessRanker, LetterFrequency, Score};

/// Result of analyzing a word
pub struct AnalysisResult {
    pub word: String,
    pub score: Score,
    /// Dictionary frequency of each distinct letter, in word order
    pub letters: Vec<(char, u32)>,
    /// 1-based position among dictionary words by opening score
    pub rank: usize,
    pub total_words: usize,
    /// The dictionary's top-ranked opening guess
    pub best: Option<(String, Score)>,
    /// Five most frequent letters in the dictionary
    pub top_letters: Vec<(char, u32)>,
}

/// Score a word as an opening guess against the dictionary
///
/// # Errors
///
/// Returns an error if the word is invalid or not in the dictionary.
pub fn analyze_word(
    word: &str,
    dictionary: &[Word],
    frequency: &LetterFrequency,
    novelty_bonus: u32,
) -> Result<AnalysisResult, String> {
    let word_obj = Word::new(word).map_err(|e| format!("Invalid word: {e}"))?;

    if !dictionary.contains(&word_obj) {
        return Err(format!("Word '{}' not in word list", word_obj.text()));
    }

    let state = ConstraintState::new();
    let ranker = GuessRanker::new(frequency, state.statuses(), novelty_bonus);
    let score = ranker.score(&word_obj);

    let rank = 1 + dictionary
        .iter()
        .filter(|w| ranker.score(w).total > score.total)
        .count();

    let candidates: Vec<&Word> = dictionary.iter().collect();
    let best = ranker
        .select(&candidates)
        .map(|w| (w.text().to_string(), ranker.score(w)));

    Ok(AnalysisResult {
        word: word_obj.text().to_string(),
        score,
        letters: word_obj
            .unique_letters()
            .map(|letter| (char::from(letter), frequency.get(letter)))
            .collect(),
        rank,
        total_words: dictionary.len(),
        best,
        top_letters: frequency
            .ranked()
            .into_iter()
            .take(5)
            .map(|(letter, count)| (char::from(letter), count))
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn setup() -> (Vec<Word>, LetterFrequency) {
        let words = words_from_slice(&["crane", "slate", "trace", "grape", "craze"]);
        let frequency = LetterFrequency::from_words(&words);
        (words, frequency)
    }

    #[test]
    fn analyze_valid_word() {
        let (words, frequency) = setup();
        let result = analyze_word("crane", &words, &frequency, 50).unwrap();

        assert_eq!(result.word, "CRANE");
        assert_eq!(result.score.frequency, 18);
        assert_eq!(result.score.total, 268);
        assert_eq!(result.letters[0], ('C', 3));
        assert_eq!(result.rank, 2);
        assert_eq!(result.total_words, 5);
        assert_eq!(result.best.as_ref().map(|(w, _)| w.as_str()), Some("TRACE"));
        assert_eq!(result.top_letters[..2], [('A', 5), ('E', 5)]);
    }

    #[test]
    fn analyze_top_word_ranks_first() {
        let (words, frequency) = setup();
        let result = analyze_word("trace", &words, &frequency, 50).unwrap();
        assert_eq!(result.rank, 1);
    }

    #[test]
    fn analyze_unknown_word() {
        let (words, frequency) = setup();
        assert!(analyze_word("zzzzz", &words, &frequency, 50).is_err());
        assert!(analyze_word("cr4ne", &words, &frequency, 50).is_err());
    }
}
