//! Frequency-based guess ranking
//!
//! A word scores the dictionary frequency of each of its distinct letters,
//! plus a flat bonus for every distinct letter no guess has tried yet.
//! Favoring common letters and untried letters approximates picking the
//! guess that splits the remaining candidates best, without computing
//! entropy over every feedback pattern.

use super::constraints::LetterStatus;
use crate::core::{ALPHABET_LEN, Word, index_letter, letter_index};

/// Default bonus per distinct untried letter
pub const DEFAULT_NOVELTY_BONUS: u32 = 50;

/// Letter occurrence counts over the full dictionary
///
/// Built once per dictionary and shared read-only between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterFrequency([u32; ALPHABET_LEN]);

impl LetterFrequency {
    /// Count every letter occurrence across `dictionary`
    #[must_use]
    pub fn from_words(dictionary: &[Word]) -> Self {
        let mut counts = [0u32; ALPHABET_LEN];
        for word in dictionary {
            for &letter in word.letters() {
                counts[letter_index(letter)] += 1;
            }
        }
        Self(counts)
    }

    /// Occurrences of an uppercase letter
    ///
    /// # Panics
    /// Panics if `letter` is not an uppercase ASCII letter.
    #[inline]
    #[must_use]
    pub const fn get(&self, letter: u8) -> u32 {
        self.0[letter_index(letter)]
    }

    /// Letters ordered from most to least frequent, ties alphabetical
    #[must_use]
    pub fn ranked(&self) -> Vec<(u8, u32)> {
        let mut letters: Vec<(u8, u32)> = (0..ALPHABET_LEN)
            .map(|idx| (index_letter(idx), self.0[idx]))
            .collect();
        letters.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        letters
    }
}

/// Breakdown of a word's ranking score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    /// Sum of dictionary frequencies of the distinct letters
    pub frequency: u32,
    /// Number of distinct letters still `Unused`
    pub novel_letters: u32,
    /// `frequency` plus the bonus for every novel letter
    pub total: u32,
}

/// Scores words for a given frequency table, letter knowledge and bonus
#[derive(Debug, Clone, Copy)]
pub struct GuessRanker<'a> {
    frequency: &'a LetterFrequency,
    statuses: &'a [LetterStatus; ALPHABET_LEN],
    novelty_bonus: u32,
}

impl<'a> GuessRanker<'a> {
    #[must_use]
    pub const fn new(
        frequency: &'a LetterFrequency,
        statuses: &'a [LetterStatus; ALPHABET_LEN],
        novelty_bonus: u32,
    ) -> Self {
        Self {
            frequency,
            statuses,
            novelty_bonus,
        }
    }

    /// Score a word; repeated letters count once
    #[must_use]
    pub fn score(&self, word: &Word) -> Score {
        let mut frequency = 0;
        let mut novel_letters = 0;

        for letter in word.unique_letters() {
            frequency += self.frequency.get(letter);
            if self.statuses[letter_index(letter)] == LetterStatus::Unused {
                novel_letters += 1;
            }
        }

        Score {
            frequency,
            novel_letters,
            total: frequency + novel_letters * self.novelty_bonus,
        }
    }

    /// Pick the highest-scoring candidate
    ///
    /// Ties go to the earliest candidate, so the result depends only on the
    /// inputs. Returns `None` when `candidates` is empty.
    ///
    /// # Examples
    /// ```
    /// use wordle_heuristic::core::Word;
    /// use wordle_heuristic::solver::{ConstraintState, GuessRanker, LetterFrequency};
    /// use wordle_heuristic::wordlists::loader::words_from_slice;
    ///
    /// let words = words_from_slice(&["geese", "crane", "slate"]);
    /// let frequency = LetterFrequency::from_words(&words);
    /// let state = ConstraintState::new();
    /// let ranker = GuessRanker::new(&frequency, state.statuses(), 50);
    ///
    /// let candidates: Vec<&Word> = words.iter().collect();
    /// // GEESE repeats E, so its letters only count once
    /// assert_eq!(ranker.select(&candidates).unwrap().text(), "SLATE");
    /// ```
    #[must_use]
    pub fn select<'w>(&self, candidates: &[&'w Word]) -> Option<&'w Word> {
        candidates
            .iter()
            .map(|&word| (word, self.score(word).total))
            .fold(None, |best: Option<(&'w Word, u32)>, (word, score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((word, score)),
            })
            .map(|(word, _)| word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::FeedbackVector;
    use crate::solver::constraints::ConstraintState;
    use crate::wordlists::loader::words_from_slice;

    fn scenario() -> Vec<Word> {
        words_from_slice(&["crane", "slate", "trace", "grape", "craze"])
    }

    #[test]
    fn frequency_counts_every_occurrence() {
        let words = words_from_slice(&["speed", "erase"]);
        let frequency = LetterFrequency::from_words(&words);

        assert_eq!(frequency.get(b'E'), 4);
        assert_eq!(frequency.get(b'S'), 2);
        assert_eq!(frequency.get(b'Z'), 0);
        assert_eq!(frequency.ranked()[0], (b'E', 4));
    }

    #[test]
    #[should_panic(expected = "uppercase ASCII")]
    fn lowercase_frequency_lookup_panics() {
        let frequency = LetterFrequency::from_words(&scenario());
        let _ = frequency.get(b'e');
    }

    #[test]
    fn repeated_letters_count_once() {
        let words = words_from_slice(&["geese", "crane"]);
        let frequency = LetterFrequency::from_words(&words);
        let state = ConstraintState::new();
        let ranker = GuessRanker::new(&frequency, state.statuses(), 50);

        // G(1) + E(4) + S(1), three distinct letters
        let score = ranker.score(&words[0]);
        assert_eq!(score.frequency, 6);
        assert_eq!(score.novel_letters, 3);
        assert_eq!(score.total, 156);
    }

    #[test]
    fn scenario_scores() {
        let words = scenario();
        let frequency = LetterFrequency::from_words(&words);
        let state = ConstraintState::new();
        let ranker = GuessRanker::new(&frequency, state.statuses(), DEFAULT_NOVELTY_BONUS);

        let totals: Vec<u32> = words.iter().map(|w| ranker.score(w).total).collect();
        // CRANE 18, SLATE 14, TRACE 19, GRAPE 16, CRAZE 18, plus 5 x 50 each
        assert_eq!(totals, vec![268, 264, 269, 266, 268]);

        let candidates: Vec<&Word> = words.iter().collect();
        assert_eq!(ranker.select(&candidates).unwrap().text(), "TRACE");
    }

    #[test]
    fn novelty_bonus_prefers_untried_letters() {
        let words = scenario();
        let frequency = LetterFrequency::from_words(&words);
        let mut state = ConstraintState::new();
        let guess = Word::new("trace").unwrap();
        state.update(&guess, &FeedbackVector::parse(".GGYG").unwrap());

        let ranker = GuessRanker::new(&frequency, state.statuses(), DEFAULT_NOVELTY_BONUS);
        let crane = ranker.score(&words[0]);
        assert_eq!(crane.novel_letters, 1);
        assert_eq!(crane.total, 18 + 50);
    }

    #[test]
    fn ties_go_to_earliest_candidate() {
        let words = words_from_slice(&["crane", "nacre", "caner"]);
        let frequency = LetterFrequency::from_words(&words);
        let state = ConstraintState::new();
        let ranker = GuessRanker::new(&frequency, state.statuses(), 50);

        let forward: Vec<&Word> = words.iter().collect();
        let backward: Vec<&Word> = words.iter().rev().collect();
        assert_eq!(ranker.select(&forward).unwrap().text(), "CRANE");
        assert_eq!(ranker.select(&backward).unwrap().text(), "CANER");
    }

    #[test]
    fn selection_is_deterministic() {
        let words = scenario();
        let frequency = LetterFrequency::from_words(&words);
        let state = ConstraintState::new();
        let ranker = GuessRanker::new(&frequency, state.statuses(), 50);
        let candidates: Vec<&Word> = words.iter().collect();

        let first = ranker.select(&candidates);
        for _ in 0..10 {
            assert_eq!(ranker.select(&candidates), first);
        }
    }

    #[test]
    fn empty_candidates_select_nothing() {
        let frequency = LetterFrequency::from_words(&[]);
        let state = ConstraintState::new();
        let ranker = GuessRanker::new(&frequency, state.statuses(), 50);
        assert!(ranker.select(&[]).is_none());
    }
}
