//! Compatibility checks and candidate filtering
//!
//! Both functions replay `FeedbackVector::compute` with the candidate standing
//! in for the secret, so filtering always agrees with the feedback the game
//! itself produces.

use crate::core::{FeedbackVector, Word};

/// Check whether `candidate` could have been the secret behind `observed`
///
/// # Examples
/// ```
/// use wordle_heuristic::core::{FeedbackVector, Word};
/// use wordle_heuristic::solver::is_compatible;
///
/// let guess = Word::new("crane").unwrap();
/// let observed = FeedbackVector::parse("GGG.G").unwrap();
///
/// assert!(is_compatible(&Word::new("craze").unwrap(), &guess, &observed));
/// assert!(!is_compatible(&Word::new("crank").unwrap(), &guess, &observed));
/// ```
#[inline]
#[must_use]
pub fn is_compatible(candidate: &Word, guess: &Word, observed: &FeedbackVector) -> bool {
    FeedbackVector::compute(candidate, guess) == *observed
}

/// Keep the candidates compatible with the latest (guess, feedback) pair
///
/// Relative order of the surviving candidates is preserved.
#[must_use]
pub fn filter_candidates<'a>(
    candidates: &[&'a Word],
    guess: &Word,
    observed: &FeedbackVector,
) -> Vec<&'a Word> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| is_compatible(candidate, guess, observed))
        .collect()
}
