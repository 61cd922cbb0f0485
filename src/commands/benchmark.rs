//! Benchmark command
//!
//! Runs an independent self-play session per target word, in parallel.

use crate::core::Word;
use crate::solver::{LetterFrequency, Outcome, SecretWord, Session, SolverConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_words: usize,
    pub solved: usize,
    pub exhausted: Vec<String>,
    pub round_limited: Vec<String>,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Rounds needed, for solved sessions only
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// Run one session per target word
///
/// Sessions share the dictionary and frequency table read-only and own
/// everything else, so they run on the rayon pool without coordination.
/// If `opening` is provided, every session plays it first.
#[allow(clippy::missing_panics_doc)] // Template string is static and valid
pub fn run_benchmark(
    dictionary: &[Word],
    frequency: &LetterFrequency,
    config: SolverConfig,
    targets: &[Word],
    opening: Option<&Word>,
    show_progress: bool,
) -> BenchmarkResult {
    let pb = if show_progress {
        ProgressBar::new(targets.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let outcomes: Vec<(&Word, Outcome)> = targets
        .par_iter()
        .map(|target| {
            let mut session = Session::new(dictionary, frequency, config);
            if let Some(word) = opening {
                session = session.with_opening(word);
            }
            let mut source = SecretWord(target.clone());
            let Ok(outcome) = session.run(&mut source, |_| {});
            pb.inc(1);
            (target, source.confirm(outcome))
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut exhausted = Vec::new();
    let mut round_limited = Vec::new();
    let mut total_rounds = 0;
    let mut min_rounds = usize::MAX;
    let mut max_rounds = 0;

    for (target, outcome) in &outcomes {
        match outcome {
            Outcome::Solved { rounds, .. } => {
                *distribution.entry(*rounds).or_insert(0) += 1;
                total_rounds += rounds;
                min_rounds = min_rounds.min(*rounds);
                max_rounds = max_rounds.max(*rounds);
            }
            Outcome::Exhausted { .. } => exhausted.push(target.text().to_string()),
            Outcome::RoundLimitReached { .. } => round_limited.push(target.text().to_string()),
        }
    }

    let solved: usize = distribution.values().sum();
    let total_words = targets.len();

    BenchmarkResult {
        total_words,
        solved,
        exhausted,
        round_limited,
        average_rounds: if solved > 0 {
            total_rounds as f64 / solved as f64
        } else {
            0.0
        },
        min_rounds: if solved > 0 { min_rounds } else { 0 },
        max_rounds,
        distribution,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::WORDS;
    use crate::wordlists::loader::words_from_slice;

    fn setup() -> (Vec<Word>, LetterFrequency) {
        let words = words_from_slice(WORDS);
        let frequency = LetterFrequency::from_words(&words);
        (words, frequency)
    }

    #[test]
    fn benchmark_runs() {
        let (words, frequency) = setup();
        let targets = &words[..20];
        let result = run_benchmark(&words, &frequency, SolverConfig::default(), targets, None, false);

        assert_eq!(result.total_words, 20);
        assert!(result.exhausted.is_empty());
        assert_eq!(result.solved + result.round_limited.len(), 20);
        assert!(result.max_rounds <= 6);
    }

    #[test]
    fn benchmark_distribution_sums_to_solved() {
        let (words, frequency) = setup();
        let result = run_benchmark(&words, &frequency, SolverConfig::default(), &words[..30], None, false);

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.solved);
        for &rounds in result.distribution.keys() {
            assert!((1..=6).contains(&rounds));
        }
        if result.solved > 0 {
            assert!(result.average_rounds >= result.min_rounds as f64);
            assert!(result.average_rounds <= result.max_rounds as f64);
        }
    }

    #[test]
    fn parallel_sessions_match_sequential_solves() {
        let (words, frequency) = setup();
        let targets = &words[..15];
        let config = SolverConfig::default();
        let result = run_benchmark(&words, &frequency, config, targets, None, false);

        let sequential_solved = targets
            .iter()
            .filter(|target| {
                crate::commands::solve::solve_word(&words, &frequency, config, target, None)
                    .outcome
                    .is_solved()
            })
            .count();
        assert_eq!(result.solved, sequential_solved);
    }

    #[test]
    fn benchmark_targets_outside_dictionary() {
        let (words, frequency) = setup();
        let targets = words_from_slice(&["qajaq", "kazoo"]);
        let result = run_benchmark(&words, &frequency, SolverConfig::default(), &targets, None, false);

        assert_eq!(result.solved, 0);
        assert_eq!(result.exhausted.len(), 2);
        assert_eq!(result.min_rounds, 0);
    }

    #[test]
    fn benchmark_does_not_count_wrong_lone_candidate() {
        let words = words_from_slice(&["abcde", "fghij"]);
        let frequency = LetterFrequency::from_words(&words);
        let targets = words_from_slice(&["fghik", "fghij"]);
        let result = run_benchmark(&words, &frequency, SolverConfig::default(), &targets, None, false);

        assert_eq!(result.solved, 1);
        assert_eq!(result.exhausted, vec!["FGHIK".to_string()]);
        assert!(result.round_limited.is_empty());
    }

    #[test]
    fn benchmark_empty_target_list() {
        let (words, frequency) = setup();
        let result = run_benchmark(&words, &frequency, SolverConfig::default(), &[], None, false);

        assert_eq!(result.total_words, 0);
        assert_eq!(result.solved, 0);
    }
}
