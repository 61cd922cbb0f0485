//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_to_emoji, plural};
use crate::commands::{AnalysisResult, BenchmarkResult, SolveResult};
use crate::solver::{Outcome, RoundReport};
use colored::Colorize;

/// Print one completed round
pub fn print_round(report: &RoundReport<'_>) {
    println!(
        "  {} {}  candidates: {} → {}",
        report.guess.text().bright_white().bold(),
        feedback_to_emoji(report.feedback),
        report.candidates_before,
        report.candidates_after
    );
}

/// Print how a session ended
pub fn print_outcome(outcome: &Outcome) {
    println!();
    match outcome {
        Outcome::Solved { word, rounds } => println!(
            "{}",
            format!("✅ Solved: {word} in {rounds} guess{}!", plural(*rounds))
                .green()
                .bold()
        ),
        Outcome::Exhausted { rounds } => println!(
            "{}",
            format!("⚠️  No candidates left after {rounds} guess{}", plural(*rounds))
                .red()
                .bold()
        ),
        Outcome::RoundLimitReached { rounds } => println!(
            "{}",
            format!("❌ Failed to solve in {rounds} guess{}", plural(*rounds))
                .red()
                .bold()
        ),
    }
}

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            step.word,
            feedback_to_emoji(step.feedback)
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );

            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!(
                    "  Info gained: {:.3} bits ({reduction:.1}x reduction)",
                    reduction.log2()
                );
            }
        }
    }

    print_outcome(&result.outcome);
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SCORE ANALYSIS:".bright_cyan().bold(),
        result.word.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Letter frequencies:");
    for (letter, count) in &result.letters {
        println!("   {letter}: {count}");
    }
    println!(
        "\n   Frequency:   {}",
        result.score.frequency.to_string().bright_yellow()
    );
    println!("   New letters: {}", result.score.novel_letters);
    println!(
        "   Total score: {}",
        result.score.total.to_string().bright_yellow().bold()
    );
    println!(
        "   Rank:        {} of {}",
        result.rank, result.total_words
    );

    let top: Vec<String> = result
        .top_letters
        .iter()
        .map(|(letter, count)| format!("{letter}={count}"))
        .collect();
    println!("\n   Most common letters: {}", top.join(" "));

    if let Some((word, score)) = &result.best {
        println!("\n   Best opening: {} ({})", word.green(), score.total);
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Solved:           {}", result.solved.to_string().green());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_rounds).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        result.min_rounds.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_rounds.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", result.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    let max_count = result.distribution.values().copied().max().unwrap_or(0);
    let mut rounds: Vec<usize> = result.distribution.keys().copied().collect();
    rounds.sort_unstable();
    for guess_count in rounds {
        let count = result.distribution[&guess_count];
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {guess_count}: {} {count:4} ({pct:5.1}%)", bar.green());
    }

    if !result.round_limited.is_empty() {
        println!(
            "\n😰 {} {}",
            "Out of guesses:".yellow().bold(),
            result.round_limited.len()
        );
        for word in result.round_limited.iter().take(10) {
            println!("   {}", word.yellow());
        }
    }

    if !result.exhausted.is_empty() {
        println!(
            "\n⚠️  {} {}",
            "Candidates exhausted:".red().bold(),
            result.exhausted.len()
        );
        for word in result.exhausted.iter().take(10) {
            println!("   {}", word.red());
        }
    }
}
