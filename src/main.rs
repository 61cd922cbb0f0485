//! Wordle Heuristic Solver - CLI
//!
//! Interactive and self-play front ends for the frequency-ranked solver.

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use wordle_heuristic::{
    commands::{analyze_word, random_secret, run_benchmark, run_simple, solve_word},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    solver::{
        DEFAULT_MAX_ATTEMPTS, DEFAULT_NOVELTY_BONUS, FilterMode, LetterFrequency, Session,
        SolverConfig,
    },
    wordlists::loader::load_dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_heuristic",
    about = "Wordle solver ranking guesses by letter frequency and untried letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Attempts allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Score bonus per letter no guess has tried yet
    #[arg(short, long, global = true, default_value_t = DEFAULT_NOVELTY_BONUS)]
    bonus: u32,

    /// Candidate filter: both (default), oracle, constraints
    #[arg(long, global = true, default_value = "both")]
    filter: String,

    /// Override first guess (must be in the word list)
    #[arg(short = 'f', long, global = true)]
    first_word: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: you enter the feedback for each suggestion (default)
    Simple,

    /// Solve a specific target word by self-play
    Solve {
        /// The target word to solve (random word from the list if omitted)
        word: Option<String>,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the opening score breakdown of a word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Self-play every word of the list in parallel
    Benchmark {
        /// Only test the first N words
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)
        .with_context(|| format!("loading word list '{}'", cli.wordlist))?;
    let frequency = LetterFrequency::from_words(&dictionary);
    let config = SolverConfig {
        max_attempts: cli.max_attempts,
        novelty_bonus: cli.bonus,
        filter: FilterMode::from_name(&cli.filter),
    };
    let opening = find_opening(cli.first_word.as_deref(), &dictionary)?;

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => {
            let mut session = Session::new(&dictionary, &frequency, config);
            if let Some(word) = opening {
                session = session.with_opening(word);
            }
            run_simple(session).map_err(|e| anyhow!(e))
        }
        Commands::Solve { word, verbose } => {
            let secret = match word {
                Some(text) => {
                    Word::new(text).map_err(|e| anyhow!("Invalid target word: {e}"))?
                }
                None => random_secret(&dictionary)
                    .cloned()
                    .ok_or_else(|| anyhow!("Word list is empty"))?,
            };
            let result = solve_word(&dictionary, &frequency, config, &secret, opening);
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary, &frequency, config.novelty_bonus)
                .map_err(|e| anyhow!(e))?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let targets = &dictionary[..count.unwrap_or(dictionary.len()).min(dictionary.len())];
            println!("Running benchmark on {} words...", targets.len());
            let result = run_benchmark(&dictionary, &frequency, config, targets, opening, true);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}

/// Resolve `--first-word` against the loaded word list
fn find_opening<'a>(first_word: Option<&str>, dictionary: &'a [Word]) -> Result<Option<&'a Word>> {
    let Some(text) = first_word else {
        return Ok(None);
    };
    let word = Word::new(text).map_err(|e| anyhow!("Invalid first word: {e}"))?;
    dictionary
        .iter()
        .find(|w| **w == word)
        .map(Some)
        .ok_or_else(|| anyhow!("First word '{word}' not in word list"))
}
