//! Simple interactive CLI mode
//!
//! The solver suggests a guess each round and the operator types back the
//! feedback the game showed.

use crate::core::{FeedbackVector, Word};
use crate::output::display::{print_outcome, print_round};
use crate::solver::{FeedbackSource, Outcome, Session};
use std::fmt;
use std::io::{self, BufRead, Write};

/// Why the operator stopped supplying feedback
#[derive(Debug)]
pub enum OperatorError {
    /// Operator typed `quit`
    Quit,
    /// Input stream closed
    Eof,
    Io(io::Error),
}

impl fmt::Display for OperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quit => write!(f, "Operator quit"),
            Self::Eof => write!(f, "Input closed before the session finished"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for OperatorError {}

impl From<io::Error> for OperatorError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// Feedback typed by an operator
///
/// Malformed input is reported and re-prompted; it never reaches the session.
pub struct OperatorFeedback<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> OperatorFeedback<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> FeedbackSource for OperatorFeedback<R, W> {
    type Error = OperatorError;

    fn feedback(&mut self, guess: &Word, round: usize) -> Result<FeedbackVector, OperatorError> {
        writeln!(self.output, "\nTurn {round}: try {guess}")?;

        loop {
            write!(self.output, "Enter feedback (G/Y/., 'win', or 'quit'): ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(OperatorError::Eof);
            }

            match line.trim().to_lowercase().as_str() {
                "quit" | "q" | "exit" => return Err(OperatorError::Quit),
                "win" | "correct" | "solved" => return Ok(FeedbackVector::SOLVED),
                _ => match FeedbackVector::parse(&line) {
                    Ok(feedback) => return Ok(feedback),
                    Err(e) => writeln!(self.output, "❌ {e}")?,
                },
            }
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(mut session: Session<'_>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Wordle Solver - Interactive Mode             ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest guesses ranked by letter frequency.");
    println!("After each guess, enter the feedback pattern:\n");
    println!("  - Use G/g/🟩 for green (correct position)");
    println!("  - Use Y/y/🟨 for yellow (wrong position)");
    println!("  - Use ./-/_/⬜ for gray (not in word)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("{} candidates to start with.", session.candidates().len());

    let stdin = io::stdin();
    let mut operator = OperatorFeedback::new(stdin.lock(), io::stdout());

    match session.run(&mut operator, print_round) {
        Ok(outcome) => {
            print_outcome(&outcome);
            if matches!(outcome, Outcome::Exhausted { .. }) {
                println!("Your feedback may be incorrect, or the word is not in the list.");
            }
            Ok(())
        }
        Err(OperatorError::Quit | OperatorError::Eof) => {
            println!("\n👋 Thanks for playing!\n");
            Ok(())
        }
        Err(e) => Err(e.to_string()),
    }
}
