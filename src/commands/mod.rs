//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod simple;
pub mod solve;

pub use analyze::{AnalysisResult, analyze_word};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{OperatorError, OperatorFeedback, run_simple};
pub use solve::{GuessStep, SolveResult, random_secret, solve_word};
