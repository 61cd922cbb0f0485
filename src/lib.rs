//! Wordle Heuristic Solver
//!
//! A Wordle solver that narrows a dictionary with exact feedback replay and
//! accumulated letter constraints, ranking guesses by letter frequency.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_heuristic::core::{FeedbackVector, Word};
//!
//! let secret = Word::new("allow").unwrap();
//! let guess = Word::new("llama").unwrap();
//!
//! let feedback = FeedbackVector::compute(&secret, &guess);
//! assert_eq!(feedback.to_string(), "YGY..");
//! ```

// Core domain types
pub mod core;

// Solving engine
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
