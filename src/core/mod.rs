//! Core domain types for the solver
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod feedback;
mod word;

pub use feedback::{Feedback, FeedbackError, FeedbackVector};
pub use word::{ALPHABET_LEN, WORD_LEN, Word, WordError, index_letter, letter_index};
