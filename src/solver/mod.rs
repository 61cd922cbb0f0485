//! Solving engine
//!
//! Candidate filtering, accumulated letter constraints, frequency ranking and
//! the round loop that ties them together.

pub mod config;
pub mod constraints;
pub mod oracle;
pub mod ranker;
pub mod session;

pub use config::{DEFAULT_MAX_ATTEMPTS, FilterMode, SolverConfig};
pub use constraints::{ConstraintState, LetterStatus};
pub use oracle::{filter_candidates, is_compatible};
pub use ranker::{DEFAULT_NOVELTY_BONUS, GuessRanker, LetterFrequency, Score};
pub use session::{
    FeedbackSource, Outcome, Phase, RoundReport, SecretWord, Session, SessionError, Step,
};
