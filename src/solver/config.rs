//! Solver configuration

use super::ranker::DEFAULT_NOVELTY_BONUS;

/// Attempts allowed before a session gives up
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Which filtering path narrows the candidates after each round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    /// Replay feedback for every candidate
    Oracle,
    /// Check accumulated constraints only
    Constraints,
    /// Constraint pre-filter, then replay feedback on the survivors
    #[default]
    Both,
}

impl FilterMode {
    /// Create a filter mode from its name
    ///
    /// Supported names: "oracle", "constraints", "both".
    /// Defaults to both if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "oracle" => Self::Oracle,
            "constraints" | "fast" => Self::Constraints,
            _ => Self::Both,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Oracle => "oracle",
            Self::Constraints => "constraints",
            Self::Both => "both",
        }
    }
}

/// Tunables shared by every session of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    pub max_attempts: usize,
    pub novelty_bonus: u32,
    pub filter: FilterMode,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            novelty_bonus: DEFAULT_NOVELTY_BONUS,
            filter: FilterMode::default(),
        }
    }
}
