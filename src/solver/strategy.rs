//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::CandidateSet;
use crate::core::Code;

/// A strategy for picking the next guess once the candidates have been filtered
pub trait Strategy {
    /// Select the next guess given the remaining candidates
    ///
    /// Returns `None` if no guess can be made.
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Code>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrategyType {
    /// Lowest consistent candidate (default)
    Consistent(ConsistentStrategy),
    /// Worst-case minimisation over all codes
    Minimax(MinimaxStrategy),
}

impl Strategy for StrategyType {
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Code> {
        match self {
            Self::Consistent(s) => s.select_guess(candidates),
            Self::Minimax(s) => s.select_guess(candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "consistent", "minimax", "knuth".
    /// Defaults to consistent if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "minimax" | "knuth" => Self::Minimax(MinimaxStrategy::new()),
            _ => Self::Consistent(ConsistentStrategy),
        }
    }

    /// Name used on the command line
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Consistent(_) => "consistent",
            Self::Minimax(_) => "minimax",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Consistent(ConsistentStrategy)
    }
}

/// Guess the first remaining candidate in ascending order
///
/// This is the greedy simplification of Knuth's algorithm: it never searches
/// for the guess with the best worst case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsistentStrategy;

impl Strategy for ConsistentStrategy {
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Code> {
        candidates.first()
    }
}

/// Pure minimax strategy
///
/// Selects the code (from the whole code space) that minimizes the
/// worst-case number of remaining candidates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimaxStrategy {
    guess_pool: Vec<Code>,
}

impl MinimaxStrategy {
    /// Create a minimax strategy searching all 1296 codes
    #[must_use]
    pub fn new() -> Self {
        Self {
            guess_pool: Code::all().collect(),
        }
    }
}

impl Default for MinimaxStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for MinimaxStrategy {
    fn select_guess(&self, candidates: &CandidateSet) -> Option<Code> {
        match candidates.len() {
            0 => None,
            1 => candidates.first(),
            _ => super::minimax::select_best_guess(&self.guess_pool, candidates)
                .map(|(best, _)| best),
        }
    }
}
