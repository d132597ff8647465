//! Mastermind code-breaking algorithms
//!
//! This module contains the computer code-breaker and its guess selection strategies.

mod candidates;
mod engine;
pub mod minimax;
pub mod strategy;

pub use candidates::CandidateSet;
pub use engine::{Solver, SolverError};
pub use strategy::{ConsistentStrategy, MinimaxStrategy, Strategy, StrategyType};
