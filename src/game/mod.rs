//! Game orchestration
//!
//! Players in either role, and the turn loop that ties a code-maker and a
//! code-breaker together.

mod computer;
mod human;
mod player;
mod session;

pub use computer::ComputerPlayer;
pub use human::{HumanPlayer, LineReader};
pub use player::{Player, PlayerKind, Role, TurnContext};
pub use session::{Game, GameConfig, GameOutcome};

use crate::core::CodeError;
use crate::solver::SolverError;

/// Errors that can end a game early
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("invalid code: {0}")]
    InvalidCode(#[from] CodeError),

    #[error("computer code-breaker failed: {0}")]
    Solver(#[from] SolverError),

    #[error("input closed while waiting for a {0}")]
    InputClosed(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
