//! Player roles and the capability interface shared by human and computer players

use super::GameError;
use crate::core::{Code, Score};
use std::fmt;

/// The two sides of a Mastermind game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    CodeMaker,
    CodeBreaker,
}

impl Role {
    /// Get role name for display
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CodeMaker => "code-maker",
            Self::CodeBreaker => "code-breaker",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Who fills a role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerKind {
    Human,
    Computer,
}

/// What a code-breaker is told before each guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnContext {
    /// Guesses left, including the one about to be made
    pub remaining_guesses: u32,
    /// Score of the previous guess, `None` before the first guess
    pub last_score: Option<Score>,
}

/// A participant able to play either role
pub trait Player {
    /// Player name for display
    fn name(&self) -> &str;

    /// Choose the secret code (code-maker role)
    ///
    /// # Errors
    /// Returns `GameError` if the player cannot produce a code.
    fn pick_code(&mut self) -> Result<Code, GameError>;

    /// Produce the next guess as a raw digit sequence (code-breaker role)
    ///
    /// The game validates the sequence before scoring it.
    ///
    /// # Errors
    /// Returns `GameError` if the player cannot produce a guess.
    fn guess_code(&mut self, turn: &TurnContext) -> Result<Vec<u8>, GameError>;
}
