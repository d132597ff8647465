//! Automated player backed by the solver

use super::{GameError, Player, TurnContext};
use crate::core::Code;
use crate::solver::{Solver, Strategy, StrategyType};
use log::info;
use rand::Rng;
use rand::rngs::StdRng;

/// Computer player
///
/// Picks uniformly random secrets from its injected random source and breaks
/// codes with a [`Solver`].
pub struct ComputerPlayer<S: Strategy = StrategyType, R: Rng = StdRng> {
    solver: Solver<S>,
    rng: R,
}

impl<S: Strategy, R: Rng> ComputerPlayer<S, R> {
    /// Create a computer player with the given guess strategy and random source
    pub fn new(strategy: S, rng: R) -> Self {
        Self {
            solver: Solver::new(strategy),
            rng,
        }
    }

    /// The solver driving this player's guesses
    pub const fn solver(&self) -> &Solver<S> {
        &self.solver
    }
}

impl<S: Strategy, R: Rng> Player for ComputerPlayer<S, R> {
    fn name(&self) -> &str {
        "Computer"
    }

    fn pick_code(&mut self) -> Result<Code, GameError> {
        Ok(Code::random(&mut self.rng))
    }

    fn guess_code(&mut self, turn: &TurnContext) -> Result<Vec<u8>, GameError> {
        if let Some(score) = turn.last_score {
            self.solver.record_score(score);
        }

        let guess = self.solver.next_guess()?;
        info!(
            "computer guesses {guess} with {} candidates left",
            self.solver.candidates().len()
        );

        Ok(guess.digits().to_vec())
    }
}
