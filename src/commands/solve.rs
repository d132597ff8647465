//! Code solving command
//!
//! Lets the computer break a specific secret and returns the solution path.

use crate::core::{Code, Score};
use crate::game::GameConfig;
use crate::solver::{Solver, Strategy};

/// Configuration for solving a code
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: GameConfig::DEFAULT_MAX_GUESSES as usize,
        }
    }
}

/// Result of solving a code
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: Code,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub code: Code,
    pub score: Score,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific code with a fresh solver using the given strategy
///
/// The solver only sees the score of each guess, never the target.
///
/// # Errors
///
/// Returns an error if:
/// - The target is not a valid code
/// - The solver runs out of consistent candidates
pub fn solve_code<S: Strategy>(config: SolveConfig, strategy: S) -> Result<SolveResult, String> {
    let target = Code::parse(&config.target).map_err(|e| format!("Invalid target code: {e}"))?;

    let mut solver = Solver::new(strategy);
    let mut guesses: Vec<GuessStep> = Vec::new();
    let mut candidates_before = solver.candidates().len();

    for _ in 0..config.max_guesses {
        let guess = solver.next_guess().map_err(|e| e.to_string())?;
        let score = Score::calculate(&target, &guess);

        // Apply the score now so the step can report what it eliminated
        let candidates_after = if score.is_exact_match() {
            1
        } else {
            let mut remaining = solver.candidates().clone();
            remaining.retain_consistent(&guess, score);
            remaining.len()
        };
        solver.record_score(score);

        guesses.push(GuessStep {
            code: guess,
            score,
            candidates_before,
            candidates_after,
        });
        candidates_before = candidates_after;

        if score.is_exact_match() {
            return Ok(SolveResult {
                success: true,
                guesses,
                target,
            });
        }
    }

    Ok(SolveResult {
        success: false,
        guesses,
        target,
    })
}
