//! Main Mastermind code-breaking solver

use super::CandidateSet;
use super::strategy::Strategy;
use crate::core::{Code, Score};
use log::debug;

/// Error raised when feedback leaves no consistent code
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolverError {
    #[error("no candidate code is consistent with score ({score}) for guess {guess}")]
    ExhaustedCandidates { guess: Code, score: Score },
}

/// Stateful computer code-breaker
///
/// Starts from the opener, then narrows its candidate set with every score
/// it is given and asks the strategy for the next guess. The solver only ever
/// sees observed feedback, never the secret.
pub struct Solver<S: Strategy> {
    strategy: S,
    candidates: CandidateSet,
    last_guess: Option<Code>,
    pending_score: Option<Score>,
    is_first_turn: bool,
}

impl<S: Strategy> Solver<S> {
    /// Create a new solver with the given strategy
    ///
    /// The candidate set starts with every code except the opener.
    #[must_use]
    pub fn new(strategy: S) -> Self {
        Self {
            strategy,
            candidates: CandidateSet::without(Code::OPENER),
            last_guess: None,
            pending_score: None,
            is_first_turn: true,
        }
    }

    /// Hand the solver the score its last guess received
    ///
    /// The score is applied on the next call to [`Solver::next_guess`].
    pub fn record_score(&mut self, score: Score) {
        self.pending_score = Some(score);
    }

    /// Produce the next guess
    ///
    /// The first call always returns the opener. Later calls first drop every
    /// candidate inconsistent with the recorded score for the previous guess;
    /// without a fresh score the candidates are left untouched.
    ///
    /// # Errors
    /// Returns `SolverError::ExhaustedCandidates` if the feedback eliminates
    /// every candidate, which means the scores given were inconsistent.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    /// use mastermind::solver::{ConsistentStrategy, Solver};
    ///
    /// let secret = Code::parse("3456").unwrap();
    /// let mut solver = Solver::new(ConsistentStrategy);
    ///
    /// let opener = solver.next_guess().unwrap();
    /// assert_eq!(opener.to_string(), "1122");
    ///
    /// solver.record_score(Score::calculate(&secret, &opener));
    /// assert_eq!(solver.next_guess().unwrap().to_string(), "3333");
    /// ```
    pub fn next_guess(&mut self) -> Result<Code, SolverError> {
        if self.is_first_turn {
            self.is_first_turn = false;
            self.pending_score = None;
            self.last_guess = Some(Code::OPENER);
            return Ok(Code::OPENER);
        }

        if let (Some(guess), Some(score)) = (self.last_guess, self.pending_score.take()) {
            let removed = self.candidates.retain_consistent(&guess, score);
            debug!(
                "guess {guess} scored {score}: eliminated {removed}, {} remaining",
                self.candidates.len()
            );

            if self.candidates.is_empty() {
                return Err(SolverError::ExhaustedCandidates { guess, score });
            }
        }

        let guess = self
            .strategy
            .select_guess(&self.candidates)
            .ok_or_else(|| self.exhausted())?;

        self.last_guess = Some(guess);
        Ok(guess)
    }

    /// Codes still consistent with every score applied so far
    #[must_use]
    pub const fn candidates(&self) -> &CandidateSet {
        &self.candidates
    }

    /// The most recent guess, if any
    #[must_use]
    pub const fn last_guess(&self) -> Option<Code> {
        self.last_guess
    }

    fn exhausted(&self) -> SolverError {
        SolverError::ExhaustedCandidates {
            guess: self.last_guess.unwrap_or(Code::OPENER),
            score: self.pending_score.unwrap_or(Score::PERFECT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CODE_COUNT;
    use crate::solver::strategy::{ConsistentStrategy, MinimaxStrategy};

    const GUESS_BUDGET: usize = 12;

    /// Play the solver against a known secret and return the guesses it made
    fn play_out<S: Strategy>(solver: &mut Solver<S>, secret: &Code) -> Vec<Code> {
        let mut guesses = Vec::new();

        while guesses.len() < CODE_COUNT {
            let guess = solver.next_guess().unwrap();
            guesses.push(guess);

            let score = Score::calculate(secret, &guess);
            if score.is_exact_match() {
                break;
            }
            solver.record_score(score);
        }

        guesses
    }

    #[test]
    fn first_guess_is_opener() {
        let mut solver = Solver::new(ConsistentStrategy);
        assert_eq!(solver.next_guess().unwrap().to_string(), "1122");
        assert_eq!(solver.last_guess(), Some(Code::OPENER));
    }

    #[test]
    fn opener_is_not_a_candidate() {
        let solver = Solver::new(ConsistentStrategy);
        assert_eq!(solver.candidates().len(), CODE_COUNT - 1);
        assert!(!solver.candidates().contains(&Code::OPENER));
    }

    #[test]
    fn feedback_removes_inconsistent_codes() {
        let secret = Code::parse("2354").unwrap();
        let mut solver = Solver::new(ConsistentStrategy);

        let opener = solver.next_guess().unwrap();
        let observed = Score::calculate(&secret, &opener);
        solver.record_score(observed);
        let second = solver.next_guess().unwrap();

        assert!(solver.candidates().contains(&secret));
        assert!(solver.candidates().contains(&second));
        assert!(
            solver
                .candidates()
                .as_slice()
                .iter()
                .all(|c| Score::calculate(c, &opener) == observed)
        );
    }

    #[test]
    fn guesses_without_feedback_do_not_filter() {
        let mut solver = Solver::new(ConsistentStrategy);
        solver.next_guess().unwrap();

        let before = solver.candidates().len();
        let guess = solver.next_guess().unwrap();
        assert_eq!(solver.candidates().len(), before);
        assert_eq!(guess.to_string(), "1111");
    }

    #[test]
    fn inconsistent_feedback_exhausts_candidates() {
        let mut solver = Solver::new(ConsistentStrategy);
        solver.next_guess().unwrap();

        // A perfect score for the opener cannot match any remaining candidate
        solver.record_score(Score::PERFECT);
        let err = solver.next_guess().unwrap_err();

        assert_eq!(
            err,
            SolverError::ExhaustedCandidates {
                guess: Code::OPENER,
                score: Score::PERFECT
            }
        );
        assert_eq!(
            err.to_string(),
            "no candidate code is consistent with score (4 exact, 0 partial) for guess 1122"
        );
    }

    #[test]
    fn opener_secret_is_solved_immediately() {
        let mut solver = Solver::new(ConsistentStrategy);
        let guesses = play_out(&mut solver, &Code::OPENER);
        assert_eq!(guesses, vec![Code::OPENER]);
    }

    #[test]
    fn consistent_strategy_solves_every_secret_within_budget() {
        for secret in Code::all() {
            let mut solver = Solver::new(ConsistentStrategy);
            let guesses = play_out(&mut solver, &secret);

            assert_eq!(guesses.last(), Some(&secret));
            assert!(
                guesses.len() <= GUESS_BUDGET,
                "{secret} took {} guesses",
                guesses.len()
            );
        }
    }

    #[test]
    fn consistent_strategy_is_deterministic() {
        let secret = Code::parse("5162").unwrap();
        let first = play_out(&mut Solver::new(ConsistentStrategy), &secret);
        let second = play_out(&mut Solver::new(ConsistentStrategy), &secret);
        assert_eq!(first, second);
    }

    #[test]
    fn minimax_strategy_solves_sample_secrets() {
        for secret in ["1111", "6666", "1234", "3632", "5146", "2255"] {
            let secret = Code::parse(secret).unwrap();
            let mut solver = Solver::new(MinimaxStrategy::new());
            let guesses = play_out(&mut solver, &secret);

            assert_eq!(guesses.last(), Some(&secret));
            assert!(guesses.len() <= GUESS_BUDGET);
        }
    }
}
