//! Minimax-based guess selection
//!
//! Selects the guess that minimizes the worst-case remaining candidates.

use super::calculator::calculate_max_remaining;
use crate::core::Code;
use crate::solver::CandidateSet;
use rayon::prelude::*;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Ties prefer a guess that is still a candidate, then the lowest code.
/// Returns the chosen code and its worst case, or `None` if the guess pool is empty.
///
/// # Examples
/// ```
/// use mastermind::core::Code;
/// use mastermind::solver::CandidateSet;
/// use mastermind::solver::minimax::select_best_guess;
///
/// let pool: Vec<Code> = Code::all().collect();
/// let candidates = CandidateSet::full();
///
/// let (_, worst_case) = select_best_guess(&pool, &candidates).unwrap();
/// assert_eq!(worst_case, 256);
/// ```
#[must_use]
pub fn select_best_guess(guess_pool: &[Code], candidates: &CandidateSet) -> Option<(Code, usize)> {
    guess_pool
        .par_iter()
        .map(|&guess| {
            let max_remaining = calculate_max_remaining(&guess, candidates.as_slice());
            (guess, max_remaining)
        })
        .min_by_key(|&(guess, max)| (max, !candidates.contains(&guess), guess))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Score;

    #[test]
    fn selects_lowest_max_remaining() {
        let pool = vec![Code::parse("1111").unwrap(), Code::parse("1234").unwrap()];

        let secret = Code::parse("1234").unwrap();
        let probe = Code::parse("5566").unwrap();
        let mut candidates = CandidateSet::full();
        candidates.retain_consistent(&probe, Score::calculate(&secret, &probe));

        let (best, _) = select_best_guess(&pool, &candidates).unwrap();
        assert_eq!(best.to_string(), "1234");
    }

    #[test]
    fn opening_worst_case_matches_knuth() {
        let pool: Vec<Code> = Code::all().collect();
        let (best, max_remaining) = select_best_guess(&pool, &CandidateSet::full()).unwrap();

        assert_eq!(max_remaining, 256);
        // 1122 is the lowest code reaching the optimum
        assert_eq!(best.to_string(), "1122");
    }

    #[test]
    fn prefers_candidates_on_ties() {
        let guess = Code::parse("1234").unwrap();
        let mut candidates = CandidateSet::full();
        candidates.retain_consistent(&guess, Score::calculate(&Code::parse("1243").unwrap(), &guess));

        let pool: Vec<Code> = Code::all().collect();
        let (best, max_remaining) = select_best_guess(&pool, &candidates).unwrap();

        let best_among = |keep_candidates: bool| {
            pool.iter()
                .filter(|c| candidates.contains(c) == keep_candidates)
                .map(|c| calculate_max_remaining(c, candidates.as_slice()))
                .min()
                .unwrap()
        };

        if candidates.contains(&best) {
            assert!(max_remaining <= best_among(false));
        } else {
            // A non-candidate only wins by being strictly better
            assert!(max_remaining < best_among(true));
        }
    }

    #[test]
    fn empty_pool_returns_none() {
        assert!(select_best_guess(&[], &CandidateSet::full()).is_none());
    }
}
