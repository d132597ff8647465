//! Candidate set tracking for the computer code-breaker
//!
//! Holds every code that is still consistent with the feedback observed so far.

use crate::core::{Code, Score};

/// Codes not yet eliminated by any guess/score pair
///
/// Kept in ascending code order. The set only ever shrinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    codes: Vec<Code>,
}

impl CandidateSet {
    /// Create a set holding all 1296 codes
    #[must_use]
    pub fn full() -> Self {
        Self {
            codes: Code::all().collect(),
        }
    }

    /// Create a set holding all codes except `excluded`
    ///
    /// Used to drop the opener, which is guessed before any feedback exists.
    #[must_use]
    pub fn without(excluded: Code) -> Self {
        Self {
            codes: Code::all().filter(|&code| code != excluded).collect(),
        }
    }

    /// Keep only codes that would have produced `observed` when `guess` was played
    ///
    /// Returns the number of codes eliminated.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    /// use mastermind::solver::CandidateSet;
    ///
    /// let secret = Code::parse("3456").unwrap();
    /// let guess = Code::parse("1122").unwrap();
    ///
    /// let mut candidates = CandidateSet::full();
    /// candidates.retain_consistent(&guess, Score::calculate(&secret, &guess));
    /// assert!(candidates.contains(&secret));
    /// assert!(!candidates.contains(&guess));
    /// ```
    pub fn retain_consistent(&mut self, guess: &Code, observed: Score) -> usize {
        let before = self.codes.len();
        self.codes
            .retain(|candidate| Score::calculate(candidate, guess) == observed);
        before - self.codes.len()
    }

    /// The lowest remaining code
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<Code> {
        self.codes.first().copied()
    }

    /// Check whether a code is still a candidate
    #[must_use]
    pub fn contains(&self, code: &Code) -> bool {
        self.codes.binary_search(code).is_ok()
    }

    /// Number of remaining candidates
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Check if every code has been eliminated
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Remaining candidates in ascending order
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Code] {
        &self.codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CODE_COUNT;

    fn code(text: &str) -> Code {
        Code::parse(text).unwrap()
    }

    #[test]
    fn full_set_holds_every_code() {
        let candidates = CandidateSet::full();
        assert_eq!(candidates.len(), CODE_COUNT);
        assert_eq!(candidates.first(), Some(code("1111")));
        assert!(candidates.contains(&code("6666")));
    }

    #[test]
    fn without_drops_one_code() {
        let candidates = CandidateSet::without(code("1122"));
        assert_eq!(candidates.len(), CODE_COUNT - 1);
        assert!(!candidates.contains(&code("1122")));
        assert!(candidates.contains(&code("1121")));
        assert!(candidates.contains(&code("1123")));
    }

    #[test]
    fn retain_keeps_only_consistent_codes() {
        let secret = code("2345");
        let guess = code("1122");
        let observed = Score::calculate(&secret, &guess);

        let mut candidates = CandidateSet::full();
        let removed = candidates.retain_consistent(&guess, observed);

        assert_eq!(removed + candidates.len(), CODE_COUNT);
        assert!(candidates.contains(&secret));
        assert!(
            candidates
                .as_slice()
                .iter()
                .all(|c| Score::calculate(c, &guess) == observed)
        );
    }

    #[test]
    fn retain_never_grows() {
        let secret = code("6152");
        let mut candidates = CandidateSet::full();
        let mut previous = candidates.len();

        for guess in ["1122", "3344", "5566", "1526"] {
            let guess = code(guess);
            candidates.retain_consistent(&guess, Score::calculate(&secret, &guess));
            assert!(candidates.len() <= previous);
            previous = candidates.len();
        }

        assert!(candidates.contains(&secret));
    }

    #[test]
    fn perfect_score_leaves_only_the_guess() {
        let guess = code("4321");
        let mut candidates = CandidateSet::full();
        candidates.retain_consistent(&guess, Score::PERFECT);

        assert_eq!(candidates.as_slice(), &[guess]);
    }

    #[test]
    fn stays_sorted_after_filtering() {
        let guess = code("1234");
        let mut candidates = CandidateSet::full();
        candidates.retain_consistent(&guess, Score::calculate(&code("4321"), &guess));

        assert!(candidates.as_slice().windows(2).all(|pair| pair[0] < pair[1]));
    }
}
