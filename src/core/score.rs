//! Mastermind feedback scoring
//!
//! A score counts how many guessed digits are correct in both value and
//! position (exact matches) and how many are present in the secret but
//! misplaced (partial matches). Each secret digit and each guess digit can
//! contribute to at most one match.

use super::code::{CODE_LENGTH, Code, MAX_DIGIT};
use std::fmt;

/// Feedback for a guess against a secret code
///
/// Invariant: `exact_matches + partial_matches <= 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    exact: u8,
    partial: u8,
}

impl Score {
    /// Feedback for a guess equal to the secret
    pub const PERFECT: Self = Self {
        exact: CODE_LENGTH as u8,
        partial: 0,
    };

    /// Calculate the score when `guess` is played against `secret`
    ///
    /// # Algorithm
    /// 1. Count positions where both codes hold the same digit (exact)
    /// 2. Tally the remaining digits of each code separately
    /// 3. Partial matches are the overlap of those two tallies
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Code, Score};
    ///
    /// let secret = Code::new(&[1, 1, 2, 2]).unwrap();
    /// let guess = Code::new(&[1, 1, 1, 1]).unwrap();
    /// let score = Score::calculate(&secret, &guess);
    ///
    /// // The two extra 1s in the guess have no secret digit left to match
    /// assert_eq!(score.exact_matches(), 2);
    /// assert_eq!(score.partial_matches(), 0);
    /// ```
    #[must_use]
    pub fn calculate(secret: &Code, guess: &Code) -> Self {
        let mut exact = 0u8;
        let mut secret_left = [0u8; MAX_DIGIT as usize + 1];
        let mut guess_left = [0u8; MAX_DIGIT as usize + 1];

        for (&s, &g) in secret.digits().iter().zip(guess.digits()) {
            if s == g {
                exact += 1;
            } else {
                secret_left[s as usize] += 1;
                guess_left[g as usize] += 1;
            }
        }

        let partial = secret_left
            .iter()
            .zip(&guess_left)
            .map(|(&s, &g)| s.min(g))
            .sum();

        Self { exact, partial }
    }

    /// Number of digits correct in value and position
    #[inline]
    #[must_use]
    pub const fn exact_matches(self) -> u8 {
        self.exact
    }

    /// Number of digits present in the secret but in the wrong position
    #[inline]
    #[must_use]
    pub const fn partial_matches(self) -> u8 {
        self.partial
    }

    /// Check if the guess equals the secret
    #[inline]
    #[must_use]
    pub const fn is_exact_match(self) -> bool {
        self.exact == CODE_LENGTH as u8
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} partial", self.exact, self.partial)
    }
}
