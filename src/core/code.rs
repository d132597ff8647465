//! Mastermind code representation
//!
//! A Code is an immutable sequence of 4 digits, each between 1 and 6.

use super::Score;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Number of positions in a code
pub const CODE_LENGTH: usize = 4;

/// Smallest digit allowed in a code
pub const MIN_DIGIT: u8 = 1;

/// Largest digit allowed in a code
pub const MAX_DIGIT: u8 = 6;

/// Number of distinct valid codes (6^4)
pub const CODE_COUNT: usize = 1296;

/// A 4-digit Mastermind code
///
/// Ordering follows the numeric reading of the digits, so `1111 < 1112 < ... < 6666`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code([u8; CODE_LENGTH]);

/// Error type for sequences that are not valid codes
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeError {
    #[error("code must be exactly 4 digits, got {0}")]
    InvalidLength(usize),

    #[error("digit {digit} at position {position} is not between 1 and 6")]
    DigitOutOfRange { position: usize, digit: u8 },

    #[error("'{0}' is not a digit")]
    NotADigit(char),
}

impl Code {
    /// Knuth's opener for 4 positions and 6 digits, the computer's fixed first guess
    pub const OPENER: Self = Self([1, 1, 2, 2]);

    /// Check whether a sequence is a valid code
    ///
    /// True iff it has exactly 4 elements and every element is in `1..=6`.
    #[must_use]
    pub fn validate(digits: &[u8]) -> bool {
        Self::check(digits).is_ok()
    }

    /// Create a new Code from a digit sequence
    ///
    /// # Errors
    /// Returns `CodeError` if the sequence is not 4 digits between 1 and 6.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let code = Code::new(&[1, 1, 2, 2]).unwrap();
    /// assert_eq!(code.to_string(), "1122");
    ///
    /// assert!(Code::new(&[1, 2, 3]).is_err());
    /// assert!(Code::new(&[1, 2, 3, 7]).is_err());
    /// ```
    pub fn new(digits: &[u8]) -> Result<Self, CodeError> {
        Self::check(digits)?;

        let mut owned = [0u8; CODE_LENGTH];
        owned.copy_from_slice(digits);
        Ok(Self(owned))
    }

    /// Parse a typed code such as `"1122"`
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns `CodeError` on non-digit characters, wrong length or out-of-range digits.
    pub fn parse(text: &str) -> Result<Self, CodeError> {
        Self::new(&Self::digits_from_text(text)?)
    }

    /// Convert typed text into a raw digit sequence without range checks
    ///
    /// # Errors
    /// Returns `CodeError::NotADigit` for the first character that is not `0-9`.
    pub fn digits_from_text(text: &str) -> Result<Vec<u8>, CodeError> {
        text.trim()
            .chars()
            .map(|c| {
                c.to_digit(10)
                    .map(|d| d as u8)
                    .ok_or(CodeError::NotADigit(c))
            })
            .collect()
    }

    /// Generate a code with 4 independent uniform digits
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut digits = [0u8; CODE_LENGTH];
        for digit in &mut digits {
            *digit = rng.random_range(MIN_DIGIT..=MAX_DIGIT);
        }
        Self(digits)
    }

    /// All 1296 codes in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CODE_COUNT).map(|mut index| {
            let mut digits = [MIN_DIGIT; CODE_LENGTH];
            for digit in digits.iter_mut().rev() {
                *digit += (index % 6) as u8;
                index /= 6;
            }
            Self(digits)
        })
    }

    /// Get the digits of the code
    #[inline]
    #[must_use]
    pub const fn digits(&self) -> &[u8; CODE_LENGTH] {
        &self.0
    }

    /// Score a guess against this code, treating `self` as the secret
    ///
    /// # Errors
    /// Returns `CodeError` if the guess is not a valid code.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::Code;
    ///
    /// let secret = Code::new(&[1, 2, 3, 4]).unwrap();
    /// let score = secret.score(&[4, 3, 2, 1]).unwrap();
    /// assert_eq!(score.exact_matches(), 0);
    /// assert_eq!(score.partial_matches(), 4);
    /// ```
    pub fn score(&self, guess: &[u8]) -> Result<Score, CodeError> {
        let guess = Self::new(guess)?;
        Ok(Score::calculate(self, &guess))
    }

    fn check(digits: &[u8]) -> Result<(), CodeError> {
        if digits.len() != CODE_LENGTH {
            return Err(CodeError::InvalidLength(digits.len()));
        }

        if let Some((position, &digit)) = digits
            .iter()
            .enumerate()
            .find(|&(_, d)| !(MIN_DIGIT..=MAX_DIGIT).contains(d))
        {
            return Err(CodeError::DigitOutOfRange { position, digit });
        }

        Ok(())
    }
}

impl FromStr for Code {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.0 {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn code_creation_valid() {
        let code = Code::new(&[1, 2, 3, 4]).unwrap();
        assert_eq!(code.digits(), &[1, 2, 3, 4]);
        assert_eq!(code.to_string(), "1234");
    }

    #[test]
    fn code_creation_invalid_length() {
        assert_eq!(Code::new(&[]), Err(CodeError::InvalidLength(0)));
        assert_eq!(Code::new(&[1, 2, 3]), Err(CodeError::InvalidLength(3)));
        assert_eq!(
            Code::new(&[1, 2, 3, 4, 5]),
            Err(CodeError::InvalidLength(5))
        );
    }

    #[test]
    fn code_creation_out_of_range() {
        assert_eq!(
            Code::new(&[0, 1, 1, 1]),
            Err(CodeError::DigitOutOfRange {
                position: 0,
                digit: 0
            })
        );
        assert_eq!(
            Code::new(&[1, 1, 1, 7]),
            Err(CodeError::DigitOutOfRange {
                position: 3,
                digit: 7
            })
        );
    }

    #[test]
    fn validate_accepts_exactly_the_code_space() {
        let mut accepted = 0;
        for a in 0..=9 {
            for b in 0..=9 {
                for c in 0..=9 {
                    for d in 0..=9 {
                        if Code::validate(&[a, b, c, d]) {
                            accepted += 1;
                            assert!([a, b, c, d].iter().all(|x| (1..=6).contains(x)));
                        }
                    }
                }
            }
        }
        assert_eq!(accepted, CODE_COUNT);
    }

    #[test]
    fn validate_rejects_wrong_lengths() {
        assert!(!Code::validate(&[]));
        assert!(!Code::validate(&[1]));
        assert!(!Code::validate(&[1, 2, 3]));
        assert!(!Code::validate(&[1, 2, 3, 4, 5]));
        assert!(!Code::validate(&[6; 8]));
    }

    #[test]
    fn parse_typed_code() {
        assert_eq!(Code::parse("1122").unwrap(), Code::new(&[1, 1, 2, 2]).unwrap());
        assert_eq!(Code::parse("  6543\n").unwrap().to_string(), "6543");
        assert_eq!("3456".parse::<Code>().unwrap().digits(), &[3, 4, 5, 6]);
    }

    #[test]
    fn parse_rejects_bad_text() {
        assert_eq!(Code::parse("12a4"), Err(CodeError::NotADigit('a')));
        assert_eq!(Code::parse("12 34"), Err(CodeError::NotADigit(' ')));
        assert_eq!(Code::parse("123"), Err(CodeError::InvalidLength(3)));
        assert_eq!(Code::parse(""), Err(CodeError::InvalidLength(0)));
        assert!(matches!(
            Code::parse("1290"),
            Err(CodeError::DigitOutOfRange { position: 2, digit: 9 })
        ));
    }

    #[test]
    fn all_codes_are_sorted_and_complete() {
        let codes: Vec<Code> = Code::all().collect();
        assert_eq!(codes.len(), CODE_COUNT);
        assert_eq!(codes[0].to_string(), "1111");
        assert_eq!(codes[1].to_string(), "1112");
        assert_eq!(codes[6].to_string(), "1121");
        assert_eq!(codes[CODE_COUNT - 1].to_string(), "6666");
        assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn ordering_is_numeric() {
        let low = Code::parse("1166").unwrap();
        let high = Code::parse("1211").unwrap();
        assert!(low < high);
    }

    #[test]
    fn random_codes_are_valid_and_seeded() {
        let mut rng = StdRng::seed_from_u64(7);
        let first: Vec<Code> = (0..50).map(|_| Code::random(&mut rng)).collect();
        assert!(first.iter().all(|c| Code::validate(c.digits())));

        let mut rng = StdRng::seed_from_u64(7);
        let second: Vec<Code> = (0..50).map(|_| Code::random(&mut rng)).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn score_rejects_invalid_guess() {
        let secret = Code::parse("1234").unwrap();
        assert_eq!(secret.score(&[1, 2, 3]), Err(CodeError::InvalidLength(3)));
        assert!(secret.score(&[1, 2, 3, 0]).is_err());
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            CodeError::InvalidLength(3).to_string(),
            "code must be exactly 4 digits, got 3"
        );
        assert_eq!(
            CodeError::DigitOutOfRange {
                position: 1,
                digit: 9
            }
            .to_string(),
            "digit 9 at position 1 is not between 1 and 6"
        );
        assert_eq!(CodeError::NotADigit('x').to_string(), "'x' is not a digit");
    }
}
