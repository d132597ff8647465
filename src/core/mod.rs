//! Core domain types for Mastermind
//!
//! This module contains the code value type and feedback scoring.
//! All types here are pure, testable, and have clear mathematical properties.

mod code;
mod score;

pub use code::{CODE_COUNT, CODE_LENGTH, Code, CodeError, MAX_DIGIT, MIN_DIGIT};
pub use score::Score;
