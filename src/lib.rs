//! Mastermind
//!
//! The code-breaking game for human and computer players, with a computer
//! code-breaker based on a simplified version of Knuth's five-guess algorithm.
//!
//! # Quick Start
//!
//! ```rust
//! use mastermind::core::Code;
//!
//! let secret = Code::new(&[1, 2, 3, 4]).unwrap();
//! let score = secret.score(&[1, 3, 5, 6]).unwrap();
//!
//! assert_eq!(score.exact_matches(), 1);
//! assert_eq!(score.partial_matches(), 1);
//! assert!(!score.is_exact_match());
//! ```

// Core domain types
pub mod core;

// Code-breaking algorithms
pub mod solver;

// Players and the turn loop
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
