//! Minimax guess selection
//!
//! Worst-case minimisation over the full code space, in the spirit of
//! Knuth's five-guess algorithm.

mod calculator;
mod selector;

pub use calculator::calculate_max_remaining;
pub use selector::select_best_guess;
