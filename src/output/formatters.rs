//! Formatting utilities for terminal output

use crate::core::{CODE_LENGTH, Score};

/// Format a score as key pegs
///
/// One `●` per exact match, one `○` per partial match, `·` for the rest.
#[must_use]
pub fn score_to_pegs(score: Score) -> String {
    let exact = usize::from(score.exact_matches());
    let partial = usize::from(score.partial_matches());

    let mut result = String::with_capacity(CODE_LENGTH * 3);
    result.push_str(&"●".repeat(exact));
    result.push_str(&"○".repeat(partial));
    result.push_str(&"·".repeat(CODE_LENGTH.saturating_sub(exact + partial)));
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
