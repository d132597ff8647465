//! Benchmark command
//!
//! Tests solver performance across many secrets.

use crate::core::{Code, Score};
use crate::game::GameConfig;
use crate::solver::{Solver, Strategy};
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::seq::IteratorRandom;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_codes: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub hardest: Vec<(Code, usize)>,
    pub duration: Duration,
    pub codes_per_second: f64,
}

/// Pick the secrets to benchmark against
///
/// `limit` keeps the first N codes in ascending order; `sample` draws N
/// distinct codes at random instead. With neither, all 1296 codes are used.
pub fn select_targets<R: Rng + ?Sized>(
    limit: Option<usize>,
    sample: Option<usize>,
    rng: &mut R,
) -> Vec<Code> {
    match (sample, limit) {
        (Some(n), _) => {
            let mut targets = Code::all().choose_multiple(rng, n);
            targets.sort_unstable();
            targets
        }
        (None, Some(n)) => Code::all().take(n).collect(),
        (None, None) => Code::all().collect(),
    }
}

/// Run a fresh solver against every target in parallel
///
/// `make_strategy` builds one strategy per game so no state is shared.
/// A game counts as failed when it errors or needs more than the standard
/// 12 guesses.
pub fn run_benchmark<S, F>(target_codes: &[Code], make_strategy: F, show_progress: bool) -> BenchmarkResult
where
    S: Strategy,
    F: Fn() -> S + Sync,
{
    let start = Instant::now();
    let max_allowed = GameConfig::DEFAULT_MAX_GUESSES as usize;

    let pb = if show_progress {
        let pb = ProgressBar::new(target_codes.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let results: Vec<(Code, Option<usize>)> = target_codes
        .par_iter()
        .map(|&target| {
            let guesses = play_out(Solver::new(make_strategy()), &target, max_allowed);
            pb.inc(1);
            (target, guesses)
        })
        .collect();

    pb.finish_with_message("Complete!");
    let duration = start.elapsed();

    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut hardest: Vec<(Code, usize)> = Vec::new();
    let mut total_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut failed = 0;

    for &(code, guesses) in &results {
        match guesses {
            Some(n) => {
                total_guesses += n;
                min_guesses = min_guesses.min(n);
                max_guesses = max_guesses.max(n);
                *distribution.entry(n).or_insert(0) += 1;
                hardest.push((code, n));
            }
            None => failed += 1,
        }
    }

    hardest.sort_by_key(|&(code, n)| (std::cmp::Reverse(n), code));
    hardest.truncate(10);

    let total_codes = target_codes.len();
    let solved = total_codes - failed;

    BenchmarkResult {
        total_codes,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        hardest,
        duration,
        codes_per_second: total_codes as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

/// Number of guesses the solver needs for `target`, or `None` if it fails
fn play_out<S: Strategy>(mut solver: Solver<S>, target: &Code, max_allowed: usize) -> Option<usize> {
    for turn in 1..=max_allowed {
        let guess = solver.next_guess().ok()?;
        let score = Score::calculate(target, &guess);

        if score.is_exact_match() {
            return Some(turn);
        }
        solver.record_score(score);
    }

    None
}
