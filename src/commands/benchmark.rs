//! Benchmark command
//!
//! Builds many puzzles back to back and reports how long creation takes and
//! how many sub-words each puzzle offers.

use crate::core::JumbleError;
use crate::engine::GameEngine;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_games: usize,
    pub length: usize,
    pub min_length: usize,
    pub average_sub_words: f64,
    pub min_sub_words: usize,
    pub max_sub_words: usize,
    /// Puzzles created already completed
    pub empty_games: usize,
    /// Sub-word count -> number of puzzles
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

/// Create `count` puzzles and collect statistics
///
/// # Errors
/// Fails on the first puzzle that cannot be created (invalid parameters or
/// no word of `length`).
pub fn run_benchmark(
    engine: &GameEngine<'_>,
    count: usize,
    length: usize,
    min_length: usize,
    show_progress: bool,
) -> Result<BenchmarkResult, JumbleError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(count as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let mut total_sub_words = 0;
    let mut min_sub_words = usize::MAX;
    let mut max_sub_words = 0;
    let mut empty_games = 0;
    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();

    for _ in 0..count {
        let state = engine.create_game(length, min_length)?;
        let total = state.total_words();

        total_sub_words += total;
        min_sub_words = min_sub_words.min(total);
        max_sub_words = max_sub_words.max(total);
        if state.is_completed() {
            empty_games += 1;
        }
        *distribution.entry(total).or_insert(0) += 1;

        pb.set_message(state.original().to_string());
        pb.inc(1);
    }
    pb.finish_and_clear();

    let duration = start.elapsed();
    tracing::info!(count, ?duration, "benchmark finished");

    Ok(BenchmarkResult {
        total_games: count,
        length,
        min_length,
        average_sub_words: if count == 0 {
            0.0
        } else {
            total_sub_words as f64 / count as f64
        },
        min_sub_words: if count == 0 { 0 } else { min_sub_words },
        max_sub_words,
        empty_games,
        distribution,
        duration,
        games_per_second: count as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}
