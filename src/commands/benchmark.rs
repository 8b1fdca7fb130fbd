//! Benchmark command
//!
//! Runs the benchmark engine on a worker thread and drives a progress bar from
//! its snapshots.

use crate::benchmark::{BenchmarkOptions, BenchmarkResult};
use crate::error::Result;
use crate::solver::StrategyConfig;
use crate::wordlists::Corpus;
use crate::worker::BenchmarkWorker;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;

const BAR_LENGTH: u64 = 1000;

/// Run a benchmark with a terminal progress bar
///
/// # Errors
///
/// Returns [`crate::error::SolverError::EmptyCorpus`] if there are no answers
/// to play, or an error if the worker thread cannot be started.
pub fn run_benchmark_command(
    corpus: Arc<Corpus>,
    config: StrategyConfig,
    options: BenchmarkOptions,
) -> Result<BenchmarkResult> {
    let worker = BenchmarkWorker::spawn(corpus, config, options)?;

    let pb = ProgressBar::new(BAR_LENGTH);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {percent}% | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    for snapshot in worker.snapshots() {
        pb.set_position((snapshot.progress * BAR_LENGTH as f64) as u64);
        pb.set_message(format!(
            "{} words, {:.3} avg, worst {}",
            snapshot.total_words, snapshot.average_case, snapshot.worst_case
        ));
    }

    let result = worker.join()?;
    if result.cancelled {
        pb.abandon_with_message("Cancelled");
    } else {
        pb.finish_with_message("Complete!");
    }
    Ok(result)
}
