//! Benchmark engine
//!
//! Plays a strategy against every answer in the corpus and aggregates the
//! guess-count distribution. The run is a plain synchronous loop; callers that
//! need to stay responsive run it on a worker thread (see
//! [`crate::worker::BenchmarkWorker`]) and stop it through a [`CancelToken`].

use crate::core::{HintGrid, HintRow, ROWS, Word};
use crate::error::{Result, SolverError};
use crate::solver::{Strategy, StrategyConfig, StrategyOptions, StrategyType};
use crate::wordlists::Corpus;
use log::{debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Guess ceiling for one simulated game, well above [`ROWS`]
pub const MAX_ATTEMPTS: usize = 20;

/// Minimum time between two progress callbacks
pub const PROGRESS_INTERVAL: Duration = Duration::from_millis(500);

/// Order in which answers are played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerOrder {
    /// Fresh random shuffle on every run
    #[default]
    Shuffled,
    /// Reproducible shuffle
    Seeded(u64),
    /// Corpus order, unshuffled
    CorpusOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkOptions {
    pub order: AnswerOrder,
    /// Play only the first `limit` answers after ordering
    pub limit: Option<usize>,
    pub max_attempts: usize,
    pub progress_interval: Duration,
}

impl Default for BenchmarkOptions {
    fn default() -> Self {
        Self {
            order: AnswerOrder::default(),
            limit: None,
            max_attempts: MAX_ATTEMPTS,
            progress_interval: PROGRESS_INTERVAL,
        }
    }
}

/// Shared flag checked between games
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// An answer that took more than [`ROWS`] guesses or was never found
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedAnswer {
    pub answer: String,
    /// Guesses actually played, in order
    pub guesses: Vec<String>,
}

/// Running statistics of a benchmark
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BenchmarkResult {
    /// Fraction of games played, in `[0, 1]`
    pub progress: f64,
    /// Games per guess count; bucket 0 holds unsolved games
    pub distribution: HashMap<usize, usize>,
    /// Games played so far
    pub total_words: usize,
    /// Guesses played so far, over every game
    pub total_guesses: usize,
    /// Wall-clock milliseconds per guess
    pub average_performance: f64,
    /// Most guesses used by a solved game
    pub worst_case: usize,
    /// Mean guesses per game
    pub average_case: f64,
    pub failed_answers: Vec<FailedAnswer>,
    /// Set when the run was stopped before playing every answer
    pub cancelled: bool,
    pub elapsed: Duration,
}

impl BenchmarkResult {
    /// Games in bucket `guesses`
    #[must_use]
    pub fn games_with(&self, guesses: usize) -> usize {
        self.distribution.get(&guesses).copied().unwrap_or(0)
    }

    /// Distribution as `(guesses, games)` pairs sorted by guess count
    #[must_use]
    pub fn sorted_distribution(&self) -> Vec<(usize, usize)> {
        let mut buckets: Vec<(usize, usize)> =
            self.distribution.iter().map(|(&k, &v)| (k, v)).collect();
        buckets.sort_unstable();
        buckets
    }

    /// Fold one finished game into the aggregates
    fn record(&mut self, outcome: &GameOutcome<'_>, elapsed: Duration) {
        let bucket = outcome.bucket();
        *self.distribution.entry(bucket).or_insert(0) += 1;

        self.total_words += 1;
        self.total_guesses += outcome.guesses.len();
        self.elapsed = elapsed;

        self.average_case = self.total_guesses as f64 / self.total_words as f64;
        if self.total_guesses > 0 {
            self.average_performance = elapsed.as_secs_f64() * 1000.0 / self.total_guesses as f64;
        }
        if outcome.solved {
            self.worst_case = self.worst_case.max(bucket);
        }
        if bucket == 0 || bucket > ROWS {
            self.failed_answers.push(FailedAnswer {
                answer: outcome.answer.text().to_string(),
                guesses: outcome.guesses.iter().map(|g| g.text().to_string()).collect(),
            });
        }
    }
}

/// One simulated game
#[derive(Debug, Clone)]
pub struct GameOutcome<'c> {
    pub answer: &'c Word,
    pub guesses: Vec<&'c Word>,
    pub grid: HintGrid,
    pub solved: bool,
}

impl GameOutcome<'_> {
    /// Distribution bucket: the guess count if solved, 0 otherwise
    #[must_use]
    pub fn bucket(&self) -> usize {
        if self.solved { self.guesses.len() } else { 0 }
    }
}

/// Play `strategy` against `answer` until solved, abandoned, or out of attempts
///
/// A strategy returning `None` abandons the game; that is an outcome, not an
/// error.
///
/// # Examples
/// ```
/// use hintgrid_solver::benchmark::{MAX_ATTEMPTS, play_game};
/// use hintgrid_solver::solver::{FirstCandidateStrategy, StrategyOptions};
/// use hintgrid_solver::wordlists::{Corpus, loader::words_from_slice};
///
/// let corpus = Corpus::answers_only(words_from_slice(&["crane", "slate", "trace"]));
/// let answer = &corpus.answers()[2];
///
/// let options = StrategyOptions::default();
/// let outcome = play_game(&FirstCandidateStrategy, &corpus, answer, &options, MAX_ATTEMPTS);
/// assert!(outcome.solved);
/// assert_eq!(outcome.guesses.last().unwrap().text(), "trace");
/// ```
pub fn play_game<'c, S: Strategy>(
    strategy: &S,
    corpus: &'c Corpus,
    answer: &'c Word,
    options: &StrategyOptions,
    max_attempts: usize,
) -> GameOutcome<'c> {
    let mut grid = HintGrid::with_row_limit(max_attempts);
    let mut guesses = Vec::new();
    let mut solved = false;

    while grid.len() < max_attempts {
        let Some(guess) = strategy.select_guess(corpus, &grid, options) else {
            debug!("no guess for {answer} after {} rows", grid.len());
            break;
        };

        let row = HintRow::compute(guess, answer);
        solved = row.is_solved();
        guesses.push(guess);
        if grid.push(row).is_err() || solved {
            break;
        }
    }

    GameOutcome {
        answer,
        guesses,
        grid,
        solved,
    }
}

/// Answers in play order, cut to `limit`
fn ordered_answers<'c>(corpus: &'c Corpus, options: &BenchmarkOptions) -> Vec<&'c Word> {
    let mut answers: Vec<&Word> = corpus.answers().iter().collect();
    match options.order {
        AnswerOrder::Shuffled => answers.shuffle(&mut rand::rng()),
        AnswerOrder::Seeded(seed) => answers.shuffle(&mut StdRng::seed_from_u64(seed)),
        AnswerOrder::CorpusOrder => {}
    }
    if let Some(limit) = options.limit {
        answers.truncate(limit);
    }
    answers
}

/// Run a benchmark over the corpus answers
///
/// `on_progress` receives a snapshot once at the start (progress 0), whenever
/// `progress_interval` has passed since the previous call, and once at the end.
/// The final snapshot has progress 1 unless the run was cancelled.
///
/// # Errors
/// Returns [`SolverError::EmptyCorpus`] if there is nothing to play.
pub fn run_benchmark<F>(
    corpus: &Corpus,
    config: &StrategyConfig,
    options: &BenchmarkOptions,
    cancel: &CancelToken,
    mut on_progress: F,
) -> Result<BenchmarkResult>
where
    F: FnMut(&BenchmarkResult),
{
    let answers = ordered_answers(corpus, options);
    if answers.is_empty() {
        return Err(SolverError::EmptyCorpus);
    }

    let strategy = StrategyType::from(config.strategy);
    let total = answers.len();
    info!("benchmarking {} over {total} answers", config.strategy);

    let mut result = BenchmarkResult::default();
    on_progress(&result);

    let start = Instant::now();
    let mut last_report = start;

    for (index, &answer) in answers.iter().enumerate() {
        if cancel.is_cancelled() {
            info!("benchmark cancelled after {index} of {total} games");
            result.cancelled = true;
            break;
        }

        let outcome = play_game(&strategy, corpus, answer, &config.options, options.max_attempts);
        result.record(&outcome, start.elapsed());
        result.progress = (index + 1) as f64 / total as f64;

        if last_report.elapsed() >= options.progress_interval {
            last_report = Instant::now();
            on_progress(&result);
        }
    }

    if !result.cancelled {
        result.progress = 1.0;
    }
    result.elapsed = start.elapsed();
    on_progress(&result);

    info!(
        "benchmark finished: {} games, {:.3} average, worst {}",
        result.total_words, result.average_case, result.worst_case
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstCandidateStrategy, StrategyId};
    use crate::wordlists::loader::words_from_slice;

    fn small_corpus() -> Corpus {
        Corpus::answers_only(words_from_slice(&["crane", "slate", "trace"]))
    }

    fn ordered(limit: Option<usize>) -> BenchmarkOptions {
        BenchmarkOptions {
            order: AnswerOrder::CorpusOrder,
            limit,
            ..BenchmarkOptions::default()
        }
    }

    fn config(strategy: StrategyId) -> StrategyConfig {
        StrategyConfig::new(strategy, StrategyOptions::default())
    }

    #[test]
    fn baseline_solves_first_answer_in_one() {
        let corpus = small_corpus();
        let result = run_benchmark(
            &corpus,
            &config(StrategyId::First),
            &ordered(Some(1)),
            &CancelToken::new(),
            |_| {},
        )
        .unwrap();

        assert_eq!(result.games_with(1), 1);
        assert_eq!(result.worst_case, 1);
        assert_eq!(result.total_words, 1);
        assert!((result.progress - 1.0).abs() < f64::EPSILON);
        assert!(result.failed_answers.is_empty());
    }

    #[test]
    fn baseline_full_small_corpus() {
        let corpus = small_corpus();
        let result = run_benchmark(
            &corpus,
            &config(StrategyId::First),
            &ordered(None),
            &CancelToken::new(),
            |_| {},
        )
        .unwrap();

        // crane: 1, slate: crane then slate, trace: crane then trace
        assert_eq!(result.games_with(1), 1);
        assert_eq!(result.games_with(2), 2);
        assert_eq!(result.worst_case, 2);
        assert_eq!(result.total_guesses, 5);
        assert!((result.average_case - 5.0 / 3.0).abs() < 1e-12);
        assert_eq!(result.sorted_distribution(), vec![(1, 1), (2, 2)]);
    }

    #[test]
    fn empty_corpus_is_an_error() {
        let corpus = Corpus::default();
        let mut calls = 0;
        let result = run_benchmark(
            &corpus,
            &config(StrategyId::First),
            &BenchmarkOptions::default(),
            &CancelToken::new(),
            |_| calls += 1,
        );

        assert!(matches!(result, Err(SolverError::EmptyCorpus)));
        assert_eq!(calls, 0);
    }

    #[test]
    fn zero_limit_is_an_empty_run() {
        let corpus = small_corpus();
        let result = run_benchmark(
            &corpus,
            &config(StrategyId::First),
            &ordered(Some(0)),
            &CancelToken::new(),
            |_| {},
        );
        assert!(matches!(result, Err(SolverError::EmptyCorpus)));
    }

    #[test]
    fn progress_starts_at_zero_and_ends_at_one() {
        let corpus = small_corpus();
        let mut snapshots = Vec::new();
        run_benchmark(
            &corpus,
            &config(StrategyId::ScoredLetters),
            &ordered(None),
            &CancelToken::new(),
            |r| snapshots.push(r.progress),
        )
        .unwrap();

        assert!(snapshots.len() >= 2);
        assert!(snapshots[0].abs() < f64::EPSILON);
        assert!((snapshots[snapshots.len() - 1] - 1.0).abs() < f64::EPSILON);
        assert!(snapshots.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn zero_interval_reports_after_every_game() {
        let corpus = small_corpus();
        let options = BenchmarkOptions {
            progress_interval: Duration::ZERO,
            ..ordered(None)
        };
        let mut calls = 0;
        run_benchmark(
            &corpus,
            &config(StrategyId::First),
            &options,
            &CancelToken::new(),
            |_| calls += 1,
        )
        .unwrap();

        // start + one per game + end
        assert_eq!(calls, 5);
    }

    #[test]
    fn cancelled_before_start_plays_nothing() {
        let corpus = small_corpus();
        let cancel = CancelToken::new();
        cancel.cancel();

        let result = run_benchmark(
            &corpus,
            &config(StrategyId::First),
            &ordered(None),
            &cancel,
            |_| {},
        )
        .unwrap();

        assert!(result.cancelled);
        assert_eq!(result.total_words, 0);
        assert!(result.progress < 1.0);
    }

    #[test]
    fn cancel_from_callback_stops_between_games() {
        let corpus = small_corpus();
        let cancel = CancelToken::new();
        let options = BenchmarkOptions {
            progress_interval: Duration::ZERO,
            ..ordered(None)
        };

        let trigger = cancel.clone();
        let result = run_benchmark(
            &corpus,
            &config(StrategyId::First),
            &options,
            &cancel,
            |r| {
                if r.total_words == 1 {
                    trigger.cancel();
                }
            },
        )
        .unwrap();

        assert!(result.cancelled);
        assert_eq!(result.total_words, 1);
    }

    #[test]
    fn seeded_order_is_reproducible() {
        let corpus = Corpus::embedded();
        let options = BenchmarkOptions {
            order: AnswerOrder::Seeded(7),
            limit: Some(20),
            ..BenchmarkOptions::default()
        };

        let first: Vec<String> = ordered_answers(&corpus, &options)
            .into_iter()
            .map(|w| w.text().to_string())
            .collect();
        let again: Vec<String> = ordered_answers(&corpus, &options)
            .into_iter()
            .map(|w| w.text().to_string())
            .collect();
        assert_eq!(first, again);
        assert_eq!(first.len(), 20);
    }

    #[test]
    fn abandoned_game_goes_to_bucket_zero() {
        let corpus = small_corpus();
        let stranger = Word::new("zzzzz").unwrap();

        let outcome = play_game(
            &FirstCandidateStrategy,
            &corpus,
            &stranger,
            &StrategyOptions::default(),
            MAX_ATTEMPTS,
        );

        // CRANE comes back all grey, which rules out every answer
        assert!(!outcome.solved);
        assert_eq!(outcome.bucket(), 0);
        assert_eq!(outcome.guesses.len(), 1);

        let mut result = BenchmarkResult::default();
        result.record(&outcome, Duration::from_millis(3));
        assert_eq!(result.games_with(0), 1);
        assert_eq!(result.worst_case, 0);
        assert_eq!(result.failed_answers.len(), 1);
        assert_eq!(result.failed_answers[0].answer, "zzzzz");
        assert_eq!(result.failed_answers[0].guesses, ["crane"]);
        assert!((result.average_performance - 3.0).abs() < 1e-9);
    }

    #[test]
    fn attempt_ceiling_stops_the_game() {
        let corpus = small_corpus();
        let answer = &corpus.answers()[2];

        let outcome = play_game(
            &FirstCandidateStrategy,
            &corpus,
            answer,
            &StrategyOptions::default(),
            1,
        );
        assert!(!outcome.solved);
        assert_eq!(outcome.guesses.len(), 1);
        assert_eq!(outcome.grid.len(), 1);
    }
}
