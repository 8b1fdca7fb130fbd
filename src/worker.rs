//! Request/response boundary and background workers
//!
//! [`handle_request`] is the pure entry point a UI or another process calls
//! with raw hint data. [`GuessWorker`] and [`BenchmarkWorker`] run the same
//! computations on dedicated threads and hand results back over
//! `crossbeam-channel` channels.

use crate::benchmark::{BenchmarkOptions, BenchmarkResult, CancelToken, run_benchmark};
use crate::core::{Hint, HintGrid, HintRow, PositionHint};
use crate::error::{Result, SolverError};
use crate::solver::{Strategy, StrategyConfig, StrategyId, StrategyOptions, StrategyType};
use crate::wordlists::Corpus;
use crossbeam_channel::{Receiver, Sender, bounded, unbounded};
use log::{debug, warn};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

/// One hint as it crosses the boundary: unvalidated letter, column and code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawHint {
    pub char: char,
    pub index: usize,
    /// 0 unknown, 1 correct spot, 2 wrong spot, 3 no spot
    pub position_hint: u8,
}

impl RawHint {
    #[must_use]
    pub const fn new(char: char, index: usize, position_hint: u8) -> Self {
        Self {
            char,
            index,
            position_hint,
        }
    }

    /// Validate into a [`Hint`]
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidHint`] for a code outside `0..=3`, or the
    /// [`Hint::new`] errors for a bad letter or column.
    pub fn to_hint(self) -> Result<Hint> {
        let position = PositionHint::try_from(self.position_hint)?;
        Hint::new(self.char, self.index, position)
    }
}

impl From<Hint> for RawHint {
    fn from(hint: Hint) -> Self {
        Self::new(char::from(hint.letter()), hint.column(), hint.position().code())
    }
}

/// Rows of raw hints, oldest first
pub type RawGrid = Vec<Vec<RawHint>>;

/// Encode a grid for the boundary
#[must_use]
pub fn raw_grid(grid: &HintGrid) -> RawGrid {
    grid.rows()
        .iter()
        .map(|row| row.hints().iter().copied().map(RawHint::from).collect())
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRequest {
    pub strategy: StrategyId,
    pub hint_grid: RawGrid,
    pub options: StrategyOptions,
}

impl GuessRequest {
    #[must_use]
    pub const fn new(strategy: StrategyId, hint_grid: RawGrid, options: StrategyOptions) -> Self {
        Self {
            strategy,
            hint_grid,
            options,
        }
    }

    /// Validate the raw rows into a grid
    ///
    /// # Errors
    /// Returns the first hint, row or grid validation error.
    pub fn grid(&self) -> Result<HintGrid> {
        let rows = self
            .hint_grid
            .iter()
            .map(|row| {
                let hints = row
                    .iter()
                    .copied()
                    .map(RawHint::to_hint)
                    .collect::<Result<Vec<_>>>()?;
                HintRow::new(hints)
            })
            .collect::<Result<Vec<_>>>()?;
        HintGrid::from_rows(rows)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuessResponse {
    /// `None` when no answer fits the hints
    pub word: Option<String>,
}

/// Answer one strategy request
///
/// # Errors
/// Returns a validation error if the raw grid is malformed. Running out of
/// candidates is a `None` word, not an error.
///
/// # Examples
/// ```
/// use hintgrid_solver::solver::{StrategyId, StrategyOptions};
/// use hintgrid_solver::worker::{GuessRequest, handle_request};
/// use hintgrid_solver::wordlists::{Corpus, loader::words_from_slice};
///
/// let corpus = Corpus::answers_only(words_from_slice(&["crane", "slate"]));
/// let request = GuessRequest::new(StrategyId::First, Vec::new(), StrategyOptions::default());
///
/// let response = handle_request(&corpus, &request).unwrap();
/// assert_eq!(response.word.as_deref(), Some("crane"));
/// ```
pub fn handle_request(corpus: &Corpus, request: &GuessRequest) -> Result<GuessResponse> {
    let grid = request.grid()?;
    let strategy = StrategyType::from(request.strategy);
    let word = strategy
        .select_guess(corpus, &grid, &request.options)
        .map(|w| w.text().to_string());

    if word.is_none() && !grid.is_solved() {
        warn!("no candidate fits {} rows of hints", grid.len());
    }
    Ok(GuessResponse { word })
}

struct GuessJob {
    request: GuessRequest,
    reply: Sender<Result<GuessResponse>>,
}

/// A dedicated thread answering guess requests one at a time
pub struct GuessWorker {
    jobs: Option<Sender<GuessJob>>,
    handle: Option<JoinHandle<()>>,
}

impl GuessWorker {
    /// Start the worker thread
    ///
    /// # Errors
    /// Returns an I/O error if the thread cannot be spawned.
    pub fn spawn(corpus: Arc<Corpus>) -> Result<Self> {
        let (jobs, queue) = bounded::<GuessJob>(1);

        let handle = thread::Builder::new()
            .name("guess-worker".to_string())
            .spawn(move || {
                for job in queue {
                    let response = handle_request(&corpus, &job.request);
                    if job.reply.send(response).is_err() {
                        debug!("guess reply dropped by caller");
                    }
                }
            })?;

        Ok(Self {
            jobs: Some(jobs),
            handle: Some(handle),
        })
    }

    /// Queue a request and return a handle to its reply
    ///
    /// Blocks while another request is waiting to be picked up.
    ///
    /// # Errors
    /// Returns [`SolverError::WorkerDisconnected`] if the thread has stopped.
    pub fn submit(&self, request: GuessRequest) -> Result<PendingGuess> {
        let jobs = self.jobs.as_ref().ok_or(SolverError::WorkerDisconnected)?;
        let (reply, response) = bounded(1);
        jobs.send(GuessJob { request, reply })
            .map_err(|_| SolverError::WorkerDisconnected)?;
        Ok(PendingGuess { response })
    }

    /// Submit and wait for the reply
    ///
    /// # Errors
    /// See [`GuessWorker::submit`] and [`handle_request`].
    pub fn request(&self, request: GuessRequest) -> Result<GuessResponse> {
        self.submit(request)?.wait()
    }
}

impl Drop for GuessWorker {
    fn drop(&mut self) {
        // Closing the queue ends the worker loop
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                warn!("guess worker panicked");
            }
        }
    }
}

/// Reply slot for a submitted request
#[derive(Debug)]
pub struct PendingGuess {
    response: Receiver<Result<GuessResponse>>,
}

impl PendingGuess {
    /// Block until the worker replies
    ///
    /// # Errors
    /// Returns [`SolverError::WorkerDisconnected`] if the worker went away, or
    /// the request's own error.
    pub fn wait(self) -> Result<GuessResponse> {
        self.response
            .recv()
            .map_err(|_| SolverError::WorkerDisconnected)?
    }

    /// The reply, if it has arrived
    #[must_use]
    pub fn try_wait(&self) -> Option<Result<GuessResponse>> {
        self.response.try_recv().ok()
    }
}

/// Keeps at most one request in flight for one logical caller
///
/// A new request waits out the superseded one and discards its reply, so the
/// caller only ever sees the answer to its latest grid.
pub struct GuessSession<'w> {
    worker: &'w GuessWorker,
    pending: Option<PendingGuess>,
}

impl<'w> GuessSession<'w> {
    #[must_use]
    pub const fn new(worker: &'w GuessWorker) -> Self {
        Self {
            worker,
            pending: None,
        }
    }

    /// Replace any pending request with `request`
    ///
    /// # Errors
    /// Returns [`SolverError::WorkerDisconnected`] if the worker has stopped.
    pub fn request(&mut self, request: GuessRequest) -> Result<()> {
        if let Some(previous) = self.pending.take() {
            debug!("superseding pending guess request");
            // The reply is stale either way; only a dead worker matters
            if let Err(SolverError::WorkerDisconnected) = previous.wait() {
                return Err(SolverError::WorkerDisconnected);
            }
        }
        self.pending = Some(self.worker.submit(request)?);
        Ok(())
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Wait for the latest request's reply; `None` if nothing is pending
    ///
    /// # Errors
    /// See [`PendingGuess::wait`].
    pub fn wait(&mut self) -> Result<Option<GuessResponse>> {
        self.pending.take().map(PendingGuess::wait).transpose()
    }
}

/// A benchmark running on its own thread
///
/// Snapshots arrive on [`BenchmarkWorker::snapshots`]; the channel closes when
/// the run ends.
pub struct BenchmarkWorker {
    snapshots: Receiver<BenchmarkResult>,
    cancel: CancelToken,
    handle: JoinHandle<Result<BenchmarkResult>>,
}

impl BenchmarkWorker {
    /// Start a benchmark
    ///
    /// # Errors
    /// Returns an I/O error if the thread cannot be spawned.
    pub fn spawn(
        corpus: Arc<Corpus>,
        config: StrategyConfig,
        options: BenchmarkOptions,
    ) -> Result<Self> {
        Self::spawn_with_cancel(corpus, config, options, CancelToken::new())
    }

    /// Start a benchmark that stops once `cancel` is set
    ///
    /// # Errors
    /// Returns an I/O error if the thread cannot be spawned.
    pub fn spawn_with_cancel(
        corpus: Arc<Corpus>,
        config: StrategyConfig,
        options: BenchmarkOptions,
        cancel: CancelToken,
    ) -> Result<Self> {
        let (tx, snapshots) = unbounded();
        let token = cancel.clone();

        let handle = thread::Builder::new()
            .name("benchmark-worker".to_string())
            .spawn(move || {
                let stop = token.clone();
                run_benchmark(&corpus, &config, &options, &token, |snapshot| {
                    if tx.send(snapshot.clone()).is_err() {
                        // Nobody is listening any more
                        stop.cancel();
                    }
                })
            })?;

        Ok(Self {
            snapshots,
            cancel,
            handle,
        })
    }

    #[must_use]
    pub const fn snapshots(&self) -> &Receiver<BenchmarkResult> {
        &self.snapshots
    }

    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Ask the run to stop after the current game
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Wait for the run to end and return the final result
    ///
    /// # Errors
    /// Returns the benchmark's own error, or
    /// [`SolverError::WorkerDisconnected`] if the thread panicked.
    pub fn join(self) -> Result<BenchmarkResult> {
        self.handle
            .join()
            .map_err(|_| SolverError::WorkerDisconnected)?
    }
}
