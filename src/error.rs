//! Error types shared across the solver

use crate::core::WordError;
use thiserror::Error;

/// Errors raised by the filter, strategies, benchmark engine and workers
///
/// Running out of candidates is not represented here: strategies return
/// `None` for that case.
#[derive(Debug, Error)]
pub enum SolverError {
    /// A raw position hint code outside `0..=3`, or an unknown feedback symbol
    #[error("invalid position hint: {0}")]
    InvalidHint(String),

    /// Command-line input that does not parse
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("hint character {0:?} is not an ASCII letter")]
    InvalidCharacter(char),

    #[error("column {column} is out of range (columns are 0..{columns})")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("hint row has {actual} hints, expected {expected}")]
    RowLength { expected: usize, actual: usize },

    #[error("hint row covers column {0} more than once")]
    DuplicateColumn(usize),

    #[error("hint grid is full ({limit} rows)")]
    GridFull { limit: usize },

    #[error("row {index} does not exist (grid has {len} rows)")]
    RowIndexOutOfRange { index: usize, len: usize },

    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error("the answer corpus is empty")]
    EmptyCorpus,

    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),

    #[error("worker thread disconnected")]
    WorkerDisconnected,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the library
pub type Result<T, E = SolverError> = std::result::Result<T, E>;
