//! Core domain types for the puzzle
//!
//! Words, per-column hints, hint rows and the hint grid. Everything here is pure
//! data plus the feedback model.

mod grid;
mod hint;
mod word;

pub use grid::HintGrid;
pub use hint::{Hint, HintRow, PositionHint, compute_feedback, is_solved};
pub use word::{Word, WordError};

/// Letters per word
pub const COLS: usize = 5;

/// Guesses allowed in one puzzle
pub const ROWS: usize = 6;
