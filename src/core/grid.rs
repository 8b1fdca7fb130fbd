//! The accumulated feedback history of one puzzle

use super::{HintRow, ROWS};
use crate::error::{Result, SolverError};

/// Ordered feedback rows for the current puzzle, one per guess
///
/// A grid never holds more rows than its limit ([`ROWS`] unless built with
/// [`HintGrid::with_row_limit`]). Editing a row discards every row after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintGrid {
    rows: Vec<HintRow>,
    row_limit: usize,
}

impl Default for HintGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl HintGrid {
    /// An empty grid limited to [`ROWS`] rows
    #[must_use]
    pub const fn new() -> Self {
        Self::with_row_limit(ROWS)
    }

    /// An empty grid with a custom row limit
    ///
    /// The benchmark engine uses this to simulate games past the puzzle's row count.
    #[must_use]
    pub const fn with_row_limit(row_limit: usize) -> Self {
        Self {
            rows: Vec::new(),
            row_limit,
        }
    }

    /// Build a grid limited to [`ROWS`] from existing rows
    ///
    /// # Errors
    /// Returns [`SolverError::GridFull`] if there are more than [`ROWS`] rows.
    pub fn from_rows(rows: impl IntoIterator<Item = HintRow>) -> Result<Self> {
        let mut grid = Self::new();
        for row in rows {
            grid.push(row)?;
        }
        Ok(grid)
    }

    /// Append the feedback for the next guess
    ///
    /// # Errors
    /// Returns [`SolverError::GridFull`] if the row limit is reached.
    pub fn push(&mut self, row: HintRow) -> Result<()> {
        if self.rows.len() >= self.row_limit {
            return Err(SolverError::GridFull {
                limit: self.row_limit,
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Replace row `index` and discard every later row
    ///
    /// # Errors
    /// Returns [`SolverError::RowIndexOutOfRange`] if `index` is not an existing row.
    pub fn edit_row(&mut self, index: usize, row: HintRow) -> Result<()> {
        if index >= self.rows.len() {
            return Err(SolverError::RowIndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        self.truncate(index);
        self.rows.push(row);
        Ok(())
    }

    /// Keep only the first `len` rows
    pub fn truncate(&mut self, len: usize) {
        self.rows.truncate(len);
    }

    /// Remove and return the last row (undo)
    pub fn pop(&mut self) -> Option<HintRow> {
        self.rows.pop()
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[HintRow] {
        &self.rows
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn row_limit(&self) -> usize {
        self.row_limit
    }

    #[must_use]
    pub fn last_row(&self) -> Option<&HintRow> {
        self.rows.last()
    }

    /// Attempts left before the puzzle's [`ROWS`] are used up
    #[must_use]
    pub fn remaining_attempts(&self) -> usize {
        ROWS.saturating_sub(self.rows.len())
    }

    /// True if the last row is all [`super::PositionHint::CorrectSpot`]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.last_row().is_some_and(HintRow::is_solved)
    }
}
