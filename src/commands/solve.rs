//! Word solving command
//!
//! Plays one game against a known answer and reports every step.

use crate::benchmark::play_game;
use crate::core::{HintGrid, HintRow, ROWS, Word};
use crate::error::Result;
use crate::solver::{Solver, Strategy};

/// Configuration for solving a word
pub struct SolveConfig {
    pub target: String,
    pub max_guesses: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            max_guesses: ROWS,
        }
    }
}

/// Result of solving a word
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub target: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub row: HintRow,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific word using the given solver
///
/// The target does not have to be in the corpus; a strategy that runs out of
/// candidates ends the game unsolved.
///
/// # Errors
///
/// Returns an error if the target is not a valid word.
pub fn solve_word<S: Strategy>(config: SolveConfig, solver: &Solver<S>) -> Result<SolveResult> {
    let target = Word::new(&config.target)?;
    let outcome = play_game(
        solver.strategy(),
        solver.corpus(),
        &target,
        &solver.options(),
        config.max_guesses,
    );

    let mut grid = HintGrid::with_row_limit(config.max_guesses);
    let mut guesses = Vec::with_capacity(outcome.grid.len());
    for row in outcome.grid.rows() {
        let candidates_before = solver.count_candidates(&grid);
        grid.push(row.clone())?;
        guesses.push(GuessStep {
            row: row.clone(),
            candidates_before,
            candidates_after: solver.count_candidates(&grid),
        });
    }

    Ok(SolveResult {
        success: outcome.solved,
        guesses,
        target: target.text().to_string(),
    })
}
