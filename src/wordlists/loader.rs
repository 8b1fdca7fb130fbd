//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use crate::error::Result;
use log::debug;
use std::fs;
use std::path::Path;

/// Load words from a file, one per line
///
/// Blank lines are skipped. Every other line must be a valid word.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or
/// [`crate::error::SolverError::InvalidWord`] for the first malformed line.
///
/// # Examples
/// ```no_run
/// use hintgrid_solver::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/answers.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| Word::new(line).map_err(Into::into))
        .collect::<Result<Vec<Word>>>()?;

    debug!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// Invalid entries are skipped.
///
/// # Examples
/// ```
/// use hintgrid_solver::wordlists::loader::words_from_slice;
/// use hintgrid_solver::wordlists::ANSWERS;
///
/// let words = words_from_slice(ANSWERS);
/// assert_eq!(words.len(), ANSWERS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|&s| Word::new(s).ok()).collect()
}
