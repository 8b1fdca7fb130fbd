//! One-shot next-guess command
//!
//! Takes the rows played so far as `word:feedback` pairs and prints the
//! strategy's next guess.

use crate::core::{HintRow, Word};
use crate::error::{Result, SolverError};
use crate::solver::StrategyConfig;
use crate::wordlists::Corpus;
use crate::worker::{GuessRequest, GuessResponse, RawHint, handle_request};

/// Parse one `word:feedback` entry, e.g. `crane:--g-g`
///
/// # Errors
/// Returns an error if the separator is missing, the word is invalid, or the
/// feedback is malformed.
pub fn parse_entry(entry: &str) -> Result<HintRow> {
    let (word, feedback) = entry.split_once(':').ok_or_else(|| {
        SolverError::InvalidInput(format!("expected word:feedback, got {entry:?}"))
    })?;
    let word = Word::new(word.trim())?;
    HintRow::from_feedback(&word, feedback.trim())
}

/// Build a request from `word:feedback` entries and answer it
///
/// # Errors
/// Returns the first parse or validation error.
pub fn next_guess(
    corpus: &Corpus,
    config: &StrategyConfig,
    entries: &[String],
) -> Result<GuessResponse> {
    let hint_grid = entries
        .iter()
        .map(|entry| -> Result<Vec<RawHint>> {
            let row = parse_entry(entry)?;
            Ok(row.hints().iter().copied().map(RawHint::from).collect())
        })
        .collect::<Result<Vec<_>>>()?;

    let request = GuessRequest::new(config.strategy, hint_grid, config.options);
    handle_request(corpus, &request)
}
