//! Frequency-scored word selection

use super::calculator::{LetterFrequencies, score_word};
use crate::core::Word;
use rayon::prelude::*;

/// Select the highest-scoring word from `pool`
///
/// Ties go to the word that comes first in `pool`. Returns `None` for an
/// empty pool.
///
/// # Examples
/// ```
/// use hintgrid_solver::core::Word;
/// use hintgrid_solver::solver::frequency::{LetterFrequencies, select_best_guess};
///
/// let candidates = [Word::new("crane").unwrap(), Word::new("crate").unwrap()];
/// let refs: Vec<&Word> = candidates.iter().collect();
/// let frequencies = LetterFrequencies::from_candidates(&refs);
///
/// let (best, score) = select_best_guess(&refs, &frequencies).unwrap();
/// assert_eq!(best.text(), "crane");
/// assert!(score > 0.0);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    pool: &[&'a Word],
    frequencies: &LetterFrequencies,
) -> Option<(&'a Word, f64)> {
    pool.par_iter()
        .enumerate()
        .map(|(index, &word)| (index, word, score_word(word, frequencies)))
        .max_by(|(i1, _, s1), (i2, _, s2)| s1.total_cmp(s2).then_with(|| i2.cmp(i1)))
        .map(|(_, word, score)| (word, score))
}
