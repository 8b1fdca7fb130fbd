//! Average-case guess selection

use super::calculator::{GuessCost, evaluate_guess};
use crate::core::Word;
use rayon::prelude::*;

/// Select the guess with the lowest average remaining pool
///
/// Ties are broken by lower worst case, then by position in `guess_pool`.
/// Returns `None` if the pool is empty.
///
/// # Examples
/// ```
/// use hintgrid_solver::core::Word;
/// use hintgrid_solver::solver::exhaustive::select_best_guess;
///
/// let guesses = [Word::new("zzzzz").unwrap(), Word::new("slate").unwrap()];
/// let candidates = [Word::new("slate").unwrap(), Word::new("crony").unwrap()];
///
/// let guess_refs: Vec<&Word> = guesses.iter().collect();
/// let candidate_refs: Vec<&Word> = candidates.iter().collect();
///
/// let (best, cost) = select_best_guess(&guess_refs, &candidate_refs).unwrap();
/// assert_eq!(best.text(), "slate");
/// assert_eq!(cost.worst_case, 1);
/// ```
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &[&'a Word],
    candidates: &[&Word],
) -> Option<(&'a Word, GuessCost)> {
    // Every guess sees the same number of outcomes, so comparing totals
    // orders by average
    guess_pool
        .par_iter()
        .enumerate()
        .map(|(index, &guess)| (index, guess, evaluate_guess(guess, candidates)))
        .min_by_key(|(index, _, cost)| (cost.total_remaining, cost.worst_case, *index))
        .map(|(_, guess, cost)| (guess, cost))
}
