//! Remaining-candidate cost of a single guess

use crate::core::{HintRow, Word};
use crate::filter::count_admitted;
use rustc_hash::FxHashMap;

/// How many candidates a guess leaves behind, summed and maximised over every
/// candidate taken as the hypothetical answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GuessCost {
    /// Sum of remaining candidates over all hypothetical answers
    pub total_remaining: usize,
    /// Largest remaining pool for any hypothetical answer
    pub worst_case: usize,
    /// Number of hypothetical answers evaluated
    pub outcomes: usize,
}

impl GuessCost {
    /// Mean remaining pool size, 0 when nothing was evaluated
    #[must_use]
    pub fn average(&self) -> f64 {
        if self.outcomes == 0 {
            0.0
        } else {
            self.total_remaining as f64 / self.outcomes as f64
        }
    }
}

/// Play `guess` against each candidate and count what the resulting row admits
///
/// Candidates that produce the same feedback share one filter pass.
///
/// # Examples
/// ```
/// use hintgrid_solver::core::Word;
/// use hintgrid_solver::solver::exhaustive::evaluate_guess;
///
/// let candidates = [Word::new("crane").unwrap(), Word::new("zzzzz").unwrap()];
/// let refs: Vec<&Word> = candidates.iter().collect();
///
/// let cost = evaluate_guess(&candidates[0], &refs);
/// assert_eq!(cost.worst_case, 1);
/// assert_eq!(cost.total_remaining, 2);
/// ```
#[must_use]
pub fn evaluate_guess(guess: &Word, candidates: &[&Word]) -> GuessCost {
    let mut admitted: FxHashMap<u16, usize> = FxHashMap::default();
    let mut cost = GuessCost::default();

    for &answer in candidates {
        let row = HintRow::compute(guess, answer);
        let remaining = *admitted
            .entry(row.code())
            .or_insert_with(|| count_admitted(candidates, &row));

        cost.total_remaining += remaining;
        cost.worst_case = cost.worst_case.max(remaining);
        cost.outcomes += 1;
    }

    cost
}
