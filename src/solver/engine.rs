//! Main solver interface

use super::strategy::{Strategy, StrategyOptions};
use crate::core::{HintGrid, Word};
use crate::filter::filter_candidates;
use crate::wordlists::Corpus;

/// Main solver
///
/// Binds a strategy and its options to a corpus.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    corpus: &'a Corpus,
    options: StrategyOptions,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a solver with default options
    pub fn new(strategy: S, corpus: &'a Corpus) -> Self {
        Self::with_options(strategy, corpus, StrategyOptions::default())
    }

    pub const fn with_options(strategy: S, corpus: &'a Corpus, options: StrategyOptions) -> Self {
        Self {
            strategy,
            corpus,
            options,
        }
    }

    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    #[must_use]
    pub const fn corpus(&self) -> &'a Corpus {
        self.corpus
    }

    #[must_use]
    pub const fn options(&self) -> StrategyOptions {
        self.options
    }

    /// Get the next guess for the feedback so far
    ///
    /// Returns `None` if the grid is already solved or no candidates remain.
    pub fn next_guess(&self, grid: &HintGrid) -> Option<&'a Word> {
        if grid.is_solved() {
            return None;
        }
        self.strategy.select_guess(self.corpus, grid, &self.options)
    }

    /// Answers still consistent with the grid, in corpus order
    pub fn candidates(&self, grid: &HintGrid) -> Vec<&'a Word> {
        filter_candidates(self.corpus.answers(), grid)
    }

    /// Count how many answers remain given the grid
    pub fn count_candidates(&self, grid: &HintGrid) -> usize {
        self.candidates(grid).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HintRow;
    use crate::solver::strategy::{
        FirstCandidateStrategy, ScoredLettersStrategy, StrategyId, StrategyType,
    };
    use crate::wordlists::loader::words_from_slice;

    fn setup_corpus() -> Corpus {
        Corpus::new(
            words_from_slice(&["irate", "crate", "grate"]),
            words_from_slice(&["crane", "slate"]),
        )
    }

    fn row(guess: &str, answer: &str) -> HintRow {
        HintRow::compute(&Word::new(guess).unwrap(), &Word::new(answer).unwrap())
    }

    #[test]
    fn next_guess_with_empty_grid() {
        let corpus = setup_corpus();
        let solver = Solver::new(ScoredLettersStrategy, &corpus);

        let guess = solver.next_guess(&HintGrid::new());
        assert!(guess.is_some());
        assert!(corpus.find(guess.unwrap().text()).is_some());
    }

    #[test]
    fn next_guess_filters_candidates() {
        let corpus = setup_corpus();
        let solver = Solver::new(FirstCandidateStrategy, &corpus);

        let grid = HintGrid::from_rows([row("crane", "grate")]).unwrap();
        let next = solver.next_guess(&grid).unwrap();

        assert_eq!(next.text(), "irate");
    }

    #[test]
    fn next_guess_returns_none_when_no_candidates() {
        let corpus = setup_corpus();
        let solver = Solver::new(StrategyType::from(StrategyId::ScoredLetters), &corpus);

        // Claim Z sits in the first column: no answer has one
        let zzzzz = Word::new("zzzzz").unwrap();
        let grid = HintGrid::from_rows([HintRow::from_feedback(&zzzzz, "g????").unwrap()]).unwrap();

        assert!(solver.next_guess(&grid).is_none());
    }

    #[test]
    fn next_guess_returns_none_once_solved() {
        let corpus = setup_corpus();
        let solver = Solver::new(FirstCandidateStrategy, &corpus);

        let grid = HintGrid::from_rows([row("crate", "crate")]).unwrap();
        assert!(solver.next_guess(&grid).is_none());
    }

    #[test]
    fn count_candidates_never_grows() {
        let corpus = setup_corpus();
        let solver = Solver::new(FirstCandidateStrategy, &corpus);

        let mut grid = HintGrid::new();
        let mut previous = solver.count_candidates(&grid);
        assert_eq!(previous, corpus.answers().len());

        for guess in ["crane", "slate", "irate"] {
            grid.push(row(guess, "grate")).unwrap();
            let remaining = solver.count_candidates(&grid);
            assert!(remaining <= previous);
            previous = remaining;
        }
    }

    #[test]
    fn candidates_exact_match() {
        let corpus = setup_corpus();
        let solver = Solver::new(FirstCandidateStrategy, &corpus);

        let grid = HintGrid::from_rows([row("irate", "irate")]).unwrap();
        let candidates = solver.candidates(&grid);

        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].text(), "irate");
    }

    #[test]
    fn candidates_keep_the_answer_across_guesses() {
        let corpus = setup_corpus();
        let solver = Solver::new(FirstCandidateStrategy, &corpus);

        let grid = HintGrid::from_rows([row("crane", "grate"), row("irate", "grate")]).unwrap();
        let candidates = solver.candidates(&grid);

        assert!(candidates.iter().any(|w| w.text() == "grate"));
        assert!(candidates.len() <= corpus.answers().len());
    }
}
