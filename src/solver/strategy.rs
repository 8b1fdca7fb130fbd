//! Guess selection strategies
//!
//! Defines the Strategy trait, the closed set of strategy identifiers, and the
//! concrete implementations.

use super::exhaustive;
use super::frequency::{self, LetterFrequencies};
use crate::core::{HintGrid, Word};
use crate::error::SolverError;
use crate::filter::{GridFilter, filter_candidates};
use crate::wordlists::Corpus;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// Candidate pools above this size skip the exhaustive search
pub const DEFAULT_CANDIDATE_CAP: usize = 100;

/// A policy for choosing the next guess from accumulated feedback
pub trait Strategy {
    /// Select the next guess for `grid`
    ///
    /// Returns `None` when no answer is consistent with the grid.
    fn select_guess<'c>(
        &self,
        corpus: &'c Corpus,
        grid: &HintGrid,
        options: &StrategyOptions,
    ) -> Option<&'c Word>;
}

/// Options passed to every strategy call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrategyOptions {
    /// Accepted but not acted on: no strategy restricts its guess pool in hard mode
    pub hard_mode: bool,
}

/// Identifier of a registered strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StrategyId {
    /// First consistent answer in corpus order
    First,
    /// Letter-frequency scoring over answers and guess-only words
    #[default]
    ScoredLetters,
    /// Exhaustive average-case search over small candidate pools
    BestPermutations,
}

impl StrategyId {
    pub const ALL: [Self; 3] = [Self::First, Self::ScoredLetters, Self::BestPermutations];

    /// Name used at the request boundary
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::First => "FIRST",
            Self::ScoredLetters => "SCORED_LETTERS",
            Self::BestPermutations => "BEST_PERMUTATIONS",
        }
    }
}

impl fmt::Display for StrategyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StrategyId {
    type Err = SolverError;

    /// Parse a boundary name or a CLI alias, ignoring case
    ///
    /// Supported: "first"/"baseline", "scored_letters"/"frequency",
    /// "best_permutations"/"exhaustive"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "first" | "baseline" => Ok(Self::First),
            "scored_letters" | "frequency" => Ok(Self::ScoredLetters),
            "best_permutations" | "exhaustive" => Ok(Self::BestPermutations),
            _ => Err(SolverError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Strategy selection plus its options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StrategyConfig {
    pub strategy: StrategyId,
    pub options: StrategyOptions,
}

impl StrategyConfig {
    #[must_use]
    pub const fn new(strategy: StrategyId, options: StrategyOptions) -> Self {
        Self { strategy, options }
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    First(FirstCandidateStrategy),
    ScoredLetters(ScoredLettersStrategy),
    BestPermutations(ExhaustiveStrategy),
}

impl StrategyType {
    /// Which identifier this strategy is registered under
    #[must_use]
    pub const fn id(&self) -> StrategyId {
        match self {
            Self::First(_) => StrategyId::First,
            Self::ScoredLetters(_) => StrategyId::ScoredLetters,
            Self::BestPermutations(_) => StrategyId::BestPermutations,
        }
    }
}

impl From<StrategyId> for StrategyType {
    fn from(id: StrategyId) -> Self {
        match id {
            StrategyId::First => Self::First(FirstCandidateStrategy),
            StrategyId::ScoredLetters => Self::ScoredLetters(ScoredLettersStrategy),
            StrategyId::BestPermutations => Self::BestPermutations(ExhaustiveStrategy::default()),
        }
    }
}

impl Strategy for StrategyType {
    fn select_guess<'c>(
        &self,
        corpus: &'c Corpus,
        grid: &HintGrid,
        options: &StrategyOptions,
    ) -> Option<&'c Word> {
        if grid.is_solved() {
            return None;
        }
        if options.hard_mode {
            debug!("hard mode requested; {} ignores it", self.id());
        }
        match self {
            Self::First(s) => s.select_guess(corpus, grid, options),
            Self::ScoredLetters(s) => s.select_guess(corpus, grid, options),
            Self::BestPermutations(s) => s.select_guess(corpus, grid, options),
        }
    }
}

/// Baseline strategy
///
/// Returns the first answer, in corpus order, consistent with the grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstCandidateStrategy;

impl Strategy for FirstCandidateStrategy {
    fn select_guess<'c>(
        &self,
        corpus: &'c Corpus,
        grid: &HintGrid,
        _options: &StrategyOptions,
    ) -> Option<&'c Word> {
        let filter = GridFilter::new(grid);
        corpus.answers().iter().find(|word| filter.admits(word))
    }
}

/// Letter-frequency scoring strategy
///
/// Scores every word in the pool (remaining candidates, then guess-only words)
/// by how evenly its letters split the remaining candidates. On the last
/// attempt only candidates are eligible.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoredLettersStrategy;

impl ScoredLettersStrategy {
    /// Choose among already-filtered candidates
    #[must_use]
    pub fn select_from<'c>(
        candidates: &[&'c Word],
        guess_words: &'c [Word],
        remaining_attempts: usize,
    ) -> Option<&'c Word> {
        match candidates {
            [] => None,
            [only] => Some(*only),
            _ => {
                let frequencies = LetterFrequencies::from_candidates(candidates);
                let mut pool: Vec<&'c Word> = candidates.to_vec();
                if remaining_attempts > 1 {
                    pool.extend(guess_words);
                }
                frequency::select_best_guess(&pool, &frequencies).map(|(best, _)| best)
            }
        }
    }
}

impl Strategy for ScoredLettersStrategy {
    fn select_guess<'c>(
        &self,
        corpus: &'c Corpus,
        grid: &HintGrid,
        _options: &StrategyOptions,
    ) -> Option<&'c Word> {
        let candidates = filter_candidates(corpus.answers(), grid);
        Self::select_from(&candidates, corpus.guesses(), grid.remaining_attempts())
    }
}

/// Exhaustive search strategy
///
/// For every guess in the pool, plays it against every remaining candidate
/// and counts the candidates each resulting row would leave. The guess with the
/// lowest average remaining count wins; ties go to the lower worst case, then
/// to pool order. Candidate sets larger than `candidate_cap` are handed to
/// [`ScoredLettersStrategy`] instead.
#[derive(Debug, Clone, Copy)]
pub struct ExhaustiveStrategy {
    pub candidate_cap: usize,
    /// Also try guess-only words as probes while more than one attempt remains
    pub include_guess_words: bool,
}

impl ExhaustiveStrategy {
    #[must_use]
    pub const fn new(candidate_cap: usize, include_guess_words: bool) -> Self {
        Self {
            candidate_cap,
            include_guess_words,
        }
    }
}

impl Default for ExhaustiveStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATE_CAP, false)
    }
}

impl Strategy for ExhaustiveStrategy {
    fn select_guess<'c>(
        &self,
        corpus: &'c Corpus,
        grid: &HintGrid,
        _options: &StrategyOptions,
    ) -> Option<&'c Word> {
        let candidates = filter_candidates(corpus.answers(), grid);
        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            many if many.len() > self.candidate_cap => {
                debug!(
                    "{} candidates exceed cap {}, scoring letters instead",
                    many.len(),
                    self.candidate_cap
                );
                ScoredLettersStrategy::select_from(
                    many,
                    corpus.guesses(),
                    grid.remaining_attempts(),
                )
            }
            many => {
                let mut pool: Vec<&'c Word> = many.to_vec();
                if self.include_guess_words && grid.remaining_attempts() > 1 {
                    pool.extend(corpus.guesses());
                }
                let (best, cost) = exhaustive::select_best_guess(&pool, many)?;
                debug!(
                    "exhaustive pick {best}: average {:.3}, worst {}",
                    cost.average(),
                    cost.worst_case
                );
                Some(best)
            }
        }
    }
}
