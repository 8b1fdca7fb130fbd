//! Guess selection
//!
//! Three strategies behind one trait: a baseline that takes the first
//! consistent answer, a letter-frequency heuristic, and an exhaustive
//! average-case search for small candidate pools.

mod engine;
pub mod exhaustive;
pub mod frequency;
pub mod strategy;

pub use engine::Solver;
pub use strategy::{
    DEFAULT_CANDIDATE_CAP, ExhaustiveStrategy, FirstCandidateStrategy, ScoredLettersStrategy,
    Strategy, StrategyConfig, StrategyId, StrategyOptions, StrategyType,
};
