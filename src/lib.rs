//! Hint Grid Solver
//!
//! Solves five-letter word puzzles from per-letter feedback: keeps the answers
//! consistent with every row of hints and picks the next guess with one of
//! three strategies. A benchmark engine plays a strategy against every answer
//! in the corpus and reports the guess-count distribution.
//!
//! # Quick Start
//!
//! ```rust
//! use hintgrid_solver::core::{HintGrid, HintRow};
//! use hintgrid_solver::solver::{Solver, StrategyId, StrategyType};
//! use hintgrid_solver::wordlists::Corpus;
//!
//! let corpus = Corpus::embedded();
//! let solver = Solver::new(StrategyType::from(StrategyId::ScoredLetters), &corpus);
//!
//! let mut grid = HintGrid::new();
//! let guess = solver.next_guess(&grid).unwrap();
//!
//! // Feedback the puzzle gave for that guess
//! let answer = &corpus.answers()[0];
//! grid.push(HintRow::compute(guess, answer)).unwrap();
//!
//! assert!(solver.candidates(&grid).contains(&answer));
//! ```

// Core domain types
pub mod core;

// Error type shared by every module
pub mod error;

// Constraint filter
pub mod filter;

// Solving algorithms
pub mod solver;

// Benchmark engine
pub mod benchmark;

// Request/response boundary and worker threads
pub mod worker;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
