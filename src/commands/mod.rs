//! Command implementations

pub mod benchmark;
pub mod next;
pub mod simple;
pub mod solve;

pub use benchmark::run_benchmark_command;
pub use next::{next_guess, parse_entry};
pub use simple::run_simple;
pub use solve::{GuessStep, SolveConfig, SolveResult, solve_word};
