//! Exhaustive guess evaluation
//!
//! Plays each guess against every remaining candidate and minimises the
//! average number of candidates left.

mod calculator;
mod selector;

pub use calculator::{GuessCost, evaluate_guess};
pub use selector::select_best_guess;
