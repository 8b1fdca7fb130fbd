//! Letter-frequency scoring
//!
//! Rewards guesses whose letters split the remaining candidates evenly.

mod calculator;
mod selector;

pub use calculator::{DETERMINED, LetterFrequencies, score_word, split_score};
pub use selector::select_best_guess;
