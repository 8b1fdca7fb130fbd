//! Word corpus
//!
//! Two ordered lists: answer-eligible words and guess-only words. The corpus
//! is built once and shared read-only (by reference or `Arc`) with every
//! strategy call.

mod embedded;
pub mod loader;

pub use embedded::{ANSWERS, ANSWERS_COUNT, GUESSES, GUESSES_COUNT};

use crate::core::Word;
use crate::error::Result;
use loader::{load_from_file, words_from_slice};
use rustc_hash::FxHashSet;
use std::path::Path;

/// The static word lists a puzzle is played over
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    answers: Vec<Word>,
    guesses: Vec<Word>,
}

impl Corpus {
    /// Build a corpus, keeping list order
    ///
    /// Duplicates are dropped, and a guess-only word that is also an answer is
    /// kept in the answer list only.
    #[must_use]
    pub fn new(answers: Vec<Word>, guesses: Vec<Word>) -> Self {
        let mut seen = FxHashSet::default();
        let answers: Vec<Word> = answers
            .into_iter()
            .filter(|w| seen.insert(w.text().to_string()))
            .collect();
        let guesses: Vec<Word> = guesses
            .into_iter()
            .filter(|w| seen.insert(w.text().to_string()))
            .collect();
        Self { answers, guesses }
    }

    /// Corpus with answers only and no guess-only words
    #[must_use]
    pub fn answers_only(answers: Vec<Word>) -> Self {
        Self::new(answers, Vec::new())
    }

    /// The word lists compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(ANSWERS), words_from_slice(GUESSES))
    }

    /// Load both lists from files, one word per line
    ///
    /// # Errors
    /// Returns an error if either file cannot be read or has a malformed line.
    pub fn from_files(answers: impl AsRef<Path>, guesses: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(load_from_file(answers)?, load_from_file(guesses)?))
    }

    /// Answer-eligible words in corpus order
    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Guess-only words in corpus order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// Look a word up in either list
    #[must_use]
    pub fn find(&self, text: &str) -> Option<&Word> {
        self.answers
            .iter()
            .chain(&self.guesses)
            .find(|w| w.text() == text)
    }
}
