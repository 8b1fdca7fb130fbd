//! Per-column letter frequencies and word scores

use crate::core::{COLS, Word};

/// Frequencies at or above this are treated as already determined
pub const DETERMINED: f64 = 0.9999;

/// Probability that column `i` holds letter `c`, over the remaining candidates
#[derive(Debug, Clone, PartialEq)]
pub struct LetterFrequencies {
    columns: [[f64; 26]; COLS],
}

impl LetterFrequencies {
    /// Tabulate frequencies over `candidates`
    ///
    /// An empty candidate list yields all zeros.
    #[must_use]
    pub fn from_candidates(candidates: &[&Word]) -> Self {
        let mut counts = [[0usize; 26]; COLS];
        for word in candidates {
            for (column, &letter) in word.chars().iter().enumerate() {
                counts[column][letter_index(letter)] += 1;
            }
        }

        let total = candidates.len().max(1) as f64;
        let columns = counts.map(|column| column.map(|count| count as f64 / total));
        Self { columns }
    }

    /// Frequency of `letter` in `column`
    #[inline]
    #[must_use]
    pub fn at(&self, column: usize, letter: u8) -> f64 {
        self.columns[column][letter_index(letter)]
    }
}

#[inline]
fn letter_index(letter: u8) -> usize {
    usize::from(letter - b'a')
}

/// `min(p, 1 - p)`: peaks at 0.5, zero for certain or impossible letters
#[inline]
#[must_use]
pub fn split_score(frequency: f64) -> f64 {
    frequency.min(1.0 - frequency)
}

/// Score a guess against the current frequencies
///
/// Each column contributes the split score of the letter placed there. The
/// first occurrence of a letter that is not already determined in its column
/// also adds that letter's split score summed over every column, which favours
/// testing uncertain letters in fresh positions.
///
/// # Examples
/// ```
/// use hintgrid_solver::core::Word;
/// use hintgrid_solver::solver::frequency::{LetterFrequencies, score_word};
///
/// let candidates = [Word::new("crane").unwrap(), Word::new("crate").unwrap()];
/// let refs: Vec<&Word> = candidates.iter().collect();
/// let frequencies = LetterFrequencies::from_candidates(&refs);
///
/// // Only N and T are undecided; a guess testing both beats one testing neither
/// let probe = Word::new("tenth").unwrap();
/// assert!(score_word(&probe, &frequencies) > score_word(&candidates[0], &frequencies));
/// ```
#[must_use]
pub fn score_word(word: &Word, frequencies: &LetterFrequencies) -> f64 {
    let chars = word.chars();
    let mut score = 0.0;

    for (column, &letter) in chars.iter().enumerate() {
        let frequency = frequencies.at(column, letter);
        score += split_score(frequency);

        if frequency < DETERMINED && !chars[..column].contains(&letter) {
            score += (0..COLS)
                .map(|other| split_score(frequencies.at(other, letter)))
                .sum::<f64>();
        }
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn frequencies_are_ratios() {
        let candidates = words(&["crane", "crate", "grate", "slate"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let frequencies = LetterFrequencies::from_candidates(&refs);

        assert!((frequencies.at(0, b'c') - 0.5).abs() < 1e-12);
        assert!((frequencies.at(0, b'g') - 0.25).abs() < 1e-12);
        assert!((frequencies.at(2, b'a') - 1.0).abs() < 1e-12);
        assert!(frequencies.at(2, b'z').abs() < 1e-12);

        for column in 0..COLS {
            let total: f64 = (b'a'..=b'z').map(|l| frequencies.at(column, l)).sum();
            assert!((total - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn empty_candidates_give_zero_frequencies() {
        let frequencies = LetterFrequencies::from_candidates(&[]);
        assert!(frequencies.at(0, b'a').abs() < f64::EPSILON);
    }

    #[test]
    fn split_score_peaks_at_half() {
        assert!(split_score(0.0).abs() < f64::EPSILON);
        assert!(split_score(1.0).abs() < f64::EPSILON);
        assert!((split_score(0.5) - 0.5).abs() < f64::EPSILON);
        assert!((split_score(0.25) - split_score(0.75)).abs() < 1e-12);
    }

    #[test]
    fn determined_letters_score_zero() {
        let candidates = words(&["crane", "crane"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let frequencies = LetterFrequencies::from_candidates(&refs);

        assert!(score_word(&candidates[0], &frequencies).abs() < f64::EPSILON);
    }

    #[test]
    fn repeated_letter_counts_once_across_columns() {
        let candidates = words(&["abbey", "cabby"]);
        let refs: Vec<&Word> = candidates.iter().collect();
        let frequencies = LetterFrequencies::from_candidates(&refs);

        // "aaaaa": a is 0.5 in columns 0 and 1, 0 elsewhere
        // columns: 0.5 + 0.5 + 0 + 0 + 0, plus one cross-column term of 1.0
        let score = score_word(&Word::new("aaaaa").unwrap(), &frequencies);
        assert!((score - 2.0).abs() < 1e-12);
    }
}
