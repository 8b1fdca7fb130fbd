//! Constraint filter
//!
//! Decides which words remain consistent with accumulated feedback. Each row
//! is checked on its own: the lower bound on a letter's occurrences (`min_count`)
//! comes only from the hints in that row, and any row can exclude a word.
//! Nothing is cached between calls.

use crate::core::{COLS, Hint, HintGrid, HintRow, PositionHint, Word};

/// Check one hint against one word
///
/// `min_count` is the number of hints in the hint's row with the same letter
/// marked [`PositionHint::CorrectSpot`] or [`PositionHint::WrongSpot`].
///
/// - `NoSpot`: the word has at most `min_count` copies of the letter
/// - `WrongSpot`: at least `min_count` copies, and not this letter in this column
/// - `CorrectSpot`: at least `min_count` copies, and this letter in this column
/// - `Unknown`: always consistent
#[must_use]
pub fn matches_hint(word: &Word, hint: &Hint, min_count: usize) -> bool {
    let count = word.count_of(hint.letter());
    let in_column = word.char_at(hint.column()) == hint.letter();
    match hint.position() {
        PositionHint::NoSpot => count <= min_count,
        PositionHint::WrongSpot => count >= min_count && !in_column,
        PositionHint::CorrectSpot => count >= min_count && in_column,
        PositionHint::Unknown => true,
    }
}

/// Known lower bound on copies of `letter` in the answer, from one row alone
#[must_use]
pub fn min_count(row: &HintRow, letter: u8) -> usize {
    row.hints()
        .iter()
        .filter(|hint| hint.letter() == letter && hint.position().is_present())
        .count()
}

/// One row with its per-hint `min_count` precomputed
#[derive(Debug, Clone)]
pub struct RowFilter {
    constraints: [(Hint, usize); COLS],
}

impl RowFilter {
    #[must_use]
    pub fn new(row: &HintRow) -> Self {
        let hints = row.hints();
        let constraints = std::array::from_fn(|i| (hints[i], min_count(row, hints[i].letter())));
        Self { constraints }
    }

    /// True if `word` satisfies every hint of the row
    #[inline]
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.constraints
            .iter()
            .all(|(hint, min)| matches_hint(word, hint, *min))
    }
}

/// Every row of a grid, ready to test words against
#[derive(Debug, Clone)]
pub struct GridFilter {
    rows: Vec<RowFilter>,
}

impl GridFilter {
    #[must_use]
    pub fn new(grid: &HintGrid) -> Self {
        Self {
            rows: grid.rows().iter().map(RowFilter::new).collect(),
        }
    }

    #[inline]
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.rows.iter().all(|row| row.admits(word))
    }
}

/// Words consistent with every row of `grid`, in input order
///
/// # Examples
/// ```
/// use hintgrid_solver::core::{HintGrid, HintRow, Word};
/// use hintgrid_solver::filter::filter_candidates;
///
/// let words: Vec<Word> = ["crane", "slate", "trace"]
///     .into_iter()
///     .map(|w| Word::new(w).unwrap())
///     .collect();
///
/// let guess = Word::new("crane").unwrap();
/// let mut grid = HintGrid::new();
/// grid.push(HintRow::compute(&guess, &words[2])).unwrap();
///
/// let remaining = filter_candidates(&words, &grid);
/// assert_eq!(remaining, vec![&words[2]]);
/// ```
pub fn filter_candidates<'w, I>(words: I, grid: &HintGrid) -> Vec<&'w Word>
where
    I: IntoIterator<Item = &'w Word>,
{
    let filter = GridFilter::new(grid);
    words.into_iter().filter(|word| filter.admits(word)).collect()
}

/// How many of `words` a single row admits
#[must_use]
pub fn count_admitted(words: &[&Word], row: &HintRow) -> usize {
    let filter = RowFilter::new(row);
    words.iter().filter(|word| filter.admits(word)).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn row(guess: &str, feedback: &str) -> HintRow {
        HintRow::from_feedback(&word(guess), feedback).unwrap()
    }

    fn hint(letter: char, column: usize, position: PositionHint) -> Hint {
        Hint::new(letter, column, position).unwrap()
    }

    #[test]
    fn no_spot_allows_up_to_min_count() {
        let speed = word("speed");
        let no_e = hint('e', 3, PositionHint::NoSpot);
        assert!(!matches_hint(&speed, &no_e, 0));
        assert!(!matches_hint(&speed, &no_e, 1));
        assert!(matches_hint(&speed, &no_e, 2));
    }

    #[test]
    fn wrong_spot_requires_letter_elsewhere() {
        let crane = word("crane");
        assert!(matches_hint(&crane, &hint('r', 0, PositionHint::WrongSpot), 1));
        assert!(!matches_hint(&crane, &hint('r', 1, PositionHint::WrongSpot), 1));
        assert!(!matches_hint(&crane, &hint('z', 0, PositionHint::WrongSpot), 1));
    }

    #[test]
    fn correct_spot_requires_letter_in_column() {
        let crane = word("crane");
        assert!(matches_hint(&crane, &hint('a', 2, PositionHint::CorrectSpot), 1));
        assert!(!matches_hint(&crane, &hint('a', 1, PositionHint::CorrectSpot), 1));
        // Two copies required, only one present
        assert!(!matches_hint(&crane, &hint('a', 2, PositionHint::CorrectSpot), 2));
    }

    #[test]
    fn unknown_always_matches() {
        let crane = word("crane");
        assert!(matches_hint(&crane, &hint('z', 0, PositionHint::Unknown), 5));
    }

    #[test]
    fn min_count_counts_present_hints_only() {
        let speed_row = row("speed", "y-yy-");
        assert_eq!(min_count(&speed_row, b'e'), 2);
        assert_eq!(min_count(&speed_row, b's'), 1);
        assert_eq!(min_count(&speed_row, b'p'), 0);

        let excess = row("geese", "-y---");
        assert_eq!(min_count(&excess, b'e'), 1);
    }

    #[test]
    fn no_spot_with_present_copy_caps_the_count() {
        // One E confirmed, the other two NoSpot: the answer has exactly one E
        let excess = RowFilter::new(&row("geese", "-y---"));
        assert!(excess.admits(&word("hotel")));
        assert!(!excess.admits(&word("fever")));
        assert!(!excess.admits(&word("berry")));
    }

    #[test]
    fn filter_keeps_input_order() {
        let words: Vec<Word> = ["crane", "crate", "grate", "slate"]
            .into_iter()
            .map(word)
            .collect();

        let loose = HintGrid::from_rows([row("trace", "??g??")]).unwrap();
        let remaining: Vec<&str> = filter_candidates(&words, &loose)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(remaining, ["crane", "crate", "grate", "slate"]);

        let tight = HintGrid::from_rows([row("trace", "yggyg")]).unwrap();
        let remaining: Vec<&str> = filter_candidates(&words, &tight)
            .into_iter()
            .map(Word::text)
            .collect();
        assert_eq!(remaining, ["crate"]);
    }

    #[test]
    fn every_row_can_exclude() {
        let words: Vec<Word> = ["crane", "crate"].into_iter().map(word).collect();
        let grid = HintGrid::from_rows([row("slate", "??g??"), row("crane", "???-?")]).unwrap();
        assert_eq!(filter_candidates(&words, &grid), vec![&words[1]]);
    }

    #[test]
    fn count_admitted_single_row() {
        let words: Vec<Word> = ["crane", "crate", "grate"].into_iter().map(word).collect();
        let refs: Vec<&Word> = words.iter().collect();
        assert_eq!(count_admitted(&refs, &row("crate", "ggggg")), 1);
        assert_eq!(count_admitted(&refs, &row("crate", "?gggg")), 2);
        assert_eq!(count_admitted(&refs, &row("crate", "?????")), 3);
    }
}
