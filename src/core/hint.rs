//! Per-letter feedback and the feedback model
//!
//! Every guessed word produces one [`HintRow`]: one [`Hint`] per column, each
//! carrying the guessed letter, its column and a [`PositionHint`] verdict.
//!
//! Repeated letters follow multiset semantics. Exact matches are marked first
//! and are never downgraded; each remaining copy of a letter is then marked
//! [`PositionHint::WrongSpot`] only while the answer still has unaccounted
//! copies of it, and [`PositionHint::NoSpot`] after that.

use super::{COLS, Word};
use crate::error::{Result, SolverError};
use std::fmt;

/// Verdict for one column of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PositionHint {
    /// No information (the column has not been marked yet)
    #[default]
    Unknown,
    /// The letter occupies this exact column in the answer
    CorrectSpot,
    /// The letter occurs in the answer, but not in this column
    WrongSpot,
    /// The answer has no further copies of the letter, and none in this column
    NoSpot,
}

impl PositionHint {
    /// All values, in code order
    pub const ALL: [Self; 4] = [
        Self::Unknown,
        Self::CorrectSpot,
        Self::WrongSpot,
        Self::NoSpot,
    ];

    /// Numeric code used at the request boundary (0..=3)
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Unknown => 0,
            Self::CorrectSpot => 1,
            Self::WrongSpot => 2,
            Self::NoSpot => 3,
        }
    }

    /// True for verdicts that prove the letter occurs in the answer
    #[inline]
    #[must_use]
    pub const fn is_present(self) -> bool {
        matches!(self, Self::CorrectSpot | Self::WrongSpot)
    }

    /// Parse a feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct spot
    /// - 'Y'/'y'/🟨 for wrong spot
    /// - '-'/'_'/'.'/⬜/⬛ for no spot
    /// - '?' for unknown
    ///
    /// # Errors
    /// Returns [`SolverError::InvalidHint`] for any other symbol.
    pub fn from_symbol(symbol: char) -> Result<Self> {
        match symbol {
            'G' | 'g' | '🟩' => Ok(Self::CorrectSpot),
            'Y' | 'y' | '🟨' => Ok(Self::WrongSpot),
            '-' | '_' | '.' | '⬜' | '⬛' => Ok(Self::NoSpot),
            '?' => Ok(Self::Unknown),
            other => Err(SolverError::InvalidHint(format!("symbol {other:?}"))),
        }
    }

    /// Single-character feedback symbol, the inverse of [`Self::from_symbol`]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Unknown => '?',
            Self::CorrectSpot => 'g',
            Self::WrongSpot => 'y',
            Self::NoSpot => '-',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Unknown => '❔',
            Self::CorrectSpot => '🟩',
            Self::WrongSpot => '🟨',
            Self::NoSpot => '⬜',
        }
    }
}

impl TryFrom<u8> for PositionHint {
    type Error = SolverError;

    fn try_from(code: u8) -> Result<Self> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| SolverError::InvalidHint(format!("code {code}")))
    }
}

/// Feedback for a single column: the guessed letter, its column and the verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hint {
    letter: u8,
    column: usize,
    position: PositionHint,
}

impl Hint {
    /// Create a hint, validating the letter and the column
    ///
    /// # Errors
    /// - [`SolverError::InvalidCharacter`] unless `letter` is an ASCII letter
    ///   (upper case is folded to lower case)
    /// - [`SolverError::ColumnOutOfRange`] if `column >= COLS`
    pub fn new(letter: char, column: usize, position: PositionHint) -> Result<Self> {
        if !letter.is_ascii_alphabetic() {
            return Err(SolverError::InvalidCharacter(letter));
        }
        if column >= COLS {
            return Err(SolverError::ColumnOutOfRange {
                column,
                columns: COLS,
            });
        }
        Ok(Self {
            letter: letter.to_ascii_lowercase() as u8,
            column,
            position,
        })
    }

    /// Build a hint from parts already known to be valid
    const fn trusted(letter: u8, column: usize, position: PositionHint) -> Self {
        Self {
            letter,
            column,
            position,
        }
    }

    #[inline]
    #[must_use]
    pub const fn letter(&self) -> u8 {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> PositionHint {
        self.position
    }
}

/// Feedback for one guessed word: exactly one hint per column, ordered by column
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HintRow {
    hints: [Hint; COLS],
}

impl HintRow {
    /// Build a row from hints given in any order
    ///
    /// # Errors
    /// - [`SolverError::RowLength`] unless exactly `COLS` hints are given
    /// - [`SolverError::DuplicateColumn`] if a column is covered twice
    pub fn new(hints: impl IntoIterator<Item = Hint>) -> Result<Self> {
        let mut hints: Vec<Hint> = hints.into_iter().collect();
        if hints.len() != COLS {
            return Err(SolverError::RowLength {
                expected: COLS,
                actual: hints.len(),
            });
        }

        hints.sort_by_key(Hint::column);
        if let Some(pair) = hints.windows(2).find(|pair| pair[0].column == pair[1].column) {
            return Err(SolverError::DuplicateColumn(pair[0].column));
        }

        let hints: [Hint; COLS] = hints.try_into().map_err(|rest: Vec<Hint>| {
            SolverError::RowLength {
                expected: COLS,
                actual: rest.len(),
            }
        })?;
        Ok(Self { hints })
    }

    /// Parse user-entered feedback for a guess, e.g. `"gy-?-"`
    ///
    /// See [`PositionHint::from_symbol`] for the accepted symbols.
    ///
    /// # Errors
    /// Returns an error if the feedback does not have `COLS` symbols or contains
    /// an unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use hintgrid_solver::core::{HintRow, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let typed = HintRow::from_feedback(&guess, "--g-g").unwrap();
    /// let emoji = HintRow::from_feedback(&guess, "⬜⬜🟩⬜🟩").unwrap();
    /// assert_eq!(typed, emoji);
    /// ```
    pub fn from_feedback(guess: &Word, feedback: &str) -> Result<Self> {
        let positions = feedback
            .chars()
            .map(PositionHint::from_symbol)
            .collect::<Result<Vec<_>>>()?;
        if positions.len() != COLS {
            return Err(SolverError::RowLength {
                expected: COLS,
                actual: positions.len(),
            });
        }
        Ok(Self::from_positions(guess, positions))
    }

    fn from_positions(guess: &Word, positions: impl IntoIterator<Item = PositionHint>) -> Self {
        let mut hints = [Hint::trusted(b'a', 0, PositionHint::Unknown); COLS];
        for ((column, hint), position) in hints.iter_mut().enumerate().zip(positions) {
            *hint = Hint::trusted(guess.char_at(column), column, position);
        }
        Self { hints }
    }

    /// Compute the feedback `guess` receives when the answer is `answer`
    ///
    /// # Algorithm
    /// 1. Mark every exact match [`PositionHint::CorrectSpot`]
    /// 2. Scan the other columns left to right. Count the copies of the letter
    ///    already marked present in this row, plus this one; if that does not
    ///    exceed the copies in the answer the column is
    ///    [`PositionHint::WrongSpot`], otherwise [`PositionHint::NoSpot`]
    ///
    /// # Examples
    /// ```
    /// use hintgrid_solver::core::{HintRow, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let answer = Word::new("erase").unwrap();
    /// assert_eq!(HintRow::compute(&guess, &answer).feedback(), "y-yy-");
    /// ```
    #[must_use]
    pub fn compute(guess: &Word, answer: &Word) -> Self {
        let mut positions = [PositionHint::Unknown; COLS];

        // First pass: exact matches take priority over everything else
        for (column, position) in positions.iter_mut().enumerate() {
            if guess.char_at(column) == answer.char_at(column) {
                *position = PositionHint::CorrectSpot;
            }
        }

        // Second pass: remaining copies, limited by the answer's letter count
        for column in 0..COLS {
            if positions[column] == PositionHint::CorrectSpot {
                continue;
            }
            let letter = guess.char_at(column);
            let accounted = (0..COLS)
                .filter(|&i| guess.char_at(i) == letter && positions[i].is_present())
                .count()
                + 1;
            positions[column] = if accounted <= answer.count_of(letter) {
                PositionHint::WrongSpot
            } else {
                PositionHint::NoSpot
            };
        }

        Self::from_positions(guess, positions)
    }

    /// The hints of this row, ordered by column
    #[inline]
    #[must_use]
    pub const fn hints(&self) -> &[Hint; COLS] {
        &self.hints
    }

    /// True iff every hint is [`PositionHint::CorrectSpot`]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.hints
            .iter()
            .all(|hint| hint.position == PositionHint::CorrectSpot)
    }

    /// The guessed letters spelled out in column order
    #[must_use]
    pub fn word(&self) -> String {
        self.hints.iter().map(|hint| char::from(hint.letter)).collect()
    }

    /// Feedback symbols in column order, e.g. `"gy-?-"`
    #[must_use]
    pub fn feedback(&self) -> String {
        self.hints.iter().map(|hint| hint.position.symbol()).collect()
    }

    /// Convert the row to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.hints.iter().map(|hint| hint.position.emoji()).collect()
    }

    /// Position hints packed base-4 into one value (column 0 is least significant)
    ///
    /// Two rows for the same guessed word are equal iff their codes are equal.
    #[must_use]
    pub fn code(&self) -> u16 {
        self.hints
            .iter()
            .rev()
            .fold(0u16, |acc, hint| acc * 4 + u16::from(hint.position.code()))
    }
}

impl fmt::Display for HintRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.word(), self.feedback())
    }
}

/// Feedback for `guess` against a known `answer`
#[must_use]
pub fn compute_feedback(guess: &Word, answer: &Word) -> HintRow {
    HintRow::compute(guess, answer)
}

/// True iff the row marks every column [`PositionHint::CorrectSpot`]
#[must_use]
pub fn is_solved(row: &HintRow) -> bool {
    row.is_solved()
}
