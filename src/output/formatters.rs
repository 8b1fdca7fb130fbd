//! Formatting utilities for terminal output

use crate::core::{HintRow, PositionHint};
use colored::{ColoredString, Colorize};

/// Render a row as coloured letter tiles followed by its emoji feedback
#[must_use]
pub fn colored_row(row: &HintRow) -> String {
    let tiles: String = row
        .hints()
        .iter()
        .map(|hint| {
            let tile = format!(" {} ", char::from(hint.letter()).to_ascii_uppercase());
            colored_tile(&tile, hint.position()).to_string()
        })
        .collect();
    format!("{tiles}  {}", row.to_emoji())
}

fn colored_tile(tile: &str, position: PositionHint) -> ColoredString {
    match position {
        PositionHint::CorrectSpot => tile.black().on_green(),
        PositionHint::WrongSpot => tile.black().on_yellow(),
        PositionHint::NoSpot => tile.white().on_bright_black(),
        PositionHint::Unknown => tile.normal(),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: values are clamped to [0, width]
        (((value / max) * width as f64).max(0.0) as usize).min(width)
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of `part` in `total`, 0 for an empty total
#[must_use]
pub fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
