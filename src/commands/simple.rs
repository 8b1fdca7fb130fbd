//! Simple interactive CLI mode
//!
//! Suggests a guess, reads the feedback the puzzle gave, and repeats.

use crate::core::{COLS, HintGrid, HintRow, PositionHint, Word};
use crate::error::{Result, SolverError};
use crate::output::formatters::colored_row;
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use log::debug;
use std::io::{self, BufRead, Write};

/// One line of user input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Quit,
    New,
    Undo,
    /// Replace row `index` (0-based) and drop every later row
    Edit { index: usize, row: HintRow },
    /// Feedback for the row just played
    Feedback(HintRow),
}

/// Parse a line typed at the feedback prompt
///
/// Accepts a command (`quit`, `new`, `undo`, `edit <row> <word> <feedback>`),
/// `win` for an all-correct row, bare feedback for the suggested word, or
/// `<word> <feedback>` when a different word was played.
///
/// # Errors
/// Returns an error for malformed feedback, words or row numbers, or for bare
/// feedback when there is no suggestion to attach it to.
pub fn parse_input(line: &str, suggested: Option<&Word>) -> Result<Input> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let no_suggestion = || SolverError::InvalidInput("no suggested word to attach feedback to".into());

    match parts.as_slice() {
        [single] => match single.to_lowercase().as_str() {
            "quit" | "q" | "exit" => Ok(Input::Quit),
            "new" | "n" => Ok(Input::New),
            "undo" | "u" => Ok(Input::Undo),
            "win" | "solved" => {
                let all_correct = PositionHint::CorrectSpot.symbol().to_string().repeat(COLS);
                let guess = suggested.ok_or_else(no_suggestion)?;
                HintRow::from_feedback(guess, &all_correct).map(Input::Feedback)
            }
            _ => {
                let guess = suggested.ok_or_else(no_suggestion)?;
                HintRow::from_feedback(guess, single).map(Input::Feedback)
            }
        },
        ["edit", row, word, feedback] => {
            let index = row
                .parse::<usize>()
                .ok()
                .and_then(|number| number.checked_sub(1))
                .ok_or_else(|| SolverError::InvalidInput(format!("row number {row:?}")))?;
            let row = HintRow::from_feedback(&Word::new(*word)?, feedback)?;
            Ok(Input::Edit { index, row })
        }
        [word, feedback] => {
            HintRow::from_feedback(&Word::new(*word)?, feedback).map(Input::Feedback)
        }
        _ => Err(SolverError::InvalidInput(format!("unrecognised input {line:?}"))),
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<S: Strategy>(solver: &Solver<S>) -> Result<()> {
    println!("\n{}", "Hint grid solver - interactive mode".bright_cyan().bold());
    println!("After each guess, enter the feedback:\n");
    println!("  - G/g/🟩 for correct spot");
    println!("  - Y/y/🟨 for wrong spot");
    println!("  - -/_/⬜ for not in word");
    println!("  - ? if you don't know");
    println!("  - 'win' if the guess was right\n");
    println!("Played a different word? Enter '<word> <feedback>'.");
    println!("Commands: 'undo', 'edit <row> <word> <feedback>', 'new', 'quit'\n");

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let mut grid = HintGrid::new();

    loop {
        let candidates = solver.candidates(&grid);

        let Some(guess) = solver.next_guess(&grid) else {
            if grid.is_solved() {
                println!("{}", format!("Solved in {} guesses!", grid.len()).green().bold());
            } else {
                println!("{}", "No candidates remain! Some feedback may be wrong.".red());
            }
            println!("Type 'undo', 'edit', 'new' or 'quit'.\n");
            match read_input(&mut lines, None)? {
                Some(Input::Quit) | None => return Ok(()),
                Some(input) => apply(&mut grid, input),
            }
            continue;
        };

        if grid.remaining_attempts() == 0 {
            println!("{}", "Out of rows. Type 'undo', 'edit', 'new' or 'quit'.".yellow());
        }

        println!("{}", "─".repeat(60).cyan());
        println!("Turn {}: {} candidates remaining", grid.len() + 1, candidates.len());
        println!("{}", "─".repeat(60).cyan());
        println!("\nSuggested guess: {}", guess.text().to_uppercase().bright_yellow().bold());

        if candidates.len() <= 10 {
            let list: Vec<String> = candidates.iter().map(|w| w.text().to_uppercase()).collect();
            println!("Candidates: {}", list.join(", "));
        }
        println!();

        match read_input(&mut lines, Some(guess))? {
            Some(Input::Quit) | None => {
                println!("\nThanks for playing!\n");
                return Ok(());
            }
            Some(input) => apply(&mut grid, input),
        }

        for (i, row) in grid.rows().iter().enumerate() {
            println!("  {}. {}", i + 1, colored_row(row));
        }
        println!();
    }
}

/// Apply a non-quit input to the grid, reporting problems to the user
fn apply(grid: &mut HintGrid, input: Input) {
    let outcome = match input {
        Input::Quit => Ok(()),
        Input::New => {
            grid.clear();
            println!("\nNew game started!\n");
            Ok(())
        }
        Input::Undo => {
            if grid.pop().is_none() {
                println!("Nothing to undo!\n");
            }
            Ok(())
        }
        Input::Edit { index, row } => grid.edit_row(index, row),
        Input::Feedback(row) => grid.push(row),
    };

    if let Err(e) = outcome {
        println!("{}", e.to_string().red());
    }
}

/// Prompt until a line parses; `None` at end of input
fn read_input<B: BufRead>(
    lines: &mut io::Lines<B>,
    suggested: Option<&Word>,
) -> Result<Option<Input>> {
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(None);
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse_input(line, suggested) {
            Ok(input) => return Ok(Some(input)),
            Err(e) => {
                debug!("rejected input {line:?}: {e}");
                println!("{} {e}", "Invalid input:".red());
            }
        }
    }
}
