//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, percentage};
use crate::benchmark::BenchmarkResult;
use crate::commands::SolveResult;
use crate::core::ROWS;
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        println!("\nTurn {}: {}", i + 1, colored_row(&step.row));

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                println!(
                    "  Reduction:  {:.1}x",
                    step.candidates_before as f64 / step.candidates_after as f64
                );
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if result.cancelled {
        println!("\n{}", "Run cancelled before every answer was played".yellow());
    }

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Average guesses:  {}",
        format!("{:.3}", result.average_case).bright_yellow().bold()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", result.worst_case).yellow()
    );
    println!("   Time per guess:   {:.3} ms", result.average_performance);
    println!("   Time taken:       {:.2}s", result.elapsed.as_secs_f64());

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (guesses, count) in result.sorted_distribution() {
        let pct = percentage(count, result.total_words);
        let bar = create_progress_bar(pct, 100.0, 40);
        let label = if guesses == 0 {
            "✗".to_string()
        } else {
            guesses.to_string()
        };
        let bar = if guesses == 0 || guesses > ROWS {
            bar.red()
        } else {
            bar.green()
        };
        println!("   {label:>2}: {bar} {count:4} ({pct:5.1}%)");
    }

    if !result.failed_answers.is_empty() {
        println!(
            "\n❌ {} ({})",
            "Failed answers:".bright_red().bold(),
            result.failed_answers.len()
        );
        for failed in result.failed_answers.iter().take(20) {
            println!(
                "   {} after {}",
                failed.answer.to_uppercase().bright_white().bold(),
                failed.guesses.join(" → ").to_uppercase()
            );
        }
        if result.failed_answers.len() > 20 {
            println!("   ... and {} more", result.failed_answers.len() - 20);
        }
    }
}
