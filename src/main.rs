//! Hint Grid Solver - CLI
//!
//! Interactive solver, one-shot next guess, single-game trace and benchmark.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hintgrid_solver::{
    benchmark::{AnswerOrder, BenchmarkOptions},
    commands::{SolveConfig, next_guess, run_benchmark_command, run_simple, solve_word},
    output::{print_benchmark_result, print_solve_result},
    solver::{Solver, StrategyConfig, StrategyId, StrategyOptions, StrategyType},
    wordlists::Corpus,
};
use log::info;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "hintgrid",
    about = "Word puzzle solver: candidate filtering with baseline, frequency and exhaustive strategies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: first, frequency (default), exhaustive
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: StrategyId,

    /// Pass the hard-mode flag to the strategy (accepted, currently not acted on)
    #[arg(long, global = true)]
    hard_mode: bool,

    /// Answer list file, one word per line (default: embedded list)
    #[arg(long, global = true, requires = "guesses")]
    answers: Option<PathBuf>,

    /// Guess-only word list file, one word per line (default: embedded list)
    #[arg(long, global = true, requires = "answers")]
    guesses: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive solver (default)
    Simple,

    /// Print the next guess for the rows played so far
    Next {
        /// Rows as word:feedback, e.g. crane:--g-g
        rows: Vec<String>,
    },

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts per turn
        #[arg(short, long)]
        verbose: bool,
    },

    /// Play every answer and report statistics
    Benchmark {
        /// Play only this many answers
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Seed for a reproducible answer order
        #[arg(long, conflicts_with = "ordered")]
        seed: Option<u64>,

        /// Play answers in corpus order instead of shuffling
        #[arg(long)]
        ordered: bool,
    },
}

fn load_corpus(answers: Option<&PathBuf>, guesses: Option<&PathBuf>) -> Result<Corpus> {
    match (answers, guesses) {
        (Some(answers), Some(guesses)) => {
            Corpus::from_files(answers, guesses).with_context(|| {
                format!(
                    "loading word lists {} and {}",
                    answers.display(),
                    guesses.display()
                )
            })
        }
        _ => Ok(Corpus::embedded()),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let corpus = load_corpus(cli.answers.as_ref(), cli.guesses.as_ref())?;
    info!(
        "corpus: {} answers, {} guess-only words",
        corpus.answers().len(),
        corpus.guesses().len()
    );

    let config = StrategyConfig::new(
        cli.strategy,
        StrategyOptions {
            hard_mode: cli.hard_mode,
        },
    );

    match cli.command.unwrap_or(Commands::Simple) {
        Commands::Simple => {
            let strategy = StrategyType::from(config.strategy);
            let solver = Solver::with_options(strategy, &corpus, config.options);
            run_simple(&solver)?;
        }
        Commands::Next { rows } => {
            let response = next_guess(&corpus, &config, &rows)?;
            match response.word {
                Some(word) => println!("{word}"),
                None => println!("No candidates remain"),
            }
        }
        Commands::Solve { word, verbose } => {
            let strategy = StrategyType::from(config.strategy);
            let solver = Solver::with_options(strategy, &corpus, config.options);
            let result = solve_word(SolveConfig::new(word), &solver)?;
            print_solve_result(&result, verbose);
        }
        Commands::Benchmark {
            limit,
            seed,
            ordered,
        } => {
            let order = match (seed, ordered) {
                (_, true) => AnswerOrder::CorpusOrder,
                (Some(seed), false) => AnswerOrder::Seeded(seed),
                (None, false) => AnswerOrder::Shuffled,
            };
            let options = BenchmarkOptions {
                order,
                limit,
                ..BenchmarkOptions::default()
            };

            println!(
                "Benchmarking {} over {} answers...",
                config.strategy,
                limit.map_or(corpus.answers().len(), |n| n.min(corpus.answers().len()))
            );
            let result = run_benchmark_command(Arc::new(corpus), config, options)?;
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
