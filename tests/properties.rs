//! Cross-module properties of feedback, filtering, strategies and benchmarks

use hintgrid_solver::benchmark::{
    AnswerOrder, BenchmarkOptions, CancelToken, MAX_ATTEMPTS, play_game, run_benchmark,
};
use hintgrid_solver::core::{HintGrid, HintRow, ROWS, Word, compute_feedback, is_solved};
use hintgrid_solver::filter::filter_candidates;
use hintgrid_solver::solver::{
    ExhaustiveStrategy, ScoredLettersStrategy, Solver, Strategy, StrategyConfig, StrategyId,
    StrategyOptions, StrategyType,
};
use hintgrid_solver::wordlists::Corpus;
use hintgrid_solver::wordlists::loader::words_from_slice;

fn sample(corpus: &Corpus, step: usize) -> Vec<&Word> {
    corpus
        .answers()
        .iter()
        .chain(corpus.guesses())
        .step_by(step)
        .collect()
}

#[test]
fn self_feedback_is_solved() {
    let corpus = Corpus::embedded();
    for word in corpus.answers().iter().chain(corpus.guesses()) {
        assert!(is_solved(&compute_feedback(word, word)), "{word}");
    }
}

#[test]
fn answer_survives_its_own_feedback() {
    let corpus = Corpus::embedded();
    let words = sample(&corpus, 7);

    for &guess in &words {
        for &answer in &words {
            let grid = HintGrid::from_rows([compute_feedback(guess, answer)]).unwrap();
            let kept = filter_candidates([answer], &grid);
            assert_eq!(kept, vec![answer], "{guess} against {answer}");
        }
    }
}

#[test]
fn filtering_is_idempotent() {
    let corpus = Corpus::embedded();
    let answer = &corpus.answers()[17];

    for guess in sample(&corpus, 53) {
        let grid = HintGrid::from_rows([compute_feedback(guess, answer)]).unwrap();
        let once = filter_candidates(corpus.answers(), &grid);
        let twice = filter_candidates(once.iter().copied(), &grid);
        assert_eq!(once, twice);
    }
}

#[test]
fn appending_rows_never_grows_candidates() {
    let corpus = Corpus::embedded();
    let guesses = sample(&corpus, 97);

    for answer in corpus.answers().iter().step_by(83) {
        let mut grid = HintGrid::with_row_limit(guesses.len());
        let mut previous = filter_candidates(corpus.answers(), &grid);

        for &guess in &guesses {
            grid.push(compute_feedback(guess, answer)).unwrap();
            let current = filter_candidates(corpus.answers(), &grid);

            assert!(current.len() <= previous.len());
            assert!(current.iter().all(|w| previous.contains(w)));
            assert!(current.contains(&answer));
            previous = current;
        }
    }
}

#[test]
fn repeated_letters_follow_answer_counts() {
    let speed = Word::new("speed").unwrap();
    let erase = Word::new("erase").unwrap();
    let row = compute_feedback(&speed, &erase);

    // S once, E twice in ERASE: both guessed E's are present, the lone S too
    assert_eq!(row.feedback(), "y-yy-");

    let abbey = Word::new("abbey").unwrap();
    let kebab = Word::new("kebab").unwrap();
    // KEBAB has two B's: the middle one is exact, the other still counts
    assert_eq!(compute_feedback(&abbey, &kebab).feedback(), "yygy-");
}

#[test]
fn every_strategy_finds_the_answer() {
    let corpus = Corpus::embedded();
    let options = StrategyOptions::default();

    for id in StrategyId::ALL {
        let strategy = StrategyType::from(id);
        for answer in corpus.answers().iter().step_by(101) {
            let outcome = play_game(&strategy, &corpus, answer, &options, MAX_ATTEMPTS);
            assert!(outcome.solved, "{id} failed on {answer}");
            assert_eq!(outcome.guesses.last().copied(), Some(answer));
        }
    }
}

#[test]
fn strategy_guesses_come_from_the_corpus() {
    let corpus = Corpus::embedded();
    let answer = &corpus.answers()[5];
    let options = StrategyOptions::default();

    let outcome = play_game(&ScoredLettersStrategy, &corpus, answer, &options, ROWS);
    for guess in outcome.guesses {
        assert!(corpus.find(guess.text()).is_some());
    }
}

#[test]
fn exhaustive_picks_a_candidate_on_small_pool() {
    let corpus = Corpus::answers_only(words_from_slice(&[
        "batch", "catch", "hatch", "latch", "match", "patch", "watch",
    ]));
    let mut grid = HintGrid::new();
    grid.push(HintRow::from_feedback(&Word::new("zzzzz").unwrap(), "-----").unwrap())
        .unwrap();

    let exhaustive = ExhaustiveStrategy::default();
    let guess = exhaustive
        .select_guess(&corpus, &grid, &StrategyOptions::default())
        .unwrap();
    assert!(corpus.answers().contains(guess));

    let solver = Solver::new(exhaustive, &corpus);
    assert_eq!(solver.count_candidates(&grid), 7);
}

#[test]
fn small_corpus_benchmark_scenario() {
    let corpus = Corpus::answers_only(words_from_slice(&["crane", "slate", "trace"]));
    let config = StrategyConfig::new(StrategyId::First, StrategyOptions::default());
    let options = BenchmarkOptions {
        order: AnswerOrder::CorpusOrder,
        limit: Some(1),
        ..BenchmarkOptions::default()
    };

    let result = run_benchmark(&corpus, &config, &options, &CancelToken::new(), |_| {}).unwrap();
    assert_eq!(result.games_with(1), 1);
    assert_eq!(result.worst_case, 1);
}

#[test]
fn benchmark_statistics_are_consistent() {
    let corpus = Corpus::embedded();
    let config = StrategyConfig::new(StrategyId::ScoredLetters, StrategyOptions::default());
    let options = BenchmarkOptions {
        order: AnswerOrder::Seeded(42),
        limit: Some(120),
        ..BenchmarkOptions::default()
    };

    let mut progress = Vec::new();
    let result = run_benchmark(&corpus, &config, &options, &CancelToken::new(), |r| {
        progress.push(r.progress);
    })
    .unwrap();

    assert!(progress.iter().all(|p| (0.0..=1.0).contains(p)));
    assert!((result.progress - 1.0).abs() < f64::EPSILON);
    assert!(result.average_case >= 0.0);
    assert!(result.average_performance >= 0.0);
    assert_eq!(result.total_words, 120);
    assert_eq!(result.distribution.values().sum::<usize>(), 120);

    let expected_failures: usize = result
        .distribution
        .iter()
        .filter(|&(&guesses, _)| guesses == 0 || guesses > ROWS)
        .map(|(_, &games)| games)
        .sum();
    assert_eq!(result.failed_answers.len(), expected_failures);

    let solved_max = result
        .distribution
        .keys()
        .copied()
        .filter(|&g| g > 0)
        .max()
        .unwrap_or(0);
    assert_eq!(result.worst_case, solved_max);
}
