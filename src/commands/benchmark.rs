//! Benchmark command
//!
//! Self-play: the strategy plays many games against solutions drawn at random
//! from the solution pool.

use crate::core::{Word, WordError};
use crate::engine::{CommonnessTable, Strategy};
use crate::error::Result;
use crate::game::{Game, GameConfig, GameState};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use log::debug;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Games played by default, as many as the classic self-play run
pub const DEFAULT_GAMES: usize = 500;

/// How a benchmark is run
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkConfig {
    pub games: usize,
    /// Seed for drawing solutions; `None` draws from OS entropy
    pub seed: Option<u64>,
    pub game: GameConfig,
    pub show_progress: bool,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES,
            seed: None,
            game: GameConfig::default(),
            show_progress: true,
        }
    }
}

/// Outcome of a single self-play game
#[derive(Debug, Clone)]
pub struct GameOutcome {
    pub solution: String,
    pub guesses: Vec<String>,
    pub state: GameState,
}

impl GameOutcome {
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn won(&self) -> bool {
        self.state == GameState::Won
    }
}

/// Result of a benchmark run
#[derive(Debug)]
pub struct BenchmarkResult {
    pub strategy: String,
    pub outcomes: Vec<GameOutcome>,
    pub won: usize,
    pub lost: usize,
    /// Average guesses over won games
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    /// Guess count → number of won games
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn total_games(&self) -> usize {
        self.outcomes.len()
    }

    /// Win rate in percent
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            0.0
        } else {
            self.won as f64 / self.outcomes.len() as f64 * 100.0
        }
    }

    /// Won games that needed the most guesses, worst first
    #[must_use]
    pub fn hardest(&self, limit: usize) -> Vec<&GameOutcome> {
        let mut won: Vec<&GameOutcome> = self.outcomes.iter().filter(|o| o.won()).collect();
        won.sort_by(|a, b| {
            b.num_guesses()
                .cmp(&a.num_guesses())
                .then_with(|| a.solution.cmp(&b.solution))
        });
        won.truncate(limit);
        won
    }

    fn from_outcomes(strategy: String, outcomes: Vec<GameOutcome>, duration: Duration) -> Self {
        let won_counts: Vec<usize> = outcomes
            .iter()
            .filter(|o| o.won())
            .map(GameOutcome::num_guesses)
            .collect();

        let mut distribution = HashMap::new();
        for &guesses in &won_counts {
            *distribution.entry(guesses).or_insert(0) += 1;
        }

        let won = won_counts.len();
        let average_guesses = if won > 0 {
            won_counts.iter().sum::<usize>() as f64 / won as f64
        } else {
            0.0
        };

        Self {
            strategy,
            won,
            lost: outcomes.len() - won,
            average_guesses,
            min_guesses: won_counts.iter().copied().min().unwrap_or(0),
            max_guesses: won_counts.iter().copied().max().unwrap_or(0),
            distribution,
            games_per_second: outcomes.len() as f64 / duration.as_secs_f64().max(f64::EPSILON),
            outcomes,
            duration,
        }
    }
}

/// Draw `count` solutions (with replacement) from the pool
#[must_use]
pub fn draw_solutions<'a>(pool: &'a [Word], count: usize, seed: Option<u64>) -> Vec<&'a Word> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    (0..count).filter_map(|_| pool.choose(&mut rng)).collect()
}

/// Play one game against `solution` and record it
///
/// # Errors
/// Any error the game raises while playing, such as a missing commonness
/// entry.
pub fn play_game<S: Strategy>(
    strategy: S,
    dictionary: &Dictionary,
    commonness: &CommonnessTable,
    config: GameConfig,
    solution: &Word,
) -> Result<GameOutcome> {
    let mut game = Game::new(strategy, dictionary, commonness, config);
    let state = game.play_out(solution)?;

    Ok(GameOutcome {
        solution: solution.text().to_string(),
        guesses: game
            .history()
            .iter()
            .map(|record| record.word.text().to_string())
            .collect(),
        state,
    })
}

/// Run a self-play benchmark
///
/// Games are independent and run in parallel; they share the dictionary and
/// commonness table read-only.
///
/// # Errors
///
/// Returns `SolverError::InvalidWord` if a solution is not in the dictionary,
/// or the first error any game runs into.
pub fn run_benchmark<S>(
    strategy: &S,
    strategy_name: &str,
    dictionary: &Dictionary,
    commonness: &CommonnessTable,
    solutions: &[Word],
    config: &BenchmarkConfig,
) -> Result<BenchmarkResult>
where
    S: Strategy + Clone + Send + Sync,
{
    if let Some(missing) = solutions.iter().find(|w| !dictionary.contains(w)) {
        return Err(WordError::NotInVocabulary(missing.text().to_string()).into());
    }

    let drawn = draw_solutions(solutions, config.games, config.seed);
    debug!(
        "benchmarking '{strategy_name}' on {} games (seed {:?})",
        drawn.len(),
        config.seed
    );

    let pb = if config.show_progress {
        ProgressBar::new(drawn.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(strategy_name.to_string());

    let start = Instant::now();
    let outcomes = drawn
        .par_iter()
        .map(|solution| {
            let outcome = play_game(strategy.clone(), dictionary, commonness, config.game, solution);
            pb.inc(1);
            outcome
        })
        .collect::<Result<Vec<_>>>()?;
    pb.finish_with_message("Complete!");

    Ok(BenchmarkResult::from_outcomes(
        strategy_name.to_string(),
        outcomes,
        start.elapsed(),
    ))
}
