//! WordleBot - CLI
//!
//! Wordle solver and advisor with TUI and text modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::{info, warn};
use wordlebot::{
    commands::{
        BenchmarkConfig, best_openers, run_benchmark, run_play, run_simple, solve_word,
    },
    core::{HintPolicy, Word},
    engine::{CommonnessTable, DEFAULT_FREQUENCY_WEIGHT, Strategy, StrategyType},
    game::{DEFAULT_MAX_TURNS, GameConfig},
    output::{print_benchmark_result, print_openers, print_solve_result},
    wordlists::{
        Dictionary, SOLUTIONS, bundled_commonness, bundled_dictionary,
        loader::{load_commonness_from_file, load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "wordlebot",
    about = "Wordle solver and advisor using positional letter frequencies",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: frequency (default), positional, random
    #[arg(short, long, global = true, default_value = "frequency")]
    strategy: String,

    /// Guessable vocabulary file, one word per line (default: bundled list)
    #[arg(short = 'w', long, global = true)]
    words: Option<String>,

    /// Solution pool file for self-play (default: bundled list)
    #[arg(long, global = true)]
    solutions: Option<String>,

    /// Commonness scores file of `word score` lines (default: bundled table)
    #[arg(long, global = true)]
    commonness: Option<String>,

    /// Weight of word commonness in the score (0 disables it)
    #[arg(short = 'f', long, global = true, default_value_t = DEFAULT_FREQUENCY_WEIGHT)]
    frequency_weight: f64,

    /// Repeated-letter rule for computed hints: counted (default) or naive
    #[arg(short, long, global = true, default_value = "counted")]
    policy: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI advisor (default)
    Play,

    /// Text advisor: report the colours you got, get the next word
    Simple,

    /// Guess a hidden word yourself, with hints on request
    Guess,

    /// Solve a specific target word
    Solve {
        /// The target word to solve
        word: String,

        /// Show candidate counts and information per guess
        #[arg(short, long)]
        verbose: bool,

        /// Give up after this many guesses (default: no limit)
        #[arg(short = 't', long)]
        max_turns: Option<usize>,
    },

    /// Self-play benchmark against random solutions
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "500")]
        count: usize,

        /// Seed for drawing solutions
        #[arg(long)]
        seed: Option<u64>,

        /// Guesses allowed per game
        #[arg(short = 't', long, default_value_t = DEFAULT_MAX_TURNS)]
        max_turns: usize,
    },

    /// Find the best opening words
    Opener {
        /// How many openers to list
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

/// Everything a command needs, loaded once from the global flags
struct Resources {
    dictionary: Dictionary,
    solutions: Vec<Word>,
    commonness: CommonnessTable,
    strategy: StrategyType,
    config: GameConfig,
}

fn load_resources(cli: &Cli) -> Result<Resources> {
    let dictionary = match &cli.words {
        Some(path) => Dictionary::new(
            load_from_file(path).with_context(|| format!("reading word list {path}"))?,
        ),
        None => bundled_dictionary(),
    };
    if dictionary.is_empty() {
        bail!("the word list is empty");
    }

    let mut solutions = match (&cli.solutions, &cli.words) {
        (Some(path), _) => {
            load_from_file(path).with_context(|| format!("reading solution list {path}"))?
        }
        (None, Some(_)) => dictionary.words().to_vec(),
        (None, None) => words_from_slice(SOLUTIONS),
    };
    let before = solutions.len();
    solutions.retain(|word| dictionary.contains(word));
    if solutions.len() < before {
        warn!(
            "dropped {} solutions missing from the word list",
            before - solutions.len()
        );
    }

    let commonness = match &cli.commonness {
        Some(path) => load_commonness_from_file(path)
            .with_context(|| format!("reading commonness table {path}"))?,
        None => bundled_commonness(),
    };
    let strategy = StrategyType::from_name(&cli.strategy, cli.frequency_weight);
    if strategy.frequency_weight() != 0.0
        && let Some(missing) = commonness.first_missing(dictionary.words())
    {
        warn!("no commonness score for '{missing}'; scoring will fail if it stays a candidate");
    }

    let policy = HintPolicy::from_name(&cli.policy)
        .with_context(|| format!("unknown hint policy '{}'", cli.policy))?;

    info!(
        "{} words, {} solutions, {} commonness scores",
        dictionary.len(),
        solutions.len(),
        commonness.len()
    );

    Ok(Resources {
        strategy,
        config: GameConfig::default().with_policy(policy),
        dictionary,
        solutions,
        commonness,
    })
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let res = load_resources(&cli)?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    let advisor = GameConfig {
        max_turns: None,
        ..res.config
    };

    match command {
        Commands::Play => {
            use wordlebot::interactive::{App, run_tui};

            let app = App::new(res.strategy, &res.dictionary, &res.commonness, advisor);
            run_tui(app)
        }
        Commands::Simple => run_simple(&res.strategy, &res.dictionary, &res.commonness, advisor),
        Commands::Guess => run_play(
            &res.strategy,
            &res.dictionary,
            &res.commonness,
            &res.solutions,
            advisor,
        ),
        Commands::Solve {
            word,
            verbose,
            max_turns,
        } => {
            let result = solve_word(
                res.strategy,
                &res.dictionary,
                &res.commonness,
                res.config.with_max_turns(max_turns),
                &word,
            )?;
            print_solve_result(&result, verbose);
            Ok(())
        }
        Commands::Benchmark {
            count,
            seed,
            max_turns,
        } => {
            println!(
                "Running {count} self-play games with the {} strategy...",
                res.strategy.name()
            );
            let config = BenchmarkConfig {
                games: count,
                seed,
                game: res.config.with_max_turns(Some(max_turns)),
                show_progress: true,
            };
            let result = run_benchmark(
                &res.strategy,
                res.strategy.name(),
                &res.dictionary,
                &res.commonness,
                &res.solutions,
                &config,
            )?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Opener { count } => {
            let openers = best_openers(res.dictionary.words(), count)?;
            print_openers(&openers);
            Ok(())
        }
    }
}
