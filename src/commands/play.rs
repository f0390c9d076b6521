//! User-play mode
//!
//! The player guesses a hidden solution; the engine scores each guess and
//! can be asked for a hint or the ranked list of remaining candidates.

use super::read_input;
use crate::core::Word;
use crate::engine::{CommonnessTable, Feedback, Strategy};
use crate::error::SolverError;
use crate::game::{Game, GameConfig, GameState};
use crate::output::{print_game_summary, print_ranked, print_turn_report};
use crate::wordlists::Dictionary;
use anyhow::{Context, Result};
use colored::Colorize;
use rand::prelude::IndexedRandom;

/// Pick the hidden solution for a game
///
/// # Errors
///
/// Returns an error if the pool is empty.
pub fn pick_solution(pool: &[Word]) -> Result<&Word> {
    pool.choose(&mut rand::rng())
        .context("the solution pool is empty")
}

/// Run the user-play loop
///
/// # Errors
///
/// Returns an error if reading input fails, the solution pool is empty, or
/// the engine hits a data problem such as a missing commonness entry.
pub fn run_play<S: Strategy + Clone>(
    strategy: &S,
    dictionary: &Dictionary,
    commonness: &CommonnessTable,
    solutions: &[Word],
    config: GameConfig,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  WordleBot - Play Mode                       ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I've picked a hidden word. Type your guesses and I'll colour them.");
    println!("Commands: h hint, a all candidates with scores, q quit\n");

    loop {
        let solution = pick_solution(solutions)?;
        let mut game = Game::new(strategy.clone(), dictionary, commonness, config);

        while !game.is_over() {
            let input = read_input(&format!("Guess {}", game.num_guesses() + 1))?.to_lowercase();

            match input.as_str() {
                "q" | "quit" => game.quit(),
                "h" | "hint" => match game.suggest() {
                    Ok(word) => println!(
                        "  Hint: try {}\n",
                        word.text().to_uppercase().bright_green().bold()
                    ),
                    Err(e) => println!("  {}\n", e.to_string().red()),
                },
                "a" | "all" => match game.ranked() {
                    Ok(ranked) => print_ranked(&ranked, ranked.len()),
                    Err(e) => println!("  {}\n", e.to_string().red()),
                },
                guess => match game.submit_text(guess, Feedback::Oracle(solution)) {
                    Ok(_) => {
                        if let Some(record) = game.last_guess() {
                            print_turn_report(record);
                        }
                    }
                    Err(SolverError::InvalidWord(e)) => {
                        println!("  {}\n", format!("❌ {e}").red());
                    }
                    Err(e) => return Err(e.into()),
                },
            }
        }

        match game.state() {
            GameState::Won => print_game_summary(game.history(), game.state()),
            _ => println!(
                "\nThe word was {}\n",
                solution.text().to_uppercase().bright_yellow().bold()
            ),
        }

        if game.state() == GameState::Quit {
            return Ok(());
        }
        match read_input("Play again? (yes/no)")?.to_lowercase().as_str() {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
        }
    }
}
