//! Simple interactive CLI mode
//!
//! Text-based advisor without the TUI: the player reports the word they
//! played and the colours they saw, the engine suggests the next word.

use super::read_input;
use crate::core::Hints;
use crate::engine::{CommonnessTable, Feedback, Strategy};
use crate::error::SolverError;
use crate::game::{Game, GameConfig, GameState};
use crate::output::{print_game_summary, print_ranked, print_turn_report};
use crate::wordlists::Dictionary;
use anyhow::Result;
use colored::Colorize;

enum Action {
    Quit,
    NewGame,
    Undo,
    Played(String, Hints),
}

fn ask_action<S: Strategy>(game: &Game<'_, S>, suggestion: Option<&str>) -> Result<Action> {
    loop {
        let prompt = match suggestion {
            Some(word) => format!("Word played [{}] (or h/a/u/n/q)", word.to_uppercase()),
            None => "Word played (or a/u/n/q)".to_string(),
        };
        let input = read_input(&prompt)?.to_lowercase();

        let word = match input.as_str() {
            "q" | "quit" | "exit" => return Ok(Action::Quit),
            "n" | "new" => return Ok(Action::NewGame),
            "u" | "undo" => return Ok(Action::Undo),
            "h" | "hint" => {
                match suggestion {
                    Some(word) => println!(
                        "  Suggested: {}\n",
                        word.to_uppercase().bright_green().bold()
                    ),
                    None => println!("  No suggestion available\n"),
                }
                continue;
            }
            "a" | "all" => {
                match game.ranked() {
                    Ok(ranked) => print_ranked(&ranked, 50),
                    Err(e) => println!("  {}\n", e.to_string().red()),
                }
                continue;
            }
            "" => match suggestion {
                Some(word) => word.to_string(),
                None => continue,
            },
            other => other.to_string(),
        };

        let hints = loop {
            let input = read_input("Colours seen (g/y/b, or 'win')")?;
            if input == "q" {
                return Ok(Action::Quit);
            }
            if matches!(input.to_lowercase().as_str(), "win" | "w" | "ggggg") {
                break Hints::SOLVED;
            }
            match Hints::parse(&input) {
                Ok(hints) => break hints,
                Err(e) => println!("  {}\n", e.to_string().red()),
            }
        };

        return Ok(Action::Played(word, hints));
    }
}

/// Run the simple interactive advisor
///
/// # Errors
///
/// Returns an error if reading input fails or the engine hits a data
/// problem such as a missing commonness entry.
pub fn run_simple<S: Strategy + Clone>(
    strategy: &S,
    dictionary: &Dictionary,
    commonness: &CommonnessTable,
    config: GameConfig,
) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  WordleBot - Advisor Mode                    ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Play the suggested word (or any other) in your game, then tell me");
    println!("which word you played and the colours you got back:\n");
    println!("  - g for green (right letter, right spot)");
    println!("  - y for yellow (letter elsewhere in the word)");
    println!("  - b for gray (letter not in the word)");
    println!("  - or type 'win' if you got it right!\n");
    println!("Commands: h hint, a all candidates, u undo, n new game, q quit\n");

    let mut game = Game::new(strategy.clone(), dictionary, commonness, config);

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Turn {}: {} candidates remaining",
            game.num_guesses() + 1,
            game.candidates().len()
        );
        println!("────────────────────────────────────────────────────────────");

        let suggestion = match game.suggest() {
            Ok(word) => {
                println!(
                    "\n📊 Suggested guess: {}\n",
                    word.text().to_uppercase().bright_green().bold()
                );
                Some(word)
            }
            Err(SolverError::UnsatisfiableConstraints) => {
                println!("\n❌ No candidates remain! Some feedback may be wrong.");
                println!("Type 'u' to undo the last guess, or 'n' to start over.\n");
                None
            }
            Err(e) => return Err(e.into()),
        };

        match ask_action(&game, suggestion.map(|w| w.text()))? {
            Action::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Action::NewGame => {
                game = Game::new(strategy.clone(), dictionary, commonness, config);
                println!("\n🔄 New game started!\n");
            }
            Action::Undo => match game.without_last_guess() {
                Some(previous) => {
                    game = previous;
                    println!("✓ Undone! Back to turn {}\n", game.num_guesses() + 1);
                }
                None => println!("Nothing to undo!\n"),
            },
            Action::Played(word, hints) => {
                match game.submit_text(&word, Feedback::Advisor(hints)) {
                    Ok(_) | Err(SolverError::UnsatisfiableConstraints) => {}
                    Err(SolverError::InvalidWord(e)) => {
                        println!("  {}\n", format!("❌ {e}").red());
                        continue;
                    }
                    Err(e) => return Err(e.into()),
                }

                if let Some(record) = game.last_guess() {
                    print_turn_report(record);
                }

                if game.state() == GameState::Won {
                    print_game_summary(game.history(), game.state());

                    match read_input("Play again? (yes/no)")?.to_lowercase().as_str() {
                        "yes" | "y" => {
                            game = Game::new(strategy.clone(), dictionary, commonness, config);
                            println!("\n🔄 New game started!\n");
                        }
                        _ => {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                    }
                }
            }
        }
    }
}
