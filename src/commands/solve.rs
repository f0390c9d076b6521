//! Word solving command
//!
//! Plays one game against a known solution and keeps every step.

use crate::core::{Word, WordError};
use crate::engine::{CommonnessTable, Strategy};
use crate::error::Result;
use crate::game::{Game, GameConfig, GameState, GuessRecord};
use crate::wordlists::Dictionary;

/// Result of solving a word
#[derive(Debug)]
pub struct SolveResult {
    pub target: String,
    pub state: GameState,
    pub steps: Vec<GuessRecord>,
}

impl SolveResult {
    #[must_use]
    pub fn success(&self) -> bool {
        self.state == GameState::Won
    }
}

/// Solve `target` with the given strategy
///
/// `target` is trimmed and lowercased before use.
///
/// # Errors
///
/// Returns `SolverError::InvalidWord` if the target is not a 5-letter word
/// or not in the dictionary, or any error raised while playing.
pub fn solve_word<S: Strategy>(
    strategy: S,
    dictionary: &Dictionary,
    commonness: &CommonnessTable,
    config: GameConfig,
    target: &str,
) -> Result<SolveResult> {
    let target = Word::new(target.trim().to_ascii_lowercase())?;
    if !dictionary.contains(&target) {
        return Err(WordError::NotInVocabulary(target.text().to_string()).into());
    }

    let mut game = Game::new(strategy, dictionary, commonness, config);
    let state = game.play_out(&target)?;

    Ok(SolveResult {
        target: target.text().to_string(),
        state,
        steps: game.history().to_vec(),
    })
}
