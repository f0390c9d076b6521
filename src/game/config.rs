//! Per-game settings

use crate::core::HintPolicy;

/// Guess limit of the public game
pub const DEFAULT_MAX_TURNS: usize = 6;

/// Settings for one game
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Guesses allowed before the game is lost; `None` plays until won or quit
    pub max_turns: Option<usize>,
    /// Duplicate-letter rule for oracle feedback
    pub policy: HintPolicy,
}

impl Default for GameConfig {
    /// Self-play settings: six turns, counted hints
    fn default() -> Self {
        Self {
            max_turns: Some(DEFAULT_MAX_TURNS),
            policy: HintPolicy::Counted,
        }
    }
}

impl GameConfig {
    /// Interactive settings: no turn cap, the human decides when to stop
    #[must_use]
    pub fn advisor() -> Self {
        Self {
            max_turns: None,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_max_turns(mut self, max_turns: Option<usize>) -> Self {
        self.max_turns = max_turns;
        self
    }

    #[must_use]
    pub const fn with_policy(mut self, policy: HintPolicy) -> Self {
        self.policy = policy;
        self
    }
}
