//! Game controller and its settings

mod config;
mod controller;

pub use config::{DEFAULT_MAX_TURNS, GameConfig};
pub use controller::{Game, GameState, GuessRecord};
