//! WordleBot
//!
//! A Wordle solver and advisor driven by positional letter frequencies,
//! optionally blended with how common each word is in everyday use.
//!
//! # Quick Start
//!
//! ```rust
//! use wordlebot::core::{HintPolicy, Hints, Word};
//!
//! let guess = Word::new("crate").unwrap();
//! let solution = Word::new("grace").unwrap();
//!
//! let hints = Hints::calculate(&guess, &solution, HintPolicy::Counted);
//! assert_eq!(hints.to_string(), "yggbg");
//! ```

// Core domain types
pub mod core;

// Error types shared by the engine and game
pub mod error;

// Constraint model, filtering and scoring
pub mod engine;

// Game controller
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

pub use error::{Result, SolverError};
