//! Error types for the solving engine

use crate::core::WordError;
use thiserror::Error;

/// Everything the engine can refuse to do.
///
/// The engine never recovers from these on its own; picking a replacement
/// word or re-prompting is up to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolverError {
    /// A guess or vocabulary entry failed word validation.
    #[error("invalid word: {0}")]
    InvalidWord(#[from] WordError),

    /// No word in the candidate set satisfies the accumulated constraints.
    #[error("no candidates remain; the feedback so far is contradictory")]
    UnsatisfiableConstraints,

    /// A candidate has no entry in the commonness table.
    #[error("no commonness score for '{0}'")]
    MissingCommonnessEntry(String),

    /// Externally supplied hints could not be parsed.
    #[error("malformed feedback '{0}': expected 5 of g/y/b")]
    MalformedFeedback(String),

    /// The game already reached a terminal state.
    #[error("the game is already over")]
    GameOver,
}

pub type Result<T> = std::result::Result<T, SolverError>;
