//! Constraint model and guess-ranking engine
//!
//! Per turn the data flows:
//! constraint store → candidate filter → positional frequencies (+ static
//! commonness) → scorer → chosen guess → feedback → constraint store.

mod commonness;
mod constraints;
mod feedback;
mod filter;
mod frequency;
pub mod scorer;
pub mod strategy;

pub use commonness::CommonnessTable;
pub use constraints::{ConstraintStore, PositionConstraint};
pub use feedback::{Feedback, evaluate};
pub use filter::filter_candidates;
pub use frequency::PositionalFrequencies;
pub use scorer::{DEFAULT_FREQUENCY_WEIGHT, ScoredWord, best_guess, score_and_rank};
pub use strategy::{FrequencyStrategy, RandomStrategy, Strategy, StrategyType};
