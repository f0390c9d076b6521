//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use super::{CommonnessTable, ScoredWord, best_guess, scorer::DEFAULT_FREQUENCY_WEIGHT};
use crate::core::Word;
use crate::error::{Result, SolverError};

/// A strategy for picking the next guess from the surviving candidates
pub trait Strategy {
    /// Select the next guess
    ///
    /// # Errors
    /// Returns `SolverError::UnsatisfiableConstraints` if `candidates` is
    /// empty, or any scoring error the strategy runs into.
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        commonness: &CommonnessTable,
    ) -> Result<&'a Word>;

    /// Commonness weight for ranking the candidates
    ///
    /// Strategies that do not rank use the default weight for display.
    fn frequency_weight(&self) -> f64 {
        DEFAULT_FREQUENCY_WEIGHT
    }
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
#[derive(Debug, Clone)]
pub enum StrategyType {
    /// Positional frequency blended with commonness (default)
    Frequency(FrequencyStrategy),
    /// Uniformly random surviving candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        commonness: &CommonnessTable,
    ) -> Result<&'a Word> {
        match self {
            Self::Frequency(s) => s.select_guess(candidates, commonness),
            Self::Random(s) => s.select_guess(candidates, commonness),
        }
    }

    fn frequency_weight(&self) -> f64 {
        match self {
            Self::Frequency(s) => s.frequency_weight(),
            Self::Random(s) => s.frequency_weight(),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "positional", "random".
    /// "positional" is the frequency strategy with commonness switched off.
    /// Defaults to frequency with `frequency_weight` if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str, frequency_weight: f64) -> Self {
        match name {
            "random" => Self::Random(RandomStrategy),
            "positional" => Self::Frequency(FrequencyStrategy::new(0.0)),
            _ => Self::Frequency(FrequencyStrategy::new(frequency_weight)),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Frequency(s) if s.frequency_weight == 0.0 => "positional",
            Self::Frequency(_) => "frequency",
            Self::Random(_) => "random",
        }
    }
}

impl Default for StrategyType {
    fn default() -> Self {
        Self::Frequency(FrequencyStrategy::default())
    }
}

/// Positional-frequency strategy with a commonness blend
///
/// Picks the top-ranked candidate from the scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrequencyStrategy {
    /// Weight of the commonness term (0 disables it)
    pub frequency_weight: f64,
}

impl FrequencyStrategy {
    #[must_use]
    pub const fn new(frequency_weight: f64) -> Self {
        Self { frequency_weight }
    }
}

impl Default for FrequencyStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_FREQUENCY_WEIGHT)
    }
}

impl Strategy for FrequencyStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        commonness: &CommonnessTable,
    ) -> Result<&'a Word> {
        best_guess(candidates, commonness, self.frequency_weight)
            .map(|ScoredWord { word, .. }| word)
    }

    fn frequency_weight(&self) -> f64 {
        self.frequency_weight
    }
}

/// Random strategy
///
/// Uniformly random pick among the survivors. A baseline for benchmarks.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn select_guess<'a>(
        &self,
        candidates: &[&'a Word],
        _commonness: &CommonnessTable,
    ) -> Result<&'a Word> {
        use rand::prelude::IndexedRandom;

        candidates
            .choose(&mut rand::rng())
            .copied()
            .ok_or(SolverError::UnsatisfiableConstraints)
    }
}
