//! Guess ranking
//!
//! `score(w) = Σ positional[i][w[i]] + frequency_weight × commonness(w)`
//!
//! The first term favours letters that are common at each position among the
//! current candidates; the second favours everyday words. With a weight of
//! zero the commonness table is never consulted.

use super::{CommonnessTable, PositionalFrequencies};
use crate::core::Word;
use crate::error::{Result, SolverError};
use rayon::prelude::*;
use std::cmp::Ordering;

/// Default blend weight for word commonness
pub const DEFAULT_FREQUENCY_WEIGHT: f64 = 0.4;

/// Rank candidates in parallel above this many words
const PARALLEL_THRESHOLD: usize = 1_000;

/// A candidate with its blended score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord<'a> {
    pub word: &'a Word,
    pub score: f64,
}

/// Score every candidate and sort best first
///
/// Ties (and any incomparable scores) fall back to alphabetical order, so
/// identical inputs always give identical output.
///
/// # Errors
/// - `SolverError::UnsatisfiableConstraints` if `candidates` is empty
/// - `SolverError::MissingCommonnessEntry` if the weight is non-zero and a
///   candidate has no commonness score
pub fn score_and_rank<'a>(
    candidates: &[&'a Word],
    positional: &PositionalFrequencies,
    commonness: &CommonnessTable,
    frequency_weight: f64,
) -> Result<Vec<ScoredWord<'a>>> {
    if candidates.is_empty() {
        return Err(SolverError::UnsatisfiableConstraints);
    }

    let score = |word: &'a Word| -> Result<ScoredWord<'a>> {
        let mut score = positional.positional_score(word);
        if frequency_weight != 0.0 {
            score += frequency_weight * commonness.score(word)?;
        }
        Ok(ScoredWord { word, score })
    };

    let mut ranked: Vec<ScoredWord<'a>> = if candidates.len() > PARALLEL_THRESHOLD {
        candidates.par_iter().map(|&word| score(word)).collect::<Result<_>>()?
    } else {
        candidates.iter().map(|&word| score(word)).collect::<Result<_>>()?
    };

    ranked.sort_by(compare_scored);
    Ok(ranked)
}

/// Highest-scoring candidate, computing the frequency table on the way
///
/// # Errors
/// Same as [`score_and_rank`].
///
/// # Examples
/// ```
/// use wordlebot::core::Word;
/// use wordlebot::engine::{CommonnessTable, best_guess};
///
/// let words: Vec<Word> = ["crane", "crate", "trace", "grace", "brace"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
/// let refs: Vec<&Word> = words.iter().collect();
///
/// let best = best_guess(&refs, &CommonnessTable::new(), 0.0).unwrap();
/// assert_eq!(best.word.text(), "brace");
/// ```
pub fn best_guess<'a>(
    candidates: &[&'a Word],
    commonness: &CommonnessTable,
    frequency_weight: f64,
) -> Result<ScoredWord<'a>> {
    let positional = PositionalFrequencies::compute(candidates)?;
    let ranked = score_and_rank(candidates, &positional, commonness, frequency_weight)?;
    ranked
        .into_iter()
        .next()
        .ok_or(SolverError::UnsatisfiableConstraints)
}

/// Descending score, then ascending word
fn compare_scored(a: &ScoredWord<'_>, b: &ScoredWord<'_>) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| a.word.cmp(b.word))
}
