//! Positional letter frequencies over the current candidates
//!
//! Rebuilt from scratch every turn; a table is only meaningful for the exact
//! candidate set it was computed from.

use crate::core::{WORD_LENGTH, Word};
use crate::error::{Result, SolverError};

/// Letter counts per position, with a normalized view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionalFrequencies {
    counts: [[u32; 26]; WORD_LENGTH],
    totals: [u32; WORD_LENGTH],
}

impl PositionalFrequencies {
    /// Count how often each letter occupies each position among `candidates`
    ///
    /// # Errors
    /// Returns `SolverError::UnsatisfiableConstraints` when `candidates` is
    /// empty: there is nothing to normalize against, and an empty candidate
    /// set means no word matches the feedback.
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::Word;
    /// use wordlebot::engine::PositionalFrequencies;
    ///
    /// let words: Vec<Word> = ["crane", "crate", "trace", "grace", "brace"]
    ///     .iter()
    ///     .map(|w| Word::new(*w).unwrap())
    ///     .collect();
    /// let refs: Vec<&Word> = words.iter().collect();
    ///
    /// let freqs = PositionalFrequencies::compute(&refs).unwrap();
    /// assert_eq!(freqs.count(0, b'c'), 2);
    /// assert!((freqs.normalized(0, b'c') - 0.4).abs() < 1e-12);
    /// ```
    pub fn compute(candidates: &[&Word]) -> Result<Self> {
        if candidates.is_empty() {
            return Err(SolverError::UnsatisfiableConstraints);
        }

        let mut counts = [[0u32; 26]; WORD_LENGTH];
        for word in candidates {
            for (position, &letter) in word.chars().iter().enumerate() {
                counts[position][usize::from(letter - b'a')] += 1;
            }
        }

        let totals: [u32; WORD_LENGTH] = counts.map(|row| row.iter().sum());

        Ok(Self { counts, totals })
    }

    /// Raw count of `letter` at `position`
    #[must_use]
    pub const fn count(&self, position: usize, letter: u8) -> u32 {
        self.counts[position][(letter - b'a') as usize]
    }

    /// Share of candidates with `letter` at `position`, in `[0, 1]`
    #[must_use]
    pub fn normalized(&self, position: usize, letter: u8) -> f64 {
        f64::from(self.count(position, letter)) / f64::from(self.totals[position])
    }

    /// Sum of normalized frequencies of each of the word's letters in place
    #[must_use]
    pub fn positional_score(&self, word: &Word) -> f64 {
        word.chars()
            .iter()
            .enumerate()
            .map(|(position, &letter)| self.normalized(position, letter))
            .sum()
    }

    /// Normalized distribution for one position, indexed by `letter - b'a'`
    #[must_use]
    pub fn distribution(&self, position: usize) -> [f64; 26] {
        let total = f64::from(self.totals[position]);
        self.counts[position].map(|count| f64::from(count) / total)
    }

    /// Number of candidates the table was built from
    #[must_use]
    pub const fn sample_size(&self) -> u32 {
        self.totals[0]
    }
}
