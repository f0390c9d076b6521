//! Static word commonness scores
//!
//! A lookup from word to a real-valued "how everyday is this word" score,
//! loaded once and shared read-only by every game.

use crate::core::Word;
use crate::error::{Result, SolverError};
use rustc_hash::FxHashMap;

/// Word → commonness score
#[derive(Debug, Clone, Default)]
pub struct CommonnessTable {
    scores: FxHashMap<String, f64>,
}

impl CommonnessTable {
    /// Empty table; only usable with a frequency weight of zero
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Score for `word`
    ///
    /// # Errors
    /// Returns `SolverError::MissingCommonnessEntry` when the word has no
    /// entry. A missing entry is a data problem and is never read as zero.
    pub fn score(&self, word: &Word) -> Result<f64> {
        self.scores
            .get(word.text())
            .copied()
            .ok_or_else(|| SolverError::MissingCommonnessEntry(word.text().to_string()))
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.scores.contains_key(word.text())
    }

    pub fn insert(&mut self, word: &Word, score: f64) {
        self.scores.insert(word.text().to_string(), score);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// First word of `words` that has no score, if any
    pub fn first_missing<'a, I>(&self, words: I) -> Option<&'a Word>
    where
        I: IntoIterator<Item = &'a Word>,
    {
        words.into_iter().find(|word| !self.contains(word))
    }
}

impl<'a> FromIterator<(&'a Word, f64)> for CommonnessTable {
    fn from_iter<T: IntoIterator<Item = (&'a Word, f64)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (word, score) in iter {
            table.insert(word, score);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_hits_and_misses() {
        let crane = Word::new("crane").unwrap();
        let qajaq = Word::new("qajaq").unwrap();
        let table: CommonnessTable = [(&crane, 0.75)].into_iter().collect();

        assert_eq!(table.len(), 1);
        assert_eq!(table.score(&crane), Ok(0.75));
        assert_eq!(
            table.score(&qajaq),
            Err(SolverError::MissingCommonnessEntry("qajaq".to_string()))
        );
    }

    #[test]
    fn first_missing_reports_gap() {
        let words: Vec<Word> = ["about", "other", "qajaq"]
            .iter()
            .map(|w| Word::new(*w).unwrap())
            .collect();
        let table: CommonnessTable = words[..2].iter().map(|w| (w, 0.5)).collect();

        assert_eq!(table.first_missing(&words).map(Word::text), Some("qajaq"));
        assert_eq!(table.first_missing(&words[..2]), None);
    }
}
