//! Opening word search
//!
//! Ranks words with five distinct letters by positional letter frequency
//! alone. Commonness plays no part in the choice of a first guess.

use crate::core::Word;
use crate::engine::{CommonnessTable, PositionalFrequencies, ScoredWord, score_and_rank};
use crate::error::Result;

/// Best opening words, best first
///
/// Frequencies are counted over the distinct-letter words only.
///
/// # Errors
///
/// Returns `SolverError::UnsatisfiableConstraints` if no word has five
/// distinct letters.
///
/// # Examples
/// ```
/// use wordlebot::commands::opener::best_openers;
/// use wordlebot::wordlists::loader::words_from_slice;
///
/// let words = words_from_slice(&["geese", "crane", "trace", "slate"]);
/// let openers = best_openers(&words, 1).unwrap();
/// assert_eq!(openers[0].word.text(), "crane");
/// ```
pub fn best_openers(words: &[Word], limit: usize) -> Result<Vec<ScoredWord<'_>>> {
    let distinct: Vec<&Word> = words.iter().filter(|w| w.has_distinct_letters()).collect();
    let positional = PositionalFrequencies::compute(&distinct)?;

    let mut ranked = score_and_rank(&distinct, &positional, &CommonnessTable::new(), 0.0)?;
    ranked.truncate(limit);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverError;
    use crate::wordlists::{WORDS, loader::words_from_slice};

    #[test]
    fn skips_repeated_letters() {
        let words = words_from_slice(&["geese", "speed", "crane", "slate"]);
        let openers = best_openers(&words, 10).unwrap();

        let texts: Vec<&str> = openers.iter().map(|s| s.word.text()).collect();
        assert_eq!(openers.len(), 2);
        assert!(!texts.contains(&"geese"));
        assert!(!texts.contains(&"speed"));
    }

    #[test]
    fn ranks_bundled_vocabulary() {
        let words = words_from_slice(WORDS);
        let openers = best_openers(&words, 5).unwrap();

        assert_eq!(openers.len(), 5);
        for pair in openers.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(openers.iter().all(|s| s.word.has_distinct_letters()));
    }

    #[test]
    fn no_distinct_words() {
        let words = words_from_slice(&["geese", "eerie"]);
        assert_eq!(
            best_openers(&words, 3).unwrap_err(),
            SolverError::UnsatisfiableConstraints
        );
    }
}
