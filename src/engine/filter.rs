//! Candidate pruning

use super::ConstraintStore;
use crate::core::Word;
use log::debug;

/// Keep the words consistent with `store`
///
/// The input is never modified. Because constraints only ever narrow,
/// re-filtering the previous survivors gives the same result as filtering
/// the full vocabulary against the same store, so callers should pass the
/// last surviving set.
///
/// # Examples
/// ```
/// use wordlebot::core::{Hints, Word};
/// use wordlebot::engine::{ConstraintStore, filter_candidates};
///
/// let vocabulary: Vec<Word> = ["crane", "crate", "trace"]
///     .iter()
///     .map(|w| Word::new(*w).unwrap())
///     .collect();
///
/// let mut store = ConstraintStore::new();
/// store.apply_feedback(&Word::new("crane").unwrap(), &Hints::parse("gggbg").unwrap());
///
/// let survivors = filter_candidates(&vocabulary, &store);
/// assert_eq!(survivors.len(), 1);
/// assert_eq!(survivors[0].text(), "crate");
/// ```
pub fn filter_candidates<'a, I>(words: I, store: &ConstraintStore) -> Vec<&'a Word>
where
    I: IntoIterator<Item = &'a Word>,
{
    let survivors: Vec<&'a Word> = words
        .into_iter()
        .filter(|word| store.admits(word))
        .collect();

    debug!("{} candidates survive filtering", survivors.len());
    survivors
}
