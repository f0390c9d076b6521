//! Guessable vocabulary with constant-time membership

use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashMap;

/// The set of words a game accepts as guesses
///
/// Keeps the load order (the candidate filter preserves it) alongside a hash
/// index from letters to position for membership checks and lookups.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<Word>,
    index: FxHashMap<[u8; WORD_LENGTH], usize>,
}

impl Dictionary {
    /// Build from words in order, dropping duplicates
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        let mut index = FxHashMap::default();
        let mut kept = Vec::with_capacity(words.len());
        for word in words {
            if !index.contains_key(word.chars()) {
                index.insert(*word.chars(), kept.len());
                kept.push(word);
            }
        }
        Self { words: kept, index }
    }

    /// Build from raw text, skipping anything that is not a valid word
    #[must_use]
    pub fn from_texts(texts: &[&str]) -> Self {
        Self::new(super::loader::words_from_slice(texts))
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains_key(word.chars())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Look a word up by its text
    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Word> {
        let key: &[u8; WORD_LENGTH] = text.as_bytes().try_into().ok()?;
        self.index.get(key).map(|&pos| &self.words[pos])
    }
}
