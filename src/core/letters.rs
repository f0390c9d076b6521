//! Compact letter sets
//!
//! A `LetterSet` is a 26-bit mask over `a..=z`. Position constraints and
//! required letters are both expressed with it, which keeps candidate
//! filtering to a handful of bit operations per word.

use std::fmt;

/// Set of lowercase ASCII letters
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LetterSet(u32);

impl LetterSet {
    /// No letters
    pub const EMPTY: Self = Self(0);

    /// Every letter `a..=z`
    pub const ALPHABET: Self = Self((1 << 26) - 1);

    /// Set holding a single letter
    ///
    /// # Panics
    /// Panics in debug mode if `letter` is not in `a..=z`
    #[inline]
    #[must_use]
    pub const fn single(letter: u8) -> Self {
        debug_assert!(letter.is_ascii_lowercase(), "letter must be a..=z");
        Self(1 << (letter - b'a'))
    }

    /// Set of all letters in `bytes`
    #[must_use]
    pub fn from_letters(bytes: &[u8]) -> Self {
        bytes
            .iter()
            .fold(Self::EMPTY, |set, &letter| set.with(letter))
    }

    #[inline]
    #[must_use]
    pub const fn contains(self, letter: u8) -> bool {
        self.0 & Self::single(letter).0 != 0
    }

    /// Copy of this set with `letter` added
    #[inline]
    #[must_use]
    pub const fn with(self, letter: u8) -> Self {
        Self(self.0 | Self::single(letter).0)
    }

    /// Copy of this set with `letter` removed
    #[inline]
    #[must_use]
    pub const fn without(self, letter: u8) -> Self {
        Self(self.0 & !Self::single(letter).0)
    }

    #[inline]
    pub fn insert(&mut self, letter: u8) {
        *self = self.with(letter);
    }

    #[inline]
    pub fn remove(&mut self, letter: u8) {
        *self = self.without(letter);
    }

    #[inline]
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterate letters in alphabetical order
    pub fn iter(self) -> impl Iterator<Item = u8> {
        (b'a'..=b'z').filter(move |&letter| self.contains(letter))
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for letter in self.iter() {
            write!(f, "{}", letter as char)?;
        }
        f.write_str("}")
    }
}
