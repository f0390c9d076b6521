//! Accumulated knowledge about the hidden solution
//!
//! The store keeps, for each position, either the letter known to be there or
//! the set of letters still admissible, plus the set of letters known to occur
//! somewhere in the solution.

use crate::core::{Hint, Hints, LetterSet, WORD_LENGTH, Word};
use log::{debug, warn};

/// What is known about one letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionConstraint {
    /// Solved (green). Never reopens within a game.
    Fixed(u8),
    /// Letters that may still appear here
    Open(LetterSet),
}

impl PositionConstraint {
    /// Letters admissible at this position
    #[must_use]
    pub const fn admissible(self) -> LetterSet {
        match self {
            Self::Fixed(letter) => LetterSet::single(letter),
            Self::Open(set) => set,
        }
    }

    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed(_))
    }

    fn exclude(&mut self, letter: u8) {
        if let Self::Open(set) = self {
            set.remove(letter);
        }
    }
}

/// Position constraints plus required letters for one game
///
/// Starts with every letter admissible everywhere. Only
/// [`apply_feedback`](Self::apply_feedback) mutates it, and every update
/// only narrows what is admissible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstraintStore {
    positions: [PositionConstraint; WORD_LENGTH],
    required: LetterSet,
}

impl Default for ConstraintStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintStore {
    /// Store with no knowledge yet
    #[must_use]
    pub const fn new() -> Self {
        Self {
            positions: [PositionConstraint::Open(LetterSet::ALPHABET); WORD_LENGTH],
            required: LetterSet::EMPTY,
        }
    }

    /// Fold the hints for one guess into the store
    ///
    /// Greens fix their position, yellows rule their letter out at that
    /// position only, and grays rule their letter out everywhere not yet
    /// fixed. A gray letter that is also green or yellow elsewhere in the
    /// same guess (a repeated letter) is only ruled out at its own position,
    /// so the confirmed occurrence is never lost.
    pub fn apply_feedback(&mut self, guess: &Word, hints: &Hints) {
        // Classify every position first so the gray pass sees all confirmations
        let confirmed = (0..WORD_LENGTH)
            .filter(|&i| hints.get(i) != Hint::Absent)
            .fold(LetterSet::EMPTY, |set, i| set.with(guess.char_at(i)));

        for i in 0..WORD_LENGTH {
            let letter = guess.char_at(i);
            match hints.get(i) {
                Hint::Correct => self.fix(i, letter),
                Hint::Present => {
                    self.required.insert(letter);
                    self.positions[i].exclude(letter);
                }
                Hint::Absent if confirmed.contains(letter) => {
                    self.positions[i].exclude(letter);
                }
                Hint::Absent => {
                    for position in &mut self.positions {
                        position.exclude(letter);
                    }
                }
            }
        }

        debug!("constraints after '{guess}' ({hints}): {self:?}");
    }

    fn fix(&mut self, position: usize, letter: u8) {
        self.required.insert(letter);
        match self.positions[position] {
            PositionConstraint::Fixed(existing) if existing != letter => {
                warn!(
                    "position {position} already fixed to '{}', ignoring '{}'",
                    existing as char, letter as char
                );
            }
            _ => self.positions[position] = PositionConstraint::Fixed(letter),
        }
    }

    /// Letters still admissible at `position`
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn admissible_letters(&self, position: usize) -> LetterSet {
        self.positions[position].admissible()
    }

    /// Letters known to occur somewhere in the solution
    #[must_use]
    pub const fn required_letters(&self) -> LetterSet {
        self.required
    }

    /// True once `position` has been solved
    ///
    /// # Panics
    /// Panics if position >= 5
    #[must_use]
    pub const fn is_position_fixed(&self, position: usize) -> bool {
        self.positions[position].is_fixed()
    }

    #[must_use]
    pub const fn position(&self, position: usize) -> PositionConstraint {
        self.positions[position]
    }

    /// Whether `word` is consistent with everything known so far
    #[must_use]
    pub fn admits(&self, word: &Word) -> bool {
        self.required.is_subset(word.letters())
            && self
                .positions
                .iter()
                .zip(word.chars())
                .all(|(constraint, &letter)| constraint.admissible().contains(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HintPolicy;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn apply(store: &mut ConstraintStore, guess: &str, hints: &str) {
        store.apply_feedback(&word(guess), &Hints::parse(hints).unwrap());
    }

    #[test]
    fn fresh_store_admits_everything() {
        let store = ConstraintStore::new();
        for i in 0..WORD_LENGTH {
            assert_eq!(store.admissible_letters(i), LetterSet::ALPHABET);
            assert!(!store.is_position_fixed(i));
        }
        assert!(store.required_letters().is_empty());
        assert!(store.admits(&word("zzzzz")));
    }

    #[test]
    fn correct_fixes_position() {
        let mut store = ConstraintStore::new();
        apply(&mut store, "crane", "gbbbb");

        assert!(store.is_position_fixed(0));
        assert_eq!(store.position(0), PositionConstraint::Fixed(b'c'));
        assert_eq!(store.admissible_letters(0), LetterSet::single(b'c'));
        assert!(store.required_letters().contains(b'c'));
    }

    #[test]
    fn present_excludes_only_its_position() {
        let mut store = ConstraintStore::new();
        apply(&mut store, "crane", "bybbb");

        assert!(!store.admissible_letters(1).contains(b'r'));
        for i in [0, 2, 3, 4] {
            assert!(store.admissible_letters(i).contains(b'r'));
        }
        assert!(store.required_letters().contains(b'r'));
    }

    #[test]
    fn absent_excludes_everywhere_but_fixed() {
        let mut store = ConstraintStore::new();
        apply(&mut store, "shale", "gbbbb");
        apply(&mut store, "stomp", "bbbbb");

        // 's' stays fixed at 0 even though the second guess grays it
        assert_eq!(store.position(0), PositionConstraint::Fixed(b's'));
        for i in 1..WORD_LENGTH {
            assert!(!store.admissible_letters(i).contains(b's'));
            assert!(!store.admissible_letters(i).contains(b't'));
        }
    }

    #[test]
    fn repeated_letter_gray_keeps_confirmed_occurrence() {
        // SPEED against ABIDE: first E yellow, second E gray
        let guess = word("speed");
        let solution = word("abide");
        let hints = Hints::calculate(&guess, &solution, HintPolicy::Counted);

        let mut store = ConstraintStore::new();
        store.apply_feedback(&guess, &hints);

        assert!(store.required_letters().contains(b'e'));
        assert!(!store.admissible_letters(2).contains(b'e'));
        assert!(!store.admissible_letters(3).contains(b'e'));
        assert!(store.admissible_letters(4).contains(b'e'));
        assert!(store.admits(&solution));
    }

    #[test]
    fn repeated_letter_gray_before_green() {
        // gray E listed before the green E must not wipe the green
        let mut store = ConstraintStore::new();
        apply(&mut store, "eerie", "bbbbg");

        assert_eq!(store.position(4), PositionConstraint::Fixed(b'e'));
        assert!(!store.admissible_letters(0).contains(b'e'));
        assert!(!store.admissible_letters(1).contains(b'e'));
        // only the gray positions lose 'e'; 'r' and 'i' go everywhere
        assert!(store.admissible_letters(2).contains(b'e'));
        assert!(!store.admissible_letters(2).contains(b'r'));
        assert!(!store.admissible_letters(0).contains(b'i'));
        assert!(store.admits(&word("shape")));
    }

    #[test]
    fn fixed_position_never_reopens() {
        let mut store = ConstraintStore::new();
        apply(&mut store, "crane", "gbbbb");
        apply(&mut store, "tulip", "gbbbb");

        assert_eq!(store.position(0), PositionConstraint::Fixed(b'c'));
    }

    #[test]
    fn admits_checks_required_letters() {
        let mut store = ConstraintStore::new();
        apply(&mut store, "crane", "bbybb");

        assert!(store.admits(&word("about")));
        assert!(!store.admits(&word("sloth"))); // lacks 'a'
        assert!(!store.admits(&word("plait"))); // 'a' excluded at position 2
        assert!(!store.admits(&word("cacao"))); // 'c' is gray
    }
}
