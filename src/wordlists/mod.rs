//! Word lists for Wordle solving
//!
//! Provides embedded word lists compiled into the binary for zero-cost access.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{COMMONNESS, SOLUTIONS, SOLUTIONS_COUNT, WORDS, WORDS_COUNT};

use crate::engine::CommonnessTable;

/// The embedded vocabulary as a dictionary
#[must_use]
pub fn bundled_dictionary() -> Dictionary {
    Dictionary::new(loader::words_from_slice(WORDS))
}

/// The embedded commonness scores
#[must_use]
pub fn bundled_commonness() -> CommonnessTable {
    loader::commonness_from_slice(COMMONNESS)
}
