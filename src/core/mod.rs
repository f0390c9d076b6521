//! Core domain types for Wordle
//!
//! This module contains the fundamental domain types: validated words, letter
//! sets and per-position hints. Everything here is pure and cheap to copy or
//! compare.

mod hint;
mod letters;
mod word;

pub use hint::{Hint, HintPolicy, Hints};
pub use letters::LetterSet;
pub use word::{WORD_LENGTH, Word, WordError};
