//! Formatting utilities for terminal output

use crate::core::{Hint, Hints, Word};
use colored::{ColoredString, Colorize};
use std::fmt::Write;

/// One letter as a coloured tile
#[must_use]
pub fn hint_tile(letter: u8, hint: Hint) -> ColoredString {
    let text = format!(" {} ", char::from(letter.to_ascii_uppercase()));
    match hint {
        Hint::Correct => text.black().on_green().bold(),
        Hint::Present => text.black().on_yellow().bold(),
        Hint::Absent => text.white().on_bright_black(),
    }
}

/// A guess rendered as coloured tiles
#[must_use]
pub fn colored_guess(word: &Word, hints: &Hints) -> String {
    word.chars()
        .iter()
        .zip(hints.as_array())
        .fold(String::new(), |mut out, (&letter, &hint)| {
            let _ = write!(out, "{}", hint_tile(letter, hint));
            out
        })
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // values are clamped to [0, width]
    let filled = ((value / max).clamp(0.0, 1.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Plural suffix for guess counts
#[must_use]
pub const fn guesses_word(count: usize) -> &'static str {
    if count == 1 { "guess" } else { "guesses" }
}
