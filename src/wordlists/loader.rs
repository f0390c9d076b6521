//! Word list loading utilities
//!
//! Reads vocabularies and commonness tables from files or from the embedded
//! constants. Input is trimmed and lowercased here, at the boundary.

use crate::core::Word;
use crate::engine::CommonnessTable;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::Path;

fn normalize(line: &str) -> Option<Word> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }
    match Word::new(trimmed.to_ascii_lowercase()) {
        Ok(word) => Some(word),
        Err(e) => {
            debug!("skipping '{trimmed}': {e}");
            None
        }
    }
}

/// Load words from a file, one per line
///
/// Blank lines and entries that are not 5 letters a-z are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordlebot::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/words.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path.as_ref())?;
    let words: Vec<Word> = content.lines().filter_map(normalize).collect();
    debug!("loaded {} words from {}", words.len(), path.as_ref().display());
    Ok(words)
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordlebot::wordlists::loader::words_from_slice;
/// use wordlebot::wordlists::WORDS;
///
/// let words = words_from_slice(WORDS);
/// assert_eq!(words.len(), WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    slice.iter().filter_map(|s| normalize(s)).collect()
}

/// Parse commonness lines of the form `word score`
///
/// Lines whose word is invalid are skipped with a warning; a score that does
/// not parse is an error.
fn parse_commonness<'l>(lines: impl Iterator<Item = &'l str>) -> io::Result<CommonnessTable> {
    let mut table = CommonnessTable::new();

    for line in lines {
        let mut parts = line.split_whitespace();
        let (Some(text), Some(score)) = (parts.next(), parts.next()) else {
            continue;
        };
        let score: f64 = score.parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("bad commonness score for '{text}': {e}"),
            )
        })?;
        match normalize(text) {
            Some(word) => table.insert(&word, score),
            None => warn!("ignoring commonness entry for '{text}'"),
        }
    }

    Ok(table)
}

/// Load a commonness table from a file of `word score` lines
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or `InvalidData` if a
/// score is not a number.
pub fn load_commonness_from_file<P: AsRef<Path>>(path: P) -> io::Result<CommonnessTable> {
    let content = fs::read_to_string(path.as_ref())?;
    let table = parse_commonness(content.lines())?;
    debug!(
        "loaded {} commonness scores from {}",
        table.len(),
        path.as_ref().display()
    );
    Ok(table)
}

/// Build a commonness table from the embedded `(word, score)` pairs
#[must_use]
pub fn commonness_from_slice(slice: &[(&str, f64)]) -> CommonnessTable {
    let mut table = CommonnessTable::new();
    for &(text, score) in slice {
        if let Some(word) = normalize(text) {
            table.insert(&word, score);
        }
    }
    table
}
