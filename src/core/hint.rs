//! Per-position feedback for a guess
//!
//! Each of the five positions gets one of three hints:
//! - `Correct`: right letter, right place (green)
//! - `Present`: letter is in the solution, but not here (yellow)
//! - `Absent`: letter is not in the solution, or every occurrence is
//!   already accounted for (gray)

use super::word::{WORD_LENGTH, Word};
use crate::error::SolverError;
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hint {
    Correct,
    Present,
    Absent,
}

impl Hint {
    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'g'/'G'/🟩 for correct
    /// - 'y'/'Y'/🟨 for present
    /// - 'b'/'B'/'-'/'_'/⬜/⬛ for absent
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' | 'G' | '🟩' => Some(Self::Correct),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'b' | 'B' | '-' | '_' | '⬜' | '⬛' => Some(Self::Absent),
            _ => None,
        }
    }

    /// Canonical one-letter encoding (`g`, `y`, `b`)
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'g',
            Self::Present => 'y',
            Self::Absent => 'b',
        }
    }

    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// How repeated letters in a guess are scored against the solution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HintPolicy {
    /// Standard Wordle: greens first, then each remaining solution letter
    /// can justify at most one yellow.
    #[default]
    Counted,
    /// A non-green letter is yellow whenever it occurs anywhere in the
    /// solution. Over-reports yellows for repeated letters.
    Naive,
}

impl HintPolicy {
    /// Parse a policy name (`counted` or `naive`)
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "counted" | "standard" => Some(Self::Counted),
            "naive" => Some(Self::Naive),
            _ => None,
        }
    }
}

/// The five hints for one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hints([Hint; WORD_LENGTH]);

impl Hints {
    /// All greens
    pub const SOLVED: Self = Self([Hint::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(hints: [Hint; WORD_LENGTH]) -> Self {
        Self(hints)
    }

    #[must_use]
    pub const fn as_array(&self) -> &[Hint; WORD_LENGTH] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub const fn get(&self, position: usize) -> Hint {
        self.0[position]
    }

    /// True when every position is `Correct`
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.0.iter().all(|&hint| hint == Hint::Correct)
    }

    /// Calculate the hints when `guess` is played against `solution`
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::{Hint, HintPolicy, Hints, Word};
    ///
    /// let guess = Word::new("crate").unwrap();
    /// let solution = Word::new("grace").unwrap();
    /// let hints = Hints::calculate(&guess, &solution, HintPolicy::Counted);
    ///
    /// assert_eq!(hints.to_string(), "yggbg");
    /// assert_eq!(hints.get(3), Hint::Absent);
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word, policy: HintPolicy) -> Self {
        match policy {
            HintPolicy::Counted => Self::calculate_counted(guess, solution),
            HintPolicy::Naive => Self::calculate_naive(guess, solution),
        }
    }

    fn calculate_counted(guess: &Word, solution: &Word) -> Self {
        let mut result = [Hint::Absent; WORD_LENGTH];
        let mut available = solution.letter_counts();

        // First pass: greens consume their letter
        for (i, hint) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == solution.char_at(i) {
                *hint = Hint::Correct;
                available[usize::from(letter - b'a')] -= 1;
            }
        }

        // Second pass: yellows from what is left, left to right
        for (i, hint) in result.iter_mut().enumerate() {
            if *hint == Hint::Correct {
                continue;
            }
            let slot = &mut available[usize::from(guess.char_at(i) - b'a')];
            if *slot > 0 {
                *hint = Hint::Present;
                *slot -= 1;
            }
        }

        Self(result)
    }

    fn calculate_naive(guess: &Word, solution: &Word) -> Self {
        let mut result = [Hint::Absent; WORD_LENGTH];
        for (i, hint) in result.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            if letter == solution.char_at(i) {
                *hint = Hint::Correct;
            } else if solution.has_letter(letter) {
                *hint = Hint::Present;
            }
        }
        Self(result)
    }

    /// Parse externally supplied feedback such as `"gybbg"` or `"🟩🟨⬜⬜🟩"`
    ///
    /// Whitespace is ignored; anything else must be exactly five valid
    /// symbols.
    ///
    /// # Errors
    /// Returns `SolverError::MalformedFeedback` on a wrong length or an
    /// unknown symbol.
    ///
    /// # Examples
    /// ```
    /// use wordlebot::core::Hints;
    ///
    /// let a = Hints::parse("g y b b g").unwrap();
    /// let b = Hints::parse("🟩🟨⬜⬜🟩").unwrap();
    /// assert_eq!(a, b);
    /// assert!(Hints::parse("gybb").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, SolverError> {
        let malformed = || SolverError::MalformedFeedback(input.to_string());

        let mut hints = [Hint::Absent; WORD_LENGTH];
        let mut count = 0;
        for symbol in input.chars().filter(|c| !c.is_whitespace()) {
            let hint = Hint::from_symbol(symbol).ok_or_else(malformed)?;
            *hints.get_mut(count).ok_or_else(malformed)? = hint;
            count += 1;
        }

        if count == WORD_LENGTH {
            Ok(Self(hints))
        } else {
            Err(malformed())
        }
    }

    /// Render as square emoji, e.g. "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|hint| hint.emoji()).collect()
    }
}

impl fmt::Display for Hints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for hint in &self.0 {
            write!(f, "{}", hint.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Hints {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
