//! Feedback evaluation
//!
//! Produces the hints for a guess, either by scoring it against a known
//! solution (self-play, user play) or by taking hints reported from outside
//! (advisor mode, where only a human knows the answer).

use crate::core::{HintPolicy, Hints, Word};

/// Where the hints for a guess come from
#[derive(Debug, Clone, Copy)]
pub enum Feedback<'a> {
    /// Solution known: derive hints under the given duplicate-letter policy
    Oracle(&'a Word),
    /// Solution unknown: hints were reported and already parsed
    Advisor(Hints),
}

/// Hints for `guess`
///
/// # Examples
/// ```
/// use wordlebot::core::{HintPolicy, Hints, Word};
/// use wordlebot::engine::{Feedback, evaluate};
///
/// let guess = Word::new("crate").unwrap();
/// let solution = Word::new("grace").unwrap();
///
/// let hints = evaluate(&guess, Feedback::Oracle(&solution), HintPolicy::Counted);
/// assert_eq!(hints, Hints::parse("yggbg").unwrap());
///
/// let reported = Hints::parse("ggggg").unwrap();
/// assert!(evaluate(&guess, Feedback::Advisor(reported), HintPolicy::Counted).is_solved());
/// ```
#[must_use]
pub fn evaluate(guess: &Word, feedback: Feedback<'_>, policy: HintPolicy) -> Hints {
    match feedback {
        Feedback::Oracle(solution) => Hints::calculate(guess, solution, policy),
        Feedback::Advisor(hints) => hints,
    }
}
