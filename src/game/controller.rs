//! Game controller
//!
//! Drives the guess → feedback → constraint update → re-filter loop and
//! tracks the terminal state.

use super::GameConfig;
use crate::core::{Hints, Word, WordError};
use crate::engine::{
    CommonnessTable, ConstraintStore, Feedback, PositionalFrequencies, ScoredWord, Strategy,
    evaluate, filter_candidates, score_and_rank,
};
use crate::error::{Result, SolverError};
use crate::wordlists::Dictionary;
use log::debug;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Won,
    Lost,
    Quit,
}

impl GameState {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// One submitted guess and what it did to the candidate set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub word: Word,
    pub hints: Hints,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

impl GuessRecord {
    /// Percentage of candidates this guess eliminated
    #[must_use]
    pub fn reduction_percentage(&self) -> f64 {
        if self.candidates_before == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.candidates_after as f64 / self.candidates_before as f64)
    }

    /// Information gained, `-log2(after / before)`
    ///
    /// `None` when the guess left no candidates.
    #[must_use]
    pub fn bits_of_information(&self) -> Option<f64> {
        (self.candidates_after > 0 && self.candidates_before > 0).then(|| {
            -(self.candidates_after as f64 / self.candidates_before as f64).log2()
        })
    }
}

/// One game of Wordle
///
/// Owns its constraint store, candidate set and history. The dictionary and
/// commonness table are borrowed and never mutated, so any number of games
/// can share them.
pub struct Game<'a, S: Strategy> {
    strategy: S,
    dictionary: &'a Dictionary,
    commonness: &'a CommonnessTable,
    config: GameConfig,
    store: ConstraintStore,
    candidates: Vec<&'a Word>,
    history: Vec<GuessRecord>,
    state: GameState,
}

impl<'a, S: Strategy> Game<'a, S> {
    /// Start a game with every dictionary word as a candidate
    #[must_use]
    pub fn new(
        strategy: S,
        dictionary: &'a Dictionary,
        commonness: &'a CommonnessTable,
        config: GameConfig,
    ) -> Self {
        Self {
            strategy,
            dictionary,
            commonness,
            config,
            store: ConstraintStore::new(),
            candidates: dictionary.words().iter().collect(),
            history: Vec::new(),
            state: GameState::InProgress,
        }
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Guesses submitted so far
    #[must_use]
    pub fn num_guesses(&self) -> usize {
        self.history.len()
    }

    #[must_use]
    pub fn candidates(&self) -> &[&'a Word] {
        &self.candidates
    }

    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[must_use]
    pub fn last_guess(&self) -> Option<&GuessRecord> {
        self.history.last()
    }

    #[must_use]
    pub const fn constraints(&self) -> &ConstraintStore {
        &self.store
    }

    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'a Dictionary {
        self.dictionary
    }

    /// The strategy's pick for the next guess
    ///
    /// # Errors
    /// - `SolverError::GameOver` once the game has ended
    /// - `SolverError::UnsatisfiableConstraints` if no candidates remain
    /// - any scoring error from the strategy
    pub fn suggest(&self) -> Result<&'a Word> {
        self.ensure_in_progress()?;
        let guess = self.strategy.select_guess(&self.candidates, self.commonness)?;
        debug!(
            "suggesting '{guess}' from {} candidates",
            self.candidates.len()
        );
        Ok(guess)
    }

    /// Positional letter frequencies over the current candidates
    ///
    /// # Errors
    /// `SolverError::UnsatisfiableConstraints` if no candidates remain.
    pub fn frequencies(&self) -> Result<PositionalFrequencies> {
        PositionalFrequencies::compute(&self.candidates)
    }

    /// Every candidate with its score, best first
    ///
    /// Scored with the strategy's own commonness weight, so a frequency
    /// strategy always suggests the head of this list.
    ///
    /// # Errors
    /// Same as [`score_and_rank`].
    pub fn ranked(&self) -> Result<Vec<ScoredWord<'a>>> {
        let positional = self.frequencies()?;
        score_and_rank(
            &self.candidates,
            &positional,
            self.commonness,
            self.strategy.frequency_weight(),
        )
    }

    /// Parse and submit a guess typed by a person
    ///
    /// # Errors
    /// `SolverError::InvalidWord` if the text is not a lowercase 5-letter
    /// word, plus everything [`submit`](Self::submit) returns.
    pub fn submit_text(&mut self, guess: &str, feedback: Feedback<'_>) -> Result<Hints> {
        let word = Word::new(guess)?;
        self.submit(&word, feedback)
    }

    /// Play `guess`, apply its hints and re-filter the candidates
    ///
    /// On success returns the hints for the guess. The state becomes `Won`
    /// on all-correct hints and `Lost` when the turn cap is used up.
    ///
    /// # Errors
    /// - `SolverError::GameOver` once the game has ended
    /// - `SolverError::InvalidWord` if `guess` is not in the dictionary
    /// - `SolverError::UnsatisfiableConstraints` if the feedback leaves no
    ///   candidate. The guess is still recorded and the game stays in
    ///   progress; the caller decides whether to continue.
    pub fn submit(&mut self, guess: &Word, feedback: Feedback<'_>) -> Result<Hints> {
        self.ensure_in_progress()?;

        if !self.dictionary.contains(guess) {
            return Err(WordError::NotInVocabulary(guess.text().to_string()).into());
        }

        let hints = evaluate(guess, feedback, self.config.policy);
        self.store.apply_feedback(guess, &hints);

        let candidates_before = self.candidates.len();
        self.candidates = filter_candidates(self.candidates.iter().copied(), &self.store);

        self.history.push(GuessRecord {
            word: guess.clone(),
            hints,
            candidates_before,
            candidates_after: self.candidates.len(),
        });

        if hints.is_solved() {
            self.state = GameState::Won;
        } else if self
            .config
            .max_turns
            .is_some_and(|max| self.history.len() >= max)
        {
            self.state = GameState::Lost;
        } else if self.candidates.is_empty() {
            return Err(SolverError::UnsatisfiableConstraints);
        }

        debug!(
            "guess {} '{guess}' -> {hints}, {candidates_before} -> {} candidates, {:?}",
            self.history.len(),
            self.candidates.len(),
            self.state
        );

        Ok(hints)
    }

    /// Share of candidates removed by the last guess, in percent
    #[must_use]
    pub fn reduction_percentage(&self) -> Option<f64> {
        self.last_guess().map(GuessRecord::reduction_percentage)
    }

    /// Bits of information gained by the last guess
    #[must_use]
    pub fn bits_of_information(&self) -> Option<f64> {
        self.last_guess().and_then(GuessRecord::bits_of_information)
    }

    /// Leave the game
    pub fn quit(&mut self) {
        if !self.is_over() {
            self.state = GameState::Quit;
        }
    }

    /// Let the strategy play against a known solution until the game ends
    ///
    /// # Errors
    /// Any error from [`suggest`](Self::suggest) or [`submit`](Self::submit).
    pub fn play_out(&mut self, solution: &Word) -> Result<GameState> {
        while !self.is_over() {
            let guess = self.suggest()?;
            self.submit(guess, Feedback::Oracle(solution))?;
        }
        Ok(self.state)
    }

    fn ensure_in_progress(&self) -> Result<()> {
        if self.is_over() {
            Err(SolverError::GameOver)
        } else {
            Ok(())
        }
    }
}

impl<'a, S: Strategy + Clone> Game<'a, S> {
    /// The same game without its last guess
    ///
    /// Rebuilt by replaying the earlier guesses with their recorded hints.
    /// `None` when nothing has been guessed yet.
    #[must_use]
    pub fn without_last_guess(&self) -> Option<Self> {
        let (_, kept) = self.history.split_last()?;
        let mut replay = Self::new(
            self.strategy.clone(),
            self.dictionary,
            self.commonness,
            self.config,
        );
        for record in kept {
            // every kept guess was accepted before; at worst it is unsatisfiable again
            let replayed = replay.submit(&record.word, Feedback::Advisor(record.hints));
            debug_assert!(
                matches!(replayed, Ok(_) | Err(SolverError::UnsatisfiableConstraints)),
                "replaying '{}' failed: {replayed:?}",
                record.word
            );
        }
        Some(replay)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::HintPolicy;
    use crate::engine::{FrequencyStrategy, RandomStrategy, StrategyType};

    fn dictionary() -> Dictionary {
        Dictionary::from_texts(&[
            "crane", "crate", "trace", "grace", "brace", "slate", "irate", "speed", "abide",
        ])
    }

    fn positional() -> FrequencyStrategy {
        FrequencyStrategy::new(0.0)
    }

    fn config() -> GameConfig {
        GameConfig::default()
    }

    #[test]
    fn starts_with_full_vocabulary() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let game = Game::new(positional(), &dict, &table, config());

        assert_eq!(game.state(), GameState::InProgress);
        assert_eq!(game.candidates().len(), dict.len());
        assert_eq!(game.num_guesses(), 0);
    }

    #[test]
    fn all_correct_wins_immediately() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let mut game = Game::new(positional(), &dict, &table, GameConfig::advisor());

        let hints = game
            .submit_text("slate", Feedback::Advisor(Hints::SOLVED))
            .unwrap();

        assert!(hints.is_solved());
        assert_eq!(game.state(), GameState::Won);
        assert_eq!(game.num_guesses(), 1);
        assert_eq!(
            game.submit_text("crane", Feedback::Advisor(Hints::SOLVED)),
            Err(SolverError::GameOver)
        );
        assert_eq!(game.suggest(), Err(SolverError::GameOver));
    }

    #[test]
    fn oracle_round_filters_candidates() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let solution = Word::new("grace").unwrap();
        let mut game = Game::new(positional(), &dict, &table, config());

        let hints = game
            .submit_text("crate", Feedback::Oracle(&solution))
            .unwrap();

        assert_eq!(hints.to_string(), "yggbg");
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.candidates().iter().any(|w| **w == solution));
        assert!(game.candidates().len() < dict.len());
        assert!(game.reduction_percentage().unwrap() > 0.0);
        assert!(game.bits_of_information().unwrap() > 0.0);

        let record = game.last_guess().unwrap();
        assert_eq!(record.candidates_before, dict.len());
        assert_eq!(record.candidates_after, game.candidates().len());
    }

    #[test]
    fn rejects_words_outside_dictionary() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let mut game = Game::new(positional(), &dict, &table, config());

        assert!(matches!(
            game.submit_text("zebra", Feedback::Advisor(Hints::SOLVED)),
            Err(SolverError::InvalidWord(WordError::NotInVocabulary(_)))
        ));
        assert!(matches!(
            game.submit_text("CRANE", Feedback::Advisor(Hints::SOLVED)),
            Err(SolverError::InvalidWord(WordError::InvalidCharacters(_)))
        ));
        assert!(matches!(
            game.submit_text("cranes", Feedback::Advisor(Hints::SOLVED)),
            Err(SolverError::InvalidWord(WordError::InvalidLength(6)))
        ));
        // rejected guesses do not count
        assert_eq!(game.num_guesses(), 0);
        assert_eq!(game.state(), GameState::InProgress);
    }

    #[test]
    fn contradictory_feedback_is_unsatisfiable() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let mut game = Game::new(positional(), &dict, &table, GameConfig::advisor());

        // every letter gray and yet no dictionary word avoids c, r, a, n, e
        let result = game.submit_text("crane", Feedback::Advisor(Hints::parse("bbbbb").unwrap()));

        assert_eq!(result, Err(SolverError::UnsatisfiableConstraints));
        assert_eq!(game.state(), GameState::InProgress);
        assert!(game.candidates().is_empty());
        assert_eq!(game.suggest(), Err(SolverError::UnsatisfiableConstraints));
    }

    #[test]
    fn turn_cap_loses() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let solution = Word::new("irate").unwrap();
        let mut game = Game::new(positional(), &dict, &table, config().with_max_turns(Some(1)));

        game.submit_text("speed", Feedback::Oracle(&solution)).unwrap();
        assert_eq!(game.state(), GameState::Lost);
    }

    #[test]
    fn quit_is_terminal() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let mut game = Game::new(positional(), &dict, &table, config());

        game.quit();
        assert_eq!(game.state(), GameState::Quit);
        assert!(game.is_over());
    }

    #[test]
    fn play_out_solves_every_word() {
        let dict = dictionary();
        let table = CommonnessTable::new();

        for solution in dict.words() {
            for policy in [HintPolicy::Counted, HintPolicy::Naive] {
                let mut game = Game::new(
                    positional(),
                    &dict,
                    &table,
                    GameConfig::advisor().with_policy(policy),
                );
                assert_eq!(game.play_out(solution).unwrap(), GameState::Won);
                assert_eq!(game.last_guess().unwrap().word, *solution);
            }
        }
    }

    #[test]
    fn random_strategy_also_wins_uncapped() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let solution = Word::new("abide").unwrap();
        let mut game = Game::new(RandomStrategy, &dict, &table, GameConfig::advisor());

        assert_eq!(game.play_out(&solution).unwrap(), GameState::Won);
        assert!(game.num_guesses() <= dict.len());
    }

    #[test]
    fn undo_replays_earlier_guesses() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let mut game = Game::new(positional(), &dict, &table, GameConfig::advisor());

        game.submit_text("crate", Feedback::Advisor(Hints::parse("yggbg").unwrap()))
            .unwrap();
        let after_first = game.candidates().to_vec();
        game.submit_text("brace", Feedback::Advisor(Hints::parse("bgggg").unwrap()))
            .unwrap();
        assert_eq!(game.candidates().len(), 1);

        let rewound = game.without_last_guess().unwrap();
        assert_eq!(rewound.num_guesses(), 1);
        assert_eq!(rewound.candidates(), after_first.as_slice());
        assert_eq!(rewound.history()[0], game.history()[0]);

        let fresh = rewound.without_last_guess().unwrap();
        assert_eq!(fresh.num_guesses(), 0);
        assert_eq!(fresh.candidates().len(), dict.len());
        assert!(fresh.without_last_guess().is_none());
    }

    #[test]
    fn undo_reopens_a_won_game() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let mut game = Game::new(positional(), &dict, &table, GameConfig::advisor());

        game.submit_text("slate", Feedback::Advisor(Hints::SOLVED)).unwrap();
        let rewound = game.without_last_guess().unwrap();
        assert_eq!(rewound.state(), GameState::InProgress);
    }

    #[test]
    fn information_report() {
        let record = GuessRecord {
            word: Word::new("crane").unwrap(),
            hints: Hints::parse("bbbbb").unwrap(),
            candidates_before: 100,
            candidates_after: 25,
        };
        assert!((record.reduction_percentage() - 75.0).abs() < 1e-9);
        assert!((record.bits_of_information().unwrap() - 2.0).abs() < 1e-9);

        let emptied = GuessRecord {
            candidates_after: 0,
            ..record
        };
        assert!((emptied.reduction_percentage() - 100.0).abs() < 1e-9);
        assert_eq!(emptied.bits_of_information(), None);
    }

    #[test]
    fn ranked_lists_every_candidate() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let game = Game::new(positional(), &dict, &table, config());

        let ranked = game.ranked().unwrap();
        assert_eq!(ranked.len(), dict.len());
        assert_eq!(ranked[0].word, game.suggest().unwrap());
    }

    #[test]
    fn suggestion_heads_the_ranked_list_for_every_weight() {
        let dict = Dictionary::from_texts(&["crane", "crate", "trace", "grace", "brace"]);
        let mut table = CommonnessTable::new();
        for word in dict.words() {
            table.insert(word, if word.text() == "crane" { 1.0 } else { 0.0 });
        }

        for name in ["frequency", "positional"] {
            let game = Game::new(
                StrategyType::from_name(name, 0.4),
                &dict,
                &table,
                GameConfig::advisor(),
            );
            assert_eq!(game.ranked().unwrap()[0].word, game.suggest().unwrap(), "{name}");
        }

        let positional = Game::new(
            StrategyType::from_name("positional", 0.4),
            &dict,
            &table,
            GameConfig::advisor(),
        );
        assert_eq!(positional.suggest().unwrap().text(), "brace");

        // weight 0 never reads the table, for ranking or suggesting
        let empty = CommonnessTable::new();
        let game = Game::new(
            StrategyType::from_name("positional", 0.4),
            &dict,
            &empty,
            GameConfig::advisor(),
        );
        assert_eq!(game.suggest().unwrap().text(), "brace");
        assert_eq!(game.ranked().unwrap()[0].word.text(), "brace");
    }

    #[test]
    fn undo_replays_through_an_unsatisfiable_guess() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let mut game = Game::new(positional(), &dict, &table, GameConfig::advisor());

        let emptied = game.submit_text("crane", Feedback::Advisor(Hints::parse("bbbbb").unwrap()));
        assert_eq!(emptied, Err(SolverError::UnsatisfiableConstraints));
        game.submit_text("slate", Feedback::Advisor(Hints::SOLVED)).unwrap();

        let rewound = game.without_last_guess().unwrap();
        assert_eq!(rewound.num_guesses(), 1);
        assert!(rewound.candidates().is_empty());
        assert_eq!(rewound.state(), GameState::InProgress);
    }
}
