//! End-to-end properties of the engine and game controller
//!
//! Games are drawn with a seeded RNG over the bundled word lists so every run
//! checks the same positions.

use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use wordlebot::SolverError;
use wordlebot::core::{Hint, HintPolicy, Hints, Word, WORD_LENGTH};
use wordlebot::engine::{
    CommonnessTable, ConstraintStore, Feedback, FrequencyStrategy, PositionalFrequencies,
    RandomStrategy, Strategy, filter_candidates, score_and_rank,
};
use wordlebot::game::{Game, GameConfig, GameState};
use wordlebot::wordlists::{
    Dictionary, SOLUTIONS, bundled_commonness, bundled_dictionary, loader::words_from_slice,
};

const GAMES: usize = 40;

fn words(list: &[&str]) -> Vec<Word> {
    words_from_slice(list)
}

/// Seeded solutions from the bundled pool
fn seeded_solutions(seed: u64) -> Vec<Word> {
    let pool = words_from_slice(SOLUTIONS);
    let mut rng = StdRng::seed_from_u64(seed);
    (0..GAMES)
        .filter_map(|_| pool.choose(&mut rng).cloned())
        .collect()
}

/// Play a game to the end, checking invariants after every guess
fn play_checked<S: Strategy>(
    strategy: S,
    dict: &Dictionary,
    table: &CommonnessTable,
    policy: HintPolicy,
    solution: &Word,
) -> GameState {
    let config = GameConfig::advisor().with_policy(policy);
    let mut game = Game::new(strategy, dict, table, config);
    let mut store = ConstraintStore::new();
    let mut previous: Vec<Word> = dict.words().to_vec();

    while !game.is_over() {
        let guess = game.suggest().unwrap();
        let hints = game.submit(guess, Feedback::Oracle(solution)).unwrap();
        store.apply_feedback(guess, &hints);

        let current: Vec<Word> = game.candidates().iter().map(|w| (*w).clone()).collect();

        // the candidate set only ever shrinks
        assert!(current.len() <= previous.len());
        assert!(current.iter().all(|w| previous.contains(w)));

        // the real solution is never filtered out
        assert!(
            current.contains(solution),
            "{solution} lost after {guess} ({hints}) under {policy:?}"
        );

        // incremental filtering agrees with filtering the full vocabulary
        let scratch: Vec<&Word> = filter_candidates(dict.words(), &store);
        assert_eq!(scratch, game.candidates());

        for candidate in &current {
            // required letters appear in every candidate
            assert!(store.required_letters().is_subset(candidate.letters()));

            for (pos, hint) in hints.as_array().iter().enumerate() {
                // greens pin their letter
                if *hint == Hint::Correct {
                    assert_eq!(candidate.char_at(pos), guess.char_at(pos));
                }
            }
        }

        previous = current;
    }

    game.state()
}

#[test]
fn frequency_games_keep_invariants() {
    let dict = bundled_dictionary();
    let table = bundled_commonness();

    for policy in [HintPolicy::Counted, HintPolicy::Naive] {
        for solution in seeded_solutions(1) {
            let state = play_checked(FrequencyStrategy::default(), &dict, &table, policy, &solution);
            assert_eq!(state, GameState::Won);
        }
    }
}

#[test]
fn random_games_keep_invariants() {
    let dict = bundled_dictionary();
    let table = bundled_commonness();

    for solution in seeded_solutions(2) {
        let state = play_checked(RandomStrategy, &dict, &table, HintPolicy::Counted, &solution);
        assert_eq!(state, GameState::Won);
    }
}

#[test]
fn absent_only_letters_disappear() {
    let dict = bundled_dictionary();
    let table = bundled_commonness();

    for solution in seeded_solutions(3) {
        let mut game = Game::new(
            FrequencyStrategy::default(),
            &dict,
            &table,
            GameConfig::advisor(),
        );

        while !game.is_over() {
            let guess = game.suggest().unwrap();
            let hints = game.submit(guess, Feedback::Oracle(&solution)).unwrap();

            for (pos, hint) in hints.as_array().iter().enumerate() {
                let letter = guess.char_at(pos);
                let confirmed = guess
                    .chars()
                    .iter()
                    .zip(hints.as_array())
                    .any(|(&l, &h)| l == letter && h != Hint::Absent);
                if *hint == Hint::Absent && !confirmed {
                    assert!(
                        game.candidates().iter().all(|w| !w.has_letter(letter)),
                        "'{}' survives after {guess} ({hints})",
                        char::from(letter)
                    );
                }
            }
        }
    }
}

#[test]
fn normalized_frequencies_sum_to_one() {
    let vocabulary = words_from_slice(SOLUTIONS);
    let refs: Vec<&Word> = vocabulary.iter().collect();
    let freqs = PositionalFrequencies::compute(&refs).unwrap();

    for pos in 0..WORD_LENGTH {
        let total: f64 = (b'a'..=b'z').map(|l| freqs.normalized(pos, l)).sum();
        assert!((total - 1.0).abs() < 1e-9, "position {pos} sums to {total}");
    }
}

#[test]
fn ranking_is_deterministic() {
    let dict = bundled_dictionary();
    let table = bundled_commonness();
    let refs: Vec<&Word> = dict.words().iter().collect();
    let freqs = PositionalFrequencies::compute(&refs).unwrap();

    let first = score_and_rank(&refs, &freqs, &table, 0.4).unwrap();
    let second = score_and_rank(&refs, &freqs, &table, 0.4).unwrap();
    assert_eq!(first, second);

    for pair in first.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].word < pair[1].word)
        );
    }
}

#[test]
fn five_word_frequency_table() {
    let vocabulary = words(&["crane", "crate", "trace", "grace", "brace"]);
    let refs: Vec<&Word> = vocabulary.iter().collect();
    let freqs = PositionalFrequencies::compute(&refs).unwrap();

    assert_eq!(freqs.count(0, b'c'), 2);
    assert_eq!(freqs.count(0, b't'), 1);
    assert_eq!(freqs.count(0, b'g'), 1);
    assert_eq!(freqs.count(0, b'b'), 1);
    assert_eq!(freqs.count(1, b'r'), 5);
    assert_eq!(freqs.count(2, b'a'), 5);
    assert_eq!(freqs.count(3, b'c'), 3);
    assert_eq!(freqs.count(3, b'n'), 1);
    assert_eq!(freqs.count(3, b't'), 1);
    assert_eq!(freqs.count(4, b'e'), 5);
    assert!((freqs.normalized(3, b'c') - 0.6).abs() < 1e-12);
}

#[test]
fn crate_against_grace() {
    let guess = Word::new("crate").unwrap();
    let solution = Word::new("grace").unwrap();
    let expected = Hints::new([
        Hint::Present,
        Hint::Correct,
        Hint::Correct,
        Hint::Absent,
        Hint::Correct,
    ]);

    for policy in [HintPolicy::Counted, HintPolicy::Naive] {
        assert_eq!(Hints::calculate(&guess, &solution, policy), expected);
    }
}

#[test]
fn all_correct_wins_and_contradiction_is_unsatisfiable() {
    let dict = Dictionary::new(words(&["crane", "crate", "trace", "grace", "brace"]));
    let table = CommonnessTable::new();
    let config = GameConfig::advisor();

    let mut game = Game::new(FrequencyStrategy::new(0.0), &dict, &table, config);
    game.submit_text("trace", Feedback::Advisor(Hints::SOLVED)).unwrap();
    assert_eq!(game.state(), GameState::Won);

    let mut game = Game::new(FrequencyStrategy::new(0.0), &dict, &table, config);
    let result = game.submit_text("crane", Feedback::Advisor(Hints::parse("bbbbb").unwrap()));
    assert_eq!(result, Err(SolverError::UnsatisfiableConstraints));
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn capped_self_play_ends_won_or_lost() {
    let dict = bundled_dictionary();
    let table = bundled_commonness();

    for solution in seeded_solutions(4) {
        let mut game = Game::new(RandomStrategy, &dict, &table, GameConfig::default());
        let state = game.play_out(&solution).unwrap();

        assert!(matches!(state, GameState::Won | GameState::Lost));
        assert!(game.num_guesses() <= 6);
        if state == GameState::Lost {
            assert_eq!(game.num_guesses(), 6);
        }
    }
}
