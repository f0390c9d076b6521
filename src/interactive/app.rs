//! TUI application state and logic

use crate::core::Hints;
use crate::engine::{CommonnessTable, Feedback, StrategyType};
use crate::error::SolverError;
use crate::game::{Game, GameConfig, GameState, GuessRecord};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Candidates listed in the side panel
pub const SHOWN_CANDIDATES: usize = 12;

/// Application state
pub struct App<'a> {
    pub game: Game<'a, StrategyType>,
    strategy: StrategyType,
    dictionary: &'a Dictionary,
    commonness: &'a CommonnessTable,
    config: GameConfig,
    pub current_guess: Option<GuessInfo>,
    /// Best-ranked candidates with their scores
    pub top_candidates: Vec<(String, f64)>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    WinCelebration,
}

/// The word the player is about to report colours for
#[derive(Debug, Clone, PartialEq)]
pub struct GuessInfo {
    pub word: String,
    /// Score among the candidates; `None` for a word outside the candidate set
    pub score: Option<f64>,
    pub suggested: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index = guesses taken; the last slot collects everything beyond it
    pub guess_distribution: [usize; 8],
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(
        strategy: StrategyType,
        dictionary: &'a Dictionary,
        commonness: &'a CommonnessTable,
        config: GameConfig,
    ) -> Self {
        let mut app = Self {
            game: Game::new(strategy.clone(), dictionary, commonness, config),
            strategy,
            dictionary,
            commonness,
            config,
            current_guess: None,
            top_candidates: Vec::new(),
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_word: String::new(),
        };
        app.add_message(
            "Welcome! Play the suggested word, then type the colours you got.",
            MessageStyle::Info,
        );
        app.add_message(
            "g = green, y = yellow, b = gray (e.g. 'gybbg')",
            MessageStyle::Info,
        );
        app.compute_suggestion();
        app
    }

    #[must_use]
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.game.candidates().len()
    }

    /// Total information gathered this game, in bits
    #[must_use]
    pub fn bits_gained(&self) -> f64 {
        self.game
            .history()
            .iter()
            .filter_map(GuessRecord::bits_of_information)
            .sum()
    }

    /// Information needed to pin down one word of the full vocabulary
    #[must_use]
    pub fn total_bits(&self) -> f64 {
        (self.dictionary.len().max(1) as f64).log2()
    }

    pub fn compute_suggestion(&mut self) {
        self.top_candidates.clear();
        self.current_guess = None;

        if self.game.is_over() {
            return;
        }

        match self.game.ranked() {
            Ok(ranked) => {
                self.top_candidates = ranked
                    .iter()
                    .take(SHOWN_CANDIDATES)
                    .map(|scored| (scored.word.text().to_string(), scored.score))
                    .collect();

                match self.game.suggest() {
                    Ok(word) => {
                        let score = ranked.iter().find(|s| s.word == word).map(|s| s.score);
                        debug!("tui suggestion '{word}' ({score:?})");
                        self.current_guess = Some(GuessInfo {
                            word: word.text().to_string(),
                            score,
                            suggested: true,
                        });
                    }
                    Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
                }
            }
            Err(SolverError::UnsatisfiableConstraints) => self.add_message(
                "No candidates remain - feedback may be incorrect. Press 'u' to undo.",
                MessageStyle::Error,
            ),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    pub fn handle_feedback(&mut self, feedback: &str) {
        let hints = match Hints::parse(feedback) {
            Ok(hints) => hints,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        };
        let Some(guess) = self.current_guess.clone() else {
            self.add_message("No word to report colours for", MessageStyle::Error);
            return;
        };

        self.input_buffer.clear();
        match self.game.submit_text(&guess.word, Feedback::Advisor(hints)) {
            Ok(_) if self.game.state() == GameState::Won => self.celebrate(),
            Ok(_) => {
                self.compute_suggestion();
                if let Some(record) = self.game.last_guess() {
                    let bits = record
                        .bits_of_information()
                        .map_or_else(String::new, |b| format!(", {b:.2} bits"));
                    let text = format!(
                        "{} candidates remaining ({:.1}% eliminated{bits})",
                        record.candidates_after,
                        record.reduction_percentage()
                    );
                    self.add_message(&text, MessageStyle::Info);
                }
            }
            Err(SolverError::UnsatisfiableConstraints) => self.compute_suggestion(),
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn celebrate(&mut self) {
        let guess_count = self.game.num_guesses();
        self.stats.games_won += 1;
        self.stats.total_games += 1;
        let slot = guess_count.min(self.stats.guess_distribution.len() - 1);
        self.stats.guess_distribution[slot] += 1;

        self.current_guess = None;
        self.top_candidates.clear();
        self.input_mode = InputMode::WinCelebration;

        let celebration = match guess_count {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            6 => "😅 PHEW! Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };
        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        if !self.game.history().is_empty() && self.game.state() != GameState::Won {
            self.stats.total_games += 1;
        }
        self.game = Game::new(
            self.strategy.clone(),
            self.dictionary,
            self.commonness,
            self.config,
        );
        self.input_buffer.clear();
        self.manual_word.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message("New game started!", MessageStyle::Info);
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if let Some(previous) = self.game.without_last_guess() {
            self.game = previous;
            self.input_mode = InputMode::Feedback;
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Report colours for a word of the player's choosing instead
    pub fn use_manual_word(&mut self) {
        let text = self.manual_word.clone();
        let Some(word) = self.dictionary.get(&text) else {
            self.add_message(
                &format!("Word '{}' not in the word list!", text.to_uppercase()),
                MessageStyle::Error,
            );
            return;
        };

        let score = self
            .game
            .ranked()
            .ok()
            .and_then(|ranked| ranked.iter().find(|s| s.word == word).map(|s| s.score));

        if let (Some(suggested), Some(score)) = (
            self.current_guess.as_ref().and_then(|g| g.score),
            score,
        ) && score < suggested
        {
            self.add_message(
                &format!(
                    "Note: suggested word scored {suggested:.2} ({:.2} more)",
                    suggested - score
                ),
                MessageStyle::Info,
            );
        }
        if score.is_none() {
            self.add_message(
                "That word can no longer be the answer, but it may still narrow things down",
                MessageStyle::Info,
            );
        }

        self.current_guess = Some(GuessInfo {
            word: text.clone(),
            score,
            suggested: false,
        });
        self.add_message(&format!("Using: {}", text.to_uppercase()), MessageStyle::Success);
        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn quit_requested(code: KeyCode, modifiers: KeyModifiers) -> bool {
    matches!(code, KeyCode::Char('q'))
        || (code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL))
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::WinCelebration => match key.code {
                    code if quit_requested(code, key.modifiers) => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    _ => {}
                },
                InputMode::Feedback => match key.code {
                    code if quit_requested(code, key.modifiers) => app.should_quit = true,
                    KeyCode::Char('n') => app.new_game(),
                    KeyCode::Char('u') => app.undo_last(),
                    KeyCode::Tab => {
                        app.input_mode = InputMode::ManualWord;
                        app.add_message("Enter your own word (5 letters)", MessageStyle::Info);
                    }
                    KeyCode::Char(c) => {
                        if app.input_buffer.chars().count() < 5 {
                            app.input_buffer.push(c);
                        }
                    }
                    KeyCode::Backspace => {
                        app.input_buffer.pop();
                    }
                    KeyCode::Enter => {
                        let input = app.input_buffer.clone();
                        app.handle_feedback(&input);
                    }
                    _ => {}
                },
                InputMode::ManualWord => match key.code {
                    KeyCode::Esc | KeyCode::Tab => {
                        app.input_mode = InputMode::Feedback;
                        app.manual_word.clear();
                    }
                    KeyCode::Char(c) => {
                        if app.manual_word.len() < 5 && c.is_ascii_alphabetic() {
                            app.manual_word.push(c.to_ascii_lowercase());
                        }
                    }
                    KeyCode::Backspace => {
                        app.manual_word.pop();
                    }
                    KeyCode::Enter => {
                        if app.manual_word.len() == 5 {
                            app.use_manual_word();
                        } else {
                            app.add_message("Word must be exactly 5 letters!", MessageStyle::Error);
                        }
                    }
                    _ => {}
                },
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        Dictionary::from_texts(&["crane", "crate", "trace", "grace", "brace", "irate"])
    }

    fn positional() -> StrategyType {
        StrategyType::from_name("positional", 0.0)
    }

    fn config() -> GameConfig {
        GameConfig::advisor()
    }

    #[test]
    fn starts_with_a_suggestion() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let app = App::new(positional(), &dict, &table, config());

        let guess = app.current_guess.as_ref().unwrap();
        assert!(guess.suggested);
        assert!(guess.score.is_some());
        assert_eq!(app.top_candidates[0].0, guess.word);
        assert_eq!(app.candidates_count(), dict.len());
    }

    #[test]
    fn feedback_narrows_and_wins() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let mut app = App::new(positional(), &dict, &table, config());

        app.manual_word = "crate".to_string();
        app.use_manual_word();
        assert_eq!(app.current_guess.as_ref().unwrap().word, "crate");
        assert!(!app.current_guess.as_ref().unwrap().suggested);

        app.handle_feedback("yggbg");
        assert_eq!(app.candidates_count(), 2);
        assert!(app.bits_gained() > 0.0);

        app.handle_feedback("ggggg");
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
    }

    #[test]
    fn bad_feedback_is_reported() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let mut app = App::new(positional(), &dict, &table, config());

        app.handle_feedback("gyx");
        assert_eq!(app.game.num_guesses(), 0);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn unknown_manual_word_is_rejected() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let mut app = App::new(positional(), &dict, &table, config());
        let before = app.current_guess.clone();

        app.manual_word = "zebra".to_string();
        app.use_manual_word();
        assert_eq!(app.current_guess, before);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn undo_and_new_game() {
        let dict = dictionary();
        let table = CommonnessTable::new();
        let mut app = App::new(positional(), &dict, &table, config());

        app.handle_feedback("bbbbb");
        assert_eq!(app.candidates_count(), 0);
        assert!(app.current_guess.is_none());

        app.undo_last();
        assert_eq!(app.candidates_count(), dict.len());
        assert!(app.current_guess.is_some());

        app.handle_feedback("bbbbb");
        app.new_game();
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.game.num_guesses(), 0);
        assert_eq!(app.input_mode, InputMode::Feedback);
    }
}
