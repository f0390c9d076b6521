//! TUI rendering with ratatui
//!
//! Left: the board of played guesses and the word to play next.
//! Right: ranked candidates, information gauge and messages.

use super::app::{App, InputMode, MessageStyle, SHOWN_CANDIDATES};
use crate::core::{Hint, Hints, Word};
use crate::output::formatters::create_progress_bar;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Rows on the board before older guesses scroll off
const BOARD_ROWS: usize = 8;

const fn tile_colour(hint: Hint) -> Color {
    match hint {
        Hint::Correct => Color::Green,
        Hint::Present => Color::Yellow,
        Hint::Absent => Color::DarkGray,
    }
}

fn tile_row(word: &Word, hints: &Hints) -> Vec<Span<'static>> {
    word.chars()
        .iter()
        .zip(hints.as_array())
        .map(|(&letter, &hint)| {
            Span::styled(
                format!(" {} ", char::from(letter.to_ascii_uppercase())),
                Style::default()
                    .fg(Color::Black)
                    .bg(tile_colour(hint))
                    .add_modifier(Modifier::BOLD),
            )
        })
        .collect()
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// Draw the whole advisor screen
pub fn ui(f: &mut Frame, app: &App) {
    let [title, body, input, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(12),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(f.area());

    render_title(f, app, title);

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(body);
    let [board, next] = Layout::vertical([Constraint::Min(6), Constraint::Length(5)]).areas(left);
    let [candidates, gauge, messages] = Layout::vertical([
        Constraint::Min(6),
        Constraint::Length(3),
        Constraint::Length(7),
    ])
    .areas(right);

    render_board(f, app, board);
    render_next_guess(f, app, next);
    render_candidates(f, app, candidates);
    render_information(f, app, gauge);
    render_messages(f, app, messages);
    render_input(f, app, input);
    render_footer(f, app, footer);
}

fn render_title(f: &mut Frame, app: &App, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " WORDLEBOT ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            "  {} strategy, {:?} hints, turn {}",
            app.strategy_name(),
            app.game.config().policy,
            app.game.num_guesses() + 1
        )),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let history = app.game.history();
    let skipped = history.len().saturating_sub(BOARD_ROWS);

    let rows: Vec<Line> = history
        .iter()
        .enumerate()
        .skip(skipped)
        .map(|(i, record)| {
            let mut spans = vec![Span::raw(format!("{:>2} ", i + 1))];
            spans.extend(tile_row(&record.word, &record.hints));
            spans.push(Span::styled(
                format!(
                    "  {} → {}",
                    record.candidates_before, record.candidates_after
                ),
                Style::default().fg(Color::Gray),
            ));
            Line::from(spans)
        })
        .collect();

    let content = if rows.is_empty() {
        vec![Line::from("No guesses yet")]
    } else {
        rows
    };
    f.render_widget(Paragraph::new(content).block(panel(" Board ")), area);
}

fn render_next_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = panel(" Next Guess ");

    let Some(ref guess) = app.current_guess else {
        let text = if app.game.is_over() {
            "Game over"
        } else {
            "No suggestion available"
        };
        f.render_widget(Paragraph::new(text).block(block), area);
        return;
    };

    let label = if guess.suggested { "Play " } else { "Playing " };
    let score_line = match (guess.score, app.top_candidates.first()) {
        (Some(score), Some((_, best))) => format!(
            "[{}] {score:.3}",
            create_progress_bar(score, *best, 20)
        ),
        _ => "not among the candidates".to_string(),
    };

    let content = vec![
        Line::from(vec![
            Span::raw(label),
            Span::styled(
                guess.word.to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(score_line),
    ];
    f.render_widget(Paragraph::new(content).block(block), area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let remaining = app.candidates_count();
    let title = format!(" Candidates ({remaining}) ");
    let best = app.top_candidates.first().map_or(0.0, |(_, score)| *score);

    let items: Vec<ListItem> = app
        .top_candidates
        .iter()
        .map(|(word, score)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<6}", word.to_uppercase()),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(create_progress_bar(*score, best, 12)),
                Span::styled(format!(" {score:.3}"), Style::default().fg(Color::Cyan)),
            ]))
        })
        .collect();

    let mut list = items;
    if remaining > SHOWN_CANDIDATES {
        list.push(ListItem::new(format!(
            "  … {} more",
            remaining - SHOWN_CANDIDATES
        )));
    }
    if list.is_empty() {
        list.push(ListItem::new("No candidates remain"));
    }

    f.render_widget(List::new(list).block(panel(&title)), area);
}

fn render_information(f: &mut Frame, app: &App, area: Rect) {
    let total = app.total_bits();
    let gained = app.bits_gained();
    let percent = (gained / total * 100.0).clamp(0.0, 100.0) as u16;

    let gauge = Gauge::default()
        .block(panel(" Information "))
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{gained:.1} of {total:.1} bits"));
    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let shown = usize::from(area.height.saturating_sub(2));
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(shown)
        .map(|msg| {
            let colour = match msg.style {
                MessageStyle::Info => Color::White,
                MessageStyle::Success => Color::Green,
                MessageStyle::Error => Color::Red,
            };
            ListItem::new(msg.text.clone()).style(Style::default().fg(colour))
        })
        .collect();

    f.render_widget(List::new(messages).block(panel(" Messages ")), area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, colour) = match app.input_mode {
        InputMode::WinCelebration => (" Solved! 'n' new game, 'q' quit ", "", Color::Green),
        InputMode::Feedback => (
            " Colours seen (g/y/b) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::ManualWord => (
            " Word you played ",
            app.manual_word.as_str(),
            Color::Cyan,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(colour).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(colour)),
        );
    f.render_widget(input, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let keys = match app.input_mode {
        InputMode::ManualWord => "Enter: use word | Esc: cancel",
        _ if app.game.is_over() || app.candidates_count() == 0 => {
            "n: new game | u: undo | q: quit"
        }
        _ => "Enter: submit | Tab: other word | u: undo | q: quit",
    };
    let stats = format!(
        "Games {} | Won {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(70), Constraint::Percentage(30)]).areas(area);
    f.render_widget(
        Paragraph::new(keys).style(Style::default().fg(Color::DarkGray)),
        left,
    );
    f.render_widget(Paragraph::new(stats).alignment(Alignment::Right), right);
}
