//! TUI rendering with ratatui
//!
//! Gallows, board and message panels for the hangman interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::Status;
use crate::output::formatters::{misses_or_none, tries_bar};
use crate::output::gallows_art;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20),     // Gallows
            Constraint::Percentage(50), // Board
            Constraint::Min(20),        // Messages
        ])
        .split(chunks[1]);

    render_gallows(f, app, main_chunks[0]);
    render_board(f, app, main_chunks[1]);
    render_messages(f, app, main_chunks[2]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🪢 HANGMAN")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_gallows(f: &mut Frame, app: &App, area: Rect) {
    let (art, color) = match app.session.game() {
        Some(game) => {
            let color = match game.status() {
                Status::Won => Color::Green,
                Status::Lost => Color::Red,
                Status::Playing | Status::Quit => Color::White,
            };
            (gallows_art(game.miss_count(), game.difficulty()), color)
        }
        None => (gallows_art(0, app.session.settings.difficulty), Color::DarkGray),
    };

    let gallows = Paragraph::new(art)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(gallows, area);
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Mask and misses
            Constraint::Length(3), // Tries gauge
        ])
        .split(area);

    let block = Block::default()
        .title(" Secret ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let Some(game) = app.session.game() else {
        let idle = Paragraph::new("No round in progress.").block(block);
        f.render_widget(idle, chunks[0]);
        return;
    };

    let view = game.display();
    let mask = if game.status().is_terminal() {
        game.secret().to_string()
    } else {
        view.mask
    };

    let content = vec![
        Line::from(Span::styled(
            mask,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Misses: "),
            Span::styled(
                misses_or_none(&view.misses).to_string(),
                Style::default().fg(Color::Red),
            ),
        ]),
        Line::from(format!("Hints:  {}", view.hints)),
        Line::from(format!(
            "Tries:  {}",
            tries_bar(view.remaining, view.remaining + game.miss_count() as u32, 12)
        )),
    ];

    let board = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(board, chunks[0]);

    let total = view.remaining + game.miss_count() as u32;
    let ratio = if total == 0 {
        0.0
    } else {
        f64::from(view.remaining) / f64::from(total)
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Tries Left ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(if ratio > 0.34 {
            Color::Green
        } else {
            Color::Red
        }))
        .ratio(ratio)
        .label(format!("{}/{total}", view.remaining));
    f.render_widget(gauge, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Guessing => (
            " Guess a letter, or type 'hint' / 'quit' | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (
            " n: New Round | p: Phrase Mode | d: Difficulty | q: Quit ",
            "",
            Color::Green,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let settings = app.session.settings;
    let mode_text = if settings.phrase_mode {
        "Mode: Phrase".to_string()
    } else {
        format!("Mode: Word ({})", settings.difficulty)
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let player = Paragraph::new(format!("Player: {}", app.session.player()))
        .alignment(Alignment::Center);
    f.render_widget(player, chunks[1]);

    let stats = app.session.stats();
    let stats_text = format!(
        "Rounds: {} | Win Rate: {:.0}%",
        stats.played,
        stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[2]);

    let help = Paragraph::new("Ctrl-C: Exit | Esc: Give Up")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
