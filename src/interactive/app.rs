//! TUI application state and logic

use crate::core::{ConfigError, GameState, Status};
use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{info, warn};

/// Longest input the guess box accepts
const MAX_INPUT: usize = 32;

/// Application state
pub struct App {
    pub session: Session,
    pub rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
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

impl App {
    #[must_use]
    pub fn new(session: Session, rng: StdRng) -> Self {
        let welcome = session.welcome();

        Self {
            session,
            rng,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: welcome,
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Press 'p' to toggle phrase mode, 'd' to change difficulty, 'n' to start."
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            should_quit: false,
            input_mode: InputMode::RoundOver,
        }
    }

    /// Start a round with the current settings
    pub fn new_game(&mut self) {
        self.input_buffer.clear();
        let label = if self.session.settings.phrase_mode {
            "phrase"
        } else {
            self.session.settings.difficulty.name()
        };

        match self.session.new_round(&mut self.rng) {
            Ok(game) => {
                let text = format!(
                    "New {label} round: {} letters, {} tries, {} hints.",
                    game.secret().chars().filter(char::is_ascii_alphabetic).count(),
                    game.remaining(),
                    game.hints()
                );
                self.input_mode = InputMode::Guessing;
                self.add_message(&text, MessageStyle::Info);
            }
            Err(err @ ConfigError::NoCandidates) => {
                warn!(error = %err, "could not start round");
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Submit the input buffer as a guess
    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        let Some(before) = self.session.game().cloned() else {
            return;
        };
        let Some(view) = self.session.submit(&input, &mut self.rng) else {
            return;
        };
        let style = self
            .session
            .game()
            .map_or(MessageStyle::Info, |after| guess_style(&before, after));
        self.add_message(&view.message, style);

        if view.status.is_terminal() {
            if view.status == Status::Won {
                self.add_message("🎉 You got it!", MessageStyle::Success);
            }
            self.input_mode = InputMode::RoundOver;
            self.add_message("Press 'n' for a new round or 'q' to quit.", MessageStyle::Info);
        }
    }

    pub fn toggle_phrase_mode(&mut self) {
        self.session.settings.phrase_mode = !self.session.settings.phrase_mode;
        let text = if self.session.settings.phrase_mode {
            "Phrase mode on: secrets are whole sentences."
        } else {
            "Phrase mode off."
        };
        self.add_message(text, MessageStyle::Info);
    }

    pub fn cycle_difficulty(&mut self) {
        let next = self.session.settings.difficulty.next();
        self.session.settings.difficulty = next;
        self.add_message(&format!("Difficulty: {next}"), MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 8 messages
        if self.messages.len() > 8 {
            self.messages.remove(0);
        }
    }

    /// Route one key press; returns after updating state
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::RoundOver => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                KeyCode::Char('p') => self.toggle_phrase_mode(),
                KeyCode::Char('d') => self.cycle_difficulty(),
                _ => {}
            },
            InputMode::Guessing => match code {
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < MAX_INPUT {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                KeyCode::Esc => {
                    self.input_buffer = "quit".to_string();
                    self.submit_guess();
                }
                _ => {}
            },
        }
    }
}

/// Message style for the change one guess made to a round
///
/// Revealing a letter without a new miss counts as progress; misses, repeats
/// and invalid input stay neutral.
#[must_use]
pub fn guess_style(before: &GameState, after: &GameState) -> MessageStyle {
    match after.status() {
        Status::Won => MessageStyle::Success,
        Status::Lost | Status::Quit => MessageStyle::Error,
        Status::Playing if after.miss_count() > before.miss_count() => MessageStyle::Info,
        Status::Playing if after.guessed().len() > before.guessed().len() => {
            MessageStyle::Success
        }
        Status::Playing => MessageStyle::Info,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    match res {
        Ok(app) => {
            info!(stats = ?app.session.stats(), "tui closed");
            Ok(())
        }
        Err(err) => {
            eprintln!("Error: {err}");
            Ok(())
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<App> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::session::Settings;
    use rand::SeedableRng;

    fn app() -> App {
        let session = Session::new(
            "Ada",
            vec!["cats".to_string(), "planet".to_string(), "extraordinary".to_string()],
            vec!["we sailed home in silence".to_string()],
            Settings {
                difficulty: Difficulty::Easy,
                ..Settings::default()
            },
        );
        App::new(session, StdRng::seed_from_u64(5))
    }

    fn type_line(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn starts_waiting_for_new_round() {
        let app = app();
        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert!(app.messages[0].text.starts_with("Welcome, Ada!"));
    }

    #[test]
    fn new_round_switches_to_guessing() {
        let mut app = app();
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.session.game().unwrap().secret(), "cats");
    }

    #[test]
    fn typing_letters_plays_round() {
        let mut app = app();
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);

        for letter in ["c", "a", "t", "s"] {
            type_line(&mut app, letter);
        }

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.session.stats().won, 1);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn escape_quits_round() {
        let mut app = app();
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.session.stats().quit, 1);
        assert!(!app.should_quit);
    }

    #[test]
    fn settings_keys_apply_to_next_round() {
        let mut app = app();
        app.handle_key(KeyCode::Char('d'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('d'), KeyModifiers::NONE);
        assert_eq!(app.session.settings.difficulty, Difficulty::Hard);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.session.game().unwrap().secret(), "extraordinary");

        app.handle_key(KeyCode::Esc, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('p'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(
            app.session.game().unwrap().secret(),
            "we sailed home in silence"
        );
    }

    #[test]
    fn failed_round_start_stays_in_menu() {
        let session = Session::new("Ada", vec!["dog".to_string()], Vec::new(), Settings::default());
        let mut app = App::new(session, StdRng::seed_from_u64(5));

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);

        assert_eq!(app.input_mode, InputMode::RoundOver);
        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Error));
    }

    #[test]
    fn ctrl_c_quits_anywhere() {
        let mut app = app();
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn guess_style_follows_state_changes() {
        let mut rng = StdRng::seed_from_u64(3);
        let start = GameState::new("cats", 5, 1, Difficulty::Medium);

        let correct = start.clone().process_guess("c", &mut rng);
        assert_eq!(guess_style(&start, &correct), MessageStyle::Success);

        let hinted = start.clone().process_guess("hint", &mut rng);
        assert_eq!(guess_style(&start, &hinted), MessageStyle::Success);

        let wrong = start.clone().process_guess("z", &mut rng);
        assert_eq!(guess_style(&start, &wrong), MessageStyle::Info);

        let repeat = correct.clone().process_guess("c", &mut rng);
        assert_eq!(guess_style(&correct, &repeat), MessageStyle::Info);

        let invalid = start.clone().process_guess("42", &mut rng);
        assert_eq!(guess_style(&start, &invalid), MessageStyle::Info);

        let quit = start.clone().process_guess("quit", &mut rng);
        assert_eq!(guess_style(&start, &quit), MessageStyle::Error);
    }

    #[test]
    fn correct_guess_message_is_success() {
        let mut app = app();
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        type_line(&mut app, "a");

        assert_eq!(app.messages.last().map(|m| m.style), Some(MessageStyle::Success));
    }

    #[test]
    fn q_is_a_guess_while_playing() {
        let mut app = app();
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        type_line(&mut app, "q");

        assert!(!app.should_quit);
        assert_eq!(app.session.game().unwrap().display().misses, "q");
    }
}
