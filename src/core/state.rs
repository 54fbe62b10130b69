//! Round state machine
//!
//! A round starts in [`Status::Playing`] and moves to exactly one of the
//! terminal states. Every transition consumes the state and returns the
//! updated value; terminal states return themselves untouched.

use super::config::{Difficulty, GameConfig};
use super::guess::Guess;
use super::reveal::{LetterSet, auto_reveal_set, is_revealed, is_win, pick_hint, render_mask};
use rand::Rng;
use std::collections::BTreeSet;
use std::fmt;

/// Status of a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Playing,
    Won,
    Lost,
    Quit,
}

impl Status {
    /// True for won, lost and quit
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Quit => "quit",
        })
    }
}

/// State of a single round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    secret: String,
    guessed: LetterSet,
    misses: BTreeSet<char>,
    remaining: u32,
    hints: u32,
    difficulty: Difficulty,
    status: Status,
    message: String,
}

/// Display-ready projection of a [`GameState`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayView {
    /// Secret with hidden characters as `_`, tokens separated by spaces
    pub mask: String,
    /// Wrong letters in alphabetical order, separated by spaces
    pub misses: String,
    pub remaining: u32,
    pub hints: u32,
    pub status: Status,
    pub message: String,
}

impl GameState {
    /// Start a round
    ///
    /// Inputs are not validated.
    #[must_use]
    pub fn new(secret: impl Into<String>, tries: u32, free_hints: u32, difficulty: Difficulty) -> Self {
        Self {
            secret: secret.into(),
            guessed: auto_reveal_set(),
            misses: BTreeSet::new(),
            remaining: tries,
            hints: free_hints,
            difficulty,
            status: Status::Playing,
            message: String::new(),
        }
    }

    /// Start a round from a built configuration
    #[must_use]
    pub fn from_config(config: GameConfig, difficulty: Difficulty) -> Self {
        Self::new(config.secret, config.tries, config.free_hints, difficulty)
    }

    /// Parse raw player input and apply it
    ///
    /// # Examples
    /// ```
    /// use hangman::core::{Difficulty, GameState, Status};
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let mut rng = StdRng::seed_from_u64(0);
    /// let state = GameState::new("dog", 1, 0, Difficulty::Easy);
    ///
    /// let state = state.process_guess("z", &mut rng);
    /// assert_eq!(state.status(), Status::Lost);
    /// assert_eq!(state.message(), "You lost! The word was \"dog\".");
    /// ```
    #[must_use]
    pub fn process_guess<R: Rng + ?Sized>(self, raw: &str, rng: &mut R) -> Self {
        if self.status.is_terminal() {
            return self;
        }
        self.apply(Guess::parse(raw), rng)
    }

    /// Apply an already parsed guess
    ///
    /// `rng` is only consulted when a hint is revealed.
    #[must_use]
    pub fn apply<R: Rng + ?Sized>(mut self, guess: Guess, rng: &mut R) -> Self {
        if self.status.is_terminal() {
            return self;
        }

        match guess {
            Guess::Invalid => {
                self.message = "Invalid input. Enter a single letter.".to_string();
            }
            Guess::Quit => {
                self.status = Status::Quit;
                self.message = "You quit the game.".to_string();
            }
            Guess::Hint => self.use_hint(rng),
            Guess::Letter(letter) => self.guess_letter(letter),
        }

        self
    }

    fn use_hint<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.hints == 0 {
            self.message = "No hints remaining.".to_string();
            return;
        }

        // An exhausted secret keeps the hint
        let Some(letter) = pick_hint(&self.guessed, &self.secret, rng) else {
            self.message = "No letters left to reveal.".to_string();
            return;
        };

        self.guessed.insert(letter);
        self.hints -= 1;
        self.message = format!("Hint used! Revealed '{letter}'.");

        if is_win(&self.secret, &self.guessed) {
            self.status = Status::Won;
        }
    }

    fn guess_letter(&mut self, letter: char) {
        if !self.guessed.insert(letter) {
            self.message = "You already guessed that letter.".to_string();
            return;
        }

        if self.secret.contains(letter) {
            self.message = "Correct guess!".to_string();
            if is_win(&self.secret, &self.guessed) {
                self.status = Status::Won;
            }
            return;
        }

        self.misses.insert(letter);
        self.remaining = self.remaining.saturating_sub(1);
        self.message = "Wrong guess.".to_string();

        if self.remaining == 0 {
            self.status = Status::Lost;
            self.message = format!("You lost! The word was \"{}\".", self.secret);
        }
    }

    /// Project the state into display-ready fields
    #[must_use]
    pub fn display(&self) -> DisplayView {
        DisplayView {
            mask: render_mask(&self.secret, &self.guessed),
            misses: self
                .misses
                .iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            remaining: self.remaining,
            hints: self.hints,
            status: self.status,
            message: self.message.clone(),
        }
    }

    /// Each character of the secret if visible, `None` if still hidden
    #[must_use]
    pub fn revealed(&self) -> Vec<Option<char>> {
        self.secret
            .chars()
            .map(|ch| is_revealed(ch, &self.guessed).then_some(ch))
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Revealed characters, including the auto-reveal set
    #[inline]
    #[must_use]
    pub const fn guessed(&self) -> &LetterSet {
        &self.guessed
    }

    /// Wrong letters in alphabetical order
    #[inline]
    #[must_use]
    pub const fn misses(&self) -> &BTreeSet<char> {
        &self.misses
    }

    #[inline]
    #[must_use]
    pub fn miss_count(&self) -> usize {
        self.misses.len()
    }

    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    #[must_use]
    pub const fn hints(&self) -> u32 {
        self.hints
    }

    #[inline]
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
