//! Core game logic for hangman
//!
//! This module contains the pure round state machine and its configuration helpers.
//! Nothing here performs I/O; randomness is always passed in by the caller.

mod config;
mod guess;
mod reveal;
mod state;

pub use config::{
    ConfigError, ConfigRequest, DEFAULT_BASE_TRIES, Difficulty, DifficultyConfig, GameConfig,
    PhraseModeConfig, build_game_config, choose_random, difficulty_config, filter_by_length,
};
pub use guess::Guess;
pub use reveal::{
    AUTO_REVEAL, LetterSet, MASK_CHAR, auto_reveal_set, is_auto_reveal, is_revealed, is_win,
    missing_letters, pick_hint, render_mask,
};
pub use state::{DisplayView, GameState, Status};
