//! Hangman
//!
//! Word and phrase guessing game with a terminal UI, a line-based mode and a
//! bot simulator.
//!
//! # Quick Start
//!
//! ```rust
//! use hangman::core::{Difficulty, GameState, Status};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut state = GameState::new("ship", 6, 1, Difficulty::Medium);
//!
//! for letter in ["s", "h", "i", "p"] {
//!     state = state.process_guess(letter, &mut rng);
//! }
//! assert_eq!(state.status(), Status::Won);
//! assert_eq!(state.display().mask, "s h i p");
//! ```

// Core domain types
pub mod core;

// Player session
pub mod session;

// Word lists
pub mod wordlists;

// Automatic players
pub mod bot;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup
pub mod logging;
