//! Terminal output formatting
//!
//! Display utilities for rounds, gallows art and command results.

pub mod display;
pub mod formatters;
pub mod gallows;

pub use display::{print_passage_banner, print_round, print_round_over, print_simulation_result};
pub use gallows::gallows_art;
