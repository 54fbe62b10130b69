//! Automatic players
//!
//! Guessers pick letters for the simulator the way a player would, seeing only
//! the board.

pub mod guesser;

pub use guesser::{
    CandidateGuesser, FREQUENCY_ORDER, FrequencyGuesser, Guesser, GuesserType, RandomGuesser,
};
