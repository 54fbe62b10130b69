//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::run_simple;
pub use simulate::{RoundOutcome, SimulationConfig, SimulationResult, play_round, run_simulation};
