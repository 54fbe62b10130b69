//! Simulation command
//!
//! Lets a bot play many rounds and gathers statistics.

use crate::bot::Guesser;
use crate::core::{
    ConfigError, ConfigRequest, DEFAULT_BASE_TRIES, Difficulty, GameState, Guess, Status,
    build_game_config,
};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for a simulation run
#[derive(Debug, Clone, Copy)]
pub struct SimulationConfig {
    pub rounds: usize,
    pub difficulty: Difficulty,
    pub phrase_mode: bool,
    pub base_tries: u32,
    /// Round `i` is seeded with `seed + i`
    pub seed: u64,
    pub show_progress: bool,
}

impl SimulationConfig {
    #[must_use]
    pub const fn new(rounds: usize, difficulty: Difficulty, seed: u64) -> Self {
        Self {
            rounds,
            difficulty,
            phrase_mode: false,
            base_tries: DEFAULT_BASE_TRIES,
            seed,
            show_progress: false,
        }
    }
}

/// Outcome of a single simulated round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome {
    pub secret: String,
    pub status: Status,
    pub misses: usize,
    pub hints_used: u32,
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub rounds: usize,
    pub won: usize,
    pub lost: usize,
    pub average_misses: f64,
    pub hints_used: u64,
    /// Misses per round -> number of rounds
    pub miss_distribution: BTreeMap<usize, usize>,
    /// Lost secrets, in round order
    pub hardest: Vec<String>,
    pub duration: Duration,
    pub rounds_per_second: f64,
}

impl SimulationResult {
    /// Percentage of rounds won
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            0.0
        } else {
            self.won as f64 / self.rounds as f64 * 100.0
        }
    }
}

/// Play one round to completion with the given guesser
///
/// The bot spends a hint whenever a single try is left.
pub fn play_round<G: Guesser>(guesser: &G, mut state: GameState, rng: &mut StdRng) -> RoundOutcome {
    let starting_hints = state.hints();

    while !state.status().is_terminal() {
        let guess = if state.remaining() == 1 && state.hints() > 0 {
            Guess::Hint
        } else {
            match guesser.next_letter(&state, rng) {
                Some(letter) => Guess::Letter(letter),
                None => break,
            }
        };
        state = state.apply(guess, rng);
    }

    RoundOutcome {
        secret: state.secret().to_string(),
        status: state.status(),
        misses: state.miss_count(),
        hints_used: starting_hints - state.hints(),
    }
}

/// Run the simulation across all cores
///
/// # Errors
///
/// Returns `ConfigError::NoCandidates` if the corpus has nothing to offer for
/// the chosen settings.
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
pub fn run_simulation<G: Guesser + Sync>(
    guesser: &G,
    corpus: &[String],
    config: &SimulationConfig,
) -> Result<SimulationResult, ConfigError> {
    let request = ConfigRequest::new(corpus, config.difficulty)
        .phrase_mode(config.phrase_mode)
        .base_tries(config.base_tries);

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("valid progress template")
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<RoundOutcome> = (0..config.rounds)
        .into_par_iter()
        .map(|i| -> Result<RoundOutcome, ConfigError> {
            let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
            let game = build_game_config(&request, &mut rng)?;
            let state = GameState::from_config(game, config.difficulty);
            let outcome = play_round(guesser, state, &mut rng);
            debug!(round = i, secret = %outcome.secret, status = %outcome.status, "simulated round");
            pb.inc(1);
            Ok(outcome)
        })
        .collect::<Result<_, _>>()?;

    pb.finish_with_message("Complete!");

    Ok(summarize(&outcomes, start.elapsed()))
}

fn summarize(outcomes: &[RoundOutcome], duration: Duration) -> SimulationResult {
    let mut miss_distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut won = 0;
    let mut lost = 0;
    let mut total_misses = 0;
    let mut hints_used = 0;
    let mut hardest = Vec::new();

    for outcome in outcomes {
        match outcome.status {
            Status::Won => won += 1,
            Status::Lost => {
                lost += 1;
                hardest.push(outcome.secret.clone());
            }
            Status::Playing | Status::Quit => {}
        }
        total_misses += outcome.misses;
        hints_used += u64::from(outcome.hints_used);
        *miss_distribution.entry(outcome.misses).or_insert(0) += 1;
    }

    let rounds = outcomes.len();
    let secs = duration.as_secs_f64();

    SimulationResult {
        rounds,
        won,
        lost,
        average_misses: if rounds == 0 {
            0.0
        } else {
            total_misses as f64 / rounds as f64
        },
        hints_used,
        miss_distribution,
        hardest,
        duration,
        rounds_per_second: if secs > 0.0 { rounds as f64 / secs } else { 0.0 },
    }
}
