//! Hangman - CLI
//!
//! Hangman with TUI and line-based modes, plus a bot simulator.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hangman::{
    bot::GuesserType,
    commands::{SimulationConfig, run_simple, run_simulation},
    core::Difficulty,
    logging,
    output::print_simulation_result,
    session::{Session, Settings},
    wordlists::{
        PASSAGE, PASSAGE_BANNER, WORDS,
        loader::{load_phrases_from_file, load_words_from_file, phrases_from_text, words_from_slice},
    },
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "hangman",
    about = "Hangman word and phrase guessing game with a TUI, a simple CLI and a bot simulator",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Difficulty: easy, medium (default) or hard
    #[arg(short, long, global = true, default_value = "medium")]
    difficulty: String,

    /// Guess whole phrases instead of single words
    #[arg(short, long, global = true)]
    phrase_mode: bool,

    /// Word list: 'builtin' (default) or path to a file of whitespace separated words
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,

    /// Phrase source: 'builtin' (default) or path to a text file
    #[arg(long, global = true, default_value = "builtin")]
    passage: String,

    /// Tries at medium difficulty; easy gets 3 more, hard 3 fewer
    #[arg(short = 't', long, global = true, default_value = "6")]
    base_tries: u32,

    /// Player name (the simple mode asks when it is not given)
    #[arg(short, long, global = true)]
    name: Option<String>,

    /// Seed for reproducible secrets and hints
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Let a bot play many rounds and report how it did
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "500")]
        rounds: usize,

        /// Bot: candidates (default), frequency or random
        #[arg(short, long, default_value = "candidates")]
        bot: String,
    },
}

/// Load the word list selected by the -w flag
fn load_words(source: &str) -> Result<Vec<String>> {
    match source {
        "builtin" => Ok(words_from_slice(WORDS)),
        path => load_words_from_file(path).with_context(|| format!("reading word list {path}")),
    }
}

/// Load the phrases selected by the --passage flag
fn load_phrases(source: &str) -> Result<Vec<String>> {
    match source {
        "builtin" => Ok(phrases_from_text(PASSAGE)),
        path => load_phrases_from_file(path).with_context(|| format!("reading passage {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if matches!(command, Commands::Play) {
        logging::init_file(logging::TUI_LOG_FILE)?;
    } else {
        logging::init_stderr();
    }

    let settings = Settings {
        difficulty: cli.difficulty.parse::<Difficulty>()?,
        phrase_mode: cli.phrase_mode,
        base_tries: cli.base_tries,
    };
    let words = load_words(&cli.wordlist)?;
    let phrases = load_phrases(&cli.passage)?;
    info!(words = words.len(), phrases = phrases.len(), "corpora loaded");

    let player = cli.name.clone().unwrap_or_else(|| "Player".to_string());
    let mut session = Session::new(player, words, phrases, settings);
    if cli.passage == "builtin" {
        session = session.with_passage_banner(PASSAGE_BANNER);
    }

    match command {
        Commands::Play => run_play_command(session, make_rng(cli.seed)),
        Commands::Simple => {
            let mut rng = make_rng(cli.seed);
            run_simple(&mut session, &mut rng, cli.name.is_none())
        }
        Commands::Simulate { rounds, bot } => run_simulate_command(rounds, &bot, cli.seed, &session),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_play_command(session: Session, rng: StdRng) -> Result<()> {
    use hangman::interactive::{App, run_tui};

    run_tui(App::new(session, rng))
}

fn run_simulate_command(rounds: usize, bot: &str, seed: Option<u64>, session: &Session) -> Result<()> {
    let settings = session.settings;
    let corpus = session.active_corpus();
    let guesser = GuesserType::from_name(bot, corpus);

    let config = SimulationConfig {
        phrase_mode: settings.phrase_mode,
        base_tries: settings.base_tries,
        show_progress: true,
        ..SimulationConfig::new(rounds, settings.difficulty, seed.unwrap_or_else(rand::random))
    };

    println!(
        "Simulating {rounds} {} rounds with the {} bot...",
        if settings.phrase_mode {
            "phrase"
        } else {
            settings.difficulty.name()
        },
        guesser.name()
    );

    let result = run_simulation(&guesser, corpus, &config)?;
    print_simulation_result(&result, guesser.name());
    Ok(())
}
