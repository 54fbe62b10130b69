//! Simple interactive CLI mode
//!
//! Line-based game without the TUI

use crate::output::{gallows_art, print_passage_banner, print_round, print_round_over};
use crate::session::Session;
use anyhow::{Context, Result};
use rand::Rng;
use std::io::{self, Write};
use tracing::info;

/// Run the line-based game loop
///
/// When `ask_intro` is set the player is asked for a name and whether to play
/// phrase mode before the first round.
///
/// # Errors
///
/// Returns an error if reading input fails or if the corpus has no candidate
/// for the chosen settings.
pub fn run_simple<R: Rng>(session: &mut Session, rng: &mut R, ask_intro: bool) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                     H A N G M A N                            ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    if ask_intro && !intro(session)? {
        println!("\n👋 Thanks for playing!\n");
        return Ok(());
    }

    println!("Guess one letter at a time. Type 'hint' to reveal a letter or 'quit' to give up.\n");

    loop {
        session.new_round(rng)?;
        print_current(session);

        while session.in_round() {
            // End of input gives the round up
            let input = get_user_input("Your guess")?.unwrap_or_else(|| "quit".to_string());
            session
                .submit(&input, rng)
                .context("no round in progress")?;
            print_current(session);
        }

        if let Some(game) = session.game() {
            print_round_over(&game.display(), game.secret(), session.stats());
        }

        match get_user_input("Play again? (yes/no)")?
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "yes" | "y" => println!("\n🔄 New game started!\n"),
            _ => {
                info!(stats = ?session.stats(), "session finished");
                println!("\n👋 Thanks for playing, {}!\n", session.player());
                return Ok(());
            }
        }
    }
}

/// Ask for the player's name and the mode
///
/// Returns `false` if input ended before the intro finished.
fn intro(session: &mut Session) -> Result<bool> {
    let name = loop {
        match get_user_input("Enter your name")? {
            None => return Ok(false),
            Some(name) if name.is_empty() => println!("Please enter your name."),
            Some(name) => break name,
        }
    };
    session.set_player(name);

    if let Some(banner) = session.passage_banner() {
        print_passage_banner(banner);
    }
    println!("\n{}", session.welcome());

    let Some(answer) = get_user_input("Phrase mode? (yes/no)")? else {
        return Ok(false);
    };
    session.settings.phrase_mode = matches!(answer.to_lowercase().as_str(), "yes" | "y");
    println!();

    Ok(true)
}

fn print_current(session: &Session) {
    if let Some(game) = session.game() {
        print_round(
            &game.display(),
            gallows_art(game.miss_count(), game.difficulty()),
        );
    }
}

/// Get user input with a prompt
///
/// Returns `None` at end of input.
fn get_user_input(prompt: &str) -> io::Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
