//! Display functions for rounds and command results

use super::formatters::{create_progress_bar, misses_or_none, status_banner};
use crate::commands::SimulationResult;
use crate::core::{DisplayView, Status};
use crate::session::Statistics;
use colored::Colorize;

/// Print the title card of the phrase passage
pub fn print_passage_banner(banner: &str) {
    println!("{}", banner.bright_blue().bold());
    println!("Phrase mode draws whole sentences from this passage.\n");
}

/// Print the board of a round in progress
pub fn print_round(view: &DisplayView, art: &str) {
    println!("{}", "─".repeat(60).cyan());
    println!("{}", art.bright_black());
    println!();
    println!("  {}", view.mask.bright_white().bold());
    println!();
    println!("  Misses:     {}", misses_or_none(&view.misses).red());
    println!(
        "  Tries left: {}",
        view.remaining.to_string().bright_yellow().bold()
    );
    println!("  Hints left: {}", view.hints.to_string().bright_cyan());

    if !view.message.is_empty() {
        let message = match view.status {
            Status::Won => view.message.green().bold(),
            Status::Lost => view.message.red().bold(),
            Status::Playing | Status::Quit => view.message.normal(),
        };
        println!("\n  {message}");
    }
    println!();
}

/// Print the summary of a finished round
pub fn print_round_over(view: &DisplayView, secret: &str, stats: &Statistics) {
    println!("\n{}", "═".repeat(60).bright_cyan());

    let banner = status_banner(view.status);
    let banner = match view.status {
        Status::Won => banner.bright_green().bold(),
        Status::Lost => banner.bright_red().bold(),
        Status::Playing | Status::Quit => banner.yellow().bold(),
    };
    println!("    {banner}");
    println!("{}", "═".repeat(60).bright_cyan());

    println!("\n  The secret was: {}", secret.bright_white().bold());
    println!(
        "  Rounds: {} | Won: {} | Lost: {} | Quit: {} | Win rate: {}",
        stats.played,
        stats.won.to_string().green(),
        stats.lost.to_string().red(),
        stats.quit,
        format!("{:.0}%", stats.win_rate()).bright_yellow()
    );
    println!();
}

/// Print the result of a simulation
pub fn print_simulation_result(result: &SimulationResult, guesser: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Bot:              {guesser}");
    println!("   Rounds played:    {}", result.rounds);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate()).bright_yellow().bold()
    );
    println!("   Won:              {}", result.won.to_string().green());
    println!("   Lost:             {}", result.lost.to_string().red());
    println!("   Average misses:   {:.2}", result.average_misses);
    println!("   Hints used:       {}", result.hints_used);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Rounds/second:    {:.1}", result.rounds_per_second);

    if result.rounds > 0 {
        println!("\n📈 {}", "Misses per round:".bright_cyan().bold());
        for (&misses, &count) in &result.miss_distribution {
            let pct = (count as f64 / result.rounds as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {misses:2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.hardest.is_empty() {
        println!("\n💀 {}", "Lost on:".bright_red().bold());
        for secret in result.hardest.iter().take(10) {
            println!("   • {secret}");
        }
        if result.hardest.len() > 10 {
            println!("   … and {} more", result.hardest.len() - 10);
        }
    }
    println!();
}
