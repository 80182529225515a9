//! Strictly Hangman - terminal front end
//!
//! Collects the player's choices, drives a [`GameSession`] and renders what
//! it returns.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, BufRead, Write};
use strictly_hangman::{
    ConfiguredSupplier, Difficulty, GameSession, HangmanConfig, LeaderboardEntry, Mode, Outcome,
    PlayerProfile, Rejection,
};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = HangmanConfig::from_file_or_default(&cli.config)?;

    match cli.command {
        Command::Play {
            name,
            mode,
            difficulty,
            admin,
        } => run_play(config, name, mode, difficulty, admin),
        Command::Leaderboard { mode } => run_leaderboard(config, mode),
    }
}

/// Print the leaderboard for one mode
#[instrument(skip(config))]
fn run_leaderboard(config: HangmanConfig, mode: Mode) -> Result<()> {
    let session = open_session(&config, mode)?;
    print_leaderboard(mode, &session.leaderboard());
    Ok(())
}

/// Play rounds until the player quits
#[instrument(skip(config, name))]
fn run_play(
    config: HangmanConfig,
    name: String,
    mode: Mode,
    difficulty: u8,
    admin: bool,
) -> Result<()> {
    let mut profile = PlayerProfile::new(name, Difficulty::new(difficulty)?)?;
    let mut mode = mode;
    let supplier = ConfiguredSupplier::new(config.clone());

    let mut session = open_session(&config, mode)?;
    print_leaderboard(mode, &session.leaderboard());

    session
        .start_round(profile.clone(), &supplier)
        .context("Could not start a new game")?;
    info!(mode = %mode, "Game started");

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        if let Some(round) = session.round() {
            println!();
            println!("  {}", round.reveal_pattern());
            println!(
                "  attempts left: {}   wrong guesses: {}",
                round.attempts_remaining(),
                round.history().incorrect().join(", ")
            );
            if admin {
                println!("  [admin] secret: {}", round.secret());
            }
        }

        let Some(line) = ask(&mut input, "guess (:new, :quit)> ")? else {
            break;
        };
        match line.as_str() {
            ":quit" => break,
            ":new" => {
                session.save_scores()?;
                let Some((next_profile, next_mode)) = ask_new_game(&mut input, &profile, mode)?
                else {
                    break;
                };

                let mut next = open_session(&config, next_mode)?;
                match next.start_round(next_profile.clone(), &supplier) {
                    Ok(_) => {
                        info!(mode = %next_mode, "New game started");
                        session = next;
                        profile = next_profile;
                        mode = next_mode;
                        print_leaderboard(mode, &session.leaderboard());
                    }
                    Err(e) => println!("  Could not start a new game: {}", e),
                }
                continue;
            }
            _ => {}
        }

        let report = match session.submit_guess(&line) {
            Ok(report) => report,
            Err(e) => {
                println!("  {}", e);
                continue;
            }
        };

        match report.rejection {
            Some(Rejection::Repeated) => println!("  You repeated your guess"),
            Some(Rejection::Invalid(reason)) => println!("  {}. Try again!", reason),
            None if report.correct => println!("  Correct!"),
            None => println!("  Wrong guess."),
        }

        if report.outcome.is_terminal() {
            match report.outcome {
                Outcome::Won => println!("\n  You won! Score: {}", report.score),
                _ => println!(
                    "\n  You lost. The answer was '{}'. Score: {}",
                    session.secret().unwrap_or_default(),
                    report.score
                ),
            }
            print_leaderboard(mode, &session.leaderboard());

            let again = ask(&mut input, "Play again? [y/N] ")?.unwrap_or_default();
            if again.eq_ignore_ascii_case("y") {
                session.reset_round()?;
            } else {
                break;
            }
        }
    }

    session.save_scores()?;
    info!("Scores saved");
    Ok(())
}

fn open_session(config: &HangmanConfig, mode: Mode) -> Result<GameSession> {
    GameSession::open(mode, config.leaderboard_path(mode))
        .map_err(|e| anyhow::anyhow!(user_message(&e)))
}

/// Collects name, mode and difficulty for a new game
///
/// A blank answer keeps the current value. Returns `None` at end of input.
fn ask_new_game(
    input: &mut impl BufRead,
    current: &PlayerProfile,
    mode: Mode,
) -> Result<Option<(PlayerProfile, Mode)>> {
    let Some(name) = ask(input, &format!("name [{}]> ", current.name()))? else {
        return Ok(None);
    };
    let name = if name.is_empty() {
        current.name().to_string()
    } else {
        name
    };

    let mode = loop {
        let Some(answer) = ask(input, &format!("mode (words/phrases) [{}]> ", mode))? else {
            return Ok(None);
        };
        if answer.is_empty() {
            break mode;
        }
        match answer.parse::<Mode>() {
            Ok(chosen) => break chosen,
            Err(_) => println!("  Unknown mode '{}'", answer),
        }
    };

    let difficulty = loop {
        let question = format!("difficulty (1-10) [{}]> ", current.difficulty());
        let Some(answer) = ask(input, &question)? else {
            return Ok(None);
        };
        if answer.is_empty() {
            break current.difficulty();
        }
        match answer.parse::<u8>().ok().and_then(|n| Difficulty::new(n).ok()) {
            Some(chosen) => break chosen,
            None => println!("  Difficulty must be a number from 1 to 10"),
        }
    };

    Ok(Some((PlayerProfile::new(name, difficulty)?, mode)))
}

/// Prints a prompt and reads one trimmed line, `None` at end of input
fn ask(input: &mut impl BufRead, text: &str) -> Result<Option<String>> {
    prompt(text)?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn prompt(text: &str) -> Result<()> {
    print!("{}", text);
    io::stdout().flush()?;
    Ok(())
}

fn print_leaderboard(mode: Mode, entries: &[LeaderboardEntry]) {
    println!("== {} leaderboard ==", mode);
    if entries.is_empty() {
        println!("  (no scores yet)");
    }
    for (rank, entry) in entries.iter().enumerate() {
        println!("  {:>3}. {:<20} {}", rank + 1, entry.name(), entry.score());
    }
}

fn user_message(err: &strictly_hangman::SessionError) -> String {
    match err {
        strictly_hangman::SessionError::Leaderboard(e) => e.user_message(),
        other => other.to_string(),
    }
}
