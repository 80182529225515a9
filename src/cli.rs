//! Command-line interface for strictly_hangman.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_hangman::Mode;

/// Strictly Hangman - guess words or phrases in the terminal
#[derive(Parser, Debug)]
#[command(name = "strictly_hangman")]
#[command(about = "Type-safe hangman with word and phrase modes", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "hangman.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play rounds until you quit
    Play {
        /// Player name
        #[arg(short, long)]
        name: String,

        /// Game mode (words or phrases)
        #[arg(short, long, default_value = "words")]
        mode: Mode,

        /// Difficulty level (1-10)
        #[arg(short, long, default_value = "5")]
        difficulty: u8,

        /// Show the secret while playing
        #[arg(long)]
        admin: bool,
    },

    /// Print the ranked leaderboard for a mode
    Leaderboard {
        /// Game mode (words or phrases)
        #[arg(short, long, default_value = "words")]
        mode: Mode,
    },
}
