//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand};

/// Rewind Games - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Tic-tac-toe with time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Replay a move list without a terminal UI and print the result
    Replay {
        /// Comma-separated cells, as 0-8 or labels like "center"
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<String>,

        /// Jump to this history index after replaying
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the game view as JSON
        #[arg(long)]
        json: bool,
    },
}
