//! Rewind Games - Unified CLI
//!
//! Interactive terminal play and headless replay.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rewind_games::{TuiConfig, parse_moves, render_json, render_text, run_replay, run_tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => {
            let config = TuiConfig::load(config.as_deref())?;
            run_tui(config)
        }
        Command::Replay { moves, jump, json } => replay(moves, jump, json),
    }
}

/// Run the headless replay, logging to stderr
fn replay(moves: Vec<String>, jump: Option<usize>, json: bool) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let positions = parse_moves(&moves)?;
    info!(moves = positions.len(), "Replaying");
    let view = run_replay(&positions, jump)?.view();

    if json {
        println!("{}", render_json(&view)?);
    } else {
        print!("{}", render_text(&view));
    }
    Ok(())
}
