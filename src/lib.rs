//! Rewind Games library - terminal front end for time-travel tic-tac-toe
//!
//! The game rules and history live in [`rewind_tictactoe`]. This crate
//! renders them and turns key presses into game events.
//!
//! # Architecture
//!
//! - **Config**: optional TOML settings for the terminal board
//! - **Replay**: headless move-list playback with text or JSON output
//! - **TUI**: ratatui board, status line and selectable move list
//!
//! # Example
//!
//! ```
//! use rewind_games::{parse_moves, render_text, run_replay};
//!
//! # fn example() -> anyhow::Result<()> {
//! let moves = parse_moves(&["0".to_string(), "center".to_string()])?;
//! let game = run_replay(&moves, Some(1))?;
//! println!("{}", render_text(&game.view()));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod replay;
pub mod tui;

pub use config::{ConfigError, TuiConfig};
pub use replay::{parse_moves, render_json, render_text, run_replay};
pub use tui::{App, AppAction, Focus, run_tui};

pub use rewind_tictactoe as tictactoe;
