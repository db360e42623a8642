//! Terminal UI for Rewind Games.
//!
//! The terminal is a thin collaborator of the core: each frame pulls a
//! fresh view from the game, and each key press raises at most one event
//! (cell click or history selection) back into it.

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Focus};
pub use input::{digit_position, move_cursor};
pub use ui::draw;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::{Backend, CrosstermBackend}};
use std::io;
use std::time::Duration;
use tracing::{error, info, instrument};

use crate::TuiConfig;

/// Runs the interactive game until the user quits.
pub fn run_tui(config: TuiConfig) -> Result<()> {
    // Log to a file so output does not tear the alternate screen.
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting Rewind Games TUI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    let res = run_loop(&mut terminal, &mut app, &config);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(snapshots = app.game().history().len(), "TUI closed");
    res
}

/// Draw, wait for a key, dispatch; repeat until quit.
#[instrument(skip_all)]
fn run_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App, config: &TuiConfig) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| draw(f, app, config))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
        {
            // Skip key release events (crossterm fires both press and release).
            if key.kind == KeyEventKind::Release {
                continue;
            }
            if app.handle_key(key) == AppAction::Quit {
                info!("User quit");
                return Ok(());
            }
        }
    }
}
