//! Headless replay of a move list.

use anyhow::{Context, Result};
use rewind_tictactoe::{Game, GameView, Play, Position};
use tracing::{debug, info, instrument, warn};

/// Parses cell names into positions.
///
/// Accepts 0-8 or a label such as `"top-left"`.
#[instrument]
pub fn parse_moves(moves: &[String]) -> Result<Vec<Position>> {
    moves
        .iter()
        .filter(|m| !m.trim().is_empty())
        .map(|m| {
            Position::from_label_or_number(m)
                .with_context(|| format!("Unknown cell {:?} (use 0-8 or a label)", m))
        })
        .collect()
}

/// Plays `positions` in order, then optionally jumps to `jump`.
///
/// Ignored clicks are logged and skipped, exactly as in the interactive
/// board.
#[instrument(skip(positions), fields(moves = positions.len()))]
pub fn run_replay(positions: &[Position], jump: Option<usize>) -> Result<Game> {
    let mut game = Game::new();
    for pos in positions {
        if let Play::Ignored(reason) = game.click(*pos) {
            warn!(position = %pos, %reason, "Move skipped");
        }
    }
    info!(snapshots = game.history().len(), "Replay finished");

    if let Some(index) = jump {
        debug!(index, "Jumping after replay");
        game.select_history(index)
            .with_context(|| format!("Cannot jump to move {}", index))?;
    }
    Ok(game)
}

/// Renders a view as plain text: board, status, then the move list.
pub fn render_text(view: &GameView) -> String {
    let mut out = view.board.display();
    out.push_str("\n\n");
    out.push_str(&view.status);
    out.push('\n');
    for entry in &view.moves {
        let marker = if entry.is_current { '>' } else { ' ' };
        out.push_str(&format!("\n{} {}. {}", marker, entry.index + 1, entry.label));
    }
    out.push('\n');
    out
}

/// Renders a view as pretty JSON.
pub fn render_json(view: &GameView) -> Result<String> {
    serde_json::to_string_pretty(view).context("Failed to serialize game view")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_numbers_and_labels() {
        let parsed = parse_moves(&strings(&["0", "center", " 8 "])).unwrap();
        assert_eq!(
            parsed,
            [Position::TopLeft, Position::Center, Position::BottomRight]
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = parse_moves(&strings(&["0", "9"])).unwrap_err();
        assert!(err.to_string().contains("Unknown cell"));
    }

    #[test]
    fn test_replay_and_jump() {
        let positions = parse_moves(&strings(&["0", "4", "1"])).unwrap();
        let game = run_replay(&positions, Some(1)).unwrap();
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.history().current_index(), 1);
    }

    #[test]
    fn test_replay_rejects_bad_jump() {
        let positions = parse_moves(&strings(&["0"])).unwrap();
        assert!(run_replay(&positions, Some(5)).is_err());
    }

    #[test]
    fn test_render_text() {
        let game = run_replay(&[Position::TopLeft], Some(0)).unwrap();
        let text = render_text(&game.view());
        assert_eq!(
            text,
            "1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9\n\nNext player is X\n\n> 1. Go to game start\n  2. Go to move #1\n"
        );
    }

    #[test]
    fn test_render_json() {
        let game = run_replay(&[Position::TopLeft], None).unwrap();
        let json = render_json(&game.view()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["status"], "Next player is O");
    }
}
