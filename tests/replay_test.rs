//! Tests for headless replay.

use rewind_games::tictactoe::{Outcome, Player};
use rewind_games::{parse_moves, render_json, render_text, run_replay};

fn moves(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_top_row_win_then_extra_click() {
    let positions = parse_moves(&moves(&["0", "4", "1", "3", "2", "5"])).unwrap();
    let game = run_replay(&positions, None).unwrap();

    assert_eq!(game.outcome(), Outcome::Won(Player::X));
    assert_eq!(game.history().len(), 6);
    assert!(render_text(&game.view()).contains("Winner: X"));
}

#[test]
fn test_jump_to_start_shows_empty_board() {
    let positions = parse_moves(&moves(&["top-left", "center", "top-center"])).unwrap();
    let game = run_replay(&positions, Some(0)).unwrap();
    let text = render_text(&game.view());

    assert!(text.starts_with("1|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|9"));
    assert!(text.contains("> 1. Go to game start"));
    assert!(text.contains("  4. Go to move #3"));
}

#[test]
fn test_json_output_lists_every_snapshot() {
    let positions = parse_moves(&moves(&["0", "4"])).unwrap();
    let game = run_replay(&positions, None).unwrap();
    let value: serde_json::Value = serde_json::from_str(&render_json(&game.view()).unwrap()).unwrap();

    assert_eq!(value["moves"].as_array().unwrap().len(), 3);
    assert_eq!(value["turn"], "X");
    assert_eq!(value["outcome"], "InProgress");
}
