//! End-to-end click scenarios.

use rewind_tictactoe::{Game, IgnoreReason, Outcome, Play, Player, Position, Status};

fn top_row_win() -> Game {
    let mut game = Game::new();
    for index in [0, 4, 1, 3, 2] {
        let pos = Position::from_index(index).unwrap();
        assert!(game.click(pos).is_recorded(), "click {} ignored", index);
    }
    game
}

#[test]
fn test_x_completes_top_row() {
    let mut game = top_row_win();

    assert_eq!(game.outcome(), Outcome::Won(Player::X));
    assert_eq!(game.status(), Status::Winner(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");
    assert_eq!(game.history().len(), 6);

    assert_eq!(
        game.click(Position::MiddleRight),
        Play::Ignored(IgnoreReason::GameOver(Player::X))
    );
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.history().current_index(), 5);
}

#[test]
fn test_rewind_to_start_and_branch() {
    let mut game = top_row_win();

    game.select_history(0).unwrap();
    assert!(game.board().is_blank());
    assert_eq!(game.status().to_string(), "Next player is X");
    assert_eq!(game.history().len(), 6);

    assert!(game.click(Position::TopLeft).is_recorded());
    assert_eq!(game.history().len(), 2);
    assert_eq!(game.outcome(), Outcome::InProgress);

    let labels: Vec<_> = game.move_list().into_iter().map(|e| e.label).collect();
    assert_eq!(labels, ["Go to game start", "Go to move #1"]);
}

#[test]
fn test_rewind_before_win_allows_play() {
    let mut game = top_row_win();

    game.select_history(4).unwrap();
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.turn(), Player::X);

    assert!(game.click(Position::BottomRight).is_recorded());
    assert_eq!(game.history().len(), 6);
    assert_eq!(game.outcome(), Outcome::InProgress);
}

#[test]
fn test_full_board_without_winner_keeps_asking_for_next_player() {
    // X O X / X O O / O X X
    let game = Game::replay(&[
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::Center,
        Position::MiddleLeft,
        Position::MiddleRight,
        Position::BottomCenter,
        Position::BottomLeft,
        Position::BottomRight,
    ]);

    assert_eq!(game.history().len(), 10);
    assert_eq!(game.outcome(), Outcome::InProgress);
    assert_eq!(game.status().to_string(), "Next player is O");
}

#[test]
fn test_replay_skips_ignored_clicks() {
    let game = Game::replay(&[Position::Center, Position::Center, Position::TopLeft]);
    assert_eq!(game.history().len(), 3);
    assert_eq!(game.turn(), Player::X);
}
