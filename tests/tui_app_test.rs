//! Tests for key handling in the terminal app.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rewind_games::tictactoe::{Outcome, Player, Position};
use rewind_games::{App, AppAction, Focus};

fn press(app: &mut App, code: KeyCode) -> AppAction {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_digits(app: &mut App, digits: &str) {
    for c in digits.chars() {
        press(app, KeyCode::Char(c));
    }
}

#[test]
fn test_digits_click_cells() {
    let mut app = App::new();
    type_digits(&mut app, "15");

    let board = app.game().board();
    assert_eq!(board.get(Position::TopLeft).player(), Some(Player::X));
    assert_eq!(board.get(Position::Center).player(), Some(Player::O));
    assert_eq!(*app.cursor(), Position::Center);
}

#[test]
fn test_arrows_and_enter_click_cursor() {
    let mut app = App::new();
    press(&mut app, KeyCode::Up);
    press(&mut app, KeyCode::Left);
    press(&mut app, KeyCode::Enter);

    assert_eq!(*app.cursor(), Position::TopLeft);
    assert_eq!(app.game().history().len(), 2);
}

#[test]
fn test_occupied_click_sets_notice_only() {
    let mut app = App::new();
    type_digits(&mut app, "55");

    assert_eq!(app.game().history().len(), 2);
    assert_eq!(app.notice().as_deref(), Some("Center is already occupied"));
}

#[test]
fn test_move_list_selection_time_travels() {
    let mut app = App::new();
    type_digits(&mut app, "15243");
    assert_eq!(app.game().outcome(), Outcome::Won(Player::X));

    press(&mut app, KeyCode::Tab);
    assert_eq!(*app.focus(), Focus::History);
    assert_eq!(*app.history_cursor(), 5);

    press(&mut app, KeyCode::Home);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.game().history().current_index(), 0);
    assert!(app.game().board().is_blank());
    assert_eq!(app.game().history().len(), 6);

    // Digits still play while the move list has focus.
    type_digits(&mut app, "9");
    assert_eq!(app.game().history().len(), 2);
    assert_eq!(*app.history_cursor(), 1);
}

#[test]
fn test_history_cursor_is_clamped() {
    let mut app = App::new();
    type_digits(&mut app, "1");
    press(&mut app, KeyCode::Tab);

    for _ in 0..5 {
        press(&mut app, KeyCode::Down);
    }
    assert_eq!(*app.history_cursor(), 1);

    for _ in 0..5 {
        press(&mut app, KeyCode::Up);
    }
    assert_eq!(*app.history_cursor(), 0);
}

#[test]
fn test_invalid_selection_is_reported() {
    let mut app = App::new();
    app.select(3);

    assert_eq!(app.game().history().current_index(), 0);
    assert!(app.notice().is_some());
}

#[test]
fn test_restart_and_quit() {
    let mut app = App::new();
    type_digits(&mut app, "123");

    assert_eq!(press(&mut app, KeyCode::Char('r')), AppAction::Continue);
    assert_eq!(app.game().history().len(), 1);
    assert_eq!(press(&mut app, KeyCode::Char('q')), AppAction::Quit);
    assert_eq!(press(&mut app, KeyCode::Esc), AppAction::Quit);
}
