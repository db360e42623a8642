//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use rewind_tictactoe::{GameView, Player, Position, Square};

use super::app::{App, Focus};
use crate::TuiConfig;

const HELP: &str =
    "arrows move · enter/space or 1-9 play · tab switch panel · r restart · q quit";

/// Renders the whole screen from a fresh view of `app`.
pub fn draw(frame: &mut Frame, app: &App, config: &TuiConfig) {
    let view = app.view();
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board + moves
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(config.title().as_str())
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    draw_board(frame, body[0], app, &view, config);
    draw_moves(frame, body[1], app, &view);

    let status = match app.notice() {
        Some(notice) => format!("{}  ({})", view.status, notice),
        None => view.status.clone(),
    };
    let status_text = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status_text, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App, view: &GameView, config: &TuiConfig) {
    let border = if *app.focus() == Focus::Board {
        Color::White
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .title("Board")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let board_area = center_rect(inner, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, rect) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, rect, app, view, config, row);
    }
    draw_separator(frame, rows[1]);
    draw_separator(frame, rows[3]);
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &GameView,
    config: &TuiConfig,
    row: usize,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, rect) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
        if let Some(pos) = Position::from_index(row * 3 + col) {
            draw_cell(frame, rect, app, view, config, pos);
        }
    }
    draw_separator_vertical(frame, cols[1]);
    draw_separator_vertical(frame, cols[3]);
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    view: &GameView,
    config: &TuiConfig,
    pos: Position,
) {
    let (symbol, base_style) = match view.board.get(pos) {
        Square::Empty if *config.show_cell_numbers() => (
            format!("{}", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (" ".to_string(), Style::default()),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let on_winning_line = *config.highlight_winning_line()
        && view.winning_line.is_some_and(|line| line.contains(&pos));

    let style = if pos == *app.cursor() && *app.focus() == Focus::Board {
        base_style.bg(Color::White).fg(Color::Black)
    } else if on_winning_line {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", symbol), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_moves(frame: &mut Frame, area: Rect, app: &App, view: &GameView) {
    let focused = *app.focus() == Focus::History;
    let items: Vec<ListItem> = view
        .moves
        .iter()
        .map(|entry| {
            let marker = if entry.is_current { "● " } else { "  " };
            let mut style = Style::default();
            if entry.is_current {
                style = style.add_modifier(Modifier::BOLD);
            }
            if focused && entry.index == *app.history_cursor() {
                style = style.bg(Color::White).fg(Color::Black);
            }
            ListItem::new(Line::from(Span::styled(
                format!("{}{}. {}", marker, entry.index + 1, entry.label),
                style,
            )))
        })
        .collect();

    let border = if focused { Color::White } else { Color::DarkGray };
    let list = List::new(items).block(
        Block::default()
            .title("Moves")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(list, area);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal
            .draw(|f| draw(f, app, &TuiConfig::default()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_renders_status_and_moves() {
        let mut app = App::new();
        app.click(Position::Center);

        let screen = render(&app);
        assert!(screen.contains("Next player is O"));
        assert!(screen.contains("Go to game start"));
        assert!(screen.contains("Go to move #1"));
    }

    #[test]
    fn test_renders_winner() {
        let mut app = App::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::MiddleLeft,
            Position::TopRight,
        ] {
            app.click(pos);
        }

        assert!(render(&app).contains("Winner: X"));
    }
}
