//! Stateless rendering for both screens.

use super::{StopwatchApp, TicTacToeApp};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_stopwatch::Clock;
use strictly_tictactoe::{Player, Position, Square};

/// Renders the tic-tac-toe screen: title, board with cursor, status line.
pub fn draw_tictactoe(frame: &mut Frame, app: &TicTacToeApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(9),    // Board
            Constraint::Length(3), // Status
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], "Tic Tac Toe");
    draw_board(frame, chunks[1], app);

    let status_color = if app.game().status().is_over() {
        Color::Green
    } else {
        Color::Yellow
    };
    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);
}

/// Renders the stopwatch screen: title, `MM:SS:CC` readout, key help.
pub fn draw_stopwatch<C: Clock>(frame: &mut Frame, app: &StopwatchApp<C>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(3),    // Readout
            Constraint::Length(3), // Help
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], "Stopwatch");

    let readout_style = if app.is_running() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    };
    let readout = Paragraph::new(app.display())
        .style(readout_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(readout, center_rect(chunks[1], 20, 3));

    let help = Paragraph::new(format!(
        "[s] Start   [p] Pause   [r] Reset   [q] Quit   tick {}ms",
        app.tick_ms()
    ))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, chunks[2]);
}

fn draw_title(frame: &mut Frame, area: Rect, title: &str) {
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &TicTacToeApp) {
    let board_area = center_rect(area, 40, 11);

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

    let winning_line = app.game().winning_line();
    for row in 0..3 {
        let positions = [row * 3, row * 3 + 1, row * 3 + 2]
            .map(|i| Position::from_index(i).unwrap_or(Position::Center));
        draw_row(frame, rows[row * 2], app, &positions, winning_line.as_ref());
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    app: &TicTacToeApp,
    positions: &[Position; 3],
    winning_line: Option<&[Position; 3]>,
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

    for (i, pos) in positions.iter().enumerate() {
        let highlight = winning_line.is_some_and(|line| line.contains(pos));
        draw_cell(frame, cols[i * 2], app, *pos, highlight);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &TicTacToeApp, pos: Position, highlight: bool) {
    let (symbol, base_style) = match app.game().board().get(pos) {
        Square::Empty => (
            format!(" {} ", pos.to_index() + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            " X ".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            " O ".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
    };

    let style = if pos == app.cursor() && !app.game().status().is_over() {
        base_style.bg(Color::White).fg(Color::Black)
    } else if highlight {
        base_style.bg(Color::Green)
    } else {
        base_style
    };

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
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
    use crate::settings::Settings;
    use crossterm::event::KeyCode;
    use ratatui::{Terminal, backend::TestBackend};
    use strictly_stopwatch::ManualClock;

    fn rendered(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_tictactoe_screen_shows_marks_and_status() {
        let mut app = TicTacToeApp::new();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));

        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|f| draw_tictactoe(f, &app)).unwrap();

        let screen = rendered(&terminal);
        assert!(screen.contains("Tic Tac Toe"));
        assert!(screen.contains(" X "));
        assert!(screen.contains(" O "));
        assert!(screen.contains("Player X's turn"));
    }

    #[test]
    fn test_stopwatch_screen_shows_readout() {
        let app = StopwatchApp::new(ManualClock::new(), &Settings::default());

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| draw_stopwatch(f, &app)).unwrap();

        let screen = rendered(&terminal);
        assert!(screen.contains("00:00:00"));
        assert!(screen.contains("[p] Pause"));
        assert!(screen.contains("tick 10ms"));
    }

    #[test]
    fn test_stopwatch_help_shows_configured_period() {
        let settings = Settings::default().with_tick_interval_ms(Some(25));
        let app = StopwatchApp::new(ManualClock::new(), &settings);

        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| draw_stopwatch(f, &app)).unwrap();

        assert!(rendered(&terminal).contains("tick 25ms"));
    }
}
