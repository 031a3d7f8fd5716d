//! Stateless UI rendering for tic-tac-toe.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Span,
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Context, Line as CanvasLine, Rectangle},
    },
};
use strictly_tictactoe::{
    Accent, BOARD_EXTENT, BOARD_SIZE, BoardView, CELL_GAP, CELL_SIZE, Mark, Position, Theme,
    cell_center,
};

use super::app::App;

const GRID_COLOR: Color = Color::DarkGray;

fn color(accent: Accent) -> Color {
    Color::Rgb(accent.r, accent.g, accent.b)
}

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let view = app.presenter().view();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Strictly Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .centered();
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], view, app.presenter().theme(), app.cursor());

    let mut status = vec![ratatui::text::Line::from(Span::styled(
        view.status_text().as_str(),
        Style::default()
            .fg(color(*view.status_color()))
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some((message, accent)) = view.message() {
        status.push(ratatui::text::Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(color(*accent)),
        )));
    }
    let status = Paragraph::new(status)
        .centered()
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new("arrows move  enter/space play  1-9 play square  r restart  q quit")
        .style(Style::default().fg(Color::DarkGray))
        .centered();
    frame.render_widget(help, chunks[3]);
}

/// Canvas y grows upward; layout y grows downward.
fn flip(y: f64) -> f64 {
    BOARD_EXTENT - y
}

fn draw_board(frame: &mut Frame, area: Rect, view: &BoardView, theme: &Theme, cursor: Position) {
    let board_area = center_rect(area, 44, area.height.min(22));

    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL))
        .marker(Marker::Braille)
        .x_bounds([0.0, BOARD_EXTENT])
        .y_bounds([0.0, BOARD_EXTENT])
        .paint(|ctx| {
            draw_grid(ctx);
            draw_cursor(ctx, cursor);
            draw_marks(ctx, view, theme);
            if let Some(overlay) = view.overlay() {
                ctx.draw(&CanvasLine {
                    x1: overlay.start.x,
                    y1: flip(overlay.start.y),
                    x2: overlay.end.x,
                    y2: flip(overlay.end.y),
                    color: color(overlay.color),
                });
            }
        });
    frame.render_widget(canvas, board_area);
}

fn draw_grid(ctx: &mut Context) {
    for k in 1..3 {
        let at = k as f64 * (CELL_SIZE + CELL_GAP) - CELL_GAP / 2.0;
        ctx.draw(&CanvasLine {
            x1: at,
            y1: 0.0,
            x2: at,
            y2: BOARD_EXTENT,
            color: GRID_COLOR,
        });
        ctx.draw(&CanvasLine {
            x1: 0.0,
            y1: at,
            x2: BOARD_EXTENT,
            y2: at,
            color: GRID_COLOR,
        });
    }
}

fn draw_cursor(ctx: &mut Context, cursor: Position) {
    let pitch = CELL_SIZE + CELL_GAP;
    let left = cursor.col() as f64 * pitch;
    let top = cursor.row() as f64 * pitch;
    ctx.draw(&Rectangle {
        x: left,
        y: flip(top + CELL_SIZE),
        width: CELL_SIZE,
        height: CELL_SIZE,
        color: Color::White,
    });
}

fn draw_marks(ctx: &mut Context, view: &BoardView, theme: &Theme) {
    for index in 0..BOARD_SIZE {
        let center = cell_center(index);
        let span = match view.marks()[index] {
            Some(mark) => {
                let mut style = Style::default()
                    .fg(color(theme.accent(mark)))
                    .add_modifier(Modifier::BOLD);
                if view.winning_line().is_some_and(|line| line.contains(index)) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Span::styled(mark_symbol(mark), style)
            }
            None => Span::styled((index + 1).to_string(), Style::default().fg(GRID_COLOR)),
        };
        ctx.print(center.x, flip(center.y), span);
    }
}

fn mark_symbol(mark: Mark) -> &'static str {
    match mark {
        Mark::X => "X",
        Mark::O => "O",
    }
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
