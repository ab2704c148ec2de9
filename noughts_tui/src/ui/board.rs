//! Board grid rendering.

use crate::theme::Theme;
use noughts::{Board, Cell, Mark};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

/// Renders the 3x3 grid centered in `area`.
pub fn render_board(f: &mut Frame, area: Rect, board: &Board, theme: Theme) {
    let board_area = center_rect(area, 29, 11);
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

    render_row(f, rows[0], board, 0, theme);
    render_separator(f, rows[1], theme);
    render_row(f, rows[2], board, 3, theme);
    render_separator(f, rows[3], theme);
    render_row(f, rows[4], board, 6, theme);
}

fn render_row(f: &mut Frame, area: Rect, board: &Board, start: usize, theme: Theme) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_cell(f, cols[0], board, start, theme);
    render_vertical_sep(f, cols[1], theme);
    render_cell(f, cols[2], board, start + 1, theme);
    render_vertical_sep(f, cols[3], theme);
    render_cell(f, cols[4], board, start + 2, theme);
}

fn render_cell(f: &mut Frame, area: Rect, board: &Board, index: usize, theme: Theme) {
    let (text, style) = match board.cell(index) {
        Some(Cell::Occupied(Mark::X)) => ("X".to_string(), theme.x_mark()),
        Some(Cell::Occupied(Mark::O)) => ("O".to_string(), theme.o_mark()),
        _ => (format!("{}", index + 1), theme.dim()),
    };
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect, theme: Theme) {
    let sep = Paragraph::new("─".repeat(area.width as usize)).style(theme.dim());
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect, theme: Theme) {
    let sep = Paragraph::new("│")
        .style(theme.dim())
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
