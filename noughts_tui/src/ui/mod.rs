//! Frame layout: title, board, status, scores, help.

mod board;

use crate::app::App;
use noughts::Mark;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    widgets::{Block, Paragraph},
};

/// Draws the whole frame.
pub fn draw(f: &mut Frame, app: &App) {
    let theme = app.theme();
    f.render_widget(Block::default().style(theme.base()), f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(11),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    let title = Paragraph::new("noughts")
        .style(theme.status())
        .alignment(Alignment::Center);
    f.render_widget(title, chunks[0]);

    board::render_board(f, chunks[1], app.game().board(), theme);

    let status = Paragraph::new(app.status().to_string())
        .style(theme.status())
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[2]);

    let scores = app.game().scores();
    let summary = format!(
        "X {}   O {}   |   {}   |   {} theme",
        scores.wins(Mark::X),
        scores.wins(Mark::O),
        app.game().mode().label(),
        theme.label(),
    );
    let summary = Paragraph::new(summary)
        .style(theme.base())
        .alignment(Alignment::Center);
    f.render_widget(summary, chunks[3]);

    let help = Paragraph::new("1-9 place   r reset   m mode   t theme   q quit")
        .style(theme.dim())
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[4]);
}
