//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::SubmitPhase;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![];

    let (symbol, color) = match app.state.form.phase() {
        SubmitPhase::Valid => (" ● ", Color::Green),
        SubmitPhase::Invalid => (" ● ", Color::Red),
        SubmitPhase::Idle | SubmitPhase::Validating => (" ○ ", Color::Gray),
    };
    spans.push(Span::styled(symbol, Style::default().fg(color)));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::styled(msg, Style::default().fg(Color::Red)));
    } else {
        spans.push(Span::styled(
            "Fill in every field and submit",
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
