//! Login form rendering

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::FieldId;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Width of the form column
const FORM_WIDTH: u16 = 50;

/// Draw the login form centered in `area`
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(FORM_WIDTH),
            Constraint::Min(0),
        ])
        .split(area);
    let form_area = columns[1];

    let block = Block::default()
        .title(" Login ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(form_area);
    frame.render_widget(block, form_area);

    let mut constraints: Vec<Constraint> = FieldId::ALL
        .iter()
        .map(|_| Constraint::Length(FIELD_HEIGHT))
        .collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Length(1)); // Help text
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let form = &app.state.form;
    let focused = form.focused_field();
    for id in FieldId::ALL {
        let value = form.values().display_value(id, app.mask_char());
        draw_field(
            frame,
            chunks[id.index()],
            id.label(),
            &value,
            &form.errors()[id],
            focused == Some(id),
        );
    }

    let button_row = FieldId::ALL.len();
    let button_area = Rect {
        width: chunks[button_row].width.min(12),
        ..chunks[button_row]
    };
    render_button(frame, button_area, "Submit", form.is_submit_focused());

    draw_help_text(
        frame,
        chunks[button_row + 1],
        &format!("Tab: next  Enter/{SUBMIT_SHORTCUT}: submit  Esc: quit"),
    );
}
