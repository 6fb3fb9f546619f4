//! Token form pane rendering

use super::error_message::draw_error;
use super::field_renderer::draw_field;
use super::preview::draw_preview;
use crate::state::{FieldName, Pane};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Draw one form pane: fields, error lines, submit button and preview
pub fn draw(frame: &mut Frame, area: Rect, pane: &Pane, is_focused: bool) {
    let snapshot = pane.controller.snapshot();
    let form = pane.controller.form();

    let border_color = if is_focused {
        Color::Cyan
    } else {
        Color::DarkGray
    };

    let block = Block::default()
        .title(format!(" {} · {} ", pane.id.label(), snapshot.mode.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Address
            Constraint::Length(1),             // Address error
            Constraint::Length(3),             // Amount
            Constraint::Length(1),             // Amount error
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),                // Preview
        ])
        .margin(1)
        .split(area);

    let focused_field = form.active_field_name().filter(|_| is_focused);
    for (name, field_area, error_area) in [
        (FieldName::TokenAddress, chunks[0], chunks[1]),
        (FieldName::TokenAmount, chunks[2], chunks[3]),
    ] {
        let error = snapshot.visible_error(name);
        draw_field(
            frame,
            field_area,
            snapshot.field(name),
            focused_field == Some(name),
            error.is_some(),
        );
        draw_error(frame, error_area, error);
    }

    render_submit_button(
        frame,
        chunks[4],
        is_focused && form.is_submit_active(),
        snapshot.is_valid(),
    );

    draw_preview(frame, chunks[5], &snapshot, pane.preview_updates());
}
