//! Rejection line shown under a field

use crate::validation::Rejection;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Build the error line; blank when there is nothing to show
pub fn error_line(rejection: Option<Rejection>) -> Paragraph<'static> {
    let Some(reason) = rejection else {
        return Paragraph::new("");
    };
    let style = Style::default().fg(Color::Red);
    Paragraph::new(format!(" {reason}")).style(style)
}

pub fn draw_error(frame: &mut Frame, area: Rect, rejection: Option<Rejection>) {
    frame.render_widget(error_line(rejection), area);
}
