//! Submission dialog

use crate::state::SubmissionRecord;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const DIALOG_WIDTH: u16 = 64;
const DIALOG_HEIGHT: u16 = 10;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Center a fixed-size rect inside `area`, shrinking it if the area is smaller
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render the accepted values of a submission as a centered overlay
pub fn render_submitted_dialog(frame: &mut Frame, record: &SubmissionRecord) {
    let dialog_area = centered(frame.area(), DIALOG_WIDTH, DIALOG_HEIGHT);

    // Clear the area behind the dialog
    frame.render_widget(Clear, dialog_area);

    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let timestamp = record.submitted_at.format(TIMESTAMP_FORMAT);
    let content = vec![
        Line::from(Span::styled(
            format!("Submitted ({})", record.pane.label()),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Address: ", Style::default().fg(Color::Gray)),
            Span::raw(record.values.token_address.as_str()),
        ]),
        Line::from(vec![
            Span::styled("Amount:  ", Style::default().fg(Color::Gray)),
            Span::raw(record.values.token_amount.as_str()),
        ]),
        Line::from(Span::styled(
            timestamp.to_string(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::raw("Press "),
            Span::styled("Enter", key_style),
            Span::raw(" or "),
            Span::styled("Esc", key_style),
            Span::raw(" to dismiss"),
        ]),
    ];

    let dialog = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(dialog, dialog_area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside_area() {
        let rect = centered(Rect::new(0, 0, 100, 40), 64, 10);
        assert_eq!(rect, Rect::new(18, 15, 64, 10));
    }

    #[test]
    fn test_centered_shrinks_to_small_area() {
        let rect = centered(Rect::new(2, 3, 20, 5), 64, 10);
        assert_eq!(rect, Rect::new(2, 3, 20, 5));
    }
}
