//! Read-only preview of the current form values

use crate::state::{FieldName, FieldStatus, FormSnapshot};
use crate::validation::to_base_units;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn status_label(status: FieldStatus) -> (&'static str, Color) {
    match status {
        FieldStatus::Untouched => ("untouched", Color::DarkGray),
        FieldStatus::Valid => ("valid", Color::Green),
        FieldStatus::Invalid => ("invalid", Color::Red),
        FieldStatus::Submitted => ("submitted", Color::Blue),
    }
}

fn value_line<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(label, Style::default().fg(Color::Gray)),
        Span::raw(value),
    ])
}

/// Draw the preview box
pub fn draw_preview(frame: &mut Frame, area: Rect, snapshot: &FormSnapshot, updates: u64) {
    let base_units = to_base_units(snapshot.amount.value(), snapshot.decimals)
        .unwrap_or_else(|_| "-".to_string());

    let mut lines = vec![
        Line::from(Span::styled(
            format!("Preview updates: {updates}"),
            Style::default().fg(Color::Blue),
        )),
        Line::from(""),
        value_line("Token Address: ", snapshot.address.value()),
        value_line("Token Amount:  ", snapshot.amount.value()),
        value_line("Base units:    ", &base_units),
        Line::from(""),
    ];

    let mut statuses = vec![Span::styled("Status: ", Style::default().fg(Color::Gray))];
    for name in FieldName::ALL {
        let (label, color) = status_label(snapshot.status(name));
        statuses.push(Span::raw(format!("{}=", name.as_str())));
        statuses.push(Span::styled(label, Style::default().fg(color)));
        statuses.push(Span::raw("  "));
    }
    lines.push(Line::from(statuses));
    lines.push(Line::from(Span::styled(
        format!("Submit attempts: {}", snapshot.submit_count),
        Style::default().fg(Color::Gray),
    )));

    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let wrap = Wrap { trim: false };
    frame.render_widget(Paragraph::new(lines).wrap(wrap).block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormController, FormOptions, MockSubmitSink};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(snapshot: &FormSnapshot, updates: u64) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal
            .draw(|frame| draw_preview(frame, frame.area(), snapshot, updates))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn controller() -> FormController {
        FormController::new(FormOptions::default(), Box::new(MockSubmitSink::new()))
    }

    #[test]
    fn test_shows_values_and_counter() {
        let mut controller = controller();
        controller.set_field(FieldName::TokenAmount, "1.5");
        let screen = render(&controller.snapshot(), 3);

        assert!(screen.contains("Preview updates: 3"));
        assert!(screen.contains("Token Amount:  1.5"));
        assert!(screen.contains("Base units:    1500000000000000000"));
        assert!(screen.contains("tokenAmount=valid"));
        assert!(screen.contains("tokenAddress=untouched"));
    }

    #[test]
    fn test_invalid_amount_has_no_base_units() {
        let mut controller = controller();
        controller.set_field(FieldName::TokenAmount, "abc");
        let screen = render(&controller.snapshot(), 1);

        assert!(screen.contains("Base units:    -"));
        assert!(screen.contains("tokenAmount=invalid"));
    }
}
