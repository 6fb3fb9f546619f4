//! Submit button for a token form

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render the submit button. Dimmed while the form would be rejected.
pub fn render_submit_button(frame: &mut Frame, area: Rect, is_selected: bool, is_ready: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = match (is_selected, is_ready) {
        (true, _) => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        (false, true) => Style::default().fg(Color::Green),
        (false, false) => Style::default().fg(Color::DarkGray),
    };

    let paragraph = Paragraph::new(" Submit ").style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    /// Foreground colour of the first label character
    fn label_color(is_selected: bool, is_ready: bool) -> Color {
        let mut terminal = Terminal::new(TestBackend::new(12, BUTTON_HEIGHT)).unwrap();
        terminal
            .draw(|frame| render_submit_button(frame, frame.area(), is_selected, is_ready))
            .unwrap();
        terminal.backend().buffer()[(2, 1)].fg
    }

    #[test]
    fn test_ready_button_is_highlighted() {
        assert_eq!(label_color(false, true), Color::Green);
    }

    #[test]
    fn test_unready_button_is_dimmed() {
        assert_eq!(label_color(false, false), Color::DarkGray);
    }

    #[test]
    fn test_selection_wins_over_readiness() {
        assert_eq!(label_color(true, false), Color::Cyan);
        assert_eq!(label_color(true, true), Color::Cyan);
    }
}
