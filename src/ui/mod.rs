//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::PaneId;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let (live_area, deferred_area) = layout::create_layout(area);

    let active = app.state.active_pane;
    forms::draw_token_form(frame, live_area, &app.state.live, active == PaneId::Live);
    forms::draw_token_form(
        frame,
        deferred_area,
        &app.state.deferred,
        active == PaneId::Deferred,
    );

    layout::draw_status_bar(frame, app);

    // Modal goes last so it sits on top
    if let Some(record) = &app.state.submission {
        components::render_submitted_dialog(frame, record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TuiConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{backend::TestBackend, Terminal};

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(140, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_draws_both_panes() {
        let app = App::new(&TuiConfig::default());
        let screen = render(&app);
        assert!(screen.contains("Live · validate on change"));
        assert!(screen.contains("Deferred · validate on submit"));
        assert!(screen.contains("Preview"));
    }

    #[test]
    fn test_draws_submitted_dialog() {
        let mut app = App::new(&TuiConfig::default());
        for c in "0x27b1fdb04752bbc536007a920d24acb045561c26".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);

        let screen = render(&app);
        assert!(screen.contains("Submitted"));
        assert!(screen.contains("0x27b1fdb04752bbc536007a920d24acb045561c26"));
    }

    #[test]
    fn test_draws_status_message() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, KeyCode::Enter);
        let screen = render(&app);
        assert!(screen.contains("Fix before submitting"));
    }
}
