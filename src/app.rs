//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, SubmissionRecord, SubmitOutcome};
use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            state: AppState::new(config.live_options(), config.deferred_options()),
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        // Submission dialog is modal
        if self.state.submission.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_submission();
            }
            return;
        }

        // Clear any status messages on key press
        self.copy_message = None;

        match key.code {
            KeyCode::Tab => self.state.active_mut().controller.next_field(),
            KeyCode::BackTab => self.state.active_mut().controller.prev_field(),
            KeyCode::Left | KeyCode::Right => self.state.switch_pane(),
            KeyCode::Enter => self.submit_active_pane(),
            KeyCode::Esc => self.state.status_message = None,
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.switch_pane();
            }
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit_active_pane();
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.active_mut().controller.clear_field();
            }
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_address();
            }
            // Unbound chords are not text input
            KeyCode::Char(_)
                if key.modifiers.intersects(
                    KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER,
                ) => {}
            KeyCode::Char(c) => self.state.active_mut().controller.push_char(c),
            KeyCode::Backspace => self.state.active_mut().controller.pop_char(),
            _ => {}
        }
    }

    fn submit_active_pane(&mut self) {
        let pane = self.state.active_pane;
        match self.state.active_mut().controller.submit() {
            SubmitOutcome::Accepted(values) => {
                self.state.status_message = None;
                self.state.submission = Some(SubmissionRecord {
                    pane,
                    values,
                    submitted_at: Utc::now(),
                });
            }
            SubmitOutcome::Rejected(rejections) => {
                let fields: Vec<&str> = rejections.iter().map(|(name, _)| name.label()).collect();
                self.state.status_message =
                    Some(format!("Fix before submitting: {}", fields.join(", ")));
            }
        }
    }

    /// Copy the checksummed address of the active pane
    fn copy_address(&mut self) {
        let snapshot = self.state.active().controller.snapshot();
        let Some(address) = snapshot.address.verdict().value() else {
            self.copy_message = Some("No valid address to copy".to_string());
            return;
        };

        match self.copy_to_clipboard(address) {
            Ok(()) => self.copy_message = Some(format!("Copied {address}")),
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err}");
                self.copy_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
