//! Application state definitions

use super::forms::{FormController, FormOptions, FormSnapshot, FormValues, TracingSink};
use chrono::{DateTime, Utc};
use std::cell::Cell;
use std::rc::Rc;

/// Which of the two side-by-side forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaneId {
    /// Errors appear while typing
    #[default]
    Live,
    /// Errors appear after the first submit
    Deferred,
}

impl PaneId {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Live => Self::Deferred,
            Self::Deferred => Self::Live,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Deferred => "Deferred",
        }
    }

    fn log_name(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Deferred => "deferred",
        }
    }
}

/// One form with its controller and preview counter
pub struct Pane {
    pub id: PaneId,
    pub controller: FormController,
    /// Bumped by a listener on every committed change
    preview_updates: Rc<Cell<u64>>,
}

impl Pane {
    pub fn new(id: PaneId, options: FormOptions) -> Self {
        let sink = Box::new(TracingSink::new(id.log_name()));
        let mut controller = FormController::new(options, sink);

        let preview_updates = Rc::new(Cell::new(0));
        let counter = Rc::clone(&preview_updates);
        controller.subscribe(Box::new(move |_: &FormSnapshot| {
            counter.set(counter.get() + 1);
        }));

        Self {
            id,
            controller,
            preview_updates,
        }
    }

    /// Number of times the preview was notified of a change
    pub fn preview_updates(&self) -> u64 {
        self.preview_updates.get()
    }
}

/// A successful submission, shown in a dialog until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionRecord {
    pub pane: PaneId,
    pub values: FormValues,
    pub submitted_at: DateTime<Utc>,
}

/// Main application state
pub struct AppState {
    pub live: Pane,
    pub deferred: Pane,
    pub active_pane: PaneId,
    /// Last accepted submission, displayed as a modal
    pub submission: Option<SubmissionRecord>,
    /// Status bar message
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(live: FormOptions, deferred: FormOptions) -> Self {
        Self {
            live: Pane::new(PaneId::Live, live),
            deferred: Pane::new(PaneId::Deferred, deferred),
            active_pane: PaneId::default(),
            submission: None,
            status_message: None,
        }
    }

    pub fn pane(&self, id: PaneId) -> &Pane {
        match id {
            PaneId::Live => &self.live,
            PaneId::Deferred => &self.deferred,
        }
    }

    pub fn pane_mut(&mut self, id: PaneId) -> &mut Pane {
        match id {
            PaneId::Live => &mut self.live,
            PaneId::Deferred => &mut self.deferred,
        }
    }

    pub fn active(&self) -> &Pane {
        self.pane(self.active_pane)
    }

    pub fn active_mut(&mut self) -> &mut Pane {
        self.pane_mut(self.active_pane)
    }

    pub fn switch_pane(&mut self) {
        self.active_pane = self.active_pane.toggle();
    }

    pub fn dismiss_submission(&mut self) {
        self.submission = None;
    }
}
