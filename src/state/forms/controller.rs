//! Form controller: owns field state, validates and notifies observers

use super::field::FieldName;
use super::form_state::{Form, FormOptions, FormSnapshot, FormValues, TokenForm};
use super::sink::SubmitSink;
use crate::validation::Rejection;

/// Callback run after every committed change
pub type Listener = Box<dyn FnMut(&FormSnapshot)>;

/// Handle returned by [`FormController::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every field passed and the sink received these values
    Accepted(FormValues),
    /// Submission suppressed
    Rejected(Vec<(FieldName, Rejection)>),
}

pub struct FormController {
    options: FormOptions,
    form: TokenForm,
    submit_count: u32,
    sink: Box<dyn SubmitSink>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl FormController {
    pub fn new(options: FormOptions, sink: Box<dyn SubmitSink>) -> Self {
        Self {
            options,
            form: TokenForm::new(options.decimals),
            submit_count: 0,
            sink,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn options(&self) -> FormOptions {
        self.options
    }

    /// Focus state and fields, for rendering
    pub fn form(&self) -> &TokenForm {
        &self.form
    }

    /// Update a field's raw value and re-validate the whole form.
    ///
    /// Setting the value a touched field already holds is a no-op.
    pub fn set_field(&mut self, name: FieldName, raw: impl Into<String>) {
        let raw = raw.into();
        let field = self.form.field(name);
        if field.is_touched() && field.value() == raw {
            return;
        }

        self.form.field_mut(name).set_value(raw);
        self.form.revalidate(self.options.decimals);
        tracing::debug!(
            field = %name,
            status = ?self.form.field(name).status(),
            "field updated"
        );
        self.notify();
    }

    /// Append a character to the focused field
    pub fn push_char(&mut self, c: char) {
        if let Some(name) = self.form.active_field_name() {
            let mut value = self.form.field(name).value().to_string();
            value.push(c);
            self.set_field(name, value);
        }
    }

    /// Remove the last character of the focused field
    pub fn pop_char(&mut self) {
        if let Some(name) = self.form.active_field_name() {
            let mut value = self.form.field(name).value().to_string();
            if value.pop().is_some() {
                self.set_field(name, value);
            }
        }
    }

    /// Clear the focused field
    pub fn clear_field(&mut self) {
        if let Some(name) = self.form.active_field_name() {
            self.set_field(name, String::new());
        }
    }

    pub fn next_field(&mut self) {
        self.form.next_field();
    }

    pub fn prev_field(&mut self) {
        self.form.prev_field();
    }

    /// Validate everything and hand accepted values to the sink.
    ///
    /// The sink is called exactly once when every field is accepted and
    /// never otherwise.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.submit_count = self.submit_count.saturating_add(1);
        self.form.revalidate(self.options.decimals);

        let outcome = match self.form.accepted_values() {
            Some(values) => {
                self.sink.on_accept(&values);
                self.form.mark_submitted();
                SubmitOutcome::Accepted(values)
            }
            None => {
                self.form.clear_submitted();
                let rejections = self.form.rejections();
                tracing::debug!(count = rejections.len(), "submit rejected");
                SubmitOutcome::Rejected(rejections)
            }
        };

        self.notify();
        outcome
    }

    /// Copy of the current state
    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            mode: self.options.mode,
            decimals: self.options.decimals,
            address: self.form.address.clone(),
            amount: self.form.amount.clone(),
            submit_count: self.submit_count,
        }
    }

    /// Register a listener called after every committed change
    pub fn subscribe(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, listener));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }
}
