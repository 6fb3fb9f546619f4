//! Collaborator that receives accepted form values

use super::form_state::FormValues;

/// Receives the values of each successful submit
#[cfg_attr(test, mockall::automock)]
pub trait SubmitSink {
    fn on_accept(&mut self, values: &FormValues);
}

/// Sink that only logs the submitted values
#[derive(Debug, Clone, Default)]
pub struct TracingSink {
    /// Name of the form, included in the log line
    pub form: &'static str,
}

impl TracingSink {
    pub fn new(form: &'static str) -> Self {
        Self { form }
    }
}

impl SubmitSink for TracingSink {
    fn on_accept(&mut self, values: &FormValues) {
        match serde_json::to_string(values) {
            Ok(json) => tracing::info!(form = self.form, values = %json, "form submitted"),
            Err(err) => tracing::warn!(form = self.form, %err, "could not encode values"),
        }
    }
}
