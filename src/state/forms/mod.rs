//! Form domain layer
//!
//! Field values, validation verdicts and the controller that ties them
//! together for the token transfer forms.

mod controller;
mod field;
mod form_state;
mod sink;

pub use controller::{FormController, Listener, SubmitOutcome, SubscriptionId};
pub use field::{FieldName, FieldStatus, FormField, UnknownField};
pub use form_state::{Form, FormOptions, FormSnapshot, FormValues, TokenForm, ValidationMode};
pub use sink::{SubmitSink, TracingSink};

#[cfg(test)]
pub use sink::MockSubmitSink;
