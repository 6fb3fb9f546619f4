//! Form field value objects

use crate::validation::{Rejection, Verdict};
use std::fmt;
use std::str::FromStr;

/// The two tracked fields of a token form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    TokenAddress,
    TokenAmount,
}

impl FieldName {
    pub const ALL: [FieldName; 2] = [FieldName::TokenAddress, FieldName::TokenAmount];

    /// Wire name used in submitted values and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TokenAddress => "tokenAddress",
            Self::TokenAmount => "tokenAmount",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TokenAddress => "Token Address",
            Self::TokenAmount => "Token Amount",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown field name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for FieldName {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tokenAddress" => Ok(Self::TokenAddress),
            "tokenAmount" => Ok(Self::TokenAmount),
            other => Err(UnknownField(other.to_string())),
        }
    }
}

/// Lifecycle of a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Untouched,
    Valid,
    Invalid,
    Submitted,
}

/// A single form field with its raw value and latest verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: FieldName,
    value: String,
    verdict: Verdict,
    touched: bool,
    submitted: bool,
}

impl FormField {
    /// Create an empty field with the verdict for an empty value
    pub fn new(name: FieldName, verdict: Verdict) -> Self {
        Self {
            name,
            value: String::new(),
            verdict,
            touched: false,
            submitted: false,
        }
    }

    pub fn label(&self) -> &'static str {
        self.name.label()
    }

    /// Raw value as typed
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn verdict(&self) -> &Verdict {
        &self.verdict
    }

    pub fn is_touched(&self) -> bool {
        self.touched
    }

    pub fn status(&self) -> FieldStatus {
        if self.submitted {
            FieldStatus::Submitted
        } else if !self.touched {
            FieldStatus::Untouched
        } else if self.verdict.is_accepted() {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }

    /// Replace the raw value. Marks the field touched and leaves the submitted state.
    pub(super) fn set_value(&mut self, value: String) {
        self.value = value;
        self.touched = true;
        self.submitted = false;
    }

    pub(super) fn set_verdict(&mut self, verdict: Verdict) {
        self.verdict = verdict;
    }

    pub(super) fn mark_submitted(&mut self) {
        self.submitted = true;
    }

    pub(super) fn clear_submitted(&mut self) {
        self.submitted = false;
    }

    pub fn rejection(&self) -> Option<Rejection> {
        self.verdict.rejection()
    }
}
