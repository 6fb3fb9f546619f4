//! Form state, snapshots and navigation

use super::field::{FieldName, FieldStatus, FormField};
use crate::validation::{validate_field, Rejection, DEFAULT_DECIMALS};
use serde::{Deserialize, Serialize};

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// When rejection reasons become visible to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Show errors as soon as a field has been edited
    #[default]
    OnChange,
    /// Hide errors until the first submit, then update on every change
    OnSubmit,
}

impl ValidationMode {
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnChange => "validate on change",
            Self::OnSubmit => "validate on submit",
        }
    }
}

/// Per-form settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormOptions {
    pub mode: ValidationMode,
    /// Fractional digits allowed in the amount
    pub decimals: u8,
}

impl Default for FormOptions {
    fn default() -> Self {
        Self {
            mode: ValidationMode::default(),
            decimals: DEFAULT_DECIMALS,
        }
    }
}

/// Values handed to the submit collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    /// Checksummed address
    pub token_address: String,
    /// Amount exactly as typed
    pub token_amount: String,
}

/// The address/amount form with keyboard focus
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenForm {
    pub address: FormField,
    pub amount: FormField,
    /// 0=address, 1=amount, 2=submit button
    pub active_field_index: usize,
}

impl TokenForm {
    pub const SUBMIT_INDEX: usize = 2;

    pub fn new(decimals: u8) -> Self {
        let empty = |name| FormField::new(name, validate_field(name, "", decimals));
        Self {
            address: empty(FieldName::TokenAddress),
            amount: empty(FieldName::TokenAmount),
            active_field_index: 0,
        }
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::TokenAddress => &self.address,
            FieldName::TokenAmount => &self.amount,
        }
    }

    pub fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        match name {
            FieldName::TokenAddress => &mut self.address,
            FieldName::TokenAmount => &mut self.amount,
        }
    }

    /// Name of the focused field, or None when the submit button is focused
    pub fn active_field_name(&self) -> Option<FieldName> {
        self.get_field(self.active_field_index).map(|f| f.name)
    }

    pub fn is_submit_active(&self) -> bool {
        self.active_field_index == Self::SUBMIT_INDEX
    }

    /// Re-run validation over every field
    pub fn revalidate(&mut self, decimals: u8) {
        for name in FieldName::ALL {
            let field = self.field_mut(name);
            let verdict = validate_field(name, field.value(), decimals);
            field.set_verdict(verdict);
        }
    }

    /// Values to submit, if every field is accepted
    pub fn accepted_values(&self) -> Option<FormValues> {
        Some(FormValues {
            token_address: self.address.verdict().value()?.to_string(),
            token_amount: self.amount.verdict().value()?.to_string(),
        })
    }

    pub fn rejections(&self) -> Vec<(FieldName, Rejection)> {
        FieldName::ALL
            .into_iter()
            .filter_map(|name| self.field(name).rejection().map(|r| (name, r)))
            .collect()
    }

    pub(super) fn mark_submitted(&mut self) {
        self.address.mark_submitted();
        self.amount.mark_submitted();
    }

    /// Drop the submitted state of every field after a suppressed submit
    pub(super) fn clear_submitted(&mut self) {
        self.address.clear_submitted();
        self.amount.clear_submitted();
    }
}

impl Default for TokenForm {
    fn default() -> Self {
        Self::new(DEFAULT_DECIMALS)
    }
}

impl Form for TokenForm {
    fn field_count(&self) -> usize {
        3 // address, amount, submit
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_INDEX);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.address),
            1 => Some(&self.amount),
            // Index 2 is the submit button, no FormField for it
            _ => None,
        }
    }
}

/// Read-only copy of a form's state after the last commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSnapshot {
    pub mode: ValidationMode,
    pub decimals: u8,
    pub address: FormField,
    pub amount: FormField,
    pub submit_count: u32,
}

impl FormSnapshot {
    pub fn field(&self, name: FieldName) -> &FormField {
        match name {
            FieldName::TokenAddress => &self.address,
            FieldName::TokenAmount => &self.amount,
        }
    }

    pub fn status(&self, name: FieldName) -> FieldStatus {
        self.field(name).status()
    }

    /// Rejection to display for a field under the form's validation mode
    pub fn visible_error(&self, name: FieldName) -> Option<Rejection> {
        let field = self.field(name);
        let shown = match self.mode {
            ValidationMode::OnChange => field.is_touched() || self.submit_count > 0,
            ValidationMode::OnSubmit => self.submit_count > 0,
        };
        if shown {
            field.rejection()
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        self.address.verdict().is_accepted() && self.amount.verdict().is_accepted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::Verdict;

    const ADDRESS: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    fn snapshot_of(form: &TokenForm, mode: ValidationMode, submit_count: u32) -> FormSnapshot {
        FormSnapshot {
            mode,
            decimals: DEFAULT_DECIMALS,
            address: form.address.clone(),
            amount: form.amount.clone(),
            submit_count,
        }
    }

    mod token_form {
        use super::*;

        #[test]
        fn test_new_has_correct_defaults() {
            let form = TokenForm::new(DEFAULT_DECIMALS);
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.address.name, FieldName::TokenAddress);
            assert_eq!(form.amount.name, FieldName::TokenAmount);
            assert_eq!(
                form.address.verdict(),
                &Verdict::Rejected(Rejection::NotAnAddress)
            );
            assert_eq!(
                form.amount.verdict(),
                &Verdict::Rejected(Rejection::NotANumber)
            );
        }

        #[test]
        fn test_default_equals_new() {
            assert_eq!(TokenForm::default(), TokenForm::new(DEFAULT_DECIMALS));
        }

        #[test]
        fn test_field_count() {
            assert_eq!(TokenForm::default().field_count(), 3);
        }

        #[test]
        fn test_next_field_cycles() {
            let mut form = TokenForm::default();
            for _ in 0..3 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit() {
            let mut form = TokenForm::default();
            form.prev_field();
            assert!(form.is_submit_active());
            assert!(form.active_field_name().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = TokenForm::default();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, TokenForm::SUBMIT_INDEX);
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = TokenForm::default();
            assert_eq!(form.get_field(0).unwrap().name, FieldName::TokenAddress);
            assert_eq!(form.get_field(1).unwrap().name, FieldName::TokenAmount);
            assert!(form.get_field(2).is_none());
        }

        #[test]
        fn test_accepted_values_requires_both_fields() {
            let mut form = TokenForm::default();
            form.address.set_value(ADDRESS.to_lowercase());
            form.revalidate(DEFAULT_DECIMALS);
            assert!(form.accepted_values().is_none());
            assert_eq!(
                form.rejections(),
                vec![(FieldName::TokenAmount, Rejection::NotANumber)]
            );

            form.amount.set_value("2".to_string());
            form.revalidate(DEFAULT_DECIMALS);
            assert_eq!(
                form.accepted_values(),
                Some(FormValues {
                    token_address: ADDRESS.to_string(),
                    token_amount: "2".to_string(),
                })
            );
            assert!(form.rejections().is_empty());
        }
    }

    mod snapshot {
        use super::*;

        #[test]
        fn test_on_change_hides_untouched_errors() {
            let form = TokenForm::default();
            let snapshot = snapshot_of(&form, ValidationMode::OnChange, 0);
            assert!(snapshot.visible_error(FieldName::TokenAddress).is_none());
            assert!(snapshot.visible_error(FieldName::TokenAmount).is_none());
        }

        #[test]
        fn test_on_change_shows_touched_errors() {
            let mut form = TokenForm::default();
            form.amount.set_value("abc".to_string());
            form.revalidate(DEFAULT_DECIMALS);
            let snapshot = snapshot_of(&form, ValidationMode::OnChange, 0);
            assert_eq!(
                snapshot.visible_error(FieldName::TokenAmount),
                Some(Rejection::NotANumber)
            );
            assert!(snapshot.visible_error(FieldName::TokenAddress).is_none());
        }

        #[test]
        fn test_on_change_shows_untouched_errors_after_submit() {
            let form = TokenForm::default();
            let snapshot = snapshot_of(&form, ValidationMode::OnChange, 1);
            assert_eq!(
                snapshot.visible_error(FieldName::TokenAddress),
                Some(Rejection::NotAnAddress)
            );
            assert_eq!(
                snapshot.visible_error(FieldName::TokenAmount),
                Some(Rejection::NotANumber)
            );
        }

        #[test]
        fn test_on_submit_hides_errors_before_submit() {
            let mut form = TokenForm::default();
            form.amount.set_value("abc".to_string());
            form.revalidate(DEFAULT_DECIMALS);
            let snapshot = snapshot_of(&form, ValidationMode::OnSubmit, 0);
            assert!(snapshot.visible_error(FieldName::TokenAmount).is_none());

            let snapshot = snapshot_of(&form, ValidationMode::OnSubmit, 1);
            assert_eq!(
                snapshot.visible_error(FieldName::TokenAmount),
                Some(Rejection::NotANumber)
            );
            assert_eq!(
                snapshot.visible_error(FieldName::TokenAddress),
                Some(Rejection::NotAnAddress)
            );
        }

        #[test]
        fn test_is_valid() {
            let mut form = TokenForm::default();
            assert!(!snapshot_of(&form, ValidationMode::OnChange, 0).is_valid());
            form.address.set_value(ADDRESS.to_string());
            form.amount.set_value("0.1".to_string());
            form.revalidate(DEFAULT_DECIMALS);
            assert!(snapshot_of(&form, ValidationMode::OnChange, 0).is_valid());
        }
    }

    #[test]
    fn test_form_values_serialize_camel_case() {
        let values = FormValues {
            token_address: ADDRESS.to_string(),
            token_amount: "1.0".to_string(),
        };
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(
            json,
            format!(r#"{{"tokenAddress":"{ADDRESS}","tokenAmount":"1.0"}}"#)
        );
    }

    #[test]
    fn test_validation_mode_serde() {
        let mode: ValidationMode = serde_json::from_str(r#""on_submit""#).unwrap();
        assert_eq!(mode, ValidationMode::OnSubmit);
        assert_eq!(
            serde_json::to_string(&ValidationMode::OnChange).unwrap(),
            r#""on_change""#
        );
    }
}
