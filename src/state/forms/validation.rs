//! Presence validation for the login form

use super::field::{FieldId, FormErrors, FormValues};

/// Outcome of one validation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub errors: FormErrors,
    /// True iff every field passed
    pub is_valid: bool,
}

impl Validation {
    /// Fields that failed, in display order
    pub fn invalid_fields(&self) -> Vec<FieldId> {
        self.errors
            .iter()
            .filter(|(_, message)| !message.is_empty())
            .map(|(id, _)| id)
            .collect()
    }
}

/// Message shown beneath a field whose value is missing
pub fn required_message(field: FieldId) -> String {
    format!("{} is required", field.label())
}

/// Check that every field holds non-blank text.
///
/// Only presence is checked. Every slot of the returned errors is written.
pub fn validate(values: &FormValues) -> Validation {
    let errors = FormErrors::from_fn(|id| {
        if values[id].trim().is_empty() {
            required_message(id)
        } else {
            String::new()
        }
    });
    let is_valid = errors.iter().all(|(_, message)| message.is_empty());

    Validation { errors, is_valid }
}
