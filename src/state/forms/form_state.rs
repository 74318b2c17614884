//! Login form state: values, errors, focus and the submit pipeline

use super::field::{FieldChange, FieldId, FormErrors, FormValues};
use super::submit::{SubmitEvent, SubmitPhase, SuccessAction};
use super::validation::validate;

/// Trait for common form focus operations
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
}

/// Focus index of the Submit button (after the four fields)
pub const SUBMIT_BUTTON_INDEX: usize = FieldId::ALL.len();

/// The login form: name, address, email and password
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    values: FormValues,
    errors: FormErrors,
    phase: SubmitPhase,
    pub active_field_index: usize,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    /// Field under focus, or `None` when the Submit button is focused
    pub fn focused_field(&self) -> Option<FieldId> {
        FieldId::from_index(self.active_field_index)
    }

    /// Returns true if the Submit button is focused
    pub fn is_submit_focused(&self) -> bool {
        self.active_field_index == SUBMIT_BUTTON_INDEX
    }

    /// Replace exactly one field's value with the one carried by `change`
    pub fn handle_change(&mut self, change: FieldChange) {
        tracing::debug!(field = %change.field, len = change.value.len(), "field changed");
        self.values = self.values.with_change(change);
        if self.phase.is_finished() {
            self.phase = SubmitPhase::Idle;
        }
    }

    /// Append a character to the focused field
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.focused_field() {
            let mut value = self.values[field].clone();
            value.push(c);
            self.handle_change(FieldChange::new(field, value));
        }
    }

    /// Remove the last character of the focused field
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_field() {
            let mut value = self.values[field].clone();
            if value.pop().is_some() {
                self.handle_change(FieldChange::new(field, value));
            }
        }
    }

    /// Run the submit pipeline.
    ///
    /// Errors are always replaced by the latest validation pass. The success
    /// action runs only when every field is present.
    pub fn submit<A>(&mut self, event: &mut SubmitEvent, on_success: &mut A) -> SubmitPhase
    where
        A: SuccessAction + ?Sized,
    {
        event.prevent_default();
        self.phase = SubmitPhase::Validating;

        let validation = validate(&self.values);
        let missing = validation.invalid_fields();
        self.errors = validation.errors;

        if validation.is_valid {
            self.phase = SubmitPhase::Valid;
            tracing::debug!("login form submitted");
            on_success.on_success(&self.values);
        } else {
            self.phase = SubmitPhase::Invalid;
            tracing::debug!(?missing, "login form rejected");
        }

        self.phase
    }

    /// Number of fields currently showing an error
    pub fn error_count(&self) -> usize {
        self.errors.iter().filter(|(_, m)| !m.is_empty()).count()
    }

    /// Clear values, errors, phase and focus
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Form for LoginForm {
    fn field_count(&self) -> usize {
        SUBMIT_BUTTON_INDEX + 1 // four fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_BUTTON_INDEX);
    }
}
