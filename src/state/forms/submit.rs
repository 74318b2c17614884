//! Submit pipeline types

use super::field::FormValues;

/// Phase of the most recent submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Validating,
    /// At least one field failed; errors are shown and nothing else happened
    Invalid,
    /// All fields passed and the success action ran
    Valid,
}

impl SubmitPhase {
    /// Whether the last attempt has reached a terminal phase
    pub fn is_finished(self) -> bool {
        matches!(self, SubmitPhase::Invalid | SubmitPhase::Valid)
    }
}

/// A user-initiated submission.
///
/// The host's default handling for the triggering input (newline insertion,
/// leaving the screen, ...) only runs if the form did not prevent it.
#[derive(Debug, Clone, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Action performed when a submission passes validation
#[cfg_attr(test, mockall::automock)]
pub trait SuccessAction {
    fn on_success(&mut self, values: &FormValues);
}

impl<F> SuccessAction for F
where
    F: FnMut(&FormValues),
{
    fn on_success(&mut self, values: &FormValues) {
        self(values)
    }
}
