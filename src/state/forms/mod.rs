//! Form domain layer
//!
//! Field storage, presence validation and the submit pipeline for the login
//! form. Nothing here depends on the terminal.

mod field;
mod form_state;
mod submit;
mod validation;

pub use field::{FieldId, FormValues};
#[cfg(test)]
pub use field::{FieldChange, FormErrors};
pub use form_state::{Form, LoginForm};
pub use submit::{SubmitEvent, SubmitPhase};
