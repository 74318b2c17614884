//! Application state definitions

use super::forms::LoginForm;

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The login form and everything it owns
    pub form: LoginForm,

    // UI state
    /// Success notice drawn over the form until the next key press
    pub notice: Option<String>,
    /// One-line feedback shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    pub fn show_notice(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// Dismiss the notice. Returns true if one was shown.
    pub fn dismiss_notice(&mut self) -> bool {
        self.notice.take().is_some()
    }
}
