//! Application state and core logic

use crate::config::TuiConfig;
use crate::state::{AppState, Form, FormValues, SubmitEvent, SubmitPhase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: TuiConfig,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig) -> Self {
        Self {
            state: AppState::default(),
            config,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Character used to mask the password field
    pub fn mask_char(&self) -> char {
        self.config.mask_char()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Any key dismisses the notice; Enter and Esc do nothing else
        if self.state.dismiss_notice() && matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Enter => {
                let mut event = SubmitEvent::new();
                self.submit(&mut event);
                if !event.is_default_prevented() {
                    // Plain Enter moves to the next field
                    self.state.form.next_field();
                }
            }
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit(&mut SubmitEvent::new())
            }
            KeyCode::Esc => self.quit = true,
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.form.input_char(c);
                self.after_edit();
            }
            KeyCode::Backspace => {
                self.state.form.backspace();
                self.after_edit();
            }
            _ => {}
        }
    }

    /// Drop the stale status line once an edit has returned the form to idle
    fn after_edit(&mut self) {
        if self.state.form.phase() == SubmitPhase::Idle {
            self.state.status_message = None;
        }
    }

    /// Submit the form, raising the success notice when it passes
    pub fn submit(&mut self, event: &mut SubmitEvent) {
        let mut submitted = false;
        let phase = self
            .state
            .form
            .submit(event, &mut |_: &FormValues| submitted = true);

        match phase {
            SubmitPhase::Valid if submitted => {
                self.state.show_notice(self.config.success_message());
                self.state.status_message = None;
                if self.config.reset_after_submit() {
                    self.state.form.reset();
                }
            }
            SubmitPhase::Invalid => {
                let message = match self.state.form.error_count() {
                    1 => "1 field needs attention".to_string(),
                    count => format!("{count} fields need attention"),
                };
                self.state.status_message = Some(message);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FieldId, FormErrors};
    use pretty_assertions::assert_eq;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_all(app: &mut App) {
        for text in ["Ada", "12 Analytical St", "ada@example.com", "engine"] {
            type_text(app, text);
            press(app, KeyCode::Tab);
        }
    }

    #[test]
    fn test_typing_fills_focused_fields() {
        let mut app = App::new(TuiConfig::default());
        fill_all(&mut app);

        let values = app.state.form.values();
        assert_eq!(values.name, "Ada");
        assert_eq!(values.address, "12 Analytical St");
        assert_eq!(values.email, "ada@example.com");
        assert_eq!(values.password, "engine");
        assert!(app.state.form.is_submit_focused());
    }

    #[test]
    fn test_enter_on_empty_form_shows_errors() {
        let mut app = App::new(TuiConfig::default());
        press(&mut app, KeyCode::Enter);

        assert!(app.state.notice.is_none());
        assert_eq!(app.state.form.error_count(), 4);
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("4 fields need attention")
        );
    }

    #[test]
    fn test_enter_on_filled_form_shows_notice() {
        let mut app = App::new(TuiConfig::default());
        fill_all(&mut app);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.state.notice.as_deref(), Some("Form submitted!"));
        assert_eq!(app.state.form.errors(), &FormErrors::default());
        // Values are kept after success by default
        assert_eq!(app.state.form.values().name, "Ada");
    }

    #[test]
    fn test_reset_after_submit_clears_form() {
        let mut app = App::new(TuiConfig {
            reset_after_submit: Some(true),
            ..Default::default()
        });
        fill_all(&mut app);
        press(&mut app, KeyCode::Enter);

        assert!(app.state.notice.is_some());
        assert_eq!(app.state.form.values(), &FormValues::default());
    }

    #[test]
    fn test_notice_is_dismissed_by_next_key() {
        let mut app = App::new(TuiConfig::default());
        fill_all(&mut app);
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Esc);
        assert!(app.state.notice.is_none());
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_s_submits() {
        let mut app = App::new(TuiConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(app.state.form.error_count(), 4);
        assert_eq!(app.state.form.values().name, "");
    }

    #[test]
    fn test_enter_on_field_is_consumed_by_submit() {
        let mut app = App::new(TuiConfig::default());
        type_text(&mut app, "Ada");
        press(&mut app, KeyCode::Enter);

        // The submit prevented the default, so focus stays on the field
        assert_eq!(app.state.form.focused_field(), Some(FieldId::Name));
        assert_eq!(app.state.form.error_count(), 3);
        assert_eq!(app.state.form.values().name, "Ada");
    }

    #[test]
    fn test_submit_marks_event_default_prevented() {
        let mut app = App::new(TuiConfig::default());
        let mut event = SubmitEvent::new();
        app.submit(&mut event);
        assert!(event.is_default_prevented());
    }

    #[test]
    fn test_edit_after_failed_submit_clears_status() {
        let mut app = App::new(TuiConfig::default());
        press(&mut app, KeyCode::Enter);
        assert!(app.state.status_message.is_some());

        type_text(&mut app, "A");
        assert_eq!(app.state.form.phase(), SubmitPhase::Idle);
        assert!(app.state.status_message.is_none());

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Backspace);
        assert!(app.state.status_message.is_none());
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = App::new(TuiConfig::default());
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit());
    }

    #[test]
    fn test_resubmit_shows_only_cleared_field() {
        let mut app = App::new(TuiConfig::default());
        fill_all(&mut app);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter); // dismiss notice

        // Focus the email field and clear it
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.state.form.focused_field(), Some(FieldId::Email));
        for _ in 0.."ada@example.com".len() {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.state.notice.is_none());
        assert_eq!(
            app.state.form.errors(),
            &FormErrors {
                email: "Email is required".to_string(),
                ..Default::default()
            }
        );
        assert_eq!(
            app.state.status_message.as_deref(),
            Some("1 field needs attention")
        );
    }
}
