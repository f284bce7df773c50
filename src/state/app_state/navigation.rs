use super::AppState;
use crate::state::validation::ValidationError;
use crate::state::wizard::SubmitError;
use crate::terminal::KeyEvent;
use crate::widgets::traits::{InteractionResult, TextAction, WidgetAction};
use tracing::{debug, error};

pub const SUBMITTED_STATUS: &str = "Form submitted.";
pub const SUBMIT_UNAVAILABLE_STATUS: &str = "Submit is available on the last step.";

impl AppState {
    pub fn dispatch_key_to_focused(&mut self, key: KeyEvent) -> InteractionResult {
        match self.focused_input_mut() {
            Some(input) => input.on_key(key),
            None => InteractionResult::ignored(),
        }
    }

    pub fn dispatch_text_action_to_focused(&mut self, action: TextAction) -> InteractionResult {
        match self.focused_input_mut() {
            Some(input) => input.on_text_action(action),
            None => InteractionResult::ignored(),
        }
    }

    pub fn handle_widget_action(&mut self, action: WidgetAction) {
        match action {
            WidgetAction::ValueChanged { field, value } => {
                self.wizard.update_current_field(&field, value);
                self.clear_status();
            }
            WidgetAction::InputDone => {
                if self.ui.focus.is_last() {
                    self.handle_next();
                } else {
                    self.focus_next();
                }
            }
        }
    }

    pub fn focus_next(&mut self) {
        self.ui.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.ui.focus.prev();
    }

    /// Advances, or submits when the wizard is already on its last step.
    pub fn handle_next(&mut self) {
        if self.wizard.is_last_step() {
            self.handle_submit();
            return;
        }
        match self.wizard.advance() {
            Ok(true) => {
                self.clear_status();
                self.rebuild_inputs();
            }
            Ok(false) => {}
            Err(err) => self.report_invalid(err),
        }
    }

    pub fn handle_previous(&mut self) {
        if self.wizard.retreat() {
            self.clear_status();
            self.rebuild_inputs();
        }
    }

    pub fn handle_submit(&mut self) {
        match self.wizard.submit(self.sink.as_mut()) {
            Ok(()) => {
                self.last_submission = Some(self.wizard.form_data().clone());
                self.set_status(SUBMITTED_STATUS);
                if self.exit_on_submit {
                    self.request_exit();
                }
            }
            Err(SubmitError::NotLastStep) => self.set_status(SUBMIT_UNAVAILABLE_STATUS),
            Err(SubmitError::Invalid(err)) => self.report_invalid(err),
            Err(SubmitError::Sink(err)) => {
                error!(error = %err, "submission sink failed");
                self.show_alert(err.to_string());
            }
        }
    }

    fn report_invalid(&mut self, err: ValidationError) {
        if let Some(field) = err.field() {
            let position = self.ui.inputs.iter().position(|input| input.field() == field);
            if let Some(index) = position {
                self.ui.focus.set(index);
            }
        }
        debug!(error = %err, "showing validation alert");
        self.show_alert(err.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::{SUBMIT_UNAVAILABLE_STATUS, SUBMITTED_STATUS};
    use crate::sink::MemorySink;
    use crate::state::app_state::AppState;
    use crate::state::wizard::Wizard;
    use crate::terminal::{KeyCode, KeyEvent};
    use crate::widgets::traits::WidgetAction;

    fn type_text(state: &mut AppState, text: &str) {
        for ch in text.chars() {
            let result = state.dispatch_key_to_focused(KeyEvent::plain(KeyCode::Char(ch)));
            for action in result.actions {
                state.handle_widget_action(action);
            }
        }
    }

    fn state_with(wizard: Wizard) -> AppState {
        AppState::new(wizard, Box::new(MemorySink::default()))
    }

    #[test]
    fn typing_updates_current_section() {
        let mut state = state_with(Wizard::default());
        type_text(&mut state, "Ada");
        assert_eq!(
            state.wizard().form_data().text("personal details", "firstName"),
            "Ada"
        );
        assert_eq!(state.inputs()[0].value(), "Ada");
    }

    #[test]
    fn input_done_moves_focus_then_advances() {
        let mut state = state_with(Wizard::default());
        type_text(&mut state, "Ada");
        state.handle_widget_action(WidgetAction::InputDone);
        assert_eq!(state.focused_field(), Some("lastName"));
        type_text(&mut state, "Lovelace");
        state.handle_widget_action(WidgetAction::InputDone);
        type_text(&mut state, "ada@example.com");
        state.handle_widget_action(WidgetAction::InputDone);

        assert_eq!(state.wizard().step(), 1);
        assert_eq!(state.focused_field(), Some("addressLine1"));
        assert!(!state.has_alert());
    }

    #[test]
    fn failed_advance_shows_alert_and_focuses_field() {
        let mut wizard = Wizard::default();
        wizard.update_current_field("firstName", "Ada");
        wizard.update_current_field("lastName", "L0velace");
        wizard.update_current_field("email", "ada@example.com");
        let mut state = state_with(wizard);

        state.handle_next();

        assert_eq!(state.wizard().step(), 0);
        assert_eq!(
            state.alert(),
            Some("First Name/Last Name should contain only letters.")
        );
        assert_eq!(state.focused_field(), Some("lastName"));

        state.dismiss_alert();
        assert!(!state.has_alert());
    }

    #[test]
    fn previous_restores_saved_values() {
        let mut wizard = Wizard::default();
        wizard.update_current_field("firstName", "Ada");
        wizard.update_current_field("lastName", "Lovelace");
        wizard.update_current_field("email", "ada@example.com");
        let mut state = state_with(wizard);

        state.handle_next();
        state.handle_previous();
        state.handle_previous();

        assert_eq!(state.wizard().step(), 0);
        assert_eq!(state.inputs()[2].value(), "ada@example.com");
    }

    #[test]
    fn submit_off_last_step_sets_status_only() {
        let mut state = state_with(Wizard::default());
        state.handle_submit();
        assert_eq!(state.status(), Some(SUBMIT_UNAVAILABLE_STATUS));
        assert!(!state.has_alert());
        assert!(state.last_submission().is_none());
    }

    #[test]
    fn successful_submit_records_payload_and_may_exit() {
        let mut wizard = Wizard::default();
        for (field, value) in [
            ("firstName", "Ada"),
            ("lastName", "Lovelace"),
            ("email", "ada@example.com"),
        ] {
            wizard.update_current_field(field, value);
        }
        wizard.advance().expect("personal");
        for (field, value) in [
            ("addressLine1", "1 Main St"),
            ("addressLine2", "Unit 5"),
            ("city", "Springfield"),
            ("state", "Oregon"),
            ("zipCode", "974011"),
        ] {
            wizard.update_current_field(field, value);
        }
        wizard.advance().expect("address");
        for (field, value) in [
            ("cardNumber", "4111111111111111"),
            ("expirationDate", "09/27"),
            ("cvv", "123"),
        ] {
            wizard.update_current_field(field, value);
        }
        wizard.advance().expect("payment");

        let mut state = state_with(wizard).with_exit_on_submit(true);
        state.handle_next();
        assert_eq!(state.alert(), Some("Please fill in all required fields."));
        assert!(!state.should_exit());

        state.dismiss_alert();
        type_text(&mut state, "Lovely");
        state.handle_next();

        assert_eq!(state.status(), Some(SUBMITTED_STATUS));
        assert!(state.should_exit());
        let payload = state.take_last_submission().expect("payload");
        assert_eq!(payload.text("feedback", "feedback"), "Lovely");
    }
}
