mod navigation;

use crate::sink::SubmissionSink;
use crate::state::focus::FocusState;
use crate::state::step::StepDescriptor;
use crate::state::store::FormState;
use crate::state::wizard::Wizard;
use crate::widgets::TextInput;

#[derive(Default)]
struct UiState {
    inputs: Vec<TextInput>,
    focus: FocusState,
    alert: Option<String>,
    status: Option<String>,
}

pub struct AppState {
    wizard: Wizard,
    ui: UiState,
    sink: Box<dyn SubmissionSink>,
    last_submission: Option<FormState>,
    exit_on_submit: bool,
    should_exit: bool,
}

impl AppState {
    pub fn new(wizard: Wizard, sink: Box<dyn SubmissionSink>) -> Self {
        let mut state = Self {
            wizard,
            ui: UiState::default(),
            sink,
            last_submission: None,
            exit_on_submit: false,
            should_exit: false,
        };
        state.rebuild_inputs();
        state
    }

    pub fn with_exit_on_submit(mut self, exit_on_submit: bool) -> Self {
        self.exit_on_submit = exit_on_submit;
        self
    }

    pub fn wizard(&self) -> &Wizard {
        &self.wizard
    }

    pub fn current_step(&self) -> &'static StepDescriptor {
        self.wizard.current_step()
    }

    pub fn inputs(&self) -> &[TextInput] {
        &self.ui.inputs
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.ui.focus.current()
    }

    pub fn focused_field(&self) -> Option<&str> {
        self.focused_index()
            .and_then(|i| self.ui.inputs.get(i))
            .map(TextInput::field)
    }

    pub fn alert(&self) -> Option<&str> {
        self.ui.alert.as_deref()
    }

    pub fn has_alert(&self) -> bool {
        self.ui.alert.is_some()
    }

    pub fn dismiss_alert(&mut self) {
        self.ui.alert = None;
    }

    pub fn status(&self) -> Option<&str> {
        self.ui.status.as_deref()
    }

    pub fn last_submission(&self) -> Option<&FormState> {
        self.last_submission.as_ref()
    }

    pub fn take_last_submission(&mut self) -> Option<FormState> {
        self.last_submission.take()
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    pub fn request_exit(&mut self) {
        self.should_exit = true;
    }

    /// Inputs mirror the current step's section; rebuilt whenever the step changes.
    fn rebuild_inputs(&mut self) {
        let step = self.wizard.current_step();
        self.ui.inputs = step
            .fields
            .iter()
            .map(|field| TextInput::new(*field, self.wizard.current_value(field)))
            .collect();
        self.ui.focus = FocusState::with_len(self.ui.inputs.len());
    }

    fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        let index = self.ui.focus.current()?;
        self.ui.inputs.get_mut(index)
    }

    fn show_alert(&mut self, message: impl Into<String>) {
        self.ui.alert = Some(message.into());
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.ui.status = Some(message.into());
    }

    fn clear_status(&mut self) {
        self.ui.status = None;
    }
}
