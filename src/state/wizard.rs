use crate::sink::{SinkError, SubmissionSink};
use crate::state::flow::Flow;
use crate::state::step::{STEPS, StepDescriptor};
use crate::state::store::{FormState, Section};
use crate::state::validation::{ValidationError, validate_section};
use tracing::{debug, warn};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error("submit is only available on the last step")]
    NotLastStep,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl SubmitError {
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

/// Step cursor plus form data. Navigation forward and submission are gated
/// on the current step passing validation; going back is not.
#[derive(Debug, Clone)]
pub struct Wizard {
    flow: Flow,
    data: FormState,
}

impl Default for Wizard {
    fn default() -> Self {
        Self::new(STEPS)
    }
}

impl Wizard {
    pub fn new(steps: &'static [StepDescriptor]) -> Self {
        Self {
            flow: Flow::new(steps),
            data: FormState::from_steps(steps),
        }
    }

    pub fn steps(&self) -> &'static [StepDescriptor] {
        self.flow.steps()
    }

    pub fn step(&self) -> usize {
        self.flow.current_index()
    }

    pub fn current_step(&self) -> &'static StepDescriptor {
        self.flow.current_step()
    }

    pub fn is_first_step(&self) -> bool {
        self.flow.is_first()
    }

    pub fn is_last_step(&self) -> bool {
        self.flow.is_last()
    }

    pub fn form_data(&self) -> &FormState {
        &self.data
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.data.section(&self.current_step().section_key())
    }

    pub fn current_value(&self, field: &str) -> &str {
        self.data.text(&self.current_step().section_key(), field)
    }

    pub fn update_field(&mut self, section: &str, field: &str, value: impl Into<String>) {
        self.data = self.data.with_field(section, field, value);
    }

    pub fn update_current_field(&mut self, field: &str, value: impl Into<String>) {
        let section = self.current_step().section_key();
        self.update_field(&section, field, value);
    }

    pub fn validate_current_step(&self) -> Result<(), ValidationError> {
        validate_section(self.current_step(), self.current_section())
    }

    /// Returns whether the cursor moved. Validation runs even on the last step.
    pub fn advance(&mut self) -> Result<bool, ValidationError> {
        if let Err(err) = self.validate_current_step() {
            warn!(step = self.step(), error = %err, "advance blocked");
            return Err(err);
        }
        let moved = self.flow.advance();
        if moved {
            debug!(step = self.step(), title = self.current_step().title, "advanced");
        }
        Ok(moved)
    }

    pub fn retreat(&mut self) -> bool {
        let moved = self.flow.retreat();
        if moved {
            debug!(step = self.step(), title = self.current_step().title, "retreated");
        }
        moved
    }

    pub fn submit(&self, sink: &mut dyn SubmissionSink) -> Result<(), SubmitError> {
        if !self.is_last_step() {
            return Err(SubmitError::NotLastStep);
        }
        if let Err(err) = self.validate_current_step() {
            warn!(step = self.step(), error = %err, "submit blocked");
            return Err(err.into());
        }
        sink.emit(&self.data)?;
        Ok(())
    }
}
