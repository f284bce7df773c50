use crate::state::store::FormState;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Receives the completed form on a successful submit.
pub trait SubmissionSink {
    fn emit(&mut self, payload: &FormState) -> Result<(), SinkError>;
}

/// Writes each submission to the log as a single JSON document.
#[derive(Debug, Default)]
pub struct LogSink {
    submissions: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submissions(&self) -> usize {
        self.submissions
    }
}

impl SubmissionSink for LogSink {
    fn emit(&mut self, payload: &FormState) -> Result<(), SinkError> {
        let json = serde_json::to_string(payload)?;
        self.submissions += 1;
        info!(submission = self.submissions, payload = %json, "form submitted");
        Ok(())
    }
}

/// Keeps every payload in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub payloads: Vec<FormState>,
}

impl SubmissionSink for MemorySink {
    fn emit(&mut self, payload: &FormState) -> Result<(), SinkError> {
        self.payloads.push(payload.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{LogSink, SubmissionSink};
    use crate::state::step::STEPS;
    use crate::state::store::FormState;

    #[test]
    fn log_sink_counts_submissions() {
        let mut sink = LogSink::new();
        let payload = FormState::from_steps(STEPS).with_field("feedback", "feedback", "ok");

        sink.emit(&payload).expect("emit");
        sink.emit(&payload).expect("emit");

        assert_eq!(sink.submissions(), 2);
    }
}
