use crate::core::{FieldId, SectionKey};
use crate::state::step::StepDescriptor;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type Section = IndexMap<FieldId, String>;

/// Per-section field values for the whole wizard.
///
/// Updates never touch an existing state: [`FormState::with_field`] builds a
/// fresh section map and a fresh top-level map, and shares every untouched
/// section with the state it was derived from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormState {
    sections: IndexMap<SectionKey, Arc<Section>>,
}

impl FormState {
    /// Every declared field of every step, present as an empty string.
    pub fn from_steps(steps: &[StepDescriptor]) -> Self {
        let sections = steps
            .iter()
            .map(|step| {
                let section: Section = step.field_ids().map(|id| (id, String::new())).collect();
                (step.section_key(), Arc::new(section))
            })
            .collect();
        Self { sections }
    }

    pub fn with_field(&self, section: &str, field: &str, value: impl Into<String>) -> Self {
        let mut updated: Section = self
            .sections
            .get(section)
            .map(|existing| existing.as_ref().clone())
            .unwrap_or_default();
        updated.insert(field.to_string(), value.into());

        let mut sections = self.sections.clone();
        sections.insert(section.to_string(), Arc::new(updated));
        Self { sections }
    }

    pub fn section(&self, section: &str) -> Option<&Section> {
        self.sections.get(section).map(Arc::as_ref)
    }

    pub fn value(&self, section: &str, field: &str) -> Option<&str> {
        self.section(section)
            .and_then(|values| values.get(field))
            .map(String::as_str)
    }

    /// Missing fields read as empty, matching the initial state.
    pub fn text(&self, section: &str, field: &str) -> &str {
        self.value(section, field).unwrap_or("")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Section)> {
        self.sections.iter().map(|(k, v)| (k.as_str(), v.as_ref()))
    }

    pub fn shares_section_with(&self, other: &FormState, section: &str) -> bool {
        match (self.sections.get(section), other.sections.get(section)) {
            (Some(left), Some(right)) => Arc::ptr_eq(left, right),
            _ => false,
        }
    }
}
