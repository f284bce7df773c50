use crate::core::FieldId;

/// One page of the wizard: a title and the fields it collects, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub title: &'static str,
    pub fields: &'static [&'static str],
}

impl StepDescriptor {
    pub const fn new(title: &'static str, fields: &'static [&'static str]) -> Self {
        Self { title, fields }
    }

    /// Form data for a step lives under its lowercased title.
    pub fn section_key(&self) -> String {
        self.title.to_lowercase()
    }

    pub fn has_field(&self, field: &str) -> bool {
        self.fields.iter().any(|declared| *declared == field)
    }

    pub fn field_ids(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.fields.iter().map(|field| (*field).to_string())
    }
}

pub const STEPS: &[StepDescriptor] = &[
    StepDescriptor::new("Personal Details", &["firstName", "lastName", "email"]),
    StepDescriptor::new(
        "Address Details",
        &["addressLine1", "addressLine2", "city", "state", "zipCode"],
    ),
    StepDescriptor::new("Payment Details", &["cardNumber", "expirationDate", "cvv"]),
    StepDescriptor::new("Feedback", &["feedback"]),
];

pub fn find_step(section: &str) -> Option<&'static StepDescriptor> {
    STEPS.iter().find(|step| step.section_key() == section)
}
