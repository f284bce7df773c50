use crate::state::step::StepDescriptor;
use crate::state::store::Section;
use regex::Regex;
use std::sync::LazyLock;

pub const INCOMPLETE_STEP_MESSAGE: &str = "Please fill in all required fields.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{message}")]
    PatternViolation { field: String, message: String },
    #[error("{}", INCOMPLETE_STEP_MESSAGE)]
    IncompleteStep,
}

impl ValidationError {
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::PatternViolation { field, .. } => Some(field),
            Self::IncompleteStep => None,
        }
    }
}

pub struct FieldRule {
    pub fields: &'static [&'static str],
    pattern: Regex,
    pub message: &'static str,
}

impl FieldRule {
    fn new(fields: &'static [&'static str], pattern: &str, message: &'static str) -> Self {
        Self {
            fields,
            // Patterns are literals below; a typo is a programming error.
            pattern: Regex::new(pattern).expect("field rule pattern must compile"),
            message,
        }
    }

    pub fn applies_to(&self, field: &str) -> bool {
        self.fields.iter().any(|declared| *declared == field)
    }

    pub fn check(&self, value: &str) -> Result<(), &'static str> {
        if self.pattern.is_match(value) {
            Ok(())
        } else {
            Err(self.message)
        }
    }
}

static RULES: LazyLock<Vec<FieldRule>> = LazyLock::new(|| {
    vec![
        FieldRule::new(
            &["firstName", "lastName"],
            r"^[A-Za-z]+$",
            "First Name/Last Name should contain only letters.",
        ),
        FieldRule::new(
            &["email"],
            r"^[^\s@]+@[^\s@]+\.[^\s@]+$",
            "Please enter a valid email address.",
        ),
        FieldRule::new(
            &["addressLine1", "addressLine2"],
            r"^[A-Za-z0-9 ]+$",
            "Address should contain only letters, digits and spaces.",
        ),
        FieldRule::new(
            &["city", "state"],
            r"^[A-Za-z]+$",
            "City/State should contain only letters.",
        ),
        FieldRule::new(
            &["zipCode"],
            r"^[0-9]{6}$",
            "Zip Code should be a 6-digit number.",
        ),
        FieldRule::new(
            &["cardNumber"],
            r"^[0-9]{16}$",
            "Card Number should be a 16-digit number.",
        ),
        FieldRule::new(&["cvv"], r"^[0-9]{3}$", "CVV should be a 3-digit number."),
        FieldRule::new(
            &["expirationDate"],
            r"^(0[1-9]|1[0-2])/[0-9]{2}$",
            "Expiration Date should be in MM/YY format.",
        ),
    ]
});

pub fn rule_for(field: &str) -> Option<&'static FieldRule> {
    RULES.iter().find(|rule| rule.applies_to(field))
}

/// Format check for a single value. Fields without a rule accept anything.
pub fn check_pattern(field: &str, value: &str) -> Result<(), ValidationError> {
    match rule_for(field) {
        Some(rule) => rule
            .check(value)
            .map_err(|message| ValidationError::PatternViolation {
                field: field.to_string(),
                message: message.to_string(),
            }),
        None => Ok(()),
    }
}

/// Pattern check on every present value first, then completeness.
pub fn validate_section(
    step: &StepDescriptor,
    section: Option<&Section>,
) -> Result<(), ValidationError> {
    for field in step.fields {
        let value = field_value(section, field);
        if !value.is_empty() {
            check_pattern(field, value)?;
        }
    }

    if step
        .fields
        .iter()
        .any(|field| field_value(section, field).trim().is_empty())
    {
        return Err(ValidationError::IncompleteStep);
    }

    Ok(())
}

fn field_value<'a>(section: Option<&'a Section>, field: &str) -> &'a str {
    section
        .and_then(|values| values.get(field))
        .map(String::as_str)
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::{INCOMPLETE_STEP_MESSAGE, ValidationError, check_pattern, validate_section};
    use crate::state::step::STEPS;
    use crate::state::store::Section;

    fn section(pairs: &[(&str, &str)]) -> Section {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn rule_table() {
        let cases: &[(&str, &str, bool)] = &[
            ("firstName", "Ada", true),
            ("firstName", "Ada1", false),
            ("lastName", "Lovelace", true),
            ("lastName", "Love lace", false),
            ("email", "ada@example.com", true),
            ("email", "ada@example", false),
            ("email", "ada example@x.io", false),
            ("addressLine1", "12 Baker Street", true),
            ("addressLine2", "Flat 4B", true),
            ("addressLine1", "12, Baker St.", false),
            ("city", "London", true),
            ("state", "New York", false),
            ("zipCode", "123456", true),
            ("zipCode", "12E45A", false),
            ("zipCode", "12345", false),
            ("cardNumber", "4111111111111111", true),
            ("cardNumber", "4111 1111 1111 1111", false),
            ("cvv", "123", true),
            ("cvv", "1234", false),
            ("expirationDate", "09/27", true),
            ("expirationDate", "12/30", true),
            ("expirationDate", "13/99", false),
            ("expirationDate", "00/25", false),
            ("expirationDate", "9/27", false),
            ("feedback", "anything at all!", true),
            ("zipCode", "١٢٣٤٥٦", false),
            ("zipCode", "１２３４５６", false),
            ("cardNumber", "४१११११११११११११११", false),
            ("cvv", "１２３", false),
            ("expirationDate", "09/٢٧", false),
        ];
        for (field, value, ok) in cases {
            assert_eq!(
                check_pattern(field, value).is_ok(),
                *ok,
                "{field} = {value:?}"
            );
        }
    }

    #[test]
    fn zip_code_message_names_the_rule() {
        let err = check_pattern("zipCode", "12E45A").expect_err("invalid zip");
        assert_eq!(err.to_string(), "Zip Code should be a 6-digit number.");
        assert_eq!(err.field(), Some("zipCode"));
    }

    #[test]
    fn pattern_check_runs_before_completeness() {
        let values = section(&[("firstName", "R2D2"), ("lastName", ""), ("email", "")]);
        let err = validate_section(&STEPS[0], Some(&values)).expect_err("invalid");
        assert!(matches!(err, ValidationError::PatternViolation { ref field, .. } if field == "firstName"));
    }

    #[test]
    fn first_failing_field_wins() {
        let values = section(&[
            ("cardNumber", "42"),
            ("expirationDate", "13/99"),
            ("cvv", "1"),
        ]);
        let err = validate_section(&STEPS[2], Some(&values)).expect_err("invalid");
        assert_eq!(err.field(), Some("cardNumber"));
    }

    #[test]
    fn blank_fields_are_incomplete() {
        let values = section(&[("firstName", "Ada"), ("lastName", ""), ("email", "")]);
        let err = validate_section(&STEPS[0], Some(&values)).expect_err("incomplete");
        assert_eq!(err, ValidationError::IncompleteStep);
        assert_eq!(err.to_string(), INCOMPLETE_STEP_MESSAGE);
    }

    #[test]
    fn whitespace_only_feedback_is_incomplete() {
        let values = section(&[("feedback", "  \t ")]);
        assert_eq!(
            validate_section(&STEPS[3], Some(&values)),
            Err(ValidationError::IncompleteStep)
        );
    }

    #[test]
    fn whitespace_only_value_fails_pattern_when_rule_forbids_it() {
        let values = section(&[("firstName", " "), ("lastName", "L"), ("email", "a@b.co")]);
        let err = validate_section(&STEPS[0], Some(&values)).expect_err("invalid");
        assert_eq!(err.field(), Some("firstName"));
    }

    #[test]
    fn missing_section_is_incomplete() {
        assert_eq!(
            validate_section(&STEPS[3], None),
            Err(ValidationError::IncompleteStep)
        );
    }

    #[test]
    fn payment_scenario_passes() {
        let values = section(&[
            ("cardNumber", "4111111111111111"),
            ("expirationDate", "09/27"),
            ("cvv", "123"),
        ]);
        assert_eq!(validate_section(&STEPS[2], Some(&values)), Ok(()));
    }
}
