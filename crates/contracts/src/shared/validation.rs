//! Field-level validation for the portal forms

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+968\s?\d{4}\s?\d{4}$").expect("valid phone pattern"));

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid phone number (+968 XXXX XXXX)")]
    InvalidPhone,
    #[error("Reading cannot be less than previous reading")]
    ReadingBelowPrevious { previous: f64 },
}

/// Kind of input a rule set is attached to
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Tel,
    Select,
    TextArea,
    Number,
    Date,
    File,
}

/// Validation rules for a field
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub kind: InputKind,
    /// Meter fields: readings below this value are rejected
    pub min_reading: Option<f64>,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            required: false,
            kind: InputKind::Text,
            min_reading: None,
        }
    }

    pub const fn required(kind: InputKind) -> Self {
        Self {
            required: true,
            kind,
            min_reading: None,
        }
    }

    pub const fn meter(previous: f64) -> Self {
        Self {
            required: true,
            kind: InputKind::Number,
            min_reading: Some(previous),
        }
    }

    /// Check applied on submit: required first, then the phone pattern and
    /// the meter floor for non-blank values
    pub fn validate_submit(&self, value: &str) -> Result<(), FieldError> {
        if self.required {
            check_required(value)?;
        }
        if value.trim().is_empty() {
            return Ok(());
        }
        if self.kind == InputKind::Tel {
            check_phone(value)?;
        }
        if let Some(previous) = self.min_reading {
            check_reading(value, previous)?;
        }
        Ok(())
    }

    /// Check applied when the field loses focus
    pub fn validate_blur(&self, value: &str) -> Result<(), FieldError> {
        if self.required {
            check_required(value)
        } else {
            Ok(())
        }
    }

    /// Check applied on every keystroke.
    ///
    /// Returns `Some(Ok(()))` when the current error should be cleared,
    /// `Some(Err(_))` when a new error should be shown and `None` when the
    /// field state should be left as it is.
    pub fn validate_input(&self, value: &str) -> Option<Result<(), FieldError>> {
        if let Some(previous) = self.min_reading {
            if let Err(e) = check_reading(value, previous) {
                return Some(Err(e));
            }
        }
        if !value.trim().is_empty() {
            return Some(Ok(()));
        }
        None
    }
}

pub fn check_required(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        Err(FieldError::Required)
    } else {
        Ok(())
    }
}

pub fn check_phone(value: &str) -> Result<(), FieldError> {
    if PHONE_RE.is_match(value) {
        Ok(())
    } else {
        Err(FieldError::InvalidPhone)
    }
}

/// Unparseable input is not a meter error; the required rule covers blanks
pub fn check_reading(value: &str, previous: f64) -> Result<(), FieldError> {
    match value.trim().parse::<f64>() {
        Ok(current) if current < previous => Err(FieldError::ReadingBelowPrevious { previous }),
        _ => Ok(()),
    }
}

/// Per-field error messages; empty means the form may be submitted
pub type FormErrors = BTreeMap<String, String>;

/// Validate every field of a form on submit
pub fn validate_form<'a, I>(fields: I) -> FormErrors
where
    I: IntoIterator<Item = (&'a str, &'a ValidationRules, &'a str)>,
{
    let mut errors = FormErrors::new();
    for (name, rules, value) in fields {
        if let Err(e) = rules.validate_submit(value) {
            errors.insert(name.to_string(), e.to_string());
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_blank_fails() {
        let rules = ValidationRules::required(InputKind::Text);
        assert_eq!(rules.validate_blur("   "), Err(FieldError::Required));
        assert_eq!(rules.validate_submit(""), Err(FieldError::Required));
        assert_eq!(rules.validate_blur("Muscat"), Ok(()));
    }

    #[test]
    fn input_clears_required_error() {
        let rules = ValidationRules::required(InputKind::Text);
        assert_eq!(rules.validate_input("a"), Some(Ok(())));
        assert_eq!(rules.validate_input("  "), None);
    }

    #[test]
    fn phone_pattern() {
        assert!(check_phone("+968 9222 3344").is_ok());
        assert!(check_phone("+96892223344").is_ok());
        assert_eq!(check_phone("+968 922 3344"), Err(FieldError::InvalidPhone));
        assert_eq!(check_phone("92223344"), Err(FieldError::InvalidPhone));
    }

    #[test]
    fn phone_rule_overrides_required_message() {
        let rules = ValidationRules::required(InputKind::Tel);
        assert_eq!(rules.validate_submit("+968"), Err(FieldError::InvalidPhone));
        assert_eq!(rules.validate_submit(""), Err(FieldError::Required));
    }

    #[test]
    fn reading_below_previous() {
        let rules = ValidationRules::meter(12450.0);
        assert_eq!(
            rules.validate_input("12000"),
            Some(Err(FieldError::ReadingBelowPrevious { previous: 12450.0 }))
        );
        assert_eq!(rules.validate_input("12450"), Some(Ok(())));
        assert_eq!(rules.validate_input("abc"), Some(Ok(())));
        assert_eq!(
            FieldError::ReadingBelowPrevious { previous: 1.0 }.to_string(),
            "Reading cannot be less than previous reading"
        );
    }

    #[test]
    fn submit_rejects_reading_below_previous() {
        let rules = ValidationRules::meter(1250.0);
        assert_eq!(
            rules.validate_submit("900"),
            Err(FieldError::ReadingBelowPrevious { previous: 1250.0 })
        );
        assert_eq!(rules.validate_submit(""), Err(FieldError::Required));
        assert_eq!(rules.validate_submit("1300"), Ok(()));
    }

    #[test]
    fn form_errors_collect_per_field() {
        let required = ValidationRules::required(InputKind::Text);
        let tel = ValidationRules::required(InputKind::Tel);
        let optional = ValidationRules::none();
        let errors = validate_form([
            ("location", &required, ""),
            ("contactPhone", &tel, "12345"),
            ("notes", &optional, ""),
        ]);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors["location"], "This field is required");
        assert_eq!(
            errors["contactPhone"],
            "Please enter a valid phone number (+968 XXXX XXXX)"
        );
    }
}
