//! Form model: field definitions, current values and per-field errors.
//!
//! The view layer forwards input/blur/submit events here and renders
//! `value`/`error` back, so every rule lives in one place.

use crate::shared::autosave::{self, FormSnapshot};
use crate::shared::config::MeterConfig;
use crate::shared::format::format_phone;
use crate::shared::validation::{validate_form, FormErrors, InputKind, ValidationRules};
use std::collections::BTreeMap;

pub const SERVICE_REQUEST_FORM: &str = "serviceRequestForm";
pub const METER_READING_FORM: &str = "meterReadingForm";

#[derive(Debug, Clone)]
pub struct FieldDef {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub rules: ValidationRules,
    pub placeholder: &'static str,
    /// (value, label) pairs for selects
    pub options: Vec<(&'static str, &'static str)>,
    /// Applied to every input before it is stored
    pub formatter: Option<fn(&str) -> String>,
}

impl FieldDef {
    pub fn new(id: &'static str, label: &'static str, kind: InputKind) -> Self {
        Self {
            id,
            label,
            kind,
            rules: ValidationRules::none(),
            placeholder: "",
            options: Vec::new(),
            formatter: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.rules.required = true;
        self.rules.kind = self.kind;
        self
    }

    pub fn rules(mut self, rules: ValidationRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn options(mut self, options: &[(&'static str, &'static str)]) -> Self {
        self.options = options.to_vec();
        self
    }

    pub fn formatter(mut self, formatter: fn(&str) -> String) -> Self {
        self.formatter = Some(formatter);
        self
    }
}

#[derive(Debug, Clone)]
pub struct FormState {
    form_id: String,
    fields: Vec<FieldDef>,
    values: BTreeMap<String, String>,
    errors: FormErrors,
}

impl FormState {
    pub fn new(form_id: impl Into<String>, fields: Vec<FieldDef>) -> Self {
        Self {
            form_id: form_id.into(),
            fields,
            values: BTreeMap::new(),
            errors: FormErrors::new(),
        }
    }

    pub fn form_id(&self) -> &str {
        &self.form_id
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn field(&self, id: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.id == id)
    }

    pub fn value(&self, id: &str) -> &str {
        self.values.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.errors.get(id).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Keystroke in a field: format, store, then apply the live rules
    pub fn input(&mut self, id: &str, raw: &str) {
        let Some(field) = self.field(id) else {
            log::warn!("input for unknown field '{}' in '{}'", id, self.form_id);
            return;
        };
        let rules = field.rules;
        let value = match field.formatter {
            Some(format) => format(raw),
            None => raw.to_string(),
        };

        match rules.validate_input(&value) {
            Some(Ok(())) => {
                self.errors.remove(id);
            }
            Some(Err(e)) => {
                self.errors.insert(id.to_string(), e.to_string());
            }
            None => {}
        }
        self.values.insert(id.to_string(), value);
    }

    pub fn blur(&mut self, id: &str) {
        let Some(field) = self.field(id) else {
            return;
        };
        match field.rules.validate_blur(self.value(id)) {
            Ok(()) => {
                self.errors.remove(id);
            }
            Err(e) => {
                self.errors.insert(id.to_string(), e.to_string());
            }
        }
    }

    /// Run every submit rule; returns true when the form may be submitted
    pub fn validate(&mut self) -> bool {
        let errors = validate_form(
            self.fields
                .iter()
                .map(|f| (f.id, &f.rules, self.value(f.id))),
        );
        self.errors = errors;
        self.errors.is_empty()
    }

    /// Clear values and errors
    pub fn reset(&mut self) {
        self.values.clear();
        self.errors.clear();
    }

    pub fn snapshot(&self) -> FormSnapshot {
        autosave::snapshot(
            self.fields
                .iter()
                .map(|f| (f.id, f.kind, self.value(f.id))),
        )
    }

    /// Fill values from a saved draft; keys without a matching field are dropped
    pub fn restore(&mut self, draft: &FormSnapshot) {
        for (id, value) in draft {
            if self.field(id).is_some() {
                self.values.insert(id.clone(), value.clone());
            }
        }
    }
}

pub fn service_request_form() -> FormState {
    FormState::new(
        SERVICE_REQUEST_FORM,
        vec![
            FieldDef::new("serviceType", "Service Type", InputKind::Select)
                .required()
                .options(&[
                    ("", "Select service type"),
                    ("water-leak", "Water Leakage"),
                    ("power-outage", "Power Outage"),
                    ("meter-issue", "Meter Issue"),
                    ("billing", "Billing Inquiry"),
                    ("new-connection", "New Connection"),
                ]),
            FieldDef::new("priority", "Priority", InputKind::Select)
                .required()
                .options(&[
                    ("", "Select priority"),
                    ("low", "Low"),
                    ("medium", "Medium"),
                    ("high", "High"),
                    ("urgent", "Urgent"),
                ]),
            FieldDef::new("location", "Location", InputKind::Text)
                .required()
                .placeholder("Building, street, area"),
            FieldDef::new("contactPhone", "Contact Phone", InputKind::Tel)
                .required()
                .placeholder("+968 XXXX XXXX")
                .formatter(format_phone),
            FieldDef::new("description", "Description", InputKind::TextArea)
                .required()
                .placeholder("Describe the issue in detail"),
            FieldDef::new("attachments", "Attachments", InputKind::File),
        ],
    )
}

pub fn meter_reading_form(meter: &MeterConfig) -> FormState {
    FormState::new(
        METER_READING_FORM,
        vec![
            FieldDef::new("accountNumber", "Account Number", InputKind::Text)
                .required()
                .placeholder("e.g. 1002003004"),
            FieldDef::new("electricityReading", "Electricity Reading (kWh)", InputKind::Number)
                .rules(ValidationRules::meter(meter.previous_electricity)),
            FieldDef::new("waterReading", "Water Reading (m³)", InputKind::Number)
                .rules(ValidationRules::meter(meter.previous_water)),
            FieldDef::new("readingDate", "Reading Date", InputKind::Date).required(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::PortalConfig;

    fn filled_service_request() -> FormState {
        let mut form = service_request_form();
        form.input("serviceType", "water-leak");
        form.input("priority", "high");
        form.input("location", "Al Khuwair");
        form.input("contactPhone", "92223344");
        form.input("description", "Pipe burst near the gate");
        form
    }

    #[test]
    fn blur_on_empty_required_sets_error_and_input_clears_it() {
        let mut form = service_request_form();
        form.blur("location");
        assert_eq!(form.error("location"), Some("This field is required"));

        form.input("location", "Ruwi");
        assert_eq!(form.error("location"), None);
    }

    #[test]
    fn whitespace_input_keeps_error() {
        let mut form = service_request_form();
        form.blur("location");
        form.input("location", "   ");
        assert!(form.error("location").is_some());
    }

    #[test]
    fn phone_is_formatted_on_input() {
        let mut form = service_request_form();
        form.input("contactPhone", "96892223344");
        assert_eq!(form.value("contactPhone"), "+968 9222 3344");
    }

    #[test]
    fn reapplying_stored_value_is_stable() {
        let mut form = service_request_form();
        form.input("contactPhone", "92223344");
        let stored = form.value("contactPhone").to_string();
        let before = form.clone();

        form.input("contactPhone", &stored);
        assert_eq!(form.value("contactPhone"), stored);
        assert_eq!(form.error("contactPhone"), before.error("contactPhone"));

        form.reset();
        form.input("location", "");
        assert_eq!(form.error("location"), None);
    }

    #[test]
    fn submit_validation_blocks_incomplete_form() {
        let mut form = service_request_form();
        assert!(!form.validate());
        assert_eq!(form.error("serviceType"), Some("This field is required"));
        assert_eq!(form.error("attachments"), None);

        let mut form = filled_service_request();
        assert!(form.validate());
        assert!(!form.has_errors());
    }

    #[test]
    fn meter_reading_below_previous_is_flagged_live() {
        let config = PortalConfig::default();
        let mut form = meter_reading_form(&config.meter);
        form.input("electricityReading", "12000");
        assert_eq!(
            form.error("electricityReading"),
            Some("Reading cannot be less than previous reading")
        );
        form.input("electricityReading", "12500");
        assert_eq!(form.error("electricityReading"), None);
    }

    #[test]
    fn submit_keeps_reading_below_previous_error() {
        let config = PortalConfig::default();
        let mut form = meter_reading_form(&config.meter);
        form.input("accountNumber", "1002003004");
        form.input("electricityReading", "100");
        form.input("waterReading", "1300");
        form.input("readingDate", "2024-03-20");

        assert!(!form.validate());
        assert_eq!(
            form.error("electricityReading"),
            Some("Reading cannot be less than previous reading")
        );
        assert_eq!(form.error("waterReading"), None);
    }

    #[test]
    fn snapshot_and_restore() {
        let form = filled_service_request();
        let draft = form.snapshot();
        assert!(!draft.contains_key("attachments"));
        assert_eq!(draft["location"], "Al Khuwair");

        let mut restored = service_request_form();
        let mut with_stray = draft.clone();
        with_stray.insert("unknown".to_string(), "x".to_string());
        restored.restore(&with_stray);
        assert_eq!(restored.value("location"), "Al Khuwair");
        assert_eq!(restored.value("unknown"), "");
    }

    #[test]
    fn reset_clears_values_and_errors() {
        let mut form = filled_service_request();
        form.blur("unknown");
        form.input("location", "");
        form.validate();
        form.reset();
        assert_eq!(form.value("serviceType"), "");
        assert!(!form.has_errors());
    }
}
