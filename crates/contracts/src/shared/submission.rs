use crate::shared::autosave::{AutosaveStore, FormAutosave};
use crate::shared::form::FormState;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission of '{0}' is already in flight")]
    AlreadyInFlight(String),
    #[error("form '{0}' has validation errors")]
    Invalid(String),
}

/// Tracks which forms have a simulated submission pending.
///
/// A form may only have one pending submission; a second submit before
/// `finish` is rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionTracker {
    in_flight: HashSet<String>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, form_id: &str) -> Result<(), SubmitError> {
        if !self.in_flight.insert(form_id.to_string()) {
            log::warn!("ignoring re-entrant submit of '{}'", form_id);
            return Err(SubmitError::AlreadyInFlight(form_id.to_string()));
        }
        Ok(())
    }

    pub fn finish(&mut self, form_id: &str) {
        self.in_flight.remove(form_id);
    }

    pub fn is_in_flight(&self, form_id: &str) -> bool {
        self.in_flight.contains(form_id)
    }
}

/// Validate `form` and take its in-flight slot.
///
/// An invalid form never takes the slot, so the user can fix it and retry.
pub fn start_submission(
    form: &mut FormState,
    tracker: &mut SubmissionTracker,
) -> Result<(), SubmitError> {
    if !form.validate() {
        return Err(SubmitError::Invalid(form.form_id().to_string()));
    }
    tracker.begin(form.form_id())
}

/// Settle an accepted submission: clear the form, drop its draft and
/// release the slot.
pub fn complete_submission<S: AutosaveStore>(
    form: &mut FormState,
    autosave: &FormAutosave<S>,
    tracker: &mut SubmissionTracker,
) {
    let form_id = form.form_id().to_string();
    log::info!("'{}' submitted", form_id);
    form.reset();
    autosave.clear(&form_id);
    tracker.finish(&form_id);
}

/// Visibility of the global loading overlay.
///
/// Counts nested show/hide pairs so an inner `hide` does not drop the overlay
/// while an outer operation is still pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingOverlay {
    depth: u32,
}

impl LoadingOverlay {
    pub fn show(&mut self) {
        self.depth += 1;
    }

    pub fn hide(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    pub fn is_visible(&self) -> bool {
        self.depth > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::autosave::MemoryStore;
    use crate::shared::config::PortalConfig;
    use crate::shared::form::{meter_reading_form, METER_READING_FORM};

    fn meter_autosave() -> FormAutosave<MemoryStore> {
        FormAutosave::new(MemoryStore::new(), vec![METER_READING_FORM.to_string()])
    }

    fn filled_meter_form() -> FormState {
        let mut form = meter_reading_form(&PortalConfig::default().meter);
        form.input("accountNumber", "1002003004");
        form.input("electricityReading", "12600");
        form.input("waterReading", "1300");
        form.input("readingDate", "2024-03-20");
        form
    }

    #[test]
    fn second_submit_is_rejected_until_finished() {
        let mut tracker = SubmissionTracker::new();
        tracker.begin("serviceRequestForm").unwrap();
        assert_eq!(
            tracker.begin("serviceRequestForm"),
            Err(SubmitError::AlreadyInFlight("serviceRequestForm".to_string()))
        );
        tracker.begin("meterReadingForm").unwrap();

        tracker.finish("serviceRequestForm");
        assert!(!tracker.is_in_flight("serviceRequestForm"));
        assert!(tracker.begin("serviceRequestForm").is_ok());
    }

    #[test]
    fn overlay_counts_nested_calls() {
        let mut overlay = LoadingOverlay::default();
        overlay.show();
        overlay.show();
        overlay.hide();
        assert!(overlay.is_visible());
        overlay.hide();
        assert!(!overlay.is_visible());
        overlay.hide();
        assert!(!overlay.is_visible());
        overlay.show();
        assert!(overlay.is_visible());
    }

    #[test]
    fn invalid_submit_keeps_draft_and_leaves_slot_free() {
        let autosave = meter_autosave();
        let mut tracker = SubmissionTracker::new();
        let mut form = meter_reading_form(&PortalConfig::default().meter);
        form.input("accountNumber", "1002003004");
        form.input("electricityReading", "100");
        autosave.save(METER_READING_FORM, &form.snapshot());

        assert_eq!(
            start_submission(&mut form, &mut tracker),
            Err(SubmitError::Invalid(METER_READING_FORM.to_string()))
        );
        assert!(!tracker.is_in_flight(METER_READING_FORM));
        assert_eq!(autosave.restore(METER_READING_FORM)["electricityReading"], "100");
        assert_eq!(form.value("accountNumber"), "1002003004");
    }

    #[test]
    fn accepted_submit_clears_draft_and_releases_slot() {
        let autosave = meter_autosave();
        let mut tracker = SubmissionTracker::new();
        let mut form = filled_meter_form();
        autosave.save(METER_READING_FORM, &form.snapshot());

        start_submission(&mut form, &mut tracker).unwrap();
        assert!(tracker.is_in_flight(METER_READING_FORM));
        assert_eq!(
            start_submission(&mut form, &mut tracker),
            Err(SubmitError::AlreadyInFlight(METER_READING_FORM.to_string()))
        );
        assert!(autosave.store().raw(METER_READING_FORM).is_some());

        complete_submission(&mut form, &autosave, &mut tracker);
        assert!(!tracker.is_in_flight(METER_READING_FORM));
        assert!(autosave.store().raw(METER_READING_FORM).is_none());
        assert_eq!(form.value("accountNumber"), "");
        assert!(start_submission(&mut filled_meter_form(), &mut tracker).is_ok());
    }
}
