//! Draft persistence for designated forms.
//!
//! A draft is a flat field-id -> value map stored as JSON under the form id.
//! Storage is best effort: failures are logged and swallowed by the
//! non-`try_` methods so a full or disabled storage never breaks a form.

use crate::shared::validation::InputKind;
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AutosaveError {
    #[error("storage error: {0}")]
    Storage(String),
    #[error("malformed draft: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Key/value backend (browser localStorage in the app)
pub trait AutosaveStore {
    fn get(&self, key: &str) -> Result<Option<String>, AutosaveError>;
    fn set(&self, key: &str, value: &str) -> Result<(), AutosaveError>;
    fn remove(&self, key: &str) -> Result<(), AutosaveError>;
}

pub type FormSnapshot = BTreeMap<String, String>;

/// Collect a snapshot of the form's fields; file inputs and unnamed fields are skipped
pub fn snapshot<'a, I>(fields: I) -> FormSnapshot
where
    I: IntoIterator<Item = (&'a str, InputKind, &'a str)>,
{
    fields
        .into_iter()
        .filter(|(id, kind, _)| !id.is_empty() && *kind != InputKind::File)
        .map(|(id, _, value)| (id.to_string(), value.to_string()))
        .collect()
}

pub struct FormAutosave<S: AutosaveStore> {
    store: S,
    forms: Vec<String>,
}

impl<S: AutosaveStore> FormAutosave<S> {
    pub fn new(store: S, forms: Vec<String>) -> Self {
        Self { store, forms }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn is_enabled(&self, form_id: &str) -> bool {
        self.forms.iter().any(|f| f == form_id)
    }

    pub fn try_save(&self, form_id: &str, draft: &FormSnapshot) -> Result<(), AutosaveError> {
        let json = serde_json::to_string(draft)?;
        self.store.set(form_id, &json)
    }

    pub fn try_restore(&self, form_id: &str) -> Result<FormSnapshot, AutosaveError> {
        match self.store.get(form_id)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => Ok(FormSnapshot::new()),
        }
    }

    pub fn try_clear(&self, form_id: &str) -> Result<(), AutosaveError> {
        self.store.remove(form_id)
    }

    pub fn save(&self, form_id: &str, draft: &FormSnapshot) {
        if !self.is_enabled(form_id) {
            return;
        }
        if let Err(e) = self.try_save(form_id, draft) {
            log::warn!("autosave of '{}' failed: {}", form_id, e);
        }
    }

    /// Saved draft for the form, empty when nothing usable is stored
    pub fn restore(&self, form_id: &str) -> FormSnapshot {
        if !self.is_enabled(form_id) {
            return FormSnapshot::new();
        }
        self.try_restore(form_id).unwrap_or_else(|e| {
            log::warn!("restoring draft '{}' failed: {}", form_id, e);
            FormSnapshot::new()
        })
    }

    pub fn clear(&self, form_id: &str) {
        if let Err(e) = self.try_clear(form_id) {
            log::warn!("clearing draft '{}' failed: {}", form_id, e);
        }
    }
}

/// In-process store, also used where no browser storage is available
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: RefCell<HashMap<String, String>>,
    /// Simulates a full storage: every write fails
    pub read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn read_only() -> Self {
        Self {
            items: RefCell::new(HashMap::new()),
            read_only: true,
        }
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    pub fn insert_raw(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

impl AutosaveStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, AutosaveError> {
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AutosaveError> {
        if self.read_only {
            return Err(AutosaveError::Storage("quota exceeded".to_string()));
        }
        self.insert_raw(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), AutosaveError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms() -> Vec<String> {
        vec!["serviceRequestForm".to_string(), "meterReadingForm".to_string()]
    }

    #[test]
    fn snapshot_skips_files_and_unnamed() {
        let snap = snapshot([
            ("location", InputKind::Text, "Muscat"),
            ("attachments", InputKind::File, "C:\\fakepath\\a.png"),
            ("", InputKind::Text, "orphan"),
        ]);
        assert_eq!(snap.len(), 1);
        assert_eq!(snap["location"], "Muscat");
    }

    #[test]
    fn save_restore_clear() {
        let autosave = FormAutosave::new(MemoryStore::new(), forms());
        let mut draft = FormSnapshot::new();
        draft.insert("accountNumber".to_string(), "ACC-1".to_string());

        autosave.save("meterReadingForm", &draft);
        assert_eq!(autosave.restore("meterReadingForm"), draft);

        autosave.clear("meterReadingForm");
        assert!(autosave.restore("meterReadingForm").is_empty());
    }

    #[test]
    fn undesignated_forms_are_not_saved() {
        let autosave = FormAutosave::new(MemoryStore::new(), forms());
        let mut draft = FormSnapshot::new();
        draft.insert("q".to_string(), "x".to_string());
        autosave.save("searchForm", &draft);
        assert!(autosave.store.raw("searchForm").is_none());
    }

    #[test]
    fn full_storage_is_swallowed() {
        let autosave = FormAutosave::new(MemoryStore::read_only(), forms());
        let mut draft = FormSnapshot::new();
        draft.insert("location".to_string(), "Sohar".to_string());

        assert!(autosave.try_save("serviceRequestForm", &draft).is_err());
        autosave.save("serviceRequestForm", &draft);
        assert!(autosave.restore("serviceRequestForm").is_empty());
    }

    #[test]
    fn malformed_draft_restores_empty() {
        let store = MemoryStore::new();
        store.insert_raw("serviceRequestForm", "{broken");
        let autosave = FormAutosave::new(store, forms());
        assert!(matches!(
            autosave.try_restore("serviceRequestForm"),
            Err(AutosaveError::Serialize(_))
        ));
        assert!(autosave.restore("serviceRequestForm").is_empty());
    }
}
