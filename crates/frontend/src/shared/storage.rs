use contracts::shared::autosave::{AutosaveError, AutosaveStore, FormAutosave};
use wasm_bindgen::JsValue;
use web_sys::window;

const CONFIG_OVERRIDE_KEY: &str = "portal-config";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn js_error(e: JsValue) -> AutosaveError {
    AutosaveError::Storage(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// `localStorage` as an autosave backend
#[derive(Clone, Copy, Default)]
pub struct LocalStorageStore;

impl AutosaveStore for LocalStorageStore {
    fn get(&self, key: &str) -> Result<Option<String>, AutosaveError> {
        let storage = get_local_storage()
            .ok_or_else(|| AutosaveError::Storage("localStorage unavailable".to_string()))?;
        storage.get_item(key).map_err(js_error)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), AutosaveError> {
        let storage = get_local_storage()
            .ok_or_else(|| AutosaveError::Storage("localStorage unavailable".to_string()))?;
        storage.set_item(key, value).map_err(js_error)
    }

    fn remove(&self, key: &str) -> Result<(), AutosaveError> {
        let storage = get_local_storage()
            .ok_or_else(|| AutosaveError::Storage("localStorage unavailable".to_string()))?;
        storage.remove_item(key).map_err(js_error)
    }
}

pub fn form_autosave(forms: Vec<String>) -> FormAutosave<LocalStorageStore> {
    FormAutosave::new(LocalStorageStore, forms)
}

/// Raw config override document, if the user set one
pub fn get_config_override() -> Option<String> {
    get_local_storage()?.get_item(CONFIG_OVERRIDE_KEY).ok()?
}
