//! [`PreferenceStore`] over `window.localStorage`.

use web_sys::{Storage, Window};

use crate::error::EnhanceError;
use crate::state::theme::{MemoryStore, PreferenceStore};

fn storage_error(err: wasm_bindgen::JsValue) -> EnhanceError {
    EnhanceError::Storage(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

pub struct LocalStorage {
    storage: Storage,
}

impl LocalStorage {
    /// Fails when the browser denies access (privacy mode, sandboxed frames).
    pub fn open(window: &Window) -> Result<Self, EnhanceError> {
        window
            .local_storage()
            .map_err(storage_error)?
            .map(|storage| Self { storage })
            .ok_or_else(|| EnhanceError::Storage("localStorage unavailable".into()))
    }
}

impl PreferenceStore for LocalStorage {
    fn load(&self, key: &str) -> Result<Option<String>, EnhanceError> {
        self.storage.get_item(key).map_err(storage_error)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), EnhanceError> {
        self.storage.set_item(key, value).map_err(storage_error)
    }
}

/// `localStorage` when permitted, otherwise a session-only store.
pub fn open_store(window: &Window) -> Box<dyn PreferenceStore> {
    match LocalStorage::open(window) {
        Ok(store) => Box::new(store),
        Err(err) => {
            log::debug!("falling back to session-only preference store: {err}");
            Box::new(MemoryStore::default())
        }
    }
}
