//! `localStorage` as a [`KeyValueStore`].

use formkeeper::error::StorageError;
use formkeeper::storage::KeyValueStore;
use wasm_bindgen::JsValue;

/// Handle on the window's `localStorage`.
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: web_sys::Storage,
}

impl LocalStorage {
    /// Open the page's storage. `None` when the browser refuses access
    /// (privacy mode, sandboxed frame).
    pub fn open() -> Option<Self> {
        let window = web_sys::window()?;
        match window.local_storage() {
            Ok(Some(storage)) => Some(Self { storage }),
            Ok(None) => None,
            Err(err) => {
                tracing::warn!(error = ?err, "localStorage unavailable");
                None
            }
        }
    }
}

impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(|_| StorageError::Unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::WriteRejected(js_error_text(&err)))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage
            .remove_item(key)
            .map_err(|err| StorageError::DeleteRejected(js_error_text(&err)))
    }
}

fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
