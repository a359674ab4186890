//! `localStorage` backend for the session.

use session::{Session, SessionError, Storage};

/// The browser's `localStorage`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl Storage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> session::Result<()> {
        let storage = Self::local()
            .ok_or_else(|| SessionError::Storage("localStorage is not available".to_string()))?;
        storage
            .set_item(key, value)
            .map_err(|e| SessionError::Storage(format!("failed to write {key}: {e:?}")))
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local()
            && let Err(e) = storage.remove_item(key)
        {
            log::error!("Failed to remove {key} from localStorage: {e:?}");
        }
    }
}

/// Session backed by `localStorage`.
pub fn browser_session() -> Session<BrowserStorage> {
    Session::new(BrowserStorage)
}
