//! # Browser `localStorage` session backend
//!
//! [`LocalStorage`] is the [`SessionStorage`] used on the **web platform**. It
//! writes the session blob with `window.localStorage.setItem(key, json)`, the
//! same place a page reload reads it back from.
//!
//! The struct is zero-sized and looks up `window.localStorage` on every call, so
//! it is trivially `Send + Sync` and survives being cloned into closures.
//! Unavailable storage (private mode, sandboxed iframes) degrades to
//! "logged out".

use crate::session::SessionStorage;

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl SessionStorage for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, session not saved");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("localStorage rejected session {}", key);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
