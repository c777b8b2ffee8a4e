//! # Persisted login session
//!
//! The logged-in user is kept as a single JSON blob under a configured key
//! ([`SessionConfig::storage_key`]). Absence of the blob means logged out.
//!
//! [`Session`] is the explicit session context handed to the service layer. It
//! owns a [`SessionStorage`] backend:
//!
//! | Backend | Platform |
//! |---------|----------|
//! | [`crate::MemoryStorage`] | tests, fallback |
//! | [`crate::FileStorage`] | desktop (native builds) |
//! | `LocalStorage` | browser (`wasm32` + `web` feature) |
//!
//! Backends never fail loudly: an unreadable or corrupt blob is treated as
//! "logged out" so a broken storage degrades to the login screen.

use std::fmt;
use std::sync::Arc;

use crate::config::SessionConfig;
use crate::memory::MemoryStorage;
use crate::models::AuthUser;

/// Key/value storage for the session blob.
pub trait SessionStorage: Send + Sync {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// Handle to the persisted session. Cheap to clone; clones share storage.
#[derive(Clone)]
pub struct Session {
    storage: Arc<dyn SessionStorage>,
    key: String,
}

impl Session {
    pub fn new(storage: impl SessionStorage + 'static, config: &SessionConfig) -> Self {
        Self {
            storage: Arc::new(storage),
            key: config.storage_key.clone(),
        }
    }

    /// A session backed by a fresh [`MemoryStorage`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new(), &SessionConfig::default())
    }

    /// The stored user, if any.
    pub fn current_user(&self) -> Option<AuthUser> {
        let raw = self.storage.load(&self.key)?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                tracing::warn!("Ignoring unreadable session blob: {}", e);
                None
            }
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.current_user().is_some()
    }

    /// Persist `user` as the logged-in user.
    pub fn store(&self, user: &AuthUser) {
        match serde_json::to_string(user) {
            Ok(raw) => self.storage.save(&self.key, &raw),
            Err(e) => tracing::error!("Failed to serialise session: {}", e),
        }
    }

    pub fn clear(&self) {
        self.storage.remove(&self.key);
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("key", &self.key)
            .field("logged_in", &self.is_logged_in())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{User, UserId};

    fn cook() -> AuthUser {
        AuthUser::new(
            User {
                id: UserId(1),
                email: "user@example.com".to_string(),
                name: "user1".to_string(),
            },
            "secret-token",
        )
    }

    #[test]
    fn test_store_and_clear() {
        let session = Session::in_memory();
        assert!(session.current_user().is_none());

        session.store(&cook());
        assert_eq!(session.current_user(), Some(cook()));
        assert!(session.is_logged_in());

        session.clear();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn test_clones_share_storage() {
        let session = Session::in_memory();
        let other = session.clone();
        session.store(&cook());
        assert_eq!(other.current_user().map(|u| u.token), Some("secret-token".into()));
    }

    #[test]
    fn test_corrupt_blob_reads_as_logged_out() {
        let storage = MemoryStorage::new();
        storage.save("user", "{\"token\":\"only-a-token\"}");
        let session = Session::new(storage, &SessionConfig::default());
        assert!(session.current_user().is_none());
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::new();
        let config = SessionConfig {
            storage_key: "recipe-box-user".to_string(),
        };
        let session = Session::new(storage.clone(), &config);
        session.store(&cook());

        assert!(storage.load("recipe-box-user").is_some());
        assert!(storage.load("user").is_none());
    }
}
