use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use crate::session::SessionStorage;

/// In-memory SessionStorage for testing and as a fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.load("user").is_none());

        storage.save("user", "{}");
        assert_eq!(storage.load("user").as_deref(), Some("{}"));

        storage.save("user", "{\"id\":1}");
        assert_eq!(storage.load("user").as_deref(), Some("{\"id\":1}"));

        storage.remove("user");
        assert!(storage.load("user").is_none());
    }
}
