//! # Filesystem-backed session storage
//!
//! [`FileStorage`] is a [`SessionStorage`] implementation that keeps each key in
//! its own file. It is used by native builds so a login survives restarts.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>.json     # the session blob
//! ```
//!
//! Use `dirs::data_dir()` to obtain a platform-appropriate base, e.g.
//! `~/.local/share/recipe-box/` on Linux.
//!
//! I/O errors are logged and otherwise ignored: a failed read means "no session".

use std::path::PathBuf;

use crate::session::SessionStorage;

/// Filesystem-backed SessionStorage for native builds.
#[derive(Clone, Debug)]
pub struct FileStorage {
    base: PathBuf,
}

impl FileStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.base.join(format!("{key}.json"))
    }
}

impl SessionStorage for FileStorage {
    fn load(&self, key: &str) -> Option<String> {
        std::fs::read_to_string(self.entry_path(key)).ok()
    }

    fn save(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.entry_path(key), value) {
            tracing::warn!("Failed to write session {}: {}", key, e);
        }
    }

    fn remove(&self, key: &str) {
        let _ = std::fs::remove_file(self.entry_path(key));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SessionConfig;
    use crate::models::{AuthUser, User, UserId};
    use crate::session::Session;

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = std::env::temp_dir().join(format!("recipe_box_test_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);

        let user = AuthUser::new(
            User {
                id: UserId(3),
                email: "file@example.com".to_string(),
                name: "File".to_string(),
            },
            "tok",
        );
        Session::new(FileStorage::new(dir.clone()), &SessionConfig::default()).store(&user);

        // Re-open from same directory
        let reopened = Session::new(FileStorage::new(dir.clone()), &SessionConfig::default());
        assert_eq!(reopened.current_user(), Some(user));

        reopened.clear();
        assert!(reopened.current_user().is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }
}
