//! # Client configuration: `recipes.toml`
//!
//! Defines the TOML configuration the web client is built with
//! (filename: [`ClientConfig::filename`] = `"recipes.toml"`). It tells the
//! service layer where the REST API lives and under which key the session is
//! persisted.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"   # no trailing slash needed
//!
//! [session]
//! storage_key = "user"
//! ```
//!
//! All structs derive `Default` with the production defaults above, so a missing
//! or empty config file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `recipes.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Location of the REST API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    fn root(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Base path of the user resources: `http://host/api/user/`.
    pub fn user_url(&self) -> String {
        format!("{}/api/user/", self.root())
    }

    /// Base path of the recipe resources: `http://host/api/recipe/`.
    pub fn recipe_url(&self) -> String {
        format!("{}/api/recipe/", self.root())
    }
}

/// Client-side session persistence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Key of the JSON blob holding the logged-in user.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_storage_key() -> String {
    "user".to_string()
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

impl ClientConfig {
    /// Builder method to point the client at another API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "recipes.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
