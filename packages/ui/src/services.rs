//! Service wiring shared by all platforms.
//!
//! [`platform_session`] picks the session backend:
//! - **Web** (WASM + `web` feature): browser `localStorage` via [`store::LocalStorage`]
//! - **Native**: one file per key under `<data_dir>/recipe-box/` via [`store::FileStorage`]
//! - anything else: in memory, so a build without storage still runs logged out

use api::{AuthService, CommentService, HttpClient, RecipeService, ReqwestClient};
use store::config::SessionConfig;
use store::{ClientConfig, Session};

/// The session backed by the platform's persistent storage.
pub fn platform_session(config: &SessionConfig) -> Session {
    #[cfg(all(target_arch = "wasm32", feature = "web"))]
    {
        Session::new(store::LocalStorage::new(), config)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let base = dirs::data_dir()
            .unwrap_or_else(|| std::path::PathBuf::from("."))
            .join("recipe-box");
        Session::new(store::FileStorage::new(base), config)
    }
    #[cfg(all(target_arch = "wasm32", not(feature = "web")))]
    {
        Session::new(store::MemoryStorage::new(), config)
    }
}

/// One instance of every API service, all sharing a transport and a session.
#[derive(Clone, Debug)]
pub struct AppServices<H> {
    pub session: Session,
    pub auth: AuthService<H>,
    pub recipes: RecipeService<H>,
    pub comments: CommentService<H>,
}

impl<H: HttpClient + Clone> AppServices<H> {
    pub fn new(http: H, config: &ClientConfig, session: Session) -> Self {
        Self {
            auth: AuthService::new(http.clone(), &config.api, session.clone()),
            recipes: RecipeService::new(http.clone(), &config.api, session.clone()),
            comments: CommentService::new(http, &config.api, session.clone()),
            session,
        }
    }
}

impl AppServices<ReqwestClient> {
    /// Production wiring: `reqwest` plus the platform session.
    pub fn for_platform(config: &ClientConfig) -> Self {
        let session = platform_session(&config.session);
        tracing::debug!("API at {}, session {:?}", config.api.base_url, session);
        Self::new(ReqwestClient::new(), config, session)
    }
}
