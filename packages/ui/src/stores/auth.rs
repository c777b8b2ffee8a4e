//! Auth store: the logged-in user and the account actions.

use api::{ApiError, ApiResponse, AuthService, HttpClient};
use store::{AuthUser, NewUser, Session, UserUpdate};

use super::{with_async, RequestStatus, StateCell, Tracked, GENERIC_ERROR};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub status: RequestStatus,
}

impl AuthState {
    /// Initial state, hydrated from the persisted session.
    pub fn from_session(session: &Session) -> Self {
        Self {
            user: session.current_user(),
            status: RequestStatus::default(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Tracked for AuthState {
    fn status(&self) -> &RequestStatus {
        &self.status
    }
    fn status_mut(&mut self) -> &mut RequestStatus {
        &mut self.status
    }
}

#[derive(Clone, Debug)]
pub struct AuthStore<H, C> {
    service: AuthService<H>,
    state: C,
}

impl<H: HttpClient, C: StateCell<AuthState>> AuthStore<H, C> {
    pub fn new(service: AuthService<H>, state: C) -> Self {
        Self { service, state }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.state.view_state(|s| s.user.clone())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            let user = self.service.login(email, password).await?;
            self.state.update_state(|s| s.user = Some(user.clone()));
            Ok(user)
        })
        .await
    }

    /// Clear the persisted session and forget everything held in memory.
    pub fn logout(&self) {
        self.service.logout();
        self.reset_state();
        tracing::info!("Logged out");
    }

    /// Create an account and hand back the raw server reply. The caller is
    /// still logged out afterwards.
    pub async fn register(&self, user: &NewUser) -> Result<ApiResponse, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            self.service.register(user).await
        })
        .await
    }

    /// Patch the profile, then merge the submitted fields into the cached and
    /// persisted user. The reply body is not read.
    pub async fn update_user_profile(&self, update: &UserUpdate) -> Result<AuthUser, ApiError> {
        with_async(&self.state, GENERIC_ERROR, async {
            self.service.update_user(update).await?;
            let mut merged = self
                .service
                .current_user()
                .ok_or_else(ApiError::not_authenticated)?;
            update.apply_to(&mut merged.user);
            self.service.session().store(&merged);
            self.state.update_state(|s| s.user = Some(merged.clone()));
            Ok(merged)
        })
        .await
    }

    pub fn reset_state(&self) {
        self.state.update_state(|s| *s = AuthState::default());
    }
}
