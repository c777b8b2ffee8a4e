//! # Auth service: registration, token login, profile
//!
//! Wraps the `user/` resources of the REST API:
//!
//! | Method | Endpoint |
//! |--------|----------|
//! | [`register`](AuthService::register) | `POST user/create/` |
//! | [`login`](AuthService::login) | `POST user/token/` then `GET user/me/` |
//! | [`fetch_user_details`](AuthService::fetch_user_details) | `GET user/me/` |
//! | [`update_user`](AuthService::update_user) | `PATCH user/me/` |
//!
//! Login is the one call that does more than a single request: it exchanges the
//! credentials for a token, fetches the profile with that token, and persists the
//! combined [`AuthUser`] in the [`Session`]. Nothing is persisted unless both
//! requests succeed.

use serde_json::json;
use store::config::ApiConfig;
use store::{AuthUser, NewUser, Session, TokenGrant, User, UserUpdate};

use super::header::{auth_header, AUTHORIZATION};
use crate::error::ApiError;
use crate::http::{execute, ApiRequest, ApiResponse, Headers, HttpClient, Method};

#[derive(Clone, Debug)]
pub struct AuthService<H> {
    http: H,
    base: String,
    session: Session,
}

impl<H: HttpClient> AuthService<H> {
    pub fn new(http: H, config: &ApiConfig, session: Session) -> Self {
        Self {
            http,
            base: config.user_url(),
            session,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Create an account. Does not log in.
    pub async fn register(&self, user: &NewUser) -> Result<ApiResponse, ApiError> {
        let request = ApiRequest::new(Method::Post, format!("{}create/", self.base)).json(user)?;
        execute(&self.http, request).await
    }

    /// Exchange credentials for a token, load the profile and persist both.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthUser, ApiError> {
        let request = ApiRequest::new(Method::Post, format!("{}token/", self.base))
            .json(&json!({ "email": email, "password": password }))?;
        let grant: TokenGrant = execute(&self.http, request).await?.json()?;

        let Some(token) = grant.token.filter(|t| !t.is_empty()) else {
            return Err(ApiError::Decode("login response carried no token".to_string()));
        };

        let user = self.fetch_user_details(&token).await?;
        let auth_user = AuthUser::new(user, token);
        self.session.store(&auth_user);
        tracing::info!("Logged in as {}", auth_user.user.email);

        Ok(auth_user)
    }

    /// Load the profile belonging to `token`.
    pub async fn fetch_user_details(&self, token: &str) -> Result<User, ApiError> {
        let mut headers = Headers::new();
        headers.insert(AUTHORIZATION.to_string(), format!("Token {token}"));
        let request = ApiRequest::new(Method::Get, format!("{}me/", self.base)).headers(headers);
        execute(&self.http, request).await?.json()
    }

    pub fn logout(&self) {
        self.session.clear();
    }

    pub fn current_user(&self) -> Option<AuthUser> {
        self.session.current_user()
    }

    /// Patch the logged-in user's profile.
    pub async fn update_user(&self, update: &UserUpdate) -> Result<ApiResponse, ApiError> {
        let user = self.current_user().ok_or_else(ApiError::not_authenticated)?;
        if user.token.is_empty() {
            return Err(ApiError::not_authenticated());
        }

        let request = ApiRequest::new(Method::Patch, format!("{}me/", self.base))
            .headers(auth_header(Some(&user)))
            .json(update)?;
        execute(&self.http, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Body;
    use crate::testing::MockHttp;
    use store::UserId;

    fn service(http: &MockHttp) -> AuthService<MockHttp> {
        AuthService::new(http.clone(), &ApiConfig::default(), Session::in_memory())
    }

    fn profile() -> serde_json::Value {
        json!({ "id": 1, "email": "user@example.com", "name": "user1" })
    }

    #[tokio::test]
    async fn test_login_fetches_profile_and_persists() {
        let http = MockHttp::new();
        http.reply_json(200, &json!({ "token": "abc123" }));
        http.reply_json(200, &profile());
        let auth = service(&http);

        let user = auth.login("user@example.com", "string").await.unwrap();
        assert_eq!(user.token, "abc123");
        assert_eq!(user.user.id, UserId(1));
        assert_eq!(auth.current_user(), Some(user));

        let requests = http.requests();
        assert_eq!(requests[0].url, "http://localhost:8000/api/user/token/");
        assert_eq!(
            requests[0].body,
            Body::Json(json!({ "email": "user@example.com", "password": "string" }))
        );
        assert_eq!(requests[1].url, "http://localhost:8000/api/user/me/");
        assert_eq!(requests[1].headers["Authorization"], "Token abc123");
    }

    #[tokio::test]
    async fn test_failed_profile_fetch_persists_nothing() {
        let http = MockHttp::new();
        http.reply_json(200, &json!({ "token": "abc123" }));
        http.reply(500, "");
        let auth = service(&http);

        assert!(auth.login("user@example.com", "string").await.is_err());
        assert!(auth.current_user().is_none());
    }

    #[tokio::test]
    async fn test_bad_credentials() {
        let http = MockHttp::new();
        http.reply(400, "{\"non_field_errors\":[\"Unable to authenticate\"]}");
        let auth = service(&http);

        let err = auth.login("invalid@example.com", "wrong").await.unwrap_err();
        assert_eq!(err.status(), Some(400));
        assert_eq!(http.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_update_user_requires_session() {
        let http = MockHttp::new();
        let auth = service(&http);

        let err = auth.update_user(&UserUpdate::default()).await.unwrap_err();
        assert_eq!(err, ApiError::not_authenticated());
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_update_user_patches_me() {
        let http = MockHttp::new();
        http.reply_json(200, &json!({ "token": "abc123" }));
        http.reply_json(200, &profile());
        http.reply_json(200, &profile());
        let auth = service(&http);
        auth.login("user@example.com", "string").await.unwrap();

        let update = UserUpdate {
            name: Some("Renamed".to_string()),
            ..UserUpdate::default()
        };
        auth.update_user(&update).await.unwrap();

        let request = http.last_request().unwrap();
        assert_eq!(request.method, Method::Patch);
        assert_eq!(request.url, "http://localhost:8000/api/user/me/");
        assert_eq!(request.headers["Authorization"], "Token abc123");
        assert_eq!(request.body, Body::Json(json!({ "name": "Renamed" })));
    }

    #[tokio::test]
    async fn test_register_and_logout() {
        let http = MockHttp::new();
        http.reply_json(201, &profile());
        let auth = service(&http);

        let new_user = NewUser {
            email: "user@example.com".to_string(),
            password: "string".to_string(),
            name: "user1".to_string(),
        };
        let response = auth.register(&new_user).await.unwrap();
        assert_eq!(response.status, 201);
        assert_eq!(
            http.last_request().unwrap().url,
            "http://localhost:8000/api/user/create/"
        );

        auth.session().store(&AuthUser::new(response.json().unwrap(), "t"));
        auth.logout();
        assert!(auth.current_user().is_none());
    }
}
