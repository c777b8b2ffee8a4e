//! Login flow without a browser: guard, login action, landing route, navbar.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use api::testing::MockHttp;
use api::AuthService;
use serde_json::json;
use store::{ClientConfig, Session};
use ui::guard::{guard, login_target, GuardDecision, LOGIN_PATH};
use ui::stores::{AuthState, AuthStore, StateCell};
use ui::{nav_links, NavLink};

#[tokio::test]
async fn test_login_flow() {
    let config = ClientConfig::default();
    let session = Session::in_memory();
    let http = MockHttp::new();

    // Visiting /recipes/k5Jx9ab logged out is redirected.
    assert_eq!(guard(&session), GuardDecision::Redirect(LOGIN_PATH));
    assert_eq!(login_target(&session), None);
    assert!(!nav_links(None).contains(&NavLink::Logout));

    http.reply_json(200, &json!({ "token": "abc123" }));
    http.reply_json(
        200,
        &json!({ "id": 1, "email": "user@example.com", "name": "user1" }),
    );
    let auth = AuthStore::new(
        AuthService::new(http.clone(), &config.api, session.clone()),
        Rc::new(RefCell::new(AuthState::from_session(&session))),
    );

    let user = tokio::time::timeout(
        Duration::from_secs(5),
        auth.login("user@example.com", "string"),
    )
    .await
    .expect("login timed out")
    .expect("login failed");

    assert_eq!(guard(&session), GuardDecision::Render);
    assert_eq!(login_target(&session), Some("/recipes"));

    let state = auth.state().snapshot();
    assert!(!state.status.loading);
    let links = nav_links(state.user.as_ref());
    assert!(links.contains(&NavLink::Greeting {
        name: user.display_name().to_string(),
        href: "/profile",
    }));
    assert!(links.contains(&NavLink::Logout));

    auth.logout();
    assert_eq!(guard(&session), GuardDecision::Redirect(LOGIN_PATH));
    assert_eq!(login_target(&session), None);
}

#[tokio::test]
async fn test_rejected_credentials_stay_on_login() {
    let config = ClientConfig::default();
    let session = Session::in_memory();
    let http = MockHttp::new();
    http.reply(400, "{\"non_field_errors\":[\"Unable to authenticate\"]}");

    let auth = AuthStore::new(
        AuthService::new(http.clone(), &config.api, session.clone()),
        Rc::new(RefCell::new(AuthState::default())),
    );

    assert!(auth.login("user@example.com", "wrong").await.is_err());
    assert_eq!(guard(&session), GuardDecision::Redirect(LOGIN_PATH));
    assert_eq!(login_target(&session), None);
    assert_eq!(
        auth.state().snapshot().status.error.as_deref(),
        Some("Request failed with status code 400")
    );
}
