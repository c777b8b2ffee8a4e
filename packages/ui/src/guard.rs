//! Route guard for the authenticated part of the app.

use dioxus::prelude::*;
use store::Session;

use crate::provider::{use_auth_store, use_services};

/// Where unauthenticated visitors are sent.
pub const LOGIN_PATH: &str = "/login";

/// Where a successful login lands.
pub const HOME_PATH: &str = "/recipes";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect(&'static str),
}

/// Decide from the persisted session, not from in-memory state, so a fresh
/// tab with a stored user is let through before any store is populated.
pub fn guard(session: &Session) -> GuardDecision {
    if session.is_logged_in() {
        GuardDecision::Render
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Where the login page sends the visitor: the recipe list once a user is
/// stored, nowhere while still logged out.
pub fn login_target(session: &Session) -> Option<&'static str> {
    session.is_logged_in().then_some(HOME_PATH)
}

/// Renders `children` only when a user is stored; otherwise replaces the
/// current route with `/login`.
#[component]
pub fn RequireAuth(children: Element) -> Element {
    let services = use_services();
    let auth = use_auth_store();
    let nav = use_navigator();
    // Re-run when the user logs in or out.
    let _ = auth.state().read().user.is_some();

    match guard(&services.session) {
        GuardDecision::Render => rsx! { {children} },
        GuardDecision::Redirect(path) => {
            nav.replace(path);
            rsx! {}
        }
    }
}
