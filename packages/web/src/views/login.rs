//! Login page view with email/password form.

use dioxus::prelude::*;
use ui::{login_target, use_auth_store, use_services};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let auth = use_auth_store();
    let services = use_services();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let state = auth.state().read().clone();

    // Already logged in
    if !state.status.loading {
        if let Some(target) = login_target(&services.session) {
            nav.replace(target);
        }
    }

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        let session = services.session.clone();
        spawn(async move {
            let e = email().trim().to_string();
            let p = password();
            if e.is_empty() || p.is_empty() {
                return;
            }
            match auth.login(&e, &p).await {
                Ok(user) => {
                    tracing::info!("Signed in as {}", user.display_name());
                    if let Some(target) = login_target(&session) {
                        nav.push(target);
                    }
                }
                Err(e) => tracing::error!("Login failed: {}", e),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Log in" }

            form {
                onsubmit: handle_login,
                class: "auth-form",

                if let Some(err) = state.status.error.clone() {
                    div { class: "error", "{err}" }
                }

                input {
                    r#type: "email",
                    name: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    name: "password",
                    placeholder: "Password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: state.status.loading,
                    if state.status.loading { "Logging in..." } else { "Log in" }
                }
            }

            p {
                "No account yet? "
                Link { to: Route::Register {}, "Register" }
            }
        }
    }
}
