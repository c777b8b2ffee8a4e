//! Registration page view with email/password form.

use dioxus::prelude::*;
use store::NewUser;
use ui::use_auth_store;

use crate::Route;

/// Check the registration fields, returning the first problem found.
fn check(name: &str, email: &str, password: &str, confirm: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Name is required");
    }
    if email.is_empty() || !email.contains('@') {
        return Err("Please enter a valid email");
    }
    if password.len() < 5 {
        return Err("Password must be at least 5 characters");
    }
    if password != confirm {
        return Err("Passwords do not match");
    }
    Ok(())
}

/// Register page component.
#[component]
pub fn Register() -> Element {
    let auth = use_auth_store();
    let nav = use_navigator();
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm_password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);

    let loading = auth.state().read().status.loading;

    let handle_register = move |evt: FormEvent| {
        evt.prevent_default();
        let auth = auth.clone();
        spawn(async move {
            error.set(None);

            let n = name().trim().to_string();
            let e = email().trim().to_string();
            let p = password();
            if let Err(msg) = check(&n, &e, &p, &confirm_password()) {
                error.set(Some(msg.to_string()));
                return;
            }

            let new_user = NewUser {
                email: e,
                password: p,
                name: n,
            };
            match auth.register(&new_user).await {
                Ok(_) => {
                    tracing::info!("Registered {}", new_user.email);
                    nav.push(Route::Login {});
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    rsx! {
        div {
            class: "auth-page",
            h1 { "Create Account" }

            form {
                onsubmit: handle_register,
                class: "auth-form",

                if let Some(err) = error() {
                    div { class: "error", "{err}" }
                }

                input {
                    r#type: "text",
                    placeholder: "Name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password (min 5 characters)",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Confirm password",
                    value: confirm_password(),
                    oninput: move |evt: FormEvent| confirm_password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading,
                    if loading { "Creating account..." } else { "Create Account" }
                }
            }

            p {
                "Already have an account? "
                Link { to: Route::Login {}, "Log in" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check() {
        assert_eq!(check("A", "a@b.c", "secret", "secret"), Ok(()));
        assert_eq!(check("", "a@b.c", "secret", "secret"), Err("Name is required"));
        assert_eq!(
            check("A", "nope", "secret", "secret"),
            Err("Please enter a valid email")
        );
        assert_eq!(
            check("A", "a@b.c", "abc", "abc"),
            Err("Password must be at least 5 characters")
        );
        assert_eq!(
            check("A", "a@b.c", "secret", "secrets"),
            Err("Passwords do not match")
        );
    }
}
