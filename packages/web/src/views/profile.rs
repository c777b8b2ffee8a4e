//! The logged-in user's profile: account details, their recipes, and the
//! shared tag and ingredient lists.

use api::AttrKind;
use dioxus::prelude::*;
use store::UserUpdate;
use ui::{use_auth_store, use_recipe_store, RecipeCard};

use super::attributes::AttrManager;

/// Only the fields the user actually changed.
fn changes(name: &str, email: &str, password: &str, current_name: &str, current_email: &str) -> UserUpdate {
    let changed = |value: &str, current: &str| {
        let value = value.trim();
        (!value.is_empty() && value != current).then(|| value.to_string())
    };
    UserUpdate {
        name: changed(name, current_name),
        email: changed(email, current_email),
        password: (!password.is_empty()).then(|| password.to_string()),
    }
}

#[component]
pub fn Profile() -> Element {
    let auth = use_auth_store();
    let recipes = use_recipe_store();

    let auth_state = auth.state().read().clone();
    let (current_name, current_email, user_id) = match auth_state.user.as_ref() {
        Some(user) => (user.user.name.clone(), user.user.email.clone(), Some(user.id())),
        None => (String::new(), String::new(), None),
    };

    let mut name = use_signal(|| current_name.clone());
    let mut email = use_signal(|| current_email.clone());
    let mut password = use_signal(String::new);
    let mut saved = use_signal(|| false);

    let loader_store = recipes.clone();
    let _loader = use_resource(move || {
        let store = loader_store.clone();
        async move {
            let Some(user_id) = user_id else {
                return;
            };
            if let Err(e) = store.fetch_user_recipes(user_id).await {
                tracing::error!("Failed to load recipes of {}: {}", user_id, e);
            }
        }
    });

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let update = changes(&name(), &email(), &password(), &current_name, &current_email);
        if update == UserUpdate::default() {
            return;
        }
        let auth = auth.clone();
        spawn(async move {
            saved.set(false);
            match auth.update_user_profile(&update).await {
                Ok(_) => {
                    password.set(String::new());
                    saved.set(true);
                }
                Err(e) => tracing::error!("Failed to update profile: {}", e),
            }
        });
    };

    let recipe_state = recipes.state().read().clone();
    let mine: Vec<_> = recipe_state
        .recipes
        .into_iter()
        .filter(|r| user_id.is_some_and(|id| r.is_owned_by(id)))
        .collect();

    rsx! {
        div {
            class: "profile-page",
            h1 { "Your Profile" }

            form {
                class: "profile-form",
                onsubmit: handle_save,

                if let Some(err) = auth_state.status.error.clone() {
                    div { class: "error", "{err}" }
                }
                if saved() {
                    div { class: "success", "Profile updated." }
                }

                label { r#for: "profile-name", "Name" }
                input {
                    id: "profile-name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                label { r#for: "profile-email", "Email" }
                input {
                    id: "profile-email",
                    r#type: "email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }
                label { r#for: "profile-password", "New password" }
                input {
                    id: "profile-password",
                    r#type: "password",
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }
                button {
                    r#type: "submit",
                    disabled: auth_state.status.loading,
                    "Save changes"
                }
            }

            h2 { "Your Recipes" }
            div {
                class: "recipe-grid",
                for recipe in mine {
                    RecipeCard { key: "{recipe.encoded_id}", recipe }
                }
            }

            div {
                class: "attr-columns",
                AttrManager { kind: AttrKind::Tag }
                AttrManager { kind: AttrKind::Ingredient }
            }
        }
    }
}
