use dioxus::prelude::*;
use store::UserId;
use ui::{use_recipe_store, RecipeCard};

/// Public page listing another user's recipes.
#[component]
pub fn UserProfile(user_id: UserId) -> Element {
    let mut user_signal = use_signal(|| user_id);
    if *user_signal.peek() != user_id {
        user_signal.set(user_id);
    }

    let recipes = use_recipe_store();
    let loader_store = recipes.clone();
    let _loader = use_resource(move || {
        let store = loader_store.clone();
        let user = user_signal();
        async move {
            if let Err(e) = store.fetch_user_recipes(user).await {
                tracing::error!("Failed to load recipes of {}: {}", user, e);
            }
        }
    });

    let state = recipes.state().read().clone();
    // The owner's name comes from any of their recipes; the API has no public profile endpoint.
    let owner = state
        .recipes
        .iter()
        .find_map(|r| r.user.as_ref().filter(|u| u.id == user_id))
        .map(|u| u.display_name().to_string())
        .unwrap_or_else(|| format!("User {user_id}"));
    let theirs: Vec<_> = state
        .recipes
        .into_iter()
        .filter(|r| r.is_owned_by(user_id))
        .collect();

    rsx! {
        div {
            class: "user-profile",
            h1 { "{owner}'s Recipes" }
            if let Some(err) = state.status.error {
                div { class: "error", "{err}" }
            }
            if theirs.is_empty() && !state.status.loading {
                p { "No recipes yet." }
            }
            div {
                class: "recipe-grid",
                for recipe in theirs {
                    RecipeCard { key: "{recipe.encoded_id}", recipe }
                }
            }
        }
    }
}
