//! Recipe create and edit pages.

use dioxus::prelude::*;
use store::{EncodedId, RecipeDraft};
use ui::{use_recipe_store, RecipeForm};

use crate::Route;

#[component]
pub fn RecipeCreate() -> Element {
    let recipes = use_recipe_store();
    let nav = use_navigator();
    let state = recipes.state().read().clone();

    let handle_submit = move |draft: RecipeDraft| {
        let store = recipes.clone();
        spawn(async move {
            match store.create_recipe(&draft).await {
                Ok(recipe) => {
                    nav.push(Route::RecipeDetail {
                        encoded_id: recipe.encoded_id.to_string(),
                    });
                }
                Err(e) => tracing::error!("Failed to create recipe: {}", e),
            }
        });
    };

    rsx! {
        div {
            class: "recipe-edit",
            h1 { "New Recipe" }
            if let Some(err) = state.status.error {
                div { class: "error", "{err}" }
            }
            RecipeForm {
                initial: RecipeDraft::default(),
                submit_label: "Create",
                busy: state.status.loading,
                on_submit: handle_submit,
                on_cancel: move |_| {
                    nav.push(Route::Recipes {});
                },
            }
        }
    }
}

#[component]
pub fn RecipeEdit(encoded_id: String) -> Element {
    let mut id_signal = use_signal(|| EncodedId::new(encoded_id.clone()));
    if id_signal.peek().as_str() != encoded_id {
        id_signal.set(EncodedId::new(encoded_id.clone()));
    }

    let recipes = use_recipe_store();
    let nav = use_navigator();

    let loader_store = recipes.clone();
    let _loader = use_resource(move || {
        let store = loader_store.clone();
        let id = id_signal();
        async move {
            if let Err(e) = store.fetch_recipe(&id).await {
                tracing::error!("Failed to load recipe {}: {}", id, e);
            }
        }
    });

    let id = id_signal();
    let state = recipes.state().read().clone();
    let Some(recipe) = state.current_recipe.filter(|r| r.encoded_id == id) else {
        return rsx! {
            p { class: "loading", "Loading..." }
        };
    };

    let submit_id = id.clone();
    let cancel_id = id.clone();
    let handle_submit = move |draft: RecipeDraft| {
        let store = recipes.clone();
        let id = submit_id.clone();
        spawn(async move {
            match store.update_recipe(&id, &draft).await {
                Ok(_) => {
                    nav.push(Route::RecipeDetail {
                        encoded_id: id.to_string(),
                    });
                }
                Err(e) => tracing::error!("Failed to update recipe {}: {}", id, e),
            }
        });
    };

    rsx! {
        div {
            class: "recipe-edit",
            h1 { "Edit {recipe.title}" }
            if let Some(err) = state.status.error {
                div { class: "error", "{err}" }
            }
            RecipeForm {
                key: "{id}",
                initial: RecipeDraft::from(&recipe),
                submit_label: "Save",
                busy: state.status.loading,
                on_submit: handle_submit,
                on_cancel: move |_| {
                    nav.push(Route::RecipeDetail {
                        encoded_id: cancel_id.to_string(),
                    });
                },
            }
        }
    }
}
