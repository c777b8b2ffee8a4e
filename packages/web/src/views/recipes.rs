//! Recipe list with tag and ingredient filters.

use dioxus::prelude::*;
use store::{EncodedId, RecipeFilters};
use ui::{use_recipe_store, RecipeCard};

use crate::Route;

/// Toggle `id` in a filter selection.
fn toggle(selection: &mut Vec<EncodedId>, id: EncodedId) {
    match selection.iter().position(|s| *s == id) {
        Some(index) => {
            selection.remove(index);
        }
        None => selection.push(id),
    }
}

#[component]
pub fn Recipes() -> Element {
    let recipes = use_recipe_store();
    let mut filters = use_signal(RecipeFilters::default);

    let attr_store = recipes.clone();
    let _attrs = use_resource(move || {
        let store = attr_store.clone();
        async move {
            if let Err(e) = store.fetch_all_tags().await {
                tracing::error!("Failed to load tags: {}", e);
            }
            if let Err(e) = store.fetch_all_ingredients().await {
                tracing::error!("Failed to load ingredients: {}", e);
            }
        }
    });

    // Re-runs whenever the filters change
    let list_store = recipes.clone();
    let _loader = use_resource(move || {
        let store = list_store.clone();
        let current = filters();
        async move {
            if let Err(e) = store.fetch_all_recipes(&current).await {
                tracing::error!("Failed to load recipes: {}", e);
            }
        }
    });

    let state = recipes.state().read().clone();
    let selected = filters();

    rsx! {
        div {
            class: "recipes-page",
            div {
                class: "page-header",
                h1 { "Recipes" }
                Link { class: "button", to: Route::RecipeCreate {}, "New Recipe" }
            }

            aside {
                class: "filters",
                h4 { "Tags" }
                for tag in state.tags.iter().cloned() {
                    label {
                        key: "{tag.encoded_id}",
                        input {
                            r#type: "checkbox",
                            checked: selected.tags.contains(&tag.encoded_id),
                            onchange: move |_| toggle(&mut filters.write().tags, tag.encoded_id.clone()),
                        }
                        " {tag.name}"
                    }
                }
                h4 { "Ingredients" }
                for ingredient in state.ingredients.iter().cloned() {
                    label {
                        key: "{ingredient.encoded_id}",
                        input {
                            r#type: "checkbox",
                            checked: selected.ingredients.contains(&ingredient.encoded_id),
                            onchange: move |_| toggle(&mut filters.write().ingredients, ingredient.encoded_id.clone()),
                        }
                        " {ingredient.name}"
                    }
                }
            }

            if let Some(err) = state.status.error.clone() {
                div { class: "error", "{err}" }
            }

            if state.status.loading && state.recipes.is_empty() {
                p { class: "loading", "Loading..." }
            } else if state.recipes.is_empty() {
                p { "No recipes match." }
            }

            div {
                class: "recipe-grid",
                for recipe in state.recipes.iter().cloned() {
                    RecipeCard { key: "{recipe.encoded_id}", recipe }
                }
            }
        }
    }
}
