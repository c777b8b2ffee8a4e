//! Recipe detail page: the recipe, owner actions and the comment thread.

use dioxus::prelude::*;
use store::EncodedId;
use ui::{use_auth_store, use_recipe_store, CommentSection, ImagePicker};

use crate::Route;

#[component]
pub fn RecipeDetail(encoded_id: String) -> Element {
    // Track the id in a signal so the loader re-runs on route param change
    let mut id_signal = use_signal(|| EncodedId::new(encoded_id.clone()));
    if id_signal.peek().as_str() != encoded_id {
        id_signal.set(EncodedId::new(encoded_id.clone()));
    }

    let recipes = use_recipe_store();
    let auth = use_auth_store();
    let nav = use_navigator();
    let mut confirm_delete = use_signal(|| false);

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
    let user = auth.state().read().user.clone();
    let recipe = state.current_recipe.filter(|r| r.encoded_id == id);

    let Some(recipe) = recipe else {
        return rsx! {
            div {
                class: "recipe-detail",
                if let Some(err) = state.status.error {
                    div { class: "error", "{err}" }
                } else {
                    p { class: "loading", "Loading..." }
                }
            }
        };
    };

    let owned = user.as_ref().is_some_and(|u| recipe.is_owned_by(u.id()));
    let owner = recipe
        .user
        .as_ref()
        .map(|u| (u.id, u.display_name().to_string()));
    let tags = recipe.tags.clone();
    let ingredients = recipe.ingredients.clone();

    let (delete_class, delete_label) = if confirm_delete() {
        ("confirm-delete", "Confirm Delete")
    } else {
        ("delete", "Delete")
    };

    let delete_store = recipes.clone();
    let delete_id = id.clone();
    let handle_delete = move |_| {
        if !confirm_delete() {
            confirm_delete.set(true);
            return;
        }
        confirm_delete.set(false);
        let store = delete_store.clone();
        let id = delete_id.clone();
        spawn(async move {
            match store.delete_recipe(&id).await {
                Ok(_) => {
                    nav.push(Route::Recipes {});
                }
                Err(e) => tracing::error!("Failed to delete recipe {}: {}", id, e),
            }
        });
    };

    let upload_store = recipes.clone();
    let upload_id = id.clone();
    let handle_image = move |image: store::ImageUpload| {
        let store = upload_store.clone();
        let id = upload_id.clone();
        spawn(async move {
            if let Err(e) = store.upload_recipe_image(&id, &image).await {
                tracing::error!("Failed to upload image for {}: {}", id, e);
            }
        });
    };

    rsx! {
        article {
            class: "recipe-detail",
            h1 { "{recipe.title}" }

            if let Some((owner_id, owner_name)) = owner {
                p {
                    class: "recipe-owner",
                    "By "
                    Link {
                        to: Route::UserProfile { user_id: owner_id },
                        "{owner_name}"
                    }
                }
            }

            if let Some(image) = recipe.image.clone() {
                img { class: "recipe-image", src: "{image}", alt: "{recipe.title}" }
            }

            dl {
                class: "recipe-facts",
                dt { "Time" }
                dd { "{recipe.time_minutes} minutes" }
                dt { "Price" }
                dd { "${recipe.price}" }
                if !recipe.link.is_empty() {
                    dt { "Link" }
                    dd { a { href: "{recipe.link}", target: "_blank", "{recipe.link}" } }
                }
            }

            if !recipe.description.is_empty() {
                p { class: "recipe-description", "{recipe.description}" }
            }

            h3 { "Ingredients" }
            ul {
                for ingredient in ingredients {
                    li { key: "{ingredient.encoded_id}", "{ingredient.name}" }
                }
            }

            div {
                class: "recipe-tags",
                for tag in tags {
                    span { key: "{tag.encoded_id}", class: "tag", "{tag.name}" }
                }
            }

            if owned {
                div {
                    class: "owner-actions",
                    Link {
                        class: "button",
                        to: Route::RecipeEdit { encoded_id: id.to_string() },
                        "Edit"
                    }
                    button {
                        class: "{delete_class}",
                        onclick: handle_delete,
                        "{delete_label}"
                    }
                    label {
                        "Upload image "
                        ImagePicker { on_pick: handle_image }
                    }
                }
            }

            CommentSection { recipe: id.clone() }
        }
    }
}
