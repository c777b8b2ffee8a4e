//! Tag and ingredient management.

use api::{ApiError, AttrKind};
use dioxus::prelude::*;
use store::EncodedId;
use ui::{use_recipe_store, AppRecipeStore};

async fn create(store: &AppRecipeStore, kind: AttrKind, name: &str) -> Result<(), ApiError> {
    match kind {
        AttrKind::Tag => store.create_tag(name).await.map(drop),
        AttrKind::Ingredient => store.create_ingredient(name).await.map(drop),
    }
}

async fn rename(
    store: &AppRecipeStore,
    kind: AttrKind,
    id: &EncodedId,
    name: &str,
) -> Result<(), ApiError> {
    match kind {
        AttrKind::Tag => store.rename_tag(id, name).await.map(drop),
        AttrKind::Ingredient => store.rename_ingredient(id, name).await.map(drop),
    }
}

async fn delete(store: &AppRecipeStore, kind: AttrKind, id: &EncodedId) -> Result<(), ApiError> {
    match kind {
        AttrKind::Tag => store.delete_tag(id).await.map(drop),
        AttrKind::Ingredient => store.delete_ingredient(id).await.map(drop),
    }
}

/// Editable list of the tags or ingredients known to the API.
#[component]
pub fn AttrManager(kind: AttrKind) -> Element {
    let recipes = use_recipe_store();
    let mut new_name = use_signal(String::new);
    let mut renaming = use_signal(|| Option::<(EncodedId, String)>::None);

    let loader_store = recipes.clone();
    let _loader = use_resource(move || {
        let store = loader_store.clone();
        async move {
            let result = match kind {
                AttrKind::Tag => store.fetch_all_tags().await.map(drop),
                AttrKind::Ingredient => store.fetch_all_ingredients().await.map(drop),
            };
            if let Err(e) = result {
                tracing::error!("Failed to load {:?} list: {}", kind, e);
            }
        }
    });

    let state = recipes.state().read().clone();
    let (title, items): (&str, Vec<(EncodedId, String)>) = match kind {
        AttrKind::Tag => (
            "Tags",
            state.tags.into_iter().map(|t| (t.encoded_id, t.name)).collect(),
        ),
        AttrKind::Ingredient => (
            "Ingredients",
            state
                .ingredients
                .into_iter()
                .map(|i| (i.encoded_id, i.name))
                .collect(),
        ),
    };

    let create_store = recipes.clone();
    let handle_create = move |evt: FormEvent| {
        evt.prevent_default();
        let name = new_name().trim().to_string();
        if name.is_empty() {
            return;
        }
        let store = create_store.clone();
        spawn(async move {
            match create(&store, kind, &name).await {
                Ok(()) => new_name.set(String::new()),
                Err(e) => tracing::error!("Failed to create {}: {}", name, e),
            }
        });
    };

    let rename_store = recipes.clone();
    let handle_rename = move |evt: FormEvent| {
        evt.prevent_default();
        let Some((id, name)) = renaming() else {
            return;
        };
        let store = rename_store.clone();
        spawn(async move {
            match rename(&store, kind, &id, name.trim()).await {
                Ok(()) => renaming.set(None),
                Err(e) => tracing::error!("Failed to rename {}: {}", id, e),
            }
        });
    };

    let editing = renaming();

    rsx! {
        section {
            class: "attr-manager",
            h3 { "{title}" }
            ul {
                for (id, name) in items {
                    li {
                        key: "{id}",
                        if editing.as_ref().is_some_and(|(current, _)| *current == id) {
                            form {
                                onsubmit: handle_rename.clone(),
                                input {
                                    value: editing.as_ref().map(|(_, draft)| draft.clone()).unwrap_or_default(),
                                    oninput: move |evt: FormEvent| {
                                        if let Some((_, draft)) = renaming.write().as_mut() {
                                            *draft = evt.value();
                                        }
                                    },
                                }
                                button { r#type: "submit", "Save" }
                                button {
                                    r#type: "button",
                                    onclick: move |_| renaming.set(None),
                                    "Cancel"
                                }
                            }
                        } else {
                            span { "{name}" }
                            button {
                                class: "rename",
                                onclick: {
                                    let id = id.clone();
                                    let name = name.clone();
                                    move |_| renaming.set(Some((id.clone(), name.clone())))
                                },
                                "Rename"
                            }
                            button {
                                class: "delete",
                                onclick: {
                                    let store = recipes.clone();
                                    let id = id.clone();
                                    move |_| {
                                        let store = store.clone();
                                        let id = id.clone();
                                        spawn(async move {
                                            if let Err(e) = delete(&store, kind, &id).await {
                                                tracing::error!("Failed to delete {}: {}", id, e);
                                            }
                                        });
                                    }
                                },
                                "Delete"
                            }
                        }
                    }
                }
            }
            form {
                class: "attr-create",
                onsubmit: handle_create,
                input {
                    placeholder: "Add...",
                    value: new_name(),
                    oninput: move |evt: FormEvent| new_name.set(evt.value()),
                }
                button { r#type: "submit", "Add" }
            }
        }
    }
}
