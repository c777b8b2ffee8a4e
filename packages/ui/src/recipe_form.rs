//! Recipe create/edit form and the image picker.

use dioxus::prelude::*;
use store::{ImageUpload, NameRef, RecipeDraft};

/// Split a comma separated list into attribute references, dropping blanks.
pub fn parse_names(input: &str) -> Vec<NameRef> {
    input
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(NameRef::new)
        .collect()
}

pub fn join_names(names: &[NameRef]) -> String {
    names
        .iter()
        .map(|n| n.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Check a draft before it is sent.
pub fn validate(draft: &RecipeDraft) -> Result<(), String> {
    if draft.title.trim().is_empty() {
        return Err("Title is required".to_string());
    }
    if draft.time_minutes == 0 {
        return Err("Time must be at least one minute".to_string());
    }
    match draft.price.trim().parse::<f64>() {
        Ok(price) if price >= 0.0 => Ok(()),
        _ => Err("Price must be a number, e.g. 5.50".to_string()),
    }
}

/// Inline form for creating or editing a recipe.
#[component]
pub fn RecipeForm(
    initial: RecipeDraft,
    #[props(default = "Save".to_string())] submit_label: String,
    #[props(default)] busy: bool,
    on_submit: EventHandler<RecipeDraft>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut title = use_signal(|| initial.title.clone());
    let mut time = use_signal(|| initial.time_minutes.to_string());
    let mut price = use_signal(|| initial.price.clone());
    let mut link = use_signal(|| initial.link.clone());
    let mut description = use_signal(|| initial.description.clone());
    let mut tags = use_signal(|| join_names(&initial.tags));
    let mut ingredients = use_signal(|| join_names(&initial.ingredients));
    let mut error = use_signal(|| Option::<String>::None);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let draft = RecipeDraft {
            title: title().trim().to_string(),
            time_minutes: time().trim().parse().unwrap_or(0),
            price: price().trim().to_string(),
            link: link().trim().to_string(),
            description: description(),
            tags: parse_names(&tags()),
            ingredients: parse_names(&ingredients()),
        };
        match validate(&draft) {
            Ok(()) => {
                error.set(None);
                on_submit.call(draft);
            }
            Err(e) => error.set(Some(e)),
        }
    };

    rsx! {
        form {
            class: "recipe-form",
            onsubmit: handle_submit,

            if let Some(err) = error() {
                div { class: "error", "{err}" }
            }

            label { r#for: "recipe-title", "Title" }
            input {
                id: "recipe-title",
                r#type: "text",
                value: title(),
                oninput: move |evt: FormEvent| title.set(evt.value()),
            }

            label { r#for: "recipe-time", "Time (minutes)" }
            input {
                id: "recipe-time",
                r#type: "number",
                min: "1",
                value: time(),
                oninput: move |evt: FormEvent| time.set(evt.value()),
            }

            label { r#for: "recipe-price", "Price" }
            input {
                id: "recipe-price",
                r#type: "text",
                placeholder: "5.50",
                value: price(),
                oninput: move |evt: FormEvent| price.set(evt.value()),
            }

            label { r#for: "recipe-link", "Link" }
            input {
                id: "recipe-link",
                r#type: "url",
                value: link(),
                oninput: move |evt: FormEvent| link.set(evt.value()),
            }

            label { r#for: "recipe-description", "Description" }
            textarea {
                id: "recipe-description",
                value: description(),
                oninput: move |evt: FormEvent| description.set(evt.value()),
            }

            label { r#for: "recipe-tags", "Tags (comma separated)" }
            input {
                id: "recipe-tags",
                r#type: "text",
                value: tags(),
                oninput: move |evt: FormEvent| tags.set(evt.value()),
            }

            label { r#for: "recipe-ingredients", "Ingredients (comma separated)" }
            input {
                id: "recipe-ingredients",
                r#type: "text",
                value: ingredients(),
                oninput: move |evt: FormEvent| ingredients.set(evt.value()),
            }

            div {
                class: "form-actions",
                button { r#type: "submit", disabled: busy, "{submit_label}" }
                button {
                    r#type: "button",
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
            }
        }
    }
}

/// File input that hands the first selected image to `on_pick`.
#[component]
pub fn ImagePicker(on_pick: EventHandler<ImageUpload>) -> Element {
    let handle_change = move |evt: FormEvent| {
        spawn(async move {
            let Some(file) = evt.files().into_iter().next() else {
                return;
            };
            match file.read_bytes().await {
                Ok(bytes) => on_pick.call(ImageUpload {
                    file_name: file.name(),
                    content_type: file.content_type(),
                    bytes: bytes.to_vec(),
                }),
                Err(e) => tracing::error!("Failed to read {}: {}", file.name(), e),
            }
        });
    };

    rsx! {
        input {
            class: "image-picker",
            r#type: "file",
            accept: "image/*",
            onchange: handle_change,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> RecipeDraft {
        RecipeDraft {
            title: "Soup".to_string(),
            time_minutes: 20,
            price: "4.50".to_string(),
            ..RecipeDraft::default()
        }
    }

    #[test]
    fn test_parse_names() {
        let names = parse_names(" Salt, ,Pepper ,");
        assert_eq!(names, vec![NameRef::new("Salt"), NameRef::new("Pepper")]);
        assert_eq!(join_names(&names), "Salt, Pepper");
    }

    #[test]
    fn test_validate() {
        assert!(validate(&draft()).is_ok());
        assert_eq!(
            validate(&RecipeDraft {
                title: " ".to_string(),
                ..draft()
            }),
            Err("Title is required".to_string())
        );
        assert!(validate(&RecipeDraft {
            time_minutes: 0,
            ..draft()
        })
        .is_err());
        assert!(validate(&RecipeDraft {
            price: "cheap".to_string(),
            ..draft()
        })
        .is_err());
    }
}
