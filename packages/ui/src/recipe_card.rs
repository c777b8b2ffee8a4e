use dioxus::prelude::*;
use store::Recipe;

use crate::icons::FaClock;
use crate::Icon;

/// Summary tile linking to the recipe's detail page.
#[component]
pub fn RecipeCard(recipe: Recipe) -> Element {
    let href = format!("/recipes/{}", recipe.encoded_id);
    let tags = recipe
        .tags
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    rsx! {
        article {
            class: "recipe-card",
            if let Some(image) = recipe.image.clone() {
                img { class: "recipe-card-image", src: "{image}", alt: "{recipe.title}" }
            }
            h3 {
                Link { to: href, "{recipe.title}" }
            }
            p {
                class: "recipe-card-meta",
                Icon { icon: FaClock, width: 14, height: 14 }
                " {recipe.time_minutes} min · ${recipe.price}"
            }
            if !tags.is_empty() {
                p { class: "recipe-card-tags", "{tags}" }
            }
        }
    }
}
