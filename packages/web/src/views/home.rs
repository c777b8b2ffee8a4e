use dioxus::prelude::*;
use ui::use_auth_store;

use crate::Route;

/// Landing page.
#[component]
pub fn Home() -> Element {
    let auth = use_auth_store();
    let name = auth
        .state()
        .read()
        .user
        .as_ref()
        .map(|u| u.display_name().to_string());

    rsx! {
        div {
            class: "home",
            h1 { "Recipe Box" }
            p { "Share recipes, tag them, and talk about them." }
            if let Some(name) = name {
                p { "Welcome back, {name}." }
                Link { class: "button", to: Route::Recipes {}, "Browse recipes" }
            } else {
                div {
                    class: "home-actions",
                    Link { class: "button", to: Route::Login {}, "Log in" }
                    Link { class: "button secondary", to: Route::Register {}, "Create an account" }
                }
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div {
            class: "not-found",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Go home" }
        }
    }
}
