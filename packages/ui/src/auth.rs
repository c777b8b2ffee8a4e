//! Account controls shared by the navbar and the profile page.

use dioxus::prelude::*;

use crate::provider::{use_auth_store, use_comment_store, use_recipe_store};

/// Button to log out the current user.
///
/// Clears the persisted session, empties every store and fires `on_logout`
/// (the router uses it to go to `/login`).
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
    on_logout: EventHandler<()>,
) -> Element {
    let auth = use_auth_store();
    let recipes = use_recipe_store();
    let comments = use_comment_store();

    let onclick = move |_| {
        auth.logout();
        recipes.reset_state();
        comments.reset_state();
        on_logout.call(());
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
