use dioxus::prelude::*;
use store::AuthUser;

use crate::auth::LogoutButton;
use crate::provider::use_auth_store;

/// One entry of the navigation bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavLink {
    Page {
        label: &'static str,
        href: &'static str,
    },
    /// The user's name, linking to their profile.
    Greeting { name: String, href: &'static str },
    Logout,
}

/// The navbar entries for the given session.
pub fn nav_links(user: Option<&AuthUser>) -> Vec<NavLink> {
    let page = |label, href| NavLink::Page { label, href };
    match user {
        None => vec![
            page("Home", "/"),
            page("Login", "/login"),
            page("Register", "/register"),
        ],
        Some(user) => vec![
            page("Home", "/"),
            page("Recipes", "/recipes"),
            page("New Recipe", "/recipes/create"),
            page("Profile", "/profile"),
            NavLink::Greeting {
                name: user.display_name().to_string(),
                href: "/profile",
            },
            NavLink::Logout,
        ],
    }
}

#[component]
pub fn Navbar(on_logout: EventHandler<()>, children: Element) -> Element {
    let auth = use_auth_store();
    let user = auth.state().read().user.clone();

    rsx! {
        nav {
            class: "navbar",
            {nav_links(user.as_ref()).into_iter().map(|link| match link {
                NavLink::Page { label, href } => rsx! {
                    Link { key: "{href}", class: "nav-link", to: href, "{label}" }
                },
                NavLink::Greeting { name, href } => {
                    let key = "greeting";
                    rsx! {
                        Link { key: "{key}", class: "nav-user", to: href, "{name}" }
                    }
                }
                NavLink::Logout => {
                    let key = "logout";
                    rsx! {
                        LogoutButton { key: "{key}", class: "nav-logout", on_logout }
                    }
                }
            })}
        }
        {children}
    }
}
