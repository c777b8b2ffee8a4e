use dioxus::prelude::*;

use store::{ClientConfig, UserId};
use ui::{AppProvider, Navbar, RequireAuth};
use views::{
    Home, Login, NotFound, Profile, RecipeCreate, RecipeDetail, RecipeEdit, Recipes, Register,
    UserProfile,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/register")]
        Register {},
        #[layout(Protected)]
            #[route("/recipes")]
            Recipes {},
            #[route("/recipes/create")]
            RecipeCreate {},
            #[route("/recipes/:encoded_id")]
            RecipeDetail { encoded_id: String },
            #[route("/recipes/:encoded_id/edit")]
            RecipeEdit { encoded_id: String },
            #[route("/profile")]
            Profile {},
            #[route("/user/:user_id/profile")]
            UserProfile { user_id: UserId },
        #[end_layout]
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
const CONFIG_TOML: &str = include_str!("../recipes.toml");

fn load_config() -> ClientConfig {
    ClientConfig::from_toml(CONFIG_TOML).unwrap_or_else(|e| {
        tracing::warn!("Invalid {}, using defaults: {}", ClientConfig::filename(), e);
        ClientConfig::default()
    })
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(load_config);

    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProvider {
            config,
            Router::<Route> {}
        }
    }
}

/// Navbar around every page.
#[component]
fn Shell() -> Element {
    let nav = use_navigator();

    rsx! {
        Navbar {
            on_logout: move |_| {
                nav.replace(Route::Login {});
            },
            main {
                class: "page",
                Outlet::<Route> {}
            }
        }
    }
}

/// Pages that need a logged-in user.
#[component]
fn Protected() -> Element {
    rsx! {
        RequireAuth {
            Outlet::<Route> {}
        }
    }
}
