//! This crate contains all shared UI for the workspace: the reactive stores,
//! the comment interaction state and the components the pages are built from.

pub mod stores;

mod services;
pub use services::{platform_session, AppServices};

mod provider;
pub use provider::{
    use_auth_store, use_comment_store, use_recipe_store, use_services, AppAuthStore,
    AppCommentStore, AppProvider, AppRecipeStore,
};

pub mod guard;
pub use guard::{guard, login_target, GuardDecision, RequireAuth};

mod navbar;
pub use navbar::{nav_links, NavLink, Navbar};

mod auth;
pub use auth::LogoutButton;

pub mod comment_controller;
pub use comment_controller::{CommentController, CommentMode, CommentThread};

mod comment_section;
pub use comment_section::{relative_time, CommentSection};

mod recipe_card;
pub use recipe_card::RecipeCard;

mod recipe_form;
pub use recipe_form::{parse_names, validate, ImagePicker, RecipeForm};

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}
