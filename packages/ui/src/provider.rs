//! App-wide store context and the hooks that read it.

use api::ReqwestClient;
use dioxus::prelude::*;
use store::ClientConfig;

use crate::services::AppServices;
use crate::stores::{
    AuthState, AuthStore, CommentState, CommentStore, RecipeState, RecipeStore,
};

pub type AppAuthStore = AuthStore<ReqwestClient, Signal<AuthState>>;
pub type AppRecipeStore = RecipeStore<ReqwestClient, Signal<RecipeState>>;
pub type AppCommentStore = CommentStore<ReqwestClient, Signal<CommentState>>;

/// The auth store. Panics outside [`AppProvider`].
pub fn use_auth_store() -> AppAuthStore {
    use_context::<AppAuthStore>()
}

pub fn use_recipe_store() -> AppRecipeStore {
    use_context::<AppRecipeStore>()
}

pub fn use_comment_store() -> AppCommentStore {
    use_context::<AppCommentStore>()
}

/// The services the stores were built from, for code that needs the session.
pub fn use_services() -> AppServices<ReqwestClient> {
    use_context::<AppServices<ReqwestClient>>()
}

/// Provider component that owns the three stores.
/// Wrap your app with this component; the auth store starts from the
/// persisted session.
#[component]
pub fn AppProvider(config: ClientConfig, children: Element) -> Element {
    let services = use_hook(|| AppServices::for_platform(&config));

    let auth_state = use_signal(|| AuthState::from_session(&services.session));
    let recipe_state = use_signal(RecipeState::default);
    let comment_state = use_signal(CommentState::default);

    use_context_provider(|| services.clone());
    use_context_provider(|| AuthStore::new(services.auth.clone(), auth_state));
    use_context_provider(|| RecipeStore::new(services.recipes.clone(), recipe_state));
    use_context_provider(|| CommentStore::new(services.comments.clone(), comment_state));

    rsx! {
        {children}
    }
}
