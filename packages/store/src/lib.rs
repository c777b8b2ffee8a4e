pub mod cache;
pub mod config;
pub mod models;
pub mod session;

mod memory;
pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
mod file_store;
#[cfg(not(target_arch = "wasm32"))]
pub use file_store::FileStorage;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local_storage;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local_storage::LocalStorage;

pub use cache::{CacheOutcome, Keyed, Synced};
pub use config::ClientConfig;
pub use models::{
    AuthUser, Comment, CommentAuthor, CommentDraft, EncodedId, ImageUpload, Ingredient,
    NameRef, NewUser, Recipe, RecipeDraft, RecipeFilters, RecipeImage, Tag, TokenGrant, User,
    UserId, UserUpdate,
};
pub use session::{Session, SessionStorage};
