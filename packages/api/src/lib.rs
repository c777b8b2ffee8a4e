//! # API crate: REST service wrappers for the recipe client
//!
//! Every call the frontend makes to the recipe REST API goes through this crate.
//! It owns the seam to the HTTP library, the error type, and one service per
//! resource family.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`http`] | [`HttpClient`] trait, [`ApiRequest`] / [`ApiResponse`], non-2xx rejection |
//! | [`client`] | [`ReqwestClient`], the production [`HttpClient`] |
//! | [`auth`] | Authorization header provider and [`AuthService`] (`user/`) |
//! | [`recipe`] | [`RecipeService`] (`recipe/recipes/`, `recipe/tags/`, `recipe/ingredients/`) |
//! | [`comment`] | [`CommentService`] (`recipe/comments/`) |
//! | [`error`] | [`ApiError`] |
//! | `testing` | `MockHttp`, a recording fake (`testing` feature) |
//!
//! Services read the bearer token from an explicit [`store::Session`] passed at
//! construction and return the raw response; decoding and caching belong to the
//! UI stores.

pub mod auth;
pub mod client;
pub mod comment;
pub mod error;
pub mod http;
pub mod recipe;
#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use auth::{auth_header, AuthService};
pub use client::ReqwestClient;
pub use comment::CommentService;
pub use error::ApiError;
pub use http::{ApiRequest, ApiResponse, HttpClient, Method};
pub use recipe::{AttrKind, RecipeService};
