//! Token authentication against the `user/` resources.

mod header;
mod service;

pub use header::{auth_header, AUTHORIZATION};
pub use service::AuthService;
