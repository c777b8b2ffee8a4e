//! Error taxonomy shared by every service call.

use thiserror::Error;

/// Why an API call failed.
///
/// Stores surface [`ApiError::message_or`] on their `error` field and hand the
/// error itself back to the caller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("{0}")]
    Transport(String),

    /// The server answered outside the 2xx range.
    #[error("Request failed with status code {status}")]
    Status { status: u16, body: String },

    /// A local check failed before anything was sent.
    #[error("{0}")]
    Precondition(String),

    /// A 2xx body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn not_authenticated() -> Self {
        ApiError::Precondition("User not authenticated".to_string())
    }

    /// HTTP status code for [`ApiError::Status`].
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The display message, or `fallback` when it is blank.
    pub fn message_or(&self, fallback: &str) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            fallback.to_string()
        } else {
            message
        }
    }
}
