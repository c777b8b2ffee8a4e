//! Authorization header derived from the stored session.

use store::AuthUser;

use crate::http::Headers;

pub const AUTHORIZATION: &str = "Authorization";

/// `{Authorization: "Token <token>"}` for a stored user, empty otherwise.
pub fn auth_header(user: Option<&AuthUser>) -> Headers {
    let mut headers = Headers::new();
    if let Some(user) = user.filter(|u| !u.token.is_empty()) {
        headers.insert(AUTHORIZATION.to_string(), format!("Token {}", user.token));
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{User, UserId};

    fn user_with_token(token: &str) -> AuthUser {
        AuthUser::new(
            User {
                id: UserId(1),
                email: "user@example.com".to_string(),
                name: String::new(),
            },
            token,
        )
    }

    #[test]
    fn test_header_for_stored_user() {
        let headers = auth_header(Some(&user_with_token("test-token")));
        assert_eq!(headers.len(), 1);
        assert_eq!(headers[AUTHORIZATION], "Token test-token");
    }

    #[test]
    fn test_no_user_no_header() {
        assert!(auth_header(None).is_empty());
    }

    #[test]
    fn test_empty_token_no_header() {
        assert!(auth_header(Some(&user_with_token(""))).is_empty());
    }
}
