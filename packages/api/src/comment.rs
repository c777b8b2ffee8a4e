//! Comment service: the `recipe/comments/` resource.

use store::config::ApiConfig;
use store::{CommentDraft, EncodedId, Session};

use crate::auth::auth_header;
use crate::error::ApiError;
use crate::http::{execute, with_query, ApiRequest, ApiResponse, HttpClient, Method};

#[derive(Clone, Debug)]
pub struct CommentService<H> {
    http: H,
    base: String,
    session: Session,
}

impl<H: HttpClient> CommentService<H> {
    pub fn new(http: H, config: &ApiConfig, session: Session) -> Self {
        Self {
            http,
            base: format!("{}comments/", config.recipe_url()),
            session,
        }
    }

    fn request(&self, method: Method, url: String) -> ApiRequest {
        ApiRequest::new(method, url).headers(auth_header(self.session.current_user().as_ref()))
    }

    /// All comments on one recipe.
    pub async fn list(&self, recipe: &EncodedId) -> Result<ApiResponse, ApiError> {
        let url = with_query(&self.base, &[("recipe", recipe.to_string())])?;
        execute(&self.http, self.request(Method::Get, url)).await
    }

    pub async fn create(&self, comment: &CommentDraft) -> Result<ApiResponse, ApiError> {
        let request = self.request(Method::Post, self.base.clone()).json(comment)?;
        execute(&self.http, request).await
    }

    pub async fn update(
        &self,
        id: &EncodedId,
        comment: &CommentDraft,
    ) -> Result<ApiResponse, ApiError> {
        let request = self
            .request(Method::Put, format!("{}{id}/", self.base))
            .json(comment)?;
        execute(&self.http, request).await
    }

    pub async fn delete(&self, id: &EncodedId) -> Result<ApiResponse, ApiError> {
        let request = self.request(Method::Delete, format!("{}{id}/", self.base));
        execute(&self.http, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::Body;
    use crate::testing::MockHttp;
    use serde_json::json;
    use store::{AuthUser, User, UserId};

    fn service(http: &MockHttp) -> CommentService<MockHttp> {
        let session = Session::in_memory();
        session.store(&AuthUser::new(
            User {
                id: UserId(1),
                email: "test@example.com".to_string(),
                name: "Test User".to_string(),
            },
            "test-token",
        ));
        CommentService::new(http.clone(), &ApiConfig::default(), session)
    }

    #[tokio::test]
    async fn test_list_filters_by_recipe() {
        let http = MockHttp::new();
        http.reply(200, "[{\"encoded_id\":\"c1\"}]");
        let comments = service(&http);

        let response = comments.list(&EncodedId::new("r1")).await.unwrap();
        assert_eq!(response.text(), "[{\"encoded_id\":\"c1\"}]");

        let request = http.last_request().unwrap();
        assert_eq!(request.method, Method::Get);
        assert!(request.url.ends_with("comments/?recipe=r1"));
        assert_eq!(request.headers["Authorization"], "Token test-token");
    }

    #[tokio::test]
    async fn test_create_posts_draft() {
        let http = MockHttp::new();
        http.reply(201, "{}");
        let comments = service(&http);

        let draft = CommentDraft::new("New comment", EncodedId::new("r1"));
        comments.create(&draft).await.unwrap();

        let request = http.last_request().unwrap();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "http://localhost:8000/api/recipe/comments/");
        assert_eq!(
            request.body,
            Body::Json(json!({ "content": "New comment", "recipe": "r1" }))
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_use_encoded_id() {
        let http = MockHttp::new();
        http.reply(200, "{}");
        http.reply(204, "");
        let comments = service(&http);
        let id = EncodedId::new("c1");

        comments
            .update(&id, &CommentDraft::new("Updated comment", EncodedId::new("r1")))
            .await
            .unwrap();
        comments.delete(&id).await.unwrap();

        let requests = http.requests();
        assert_eq!(requests[0].method, Method::Put);
        assert!(requests[0].url.ends_with("comments/c1/"));
        assert_eq!(requests[1].method, Method::Delete);
        assert!(requests[1].url.ends_with("comments/c1/"));
        assert_eq!(requests[1].headers["Authorization"], "Token test-token");
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let http = MockHttp::new();
        http.fail(ApiError::Transport("Network Error".to_string()));
        let comments = service(&http);

        let err = comments.delete(&EncodedId::new("c1")).await.unwrap_err();
        assert_eq!(err.to_string(), "Network Error");
    }
}
