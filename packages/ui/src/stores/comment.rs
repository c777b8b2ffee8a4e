//! Comment store: the comment thread of the recipe being viewed.

use api::{ApiError, CommentService, HttpClient};
use store::cache::{self, CacheOutcome, Synced};
use store::{Comment, CommentDraft, EncodedId};

use super::{with_async, RequestStatus, StateCell, Tracked};

const FETCH_FAILED: &str = "Failed to fetch comments";
const CREATE_FAILED: &str = "Failed to create comment";
const UPDATE_FAILED: &str = "Failed to update comment";
const DELETE_FAILED: &str = "Failed to delete comment";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentState {
    pub comments: Vec<Comment>,
    pub status: RequestStatus,
}

impl Tracked for CommentState {
    fn status(&self) -> &RequestStatus {
        &self.status
    }
    fn status_mut(&mut self) -> &mut RequestStatus {
        &mut self.status
    }
}

#[derive(Clone, Debug)]
pub struct CommentStore<H, C> {
    service: CommentService<H>,
    state: C,
}

impl<H: HttpClient, C: StateCell<CommentState>> CommentStore<H, C> {
    pub fn new(service: CommentService<H>, state: C) -> Self {
        Self { service, state }
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    /// Replace the cached thread with the comments of `recipe`.
    pub async fn fetch_recipe_comments(&self, recipe: &EncodedId) -> Result<Vec<Comment>, ApiError> {
        with_async(&self.state, FETCH_FAILED, async {
            let comments: Vec<Comment> = self.service.list(recipe).await?.json()?;
            self.state
                .update_state(|s| cache::replace_all(&mut s.comments, comments.clone()));
            Ok(comments)
        })
        .await
    }

    pub async fn create_comment(&self, draft: &CommentDraft) -> Result<Comment, ApiError> {
        with_async(&self.state, CREATE_FAILED, async {
            let comment: Comment = self.service.create(draft).await?.json()?;
            let outcome = self
                .state
                .update_state(|s| cache::append(&mut s.comments, comment.clone()));
            tracing::debug!("Comment {} cached: {:?}", comment.encoded_id, outcome);
            Ok(comment)
        })
        .await
    }

    pub async fn update_comment(
        &self,
        id: &EncodedId,
        draft: &CommentDraft,
    ) -> Result<Synced<Comment>, ApiError> {
        with_async(&self.state, UPDATE_FAILED, async {
            let comment: Comment = self.service.update(id, draft).await?.json()?;
            let outcome = self
                .state
                .update_state(|s| cache::merge(&mut s.comments, comment.clone()));
            if outcome.is_missing() {
                tracing::warn!("Comment {} is not cached; thread left unchanged", id);
            }
            Ok(Synced {
                entity: comment,
                cache: outcome,
            })
        })
        .await
    }

    /// Delete on the server, then drop the comment from the thread.
    pub async fn delete_comment(&self, id: &EncodedId) -> Result<CacheOutcome, ApiError> {
        with_async(&self.state, DELETE_FAILED, async {
            self.service.delete(id).await?;
            Ok(self
                .state
                .update_state(|s| cache::remove(&mut s.comments, id)))
        })
        .await
    }

    pub fn reset_state(&self) {
        self.state.update_state(|s| *s = CommentState::default());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::fixtures::{cell, comment_json, config, http, logged_in_session, Cell};
    use api::testing::MockHttp;
    use api::Method;
    use serde_json::json;

    fn store(http: &MockHttp) -> CommentStore<MockHttp, Cell<CommentState>> {
        let service = CommentService::new(http.clone(), &config(), logged_in_session());
        CommentStore::new(service, cell(CommentState::default()))
    }

    fn contents(store: &CommentStore<MockHttp, Cell<CommentState>>) -> Vec<String> {
        store
            .state()
            .snapshot()
            .comments
            .into_iter()
            .map(|c| c.content)
            .collect()
    }

    fn recipe() -> EncodedId {
        EncodedId::new("r1")
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let http = http();
        http.reply_json(200, &json!([comment_json("c1", "Test comment", 1)]));
        let comments = store(&http);

        let fetched = comments.fetch_recipe_comments(&recipe()).await.unwrap();

        assert_eq!(fetched.len(), 1);
        assert_eq!(contents(&comments), vec!["Test comment"]);
        assert_eq!(comments.state().snapshot().status, RequestStatus::default());
    }

    #[tokio::test]
    async fn test_fetch_failure() {
        let http = http();
        http.fail(ApiError::Transport("Network Error".to_string()));
        let comments = store(&http);

        let err = comments.fetch_recipe_comments(&recipe()).await.unwrap_err();

        assert_eq!(err.to_string(), "Network Error");
        let status = comments.state().snapshot().status;
        assert!(!status.loading);
        assert_eq!(status.error.as_deref(), Some("Network Error"));
    }

    #[tokio::test]
    async fn test_fetch_twice_is_stable() {
        let http = http();
        let payload = json!([comment_json("c1", "First", 1), comment_json("c2", "Second", 2)]);
        http.reply_json(200, &payload);
        http.reply_json(200, &payload);
        let comments = store(&http);

        comments.fetch_recipe_comments(&recipe()).await.unwrap();
        let first = comments.state().snapshot().comments;
        comments.fetch_recipe_comments(&recipe()).await.unwrap();

        assert_eq!(comments.state().snapshot().comments, first);
        assert_eq!(contents(&comments), vec!["First", "Second"]);
    }

    #[tokio::test]
    async fn test_create_appends() {
        let http = http();
        http.reply_json(200, &json!([comment_json("c1", "Test comment", 1)]));
        http.reply_json(201, &comment_json("c2", "New comment", 1));
        let comments = store(&http);

        comments.fetch_recipe_comments(&recipe()).await.unwrap();
        let created = comments
            .create_comment(&CommentDraft::new("New comment", recipe()))
            .await
            .unwrap();

        assert_eq!(created.encoded_id, EncodedId::new("c2"));
        assert_eq!(contents(&comments), vec!["Test comment", "New comment"]);
    }

    #[tokio::test]
    async fn test_create_failure_uses_fallback() {
        let http = http();
        http.fail(ApiError::Transport(String::new()));
        let comments = store(&http);

        assert!(comments
            .create_comment(&CommentDraft::new("New comment", recipe()))
            .await
            .is_err());

        assert_eq!(
            comments.state().snapshot().status.error.as_deref(),
            Some("Failed to create comment")
        );
        assert!(comments.state().snapshot().comments.is_empty());
    }

    #[tokio::test]
    async fn test_update_merges_in_place() {
        let http = http();
        http.reply_json(
            200,
            &json!([comment_json("c1", "Original comment", 1), comment_json("c2", "Other", 2)]),
        );
        http.reply_json(200, &comment_json("c1", "Updated comment", 1));
        let comments = store(&http);

        comments.fetch_recipe_comments(&recipe()).await.unwrap();
        let synced = comments
            .update_comment(
                &EncodedId::new("c1"),
                &CommentDraft::new("Updated comment", recipe()),
            )
            .await
            .unwrap();

        assert_eq!(synced.cache, CacheOutcome::Merged);
        assert_eq!(contents(&comments), vec!["Updated comment", "Other"]);
    }

    #[tokio::test]
    async fn test_update_failure_keeps_original() {
        let http = http();
        http.reply_json(200, &json!([comment_json("c1", "Original comment", 1)]));
        http.fail(ApiError::Transport("Update failed".to_string()));
        let comments = store(&http);

        comments.fetch_recipe_comments(&recipe()).await.unwrap();
        let result = comments
            .update_comment(
                &EncodedId::new("c1"),
                &CommentDraft::new("Updated comment", recipe()),
            )
            .await;

        assert!(result.is_err());
        assert_eq!(contents(&comments), vec!["Original comment"]);
        assert_eq!(
            comments.state().snapshot().status.error.as_deref(),
            Some("Update failed")
        );
    }

    #[tokio::test]
    async fn test_update_of_uncached_comment_reports_missing() {
        let http = http();
        http.reply_json(200, &comment_json("zzz", "Elsewhere", 1));
        let comments = store(&http);

        let synced = comments
            .update_comment(&EncodedId::new("zzz"), &CommentDraft::new("Elsewhere", recipe()))
            .await
            .unwrap();

        assert!(synced.cache.is_missing());
        assert!(comments.state().snapshot().comments.is_empty());
    }

    #[tokio::test]
    async fn test_delete_removes_after_success() {
        let http = http();
        http.reply_json(200, &json!([comment_json("c1", "Test comment", 1)]));
        http.reply(204, "");
        let comments = store(&http);

        comments.fetch_recipe_comments(&recipe()).await.unwrap();
        let outcome = comments.delete_comment(&EncodedId::new("c1")).await.unwrap();

        assert_eq!(outcome, CacheOutcome::Removed(1));
        assert!(comments.state().snapshot().comments.is_empty());
        assert_eq!(http.count(Method::Delete), 1);
    }

    #[tokio::test]
    async fn test_delete_failure_keeps_comment() {
        let http = http();
        http.reply_json(200, &json!([comment_json("c1", "Test comment", 1)]));
        http.fail(ApiError::Transport(String::new()));
        let comments = store(&http);

        comments.fetch_recipe_comments(&recipe()).await.unwrap();
        assert!(comments.delete_comment(&EncodedId::new("c1")).await.is_err());

        assert_eq!(contents(&comments), vec!["Test comment"]);
        assert_eq!(
            comments.state().snapshot().status.error.as_deref(),
            Some("Failed to delete comment")
        );
    }

    #[tokio::test]
    async fn test_reset_state() {
        let http = http();
        http.reply(500, "");
        let comments = store(&http);

        let _ = comments.fetch_recipe_comments(&recipe()).await;
        comments.reset_state();

        assert_eq!(comments.state().snapshot(), CommentState::default());
    }
}
