//! # Comment interaction state
//!
//! [`CommentThread`] holds the per-comment UI mode and the composer buffer for
//! one recipe's thread. It is plain data so the transitions can be tested
//! without a renderer:
//!
//! ```text
//! Viewing --Edit--> Editing{draft} --Save ok / Cancel--> Viewing
//! Viewing --Delete--> DeletePending --Delete--> (request) --> Viewing
//!                     DeletePending --Edit / distract--> Viewing
//! ```
//!
//! [`CommentController`] drives the transitions that need the network, through
//! the [`CommentStore`].

use std::collections::HashMap;

use api::{ApiError, HttpClient};
use store::cache::{CacheOutcome, Synced};
use store::{AuthUser, Comment, CommentDraft, EncodedId};

use crate::stores::{CommentState, CommentStore, StateCell};

/// Label of the delete control once armed.
pub const CONFIRM_DELETE: &str = "Confirm Delete";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CommentMode {
    #[default]
    Viewing,
    Editing {
        draft: String,
    },
    DeletePending,
}

/// Result of activating a comment's delete control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeleteStep {
    /// First activation: the control now asks for confirmation.
    Armed,
    /// Second activation: the delete should be sent.
    Confirmed,
}

/// Whether `user` may edit or delete `comment`. Never true without a user.
pub fn owns(user: Option<&AuthUser>, comment: &Comment) -> bool {
    user.is_some_and(|u| u.id() == comment.user.id)
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CommentThread {
    modes: HashMap<EncodedId, CommentMode>,
    composer: String,
}

impl CommentThread {
    pub fn mode(&self, id: &EncodedId) -> CommentMode {
        self.modes.get(id).cloned().unwrap_or_default()
    }

    /// Enter editing with the buffer filled from the comment's content.
    pub fn begin_edit(&mut self, comment: &Comment) {
        self.modes.insert(
            comment.encoded_id.clone(),
            CommentMode::Editing {
                draft: comment.content.clone(),
            },
        );
    }

    pub fn edit_draft(&mut self, id: &EncodedId, text: impl Into<String>) {
        if let Some(CommentMode::Editing { draft }) = self.modes.get_mut(id) {
            *draft = text.into();
        }
    }

    pub fn draft(&self, id: &EncodedId) -> Option<&str> {
        match self.modes.get(id) {
            Some(CommentMode::Editing { draft }) => Some(draft),
            _ => None,
        }
    }

    pub fn cancel_edit(&mut self, id: &EncodedId) {
        self.modes.remove(id);
    }

    pub fn press_delete(&mut self, id: &EncodedId) -> DeleteStep {
        match self.modes.get(id) {
            Some(CommentMode::DeletePending) => {
                self.modes.remove(id);
                DeleteStep::Confirmed
            }
            _ => {
                self.modes.insert(id.clone(), CommentMode::DeletePending);
                DeleteStep::Armed
            }
        }
    }

    /// Disarm every pending delete.
    pub fn distract(&mut self) {
        self.modes
            .retain(|_, mode| !matches!(mode, CommentMode::DeletePending));
    }

    pub fn composer(&self) -> &str {
        &self.composer
    }

    pub fn set_composer(&mut self, text: impl Into<String>) {
        self.composer = text.into();
    }
}

/// Network-backed transitions of one recipe's [`CommentThread`].
#[derive(Clone, Debug)]
pub struct CommentController<H, C, T> {
    store: CommentStore<H, C>,
    thread: T,
    recipe: EncodedId,
}

impl<H, C, T> CommentController<H, C, T>
where
    H: HttpClient,
    C: StateCell<CommentState>,
    T: StateCell<CommentThread>,
{
    pub fn new(store: CommentStore<H, C>, thread: T, recipe: EncodedId) -> Self {
        Self {
            store,
            thread,
            recipe,
        }
    }

    pub fn thread(&self) -> &T {
        &self.thread
    }

    /// Reload the thread, dropping any armed delete.
    pub async fn load(&self) -> Result<Vec<Comment>, ApiError> {
        self.thread.update_state(CommentThread::distract);
        self.store.fetch_recipe_comments(&self.recipe).await
    }

    /// Send the edit buffer. The comment stays in editing if the update fails.
    pub async fn save(&self, id: &EncodedId) -> Result<Option<Synced<Comment>>, ApiError> {
        let Some(draft) = self.thread.view_state(|t| t.draft(id).map(str::to_owned)) else {
            return Ok(None);
        };
        let body = CommentDraft::new(draft, self.recipe.clone());
        let synced = self.store.update_comment(id, &body).await?;
        self.thread.update_state(|t| t.cancel_edit(id));
        Ok(Some(synced))
    }

    /// Two-step delete. Only the confirming activation sends a request.
    pub async fn delete(&self, id: &EncodedId) -> Result<Option<CacheOutcome>, ApiError> {
        match self.thread.update_state(|t| t.press_delete(id)) {
            DeleteStep::Armed => Ok(None),
            DeleteStep::Confirmed => self.store.delete_comment(id).await.map(Some),
        }
    }

    /// Post the composer content. Blank input is ignored; the composer is
    /// cleared only once the comment exists.
    pub async fn submit(&self) -> Result<Option<Comment>, ApiError> {
        let content = self.thread.view_state(|t| t.composer().trim().to_owned());
        if content.is_empty() {
            return Ok(None);
        }
        let comment = self
            .store
            .create_comment(&CommentDraft::new(content, self.recipe.clone()))
            .await?;
        self.thread.update_state(|t| t.set_composer(String::new()));
        Ok(Some(comment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::fixtures::{cell, comment_json, config, http, logged_in_session, user, Cell};
    use api::testing::MockHttp;
    use api::{CommentService, Method};
    use serde_json::json;

    type Controller = CommentController<MockHttp, Cell<CommentState>, Cell<CommentThread>>;

    fn comment(id: &str, content: &str, owner: u64) -> Comment {
        serde_json::from_value(comment_json(id, content, owner)).unwrap()
    }

    fn controller(http: &MockHttp, comments: Vec<Comment>) -> Controller {
        let service = CommentService::new(http.clone(), &config(), logged_in_session());
        let state = cell(CommentState {
            comments,
            ..CommentState::default()
        });
        CommentController::new(
            CommentStore::new(service, state),
            cell(CommentThread::default()),
            EncodedId::new("r1"),
        )
    }

    fn cached(controller: &Controller) -> Vec<String> {
        controller
            .store
            .state()
            .snapshot()
            .comments
            .into_iter()
            .map(|c| c.content)
            .collect()
    }

    #[test]
    fn test_ownership() {
        let mine = comment("c1", "Test comment", 1);
        let theirs = comment("c2", "Another comment", 2);
        let me = user(1);

        assert!(owns(Some(&me), &mine));
        assert!(!owns(Some(&me), &theirs));
        assert!(!owns(None, &mine));
    }

    #[test]
    fn test_edit_then_cancel() {
        let c = comment("c1", "Test comment", 1);
        let mut thread = CommentThread::default();

        thread.begin_edit(&c);
        assert_eq!(thread.draft(&c.encoded_id), Some("Test comment"));
        thread.edit_draft(&c.encoded_id, "Changed");
        assert_eq!(
            thread.mode(&c.encoded_id),
            CommentMode::Editing {
                draft: "Changed".to_string()
            }
        );

        thread.cancel_edit(&c.encoded_id);
        assert_eq!(thread.mode(&c.encoded_id), CommentMode::Viewing);
    }

    #[test]
    fn test_edit_disarms_delete() {
        let c = comment("c1", "Test comment", 1);
        let mut thread = CommentThread::default();

        assert_eq!(thread.press_delete(&c.encoded_id), DeleteStep::Armed);
        thread.begin_edit(&c);
        assert!(matches!(thread.mode(&c.encoded_id), CommentMode::Editing { .. }));
        assert_eq!(thread.press_delete(&c.encoded_id), DeleteStep::Armed);
    }

    #[test]
    fn test_distract_only_touches_pending_deletes() {
        let a = comment("c1", "One", 1);
        let b = comment("c2", "Two", 1);
        let mut thread = CommentThread::default();

        thread.press_delete(&a.encoded_id);
        thread.begin_edit(&b);
        thread.distract();

        assert_eq!(thread.mode(&a.encoded_id), CommentMode::Viewing);
        assert!(matches!(thread.mode(&b.encoded_id), CommentMode::Editing { .. }));
    }

    #[test]
    fn test_modes_are_per_comment() {
        let mut thread = CommentThread::default();
        thread.press_delete(&EncodedId::new("c1"));
        assert_eq!(thread.mode(&EncodedId::new("c2")), CommentMode::Viewing);
    }

    #[tokio::test]
    async fn test_single_click_never_deletes() {
        let http = http();
        let controller = controller(&http, vec![comment("c1", "Test comment", 1)]);
        let id = EncodedId::new("c1");

        assert_eq!(controller.delete(&id).await.unwrap(), None);

        assert_eq!(http.count(Method::Delete), 0);
        assert_eq!(
            controller.thread().snapshot().mode(&id),
            CommentMode::DeletePending
        );
    }

    #[tokio::test]
    async fn test_second_click_deletes_once() {
        let http = http();
        http.reply(204, "");
        let controller = controller(&http, vec![comment("c1", "Test comment", 1)]);
        let id = EncodedId::new("c1");

        controller.delete(&id).await.unwrap();
        let outcome = controller.delete(&id).await.unwrap();

        assert_eq!(outcome, Some(CacheOutcome::Removed(1)));
        assert_eq!(http.count(Method::Delete), 1);
        assert!(cached(&controller).is_empty());
        assert_eq!(controller.thread().snapshot().mode(&id), CommentMode::Viewing);
    }

    #[tokio::test]
    async fn test_failed_delete_needs_fresh_confirmation() {
        let http = http();
        http.reply(500, "");
        let controller = controller(&http, vec![comment("c1", "Test comment", 1)]);
        let id = EncodedId::new("c1");

        controller.delete(&id).await.unwrap();
        assert!(controller.delete(&id).await.is_err());

        assert_eq!(cached(&controller), vec!["Test comment"]);
        assert_eq!(controller.delete(&id).await.unwrap(), None);
        assert_eq!(http.count(Method::Delete), 1);
    }

    #[tokio::test]
    async fn test_save_returns_to_viewing() {
        let http = http();
        http.reply_json(200, &comment_json("c1", "Updated comment", 1));
        let original = comment("c1", "Original comment", 1);
        let controller = controller(&http, vec![original.clone()]);

        controller.thread().update_state(|t| {
            t.begin_edit(&original);
            t.edit_draft(&original.encoded_id, "Updated comment");
        });
        let synced = controller.save(&original.encoded_id).await.unwrap();

        assert_eq!(synced.map(|s| s.cache), Some(CacheOutcome::Merged));
        assert_eq!(cached(&controller), vec!["Updated comment"]);
        assert_eq!(
            controller.thread().snapshot().mode(&original.encoded_id),
            CommentMode::Viewing
        );
        let request = http.last_request().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(
            request.body,
            api::http::Body::Json(json!({ "content": "Updated comment", "recipe": "r1" }))
        );
    }

    #[tokio::test]
    async fn test_failed_save_keeps_buffer() {
        let http = http();
        http.fail(ApiError::Transport("Update failed".to_string()));
        let original = comment("c1", "Original comment", 1);
        let controller = controller(&http, vec![original.clone()]);

        controller.thread().update_state(|t| {
            t.begin_edit(&original);
            t.edit_draft(&original.encoded_id, "Updated comment");
        });
        assert!(controller.save(&original.encoded_id).await.is_err());

        assert_eq!(cached(&controller), vec!["Original comment"]);
        assert_eq!(
            controller.thread().snapshot().draft(&original.encoded_id),
            Some("Updated comment")
        );
        assert_eq!(
            controller.store.state().snapshot().status.error.as_deref(),
            Some("Update failed")
        );
    }

    #[tokio::test]
    async fn test_save_without_edit_is_noop() {
        let http = http();
        let controller = controller(&http, vec![comment("c1", "Test comment", 1)]);

        assert_eq!(controller.save(&EncodedId::new("c1")).await.unwrap(), None);
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_submit_clears_composer_on_success() {
        let http = http();
        http.reply_json(201, &comment_json("c2", "New comment", 1));
        let controller = controller(&http, vec![comment("c1", "Test comment", 1)]);

        controller
            .thread()
            .update_state(|t| t.set_composer("New comment"));
        let created = controller.submit().await.unwrap();

        assert_eq!(created.map(|c| c.content), Some("New comment".to_string()));
        assert_eq!(controller.thread().snapshot().composer(), "");
        assert_eq!(cached(&controller), vec!["Test comment", "New comment"]);
    }

    #[tokio::test]
    async fn test_submit_failure_keeps_composer() {
        let http = http();
        http.reply(400, "");
        let controller = controller(&http, Vec::new());

        controller.thread().update_state(|t| t.set_composer("Hello"));
        assert!(controller.submit().await.is_err());

        assert_eq!(controller.thread().snapshot().composer(), "Hello");
    }

    #[tokio::test]
    async fn test_blank_submit_is_ignored() {
        let http = http();
        let controller = controller(&http, Vec::new());

        controller.thread().update_state(|t| t.set_composer("   "));
        assert_eq!(controller.submit().await.unwrap(), None);
        assert!(http.requests().is_empty());
    }

    #[tokio::test]
    async fn test_load_disarms_and_fetches() {
        let http = http();
        http.reply_json(200, &json!([comment_json("c1", "Test comment", 1)]));
        let controller = controller(&http, Vec::new());
        let id = EncodedId::new("c1");

        controller.thread().update_state(|t| {
            t.press_delete(&id);
        });
        controller.load().await.unwrap();

        assert_eq!(controller.thread().snapshot().mode(&id), CommentMode::Viewing);
        assert!(http.last_request().unwrap().url.ends_with("comments/?recipe=r1"));
        assert_eq!(cached(&controller), vec!["Test comment"]);
    }
}
