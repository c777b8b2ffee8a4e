//! Recording [`HttpClient`] for tests.
//!
//! Responses are queued up front and handed out in order; every request is kept
//! so assertions can inspect URL, headers and body. An empty queue answers with
//! a transport error.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use serde::Serialize;

use crate::error::ApiError;
use crate::http::{ApiRequest, ApiResponse, HttpClient, Method};

#[derive(Debug, Default)]
struct MockState {
    replies: VecDeque<Result<ApiResponse, ApiError>>,
    requests: Vec<ApiRequest>,
}

#[derive(Clone, Debug, Default)]
pub struct MockHttp {
    state: Arc<Mutex<MockState>>,
}

impl MockHttp {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut MockState) -> R) -> R {
        f(&mut self.state.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Queue a response with a raw body.
    pub fn reply(&self, status: u16, body: &str) {
        let response = ApiResponse::new(status, body);
        self.with_state(|s| s.replies.push_back(Ok(response)));
    }

    /// Queue a response with a JSON body.
    pub fn reply_json(&self, status: u16, value: &impl Serialize) {
        let response = ApiResponse::with_json(status, value);
        self.with_state(|s| s.replies.push_back(Ok(response)));
    }

    /// Queue a failure that never reaches the server.
    pub fn fail(&self, error: ApiError) {
        self.with_state(|s| s.replies.push_back(Err(error)));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.with_state(|s| s.requests.clone())
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.with_state(|s| s.requests.last().cloned())
    }

    /// Number of recorded requests using `method`.
    pub fn count(&self, method: Method) -> usize {
        self.with_state(|s| s.requests.iter().filter(|r| r.method == method).count())
    }
}

impl HttpClient for MockHttp {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.with_state(|s| {
            s.requests.push(request);
            s.replies
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no mock response queued".to_string())))
        })
    }
}
