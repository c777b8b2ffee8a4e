//! # Reactive stores
//!
//! Each store pairs one API service with a piece of observable state. The
//! state lives behind a [`StateCell`], which is a Dioxus [`Signal`] in the app
//! and an `Rc<RefCell<_>>` in tests, so the action logic never depends on a
//! running renderer.
//!
//! Every action goes through [`with_async`]:
//!
//! 1. clear the previous error and raise `loading`
//! 2. run the request (and the cache mutation that follows it)
//! 3. on failure store the error message, or the action's fallback when the
//!    message is empty, and hand the error back to the caller
//! 4. lower `loading` on every exit path, including a dropped future

use std::cell::RefCell;
use std::future::Future;
use std::marker::PhantomData;
use std::rc::Rc;

use api::ApiError;
use dioxus::prelude::*;

mod auth;
mod comment;
mod recipe;

pub use auth::{AuthState, AuthStore};
pub use comment::{CommentState, CommentStore};
pub use recipe::{RecipeState, RecipeStore};

/// Fallback shown by the auth and recipe stores.
pub const GENERIC_ERROR: &str = "An error occurred";

/// Shared-mutable container for store state.
pub trait StateCell<T> {
    /// Read the state without subscribing the caller to changes.
    fn view_state<R>(&self, f: impl FnOnce(&T) -> R) -> R;

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    fn snapshot(&self) -> T
    where
        T: Clone,
    {
        self.view_state(T::clone)
    }
}

impl<T> StateCell<T> for Rc<RefCell<T>> {
    fn view_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.borrow())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.borrow_mut())
    }
}

impl<T: 'static> StateCell<T> for Signal<T> {
    fn view_state<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.peek())
    }

    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut signal = *self;
        let mut state = signal.write();
        f(&mut state)
    }
}

/// The per-store request flags.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestStatus {
    pub loading: bool,
    pub error: Option<String>,
}

/// Store state that carries a [`RequestStatus`].
pub trait Tracked {
    fn status(&self) -> &RequestStatus;
    fn status_mut(&mut self) -> &mut RequestStatus;
}

/// Lowers `loading` when dropped.
struct Release<'a, S: Tracked, C: StateCell<S>> {
    cell: &'a C,
    _state: PhantomData<fn(&mut S)>,
}

impl<S: Tracked, C: StateCell<S>> Drop for Release<'_, S, C> {
    fn drop(&mut self) {
        self.cell.update_state(|s| s.status_mut().loading = false);
    }
}

/// Run `action` with the loading/error bookkeeping described in the module docs.
pub async fn with_async<S, C, T, F>(cell: &C, fallback: &str, action: F) -> Result<T, ApiError>
where
    S: Tracked,
    C: StateCell<S>,
    F: Future<Output = Result<T, ApiError>>,
{
    cell.update_state(|s| {
        let status = s.status_mut();
        status.error = None;
        status.loading = true;
    });
    let _release = Release {
        cell,
        _state: PhantomData,
    };

    action.await.map_err(|e| {
        let message = e.message_or(fallback);
        tracing::warn!("{}: {}", fallback, message);
        cell.update_state(|s| s.status_mut().error = Some(message));
        e
    })
}
