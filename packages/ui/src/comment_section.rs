//! The comment thread shown under a recipe.

use api::ReqwestClient;
use chrono::{DateTime, Duration, Utc};
use chrono_humanize::HumanTime;
use dioxus::prelude::*;
use store::{Comment, EncodedId};

use crate::comment_controller::{
    owns, CommentController, CommentMode, CommentThread, CONFIRM_DELETE,
};
use crate::icons::FaTrashCan;
use crate::provider::{use_auth_store, use_comment_store};
use crate::stores::CommentState;
use crate::Icon;

type ThreadController =
    CommentController<ReqwestClient, Signal<CommentState>, Signal<CommentThread>>;

/// "5 minutes ago" style label for a timestamp.
pub fn relative_time(at: DateTime<Utc>) -> String {
    HumanTime::from(whole_seconds(at - Utc::now())).to_string()
}

fn whole_seconds(delta: Duration) -> Duration {
    let seconds = delta.num_milliseconds() as f64 / 1000.0;
    Duration::seconds(seconds.round() as i64)
}

/// The placeholder shown above the list: `(class, text)`.
fn list_notice(state: &CommentState) -> Option<(&'static str, &'static str)> {
    if state.status.loading {
        Some(("loading-comments", "Loading comments..."))
    } else if state.comments.is_empty() {
        Some(("comments-empty", "No comments yet."))
    } else {
        None
    }
}

/// Comments of one recipe with the composer and per-comment edit/delete.
#[component]
pub fn CommentSection(recipe: EncodedId) -> Element {
    // Track the recipe in a signal so the loader re-runs on route param change
    let mut recipe_signal = use_signal(|| recipe.clone());
    if *recipe_signal.peek() != recipe {
        recipe_signal.set(recipe.clone());
    }

    let auth = use_auth_store();
    let comments = use_comment_store();
    let mut thread = use_signal(CommentThread::default);

    let loader_store = comments.clone();
    let _loader = use_resource(move || {
        let controller = CommentController::new(loader_store.clone(), thread, recipe_signal());
        async move {
            if let Err(e) = controller.load().await {
                tracing::error!("Failed to load comments: {}", e);
            }
        }
    });

    let controller: ThreadController = CommentController::new(comments.clone(), thread, recipe);
    let user = auth.state().read().user.clone();
    let state = comments.state().read().clone();
    let composer = thread.read().composer().to_string();

    let submit = controller.clone();
    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let controller = submit.clone();
        spawn(async move {
            if let Err(e) = controller.submit().await {
                tracing::error!("Failed to post comment: {}", e);
            }
        });
    };

    rsx! {
        section {
            class: "comments",
            h3 { "Comments" }

            if let Some(err) = state.status.error.clone() {
                div { class: "error", "{err}" }
            }

            if let Some((class, text)) = list_notice(&state) {
                p { class: "{class}", "{text}" }
            }

            ul {
                class: "comment-list",
                for comment in state.comments.iter() {
                    {comment_item(&controller, comment, owns(user.as_ref(), comment))}
                }
            }

            if user.is_some() {
                form {
                    class: "comment-composer",
                    onsubmit: handle_submit,
                    textarea {
                        placeholder: "Write a comment...",
                        value: "{composer}",
                        oninput: move |evt: FormEvent| thread.write().set_composer(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        disabled: state.status.loading,
                        "Post Comment"
                    }
                }
            } else {
                p {
                    class: "login-prompt",
                    Link { to: "/login", "Log in" }
                    " to join the discussion."
                }
            }
        }
    }
}

fn comment_item(controller: &ThreadController, comment: &Comment, owned: bool) -> Element {
    let id = comment.encoded_id.clone();
    let mode = controller.thread().read().mode(&id);
    let author = comment.user.display_name().to_string();
    let when = relative_time(comment.created_on);
    let content = comment.content.clone();

    let edit = {
        let mut thread = *controller.thread();
        let comment = comment.clone();
        move |_| thread.write().begin_edit(&comment)
    };
    let cancel = {
        let mut thread = *controller.thread();
        let id = id.clone();
        move |_| thread.write().cancel_edit(&id)
    };
    let input = {
        let mut thread = *controller.thread();
        let id = id.clone();
        move |evt: FormEvent| thread.write().edit_draft(&id, evt.value())
    };
    let save = {
        let controller = controller.clone();
        let id = id.clone();
        move |_| {
            let controller = controller.clone();
            let id = id.clone();
            spawn(async move {
                if let Err(e) = controller.save(&id).await {
                    tracing::error!("Failed to update comment {}: {}", id, e);
                }
            });
        }
    };
    let delete = {
        let controller = controller.clone();
        let id = id.clone();
        move |_| {
            let controller = controller.clone();
            let id = id.clone();
            spawn(async move {
                if let Err(e) = controller.delete(&id).await {
                    tracing::error!("Failed to delete comment {}: {}", id, e);
                }
            });
        }
    };

    let pending = mode == CommentMode::DeletePending;
    let delete_class = if pending { "confirm-delete" } else { "delete" };
    let delete_label = if pending { CONFIRM_DELETE } else { "Delete" };

    rsx! {
        li {
            key: "{id}",
            class: "comment",
            div {
                class: "comment-meta",
                span { class: "comment-author", "{author}" }
                span { class: "comment-time", "{when}" }
            }
            {match mode {
                CommentMode::Editing { draft } => rsx! {
                    textarea { value: "{draft}", oninput: input }
                    div {
                        class: "comment-actions",
                        button { class: "save", onclick: save, "Save" }
                        button { class: "cancel", onclick: cancel, "Cancel" }
                    }
                },
                _ => rsx! {
                    p { class: "comment-content", "{content}" }
                    if owned {
                        div {
                            class: "comment-actions",
                            button { class: "edit", onclick: edit, "Edit" }
                            button {
                                class: "{delete_class}",
                                onclick: delete,
                                Icon { icon: FaTrashCan, width: 14, height: 14 }
                                " {delete_label}"
                            }
                        }
                    }
                },
            }}
        }
    }
}
