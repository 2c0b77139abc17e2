//! Modal Host Component
//!
//! Resolves the context's modal intent into a dialog. Intents carry only
//! serializable data; this dispatcher is the single place behavior attaches.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{ListForm, TaskForm};
use crate::context::AppContext;
use crate::models::ModalIntent;
use crate::session::{self, use_session};
use crate::store::{store_remove_list, store_remove_task, use_app_store};

#[component]
pub fn ModalHost() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.modal.get().map(|intent| {
            let body = match intent {
                ModalIntent::NewTask { list_id } => {
                    view! { <TaskForm list_id=list_id.unwrap_or_default() /> }.into_any()
                }
                ModalIntent::EditTask { task } => {
                    view! { <TaskForm task=task /> }.into_any()
                }
                ModalIntent::ConfirmDeleteTask { task_id, task_name } => {
                    view! { <ConfirmDeleteTask task_id=task_id task_name=task_name /> }.into_any()
                }
                ModalIntent::NewList => view! { <ListForm /> }.into_any(),
                ModalIntent::EditList { list } => view! { <ListForm list=list /> }.into_any(),
                ModalIntent::ConfirmDeleteList { list_id, title } => {
                    view! { <ConfirmDeleteList list_id=list_id title=title /> }.into_any()
                }
                ModalIntent::ConfirmDeleteAccount => {
                    view! { <ConfirmDeleteAccount /> }.into_any()
                }
            };
            view! {
                <div class="modal-backdrop" on:click=move |_| ctx.close_modal()>
                    <div class="modal" on:click=|ev| ev.stop_propagation()>
                        {body}
                    </div>
                </div>
            }
        })}
    }
}

#[component]
fn ConfirmDeleteTask(task_id: String, task_name: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_confirm = {
        let task_id = task_id.clone();
        move |_| {
            let task_id = task_id.clone();
            spawn_local(async move {
                match api::tasks::delete_task(&task_id).await {
                    Ok(()) => {
                        store_remove_task(&store, &task_id);
                        ctx.toast_success("Task deleted");
                    }
                    Err(err) => ctx.toast_error(err.to_string()),
                }
                ctx.close_modal();
            });
        }
    };

    view! {
        <div class="confirm-dialog">
            <p>{format!("Delete task \"{}\"?", task_name)}</p>
            <button class="danger-btn" on:click=on_confirm>
                "Delete"
            </button>
            <button class="cancel-btn" on:click=move |_| ctx.close_modal()>
                "Cancel"
            </button>
        </div>
    }
}

#[component]
fn ConfirmDeleteList(list_id: String, title: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_confirm = {
        let list_id = list_id.clone();
        move |_| {
            let list_id = list_id.clone();
            spawn_local(async move {
                match api::lists::delete_list(&list_id).await {
                    Ok(()) => {
                        store_remove_list(&store, &list_id);
                        if ctx.selected_list.get_untracked().as_deref() == Some(list_id.as_str()) {
                            ctx.selected_list.set(None);
                        }
                        // Server cascades the list's tasks; refetch the collection
                        ctx.reload();
                        ctx.toast_success("List deleted");
                    }
                    Err(err) => ctx.toast_error(err.to_string()),
                }
                ctx.close_modal();
            });
        }
    };

    view! {
        <div class="confirm-dialog">
            <p>{format!("Delete list \"{}\" and all of its tasks?", title)}</p>
            <button class="danger-btn" on:click=on_confirm>
                "Delete"
            </button>
            <button class="cancel-btn" on:click=move |_| ctx.close_modal()>
                "Cancel"
            </button>
        </div>
    }
}

#[component]
fn ConfirmDeleteAccount() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let on_confirm = move |_| {
        spawn_local(async move {
            match api::users::delete_me().await {
                Ok(()) => {
                    ctx.close_modal();
                    session::logout(&session);
                }
                Err(err) => {
                    ctx.toast_error(err.to_string());
                    ctx.close_modal();
                }
            }
        });
    };

    view! {
        <div class="confirm-dialog">
            <p>"Delete your account? This cannot be undone."</p>
            <button class="danger-btn" on:click=on_confirm>
                "Delete account"
            </button>
            <button class="cancel-btn" on:click=move |_| ctx.close_modal()>
                "Cancel"
            </button>
        </div>
    }
}
