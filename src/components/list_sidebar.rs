//! List Sidebar Component
//!
//! Lists with color markers and favorites; selecting a list filters the task
//! view. List deletion cascades to tasks server-side, so a delete reloads
//! both collections.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{ModalIntent, TaskList};
use crate::store::{store_update_list, use_app_store, AppStateStoreFields};

#[component]
pub fn ListSidebar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <aside class="list-sidebar">
            <button
                class=move || {
                    if ctx.selected_list.get().is_none() { "list-entry active" } else { "list-entry" }
                }
                on:click=move |_| ctx.selected_list.set(None)
            >
                "All tasks"
            </button>

            <For
                each=move || store.lists().get()
                key=|list| list.id.clone()
                children=move |list| view! { <ListEntry list=list /> }
            />

            <button
                class="new-list-btn"
                on:click=move |_| ctx.open_modal(ModalIntent::NewList)
            >
                "+ New list"
            </button>
        </aside>
    }
}

#[component]
fn ListEntry(list: TaskList) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let id = list.id.clone();
    let is_selected = {
        let id = id.clone();
        move || ctx.selected_list.get().as_deref() == Some(id.as_str())
    };

    let select = {
        let id = id.clone();
        move |_| ctx.selected_list.set(Some(id.clone()))
    };

    let toggle_favorite = {
        let list = list.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            let list = list.clone();
            spawn_local(async move {
                let args = api::lists::ListArgs {
                    title: &list.title,
                    description: list.description.as_deref(),
                    color: &list.color,
                    is_favorite: !list.is_favorite,
                };
                match api::lists::update_list(&list.id, &args).await {
                    Ok(updated) => store_update_list(&store, updated),
                    Err(err) => ctx.toast_error(err.to_string()),
                }
            });
        }
    };

    let open_edit = {
        let list = list.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            ctx.open_modal(ModalIntent::EditList { list: list.clone() });
        }
    };

    let confirm_delete = {
        let id = list.id.clone();
        let title = list.title.clone();
        move |ev: web_sys::MouseEvent| {
            ev.stop_propagation();
            ctx.open_modal(ModalIntent::ConfirmDeleteList {
                list_id: id.clone(),
                title: title.clone(),
            });
        }
    };

    view! {
        <div
            class=move || if is_selected() { "list-entry active" } else { "list-entry" }
            on:click=select
        >
            <span class="list-color" style=format!("background-color: {}", list.color)></span>
            <span class="list-title">{list.title.clone()}</span>
            <button class="favorite-btn" on:click=toggle_favorite>
                {if list.is_favorite { "★" } else { "☆" }}
            </button>
            <button class="edit-btn" on:click=open_edit>
                "✎"
            </button>
            <button class="list-delete-btn" on:click=confirm_delete>
                "×"
            </button>
        </div>
    }
}
