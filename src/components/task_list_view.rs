//! Task List View Component
//!
//! Task rows with sort selector, archive toggle, overdue badges (exact
//! timestamp policy), status cycling and per-row actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{ModalIntent, Priority, Task, TaskStatus};
use crate::store::{store_update_task, use_app_store, AppStateStoreFields};
use crate::views::{self, SortMode};
use crate::components::ListSidebar;

const SORT_OPTIONS: &[(SortMode, &str)] = &[
    (SortMode::Recent, "Recent"),
    (SortMode::DueDate, "Due date"),
    (SortMode::Priority, "Priority"),
];

#[component]
pub fn TaskListView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (sort_mode, set_sort_mode) = signal(SortMode::Recent);
    let (show_archived, set_show_archived) = signal(false);

    let visible_tasks = Memo::new(move |_| {
        let (active, archived) = views::partition_archived(&store.tasks().get());
        let mut tasks = if show_archived.get() { archived } else { active };
        if let Some(list_id) = ctx.selected_list.get() {
            tasks.retain(|task| task.list_id.as_deref() == Some(list_id.as_str()));
        }
        views::sort_tasks(&tasks, sort_mode.get())
    });

    view! {
        <div class="task-page">
            <ListSidebar />

            <div class="task-list-view">
                <div class="task-toolbar">
                    <h2>{move || if show_archived.get() { "Archive" } else { "Tasks" }}</h2>

                    {SORT_OPTIONS
                        .iter()
                        .map(|(mode, label)| {
                            let mode = *mode;
                            let is_active = move || sort_mode.get() == mode;
                            view! {
                                <button
                                    class=move || if is_active() { "sort-btn active" } else { "sort-btn" }
                                    on:click=move |_| set_sort_mode.set(mode)
                                >
                                    {*label}
                                </button>
                            }
                        })
                        .collect_view()}

                    <button
                        class="archive-toggle"
                        on:click=move |_| set_show_archived.update(|v| *v = !*v)
                    >
                        {move || if show_archived.get() { "Show active" } else { "Show archive" }}
                    </button>

                    <button
                        class="new-task-btn"
                        on:click=move |_| {
                            ctx.open_modal(ModalIntent::NewTask {
                                list_id: ctx.selected_list.get(),
                            })
                        }
                    >
                        "+ New task"
                    </button>
                </div>

                <Show
                    when=move || !visible_tasks.get().is_empty()
                    fallback=|| view! { <p class="empty-hint">"No tasks here"</p> }
                >
                    <ul class="task-list">
                        <For
                            each=move || visible_tasks.get()
                            key=|task| task.id.clone()
                            children=move |task| view! { <TaskRow task=task /> }
                        />
                    </ul>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let overdue = views::is_overdue_at(&task, chrono::Utc::now());
    let date_format = move || store.settings().get().date_format;
    let due = task.due_date.clone();

    let status_label = match task.status {
        TaskStatus::Todo => "To do",
        TaskStatus::InProgress => "In progress",
        TaskStatus::Done => "Done",
    };
    let priority_class = match task.priority {
        Priority::High => "priority high",
        Priority::Medium => "priority medium",
        Priority::Low => "priority low",
    };

    let toggle_status = {
        let id = task.id.clone();
        move |_| {
            let id = id.clone();
            spawn_local(async move {
                match api::tasks::toggle_status(&id).await {
                    Ok(updated) => store_update_task(&store, updated),
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("[API] toggle status failed: {}", err).into(),
                        );
                    }
                }
            });
        }
    };

    let toggle_archived = {
        let id = task.id.clone();
        move |_| {
            let id = id.clone();
            spawn_local(async move {
                match api::tasks::toggle_archived(&id).await {
                    Ok(updated) => store_update_task(&store, updated),
                    Err(err) => {
                        web_sys::console::warn_1(
                            &format!("[API] toggle archived failed: {}", err).into(),
                        );
                    }
                }
            });
        }
    };

    // Deletion goes through the modal confirm, same as lists and accounts
    let request_delete = {
        let id = task.id.clone();
        let name = task.task_name.clone();
        move |_| {
            ctx.open_modal(ModalIntent::ConfirmDeleteTask {
                task_id: id.clone(),
                task_name: name.clone(),
            })
        }
    };

    let edit_task = {
        let task = task.clone();
        move |_| ctx.open_modal(ModalIntent::EditTask { task: task.clone() })
    };

    view! {
        <li class="task-row">
            <button class="status-btn" on:click=toggle_status>
                {status_label}
            </button>
            <span class="task-name" on:click=edit_task>
                {task.task_name.clone()}
            </span>
            <span class=priority_class></span>
            <span class="due-date">
                {move || views::format_due_date(due.as_deref(), date_format())}
            </span>
            <Show when=move || overdue>
                <span class="overdue-badge">"Overdue"</span>
            </Show>
            <button class="archive-btn" on:click=toggle_archived>
                {if task.archived { "Unarchive" } else { "Archive" }}
            </button>
            <button class="delete-btn" on:click=request_delete>
                "Delete"
            </button>
        </li>
    }
}
