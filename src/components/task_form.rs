//! Task Form Component
//!
//! Modal body for creating or editing a task. Defaults for new tasks come
//! from the user's settings.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{Priority, Task, TaskStatus};
use crate::store::{store_add_task, store_update_task, use_app_store, AppStateStoreFields};
use crate::validate;

const STATUS_OPTIONS: &[(&str, TaskStatus, &str)] = &[
    ("TODO", TaskStatus::Todo, "To do"),
    ("IN_PROGRESS", TaskStatus::InProgress, "In progress"),
    ("DONE", TaskStatus::Done, "Done"),
];

const PRIORITY_OPTIONS: &[(&str, Priority, &str)] = &[
    ("LOW", Priority::Low, "Low"),
    ("MEDIUM", Priority::Medium, "Medium"),
    ("HIGH", Priority::High, "High"),
];

fn status_from_value(value: &str) -> TaskStatus {
    STATUS_OPTIONS
        .iter()
        .find(|(key, _, _)| *key == value)
        .map(|(_, status, _)| *status)
        .unwrap_or(TaskStatus::Todo)
}

fn priority_from_value(value: &str) -> Priority {
    PRIORITY_OPTIONS
        .iter()
        .find(|(key, _, _)| *key == value)
        .map(|(_, priority, _)| *priority)
        .unwrap_or(Priority::Medium)
}

#[component]
pub fn TaskForm(
    #[prop(optional, into)] task: Option<Task>,
    /// Preselected list id; empty means no list
    #[prop(optional)] list_id: String,
) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();
    let settings = store.settings().get_untracked();

    let editing = task.clone();
    let (task_name, set_task_name) =
        signal(task.as_ref().map(|t| t.task_name.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        task.as_ref()
            .and_then(|t| t.description.clone())
            .unwrap_or_default(),
    );
    let (status, set_status) =
        signal(task.as_ref().map(|t| t.status).unwrap_or(settings.default_status));
    let (priority, set_priority) = signal(
        task.as_ref()
            .map(|t| t.priority)
            .unwrap_or(settings.default_priority),
    );
    // The date input wants the bare YYYY-MM-DD prefix
    let (due_date, set_due_date) = signal(
        task.as_ref()
            .and_then(|t| t.due_date.as_deref())
            .map(|raw| raw.get(..10).unwrap_or(raw).to_string())
            .unwrap_or_default(),
    );
    let (selected_list, set_selected_list) = signal(
        task.as_ref()
            .and_then(|t| t.list_id.clone())
            .unwrap_or(list_id),
    );
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = task_name.get();
        if let Err(message) = validate::validate_task_name(&name) {
            set_error.set(Some(message));
            return;
        }

        let desc = description.get();
        let due = due_date.get();
        let list = selected_list.get();
        let status_value = status.get();
        let priority_value = priority.get();
        let editing = editing.clone();

        spawn_local(async move {
            let desc_opt = (!desc.is_empty()).then_some(desc.as_str());
            let due_opt = (!due.is_empty()).then_some(due.as_str());
            let list_opt = (!list.is_empty()).then_some(list.as_str());

            let result = match editing {
                Some(existing) => {
                    api::tasks::update_task(&api::tasks::UpdateTaskArgs {
                        id: &existing.id,
                        task_name: &name,
                        description: desc_opt,
                        status: status_value,
                        priority: priority_value,
                        due_date: due_opt,
                        list_id: list_opt,
                    })
                    .await
                    .map(|updated| {
                        store_update_task(&store, updated);
                    })
                }
                None => api::tasks::create_task(&api::tasks::CreateTaskArgs {
                    task_name: &name,
                    description: desc_opt,
                    status: status_value,
                    priority: priority_value,
                    due_date: due_opt,
                    list_id: list_opt,
                })
                .await
                .map(|created| {
                    store_add_task(&store, created);
                }),
            };

            match result {
                Ok(()) => {
                    ctx.toast_success("Task saved");
                    ctx.close_modal();
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <form class="task-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="Task name"
                prop:value=move || task_name.get()
                on:input=move |ev| set_task_name.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>

            <select on:change=move |ev| set_status.set(status_from_value(&event_target_value(&ev)))>
                {STATUS_OPTIONS
                    .iter()
                    .map(|(key, value, label)| {
                        let selected = status.get_untracked() == *value;
                        view! {
                            <option value=*key selected=selected>{*label}</option>
                        }
                    })
                    .collect_view()}
            </select>

            <select on:change=move |ev| set_priority.set(priority_from_value(&event_target_value(&ev)))>
                {PRIORITY_OPTIONS
                    .iter()
                    .map(|(key, value, label)| {
                        let selected = priority.get_untracked() == *value;
                        view! {
                            <option value=*key selected=selected>{*label}</option>
                        }
                    })
                    .collect_view()}
            </select>

            <input
                type="date"
                prop:value=move || due_date.get()
                on:input=move |ev| set_due_date.set(event_target_value(&ev))
            />

            <select on:change=move |ev| set_selected_list.set(event_target_value(&ev))>
                <option value="">"No list"</option>
                {move || {
                    store
                        .lists()
                        .get()
                        .into_iter()
                        .map(|list| {
                            let selected = selected_list.get_untracked() == list.id;
                            view! {
                                <option value=list.id.clone() selected=selected>
                                    {list.title.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>

            {move || error.get().map(|message| view! {
                <p class="form-error">{message}</p>
            })}

            <button type="submit">"Save"</button>
            <button type="button" class="cancel-btn" on:click=move |_| ctx.close_modal()>
                "Cancel"
            </button>
        </form>
    }
}
