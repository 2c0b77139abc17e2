//! List Form Component
//!
//! Modal body for creating or editing a list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::TaskList;
use crate::store::{store_add_list, store_update_list, use_app_store};
use crate::validate;

const LIST_COLORS: &[&str] = &[
    "#e74c3c", "#e67e22", "#f1c40f", "#2ecc71", "#3498db", "#9b59b6",
];

#[component]
pub fn ListForm(#[prop(optional, into)] list: Option<TaskList>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let editing = list.clone();
    let (title, set_title) = signal(list.as_ref().map(|l| l.title.clone()).unwrap_or_default());
    let (description, set_description) = signal(
        list.as_ref()
            .and_then(|l| l.description.clone())
            .unwrap_or_default(),
    );
    let (color, set_color) = signal(
        list.as_ref()
            .map(|l| l.color.clone())
            .unwrap_or_else(|| LIST_COLORS[0].to_string()),
    );
    let (error, set_error) = signal::<Option<String>>(None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let title_value = title.get();
        if let Err(message) = validate::validate_list_title(&title_value) {
            set_error.set(Some(message));
            return;
        }
        let desc = description.get();
        let color_value = color.get();
        let editing = editing.clone();

        spawn_local(async move {
            let args = api::lists::ListArgs {
                title: &title_value,
                description: (!desc.is_empty()).then_some(desc.as_str()),
                color: &color_value,
                is_favorite: editing.as_ref().map(|l| l.is_favorite).unwrap_or(false),
            };
            let result = match &editing {
                Some(existing) => api::lists::update_list(&existing.id, &args)
                    .await
                    .map(|updated| store_update_list(&store, updated)),
                None => api::lists::create_list(&args)
                    .await
                    .map(|created| store_add_list(&store, created)),
            };
            match result {
                Ok(()) => {
                    ctx.toast_success("List saved");
                    ctx.close_modal();
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    view! {
        <form class="list-form" on:submit=on_submit>
            <input
                type="text"
                placeholder="List title"
                prop:value=move || title.get()
                on:input=move |ev| set_title.set(event_target_value(&ev))
            />
            <textarea
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| set_description.set(event_target_value(&ev))
            ></textarea>

            <div class="color-row">
                {LIST_COLORS
                    .iter()
                    .map(|value| {
                        let val = value.to_string();
                        let val_clone = val.clone();
                        let is_selected = move || color.get() == val;
                        view! {
                            <button
                                type="button"
                                class=move || {
                                    if is_selected() { "color-btn active" } else { "color-btn" }
                                }
                                style=format!("background-color: {}", value)
                                on:click=move |_| set_color.set(val_clone.clone())
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>

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
