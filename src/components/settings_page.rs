//! Settings Page Component
//!
//! Form over the per-user settings singleton plus profile update and
//! account deletion entry points.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::{
    DateFormat, Language, ModalIntent, Priority, Settings, TaskStatus, Theme,
};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (draft, set_draft) = signal(store.settings().get_untracked());
    let (saving, set_saving) = signal(false);

    // The settings fetch can resolve after this page mounts; track the store
    // so the form reflects the server state, not the defaults it seeded with
    Effect::new(move |_| {
        set_draft.set(store.settings().get());
    });

    let on_save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if saving.get() {
            return;
        }
        set_saving.set(true);
        let pending = draft.get();
        spawn_local(async move {
            match api::settings::update_settings(&pending).await {
                Ok(saved) => {
                    store.settings().set(saved);
                    ctx.toast_success("Settings saved");
                }
                Err(err) => ctx.toast_error(err.to_string()),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="settings-page">
            <h2>"Settings"</h2>
            <form class="settings-form" on:submit=on_save>
                <label>"Theme"</label>
                <select on:change=move |ev| {
                    let theme = match event_target_value(&ev).as_str() {
                        "LIGHT" => Theme::Light,
                        _ => Theme::Dark,
                    };
                    set_draft.update(|d| d.theme = theme);
                }>
                    <option value="DARK" selected=move || draft.get().theme == Theme::Dark>
                        "Dark"
                    </option>
                    <option value="LIGHT" selected=move || draft.get().theme == Theme::Light>
                        "Light"
                    </option>
                </select>

                <label>"Language"</label>
                <select on:change=move |ev| {
                    let language = match event_target_value(&ev).as_str() {
                        "ES" => Language::Es,
                        _ => Language::En,
                    };
                    set_draft.update(|d| d.language = language);
                }>
                    <option value="EN" selected=move || draft.get().language == Language::En>
                        "English"
                    </option>
                    <option value="ES" selected=move || draft.get().language == Language::Es>
                        "Español"
                    </option>
                </select>

                <label>"Date format"</label>
                <select on:change=move |ev| {
                    let format = match event_target_value(&ev).as_str() {
                        "DD_MM_YYYY" => DateFormat::DdMmYyyy,
                        "YYYY_MM_DD" => DateFormat::YyyyMmDd,
                        _ => DateFormat::MmDdYyyy,
                    };
                    set_draft.update(|d| d.date_format = format);
                }>
                    <option
                        value="MM_DD_YYYY"
                        selected=move || draft.get().date_format == DateFormat::MmDdYyyy
                    >
                        "MM/DD/YYYY"
                    </option>
                    <option
                        value="DD_MM_YYYY"
                        selected=move || draft.get().date_format == DateFormat::DdMmYyyy
                    >
                        "DD/MM/YYYY"
                    </option>
                    <option
                        value="YYYY_MM_DD"
                        selected=move || draft.get().date_format == DateFormat::YyyyMmDd
                    >
                        "YYYY/MM/DD"
                    </option>
                </select>

                <label>"Default priority"</label>
                <select on:change=move |ev| {
                    let priority = match event_target_value(&ev).as_str() {
                        "LOW" => Priority::Low,
                        "HIGH" => Priority::High,
                        _ => Priority::Medium,
                    };
                    set_draft.update(|d| d.default_priority = priority);
                }>
                    <option value="LOW" selected=move || draft.get().default_priority == Priority::Low>
                        "Low"
                    </option>
                    <option
                        value="MEDIUM"
                        selected=move || draft.get().default_priority == Priority::Medium
                    >
                        "Medium"
                    </option>
                    <option
                        value="HIGH"
                        selected=move || draft.get().default_priority == Priority::High
                    >
                        "High"
                    </option>
                </select>

                <label>"Default status"</label>
                <select on:change=move |ev| {
                    let status = match event_target_value(&ev).as_str() {
                        "IN_PROGRESS" => TaskStatus::InProgress,
                        "DONE" => TaskStatus::Done,
                        _ => TaskStatus::Todo,
                    };
                    set_draft.update(|d| d.default_status = status);
                }>
                    <option value="TODO" selected=move || draft.get().default_status == TaskStatus::Todo>
                        "To do"
                    </option>
                    <option
                        value="IN_PROGRESS"
                        selected=move || draft.get().default_status == TaskStatus::InProgress
                    >
                        "In progress"
                    </option>
                    <option value="DONE" selected=move || draft.get().default_status == TaskStatus::Done>
                        "Done"
                    </option>
                </select>

                <button type="submit" disabled=move || saving.get()>
                    "Save settings"
                </button>
                <button
                    type="button"
                    class="reset-btn"
                    on:click=move |_| set_draft.set(Settings::default())
                >
                    "Reset to defaults"
                </button>
            </form>

            <h3>"Account"</h3>
            <button
                class="danger-btn"
                on:click=move |_| ctx.open_modal(ModalIntent::ConfirmDeleteAccount)
            >
                "Delete account"
            </button>
        </div>
    }
}
