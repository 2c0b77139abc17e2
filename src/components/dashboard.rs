//! Dashboard Component
//!
//! Stat cards over the active task partition plus the upcoming-due list.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::views;

/// Days ahead shown in the upcoming list
const UPCOMING_HORIZON_DAYS: i64 = 7;

#[component]
pub fn Dashboard() -> impl IntoView {
    let store = use_app_store();

    let active_tasks = Memo::new(move |_| {
        let (active, _) = views::partition_archived(&store.tasks().get());
        active
    });

    let stats = Memo::new(move |_| {
        let today = chrono::Local::now().date_naive();
        views::dashboard_stats(&active_tasks.get(), today)
    });

    let upcoming = Memo::new(move |_| {
        let today = chrono::Local::now().date_naive();
        views::upcoming_tasks(&active_tasks.get(), today, UPCOMING_HORIZON_DAYS)
    });

    let date_format = move || store.settings().get().date_format;

    view! {
        <div class="dashboard">
            <h2>"Dashboard"</h2>
            <div class="stat-cards">
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().total}</span>
                    <span class="stat-label">"Total"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().todo}</span>
                    <span class="stat-label">"To do"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().in_progress}</span>
                    <span class="stat-label">"In progress"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">{move || stats.get().done}</span>
                    <span class="stat-label">"Done"</span>
                </div>
                <div class="stat-card overdue">
                    <span class="stat-value">{move || stats.get().overdue}</span>
                    <span class="stat-label">"Overdue"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-value">
                        {move || format!("{}%", stats.get().completion_pct)}
                    </span>
                    <span class="stat-label">"Completed"</span>
                </div>
            </div>

            <h3>"Due soon"</h3>
            <Show
                when=move || !upcoming.get().is_empty()
                fallback=|| view! { <p class="empty-hint">"Nothing due this week"</p> }
            >
                <ul class="upcoming-list">
                    <For
                        each=move || upcoming.get()
                        key=|task| task.id.clone()
                        children=move |task| {
                            let due = task.due_date.clone();
                            view! {
                                <li class="upcoming-item">
                                    <span class="task-name">{task.task_name.clone()}</span>
                                    <span class="due-date">
                                        {move || views::format_due_date(due.as_deref(), date_format())}
                                    </span>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}
