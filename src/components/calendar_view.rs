//! Calendar View Component
//!
//! Month navigation over the fixed 35-cell grid built by the view layer.
//! Out-of-month cells render as blank placeholders.

use chrono::Datelike;
use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};
use crate::views;

const MONTH_NAMES: &[&str] = &[
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

const WEEKDAY_HEADERS: &[&str] = &["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn CalendarView() -> impl IntoView {
    let store = use_app_store();

    let today = chrono::Local::now().date_naive();
    let (year, set_year) = signal(today.year());
    let (month, set_month) = signal(today.month());

    let prev_month = move |_| {
        if month.get() == 1 {
            set_month.set(12);
            set_year.update(|y| *y -= 1);
        } else {
            set_month.update(|m| *m -= 1);
        }
    };
    let next_month = move |_| {
        if month.get() == 12 {
            set_month.set(1);
            set_year.update(|y| *y += 1);
        } else {
            set_month.update(|m| *m += 1);
        }
    };

    let grid = Memo::new(move |_| {
        let (active, _) = views::partition_archived(&store.tasks().get());
        views::calendar_grid(year.get(), month.get(), &active)
    });

    let month_label = move || {
        let index = (month.get() as usize).saturating_sub(1).min(11);
        format!("{} {}", MONTH_NAMES[index], year.get())
    };

    view! {
        <div class="calendar-view">
            <div class="calendar-header">
                <button on:click=prev_month>"‹"</button>
                <h2>{month_label}</h2>
                <button on:click=next_month>"›"</button>
            </div>

            <div class="calendar-weekdays">
                {WEEKDAY_HEADERS
                    .iter()
                    .map(|name| view! { <span class="weekday">{*name}</span> })
                    .collect_view()}
            </div>

            <div class="calendar-grid">
                {move || {
                    grid.get()
                        .into_iter()
                        .map(|cell| match cell.day {
                            Some(day) => {
                                let tasks = cell.tasks;
                                view! {
                                    <div class="calendar-cell">
                                        <span class="cell-day">{day}</span>
                                        {tasks
                                            .into_iter()
                                            .map(|task| view! {
                                                <span class="cell-task">{task.task_name}</span>
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                .into_any()
                            }
                            None => view! { <div class="calendar-cell placeholder"></div> }.into_any(),
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
