//! Navigation Bar Component
//!
//! Tab bar for switching between the app's top-level pages, plus the
//! current-user badge and logout.

use leptos::prelude::*;

use crate::context::{AppContext, Page};
use crate::session::{self, use_session, SessionStateStoreFields};

const PAGES: &[(Page, &str)] = &[
    (Page::Dashboard, "Dashboard"),
    (Page::Tasks, "Tasks"),
    (Page::Calendar, "Calendar"),
    (Page::Settings, "Settings"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let session = use_session();

    let user_name = move || {
        session
            .user()
            .get()
            .map(|user| format!("{} {}", user.first_name, user.last_name))
            .unwrap_or_default()
    };

    view! {
        <nav class="nav-bar">
            <span class="brand">"TaskMaster"</span>
            {PAGES
                .iter()
                .map(|(page, label)| {
                    let page = *page;
                    let is_active = move || ctx.page.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "nav-tab active" } else { "nav-tab" }
                            on:click=move |_| ctx.go_to(page)
                        >
                            {*label}
                        </button>
                    }
                })
                .collect_view()}

            <span class="nav-user">{user_name}</span>
            <button class="logout-btn" on:click=move |_| session::logout(&session)>
                "Log out"
            </button>
        </nav>
    }
}
