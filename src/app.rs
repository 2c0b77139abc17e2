//! TaskMaster Frontend App
//!
//! Root component: provides the stores and context, runs the session
//! bootstrap, loads collections once authenticated, and switches pages.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    CalendarView, Dashboard, LoginPage, ModalHost, NavBar, SettingsPage, TaskListView,
    ToastStack,
};
use crate::context::{AppContext, Page};
use crate::session::{self, SessionState, SessionStateStoreFields};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let session = Store::new(SessionState::default());
    let ctx = AppContext::new();

    provide_context(store);
    provide_context(session);
    provide_context(ctx);

    // Session bootstrap: persisted token first, then the provider's state.
    // Re-runs dispatch a fresh generation, so a stale in-flight attempt can
    // never apply out of order.
    Effect::new(move |_| {
        spawn_local(async move {
            session::bootstrap(session).await;
            session::sync_provider_state(session).await;
        });
    });

    // Load collections when authenticated or explicitly reloaded
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        if !session.is_authenticated().get() {
            return;
        }
        spawn_local(async move {
            match api::tasks::list_tasks().await {
                Ok(tasks) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} tasks", tasks.len()).into());
                    store.tasks().set(tasks);
                }
                Err(err) => {
                    web_sys::console::warn_1(&format!("[APP] task load failed: {}", err).into());
                }
            }
            if let Ok(lists) = api::lists::list_lists().await {
                store.lists().set(lists);
            }
            if let Ok(settings) = api::settings::fetch_settings().await {
                store.settings().set(settings);
            }
        });
    });

    view! {
        <Show
            when=move || !session.is_loading().get()
            fallback=|| view! { <div class="loading-screen">"Loading..."</div> }
        >
            <Show
                when=move || session.is_authenticated().get()
                fallback=|| view! { <LoginPage /> }
            >
                <div class="app-layout">
                    <NavBar />
                    <main class="main-content">
                        {move || match ctx.page.get() {
                            Page::Dashboard => view! { <Dashboard /> }.into_any(),
                            Page::Tasks => view! { <TaskListView /> }.into_any(),
                            Page::Calendar => view! { <CalendarView /> }.into_any(),
                            Page::Settings => view! { <SettingsPage /> }.into_any(),
                        }}
                    </main>
                    <ModalHost />
                    <ToastStack />
                </div>
            </Show>
        </Show>
    }
}
