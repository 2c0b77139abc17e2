//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Settings, Task, TaskList};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Flat task collection (active and archived together)
    pub tasks: Vec<Task>,
    /// All lists owned by the user
    pub lists: Vec<TaskList>,
    /// Per-user settings singleton
    pub settings: Settings,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add a task to the front of the store (server order is newest-first)
pub fn store_add_task(store: &AppStore, task: Task) {
    store.tasks().write().insert(0, task);
}

/// Update a task in the store by ID
pub fn store_update_task(store: &AppStore, updated_task: Task) {
    store
        .tasks()
        .write()
        .iter_mut()
        .find(|task| task.id == updated_task.id)
        .map(|task| *task = updated_task);
}

/// Remove a task from the store by ID
pub fn store_remove_task(store: &AppStore, task_id: &str) {
    store.tasks().write().retain(|task| task.id != task_id);
}

/// Add a list to the store
pub fn store_add_list(store: &AppStore, list: TaskList) {
    store.lists().write().push(list);
}

/// Update a list in the store by ID
pub fn store_update_list(store: &AppStore, updated_list: TaskList) {
    store
        .lists()
        .write()
        .iter_mut()
        .find(|list| list.id == updated_list.id)
        .map(|list| *list = updated_list);
}

/// Remove a list from the store by ID
pub fn store_remove_list(store: &AppStore, list_id: &str) {
    store.lists().write().retain(|list| list.id != list_id);
}
