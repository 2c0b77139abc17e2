//! UI Components
//!
//! Leptos components for the TaskMaster shell.

mod calendar_view;
mod dashboard;
mod list_form;
mod list_sidebar;
mod login_page;
mod modal_host;
mod nav_bar;
mod settings_page;
mod task_form;
mod task_list_view;
mod toast_stack;

pub use calendar_view::CalendarView;
pub use dashboard::Dashboard;
pub use list_form::ListForm;
pub use list_sidebar::ListSidebar;
pub use login_page::LoginPage;
pub use modal_host::ModalHost;
pub use nav_bar::NavBar;
pub use settings_page::SettingsPage;
pub use task_form::TaskForm;
pub use task_list_view::TaskListView;
pub use toast_stack::ToastStack;
