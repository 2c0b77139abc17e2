//! Application Context
//!
//! Shared UI state provided via Leptos Context API: current page, modal
//! intent, toast stack, reload trigger, and list selection. Modal payloads
//! are data-only so the context stays inspectable.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::{ModalIntent, Toast, ToastKind};

/// Top-level surfaces of the app shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Tasks,
    Calendar,
    Settings,
}

/// How long a toast stays visible
const TOAST_MS: u32 = 4000;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    set_page: WriteSignal<Page>,
    /// Open modal intent, if any
    pub modal: RwSignal<Option<ModalIntent>>,
    /// Active toasts, newest last
    pub toasts: RwSignal<Vec<Toast>>,
    toast_seq: RwSignal<u32>,
    /// Trigger to reload collections from the backend - read
    pub reload_trigger: ReadSignal<u32>,
    set_reload_trigger: WriteSignal<u32>,
    /// List filter applied to the tasks page (None = all tasks)
    pub selected_list: RwSignal<Option<String>>,
}

impl AppContext {
    pub fn new() -> Self {
        let (page, set_page) = signal(Page::Dashboard);
        let (reload_trigger, set_reload_trigger) = signal(0u32);
        Self {
            page,
            set_page,
            modal: RwSignal::new(None),
            toasts: RwSignal::new(Vec::new()),
            toast_seq: RwSignal::new(0),
            reload_trigger,
            set_reload_trigger,
            selected_list: RwSignal::new(None),
        }
    }

    pub fn go_to(&self, page: Page) {
        self.set_page.set(page);
    }

    /// Trigger a reload of tasks and lists
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn open_modal(&self, intent: ModalIntent) {
        self.modal.set(Some(intent));
    }

    pub fn close_modal(&self) {
        self.modal.set(None);
    }

    /// Show a toast and schedule its dismissal
    pub fn toast(&self, message: impl Into<String>, kind: ToastKind) {
        let id = self.toast_seq.get_untracked() + 1;
        self.toast_seq.set(id);
        self.toasts.update(|toasts| {
            toasts.push(Toast {
                id,
                message: message.into(),
                kind,
            })
        });
        let toasts = self.toasts;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(TOAST_MS).await;
            toasts.update(|list| list.retain(|toast| toast.id != id));
        });
    }

    pub fn toast_success(&self, message: impl Into<String>) {
        self.toast(message, ToastKind::Success);
    }

    pub fn toast_error(&self, message: impl Into<String>) {
        self.toast(message, ToastKind::Error);
    }
}
