//! Toast notifications for form submissions and page controls.

use std::time::Duration;

use leptos::prelude::*;
use web_common::{Toast, ToastKind, DEFAULT_TOAST_MS};

/// Holds the single visible toast; showing a new one replaces it.
#[derive(Clone, Copy)]
pub struct ToastManager {
    pub current: ReadSignal<Option<Toast>>,
    set_current: WriteSignal<Option<Toast>>,
    next_id: StoredValue<u64>,
}

impl ToastManager {
    pub fn new() -> Self {
        let (current, set_current) = signal(None);
        Self {
            current,
            set_current,
            next_id: StoredValue::new(0),
        }
    }

    pub fn show(&self, kind: ToastKind, message: impl Into<String>) {
        self.show_for(kind, message, DEFAULT_TOAST_MS);
    }

    /// `duration_ms == 0` keeps the toast until it is dismissed.
    pub fn show_for(&self, kind: ToastKind, message: impl Into<String>, duration_ms: u32) {
        self.next_id.update_value(|id| *id += 1);
        let id = self.next_id.get_value();
        self.set_current
            .set(Some(Toast::new(id, kind, message).with_duration(duration_ms)));
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(ToastKind::Error, message);
    }

    /// Dismisses toast `id` if it is still the one showing.
    pub fn dismiss(&self, id: u64) {
        if self.current.get_untracked().is_some_and(|toast| toast.id == id) {
            self.set_current.set(None);
        }
    }
}

#[component]
pub fn ToastContainer() -> impl IntoView {
    let toasts = use_context::<ToastManager>().expect("ToastManager not found");

    // Auto-dismiss; a replaced toast's timer finds a different id and does nothing.
    Effect::new(move |_| {
        if let Some(toast) = toasts.current.get() {
            if !toast.is_sticky() {
                let id = toast.id;
                set_timeout(
                    move || toasts.dismiss(id),
                    Duration::from_millis(toast.duration_ms as u64),
                );
            }
        }
    });

    view! {
        <div class="fixed top-4 right-4 z-50 max-w-sm">
            {move || toasts.current.get().map(|toast| view! { <ToastCard toast=toast /> })}
        </div>
    }
}

#[component]
fn ToastCard(toast: Toast) -> impl IntoView {
    let toasts = use_context::<ToastManager>().expect("ToastManager not found");
    let id = toast.id;

    view! {
        <div
            class=format!(
                "toast p-4 rounded-lg shadow-lg transform transition-transform duration-300 translate-x-0 cursor-pointer {}",
                toast.kind.class(),
            )
            role="status"
            on:click=move |_| toasts.dismiss(id)
        >
            <div class="flex items-center gap-3">
                <i class=toast.kind.icon()></i>
                <span class="font-medium">{toast.message}</span>
                <button
                    class="ml-4 text-white opacity-70 hover:opacity-100"
                    aria-label="Close"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        toasts.dismiss(id);
                    }
                >
                    <i class="fas fa-times"></i>
                </button>
            </div>
        </div>
    }
}
