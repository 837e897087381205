//! Toast Notification Component
//!
//! Renders the stack of transient banners. Banners auto-dismiss on a timer
//! (see `GlobalState::notify_for`) or when the user closes them.

use leptos::*;

use crate::state::global::{expect_global_state, Severity};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = expect_global_state();
    let dismiss_state = state.clone();

    view! {
        <div class="fixed top-5 right-5 z-50 space-y-2 w-80">
            <For
                each=move || state.notifications.get()
                key=|n| n.id
                children=move |n| {
                    let dismiss_state = dismiss_state.clone();
                    let id = n.id;
                    view! {
                        <ToastMessage
                            message=n.message
                            severity=n.severity
                            on_dismiss=move |_| dismiss_state.dismiss(id)
                        />
                    }
                }
            />
        </div>
    }
}

#[component]
fn ToastMessage(
    #[prop(into)] message: String,
    severity: Severity,
    on_dismiss: impl Fn(web_sys::MouseEvent) + 'static,
) -> impl IntoView {
    let (icon, bg_class) = match severity {
        Severity::Success => ("✓", "bg-green-600"),
        Severity::Error => ("✕", "bg-red-600"),
        Severity::Warning => ("⚠", "bg-yellow-600"),
        Severity::Info => ("ℹ", "bg-blue-600"),
    };

    view! {
        <div class=format!(
            "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium flex-1">{message}</span>
            <button
                on:click=on_dismiss
                class="text-white/70 hover:text-white text-lg leading-none"
            >
                "×"
            </button>
        </div>
    }
}
