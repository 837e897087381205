//! Counter Mirror Component
//!
//! Client display of the server-held click counter. The display is only
//! ever replaced by a server-returned value, never incremented locally, so
//! it cannot diverge from the backend even with concurrent tabs.

use leptos::*;

use crate::api;
use crate::state::global::{expect_global_state, GlobalState, Severity};

/// Increment the server counter and mirror back its authoritative value.
/// Shared with the keyboard shortcuts.
pub fn increment_counter(state: GlobalState) {
    spawn_local(async move {
        match api::increment_counter().await {
            Ok(value) => {
                state.track_api_call();
                state.counter_value.set(value);
                state.record_interaction(&mut rand::thread_rng());
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error incrementing counter: {}", e).into());
                state.notify("Failed to increment counter", Severity::Error);
            }
        }
    });
}

/// Initial silent fetch of the counter value on startup.
pub fn load_counter(state: GlobalState) {
    spawn_local(async move {
        match api::fetch_counter().await {
            Ok(value) => {
                state.track_api_call();
                state.counter_value.set(value);
            }
            Err(e) => {
                web_sys::console::error_1(&format!("Error getting counter value: {}", e).into());
            }
        }
    });
}

/// Counter mirror card with increment and refresh actions
#[component]
pub fn CounterCard() -> impl IntoView {
    let state = expect_global_state();
    let (flash, set_flash) = create_signal(false);

    // Brief highlight whenever the mirrored value changes
    let counter_value = state.counter_value;
    create_effect(move |prev: Option<i64>| {
        let value = counter_value.get();
        if prev.is_some_and(|p| p != value) {
            set_flash.set(true);
            gloo_timers::callback::Timeout::new(500, move || set_flash.set(false)).forget();
        }
        value
    });

    let increment_state = state.clone();
    let on_increment = move |_| increment_counter(increment_state.clone());

    let refresh_state = state.clone();
    let on_refresh = move |_| {
        let state = refresh_state.clone();
        spawn_local(async move {
            match api::fetch_counter().await {
                Ok(value) => {
                    state.track_api_call();
                    state.counter_value.set(value);
                    state.notify("Counter value refreshed", Severity::Info);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("Error getting counter value: {}", e).into(),
                    );
                    state.notify("Failed to get counter value", Severity::Error);
                }
            }
        });
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6 text-center">
            <h2 class="text-xl font-semibold mb-4">"Click Counter"</h2>

            <div class=move || {
                let base = "text-5xl font-bold transition-colors";
                if flash.get() {
                    format!("{} text-green-400", base)
                } else {
                    format!("{} text-white", base)
                }
            }>
                {move || state.counter_value.get()}
            </div>
            <p class="text-gray-400 text-sm mt-1">"server-held value"</p>

            <div class="flex justify-center space-x-2 mt-4">
                <button
                    on:click=on_increment
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "Increment"
                </button>
                <button
                    on:click=on_refresh
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                           font-medium transition-colors"
                >
                    "Refresh"
                </button>
            </div>
        </div>
    }
}
