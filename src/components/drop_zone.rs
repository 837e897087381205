//! Drop Zone Component
//!
//! Accepts a drag payload, shows its text content for a fixed 3-second
//! window, then clears it. Default browser drag handling is suppressed
//! page-wide so the custom handler is authoritative.

use leptos::*;

use crate::state::global::expect_global_state;
use crate::state::interaction::DROP_PLACEHOLDER;

/// Drag-and-drop target
#[component]
pub fn DropZone() -> impl IntoView {
    let state = expect_global_state();
    let (hovering, set_hovering) = create_signal(false);

    // The browser would otherwise navigate to dropped content.
    window_event_listener(ev::dragover, |ev| ev.prevent_default());
    window_event_listener(ev::drop, |ev| ev.prevent_default());

    let drop_state = state.clone();
    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_hovering.set(false);

        let payload = ev
            .data_transfer()
            .and_then(|dt| dt.get_data("text/plain").ok())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| DROP_PLACEHOLDER.to_string());

        drop_state.drop_message.set(Some(payload));
        drop_state.record_interaction(&mut rand::thread_rng());

        let drop_message = drop_state.drop_message;
        gloo_timers::callback::Timeout::new(3_000, move || {
            drop_message.set(None);
        })
        .forget();
    };

    let on_dragstart = move |ev: web_sys::DragEvent| {
        if let Some(dt) = ev.data_transfer() {
            let _ = dt.set_data("text/plain", "Demo drag data");
        }
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Drag & Drop"</h2>

            <div
                draggable="true"
                on:dragstart=on_dragstart
                on:dragenter=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_hovering.set(true);
                }
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    set_hovering.set(true);
                }
                on:dragleave=move |_| set_hovering.set(false)
                on:drop=on_drop
                class=move || {
                    let base = "border-2 border-dashed rounded-lg p-8 text-center \
                                transition-colors cursor-grab";
                    if hovering.get() {
                        format!("{} border-primary-500 bg-gray-700", base)
                    } else {
                        format!("{} border-gray-600", base)
                    }
                }
            >
                <p class="text-gray-300">"Drop something here"</p>
                <p class="text-gray-500 text-sm mt-1">"or drag this box to copy demo data"</p>
            </div>

            {move || {
                state.drop_message.get().map(|message| view! {
                    <div class="mt-3 bg-green-600/20 border border-green-600 text-green-300
                                rounded-lg px-4 py-2 text-sm">
                        "Drop successful! Content: \"" {message} "\""
                    </div>
                })
            }}
        </div>
    }
}
