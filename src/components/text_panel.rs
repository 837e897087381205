//! Text Transformer Component
//!
//! Live text display with case toggle and reverse transforms. Every change
//! funnels through `set_text`, which also counts the interaction.

use leptos::*;

use crate::state::global::{expect_global_state, GlobalState};
use crate::state::interaction::{display_text, reverse_text, text_caption, toggle_case};

fn set_text(state: &GlobalState, text: String) {
    state.text_input.set(text);
    state.record_interaction(&mut rand::thread_rng());
}

/// Text transformer panel
#[component]
pub fn TextTransformer() -> impl IntoView {
    let state = expect_global_state();
    let text = state.text_input;
    let font_size = state.font_size;

    let input_state = state.clone();
    let case_state = state.clone();
    let reverse_state = state;

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Dynamic Text"</h2>

            <div
                class="text-2xl font-bold mb-1 text-primary"
                style=move || format!("font-size: {}px", font_size.get())
            >
                {move || display_text(&text.get())}
            </div>
            <p class="text-gray-400 text-sm mb-4">
                {move || text_caption(&text.get())}
            </p>

            <input
                type="text"
                placeholder="Type something..."
                prop:value=move || text.get()
                on:input=move |ev| set_text(&input_state, event_target_value(&ev))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />

            <div class="flex space-x-2 mt-3">
                <button
                    on:click=move |_| {
                        let text = toggle_case(&case_state.text_input.get_untracked());
                        set_text(&case_state, text);
                    }
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                           text-sm font-medium transition-colors"
                >
                    "UPPER/lower"
                </button>
                <button
                    on:click=move |_| {
                        let text = reverse_text(&reverse_state.text_input.get_untracked());
                        set_text(&reverse_state, text);
                    }
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg
                           text-sm font-medium transition-colors"
                >
                    "Reverse"
                </button>
            </div>
        </div>
    }
}
