//! Theme Controls Component
//!
//! Color picker driving the page's primary accent and a font-size slider
//! for the dynamic text. The CSS custom property is kept in sync through an
//! effect so a reset restores it too.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::state::global::expect_global_state;

/// Theme customization panel
#[component]
pub fn ThemeControls() -> impl IntoView {
    let state = expect_global_state();

    let theme_color = state.theme_color;
    create_effect(move |_| {
        let color = theme_color.get();
        if let Some(root) = document().document_element() {
            if let Ok(element) = root.dyn_into::<web_sys::HtmlElement>() {
                let _ = element.style().set_property("--primary", &color);
            }
        }
    });

    let font_size = state.font_size;
    let color_state = state.clone();
    let size_state = state;

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Theme Controls"</h2>

            <div class="space-y-4">
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Primary color"</label>
                    <input
                        type="color"
                        prop:value=move || theme_color.get()
                        on:input=move |ev| {
                            color_state.theme_color.set(event_target_value(&ev));
                            color_state.record_interaction(&mut rand::thread_rng());
                        }
                        class="h-10 w-20 bg-gray-700 rounded cursor-pointer"
                    />
                </div>

                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        "Font size: "
                        <span class="text-white font-medium">
                            {move || format!("{}px", font_size.get())}
                        </span>
                    </label>
                    <input
                        type="range"
                        min="10"
                        max="32"
                        prop:value=move || font_size.get().to_string()
                        on:input=move |ev| {
                            if let Ok(size) = event_target_value(&ev).parse() {
                                size_state.font_size.set(size);
                                size_state.record_interaction(&mut rand::thread_rng());
                            }
                        }
                        class="w-full"
                    />
                </div>
            </div>
        </div>
    }
}
