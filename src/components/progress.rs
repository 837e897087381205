//! Progress Meters Component
//!
//! Three independent percentages recomputed from shared state: interaction
//! volume, simulated response time, and overall completion.

use leptos::*;

use crate::state::global::expect_global_state;

/// Progress meter panel
#[component]
pub fn ProgressPanel() -> impl IntoView {
    let state = expect_global_state();

    let interaction_state = state.clone();
    let interaction = create_memo(move |_| interaction_state.interaction_percent());
    let completion_state = state.clone();
    let completion = create_memo(move |_| completion_state.completion_percent());
    let response = state.response_percent;

    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Session Progress"</h2>

            <div class="space-y-4">
                <ProgressBar label="Interactions" percent=interaction color="bg-primary-600" />
                <ProgressBar label="Response time" percent=response color="bg-green-600" />
                <ProgressBar label="Completion" percent=completion color="bg-blue-600" />
            </div>

            <p class="text-gray-500 text-xs mt-4">
                {move || format!("{} interactions this session", state.interaction_count.get())}
            </p>
        </div>
    }
}

#[component]
fn ProgressBar(
    label: &'static str,
    #[prop(into)] percent: Signal<f64>,
    color: &'static str,
) -> impl IntoView {
    view! {
        <div>
            <div class="flex justify-between text-sm mb-1">
                <span class="text-gray-400">{label}</span>
                <span class="text-gray-300">
                    {move || format!("{:.0}%", percent.get())}
                </span>
            </div>
            <div class="w-full bg-gray-700 rounded-full h-2">
                <div
                    class=format!("{} h-2 rounded-full transition-all duration-300", color)
                    style=move || format!("width: {}%", percent.get().clamp(0.0, 100.0))
                />
            </div>
        </div>
    }
}
