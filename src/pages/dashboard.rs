//! Dashboard Page
//!
//! Single-page layout composing the chart presenter, the interactive
//! widget set and the progress meters.

use leptos::*;

use crate::components::chart::load_series;
use crate::components::counter::load_counter;
use crate::components::{
    ChartPanel, CounterCard, DropZone, InteractiveGrid, ProgressPanel, TextTransformer,
    ThemeControls,
};
use crate::state::global::expect_global_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = expect_global_state();

    // Fetch initial data on mount
    let init_state = state.clone();
    create_effect(move |_| {
        load_counter(init_state.clone());
        load_series(init_state.clone(), init_state.data_source.get_untracked());
    });

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Interactive Demo"</h1>
                    <p class="text-gray-400 mt-1">
                        "Charts, widgets and live meters backed by a demo API"
                    </p>
                </div>

                <div class="text-sm text-gray-400">
                    {move || {
                        state.keyboard_hint.get()
                            .unwrap_or_else(|| "Press Space, r or g to interact".to_string())
                    }}
                </div>
            </div>

            <ChartPanel />

            <div class="grid md:grid-cols-2 gap-8">
                <CounterCard />
                <ProgressPanel />
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <InteractiveGrid />
                <div class="space-y-8">
                    <DropZone />
                    <ThemeControls />
                </div>
            </div>

            <TextTransformer />
        </div>
    }
}
