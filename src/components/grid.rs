//! Interactive Grid Component
//!
//! 6x6 grid of toggleable cells. Click toggles a cell, double-click forces
//! it inactive.

use leptos::*;

use crate::state::global::expect_global_state;
use crate::state::interaction::{GridState, GRID_CELLS};

/// Toggleable cell grid
#[component]
pub fn InteractiveGrid() -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Interactive Grid"</h2>
            <p class="text-gray-400 text-sm mb-4">
                "Click to toggle a cell, double-click to clear it."
            </p>

            <div class="grid grid-cols-6 gap-2">
                {(0..GRID_CELLS)
                    .map(|index| view! { <GridCell index=index /> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn GridCell(index: usize) -> impl IntoView {
    let state = expect_global_state();

    let grid = state.grid;
    let active = create_memo(move |_| grid.get().is_active(index));

    let toggle_state = state.clone();
    let on_click = move |_| {
        toggle_state.grid.update(|g| g.toggle(index));
        toggle_state.record_interaction(&mut rand::thread_rng());
    };

    let on_dblclick = move |_| {
        state.grid.update(|g| g.deactivate(index));
        state.record_interaction(&mut rand::thread_rng());
    };

    view! {
        <div
            on:click=on_click
            on:dblclick=on_dblclick
            class=move || {
                let base = "grid-cell flex items-center justify-center h-10 rounded \
                            cursor-pointer select-none text-sm transition-colors";
                if active.get() {
                    format!("{} bg-primary-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            {move || {
                if active.get() {
                    "✓".to_string()
                } else {
                    GridState::cell_label(index)
                }
            }}
        </div>
    }
}
