//! Keyboard Shortcuts
//!
//! Global, non-configurable keyboard surface. Shortcuts are suppressed
//! while a form field has focus so typing stays undisturbed.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::components::counter::increment_counter;
use crate::state::global::{GlobalState, Severity};

/// Wire the global keydown handler.
pub fn init_keyboard(state: GlobalState) {
    window_event_listener(ev::keydown, move |ev: web_sys::KeyboardEvent| {
        if target_is_form_field(&ev) {
            return;
        }

        let modified = ev.ctrl_key() || ev.meta_key();
        match (ev.key().as_str(), modified) {
            (" ", false) => {
                ev.prevent_default();
                increment_counter(state.clone());
            }
            ("r", false) | ("R", false) => {
                ev.prevent_default();
                state.reset(&mut rand::thread_rng());
                state.notify("All interactions reset!", Severity::Info);
            }
            ("g", false) => {
                ev.prevent_default();
                activate_random_cell(&state);
            }
            ("k", true) | ("K", true) => {
                ev.prevent_default();
                increment_counter(state.clone());
                show_hint(&state, "Counter incremented");
            }
            ("r", true) | ("R", true) => {
                ev.prevent_default();
                let _ = window().location().reload();
            }
            ("Escape", _) => {
                state.show_shortcuts.set(false);
                state.reset(&mut rand::thread_rng());
                state.notify("All interactions reset!", Severity::Info);
                show_hint(&state, "All interactions reset");
            }
            _ => {}
        }
    });
}

/// Activate a random inactive grid cell, if any remain.
fn activate_random_cell(state: &GlobalState) {
    let mut rng = rand::thread_rng();
    let picked = state.grid.get_untracked().random_inactive(&mut rng);
    if let Some(index) = picked {
        state.grid.update(|g| g.toggle(index));
        state.record_interaction(&mut rng);
    }
}

/// Name the shortcut in the feedback caption, clearing it after 2 seconds.
fn show_hint(state: &GlobalState, message: &str) {
    state.keyboard_hint.set(Some(message.to_string()));
    let hint = state.keyboard_hint;
    gloo_timers::callback::Timeout::new(2_000, move || {
        hint.set(None);
    })
    .forget();
}

fn target_is_form_field(ev: &web_sys::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
        .map(|el| matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT"))
        .unwrap_or(false)
}
