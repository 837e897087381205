//! App Root Component
//!
//! Main application component with global providers, activity tracking,
//! keyboard shortcuts and timer teardown.

use leptos::*;

use crate::components::Toast;
use crate::pages::Dashboard;
use crate::state::global::{expect_global_state, provide_global_state, Severity};
use crate::state::keyboard::init_keyboard;
use crate::state::timers::{init_activity_tracking, start_timers};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    let state = expect_global_state();
    init_activity_tracking(state.clone());
    init_keyboard(state.clone());

    // Intervals are cleared when the app unmounts
    let timers = start_timers(state);
    on_cleanup(move || drop(timers));

    view! {
        <div class="min-h-screen bg-gray-900 text-white flex flex-col">
            <Nav />

            <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                <Dashboard />
            </main>

            <Footer />

            <Toast />
            <ShortcutsDialog />
        </div>
    }
}

/// Header bar with brand and global actions
#[component]
fn Nav() -> impl IntoView {
    let state = expect_global_state();
    let show_shortcuts = state.show_shortcuts;
    let reset_state = state;

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    <div class="flex items-center space-x-3">
                        <span class="text-2xl">"🎛️"</span>
                        <span class="text-xl font-bold text-white">"DemoDeck"</span>
                    </div>

                    <div class="flex items-center space-x-2">
                        <button
                            on:click=move |_| show_shortcuts.set(true)
                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white
                                   hover:bg-gray-700 transition-colors"
                        >
                            "Shortcuts"
                        </button>
                        <button
                            on:click=move |_| {
                                reset_state.reset(&mut rand::thread_rng());
                                reset_state.notify("All interactions reset!", Severity::Info);
                            }
                            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white
                                   hover:bg-gray-700 transition-colors"
                        >
                            "Reset"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Footer with connection status, activity meter and clock
#[component]
fn Footer() -> impl IntoView {
    let state = expect_global_state();
    let online = state.online;
    let activity = state.activity_percent;
    let clock = state.clock;
    let api_calls = state.api_calls;

    view! {
        <footer class="fixed bottom-0 left-0 right-0 bg-gray-800 border-t border-gray-700 py-3 px-4">
            <div class="container mx-auto flex items-center justify-between text-sm">
                {move || {
                    if online.get() {
                        view! {
                            <span class="flex items-center space-x-1 text-green-400">
                                <span class="w-2 h-2 bg-green-400 rounded-full pulse" />
                                <span>"Connected"</span>
                            </span>
                        }
                        .into_view()
                    } else {
                        view! {
                            <span class="flex items-center space-x-1 text-red-400">
                                <span class="w-2 h-2 bg-red-400 rounded-full" />
                                <span>"Offline"</span>
                            </span>
                        }
                        .into_view()
                    }
                }}

                <div class="flex items-center space-x-2 w-48">
                    <span class="text-gray-400">"Activity"</span>
                    <div class="flex-1 bg-gray-700 rounded-full h-2">
                        <div
                            class="bg-primary-600 h-2 rounded-full transition-all duration-300"
                            style=move || format!("width: {}%", activity.get())
                        />
                    </div>
                </div>

                <div class="text-gray-400">
                    {move || format!("{} API calls", api_calls.get())}
                </div>

                <div class="text-gray-400">
                    {move || {
                        let time = clock.get();
                        if time.is_empty() {
                            "—".to_string()
                        } else {
                            time
                        }
                    }}
                </div>
            </div>
        </footer>
    }
}

/// Keyboard shortcuts help dialog, closed by Escape
#[component]
fn ShortcutsDialog() -> impl IntoView {
    let state = expect_global_state();
    let show = state.show_shortcuts;

    view! {
        {move || {
            if !show.get() {
                return ().into_view();
            }
            view! {
                <div
                    class="fixed inset-0 bg-black/60 z-40 flex items-center justify-center"
                    on:click=move |_| show.set(false)
                >
                    <div
                        class="bg-gray-800 rounded-xl p-6 w-96"
                        on:click=|ev| ev.stop_propagation()
                    >
                        <div class="flex items-center justify-between mb-4">
                            <h2 class="text-xl font-semibold">"Keyboard Shortcuts"</h2>
                            <button
                                on:click=move |_| show.set(false)
                                class="text-gray-400 hover:text-white text-lg leading-none"
                            >
                                "×"
                            </button>
                        </div>
                        <ul class="space-y-2 text-sm">
                            <ShortcutRow keys="Space" action="Increment the counter" />
                            <ShortcutRow keys="r" action="Reset all interactions" />
                            <ShortcutRow keys="g" action="Activate a random grid cell" />
                            <ShortcutRow keys="Ctrl/Cmd + K" action="Increment the counter" />
                            <ShortcutRow keys="Ctrl/Cmd + R" action="Reload the page" />
                            <ShortcutRow keys="Esc" action="Close this dialog and reset" />
                        </ul>
                    </div>
                </div>
            }
            .into_view()
        }}
    }
}

#[component]
fn ShortcutRow(keys: &'static str, action: &'static str) -> impl IntoView {
    view! {
        <li class="flex items-center justify-between">
            <span class="bg-gray-700 rounded px-2 py-1 font-mono text-xs">{keys}</span>
            <span class="text-gray-300">{action}</span>
        </li>
    }
}
