//! DemoDeck
//!
//! Interactive demo dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Canvas-rendered charts over a small stats API
//! - Interactive widgets: counter mirror, cell grid, drag-and-drop,
//!   text transformer, theme controls
//! - Activity tracking and progress meters
//! - Global keyboard shortcuts
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It talks to a small demo backend over HTTP; everything else
//! is local reactive state.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
