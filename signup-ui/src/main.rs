//! Activity Signup
//!
//! Browser client for the activity signup service, built with Leptos (WASM).
//!
//! # Features
//!
//! - Activity cards with a donut chart of booked vs. free places
//! - Signup form with transient success/error feedback
//! - Light/dark theme remembered across reloads
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Model, chart geometry and response handling come from the
//! `activity-signup` core crate; this crate wires them to the DOM, the
//! canvas, `localStorage` and `fetch`.

use leptos::*;

mod api;
mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Route tracing events to the browser console
    tracing_wasm::set_as_global_default();
    tracing::info!("Activity signup client v{}", env!("CARGO_PKG_VERSION"));

    mount_to_body(|| view! { <app::App /> });
}
