//! YearMaps Gallery
//!
//! Single-page gallery of year heat-maps built with Leptos (WASM).
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. On mount it reads the image list and the update time from
//! the YearMaps server and renders one card per heat-map.
//!
//! Development builds (`trunk serve`) call the server at
//! `http://localhost:5000`; release builds expect to be served by the
//! server itself and use same-origin URLs. Set `YEARMAPS_ENV` at build time
//! to pick the mode explicitly.

use leptos::*;

mod api;
mod app;
mod components;
mod config;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
