//! IMC Dashboard
//!
//! BMI tracking single-page application built with Leptos (WASM).
//!
//! # Features
//!
//! - Email/password authentication with a persisted bearer session
//! - BMI calculation with locally validated measurements
//! - Calculation history with day-range filtering
//! - Mean/median statistics with canvas charts
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It communicates with the IMC REST API over HTTP.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;
mod validate;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
