//! Loading Component
//!
//! Loading indicator for views waiting on the backend.

use leptos::*;

/// Centered loading spinner with the standard waiting text
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 text-sky-600">
            <div class="loading-spinner w-5 h-5 mr-3" />
            <span>"Cargando..."</span>
        </div>
    }
}
