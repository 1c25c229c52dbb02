//! Home Page
//!
//! Calculator card plus the toggleable history panel. The history mounts
//! on demand, so each "Ver historial" click refetches.

use leptos::*;

use crate::components::{History, ImcForm};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let (show_history, set_show_history) = create_signal(false);

    view! {
        <div class="flex flex-col items-center">
            <div class="w-full max-w-xl p-10 mb-8 bg-white rounded-xl shadow-lg">
                <ImcForm />

                <button
                    on:click=move |_| set_show_history.update(|shown| *shown = !*shown)
                    class="w-full mt-4 bg-sky-700 hover:bg-sky-800 rounded-lg py-3
                           font-semibold text-white transition-colors"
                >
                    {move || if show_history.get() { "Ocultar historial" } else { "Ver historial" }}
                </button>
            </div>

            {move || show_history.get().then(|| view! { <History /> })}
        </div>
    }
}
