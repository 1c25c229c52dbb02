//! Navigation Component
//!
//! Header bar for the protected shell: page links and the logout button.

use leptos::*;
use leptos_router::*;

use crate::components::guard::paths;
use crate::state::use_session;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let session = use_session();

    // Dropping the credential flips the protected gate to /login
    let on_logout = move |_| session.set_token(None);

    view! {
        <nav class="w-full max-w-3xl mx-auto mt-8 mb-4 px-6 py-4 bg-white rounded-xl shadow-lg">
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-2">
                    <NavLink href=paths::HOME label="Calculadora IMC" />
                    <NavLink href=paths::STATISTICS label="Estadísticas" />
                </div>

                <button
                    on:click=on_logout
                    class="px-4 py-2 rounded-lg bg-sky-700 text-white font-semibold hover:bg-sky-800 transition-colors"
                >
                    "Cerrar sesión"
                </button>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-sky-700 font-semibold hover:bg-sky-100 transition-colors"
            active_class="bg-sky-100"
            exact=true
        >
            {label}
        </A>
    }
}
