//! App Root Component
//!
//! Router wiring: the public gate in front of login/register, the
//! protected gate in front of the shell that hosts the calculator and
//! statistics pages.

use leptos::*;
use leptos_router::*;

use crate::components::guard::paths;
use crate::components::{Nav, ProtectedGate, PublicGate};
use crate::pages::{Home, Login, Register, Statistics};
use crate::state::provide_session;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide the session to all components
    provide_session();

    view! {
        <Router>
            <div class="min-h-screen bg-sky-900">
                <Routes>
                    <Route path="" view=PublicGate>
                        <Route path=paths::LOGIN view=Login />
                        <Route path=paths::REGISTER view=Register />
                    </Route>

                    <Route path="" view=ProtectedGate>
                        <Route path="" view=MainLayout>
                            <Route path=paths::HOME view=Home />
                            <Route path=paths::STATISTICS view=Statistics />
                        </Route>
                    </Route>

                    <Route path="/*any" view=NotFound />
                </Routes>
            </div>
        </Router>
    }
}

/// Shell for the protected pages: header nav above the routed content
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <div class="min-h-screen flex flex-col items-center px-4">
            <Nav />
            <main class="w-full">
                <Outlet />
            </main>
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center text-white">
            <h1 class="text-3xl font-bold mb-2">"Página no encontrada"</h1>
            <A
                href=paths::HOME
                class="px-6 py-3 bg-sky-700 hover:bg-sky-800 rounded-lg font-medium transition-colors"
            >
                "Ir a la calculadora"
            </A>
        </div>
    }
}
