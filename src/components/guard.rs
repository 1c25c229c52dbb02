//! Route Guards
//!
//! Two-state navigation policy applied in front of the route subtrees.
//! The policy itself is a pure function so the redirect table stays
//! testable without a router.

use leptos::*;
use leptos_router::{Outlet, Redirect};

use crate::state::use_session;

/// Route targets used across the app.
pub mod paths {
    pub const HOME: &str = "/";
    pub const LOGIN: &str = "/login";
    pub const REGISTER: &str = "/register";
    pub const STATISTICS: &str = "/estadisticas";
}

/// The two kinds of gate in front of route subtrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
    /// Login/register subtree, only reachable while logged out
    Public,
    /// App shell subtree, only reachable while logged in
    Protected,
}

/// Where a gate must send the user, if anywhere.
pub fn redirect_target(gate: Gate, authenticated: bool) -> Option<&'static str> {
    match (gate, authenticated) {
        (Gate::Public, true) => Some(paths::HOME),
        (Gate::Protected, false) => Some(paths::LOGIN),
        _ => None,
    }
}

/// Gate for the login/register routes.
#[component]
pub fn PublicGate() -> impl IntoView {
    gate_view(Gate::Public)
}

/// Gate for the app shell and every page inside it.
#[component]
pub fn ProtectedGate() -> impl IntoView {
    gate_view(Gate::Protected)
}

fn gate_view(gate: Gate) -> impl IntoView {
    let session = use_session();

    move || match redirect_target(gate, session.is_authenticated()) {
        Some(target) => view! { <Redirect path=target /> }.into_view(),
        None => view! { <Outlet /> }.into_view(),
    }
}
