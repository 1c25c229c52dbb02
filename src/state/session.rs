//! Session State
//!
//! Bearer-token session shared through the component tree via context.
//! The persisted copy in local storage and the in-memory signal change
//! together; [`Session::set_token`] is the single write path for both.

use leptos::*;

/// Local storage key holding the token across page reloads.
const TOKEN_KEY: &str = "token";

/// Authentication state provided to all components
#[derive(Clone, Copy)]
pub struct Session {
    token: RwSignal<Option<String>>,
}

impl Session {
    fn with_token(token: Option<String>) -> Self {
        Self {
            token: create_rw_signal(token),
        }
    }

    /// Build the initial session, adopting a previously persisted token if
    /// one exists. The token is not validated here; a stale one surfaces
    /// as a session-expired error on the first protected call.
    pub fn restore() -> Self {
        Self::with_token(read_persisted())
    }

    /// Whether a credential is present. Reactive: route guards re-render
    /// through this.
    pub fn is_authenticated(&self) -> bool {
        self.token.with(|token| token.is_some())
    }

    /// Current token, without registering a reactive dependency. Request
    /// code reads the credential this way so a login or logout never
    /// re-triggers an in-flight fetch effect.
    pub fn token(&self) -> Option<String> {
        self.token.get_untracked()
    }

    /// Adopt a fresh credential (login, register) or drop the current one
    /// (logout, pass `None`).
    pub fn set_token(&self, token: Option<String>) {
        match token.as_deref() {
            Some(value) => persist(value),
            None => clear_persisted(),
        }
        self.token.set(token);
    }
}

/// Provide the session to the component tree. Called once, at the app root.
pub fn provide_session() {
    provide_context(Session::restore());
}

/// Access the session from any component below the app root.
pub fn use_session() -> Session {
    use_context::<Session>().expect("Session context not provided")
}

fn read_persisted() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(TOKEN_KEY).ok()?
}

fn persist(token: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }
}

fn clear_persisted() {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}
