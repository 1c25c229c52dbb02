//! Login Page
//!
//! Email/password form that trades credentials for a bearer token.

use leptos::*;
use leptos_router::*;

use crate::api::{self, ApiError};
use crate::components::guard::paths;
use crate::state::use_session;
use crate::validate::check_credentials;

/// Message shown for a failed login or register call. Credential and
/// conflict failures keep their own texts; everything else collapses to a
/// generic line.
pub(crate) fn auth_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::EmailTaken | ApiError::InvalidCredentials => err.to_string(),
        _ => "Error de autenticación.".to_string(),
    }
}

/// Login page component
#[component]
pub fn Login() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let email_value = email.get();
        let password_value = password.get();
        if let Err(e) = check_credentials(&email_value, &password_value) {
            set_error.set(Some(e.to_string()));
            return;
        }

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&email_value, &password_value).await {
                Ok(token) => {
                    session.set_token(Some(token));
                    navigate(paths::HOME, Default::default());
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("login failed: {e:?}").into());
                    set_error.set(Some(auth_failure_message(&e)));
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center">
            <div class="w-full max-w-md p-10 bg-white rounded-xl shadow-lg">
                <h1 class="text-3xl font-bold text-sky-700 text-center mb-6">"Iniciar sesión"</h1>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="email"
                        placeholder="Email"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        class="w-full rounded-lg px-4 py-3 border border-sky-200
                               focus:border-sky-500 focus:outline-none"
                    />
                    <input
                        type="password"
                        placeholder="Contraseña"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full rounded-lg px-4 py-3 border border-sky-200
                               focus:border-sky-500 focus:outline-none"
                    />

                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full bg-sky-700 hover:bg-sky-800 disabled:bg-sky-300
                               disabled:cursor-not-allowed rounded-lg py-3 font-semibold text-white
                               transition-colors"
                    >
                        {move || if submitting.get() { "Entrando..." } else { "Iniciar sesión" }}
                    </button>
                </form>

                {move || error.get().map(|message| view! {
                    <p class="mt-4 text-center text-red-500 font-medium">{message}</p>
                })}

                <p class="mt-6 text-center text-sky-700">
                    "¿No tienes cuenta? "
                    <A href=paths::REGISTER class="font-semibold underline">"Regístrate"</A>
                </p>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_failures_keep_their_messages() {
        assert_eq!(
            auth_failure_message(&ApiError::InvalidCredentials),
            "Credenciales inválidas."
        );
        assert_eq!(
            auth_failure_message(&ApiError::EmailTaken),
            "El email ya está registrado."
        );
    }

    #[test]
    fn test_other_failures_collapse_to_the_generic_line() {
        assert_eq!(
            auth_failure_message(&ApiError::Network("timeout".to_string())),
            "Error de autenticación."
        );
        assert_eq!(
            auth_failure_message(&ApiError::Backend("boom".to_string())),
            "Error de autenticación."
        );
    }
}
