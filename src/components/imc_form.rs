//! IMC Form Component
//!
//! Measurement entry form: local validation, authenticated calculate call,
//! inline result and error display.

use leptos::*;

use crate::api::{self, ApiError, BmiResult};
use crate::state::use_session;
use crate::validate::parse_measurements;

/// Line rendered for the calculated index, always two decimals.
fn bmi_line(result: &BmiResult) -> String {
    format!("IMC: {:.2}", result.bmi)
}

/// Line rendered for the backend-assigned category.
fn category_line(result: &BmiResult) -> String {
    format!("Categoría: {}", result.category)
}

/// Message shown for a failed calculate call. Session and range failures
/// keep their own texts; everything else points at the backend.
fn failure_message(err: &ApiError) -> String {
    match err {
        ApiError::SessionExpired | ApiError::OutOfRange => err.to_string(),
        _ => "Error al calcular el IMC. Verifica si el backend está corriendo.".to_string(),
    }
}

/// Calculator form component
#[component]
pub fn ImcForm() -> impl IntoView {
    let session = use_session();

    let (height, set_height) = create_signal(String::new());
    let (weight, set_weight) = create_signal(String::new());
    let (result, set_result) = create_signal(None::<BmiResult>);
    let (error, set_error) = create_signal(None::<String>);
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let (height_m, weight_kg) = match parse_measurements(&height.get(), &weight.get()) {
            Ok(parsed) => parsed,
            Err(e) => {
                set_result.set(None);
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        let token = session.token().unwrap_or_default();
        set_submitting.set(true);

        spawn_local(async move {
            match api::calculate_bmi(&token, height_m, weight_kg).await {
                Ok(outcome) => {
                    set_result.set(Some(outcome));
                    set_error.set(None);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("calculate failed: {e:?}").into());
                    set_result.set(None);
                    set_error.set(Some(failure_message(&e)));
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="w-full">
            <h1 class="text-3xl font-bold text-sky-700 text-center mb-6">"Calculadora de IMC"</h1>

            <form on:submit=on_submit class="space-y-4">
                <div>
                    <label class="block text-sm text-sky-700 font-medium mb-1">"Altura (m):"</label>
                    <input
                        type="number"
                        step="0.01"
                        placeholder="Altura (m)"
                        prop:value=move || height.get()
                        on:input=move |ev| set_height.set(event_target_value(&ev))
                        class="w-full rounded-lg px-4 py-3 border border-sky-200
                               focus:border-sky-500 focus:outline-none"
                    />
                </div>

                <div>
                    <label class="block text-sm text-sky-700 font-medium mb-1">"Peso (kg):"</label>
                    <input
                        type="number"
                        step="0.1"
                        placeholder="Peso (kg)"
                        prop:value=move || weight.get()
                        on:input=move |ev| set_weight.set(event_target_value(&ev))
                        class="w-full rounded-lg px-4 py-3 border border-sky-200
                               focus:border-sky-500 focus:outline-none"
                    />
                </div>

                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-sky-700 hover:bg-sky-800 disabled:bg-sky-300
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold text-white
                           transition-colors"
                >
                    {move || if submitting.get() { "Calculando..." } else { "Calcular" }}
                </button>
            </form>

            {move || error.get().map(|message| view! {
                <p class="mt-4 text-center text-red-500 font-medium">{message}</p>
            })}

            {move || result.get().map(|outcome| view! {
                <div class="mt-6 p-4 rounded-lg bg-sky-100 border border-sky-200 text-center">
                    <h2 class="text-lg font-semibold text-sky-700 mb-2">"Resultado"</h2>
                    <p class="text-xl font-bold text-sky-700">{bmi_line(&outcome)}</p>
                    <p class="text-md text-sky-700">{category_line(&outcome)}</p>
                </div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(bmi: f64, category: &str) -> BmiResult {
        BmiResult {
            bmi,
            category: category.to_string(),
        }
    }

    #[test]
    fn test_bmi_line_keeps_two_decimals() {
        assert_eq!(bmi_line(&result(22.5, "Normal")), "IMC: 22.50");
        assert_eq!(bmi_line(&result(17.999, "Bajo peso")), "IMC: 18.00");
    }

    #[test]
    fn test_category_line_shows_the_backend_text() {
        assert_eq!(
            category_line(&result(22.5, "Normal")),
            "Categoría: Normal"
        );
    }

    #[test]
    fn test_session_and_range_errors_keep_their_messages() {
        assert_eq!(
            failure_message(&ApiError::SessionExpired),
            "Token inválido o expirado. Inicia sesión nuevamente."
        );
        assert_eq!(
            failure_message(&ApiError::OutOfRange),
            "Datos fuera de rango o inválidos."
        );
    }

    #[test]
    fn test_other_errors_point_at_the_backend() {
        let generic = "Error al calcular el IMC. Verifica si el backend está corriendo.";
        assert_eq!(
            failure_message(&ApiError::Network("timeout".to_string())),
            generic
        );
        assert_eq!(
            failure_message(&ApiError::Backend("boom".to_string())),
            generic
        );
    }
}
