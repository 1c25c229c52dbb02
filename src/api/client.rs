//! HTTP API Client
//!
//! Functions for communicating with the IMC REST API. Non-2xx responses
//! are turned into tagged [`ApiError`] values here, so callers never look
//! at raw statuses or backend message text.

use gloo_net::http::{Request, Response};
use serde::{Deserialize, Serialize};

use super::dto::{BmiResult, HistoryEntry, StatsSummary, Strategy, TokenResponse};
use super::error::{ApiError, ApiResult, Operation};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("imc_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ API Functions ============

/// Log in with an email/password pair, returning the bearer token.
pub async fn login(email: &str, password: &str) -> ApiResult<String> {
    auth_request(Operation::Login, "/auth/login", email, password).await
}

/// Register a new account, returning the bearer token for the fresh session.
pub async fn register(email: &str, password: &str) -> ApiResult<String> {
    auth_request(Operation::Register, "/auth/register", email, password).await
}

/// Submit one measurement pair for calculation and storage.
pub async fn calculate_bmi(token: &str, height_m: f64, weight_kg: f64) -> ApiResult<BmiResult> {
    #[derive(Serialize)]
    struct CalculateRequest {
        altura: f64,
        peso: f64,
    }

    let response = Request::post(&format!("{}/imc/calcular", get_api_base()))
        .header("Authorization", &bearer(token))
        .json(&CalculateRequest {
            altura: height_m,
            peso: weight_kg,
        })
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from(Operation::Calculate, response).await);
    }

    response.json().await.map_err(network_error)
}

/// Fetch the full measurement history, oldest first.
pub async fn fetch_history(token: &str) -> ApiResult<Vec<HistoryEntry>> {
    let response = Request::get(&format!("{}/historial", get_api_base()))
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from(Operation::History, response).await);
    }

    response.json().await.map_err(network_error)
}

/// Fetch the aggregate summary computed with the given strategy.
pub async fn fetch_summary(token: &str, strategy: Strategy) -> ApiResult<StatsSummary> {
    let url = format!(
        "{}/estadisticas/summary?estrategia={}",
        get_api_base(),
        strategy.as_query()
    );

    let response = Request::get(&url)
        .header("Authorization", &bearer(token))
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from(Operation::Statistics, response).await);
    }

    response.json().await.map_err(network_error)
}

async fn auth_request(op: Operation, path: &str, email: &str, password: &str) -> ApiResult<String> {
    #[derive(Serialize)]
    struct AuthRequest<'a> {
        email: &'a str,
        password: &'a str,
    }

    let response = Request::post(&format!("{}{}", get_api_base(), path))
        .json(&AuthRequest { email, password })
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;

    if !response.ok() {
        return Err(error_from(op, response).await);
    }

    let token: TokenResponse = response.json().await.map_err(network_error)?;
    Ok(token.access_token)
}

fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}

/// Error body shape used by the backend. `message` is either a string or,
/// for field validation failures, an array of strings.
#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<serde_json::Value>,
}

async fn error_from(op: Operation, response: Response) -> ApiError {
    let status = response.status();
    let body = response.json::<ErrorBody>().await.ok();
    ApiError::classify(op, status, body_message(body, status))
}

fn body_message(body: Option<ErrorBody>, status: u16) -> String {
    let text = body.and_then(|b| b.message).and_then(|m| match m {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Array(items) => {
            let parts: Vec<String> = items
                .into_iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    });

    text.unwrap_or_else(|| format!("Error del servidor (HTTP {status})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(json: &str) -> Option<ErrorBody> {
        serde_json::from_str(json).ok()
    }

    #[test]
    fn test_string_message_is_passed_through() {
        assert_eq!(
            body_message(body(r#"{ "message": "Credenciales inválidas" }"#), 401),
            "Credenciales inválidas"
        );
    }

    #[test]
    fn test_array_messages_are_joined() {
        let json = r#"{ "message": ["la altura debe ser positiva", "el peso es requerido"] }"#;
        assert_eq!(
            body_message(body(json), 400),
            "la altura debe ser positiva, el peso es requerido"
        );
    }

    #[test]
    fn test_unusable_bodies_fall_back_to_the_status() {
        assert_eq!(body_message(None, 500), "Error del servidor (HTTP 500)");
        assert_eq!(body_message(body("{}"), 502), "Error del servidor (HTTP 502)");
        assert_eq!(
            body_message(body(r#"{ "message": 42 }"#), 500),
            "Error del servidor (HTTP 500)"
        );
        assert_eq!(
            body_message(body(r#"{ "message": [] }"#), 400),
            "Error del servidor (HTTP 400)"
        );
    }
}
