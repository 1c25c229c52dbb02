//! API error types
//!
//! Failures are tagged once, at the client boundary, from the HTTP status
//! and the operation that produced it. Views match on variants and never
//! inspect backend message text.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// The remote operation a response belongs to.
///
/// Classification depends on the call site: a 401 from `/auth/login` means
/// the password was wrong, while a 401 from a bearer-authenticated endpoint
/// means the stored token is no longer valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Login,
    Register,
    Calculate,
    History,
    Statistics,
}

/// A failed API call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The email is already registered (409 on register)
    #[error("El email ya está registrado.")]
    EmailTaken,

    /// Wrong email/password pair (401 on login or register)
    #[error("Credenciales inválidas.")]
    InvalidCredentials,

    /// The stored bearer token was rejected (401 on a protected call)
    #[error("Token inválido o expirado. Inicia sesión nuevamente.")]
    SessionExpired,

    /// The backend rejected the submitted measurements (400 on calculate)
    #[error("Datos fuera de rango o inválidos.")]
    OutOfRange,

    /// Any other backend-reported failure, message passed through
    #[error("{0}")]
    Backend(String),

    /// Transport failure: unreachable host, CORS, malformed body
    #[error("No se pudo conectar con el servidor.")]
    Network(String),
}

impl ApiError {
    /// Map a non-2xx status to a tagged variant. `message` is the
    /// human-readable text extracted from the response body, kept only for
    /// statuses with no more specific meaning.
    pub fn classify(op: Operation, status: u16, message: String) -> Self {
        match (op, status) {
            (Operation::Register, 409) => ApiError::EmailTaken,
            (Operation::Login | Operation::Register, 401) => ApiError::InvalidCredentials,
            (_, 401) => ApiError::SessionExpired,
            (Operation::Calculate, 400) => ApiError::OutOfRange,
            _ => ApiError::Backend(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(op: Operation, status: u16) -> ApiError {
        ApiError::classify(op, status, "boom".to_string())
    }

    #[test]
    fn test_conflict_on_register_means_email_taken() {
        assert_eq!(classify(Operation::Register, 409), ApiError::EmailTaken);
    }

    #[test]
    fn test_unauthorized_on_auth_endpoints_means_bad_credentials() {
        assert_eq!(
            classify(Operation::Login, 401),
            ApiError::InvalidCredentials
        );
        assert_eq!(
            classify(Operation::Register, 401),
            ApiError::InvalidCredentials
        );
    }

    #[test]
    fn test_unauthorized_on_protected_endpoints_means_expired_session() {
        assert_eq!(classify(Operation::Calculate, 401), ApiError::SessionExpired);
        assert_eq!(classify(Operation::History, 401), ApiError::SessionExpired);
        assert_eq!(
            classify(Operation::Statistics, 401),
            ApiError::SessionExpired
        );
    }

    #[test]
    fn test_bad_request_on_calculate_means_out_of_range() {
        assert_eq!(classify(Operation::Calculate, 400), ApiError::OutOfRange);
    }

    #[test]
    fn test_anything_else_carries_the_backend_message() {
        assert_eq!(
            classify(Operation::History, 500),
            ApiError::Backend("boom".to_string())
        );
        assert_eq!(
            classify(Operation::Login, 409),
            ApiError::Backend("boom".to_string())
        );
        assert_eq!(
            classify(Operation::Calculate, 422),
            ApiError::Backend("boom".to_string())
        );
    }

    #[test]
    fn test_display_texts_are_the_ui_messages() {
        assert_eq!(
            ApiError::EmailTaken.to_string(),
            "El email ya está registrado."
        );
        assert_eq!(
            ApiError::InvalidCredentials.to_string(),
            "Credenciales inválidas."
        );
        assert_eq!(
            ApiError::SessionExpired.to_string(),
            "Token inválido o expirado. Inicia sesión nuevamente."
        );
        assert_eq!(
            ApiError::OutOfRange.to_string(),
            "Datos fuera de rango o inválidos."
        );
        assert_eq!(
            ApiError::Backend("detalle".to_string()).to_string(),
            "detalle"
        );
        assert_eq!(
            ApiError::Network("timeout".to_string()).to_string(),
            "No se pudo conectar con el servidor."
        );
    }
}
