//! Local input validation
//!
//! Pure pre-submit checks for the forms. A failed check blocks the network
//! call entirely and its message is rendered inline by the form that ran it.

use thiserror::Error;

/// Largest height, in meters, the calculator accepts.
pub const MAX_HEIGHT_M: f64 = 3.0;

/// Largest weight, in kilograms, the calculator accepts.
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Shortest accepted password.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Rejections for the measurement entry form.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementError {
    /// Not a number, or zero/negative
    #[error("Por favor, ingresa valores válidos (positivos y numéricos).")]
    Invalid,

    /// Numeric but beyond the plausible caps
    #[error("Por favor, ingresa valores válidos (altura < 3m y peso < 500kg).")]
    OutOfRange,
}

/// Rejections for the login/register forms.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsError {
    #[error("Email inválido.")]
    BadEmail,

    #[error("La contraseña debe tener al menos 6 caracteres.")]
    ShortPassword,
}

/// Parse and range-check the two measurement fields. Zero counts as
/// invalid, not merely out of range.
pub fn parse_measurements(
    height_raw: &str,
    weight_raw: &str,
) -> Result<(f64, f64), MeasurementError> {
    let height: f64 = height_raw
        .trim()
        .parse()
        .map_err(|_| MeasurementError::Invalid)?;
    let weight: f64 = weight_raw
        .trim()
        .parse()
        .map_err(|_| MeasurementError::Invalid)?;

    if !height.is_finite() || !weight.is_finite() || height <= 0.0 || weight <= 0.0 {
        return Err(MeasurementError::Invalid);
    }
    if height > MAX_HEIGHT_M || weight > MAX_WEIGHT_KG {
        return Err(MeasurementError::OutOfRange);
    }

    Ok((height, weight))
}

/// Validate the login/register inputs.
pub fn check_credentials(email: &str, password: &str) -> Result<(), CredentialsError> {
    if !is_valid_email(email) {
        return Err(CredentialsError::BadEmail);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CredentialsError::ShortPassword);
    }
    Ok(())
}

/// Minimal email shape check: exactly one `@` with a non-empty local part,
/// and a dot inside the domain with at least one character on each side.
pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_numeric_input() {
        assert_eq!(parse_measurements("", "70"), Err(MeasurementError::Invalid));
        assert_eq!(
            parse_measurements("1.70", "abc"),
            Err(MeasurementError::Invalid)
        );
        assert_eq!(
            parse_measurements("1,70", "70"),
            Err(MeasurementError::Invalid)
        );
    }

    #[test]
    fn test_rejects_zero_and_negative_values() {
        assert_eq!(
            parse_measurements("0", "70"),
            Err(MeasurementError::Invalid)
        );
        assert_eq!(
            parse_measurements("1.70", "0"),
            Err(MeasurementError::Invalid)
        );
        assert_eq!(
            parse_measurements("-1.70", "70"),
            Err(MeasurementError::Invalid)
        );
        assert_eq!(
            parse_measurements("1.70", "-5"),
            Err(MeasurementError::Invalid)
        );
    }

    #[test]
    fn test_rejects_nan_and_infinite_values() {
        assert_eq!(
            parse_measurements("NaN", "70"),
            Err(MeasurementError::Invalid)
        );
        assert_eq!(
            parse_measurements("1.70", "inf"),
            Err(MeasurementError::Invalid)
        );
    }

    #[test]
    fn test_rejects_values_beyond_the_caps() {
        assert_eq!(
            parse_measurements("3.01", "70"),
            Err(MeasurementError::OutOfRange)
        );
        assert_eq!(
            parse_measurements("1.70", "501"),
            Err(MeasurementError::OutOfRange)
        );
    }

    #[test]
    fn test_caps_are_inclusive() {
        assert_eq!(parse_measurements("3", "500"), Ok((3.0, 500.0)));
    }

    #[test]
    fn test_accepts_plausible_measurements() {
        assert_eq!(parse_measurements("1.70", "65"), Ok((1.7, 65.0)));
        assert_eq!(parse_measurements(" 1.70 ", " 65 "), Ok((1.7, 65.0)));
    }

    #[test]
    fn test_validation_messages_match_the_ui_text() {
        assert_eq!(
            MeasurementError::Invalid.to_string(),
            "Por favor, ingresa valores válidos (positivos y numéricos)."
        );
        assert_eq!(
            MeasurementError::OutOfRange.to_string(),
            "Por favor, ingresa valores válidos (altura < 3m y peso < 500kg)."
        );
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("test@gmail.com"));
        assert!(is_valid_email("user@sub.domain.example"));
        // Dots inside the domain may repeat; only the edges are constrained.
        assert!(is_valid_email("a@b..c"));

        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email("@no-local.example"));
        assert!(!is_valid_email("a@nodot"));
        assert!(!is_valid_email("a@.starts-with-dot"));
        assert!(!is_valid_email("a@ends-with-dot."));
        assert!(!is_valid_email("two@@ats.example"));
    }

    #[test]
    fn test_short_password_is_rejected_before_any_request() {
        assert_eq!(
            check_credentials("test@gmail.com", "12345"),
            Err(CredentialsError::ShortPassword)
        );
        assert_eq!(
            CredentialsError::ShortPassword.to_string(),
            "La contraseña debe tener al menos 6 caracteres."
        );
    }

    #[test]
    fn test_bad_email_wins_over_short_password() {
        assert_eq!(
            check_credentials("not-an-email", "123"),
            Err(CredentialsError::BadEmail)
        );
        assert_eq!(CredentialsError::BadEmail.to_string(), "Email inválido.");
    }

    #[test]
    fn test_valid_credentials_pass() {
        assert_eq!(check_credentials("test@gmail.com", "123456"), Ok(()));
    }
}
