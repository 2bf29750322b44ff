//! Error definitions for header validation.

use axum::http::header::InvalidHeaderValue;
use thiserror::Error;

/// Errors raised while validating a security header option.
///
/// All variants are caller input errors: nothing is retried and no default is
/// substituted.
#[derive(Debug, Error)]
pub enum GuardError {
    /// The X-Frame-Options directive is not one of the allowed values.
    #[error("X-Frame accepts a string within DENY, ALLOW-FROM or SAMEORIGIN")]
    InvalidOption,

    /// `ALLOW-FROM` was given without an origin.
    #[error("Specify a value next to ALLOW-FROM using a space")]
    MissingArgument,

    /// The computed value cannot be carried in an HTTP header.
    #[error("Invalid header value: {0}")]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
}

/// Result type for guard operations.
pub type GuardResult<T> = Result<T, GuardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GuardError::InvalidOption;
        assert!(err.to_string().contains("DENY, ALLOW-FROM or SAMEORIGIN"));

        let err = GuardError::MissingArgument;
        assert_eq!(
            err.to_string(),
            "Specify a value next to ALLOW-FROM using a space"
        );
    }
}
