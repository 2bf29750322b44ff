//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the X-Frame-Options directive parses and renders
//! - Check the log filter is well formed
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: GuardConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::fmt;

use tracing_subscriber::EnvFilter;

use crate::config::schema::GuardConfig;
use crate::guard::FrameOption;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub(crate) fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &GuardConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(value) = config.frame_options.as_deref().filter(|v| !v.is_empty()) {
        let rendered = value
            .parse::<FrameOption>()
            .and_then(|option| option.header_value());
        if let Err(e) = rendered {
            errors.push(ValidationError::new("frame_options", e.to_string()));
        }
    }

    if let Err(e) = EnvFilter::try_new(&config.observability.log_level) {
        errors.push(ValidationError::new("observability.log_level", e.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(validate_config(&GuardConfig::default()).is_ok());
    }

    #[test]
    fn test_empty_frame_options_is_valid() {
        let config = GuardConfig {
            frame_options: Some(String::new()),
            ..Default::default()
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = GuardConfig {
            frame_options: Some("ALLOW-FROM".into()),
            ..Default::default()
        };
        config.observability.log_level = "header_guard=loud".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "frame_options");
        assert!(errors[0].message.contains("ALLOW-FROM"));
        assert_eq!(errors[1].field, "observability.log_level");
    }

    #[test]
    fn test_invalid_directive_message() {
        let config = GuardConfig {
            frame_options: Some("Yes".into()),
            ..Default::default()
        };
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors[0].to_string(),
            "frame_options: X-Frame accepts a string within DENY, ALLOW-FROM or SAMEORIGIN"
        );
    }
}
