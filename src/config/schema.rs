//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.
//! Every field has a default, and the default configuration sets no headers.

use serde::{Deserialize, Serialize};

pub use crate::guard::xss::XssConfig;

/// Root configuration for the header guard.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct GuardConfig {
    /// X-Frame-Options directive, e.g. "DENY" or "ALLOW-FROM https://a.example".
    /// Absent or empty disables the header.
    pub frame_options: Option<String>,

    /// Send `X-Content-Type-Options: nosniff`.
    pub nosniff: bool,

    /// Send `X-Download-Options: noopen`.
    pub noopen: bool,

    /// X-XSS-Protection settings.
    pub xss: XssConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error) or a full filter directive.
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones.
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            json: false,
        }
    }
}
