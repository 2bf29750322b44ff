//! X-Frame-Options directive parsing.
//!
//! Input is a directive keyword, optionally followed by a space and an
//! origin: `"DENY"`, `"sameorigin"`, `"ALLOW-FROM http://example.com"`.
//! The keyword is matched case-insensitively and rendered upper-case.
//!
//! Only the first space separates the directive from the origin and tokens
//! after the origin are dropped, so an origin containing a space is cut at
//! that space.

use std::fmt;
use std::str::FromStr;

use axum::http::HeaderValue;

use crate::error::{GuardError, GuardResult};

const DENY: &str = "DENY";
const SAME_ORIGIN: &str = "SAMEORIGIN";
const ALLOW_FROM: &str = "ALLOW-FROM";

/// A validated X-Frame-Options value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameOption {
    /// Never allow framing.
    Deny,
    /// Allow framing by pages of the same origin.
    SameOrigin,
    /// Allow framing by the given origin. Not validated as a URL.
    AllowFrom(String),
}

impl FrameOption {
    /// The directive keyword, without the origin.
    pub fn directive(&self) -> &'static str {
        match self {
            FrameOption::Deny => DENY,
            FrameOption::SameOrigin => SAME_ORIGIN,
            FrameOption::AllowFrom(_) => ALLOW_FROM,
        }
    }

    /// Render the header value.
    ///
    /// Fails only when an `ALLOW-FROM` origin holds bytes that are not legal
    /// in a header value.
    pub fn header_value(&self) -> GuardResult<HeaderValue> {
        match self {
            FrameOption::Deny => Ok(HeaderValue::from_static(DENY)),
            FrameOption::SameOrigin => Ok(HeaderValue::from_static(SAME_ORIGIN)),
            FrameOption::AllowFrom(origin) => {
                Ok(HeaderValue::from_str(&format!("{} {}", ALLOW_FROM, origin))?)
            }
        }
    }
}

impl FromStr for FrameOption {
    type Err = GuardError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut tokens = value.split(' ');
        let directive = tokens.next().unwrap_or_default().trim().to_uppercase();

        match directive.as_str() {
            DENY => Ok(FrameOption::Deny),
            SAME_ORIGIN => Ok(FrameOption::SameOrigin),
            ALLOW_FROM => match tokens.next() {
                Some(origin) => Ok(FrameOption::AllowFrom(origin.to_string())),
                None => Err(GuardError::MissingArgument),
            },
            _ => Err(GuardError::InvalidOption),
        }
    }
}

impl fmt::Display for FrameOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameOption::AllowFrom(origin) => write!(f, "{} {}", ALLOW_FROM, origin),
            other => f.write_str(other.directive()),
        }
    }
}
