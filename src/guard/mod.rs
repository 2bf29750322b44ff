//! Security header operations.
//!
//! # Data Flow
//! ```text
//! GuardConfig
//!     → HeaderGuard::from_config (parse frame option, render values once)
//!     → HeaderGuard::apply per response
//!         → X-Frame-Options        (frame.rs)
//!         → X-Content-Type-Options
//!         → X-Download-Options
//!         → X-XSS-Protection       (xss.rs, reads request user-agent)
//! ```
//!
//! # Design Decisions
//! - Each operation writes at most one header and has no other effect
//! - Only X-Frame-Options input can be invalid; every other operation is total
//! - Operations never log or respond on error; the caller owns that path

pub mod frame;
pub mod xss;

use axum::http::header::{USER_AGENT, X_CONTENT_TYPE_OPTIONS, X_FRAME_OPTIONS, X_XSS_PROTECTION};
use axum::http::{HeaderName, HeaderValue};

use crate::config::GuardConfig;
use crate::error::GuardResult;
use crate::http::headers::{HeaderSink, HeaderSource};

pub use frame::FrameOption;
pub use xss::XssConfig;

/// `X-Download-Options`, not among the `http` crate's standard names.
pub const X_DOWNLOAD_OPTIONS: HeaderName = HeaderName::from_static("x-download-options");

/// Set `X-Frame-Options` from a directive string.
///
/// An absent or empty value is a no-op. See [`FrameOption`] for the accepted
/// forms.
pub fn add_frame_options<R>(res: &mut R, value: Option<&str>) -> GuardResult<()>
where
    R: HeaderSink + ?Sized,
{
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return Ok(()),
    };

    let option: FrameOption = value.parse()?;
    set(res, X_FRAME_OPTIONS, option.header_value()?);
    Ok(())
}

/// Set `X-Content-Type-Options: nosniff` when enabled.
pub fn add_no_sniff<R>(res: &mut R, enabled: bool)
where
    R: HeaderSink + ?Sized,
{
    if enabled {
        set(res, X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    }
}

/// Set `X-Download-Options: noopen` when enabled.
pub fn add_no_open<R>(res: &mut R, enabled: bool)
where
    R: HeaderSink + ?Sized,
{
    if enabled {
        set(res, X_DOWNLOAD_OPTIONS, HeaderValue::from_static("noopen"));
    }
}

/// Set `X-XSS-Protection` based on the config and the request's user agent.
pub fn add_xss_filter<Q, R>(req: &Q, res: &mut R, config: Option<&XssConfig>)
where
    Q: HeaderSource + ?Sized,
    R: HeaderSink + ?Sized,
{
    let Some(config) = config else {
        return;
    };

    if let Some(value) = xss::header_value(config, req.header_str(&USER_AGENT)) {
        set(res, X_XSS_PROTECTION, HeaderValue::from_static(value));
    }
}

fn set<R>(res: &mut R, name: HeaderName, value: HeaderValue)
where
    R: HeaderSink + ?Sized,
{
    tracing::trace!(header = %name, value = ?value, "Security header set");
    res.set_header(name, value);
}

/// A validated header policy, ready to apply to any number of responses.
#[derive(Debug, Clone, Default)]
pub struct HeaderGuard {
    frame_options: Option<HeaderValue>,
    nosniff: bool,
    noopen: bool,
    xss: XssConfig,
}

impl HeaderGuard {
    /// A policy that sets no headers.
    pub fn disabled() -> Self {
        Self::default()
    }

    /// Compile a policy from configuration.
    ///
    /// Fails with the same errors as [`add_frame_options`].
    pub fn from_config(config: &GuardConfig) -> GuardResult<Self> {
        let frame_options = match config.frame_options.as_deref() {
            Some(v) if !v.is_empty() => Some(v.parse::<FrameOption>()?.header_value()?),
            _ => None,
        };

        if config.xss.enable_on_old_ie && !config.xss.enabled {
            tracing::warn!("xss.enable_on_old_ie has no effect while xss.enabled is false");
        }

        let guard = Self {
            frame_options,
            nosniff: config.nosniff,
            noopen: config.noopen,
            xss: config.xss,
        };

        tracing::debug!(
            frame_options = ?guard.frame_options,
            nosniff = guard.nosniff,
            noopen = guard.noopen,
            xss_enabled = guard.xss.enabled,
            xss_on_old_ie = guard.xss.enable_on_old_ie,
            "Header guard compiled"
        );

        Ok(guard)
    }

    /// Write every configured header onto `res`.
    pub fn apply<Q, R>(&self, req: &Q, res: &mut R)
    where
        Q: HeaderSource + ?Sized,
        R: HeaderSink + ?Sized,
    {
        if let Some(ref value) = self.frame_options {
            set(res, X_FRAME_OPTIONS, value.clone());
        }
        add_no_sniff(res, self.nosniff);
        add_no_open(res, self.noopen);
        add_xss_filter(req, res, Some(&self.xss));
    }

    /// The rendered X-Frame-Options value, if any.
    pub fn frame_options(&self) -> Option<&HeaderValue> {
        self.frame_options.as_ref()
    }
}
