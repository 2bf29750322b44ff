//! X-XSS-Protection value selection.
//!
//! Internet Explorer before version 9 had an XSS filter that could itself be
//! abused, so those browsers get `0` unless the caller opts in.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Value sent to browsers where the filter is switched on.
pub const XSS_BLOCK: &str = "1; mode=block";

/// Value sent to old Internet Explorer.
pub const XSS_DISABLED: &str = "0";

/// First Internet Explorer version whose filter is left enabled.
const MIN_SAFE_IE_VERSION: u64 = 9;

static IE_VERSION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)msie\s*([0-9]+)").expect("IE user-agent pattern is valid")
});

/// X-XSS-Protection settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct XssConfig {
    /// Send the header at all.
    pub enabled: bool,

    /// Send `1; mode=block` to old IE as well, skipping user-agent checks.
    #[serde(alias = "enableOnOldIE")]
    pub enable_on_old_ie: bool,
}

/// Extract the Internet Explorer major version from a user agent.
///
/// Returns `None` when there is no `MSIE <n>` token. A version too long for
/// a `u64` saturates to `u64::MAX`.
pub fn ie_version(user_agent: &str) -> Option<u64> {
    let caps = IE_VERSION.captures(user_agent)?;
    let digits = caps.get(1)?.as_str();
    Some(digits.parse().unwrap_or(u64::MAX))
}

/// Pick the header value for an enabled config, or `None` if disabled.
pub fn header_value(config: &XssConfig, user_agent: Option<&str>) -> Option<&'static str> {
    if !config.enabled {
        return None;
    }

    if config.enable_on_old_ie {
        return Some(XSS_BLOCK);
    }

    match user_agent.and_then(ie_version) {
        Some(version) if version < MIN_SAFE_IE_VERSION => Some(XSS_DISABLED),
        _ => Some(XSS_BLOCK),
    }
}
