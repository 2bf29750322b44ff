//! HTTP response security headers.
//!
//! Sets X-Frame-Options, X-Content-Type-Options, X-Download-Options and
//! X-XSS-Protection from caller configuration, the last one depending on the
//! request's user agent.
//!
//! # Architecture Overview
//!
//! ```text
//!     guard.toml ──▶ config ──▶ HeaderGuard ◀── watcher (hot reload)
//!                                   │
//!     Request ──▶ http::middleware ─┼──▶ inner service ──▶ Response
//!                                   ▼
//!                         guard::add_* operations
//!                                   │
//!                         http::headers (HeaderSink / HeaderSource)
//! ```
//!
//! The four `guard::add_*` operations are usable on their own with any
//! type implementing [`HeaderSink`] and [`HeaderSource`].

pub mod config;
pub mod error;
pub mod guard;
pub mod http;
pub mod observability;

pub use config::GuardConfig;
pub use error::{GuardError, GuardResult};
pub use guard::{
    add_frame_options, add_no_open, add_no_sniff, add_xss_filter, FrameOption, HeaderGuard,
    XssConfig,
};
pub use http::{HeaderSink, HeaderSource, SharedGuard};
