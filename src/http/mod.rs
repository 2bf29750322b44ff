//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! Request
//!     → middleware.rs (capture user-agent)
//!     → inner service
//!     → middleware.rs (load current HeaderGuard, apply)
//!     → headers.rs (HeaderSink writes onto the Response)
//! ```

pub mod headers;
pub mod middleware;

pub use headers::{HeaderSink, HeaderSource};
pub use middleware::{apply_guard, guard_headers, shared, SharedGuard};
