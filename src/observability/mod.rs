//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! guard, config and watcher produce:
//!     → tracing events (header writes at trace, compilation at debug,
//!       reloads at info/error)
//!
//! Consumers:
//!     → logging.rs subscriber (stdout, plain or JSON)
//!     → or whatever subscriber the host service installs
//! ```

pub mod logging;

pub use logging::init_logging;
