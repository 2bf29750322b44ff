//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GuardConfig (validated)
//!     → HeaderGuard::from_config (compiled policy)
//!     → shared via Arc<ArcSwap<_>> with the middleware
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap of the compiled HeaderGuard
//! ```
//!
//! # Design Decisions
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks
//! - A bad reload never replaces a working guard

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{GuardConfig, ObservabilityConfig, XssConfig};
pub use validation::ValidationError;
pub use watcher::GuardWatcher;
