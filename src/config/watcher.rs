//! Configuration file watcher for hot reload.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use notify::{Config, Event, RecommendedWatcher, RecursiveMode, Watcher};

use crate::config::loader::{load_config, ConfigError};
use crate::config::validation::ValidationError;
use crate::guard::HeaderGuard;
use crate::http::middleware::SharedGuard;

/// A watcher that monitors the configuration file and swaps in a freshly
/// compiled [`HeaderGuard`] whenever it changes.
pub struct GuardWatcher {
    path: PathBuf,
    guard: SharedGuard,
}

impl GuardWatcher {
    /// Create a new GuardWatcher publishing into `guard`.
    pub fn new(path: &Path, guard: SharedGuard) -> Self {
        Self {
            path: path.to_path_buf(),
            guard,
        }
    }

    /// Load, compile and publish the config once.
    ///
    /// On failure the current guard is left in place.
    pub fn reload(&self) -> Result<(), ConfigError> {
        reload_into(&self.path, &self.guard)
    }

    /// Start watching the file in a background thread.
    ///
    /// Watching stops when the returned watcher is dropped.
    pub fn run(self) -> Result<RecommendedWatcher, notify::Error> {
        let guard = self.guard.clone();
        let path = self.path.clone();

        let mut watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if event.kind.is_modify() || event.kind.is_create() {
                        tracing::info!("Config file change detected, reloading...");
                        if let Err(e) = reload_into(&path, &guard) {
                            tracing::error!(
                                "Failed to reload config: {}. Keeping current header guard.",
                                e
                            );
                        }
                    }
                }
                Err(e) => tracing::error!("Watch error: {:?}", e),
            },
            Config::default().with_poll_interval(Duration::from_secs(2)),
        )?;

        watcher.watch(&self.path, RecursiveMode::NonRecursive)?;

        tracing::info!(path = ?self.path, "Config watcher started");
        Ok(watcher)
    }
}

fn reload_into(path: &Path, guard: &SharedGuard) -> Result<(), ConfigError> {
    let config = load_config(path)?;
    // Validated above, so only the frame option can be reported here.
    let compiled = HeaderGuard::from_config(&config).map_err(|e| {
        ConfigError::Validation(vec![ValidationError::new("frame_options", e.to_string())])
    })?;
    guard.store(Arc::new(compiled));
    tracing::info!(path = ?path, "Header guard reloaded");
    Ok(())
}
