//! Path provider abstraction for decoupling from the UI shell.
//!
//! This module provides traits and implementations for resolving
//! application data paths without depending on any frontend framework.

use std::path::PathBuf;
use std::sync::Arc;

/// Trait for providing application data paths.
///
/// Implementations can target different shells (Android, desktop, tests)
/// with different data directory conventions.
pub trait PathProvider: Send + Sync {
    /// Get the root application data directory.
    fn app_data_dir(&self) -> PathBuf;

    /// Get the path of the persisted user aggregate.
    fn user_data_path(&self) -> PathBuf {
        self.app_data_dir().join("user_data.json")
    }
}

/// Shared reference to a PathProvider implementation.
pub type SharedPathProvider = Arc<dyn PathProvider>;

/// Host path provider using the platform data directory.
#[derive(Debug, Clone)]
pub struct HostPathProvider {
    app_data_dir: PathBuf,
}

impl HostPathProvider {
    /// Create a new HostPathProvider rooted at the platform data
    /// directory (e.g. `~/.local/share/PhotoShelf`).
    pub fn new() -> Self {
        let app_data_dir = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("PhotoShelf");
        Self { app_data_dir }
    }

    /// Create a HostPathProvider with a custom base directory.
    ///
    /// Useful for testing.
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            app_data_dir: base_dir,
        }
    }
}

impl Default for HostPathProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PathProvider for HostPathProvider {
    fn app_data_dir(&self) -> PathBuf {
        self.app_data_dir.clone()
    }
}
