//! Adapter configuration.

use std::path::PathBuf;

/// Configuration for [`RibbonAdapter`](crate::RibbonAdapter).
#[derive(Debug, Clone)]
pub struct AdapterConfig {
    /// Fully qualified name of the provider's entry-point type.
    ///
    /// This is the adapter's only discovery key; a provider release that
    /// renames the type is reported as not installed.
    pub entry_point: String,

    /// Directory scanned for provider libraries (None = the host loads
    /// modules itself)
    pub modules_dir: Option<PathBuf>,
}

impl AdapterConfig {
    /// Create a configuration for the given entry-point type name.
    pub fn new(entry_point: impl Into<String>) -> Self {
        Self {
            entry_point: entry_point.into(),
            modules_dir: None,
        }
    }

    /// Set the directory scanned for provider libraries.
    pub fn with_modules_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.modules_dir = Some(dir.into());
        self
    }
}
