//! Error types for module loading.

use thiserror::Error;

/// Errors from the fallible edge of the adapter: loading provider modules.
///
/// Facade calls never return these; degradation there is expressed through
/// defaults and the diagnostics channel.
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Failed to load a provider library
    #[error("failed to load provider library: {0}")]
    LoadFailed(String),

    /// Module entry symbol not found
    #[error("module entry symbol not found: {0}")]
    SymbolNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for module loading operations.
pub type Result<T> = std::result::Result<T, AdapterError>;
