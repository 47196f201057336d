//! Error types for configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading an explicit resolver configuration file.
///
/// Image resolution itself has no error type; only configuration can fail.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that caused the error.
        path: PathBuf,
        /// Source I/O error.
        source: std::io::Error,
    },
    /// Failed to parse the configuration JSON.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        /// Path that caused the error.
        path: PathBuf,
        /// Source parse error.
        source: serde_json::Error,
    },
}
