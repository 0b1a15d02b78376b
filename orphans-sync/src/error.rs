//! Error types for orphans-sync.

use std::path::PathBuf;

use thiserror::Error;

use orphans_core::ConfigError;

/// Errors that abort a whole bootstrap run.
///
/// Per-entry copy failures never surface here; they are recorded as
/// [`crate::Outcome::Failed`].
#[derive(Debug, Error)]
pub enum SyncError {
    /// The manifest could not be loaded or failed validation.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A copy failed midway and the truncated destination could not be removed.
    #[error("I/O error at {path}: {source}; partial file left at {path} (cleanup failed: {cleanup})")]
    PartialCopy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        cleanup: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
