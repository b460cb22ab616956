//! Error types for docsync.

use std::path::PathBuf;

/// Result type for docsync operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a sync run.
///
/// An out-of-date index is not an error; it is reported through
/// [`crate::sync::SyncOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("invalid {which} marker {marker:?}: {reason}")]
    InvalidMarker {
        which: &'static str,
        marker: String,
        reason: &'static str,
    },
}
