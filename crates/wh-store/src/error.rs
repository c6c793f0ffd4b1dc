//! Error types for storage and file transfer.

use std::path::PathBuf;

/// Alias for `Result<T, StorageError>`.
pub type StoreResult<T> = Result<T, StorageError>;

/// A persistence read or write failed. In-memory state is unaffected.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Reading a key failed for a reason other than absence.
    #[error("cannot read '{key}': {source}")]
    Read {
        /// The storage key.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Writing a key failed (permissions, disk full, ...).
    #[error("cannot write '{key}': {source}")]
    Write {
        /// The storage key.
        key: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A record could not be serialized.
    #[error("cannot encode '{key}': {source}")]
    Encode {
        /// The storage key.
        key: String,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },

    /// The store refuses all access.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Reading an import file or writing an export file failed.
#[derive(Debug, thiserror::Error)]
pub enum TransferError {
    /// The import source could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    Read {
        /// Source path (`-` for stdin).
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The export target could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        /// Target path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
