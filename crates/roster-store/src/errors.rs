use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StoreError
pub type Result<T> = std::result::Result<T, StoreError>;

/// Failures of the persistence layer.
///
/// `Read`, `Parse` and `Malformed` are fatal at open time: the process
/// cannot serve command traffic without a table. `Write` propagates to
/// the caller of `save` so in-memory and persisted state never diverge
/// silently.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The registry file exists but could not be read.
    #[error("failed to read registry file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The registry file is not valid JSON.
    #[error("registry file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The registry file parses but violates a schema invariant.
    #[error("registry file {path} is malformed in table '{table}': {source}")]
    Malformed {
        path: PathBuf,
        table: String,
        #[source]
        source: roster_core::TableError,
    },

    /// No table could be selected from the document.
    #[error("registry file {path} has no table named '{table}' and no usable primary table")]
    NoSuchTable { path: PathBuf, table: String },

    /// The registry file could not be written.
    #[error("failed to write registry file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
