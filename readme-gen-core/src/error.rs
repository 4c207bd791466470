use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure taxonomy for one generation run. Only tree-traversal warnings are
/// recovered locally (see [`crate::tree`]); every other kind propagates to
/// the pipeline boundary and is never retried automatically.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Filesystem error at '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("API Error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Invalid response from generation endpoint: {0}")]
    InvalidResponse(String),

    /// The user declined to overwrite or back up an existing README. A
    /// normal abort, not a system fault.
    #[error("Operation cancelled by user")]
    PersistenceCancelled,
}
