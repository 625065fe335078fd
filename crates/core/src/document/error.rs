//! Error types for pipeline document loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a pipeline document.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// Failed to read the pipeline file from disk.
    #[error("Failed to read pipeline file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON, or a required field is missing.
    ///
    /// serde reports the missing field by name together with its line and
    /// column, e.g. ``missing field `activities` at line 4 column 3``.
    #[error("Failed to parse pipeline file at {path}: {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Type alias for Result with DocumentError.
pub type DocumentResult<T> = Result<T, DocumentError>;
