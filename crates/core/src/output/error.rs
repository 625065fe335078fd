//! Error types for writing the Markdown document.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while appending to the output document.
#[derive(Error, Debug)]
pub enum OutputError {
    /// Failed to open or create the output document.
    #[error("Failed to open output file {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write to or flush the output document.
    #[error("Failed to write output file {path:?}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Type alias for Result with OutputError.
pub type OutputResult<T> = Result<T, OutputError>;
