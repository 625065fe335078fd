//! Error types for documentation generation.

use crate::document::DocumentError;
use crate::output::OutputError;
use crate::render::RenderError;
use thiserror::Error;

/// Result type for documentation generation.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Errors that can occur while documenting a pipeline.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The pipeline file could not be read or decoded.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// The pipeline lacks data its documentation needs.
    #[error("Failed to render pipeline {pipeline}: {source}")]
    Render {
        pipeline: String,
        source: RenderError,
    },

    /// The Markdown document could not be opened or written.
    #[error(transparent)]
    Output(#[from] OutputError),
}
