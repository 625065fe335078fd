//! Error types for Markdown rendering.

use thiserror::Error;

/// Errors raised when a decoded pipeline lacks data the documentation needs.
#[derive(Error, Debug)]
pub enum RenderError {
    /// A field required for this activity's type is absent.
    #[error("Activity '{activity}' is missing required field `{field}`")]
    MissingField {
        activity: String,
        field: &'static str,
    },

    /// A field is present but has the wrong shape.
    #[error("Activity '{activity}' has an invalid `{field}`: {source}")]
    InvalidField {
        activity: String,
        field: &'static str,
        source: serde_json::Error,
    },

    /// A dependency lists no conditions, so there is nothing to document.
    #[error("Activity '{activity}' depends on '{dependency}' without any dependencyConditions")]
    EmptyDependencyConditions { activity: String, dependency: String },
}

/// Type alias for Result with RenderError.
pub type RenderResult<T> = Result<T, RenderError>;
