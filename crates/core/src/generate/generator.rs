//! Reads one pipeline document and appends its documentation.

use super::error::{GenerateError, GenerateResult};
use crate::document::load_pipeline;
use crate::output::MarkdownSink;
use crate::render::render_pipeline;
use adfdoc_protocol::config_models::GlobalConfig;
use std::path::PathBuf;
use tracing::{debug, info};

/// Options for documenting a single pipeline.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Data Factory pipeline JSON file to read.
    pub pipeline_file: PathBuf,

    /// Markdown document the documentation is appended to. Created if it
    /// does not exist.
    pub markdown_file: PathBuf,

    /// Rendering settings.
    pub config: GlobalConfig,
}

impl GenerateOptions {
    /// Options with the default configuration.
    pub fn new(pipeline_file: impl Into<PathBuf>, markdown_file: impl Into<PathBuf>) -> Self {
        Self {
            pipeline_file: pipeline_file.into(),
            markdown_file: markdown_file.into(),
            config: GlobalConfig::default(),
        }
    }

    pub fn with_config(mut self, config: GlobalConfig) -> Self {
        self.config = config;
        self
    }
}

/// Appends the documentation of one pipeline to a Markdown document.
///
/// The documentation consists of:
/// - the pipeline name and, if present, its description
/// - one list entry per activity with its type, description, dependencies
///   and, for Copy activities, the source SQL query
/// - a Mermaid diagram of activities and dependencies
/// - a table of pipeline parameters, if the pipeline declares any
///
/// The output document is opened (and created) first. The whole section is
/// rendered before anything is written, so an unreadable or incomplete
/// pipeline leaves the document untouched. Running this twice appends the
/// section twice; existing content is never merged or replaced.
///
/// # Errors
///
/// Returns a `GenerateError` if:
/// - The output document cannot be opened or written
/// - The pipeline file cannot be read or is not a valid pipeline document
/// - A Copy activity has no source query, or a dependency has no condition
pub fn generate_pipeline_docs(options: &GenerateOptions) -> GenerateResult<()> {
    let mut sink = MarkdownSink::open_append(&options.markdown_file)?;

    info!("reading {}", options.pipeline_file.display());
    let pipeline = load_pipeline(&options.pipeline_file)?;

    let markdown =
        render_pipeline(&pipeline, &options.config).map_err(|source| GenerateError::Render {
            pipeline: pipeline.name.clone(),
            source,
        })?;

    sink.append(&markdown)?;
    debug!("appended {} bytes to {}", markdown.len(), sink.path().display());
    sink.finish()?;

    Ok(())
}
