//! # adfdoc-core
//!
//! Generates Markdown documentation from Data Factory pipeline definitions.
//!
//! This crate provides:
//! - Loading of pipeline JSON documents into typed models
//! - Rendering of a pipeline as a Markdown section with a Mermaid diagram
//! - Append-only writing of that section to an output document
//! - Configuration loading from an optional TOML file
//!
//! ## Modules
//!
//! - [`config`]: Configuration loading
//! - [`document`]: Pipeline document loading
//! - [`render`]: Markdown and Mermaid rendering
//! - [`output`]: Output document handling
//! - [`generate`]: The end-to-end "document one pipeline" operation

pub mod config;
pub mod document;
pub mod generate;
pub mod output;
pub mod render;

use std::path::Path;

pub use generate::{generate_pipeline_docs, GenerateError, GenerateOptions, GenerateResult};

/// Appends the documentation of `pipeline_file` to `markdown_file` using the
/// default configuration.
///
/// See [`generate_pipeline_docs`] for details and error conditions.
pub fn render(pipeline_file: &Path, markdown_file: &Path) -> GenerateResult<()> {
    generate_pipeline_docs(&GenerateOptions::new(pipeline_file, markdown_file))
}
