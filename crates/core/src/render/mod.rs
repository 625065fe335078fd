//! Markdown rendering of pipeline documents.
//!
//! - [`markdown`]: the section templates for a whole pipeline
//! - [`diagram`]: Mermaid flow diagram of activities and their dependencies

pub mod diagram;
pub mod error;
pub mod markdown;

pub use diagram::MermaidDiagram;
pub use error::{RenderError, RenderResult};
pub use markdown::render_pipeline;
