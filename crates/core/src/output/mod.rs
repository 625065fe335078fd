//! Append-only access to the Markdown output document.

pub mod error;
pub mod sink;

pub use error::{OutputError, OutputResult};
pub use sink::MarkdownSink;
