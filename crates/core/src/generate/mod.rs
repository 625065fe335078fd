//! Appending a pipeline's documentation to a Markdown document.
//!
//! # Example
//!
//! ```no_run
//! use adfdoc_core::generate::{generate_pipeline_docs, GenerateOptions};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let options = GenerateOptions::new("pipeline/DailyLoad.json", "docs/pipelines.md");
//! generate_pipeline_docs(&options)?;
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod generator;

// Re-export commonly used types for convenience
pub use error::{GenerateError, GenerateResult};
pub use generator::{generate_pipeline_docs, GenerateOptions};
