//! Pipeline document loading.
//!
//! Reads a Data Factory pipeline JSON file into the typed model from
//! [`adfdoc_protocol::pipeline_models`].

pub mod error;
pub mod loader;

pub use error::{DocumentError, DocumentResult};
pub use loader::{load_pipeline, parse_pipeline};
