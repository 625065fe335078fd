//! Loader for Data Factory pipeline JSON files.

use crate::document::error::{DocumentError, DocumentResult};
use adfdoc_protocol::pipeline_models::Pipeline;
use std::path::Path;

/// Reads and decodes a pipeline document.
///
/// # Errors
///
/// Returns `DocumentError::FileRead` if the file cannot be read and
/// `DocumentError::JsonParse` if it is not a well-formed pipeline document
/// (including when `name` or `properties.activities` is missing).
///
/// # Example
///
/// ```rust,no_run
/// use adfdoc_core::document::load_pipeline;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let pipeline = load_pipeline(Path::new("pipeline/DailyLoad.json"))?;
/// println!("{} has {} activities", pipeline.name, pipeline.properties.activities.len());
/// # Ok(())
/// # }
/// ```
pub fn load_pipeline(path: &Path) -> DocumentResult<Pipeline> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_pipeline(path, &content)
}

/// Decodes pipeline JSON that has already been read.
///
/// `path` is only used for error reporting.
pub fn parse_pipeline(path: &Path, content: &str) -> DocumentResult<Pipeline> {
    serde_json::from_str(content).map_err(|source| DocumentError::JsonParse {
        path: path.to_path_buf(),
        source,
    })
}
