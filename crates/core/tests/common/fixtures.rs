//! Test fixtures for sample pipeline documents.

use std::path::PathBuf;
use tempfile::TempDir;

/// A pipeline exercising every rendered section: description, a Copy
/// activity, a dependency and parameters (one without a default).
pub const SALES_PIPELINE: &str = r#"{
  "name": "Daily Sales",
  "properties": {
    "description": "Loads the daily sales extract",
    "activities": [
      {
        "name": "Load Data",
        "type": "Copy",
        "dependsOn": [],
        "typeProperties": {
          "source": {
            "type": "AzureSqlSource",
            "sqlReaderQuery": { "value": "SELECT 1", "type": "Expression" }
          },
          "sink": { "type": "ParquetSink" }
        }
      },
      {
        "name": "Refresh Model",
        "type": "ExecutePipeline",
        "description": "Kicks off the model refresh",
        "dependsOn": [
          { "activity": "Load Data", "dependencyConditions": ["Succeeded"] }
        ]
      }
    ],
    "parameters": {
      "windowStart": { "type": "String", "defaultValue": "2021-01-01" },
      "windowEnd": { "type": "String" }
    }
  }
}"#;

/// A pipeline with no description, no activities and no parameters.
pub const EMPTY_PIPELINE: &str = r#"{ "name": "Empty", "properties": { "activities": [] } }"#;

/// A temporary directory holding one pipeline file and a path for the
/// Markdown output.
///
/// The `TempDir` must be kept alive for the test duration.
pub struct TestProject {
    #[allow(dead_code)]
    pub dir: TempDir,
    pub pipeline_file: PathBuf,
    pub markdown_file: PathBuf,
}

/// Create a temporary project with `pipeline_json` written to
/// `pipeline.json`. The Markdown output file is not created.
pub fn create_test_project(pipeline_json: &str) -> std::io::Result<TestProject> {
    let dir = tempfile::tempdir()?;
    let pipeline_file = dir.path().join("pipeline.json");
    let markdown_file = dir.path().join("pipelines.md");

    std::fs::write(&pipeline_file, pipeline_json)?;

    Ok(TestProject {
        dir,
        pipeline_file,
        markdown_file,
    })
}

/// Read the Markdown output of a project.
pub fn read_markdown(project: &TestProject) -> String {
    std::fs::read_to_string(&project.markdown_file).expect("Failed to read markdown output")
}
