//! Pipeline document models for Data Factory `pipeline/*.json` files.
//!
//! Only the parts of a pipeline document that end up in generated
//! documentation are modelled; every other field is ignored on decode.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Activity type whose source query is included in the documentation.
pub const COPY_ACTIVITY_TYPE: &str = "Copy";

/// A full pipeline document.
///
/// # Example
///
/// ```json
/// {
///   "name": "Daily Load",
///   "properties": {
///     "description": "Loads the daily sales extract",
///     "activities": [
///       { "name": "Load Data", "type": "Copy", "dependsOn": [], "typeProperties": {
///           "source": {
///             "type": "SqlSource",
///             "sqlReaderQuery": { "value": "SELECT 1", "type": "Expression" }
///           } } }
///     ],
///     "parameters": { "windowStart": { "type": "String", "defaultValue": "2021-01-01" } }
///   }
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Pipeline {
    /// Pipeline name, used as the section heading.
    pub name: String,

    /// Everything below the `properties` key.
    pub properties: PipelineProperties,
}

/// The `properties` section of a pipeline document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PipelineProperties {
    /// Free-form pipeline description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Activities in document order.
    pub activities: Vec<Activity>,

    /// Pipeline parameters keyed by name.
    ///
    /// Iteration order is the order in which parameters appear in the
    /// document. `None` when the document has no `parameters` key, which is
    /// rendered differently from an empty mapping.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameters: Option<IndexMap<String, Parameter>>,
}

/// One step of a pipeline.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    /// Activity name, unique within its pipeline.
    pub name: String,

    /// Activity type, e.g. `Copy`, `ExecutePipeline`, `Lookup`.
    #[serde(rename = "type")]
    pub activity_type: String,

    /// A JSON `null` decodes to `None` and is not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Activities that must finish before this one runs.
    #[serde(default)]
    pub depends_on: Vec<Dependency>,

    /// Type-specific settings, kept undecoded.
    ///
    /// Their shape depends on `activity_type`; only Copy activities are
    /// inspected, see [`CopySource`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_properties: Option<serde_json::Value>,
}

impl Activity {
    /// Returns true when this is a Copy activity.
    pub fn is_copy(&self) -> bool {
        self.activity_type == COPY_ACTIVITY_TYPE
    }
}

/// A dependency edge to an earlier activity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dependency {
    /// Name of the activity depended upon.
    pub activity: String,

    /// Outcomes of `activity` under which the dependent activity proceeds,
    /// e.g. `Succeeded`. Only the first one is documented.
    pub dependency_conditions: Vec<String>,
}

/// The `typeProperties.source` section of a Copy activity.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CopySource {
    /// Source dataset kind, e.g. `AzureSqlSource`.
    #[serde(rename = "type")]
    pub source_type: String,

    pub sql_reader_query: SqlReaderQuery,
}

/// A source query, either as an expression object or a literal string.
///
/// Data Factory writes `{"value": "...", "type": "Expression"}` for
/// parameterised queries and a bare string otherwise.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum SqlReaderQuery {
    Literal(String),
    Expression { value: String },
}

impl SqlReaderQuery {
    /// The raw SQL text.
    pub fn text(&self) -> &str {
        match self {
            SqlReaderQuery::Literal(text) => text,
            SqlReaderQuery::Expression { value } => value,
        }
    }
}

/// A pipeline parameter declaration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    /// Declared parameter type, e.g. `String`, `Int`, `Array`.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub parameter_type: Option<String>,

    /// Default value. A JSON `null` decodes to `None`, same as an absent key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<serde_json::Value>,
}
