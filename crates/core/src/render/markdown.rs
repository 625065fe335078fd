//! Markdown templates for a pipeline's documentation section.
//!
//! The exact spacing of every template is relied on by tooling that diffs
//! generated documents, so changes here change the output format.

use crate::render::diagram::MermaidDiagram;
use crate::render::error::{RenderError, RenderResult};
use adfdoc_protocol::config_models::GlobalConfig;
use adfdoc_protocol::pipeline_models::{Activity, CopySource, Parameter, Pipeline};
use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

const SQL_READER_QUERY_FIELD: &str = "typeProperties.source.sqlReaderQuery.value";

/// Renders the documentation section for one pipeline.
///
/// The returned text is meant to be appended to an existing Markdown
/// document; it starts with blank lines that separate it from whatever
/// precedes it.
///
/// # Errors
///
/// Returns `RenderError` when a Copy activity has no source query, or a
/// dependency has no dependency condition.
pub fn render_pipeline(pipeline: &Pipeline, config: &GlobalConfig) -> RenderResult<String> {
    let mut md = String::new();
    let properties = &pipeline.properties;

    md.push_str(&format!("\n\n ## {} \n", pipeline.name));

    if let Some(description) = &properties.description {
        md.push_str(&format!("\n **Description:** {description} \n"));
        md.push_str("\n\n ### Steps \n");
    }

    let mut diagram = MermaidDiagram::new();
    for activity in &properties.activities {
        debug!(activity = %activity.name, kind = %activity.activity_type, "rendering activity");
        render_activity(&mut md, &mut diagram, activity)?;
    }

    md.push_str("\n\n ### Activities Diagram \n");
    md.push_str(&format!("\n {}", diagram.to_block()));

    if let Some(parameters) = &properties.parameters {
        render_parameters(&mut md, parameters, config);
    }

    Ok(md)
}

fn render_activity(
    md: &mut String,
    diagram: &mut MermaidDiagram,
    activity: &Activity,
) -> RenderResult<()> {
    let name = &activity.name;
    md.push_str(&format!("\n - **Name:** {name} \n"));
    md.push_str(&format!("\n   **Type:** {} \n", activity.activity_type));

    diagram.add_node(name);

    if let Some(description) = &activity.description {
        md.push_str(&format!("\n   **Description:** {description} \n"));
    }

    if !activity.depends_on.is_empty() {
        md.push_str("\n   **Dependencies:**");
        for dependency in &activity.depends_on {
            let condition = dependency.dependency_conditions.first().ok_or_else(|| {
                RenderError::EmptyDependencyConditions {
                    activity: name.clone(),
                    dependency: dependency.activity.clone(),
                }
            })?;
            let target = &dependency.activity;
            let link = anchor(target);
            md.push_str(&format!("\n   * [{target}]({link}) ({condition}) \n"));
            diagram.add_edge(target, name);
        }
    }

    if activity.is_copy() {
        let source = copy_source(activity)?;
        md.push_str(&format!("\n   **Data Source Type:** {} \n", source.source_type));
        md.push_str("\n   **SQL Statement:**  \n");
        md.push_str("\n   ```sql");
        for line in source.sql_reader_query.text().lines() {
            md.push_str(&format!("\n   {line}"));
        }
        md.push_str("\n   ```");
    }

    Ok(())
}

fn render_parameters(
    md: &mut String,
    parameters: &IndexMap<String, Parameter>,
    config: &GlobalConfig,
) {
    md.push_str("\n\n ### Parameters \n");
    md.push_str("\n | Name | Type | Default Value |");
    md.push_str("\n |---|---|---|");

    let missing = config.missing_value.as_str();
    for (name, parameter) in parameters {
        let parameter_type = parameter.parameter_type.as_deref().unwrap_or(missing);
        let default_value = value_text(parameter.default_value.as_ref(), missing);
        md.push_str(&format!("\n |{name}|{parameter_type}|{default_value}|"));
    }
}

/// Link target for an activity's list entry: `#` plus the name with spaces
/// turned into hyphens.
pub fn anchor(activity_name: &str) -> String {
    format!("#{}", activity_name.replace(' ', "-"))
}

/// Text for a parameter value: strings verbatim, `null` or absent as the
/// configured missing-value token, anything else as compact JSON.
pub fn value_text(value: Option<&Value>, missing: &str) -> String {
    match value {
        None | Some(Value::Null) => missing.to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

/// Decodes `typeProperties.source` of a Copy activity.
fn copy_source(activity: &Activity) -> RenderResult<CopySource> {
    let missing = |field: &'static str| RenderError::MissingField {
        activity: activity.name.clone(),
        field,
    };

    let source = activity
        .type_properties
        .as_ref()
        .and_then(|properties| properties.get("source"))
        .ok_or_else(|| missing("typeProperties.source"))?;

    if source.get("type").is_none() {
        return Err(missing("typeProperties.source.type"));
    }

    match source.get("sqlReaderQuery") {
        None | Some(Value::Null) => return Err(missing(SQL_READER_QUERY_FIELD)),
        Some(query) if query.is_object() && query.get("value").is_none() => {
            return Err(missing(SQL_READER_QUERY_FIELD))
        }
        Some(_) => {}
    }

    serde_json::from_value(source.clone()).map_err(|source| RenderError::InvalidField {
        activity: activity.name.clone(),
        field: "typeProperties.source",
        source,
    })
}
