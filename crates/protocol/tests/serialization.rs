use adfdoc_protocol::*;

#[test]
fn test_pipeline_deserialization_from_json() {
    // Trimmed export of a real Data Factory pipeline
    let json_str = r#"
{
  "name": "Daily Sales Load",
  "properties": {
    "description": "Loads the daily sales extract into the warehouse",
    "activities": [
      {
        "name": "Load Data",
        "type": "Copy",
        "dependsOn": [],
        "policy": { "timeout": "7.00:00:00", "retry": 0 },
        "typeProperties": {
          "source": {
            "type": "AzureSqlSource",
            "sqlReaderQuery": { "value": "SELECT * FROM sales", "type": "Expression" },
            "queryTimeout": "02:00:00"
          },
          "sink": { "type": "ParquetSink" }
        }
      },
      {
        "name": "Refresh Model",
        "type": "ExecutePipeline",
        "description": "Triggers the downstream refresh",
        "dependsOn": [
          { "activity": "Load Data", "dependencyConditions": ["Succeeded"] }
        ],
        "typeProperties": {
          "pipeline": { "referenceName": "Refresh", "type": "PipelineReference" }
        }
      }
    ],
    "parameters": {
      "windowStart": { "type": "String", "defaultValue": "2021-01-01" },
      "batchSize": { "type": "Int", "defaultValue": 500 }
    },
    "annotations": []
  }
}
"#;

    let pipeline: Pipeline =
        serde_json::from_str(json_str).expect("Failed to deserialize Pipeline");

    assert_eq!(pipeline.name, "Daily Sales Load");
    assert_eq!(
        pipeline.properties.description.as_deref(),
        Some("Loads the daily sales extract into the warehouse")
    );
    assert_eq!(pipeline.properties.activities.len(), 2);

    let copy = &pipeline.properties.activities[0];
    assert!(copy.is_copy());
    assert!(copy.depends_on.is_empty());
    assert!(copy.description.is_none());

    let execute = &pipeline.properties.activities[1];
    assert!(!execute.is_copy());
    assert_eq!(execute.activity_type, "ExecutePipeline");
    assert_eq!(
        execute.depends_on,
        vec![Dependency {
            activity: "Load Data".to_string(),
            dependency_conditions: vec!["Succeeded".to_string()],
        }]
    );

    let parameters = pipeline.properties.parameters.expect("parameters should be present");
    assert_eq!(parameters.len(), 2);
}

#[test]
fn test_parameters_keep_document_order() {
    let json_str = r#"{
        "name": "p",
        "properties": {
            "activities": [],
            "parameters": {
                "zeta": { "type": "String" },
                "alpha": { "type": "String" },
                "mid": { "type": "String" }
            }
        }
    }"#;

    let pipeline: Pipeline =
        serde_json::from_str(json_str).expect("Failed to deserialize Pipeline");
    let names: Vec<&str> = pipeline
        .properties
        .parameters
        .as_ref()
        .expect("parameters should be present")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[test]
fn test_parameter_null_default_is_none() {
    let parameter: Parameter = serde_json::from_str(r#"{ "type": "String", "defaultValue": null }"#)
        .expect("Failed to deserialize Parameter");
    assert_eq!(parameter.parameter_type.as_deref(), Some("String"));
    assert!(parameter.default_value.is_none());

    let parameter: Parameter =
        serde_json::from_str(r#"{ "type": "Bool" }"#).expect("Failed to deserialize Parameter");
    assert!(parameter.default_value.is_none());
}

#[test]
fn test_missing_dependency_list_defaults_to_empty() {
    let activity: Activity = serde_json::from_str(r#"{ "name": "Wait", "type": "Wait" }"#)
        .expect("Failed to deserialize Activity");
    assert!(activity.depends_on.is_empty());
    assert!(activity.type_properties.is_none());
}

#[test]
fn test_null_descriptions_decode_as_absent() {
    let pipeline: Pipeline = serde_json::from_str(
        r#"{ "name": "p", "properties": { "description": null, "activities": [
            { "name": "Wait", "type": "Wait", "description": null }
        ] } }"#,
    )
    .expect("Failed to deserialize Pipeline");

    assert!(pipeline.properties.description.is_none());
    assert!(pipeline.properties.activities[0].description.is_none());
}

#[test]
fn test_missing_activities_is_an_error() {
    let result: Result<Pipeline, _> =
        serde_json::from_str(r#"{ "name": "p", "properties": {} }"#);
    let err = result.expect_err("activities is required");
    assert!(err.to_string().contains("missing field `activities`"), "got: {err}");
}

#[test]
fn test_missing_name_is_an_error() {
    let result: Result<Pipeline, _> =
        serde_json::from_str(r#"{ "properties": { "activities": [] } }"#);
    let err = result.expect_err("name is required");
    assert!(err.to_string().contains("missing field `name`"), "got: {err}");
}

#[test]
fn test_sql_reader_query_forms() {
    let expression: CopySource = serde_json::from_str(
        r#"{ "type": "SqlSource",
             "sqlReaderQuery": { "value": "SELECT 1", "type": "Expression" } }"#,
    )
    .expect("Failed to deserialize CopySource");
    assert_eq!(expression.source_type, "SqlSource");
    assert_eq!(expression.sql_reader_query.text(), "SELECT 1");

    let literal: CopySource =
        serde_json::from_str(r#"{ "type": "SqlSource", "sqlReaderQuery": "SELECT 2" }"#)
            .expect("Failed to deserialize CopySource");
    assert_eq!(literal.sql_reader_query.text(), "SELECT 2");
}

#[test]
fn test_global_config_defaults() {
    let config: GlobalConfig = toml::from_str("").expect("Failed to deserialize GlobalConfig");
    assert_eq!(config, GlobalConfig::default());
    assert_eq!(config.missing_value, DEFAULT_MISSING_VALUE);

    let config: GlobalConfig =
        toml::from_str(r#"missing-value = "-""#).expect("Failed to deserialize GlobalConfig");
    assert_eq!(config.missing_value, "-");
}
