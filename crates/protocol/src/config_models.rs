//! Global configuration models for the optional `adfdoc.toml` file.
//!
//! This module defines the settings that tune how pipeline documents are
//! rendered to Markdown.

use serde::Deserialize;
use serde::Serialize;

/// Text written for parameter values that are absent or `null`.
pub const DEFAULT_MISSING_VALUE: &str = "None";

/// Represents global settings from `adfdoc.toml`.
///
/// # Example
///
/// ```toml
/// # adfdoc.toml
/// missing-value = "-"
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub struct GlobalConfig {
    /// Text rendered in the parameter table when a parameter has no
    /// `defaultValue` (or it is `null`), or no `type`.
    ///
    /// Defaults to `None`, which keeps generated documents identical to
    /// those produced by earlier releases of the documentation tooling.
    #[serde(default = "default_missing_value")]
    pub missing_value: String,
}

fn default_missing_value() -> String {
    DEFAULT_MISSING_VALUE.to_string()
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            missing_value: default_missing_value(),
        }
    }
}
