//! Error types for loading `adfdoc.toml`.
//!
//! A config path that does not exist is not an error (the loader falls back
//! to the defaults), so only read and parse failures are represented here.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read, e.g. it is a
    /// directory or not readable by the current user.
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid TOML, or a setting has the wrong type
    /// (`missing-value` must be a string).
    #[error("Failed to parse TOML file at {path}: {source}")]
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
