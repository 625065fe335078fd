//! Configuration file loader for `adfdoc.toml`.

use crate::config::error::ConfigError;
use crate::config::error::ConfigResult;
use adfdoc_protocol::config_models::GlobalConfig;
use std::path::Path;
use tracing::warn;

/// Loads the global configuration from a TOML file.
///
/// # Arguments
///
/// * `path` - Location of the config file, or `None` to use the defaults
///
/// # Returns
///
/// The parsed `GlobalConfig`. When no path is given, or the file does not
/// exist, the default configuration is returned rather than an error.
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read, or is not
/// valid TOML for `GlobalConfig`.
///
/// # Example
///
/// ```rust,no_run
/// use adfdoc_core::config::loader::load_config;
/// use std::path::Path;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Some(Path::new("adfdoc.toml")))?;
/// println!("Missing values render as {}", config.missing_value);
/// # Ok(())
/// # }
/// ```
pub fn load_config(path: Option<&Path>) -> ConfigResult<GlobalConfig> {
    let Some(config_path) = path else {
        return Ok(GlobalConfig::default());
    };

    if !config_path.exists() {
        warn!("config file {} not found, using defaults", config_path.display());
        return Ok(GlobalConfig::default());
    }

    let content =
        std::fs::read_to_string(config_path).map_err(|source| ConfigError::FileRead {
            path: config_path.to_path_buf(),
            source,
        })?;

    let config: GlobalConfig =
        toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
            path: config_path.to_path_buf(),
            source,
        })?;

    Ok(config)
}
