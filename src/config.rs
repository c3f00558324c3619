use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{Result, VersionBumpError};

/// File name looked up in the working directory and the user config directory
pub const CONFIG_FILE_NAME: &str = "version-bump.toml";

/// Represents the complete configuration for version-bump.
///
/// Every value is optional; a pipeline input that is not blank always wins over the file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Project-level fallbacks for pipeline inputs.
///
/// Only settings that describe the project belong here; per-run values such as the
/// branch name or the latest versions always come from the pipeline.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub strategy: Option<String>,

    #[serde(default)]
    pub version_prefix: Option<String>,

    #[serde(default)]
    pub additional_name: Option<String>,

    #[serde(default)]
    pub mainline_versioning_branches: Option<String>,
}

/// Parse configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config> {
    Ok(toml::from_str(content)?)
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter (must exist)
/// 2. `version-bump.toml` in current directory
/// 3. `version-bump.toml` in user config directory
/// 4. Default (empty) configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If the file exists but cannot be read or parsed, or a custom path is missing
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => {
            if !path.is_file() {
                return Err(VersionBumpError::config(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            Some(path.to_path_buf())
        }
        None => discover_config(),
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading config file");
            let content = fs::read_to_string(&path)?;
            parse_config(&content).map_err(|e| {
                VersionBumpError::config(format!("{}: {}", path.display(), e))
            })
        }
        None => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .filter(|path| path.is_file())
}
