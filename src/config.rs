use crate::domain::VersionTuple;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "mkversion.toml";

/// File name looked up in the user's config directory
pub const USER_CONFIG_FILE: &str = ".mkversion.toml";

/// Represents the complete configuration for mkversion.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub trunk: TrunkConfig,
}

/// Returns the default trunk branch name.
fn default_trunk_branch() -> String {
    "master".to_string()
}

/// Returns the default version assumed by the trunk.
fn default_trunk_version() -> String {
    "3".to_string()
}

/// Configuration for the main development line.
///
/// The trunk branch carries no version in its name, so it is assigned
/// `version` and always treated as a development branch.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TrunkConfig {
    #[serde(default = "default_trunk_branch")]
    pub branch: String,

    #[serde(default = "default_trunk_version")]
    pub version: String,
}

impl Default for TrunkConfig {
    fn default() -> Self {
        TrunkConfig {
            branch: default_trunk_branch(),
            version: default_trunk_version(),
        }
    }
}

impl TrunkConfig {
    /// Parse the configured trunk version, e.g. `"3"` -> `(3, None, None, None)`
    pub fn version_tuple(&self) -> Result<VersionTuple> {
        self.version.parse()
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `mkversion.toml` in current directory
/// 3. `.mkversion.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        fs::read_to_string(LOCAL_CONFIG_FILE)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(USER_CONFIG_FILE);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
