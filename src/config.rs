use crate::error::{Result, VersionDeterminerError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "version-determiner.toml";

/// File name looked up in the user config directory.
pub const USER_CONFIG_FILE: &str = ".version-determiner.toml";

/// Represents the complete configuration for version-determiner.
///
/// Every section is optional; the defaults ask Maven for the project version
/// and render tags with a `v` prefix.
#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub format: FormatConfig,
}

/// Returns the default build-tool program.
fn default_program() -> String {
    "mvn".to_string()
}

/// Returns the default build-tool arguments printing the bare project version.
fn default_args() -> Vec<String> {
    vec![
        "help:evaluate".to_string(),
        "-Dexpression=project.version".to_string(),
        "-q".to_string(),
        "-DforceStdout".to_string(),
    ]
}

/// Configuration of the command that prints the current version.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SourceConfig {
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default = "default_args")]
    pub args: Vec<String>,

    #[serde(default)]
    pub working_dir: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        SourceConfig {
            program: default_program(),
            args: default_args(),
            working_dir: None,
        }
    }
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

/// Configuration for output rendering.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FormatConfig {
    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        FormatConfig {
            tag_prefix: default_tag_prefix(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `version-determiner.toml` in current directory
/// 3. `.version-determiner.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed, or the custom path is missing
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    match locate_config(config_path) {
        Some(path) => read_config(&path),
        None => Ok(Config::default()),
    }
}

fn locate_config(config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = config_path {
        return Some(PathBuf::from(path));
    }

    let local = Path::new(".").join(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

fn read_config(path: &Path) -> Result<Config> {
    let config_str = fs::read_to_string(path).map_err(|e| {
        VersionDeterminerError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    toml::from_str(&config_str).map_err(|e| {
        VersionDeterminerError::config(format!("Cannot parse {}: {}", path.display(), e))
    })
}
