use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseCheckError, Result};
use crate::manifest::DEFAULT_MANIFEST_PATH;

/// Represents the complete configuration for release-check.
///
/// Contains the manifest location, an optional installed-version pin,
/// download settings, and behavior options.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: String,

    #[serde(default)]
    pub installed_version: Option<String>,

    #[serde(default)]
    pub download: DownloadConfig,

    #[serde(default)]
    pub behavior: BehaviorConfig,
}

fn default_manifest() -> String {
    DEFAULT_MANIFEST_PATH.to_string()
}

/// Configuration for where downloaded packages are stored.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct DownloadConfig {
    #[serde(default)]
    pub dir: Option<String>,
}

/// Configuration for behavior customization.
///
/// Controls runtime behavior of release-check without affecting version
/// comparison or selection.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct BehaviorConfig {
    #[serde(default)]
    pub skip_confirmation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            installed_version: None,
            download: DownloadConfig::default(),
            behavior: BehaviorConfig::default(),
        }
    }
}

impl Config {
    /// Resolve the directory downloaded packages land in.
    ///
    /// Precedence: explicit override (CLI), then the configured download
    /// directory, then the user cache directory, then `./downloads` as a
    /// last resort.
    pub fn download_dir(&self, override_dir: Option<&str>) -> PathBuf {
        if let Some(dir) = override_dir {
            return PathBuf::from(dir);
        }
        if let Some(dir) = &self.download.dir {
            return PathBuf::from(dir);
        }
        match dirs::cache_dir() {
            Some(cache) => cache.join("release-check"),
            None => PathBuf::from("./downloads"),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasecheck.toml` in current directory
/// 3. `~/.config/.releasecheck.toml` in user config directory
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
    } else if Path::new("./releasecheck.toml").exists() {
        fs::read_to_string("./releasecheck.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasecheck.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| ReleaseCheckError::config(format!("Invalid configuration: {}", e)))?;
    Ok(config)
}
