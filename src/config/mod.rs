use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;

/// Analysis thresholds, all expressed in hours of sleep per night.
/// Defaults follow the common 7-9h guideline with an 8h debt target.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_target_hours")]
    pub target_hours: f64,
    #[serde(default = "default_short_sleep")]
    pub short_sleep_threshold: f64,
    #[serde(default = "default_oversleep")]
    pub oversleep_threshold: f64,
    #[serde(default = "default_consistency")]
    pub consistency_threshold: f64,
}

fn default_target_hours() -> f64 {
    8.0
}
fn default_short_sleep() -> f64 {
    7.0
}
fn default_oversleep() -> f64 {
    9.0
}
fn default_consistency() -> f64 {
    1.5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target_hours: default_target_hours(),
            short_sleep_threshold: default_short_sleep(),
            oversleep_threshold: default_oversleep(),
            consistency_threshold: default_consistency(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("napmap")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".napmap")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("napmap.conf")
    }

    /// Load configuration from `override_path` (if given) or the standard
    /// location; missing file falls back to defaults.
    pub fn load(override_path: Option<&str>) -> AppResult<Self> {
        let path = match override_path {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        };

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Write the configuration to `override_path` or the standard location,
    /// creating the config directory when missing.
    pub fn save(&self, override_path: Option<&str>) -> AppResult<PathBuf> {
        let path = match override_path {
            Some(p) => crate::utils::path::expand_tilde(p),
            None => Self::config_file(),
        };

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        fs::write(&path, yaml)?;
        Ok(path)
    }
}
