//! Settings Management
//!
//! This module handles persistent configuration storage using TOML format.
//!
//! # Configuration File
//!
//! Settings are stored in `~/.config/docdeck/config.toml`:
//!
//! ```toml
//! api_url = "https://d2k9qfl3ab.execute-api.us-east-1.amazonaws.com/v1"
//! api_type = "AWS Serverless"
//! log_level = "info"
//! log_to_file = true
//! ```
//!
//! The path can be overridden with the `DOCDECK_CONFIG` environment variable
//! (tilde-expanded).
//!
//! # Persistence
//!
//! Settings are loaded on application startup with sensible defaults. The
//! API endpoint defaults below exist so the dashboard works out of the box
//! against the production deployment; pointing it elsewhere is a config
//! change, not a code change.
//!
//! # Validation
//!
//! - `api_url` must be an HTTP(S) URL; anything else falls back to the default
//! - `api_type` must be non-empty
//! - `log_level` must be one of trace/debug/info/warn/error

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Default base URL of the API backend
pub const DEFAULT_API_URL: &str = "https://d2k9qfl3ab.execute-api.us-east-1.amazonaws.com/v1";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the API backend
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// API backend label ("AWS Serverless", "custom", ...)
    #[serde(default = "default_api_type")]
    pub api_type: String,

    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Also write logs to a daily rolling file
    #[serde(default = "default_log_to_file")]
    pub log_to_file: bool,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_api_type() -> String {
    crate::session::model::DEFAULT_API_TYPE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_to_file() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_type: default_api_type(),
            log_level: default_log_level(),
            log_to_file: default_log_to_file(),
        }
    }
}

impl Settings {
    /// Get the config file path
    ///
    /// `DOCDECK_CONFIG` overrides the platform default. Platform-specific
    /// paths:
    /// - macOS: ~/Library/Application Support/docdeck/config.toml
    /// - Linux: ~/.config/docdeck/config.toml
    /// - Windows: %APPDATA%\docdeck\config.toml
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Ok(custom) = std::env::var("DOCDECK_CONFIG") {
            let expanded = shellexpand::tilde(&custom);
            return Ok(PathBuf::from(expanded.as_ref()));
        }

        #[cfg(target_os = "macos")]
        let config_dir = dirs::home_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("Library")
            .join("Application Support")
            .join("docdeck");

        #[cfg(not(target_os = "macos"))]
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join("docdeck");

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).map_err(|e| ConfigError::WriteFailed {
                path: config_dir.clone(),
                reason: e.to_string(),
            })?;
        }

        Ok(config_dir.join("config.toml"))
    }

    /// Load settings from the config file
    ///
    /// If no config file exists, creates one with default settings. If the
    /// config file is malformed, backs it up, logs a warning, and falls back
    /// to defaults.
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                tracing::error!("Failed to get config path: {}, using defaults", e);
                Settings::default()
            }
        }
    }

    /// Load settings from an explicit path
    pub fn load_from(path: &Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(contents) => match toml::from_str::<Settings>(&contents) {
                    Ok(mut settings) => {
                        tracing::info!("Loaded settings from {:?}", path);
                        settings.validate();
                        return settings;
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Failed to parse settings file {:?}: {}. Using defaults and backing up old file.",
                            path, e
                        );

                        let backup_path = path.with_extension("toml.backup");
                        if let Err(backup_err) = fs::rename(path, &backup_path) {
                            tracing::error!("Failed to backup corrupted config: {}", backup_err);
                        } else {
                            tracing::info!("Backed up corrupted config to {:?}", backup_path);
                        }
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        "Failed to read settings file {:?}: {}, using defaults",
                        path,
                        e
                    );
                }
            }
        } else {
            tracing::info!("No settings file found at {:?}, creating default config", path);
        }

        let default_settings = Settings::default();
        if let Err(e) = default_settings.save_to(path) {
            tracing::error!("Failed to save default settings: {}", e);
        }
        default_settings
    }

    /// Save settings to the config file
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save settings to an explicit path
    ///
    /// Uses atomic write (write to temp file then rename) to prevent
    /// corruption.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, &contents).map_err(|e| ConfigError::WriteFailed {
            path: temp_path.clone(),
            reason: e.to_string(),
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Validate and fix any out-of-range settings
    pub fn validate(&mut self) {
        let url_ok = self.api_url.starts_with("http://") || self.api_url.starts_with("https://");
        if !url_ok {
            tracing::warn!(
                "api_url is not an HTTP(S) URL ({:?}), using default",
                self.api_url
            );
            self.api_url = default_api_url();
        }

        if self.api_type.trim().is_empty() {
            tracing::warn!("api_type is empty, using default");
            self.api_type = default_api_type();
        }

        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            tracing::warn!("Unknown log_level {:?}, using \"info\"", self.log_level);
            self.log_level = default_log_level();
        }
    }
}
