// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Configuration management for the workout tracking client

pub mod environment;

use anyhow::{Result, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{defaults, limits};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend base URL; endpoint paths are joined onto it
    pub base_url: String,
    /// TCP/TLS connect timeout in seconds
    pub connect_timeout_secs: u64,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Log request and response bodies at debug level
    pub log_bodies: bool,
    /// Where the login session is persisted between runs
    pub session_file: Option<PathBuf>,
    /// Workout feedback preferences
    pub feedback: FeedbackConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FeedbackConfig {
    pub sound_enabled: bool,
    pub vibration_enabled: bool,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            vibration_enabled: true,
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_string(),
            connect_timeout_secs: limits::CONNECT_TIMEOUT_SECS,
            request_timeout_secs: limits::REQUEST_TIMEOUT_SECS,
            log_bodies: true,
            session_file: None,
            feedback: FeedbackConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Configuration pointing at a specific backend, other values default
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Load from a TOML file, or from the environment when the file is absent
    pub fn load(path: Option<String>) -> Result<Self> {
        let config_path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);

        if config_path.exists() {
            let content = fs::read_to_string(&config_path)
                .context("Failed to read config file")?;
            let config: ClientConfig = toml::from_str(&content)
                .context("Failed to parse config file")?;
            config.validate()?;
            Ok(config)
        } else {
            Self::from_env()
        }
    }

    pub fn save(&self, path: Option<String>) -> Result<()> {
        let config_path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);

        let parent = Path::new(&config_path).parent()
            .context("Invalid config path")?;
        fs::create_dir_all(parent)?;

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }

    /// `<config dir>/fittrack/config.toml`
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join(defaults::CONFIG_DIR).join(defaults::CONFIG_FILE))
            .unwrap_or_else(|| PathBuf::from(defaults::CONFIG_FILE))
    }

    /// Session file location, defaulting under the user's data directory
    pub fn session_path(&self) -> PathBuf {
        self.session_file.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|p| p.join(defaults::CONFIG_DIR).join(defaults::SESSION_FILE))
                .unwrap_or_else(|| PathBuf::from(defaults::SESSION_FILE))
        })
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_temp_config_file(content: &str) -> (TempDir, String) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, content).expect("Failed to write temp config");
        (temp_dir, config_path.to_string_lossy().to_string())
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, defaults::BASE_URL);
        assert_eq!(config.connect_timeout(), Duration::from_secs(30));
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.feedback.sound_enabled);
    }

    #[test]
    fn test_config_load_from_file() {
        let (_temp_dir, config_path) = create_temp_config_file(
            r#"
base_url = "https://staging.example.com/api/"
request_timeout_secs = 10
session_file = "/tmp/fittrack-session.json"

[feedback]
vibration_enabled = false
"#,
        );

        let config = ClientConfig::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(config.base_url, "https://staging.example.com/api/");
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.connect_timeout_secs, 30);
        assert_eq!(config.session_path(), PathBuf::from("/tmp/fittrack-session.json"));
        assert!(config.feedback.sound_enabled);
        assert!(!config.feedback.vibration_enabled);
    }

    #[test]
    fn test_config_load_invalid_toml() {
        let (_temp_dir, config_path) = create_temp_config_file("this is not valid toml [[[");

        let result = ClientConfig::load(Some(config_path));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_config_save_creates_directory() {
        let config = ClientConfig::with_base_url("http://localhost:8000/");
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let nested_path = temp_dir.path().join("nested").join("config.toml");
        let nested_path_str = nested_path.to_string_lossy().to_string();

        config.save(Some(nested_path_str.clone())).expect("Failed to save config");
        assert!(nested_path.exists());

        let loaded = ClientConfig::load(Some(nested_path_str)).expect("Failed to load saved config");
        assert_eq!(loaded.base_url, "http://localhost:8000/");
    }
}
