// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration and validation

use anyhow::{Result, Context};
use std::env;
use std::path::PathBuf;
use tracing::{info, warn};
use url::Url;

use super::{ClientConfig, FeedbackConfig};
use crate::constants::env_config;

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading client configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenv::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = ClientConfig {
            base_url: env_config::base_url(),
            connect_timeout_secs: env_config::connect_timeout_secs(),
            request_timeout_secs: env_config::request_timeout_secs(),
            log_bodies: env_var_or("FITTRACK_LOG_BODIES", "true")?.parse()
                .context("Invalid FITTRACK_LOG_BODIES value")?,
            session_file: env::var("FITTRACK_SESSION_FILE").ok().map(PathBuf::from),
            feedback: FeedbackConfig {
                sound_enabled: env_var_or("FITTRACK_SOUND", "true")?.parse()
                    .context("Invalid FITTRACK_SOUND value")?,
                vibration_enabled: env_var_or("FITTRACK_VIBRATION", "true")?.parse()
                    .context("Invalid FITTRACK_VIBRATION value")?,
            },
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .with_context(|| format!("Invalid base URL: {}", self.base_url))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(anyhow::anyhow!("Base URL must use http or https, got {}", url.scheme()));
        }

        if url.scheme() == "http" && url.host_str() != Some("localhost") && url.host_str() != Some("127.0.0.1") {
            warn!("Backend {} is reached over plain http; tokens travel unencrypted", self.base_url);
        }

        if self.connect_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(anyhow::anyhow!("Timeouts must be greater than zero"));
        }

        Ok(())
    }

    /// Base URL guaranteed to end with `/`, so relative endpoint paths join
    /// under it instead of replacing its last segment
    pub fn normalized_base_url(&self) -> Result<Url> {
        let mut base = self.base_url.trim().to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        Url::parse(&base).with_context(|| format!("Invalid base URL: {}", self.base_url))
    }

    /// Get a summary of the configuration for logging
    pub fn summary(&self) -> String {
        format!(
            "Fittrack Client Configuration:\n\
             - Backend: {}\n\
             - Timeouts: connect {}s, request {}s\n\
             - Body logging: {}\n\
             - Session file: {}\n\
             - Sound: {}\n\
             - Vibration: {}",
            self.base_url,
            self.connect_timeout_secs,
            self.request_timeout_secs,
            if self.log_bodies { "Enabled" } else { "Disabled" },
            self.session_path().display(),
            if self.feedback.sound_enabled { "Enabled" } else { "Disabled" },
            if self.feedback.vibration_enabled { "Enabled" } else { "Disabled" },
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> Result<String> {
    Ok(env::var(key).unwrap_or_else(|_| default.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = ClientConfig::with_base_url("ftp://example.com/");
        assert!(config.validate().is_err());

        config.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://example.com/api/".to_string();
        assert!(config.validate().is_ok());

        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_normalized_base_url_adds_slash() {
        let config = ClientConfig::with_base_url("https://example.com/api");
        let url = config.normalized_base_url().unwrap();
        assert_eq!(url.as_str(), "https://example.com/api/");
        assert_eq!(
            url.join("auth.php").unwrap().as_str(),
            "https://example.com/api/auth.php"
        );
    }

    #[test]
    fn test_summary_mentions_backend() {
        let config = ClientConfig::with_base_url("https://example.com/api/");
        let summary = config.summary();
        assert!(summary.contains("https://example.com/api/"));
        assert!(summary.contains("connect 30s"));
    }
}
