//! Configuration model.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_BASE_URL: &str = "http://localhost:8080/api/v1";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Catalog API configuration.
    #[serde(default)]
    pub api: ApiConfig,
}

/// Catalog API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the catalog API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// Apply `MOVIE_CATALOG_API_URL` and `MOVIE_CATALOG_TIMEOUT` overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var("MOVIE_CATALOG_API_URL") {
            if !url.is_empty() {
                self.base_url = url;
            }
        }
        if let Some(timeout) = std::env::var("MOVIE_CATALOG_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.timeout_secs = timeout;
        }
        self
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

/// Get the configuration directory path.
pub fn dirs_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("movie_catalog")
}

/// Load configuration from a specific file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| crate::Error::Config(e.to_string()))
}

/// Load configuration from the default location, with environment overrides.
///
/// A missing or unreadable file falls back to defaults.
pub fn load_config() -> Config {
    let config_path = dirs_config_path().join("config.toml");

    let mut config = if config_path.exists() {
        match load_config_from(&config_path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Ignoring config {}: {}", config_path.display(), e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    config.api = config.api.with_env_overrides();
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_config_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"https://catalog.example.com/api/v1\"\ntimeout_secs = 5\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.api.base_url, "https://catalog.example.com/api/v1");
        assert_eq!(config.api.timeout_secs, 5);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[api]\ntimeout_secs = 10\n").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        assert!(matches!(
            load_config_from(&path),
            Err(crate::Error::Config(_))
        ));
    }
}
