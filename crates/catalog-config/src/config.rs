//! Configuration management for the catalog client.

use crate::{CoreError, CoreResult, Paths};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Default API base URL (can be overridden at compile time via CATALOG_API_URL).
pub const DEFAULT_API_URL: &str = match option_env!("CATALOG_API_URL") {
    Some(url) => url,
    None => "http://localhost:6412",
};

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Transport timeout for a single HTTP exchange.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Pause before the single retry after a 401.
pub const DEFAULT_RETRY_DELAY_MS: u64 = 300;

/// Pause between a session-expired notice and the redirect to login.
pub const DEFAULT_REDIRECT_DELAY_MS: u64 = 1_500;

/// Prefix the fallback search card appends the encoded query to.
pub const DEFAULT_SEARCH_ENGINE_URL: &str = "https://www.google.com/search?q=";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Base URL of the catalog API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
    #[serde(default = "default_redirect_delay_ms")]
    pub redirect_delay_ms: u64,
    #[serde(default = "default_search_engine_url")]
    pub search_engine_url: String,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_retry_delay_ms() -> u64 {
    DEFAULT_RETRY_DELAY_MS
}

fn default_redirect_delay_ms() -> u64 {
    DEFAULT_REDIRECT_DELAY_MS
}

fn default_search_engine_url() -> String {
    DEFAULT_SEARCH_ENGINE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            api_url: default_api_url(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            retry_delay_ms: DEFAULT_RETRY_DELAY_MS,
            redirect_delay_ms: DEFAULT_REDIRECT_DELAY_MS,
            search_engine_url: default_search_engine_url(),
        }
    }
}

impl Config {
    /// Load the config file if present, then apply environment overrides.
    pub fn load(paths: &Paths) -> CoreResult<Self> {
        let config_path = paths.config_file();

        let mut config = if config_path.exists() {
            Self::load_from_file(&config_path)?
        } else {
            Self::default()
        };

        config.load_from_env();
        config.validate()?;
        tracing::debug!(
            path = %config_path.display(),
            api_url = %config.api_url,
            "configuration loaded"
        );

        Ok(config)
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// `CATALOG_API_URL` and `CATALOG_LOG_LEVEL` win over the file.
    fn load_from_env(&mut self) {
        if let Some(api_url) = non_empty_env("CATALOG_API_URL") {
            self.api_url = api_url;
        }
        if let Some(log_level) = non_empty_env("CATALOG_LOG_LEVEL") {
            self.log_level = log_level;
        }
    }

    /// Reject values the gateway cannot work with.
    pub fn validate(&self) -> CoreResult<()> {
        let url = self.api_url()?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(CoreError::Config(format!(
                "api_url must be http or https, got {}",
                url.scheme()
            )));
        }
        if self.request_timeout_ms == 0 {
            return Err(CoreError::Config(
                "request_timeout_ms must be greater than zero".to_string(),
            ));
        }
        Url::parse(&self.search_engine_url)?;
        Ok(())
    }

    /// Get the API URL as a parsed URL.
    pub fn api_url(&self) -> CoreResult<Url> {
        Url::parse(&self.api_url).map_err(CoreError::from)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms)
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.retry_delay(), Duration::from_millis(300));
        assert_eq!(config.redirect_delay(), Duration::from_millis(1_500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.json");

        std::fs::write(
            &config_path,
            r#"{ "log_level": "debug", "retry_delay_ms": 50 }"#,
        )
        .unwrap();

        let config = Config::load_from_file(&config_path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.retry_delay_ms, 50);
        assert_eq!(config.redirect_delay_ms, DEFAULT_REDIRECT_DELAY_MS);
        assert_eq!(config.search_engine_url, DEFAULT_SEARCH_ENGINE_URL);
    }

    #[test]
    fn test_config_file_is_loaded_and_validated() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());
        std::fs::write(
            paths.config_file(),
            r#"{ "api_url": "https://nav.example.com", "redirect_delay_ms": 10 }"#,
        )
        .unwrap();

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.redirect_delay_ms, 10);
        assert_eq!(config.retry_delay_ms, DEFAULT_RETRY_DELAY_MS);

        std::fs::write(paths.config_file(), r#"{ "request_timeout_ms": 0 }"#).unwrap();
        assert!(matches!(Config::load(&paths), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_config_load_nonexistent_uses_defaults() {
        let dir = tempdir().unwrap();
        let paths = Paths::with_base_dir(dir.path().to_path_buf());

        let config = Config::load(&paths).unwrap();
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = Config::default();
        config.api_url = "not a valid url".to_string();
        assert!(matches!(config.validate(), Err(CoreError::InvalidUrl(_))));

        let mut config = Config::default();
        config.api_url = "ftp://nav.example.com".to_string();
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));

        let mut config = Config::default();
        config.request_timeout_ms = 0;
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_api_url_parse() {
        let config = Config::default();
        let url = config.api_url().unwrap();
        assert!(matches!(url.scheme(), "http" | "https"));
    }
}
