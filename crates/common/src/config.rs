use crate::error::SewnaError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_JINA_API_URL: &str = "https://api.jina.ai/v1/embeddings";
const DEFAULT_JINA_MODEL: &str = "jina-embeddings-v2-base-en";

/// Sewna application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base data directory
    pub data_dir: PathBuf,

    /// Designer catalog file
    pub catalog_path: PathBuf,

    /// Remote embedding endpoint
    pub jina_api_url: String,

    /// Remote embedding API key (provider disabled when unset)
    #[serde(default, skip_serializing)]
    pub jina_api_key: Option<String>,

    /// Remote embedding model name
    pub jina_model: String,

    /// Request timeout for the remote provider
    pub provider_timeout_secs: u64,

    /// Default number of matches returned per query
    pub match_limit: usize,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            catalog_path: PathBuf::from("./data/designers.json"),
            jina_api_url: DEFAULT_JINA_API_URL.to_string(),
            jina_api_key: None,
            jina_model: DEFAULT_JINA_MODEL.to_string(),
            provider_timeout_secs: 30,
            match_limit: 3,
            log_dir: PathBuf::from("./data/log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, SewnaError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let defaults = Self::default();
        let config = Self {
            data_dir: Self::get_env_path("DATA_DIR").unwrap_or(defaults.data_dir),
            catalog_path: Self::get_env_path("CATALOG_PATH").unwrap_or(defaults.catalog_path),
            jina_api_url: std::env::var("JINA_API_URL").unwrap_or(defaults.jina_api_url),
            jina_api_key: std::env::var("JINA_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            jina_model: std::env::var("JINA_MODEL").unwrap_or(defaults.jina_model),
            provider_timeout_secs: Self::get_env_parsed("PROVIDER_TIMEOUT_SECS")
                .unwrap_or(defaults.provider_timeout_secs),
            match_limit: Self::get_env_parsed("MATCH_LIMIT").unwrap_or(defaults.match_limit),
            log_dir: Self::get_env_path("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        };

        config.ensure_directories()?;

        Ok(config)
    }

    fn get_env_path(key: &str) -> Option<PathBuf> {
        std::env::var(key).ok().map(PathBuf::from)
    }

    fn get_env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
        std::env::var(key).ok().and_then(|s| s.trim().parse().ok())
    }

    /// Ensure required directories exist, create if not
    pub fn ensure_directories(&self) -> Result<(), SewnaError> {
        let mut dirs = vec![self.data_dir.as_path(), self.log_dir.as_path()];
        if let Some(dir) = self.catalog_path.parent().filter(|d| !d.as_os_str().is_empty()) {
            dirs.push(dir);
        }

        for dir in dirs {
            if !dir.exists() {
                std::fs::create_dir_all(dir).map_err(|e| {
                    SewnaError::config(format!(
                        "Failed to create directory {}: {}",
                        dir.display(),
                        e
                    ))
                })?;
            }
        }

        Ok(())
    }

    /// Whether a remote embedding provider is configured
    pub fn provider_enabled(&self) -> bool {
        self.jina_api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), SewnaError> {
        if !self.jina_api_url.starts_with("http://") && !self.jina_api_url.starts_with("https://") {
            return Err(SewnaError::config(
                "Embedding API URL must start with http:// or https://",
            ));
        }

        if self.match_limit == 0 {
            return Err(SewnaError::config("Match limit must be at least 1"));
        }

        if self.provider_timeout_secs == 0 {
            return Err(SewnaError::config("Provider timeout cannot be 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.match_limit, 3);
        assert_eq!(config.jina_model, "jina-embeddings-v2-base-en");
        assert!(!config.provider_enabled());
    }

    #[test]
    fn test_provider_enabled() {
        let mut config = AppConfig::default();
        config.jina_api_key = Some("   ".to_string());
        assert!(!config.provider_enabled());

        config.jina_api_key = Some("secret".to_string());
        assert!(config.provider_enabled());
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.jina_api_url = "ftp://example.com".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.match_limit = 0;
        assert!(invalid_config.validate().is_err());
    }

    #[test]
    fn test_api_key_not_serialized() {
        let mut config = AppConfig::default();
        config.jina_api_key = Some("secret".to_string());
        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("secret"));
    }
}
